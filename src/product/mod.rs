//! Product listing value type.
//!
//! A [`Product`] has no identity field: two listings with the same field values are the
//! same product as far as ranking lookups are concerned.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ValidationError;

use serde::{Deserialize, Serialize};

/// A marketplace listing as supplied by a user, a scraper or a rewriting provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub category: String,
    pub brand: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Marketplace the listing came from (e.g. "Amazon").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Position in the marketplace's own search results, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_rank: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Creates a product with the four scored fields and no marketplace metadata.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            brand: brand.into(),
            price: None,
            platform: None,
            url: None,
            market_rank: None,
            image_url: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_market_rank(mut self, rank: u32) -> Self {
        self.market_rank = Some(rank);
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Returns a copy with a replaced description (used to score rewrites).
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    /// Rejects products with a blank required field.
    ///
    /// Description length beyond "non-empty" is the caller's concern.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
            ("brand", &self.brand),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField { field });
            }
        }

        if let Some(price) = self.price
            && (!price.is_finite() || price < 0.0)
        {
            return Err(ValidationError::InvalidPrice { price });
        }

        Ok(())
    }

    /// `"{title} {description}"`, the text scanned by trigger tables.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Description length in characters (not bytes).
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}

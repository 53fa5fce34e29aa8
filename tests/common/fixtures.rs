//! Test fixtures for integration tests.

use visibility::product::Product;

pub const DEFAULT_TITLE: &str = "Acme X1 Wireless Earbuds";

pub const DEFAULT_DESCRIPTION: &str = "Compact wireless earbuds with a charging case.";

pub const DEFAULT_CATEGORY: &str = "Earbuds";

pub const DEFAULT_BRAND: &str = "Acme";

/// A long, structured listing that exercises every completeness concept.
pub const RICH_DESCRIPTION: &str = "Premium quality earbuds engineered for professional \
    performance. Features: active noise cancelling (ANC), bluetooth 5.3 with LDAC, \
    fast charging that gives 2 hours of playtime in 10 minutes, and 32 hours total \
    battery with the case. Dimensions: 22 x 18 x 24 mm, weight 5 grams per earbud. \
    Brushed aluminum case with silicone tips in three sizes. Ideal for commuting, \
    workouts and calls; certified IPX5. Package included: earbuds, case, USB-C cable. \
    Backed by a 2 year warranty.";

#[derive(Default)]
pub struct ProductBuilder {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    brand: Option<String>,
    price: Option<f64>,
    platform: Option<String>,
    url: Option<String>,
    market_rank: Option<u32>,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn market_rank(mut self, rank: u32) -> Self {
        self.market_rank = Some(rank);
        self
    }

    pub fn with_rich_description(mut self) -> Self {
        self.description = Some(RICH_DESCRIPTION.to_string());
        self
    }

    pub fn build(self) -> Product {
        let mut product = Product::new(
            self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            self.description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            self.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            self.brand.unwrap_or_else(|| DEFAULT_BRAND.to_string()),
        );
        product.price = self.price;
        product.platform = self.platform;
        product.url = self.url;
        product.market_rank = self.market_rank;
        product
    }
}

/// A mixed cohort of earbuds listings, from sparse to rich.
pub fn earbuds_cohort() -> Vec<Product> {
    vec![
        ProductBuilder::new()
            .title("Generic Earbuds")
            .brand("NoName")
            .description("Earbuds. Good sound.")
            .platform("eBay")
            .market_rank(1)
            .build(),
        ProductBuilder::new()
            .with_rich_description()
            .platform("Amazon")
            .market_rank(3)
            .build(),
        ProductBuilder::new()
            .title("Beats Studio Buds")
            .brand("Beats")
            .description("Quality earbuds with great design and top features for daily use.")
            .platform("Amazon")
            .market_rank(2)
            .build(),
    ]
}

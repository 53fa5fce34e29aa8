//! Probe-query generation.
//!
//! Expands a product's category and brand into the natural-language queries used as
//! semantic-relevance probes. Pure: same product and templates, same queries.

#[cfg(test)]
mod tests;

use crate::config::ConfigError;
use crate::product::Product;

/// Filler for the `{use_case}` slot.
pub const USE_CASE_FILLER: &str = "daily use";

/// Filler for the `{feature}` slot.
pub const FEATURE_FILLER: &str = "best features";

/// Slot names a template may reference.
pub const TEMPLATE_SLOTS: [&str; 4] = ["category", "brand", "use_case", "feature"];

/// Renders configured templates plus the fixed category/brand queries.
#[derive(Debug, Clone)]
pub struct QueryGenerator {
    templates: Vec<String>,
}

impl QueryGenerator {
    /// Builds a generator, rejecting templates with unknown slots or unbalanced braces.
    pub fn new(templates: Vec<String>) -> Result<Self, ConfigError> {
        for template in &templates {
            validate_template(template)?;
        }
        Ok(Self { templates })
    }

    /// Template queries in configured order, followed by four fixed queries.
    pub fn generate(&self, product: &Product) -> Result<Vec<String>, ConfigError> {
        let mut queries = Vec::with_capacity(self.templates.len() + 4);

        for template in &self.templates {
            queries.push(render_template(template, |slot| match slot {
                "category" => Some(product.category.as_str()),
                "brand" => Some(product.brand.as_str()),
                "use_case" => Some(USE_CASE_FILLER),
                "feature" => Some(FEATURE_FILLER),
                _ => None,
            })?);
        }

        queries.push(product.category.clone());
        queries.push(format!("{} {}", product.brand, product.category));
        queries.push(format!("best {}", product.category));
        queries.push(format!("top {} brands", product.category));

        Ok(queries)
    }
}

/// Checks that a template only uses known slots and has balanced braces.
pub fn validate_template(template: &str) -> Result<(), ConfigError> {
    render_template(template, |slot| {
        TEMPLATE_SLOTS.contains(&slot).then_some("")
    })
    .map(|_| ())
}

/// Substitutes `{slot}` occurrences using `resolve`. `{{` and `}}` render as literal
/// braces.
fn render_template<'a, F>(template: &str, resolve: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let malformed = || ConfigError::MalformedTemplate {
        template: template.to_string(),
    };

    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
            continue;
        }
        if tail.starts_with('}') {
            return Err(malformed());
        }

        let after = &tail[1..];
        let close = after.find('}').ok_or_else(malformed)?;
        let slot = &after[..close];
        if slot.contains('{') {
            return Err(malformed());
        }

        let value = resolve(slot).ok_or_else(|| ConfigError::UnresolvedSlot {
            template: template.to_string(),
            slot: slot.to_string(),
        })?;
        out.push_str(value);
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

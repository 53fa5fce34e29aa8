use crate::config::ScoringConfig;
use crate::features::{MISSING_SPEC_CHECKLIST, missing_tags};
use crate::product::Product;

use super::types::{ScoreBreakdown, WeaknessAnalysis};

/// Keywords a description is expected to mention.
pub const RECOMMENDED_KEYWORDS: [&str; 4] = ["quality", "features", "benefits", "use case"];

pub const ISSUE_TOO_SHORT: &str = "Description too short";

pub const SUGGEST_EXPAND: &str = "Expand description with more details";
pub const SUGGEST_SEMANTIC: &str = "Add more context about product use cases and benefits";
pub const SUGGEST_COMPLETENESS: &str = "Add specifications and technical details";
pub const SUGGEST_READABILITY: &str = "Simplify language for better readability";

/// Runs the weakness checklist. Independent of the composite; only the breakdown
/// thresholds feed into suggestions.
pub fn analyze_weaknesses(
    product: &Product,
    breakdown: &ScoreBreakdown,
    config: &ScoringConfig,
) -> WeaknessAnalysis {
    let description = product.description.to_lowercase();
    let mut analysis = WeaknessAnalysis {
        missing_specs: missing_tags(MISSING_SPEC_CHECKLIST, &description)
            .into_iter()
            .map(str::to_string)
            .collect(),
        missing_keywords: RECOMMENDED_KEYWORDS
            .iter()
            .filter(|keyword| !description.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect(),
        ..Default::default()
    };

    if product.description_len() < config.min_description_length {
        analysis.clarity_issues.push(ISSUE_TOO_SHORT.to_string());
        analysis.suggestions.push(SUGGEST_EXPAND.to_string());
    }

    let threshold = config.weakness_threshold;
    if breakdown.semantic_relevance < threshold {
        analysis.suggestions.push(SUGGEST_SEMANTIC.to_string());
    }
    if breakdown.keyword_coverage < threshold {
        analysis
            .suggestions
            .push(format!("Include more keywords related to {}", product.category));
    }
    if breakdown.completeness < threshold {
        analysis.suggestions.push(SUGGEST_COMPLETENESS.to_string());
    }
    if breakdown.readability < threshold {
        analysis.suggestions.push(SUGGEST_READABILITY.to_string());
    }

    analysis
}

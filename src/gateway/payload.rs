use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::scoring::{ScoreBreakdown, WeaknessAnalysis};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalysisResponse {
    pub product: Product,
    pub ai_visibility_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub weakness_analysis: WeaknessAnalysis,
    /// First few probe queries used for semantic relevance.
    pub generated_queries: Vec<String>,
}

/// Subject plus competitor listings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CohortRequest {
    pub product: Product,
    #[serde(default)]
    pub competitors: Vec<Product>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RescoreRequest {
    pub product: Product,
    pub rewritten_description: String,
}

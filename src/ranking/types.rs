use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::scoring::ScoreBreakdown;

/// One product's position in a ranked cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProduct {
    pub product: Product,
    /// Composite visibility score.
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Dense, 1-based.
    pub rank: usize,
    /// Marketplace search position copied from the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RankedProduct {
    /// `market_rank - rank`; positive when the product ranks better here than on the
    /// marketplace.
    pub fn rank_delta(&self) -> Option<i64> {
        self.market_rank
            .map(|market_rank| i64::from(market_rank) - self.rank as i64)
    }
}

/// Ranking of a subject against its competitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortRanking {
    pub your_product: RankedProduct,
    pub all_products: Vec<RankedProduct>,
    pub total_products: usize,
}

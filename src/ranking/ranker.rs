use std::sync::Arc;

use tracing::debug;

use crate::product::Product;
use crate::scoring::{ScoreReport, VisibilityScorer};

use super::error::RankingError;
use super::types::{CohortRanking, RankedProduct};

/// A scored cohort entry awaiting its rank.
struct Scored {
    index: usize,
    product: Product,
    report: ScoreReport,
}

/// Scores cohorts and orders them by composite score.
#[derive(Debug, Clone)]
pub struct Ranker {
    scorer: Arc<VisibilityScorer>,
}

impl Ranker {
    pub fn new(scorer: Arc<VisibilityScorer>) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &Arc<VisibilityScorer> {
        &self.scorer
    }

    /// Scores every product and returns them best first, with dense 1-based ranks.
    ///
    /// Equal scores keep their input order.
    pub fn rank(&self, cohort: &[Product]) -> Result<Vec<RankedProduct>, RankingError> {
        let scored = cohort
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let report = self
                    .scorer
                    .score(product)
                    .map_err(|source| RankingError::Scoring { index, source })?;
                Ok(Scored {
                    index,
                    product: product.clone(),
                    report,
                })
            })
            .collect::<Result<Vec<_>, RankingError>>()?;

        Ok(assign_ranks(scored))
    }

    /// Ranks `[subject] + competitors` and picks out the subject.
    ///
    /// The subject is the first ranked entry structurally equal to it. Exact duplicates of
    /// the subject score identically and sort after it, so this is the subject's own entry.
    pub fn rank_against_cohort(
        &self,
        subject: &Product,
        competitors: &[Product],
    ) -> Result<CohortRanking, RankingError> {
        let cohort: Vec<Product> = std::iter::once(subject.clone())
            .chain(competitors.iter().cloned())
            .collect();

        let ranked = self.rank(&cohort)?;
        cohort_ranking(subject, ranked)
    }

    /// Same result as [`rank`](Self::rank), with each product scored on the blocking pool.
    pub async fn rank_concurrent(
        &self,
        cohort: Vec<Product>,
    ) -> Result<Vec<RankedProduct>, RankingError> {
        let handles: Vec<_> = cohort
            .into_iter()
            .enumerate()
            .map(|(index, product)| {
                let scorer = Arc::clone(&self.scorer);
                tokio::task::spawn_blocking(move || {
                    let report = scorer.score(&product);
                    (index, product, report)
                })
            })
            .collect();

        debug!(cohort_size = handles.len(), "Scoring cohort concurrently");

        // Every handle is awaited so no scoring outlives the call; the first failure in
        // input order is reported.
        let mut scored = Vec::with_capacity(handles.len());
        let mut first_error = None;
        for handle in handles {
            match handle.await {
                Ok((index, product, Ok(report))) => scored.push(Scored {
                    index,
                    product,
                    report,
                }),
                Ok((index, _, Err(source))) => {
                    first_error.get_or_insert(RankingError::Scoring { index, source });
                }
                Err(e) => {
                    first_error.get_or_insert(RankingError::TaskJoin(e));
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(assign_ranks(scored)),
        }
    }

    /// Concurrent counterpart of [`rank_against_cohort`](Self::rank_against_cohort).
    pub async fn rank_against_cohort_concurrent(
        &self,
        subject: &Product,
        competitors: &[Product],
    ) -> Result<CohortRanking, RankingError> {
        let cohort: Vec<Product> = std::iter::once(subject.clone())
            .chain(competitors.iter().cloned())
            .collect();

        let ranked = self.rank_concurrent(cohort).await?;
        cohort_ranking(subject, ranked)
    }
}

fn assign_ranks(mut scored: Vec<Scored>) -> Vec<RankedProduct> {
    scored.sort_by(|a, b| {
        b.report
            .score
            .total_cmp(&a.report.score)
            .then(a.index.cmp(&b.index))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(position, entry)| RankedProduct {
            score: entry.report.score,
            breakdown: entry.report.breakdown,
            rank: position + 1,
            market_rank: entry.product.market_rank,
            platform: entry.product.platform.clone(),
            url: entry.product.url.clone(),
            product: entry.product,
        })
        .collect()
}

fn cohort_ranking(
    subject: &Product,
    ranked: Vec<RankedProduct>,
) -> Result<CohortRanking, RankingError> {
    let your_product = ranked
        .iter()
        .find(|entry| entry.product == *subject)
        .cloned()
        .ok_or(RankingError::SubjectNotFound)?;

    debug!(
        rank = your_product.rank,
        total = ranked.len(),
        score = your_product.score,
        "Ranked subject against cohort"
    );

    Ok(CohortRanking {
        total_products: ranked.len(),
        your_product,
        all_products: ranked,
    })
}

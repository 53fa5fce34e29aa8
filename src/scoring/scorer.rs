use std::sync::Arc;

use tracing::debug;

use crate::config::ScoringConfig;
use crate::constants::{
    BRAND_IN_TITLE_BONUS, COMPLETENESS_CONCEPT_WEIGHT, COMPLETENESS_KEYWORD_WEIGHT,
    COMPLETENESS_LENGTH_WEIGHT, COMPLETENESS_STRUCTURE_BONUS, COMPLETENESS_TARGET_LENGTH,
    SEMANTIC_FULL_SCALE_SIMILARITY, SEMANTIC_MAX_CHUNK_WEIGHT, SEMANTIC_MEAN_CHUNK_WEIGHT,
    clamp_score, has_structure_markers, round2,
};
use crate::embedding::TextEmbedder;
use crate::features::{COMPLETENESS_CONCEPTS, matching_tags};
use crate::hashing::product_fingerprint;
use crate::product::Product;
use crate::queries::QueryGenerator;

use super::error::ScoringError;
use super::readability::readability_score;
use super::types::{ProductAnalysis, RewriteComparison, ScoreBreakdown, ScoreReport, WeaknessAnalysis};
use super::weakness::analyze_weaknesses;

/// Generic e-commerce terms counted by keyword coverage, next to the category and brand.
pub const IMPORTANT_KEYWORDS: [&str; 11] = [
    "quality",
    "premium",
    "best",
    "top",
    "features",
    "specifications",
    "performance",
    "technology",
    "design",
    "professional",
    "benefits",
];

/// Multi-signal visibility scorer.
///
/// Built once and shared; every method is a pure function of its input, the config and
/// the embedder.
pub struct VisibilityScorer {
    embedder: Arc<dyn TextEmbedder>,
    config: ScoringConfig,
    queries: QueryGenerator,
}

impl std::fmt::Debug for VisibilityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityScorer")
            .field("embedding_dim", &self.embedder.dimension())
            .field("stub_embedder", &self.embedder.is_stub())
            .field("config", &self.config)
            .finish()
    }
}

impl VisibilityScorer {
    /// Validates `config` and builds the query generator from its templates.
    pub fn new(embedder: Arc<dyn TextEmbedder>, config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        let queries = QueryGenerator::new(config.query_templates.clone())?;

        Ok(Self {
            embedder,
            config,
            queries,
        })
    }

    /// Scorer with [`ScoringConfig::default`].
    pub fn with_defaults(embedder: Arc<dyn TextEmbedder>) -> Result<Self, ScoringError> {
        Self::new(embedder, ScoringConfig::default())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn embedder(&self) -> &Arc<dyn TextEmbedder> {
        &self.embedder
    }

    pub fn generate_queries(&self, product: &Product) -> Result<Vec<String>, ScoringError> {
        Ok(self.queries.generate(product)?)
    }

    /// Validates, generates probe queries and computes the breakdown and composite.
    pub fn score(&self, product: &Product) -> Result<ScoreReport, ScoringError> {
        product.validate()?;

        let queries = self.generate_queries(product)?;
        let breakdown = self.breakdown(product, &queries)?;
        let score = self.config.weights.composite(&breakdown);

        debug!(
            product = product_fingerprint(product),
            score,
            semantic = breakdown.semantic_relevance,
            keyword = breakdown.keyword_coverage,
            completeness = breakdown.completeness,
            readability = breakdown.readability,
            "Scored product"
        );

        Ok(ScoreReport {
            score,
            breakdown,
            queries,
        })
    }

    /// Sub-scores for an already validated product.
    pub fn breakdown(
        &self,
        product: &Product,
        queries: &[String],
    ) -> Result<ScoreBreakdown, ScoringError> {
        Ok(ScoreBreakdown {
            semantic_relevance: self.semantic_relevance(product, queries)?,
            keyword_coverage: self.keyword_coverage(product),
            completeness: self.completeness(product),
            readability: self.readability(product),
        })
    }

    /// [`score`](Self::score) plus the weakness checklist.
    pub fn analyze(&self, product: &Product) -> Result<ProductAnalysis, ScoringError> {
        let report = self.score(product)?;
        let weaknesses = self.analyze_weaknesses(product, &report.breakdown);

        Ok(ProductAnalysis {
            score: report.score,
            breakdown: report.breakdown,
            weaknesses,
            queries: report.queries,
        })
    }

    pub fn analyze_weaknesses(
        &self,
        product: &Product,
        breakdown: &ScoreBreakdown,
    ) -> WeaknessAnalysis {
        analyze_weaknesses(product, breakdown, &self.config)
    }

    /// Scores `product` and a copy carrying `rewritten_description`.
    pub fn rescore_rewrite(
        &self,
        product: &Product,
        rewritten_description: &str,
    ) -> Result<RewriteComparison, ScoringError> {
        let original = self.score(product)?;
        let rewritten = self.score(&product.with_description(rewritten_description))?;
        let delta = round2(rewritten.score - original.score);

        debug!(
            product = product_fingerprint(product),
            original = original.score,
            rewritten = rewritten.score,
            delta,
            "Rescored rewritten description"
        );

        Ok(RewriteComparison {
            original_score: original.score,
            rewritten_score: rewritten.score,
            delta,
            original_breakdown: original.breakdown,
            rewritten_breakdown: rewritten.breakdown,
        })
    }

    /// Chunked similarity of `"{title}. {description}"` against the probe queries.
    ///
    /// Each chunk's value is its mean similarity over all queries; the chunk values are
    /// blended as `0.8 * max + 0.2 * mean` and rescaled so 0.6 maps to 100. The brand
    /// bonus applies when the brand occurs in the title, case-insensitively.
    pub fn semantic_relevance(
        &self,
        product: &Product,
        queries: &[String],
    ) -> Result<f64, ScoringError> {
        let text = format!("{}. {}", product.title, product.description);
        let words: Vec<&str> = text.split_whitespace().collect();

        if words.is_empty() || queries.is_empty() {
            return Ok(0.0);
        }

        let query_refs: Vec<&str> = queries.iter().map(String::as_str).collect();
        let mut chunk_means = Vec::with_capacity(words.len().div_ceil(self.config.chunk_size));

        for chunk in words.chunks(self.config.chunk_size) {
            let similarities = self.embedder.batch_similarity(&chunk.join(" "), &query_refs)?;
            chunk_means.push(mean(similarities.iter().map(|&s| s as f64)));
        }

        let max = chunk_means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let blended =
            SEMANTIC_MAX_CHUNK_WEIGHT * max + SEMANTIC_MEAN_CHUNK_WEIGHT * mean(chunk_means.iter().copied());

        let mut score = blended / SEMANTIC_FULL_SCALE_SIMILARITY * 100.0;
        let brand_in_title = product
            .title
            .to_lowercase()
            .contains(&product.brand.to_lowercase());
        if brand_in_title {
            score += BRAND_IN_TITLE_BONUS;
        }

        debug!(
            chunks = chunk_means.len(),
            max_chunk = max,
            blended,
            brand_in_title,
            "Semantic relevance"
        );

        Ok(clamp_score(score))
    }

    /// Share of important terms (category, brand, generic terms) found in the description.
    pub fn keyword_coverage(&self, product: &Product) -> f64 {
        let description = product.description.to_lowercase();
        let category = product.category.to_lowercase();
        let brand = product.brand.to_lowercase();

        let found = usize::from(description.contains(&category))
            + usize::from(description.contains(&brand))
            + IMPORTANT_KEYWORDS
                .iter()
                .filter(|term| description.contains(*term))
                .count();
        let total = IMPORTANT_KEYWORDS.len() + 2;

        clamp_score(found as f64 / total as f64 * 100.0)
    }

    /// Concept coverage, completeness keywords and description length, plus a bonus for
    /// structured descriptions.
    pub fn completeness(&self, product: &Product) -> f64 {
        let text = product.combined_text().to_lowercase();

        let present = matching_tags(COMPLETENESS_CONCEPTS, &text).len();
        let concept_score = present as f64 / COMPLETENESS_CONCEPTS.len() as f64 * 100.0;

        let length_score =
            (product.description_len() as f64 / COMPLETENESS_TARGET_LENGTH * 100.0).min(100.0);

        let keywords = &self.config.completeness_keywords;
        let keyword_hits = keywords
            .iter()
            .filter(|keyword| text.contains(&keyword.to_lowercase()))
            .count();
        let keyword_score = keyword_hits as f64 / keywords.len() as f64 * 100.0;

        let mut score = COMPLETENESS_CONCEPT_WEIGHT * concept_score
            + COMPLETENESS_KEYWORD_WEIGHT * keyword_score
            + COMPLETENESS_LENGTH_WEIGHT * length_score;
        if has_structure_markers(&product.description) {
            score += COMPLETENESS_STRUCTURE_BONUS;
        }

        clamp_score(score)
    }

    pub fn readability(&self, product: &Product) -> f64 {
        let (score, metric) = readability_score(&product.description);
        if !metric.is_available() {
            debug!("Readability metric unavailable, using neutral score");
        }
        score
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

//! Cohort ranking through the public API.

mod common;

use std::sync::Arc;

use common::fixtures::{ProductBuilder, earbuds_cohort};
use visibility::embedding::{MockEmbedder, SentenceEmbedder};
use visibility::ranking::{Ranker, RankingError};
use visibility::scoring::VisibilityScorer;

fn stub_ranker() -> Ranker {
    let scorer = VisibilityScorer::with_defaults(Arc::new(SentenceEmbedder::stub().unwrap()))
        .unwrap();
    Ranker::new(Arc::new(scorer))
}

fn mock_ranker() -> Ranker {
    let scorer = VisibilityScorer::with_defaults(Arc::new(MockEmbedder::new(0.3))).unwrap();
    Ranker::new(Arc::new(scorer))
}

#[test]
fn test_rank_is_non_increasing_and_dense() {
    let ranked = stub_ranker().rank(&earbuds_cohort()).unwrap();

    assert_eq!(ranked.len(), 3);
    for (position, entry) in ranked.iter().enumerate() {
        assert_eq!(entry.rank, position + 1);
    }
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_rich_listing_outranks_sparse_listing() {
    let ranked = mock_ranker().rank(&earbuds_cohort()).unwrap();

    assert_eq!(ranked[0].product.brand, "Acme");
    assert_eq!(ranked[0].rank_delta(), Some(2));

    let sparse = ranked.iter().find(|r| r.product.brand == "NoName").unwrap();
    assert!(sparse.score < ranked[0].score);
}

#[test]
fn test_equal_scores_keep_input_order() {
    let a = ProductBuilder::new().platform("Amazon").price(49.0).build();
    let b = ProductBuilder::new().platform("Flipkart").price(45.0).build();

    let ranked = stub_ranker().rank(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!((ranked[0].rank, &ranked[0].product), (1, &a));
    assert_eq!((ranked[1].rank, &ranked[1].product), (2, &b));
}

#[test]
fn test_cohort_subject_lookup() {
    let mut cohort = earbuds_cohort();
    let subject = cohort.remove(1);

    let ranking = mock_ranker().rank_against_cohort(&subject, &cohort).unwrap();
    assert_eq!(ranking.total_products, 3);
    assert_eq!(ranking.your_product.product, subject);
    assert_eq!(ranking.your_product.rank, 1);
    assert_eq!(ranking.your_product.market_rank, Some(3));
}

#[test]
fn test_cohort_with_duplicate_subject_returns_first_match() {
    let subject = ProductBuilder::new().build();
    let ranking = stub_ranker()
        .rank_against_cohort(&subject, &[subject.clone(), subject.clone()])
        .unwrap();

    assert_eq!(ranking.total_products, 3);
    assert_eq!(ranking.your_product.rank, 1);
    assert!(ranking.all_products.iter().all(|p| p.product == subject));
}

#[test]
fn test_invalid_competitor_fails_whole_ranking() {
    let subject = ProductBuilder::new().build();
    let invalid = ProductBuilder::new().brand(" ").build();

    let err = stub_ranker()
        .rank_against_cohort(&subject, &[invalid])
        .unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, RankingError::Scoring { index: 1, .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_ranking_matches_sequential() {
    let ranker = stub_ranker();
    let mut cohort = earbuds_cohort();
    cohort.extend(earbuds_cohort());
    cohort.push(ProductBuilder::new().with_rich_description().build());

    let sequential = ranker.rank(&cohort).unwrap();
    for _ in 0..5 {
        let concurrent = ranker.rank_concurrent(cohort.clone()).await.unwrap();
        assert_eq!(concurrent, sequential);
    }
}

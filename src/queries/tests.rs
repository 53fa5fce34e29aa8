use super::*;
use crate::config::scoring::DEFAULT_QUERY_TEMPLATES;

fn default_generator() -> QueryGenerator {
    QueryGenerator::new(DEFAULT_QUERY_TEMPLATES.iter().map(|t| t.to_string()).collect())
        .expect("default templates are valid")
}

fn headphones() -> Product {
    Product::new("WH-1000XM5", "Noise cancelling.", "Headphones", "Sony")
}

#[test]
fn test_generate_default_templates() {
    let queries = default_generator().generate(&headphones()).unwrap();

    assert_eq!(
        queries,
        vec![
            "Best Headphones for daily use",
            "Top rated Headphones",
            "Affordable Headphones",
            "Headphones with best features",
            "High quality Headphones",
            "Professional Headphones",
            "Sony Headphones review",
            "Headphones",
            "Sony Headphones",
            "best Headphones",
            "top Headphones brands",
        ]
    );
}

#[test]
fn test_generate_is_deterministic() {
    let generator = default_generator();
    let product = headphones();
    assert_eq!(
        generator.generate(&product).unwrap(),
        generator.generate(&product).unwrap()
    );
}

#[test]
fn test_empty_template_list_yields_fixed_queries() {
    let generator = QueryGenerator::new(vec![]).unwrap();
    let queries = generator.generate(&headphones()).unwrap();
    assert_eq!(queries.len(), 4);
    assert_eq!(queries[1], "Sony Headphones");
}

#[test]
fn test_repeated_slot() {
    let generator = QueryGenerator::new(vec!["{brand} vs {brand}".to_string()]).unwrap();
    let queries = generator.generate(&headphones()).unwrap();
    assert_eq!(queries[0], "Sony vs Sony");
}

#[test]
fn test_unknown_slot_is_configuration_error() {
    let result = QueryGenerator::new(vec!["{category} under {price}".to_string()]);
    match result {
        Err(ConfigError::UnresolvedSlot { template, slot }) => {
            assert_eq!(template, "{category} under {price}");
            assert_eq!(slot, "price");
        }
        other => panic!("expected UnresolvedSlot, got {other:?}"),
    }
}

#[test]
fn test_unbalanced_braces_rejected() {
    for template in ["Best {category", "Best category}", "{{category}"] {
        assert!(
            matches!(
                validate_template(template),
                Err(ConfigError::MalformedTemplate { .. })
            ),
            "template {template:?} should be malformed"
        );
    }
}

#[test]
fn test_doubled_braces_render_literally() {
    let generator =
        QueryGenerator::new(vec!["{{{brand}}} {category} {{new}}".to_string()]).unwrap();
    assert_eq!(
        generator.generate(&headphones()).unwrap()[0],
        "{Sony} Headphones {new}"
    );
}

#[test]
fn test_plain_template_passes_through() {
    assert!(validate_template("wireless earbuds").is_ok());
    let generator = QueryGenerator::new(vec!["wireless earbuds".to_string()]).unwrap();
    assert_eq!(
        generator.generate(&headphones()).unwrap()[0],
        "wireless earbuds"
    );
}

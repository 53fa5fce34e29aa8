use super::*;

fn sample() -> Product {
    Product::new(
        "Sony WH-1000XM5 Wireless Headphones",
        "Premium noise cancelling headphones with 30-hour battery life",
        "Headphones",
        "Sony",
    )
}

#[test]
fn test_new_has_no_marketplace_metadata() {
    let product = sample();
    assert!(product.price.is_none());
    assert!(product.platform.is_none());
    assert!(product.url.is_none());
    assert!(product.market_rank.is_none());
    assert!(product.image_url.is_none());
}

#[test]
fn test_validate_ok() {
    assert!(sample().validate().is_ok());
}

#[test]
fn test_validate_rejects_blank_fields() {
    let mut product = sample();
    product.brand = "   ".to_string();
    assert_eq!(
        product.validate(),
        Err(ValidationError::EmptyField { field: "brand" })
    );

    let mut product = sample();
    product.title.clear();
    assert_eq!(
        product.validate(),
        Err(ValidationError::EmptyField { field: "title" })
    );

    let mut product = sample();
    product.description.clear();
    assert_eq!(
        product.validate(),
        Err(ValidationError::EmptyField {
            field: "description"
        })
    );
}

#[test]
fn test_validate_rejects_negative_price() {
    let product = sample().with_price(-1.0);
    assert!(matches!(
        product.validate(),
        Err(ValidationError::InvalidPrice { .. })
    ));
}

#[test]
fn test_structural_equality_ignores_nothing() {
    let a = sample();
    let b = sample();
    assert_eq!(a, b);

    let c = sample().with_platform("Amazon");
    assert_ne!(a, c);
}

#[test]
fn test_with_description_keeps_other_fields() {
    let product = sample().with_market_rank(3);
    let rewritten = product.with_description("Rewritten copy");
    assert_eq!(rewritten.description, "Rewritten copy");
    assert_eq!(rewritten.title, product.title);
    assert_eq!(rewritten.market_rank, Some(3));
}

#[test]
fn test_description_len_counts_chars() {
    let product = Product::new("T", "• ok", "C", "B");
    assert_eq!(product.description_len(), 4);
}

#[test]
fn test_serde_omits_absent_fields() {
    let json = serde_json::to_value(sample()).expect("serialize");
    assert!(json.get("price").is_none());
    assert!(json.get("market_rank").is_none());

    let parsed: Product = serde_json::from_value(serde_json::json!({
        "title": "Acme X1",
        "description": "A decent gadget.",
        "category": "Gadgets",
        "brand": "Acme",
        "market_rank": 4
    }))
    .expect("deserialize");
    assert_eq!(parsed.market_rank, Some(4));
    assert!(parsed.platform.is_none());
}

use super::*;

#[test]
fn test_extract_features_headphones() {
    let features = extract_features(
        "Sony WH-1000XM5 Wireless Headphones",
        "Premium noise cancelling headphones with 30-hour battery life and LDAC. \
         Foldable design with carrying case.",
    );

    assert_eq!(
        features.tags(),
        &["wireless", "bluetooth", "noise-cancel", "battery-life", "design"]
    );
}

#[test]
fn test_extract_features_is_case_insensitive() {
    let upper = extract_features("BLUETOOTH SPEAKER", "ALUMINUM BODY");
    let lower = extract_features("bluetooth speaker", "aluminum body");
    assert_eq!(upper, lower);
    assert!(upper.contains("bluetooth"));
    assert!(upper.contains("material"));
}

#[test]
fn test_extract_features_none() {
    let features = extract_features("Desk lamp", "A lamp.");
    assert!(features.is_empty());
}

#[test]
fn test_no_stemming() {
    // "isolating" is not the trigger "isolation".
    let features = extract_features("Headphones", "Noise isolating ear cups");
    assert!(!features.contains("noise-cancel"));
}

#[test]
fn test_set_operations_keep_table_order() {
    let a = extract_features("wireless", "leather, 30 hours");
    let b = extract_features("bluetooth", "leather, foldable");

    assert_eq!(a.intersection(&b).tags(), &["material"]);
    assert_eq!(a.difference(&b).tags(), &["wireless", "battery-life"]);
    assert_eq!(b.difference(&a).tags(), &["bluetooth", "design"]);
    assert_eq!(
        a.union(&b).tags(),
        &["wireless", "bluetooth", "battery-life", "material", "design"]
    );
}

#[test]
fn test_compare_features() {
    let subject = Product::new("Acme Buds", "Wireless earbuds, 8 hours playtime", "Earbuds", "Acme");
    let competitors = vec![
        Product::new("Rival Pods", "Bluetooth 5.3 earbuds with ANC, 6 hours", "Earbuds", "Rival"),
        Product::new("Plain Buds", "Wired earbuds", "Earbuds", "Plain"),
    ];

    let report = compare_features(&subject, &competitors);

    assert_eq!(report.your_features.tags(), &["wireless", "battery-life"]);
    assert_eq!(report.comparison.len(), 2);

    let rival = &report.comparison[0];
    assert_eq!(rival.competitor, "Rival Pods");
    assert_eq!(rival.common_features.tags(), &["battery-life"]);
    assert_eq!(rival.missing_features.tags(), &["bluetooth", "noise-cancel"]);
    assert_eq!(rival.unique_features.tags(), &["wireless"]);

    let plain = &report.comparison[1];
    assert!(plain.common_features.is_empty());
    assert!(plain.missing_features.is_empty());
    assert_eq!(plain.unique_features, report.your_features);
}

#[test]
fn test_matching_and_missing_tags_partition_table() {
    let text = "Aluminum shell, 2 year warranty, 5000 mAh";
    let present = matching_tags(COMPLETENESS_CONCEPTS, text);
    let missing = missing_tags(COMPLETENESS_CONCEPTS, text);

    assert_eq!(present.len() + missing.len(), COMPLETENESS_CONCEPTS.len());
    assert!(present.contains(&"battery"));
    assert!(present.contains(&"material"));
    assert!(present.contains(&"warranty"));
    assert!(missing.contains(&"connectivity"));
}

#[test]
fn test_missing_spec_checklist_weight_needs_leading_space_for_kg() {
    let missing = missing_tags(MISSING_SPEC_CHECKLIST, "Weighs 2kg");
    assert!(missing.contains(&"weight"));

    let missing = missing_tags(MISSING_SPEC_CHECKLIST, "Weighs 2 kg");
    assert!(!missing.contains(&"weight"));
}

#[test]
fn test_serializes_as_string_list() {
    let features = extract_features("wireless", "");
    assert_eq!(
        serde_json::to_value(&features).unwrap(),
        serde_json::json!(["wireless"])
    );
}

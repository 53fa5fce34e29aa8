//! Rule-based trigger matching.
//!
//! Every table maps a tag to trigger substrings; a tag is present when any trigger is
//! contained in the lowercased text. No stemming, no synonyms beyond the lists.

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::product::Product;

/// Tag → trigger substrings (all lowercase).
pub type TriggerTable = [(&'static str, &'static [&'static str])];

/// Product features reported by [`extract_features`].
pub const FEATURE_TRIGGERS: &TriggerTable = &[
    ("wireless", &["wireless", "cordless", "wifi", "radio frequency"]),
    (
        "bluetooth",
        &["bluetooth", "bt 5", "5.0", "5.1", "5.2", "5.3", "ldac"],
    ),
    (
        "noise-cancel",
        &["noise cancel", "anc", "digital noise", "isolation", "qn1", "qn3"],
    ),
    (
        "fast-charge",
        &["fast charge", "quick charge", "pd charge", "3 min", "5 min"],
    ),
    (
        "battery-life",
        &["hours", "h playback", "runtime", "playtime", "battery"],
    ),
    (
        "material",
        &["leather", "carbon fiber", "metal", "aluminum", "fabric"],
    ),
    (
        "design",
        &["folded", "swivel", "foldable", "compact", "carrying case"],
    ),
];

/// Completeness concepts, scanned over title + description.
pub const COMPLETENESS_CONCEPTS: &TriggerTable = &[
    (
        "battery",
        &[
            "battery",
            "mah",
            "runtime",
            "hours",
            "charging",
            "powered by",
            "h playback",
            "playtime",
        ],
    ),
    (
        "dimensions",
        &["mm", "cm", "inch", "x", "folded", "compact", "size", "dimensions"],
    ),
    (
        "material",
        &[
            "leather",
            "carbon fiber",
            "plastic",
            "metal",
            "aluminum",
            "steel",
            "fabric",
            "silicone",
            "premium",
        ],
    ),
    (
        "warranty",
        &["warranty", "guarantee", "year", "month", "protection"],
    ),
    (
        "connectivity",
        &[
            "bluetooth", "wireless", "nfc", "ldac", "wifi", "cable", "jack", "aux", "5.0", "5.3",
        ],
    ),
    (
        "performance",
        &[
            "fast",
            "speed",
            "processor",
            "optimized",
            "high fidelity",
            "noise cancel",
            "hz",
            "khz",
            "anc",
        ],
    ),
];

/// Spec checklist for the weakness report, scanned over the description only.
pub const MISSING_SPEC_CHECKLIST: &TriggerTable = &[
    (
        "battery",
        &["battery", "mah", "runtime", "hours", "charging", "powered by"],
    ),
    (
        "dimensions",
        &["mm", "cm", "inch", "folded", "compact", "size"],
    ),
    ("weight", &["weight", "grams", " kg", "lbs", "lightweight"]),
    (
        "material",
        &[
            "leather",
            "carbon fiber",
            "plastic",
            "metal",
            "aluminum",
            "steel",
            "fabric",
            "silicone",
        ],
    ),
    ("warranty", &["warranty", "guarantee", "protection"]),
];

/// `true` if any trigger occurs in `haystack` (expected already lowercased).
pub fn contains_any(haystack: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| haystack.contains(trigger))
}

/// Tags from `table` with at least one trigger in `text`, in table order.
pub fn matching_tags(table: &TriggerTable, text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    table
        .iter()
        .filter(|(_, triggers)| contains_any(&lowered, triggers))
        .map(|(tag, _)| *tag)
        .collect()
}

/// Tags from `table` with no trigger in `text`, in table order.
pub fn missing_tags(table: &TriggerTable, text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    table
        .iter()
        .filter(|(_, triggers)| !contains_any(&lowered, triggers))
        .map(|(tag, _)| *tag)
        .collect()
}

/// Feature tags of one listing, kept in [`FEATURE_TRIGGERS`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(Vec<&'static str>);

impl FeatureSet {
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| *t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tags(&self) -> &[&'static str] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn intersection(&self, other: &FeatureSet) -> FeatureSet {
        self.filtered(|tag| other.contains(tag))
    }

    /// Tags in `self` but not in `other`.
    pub fn difference(&self, other: &FeatureSet) -> FeatureSet {
        self.filtered(|tag| !other.contains(tag))
    }

    pub fn union(&self, other: &FeatureSet) -> FeatureSet {
        Self::from_table_order(|tag| self.contains(tag) || other.contains(tag))
    }

    fn filtered(&self, keep: impl Fn(&str) -> bool) -> FeatureSet {
        FeatureSet(self.0.iter().copied().filter(|tag| keep(tag)).collect())
    }

    fn from_table_order(keep: impl Fn(&str) -> bool) -> FeatureSet {
        FeatureSet(
            FEATURE_TRIGGERS
                .iter()
                .map(|(tag, _)| *tag)
                .filter(|tag| keep(tag))
                .collect(),
        )
    }
}

/// Extracts feature tags from a listing's title and description.
pub fn extract_features(title: &str, description: &str) -> FeatureSet {
    FeatureSet(matching_tags(
        FEATURE_TRIGGERS,
        &format!("{title} {description}"),
    ))
}

/// Feature diff against one competitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureComparison {
    pub competitor: String,
    /// Present in both listings.
    pub common_features: FeatureSet,
    /// Competitor has, subject lacks.
    pub missing_features: FeatureSet,
    /// Subject has, competitor lacks.
    pub unique_features: FeatureSet,
}

/// Subject features plus a diff per competitor (in competitor order).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureReport {
    pub your_features: FeatureSet,
    pub comparison: Vec<FeatureComparison>,
}

pub fn compare_features(subject: &Product, competitors: &[Product]) -> FeatureReport {
    let your_features = extract_features(&subject.title, &subject.description);

    let comparison = competitors
        .iter()
        .map(|competitor| {
            let theirs = extract_features(&competitor.title, &competitor.description);
            FeatureComparison {
                competitor: competitor.title.clone(),
                common_features: your_features.intersection(&theirs),
                missing_features: theirs.difference(&your_features),
                unique_features: your_features.difference(&theirs),
            }
        })
        .collect();

    FeatureReport {
        your_features,
        comparison,
    }
}

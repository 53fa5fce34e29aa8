//! Flesch reading ease and the e-commerce remap applied on top of it.

use unicode_segmentation::UnicodeSegmentation;

use crate::constants::{
    READABILITY_NEUTRAL_SCORE, READABILITY_STRUCTURE_BONUS, clamp_score, has_structure_markers,
    round2,
};

/// Raw Flesch reading ease of a text, or `Unavailable` when the text has no words.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReadabilityMetric {
    Computed(f64),
    Unavailable,
}

impl ReadabilityMetric {
    /// Measures `text` with [`flesch_reading_ease`].
    pub fn measure(text: &str) -> Self {
        flesch_reading_ease(text)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            ReadabilityMetric::Computed(value) => Some(*value),
            ReadabilityMetric::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ReadabilityMetric::Computed(_))
    }
}

/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`, rounded to two
/// decimals.
///
/// Words are Unicode word segments; sentences are Unicode sentence segments containing at
/// least one alphanumeric character (minimum one).
pub fn flesch_reading_ease(text: &str) -> ReadabilityMetric {
    let words: Vec<&str> = text.unicode_words().collect();
    if words.is_empty() {
        return ReadabilityMetric::Unavailable;
    }

    let sentences = text
        .unicode_sentences()
        .filter(|sentence| sentence.chars().any(char::is_alphanumeric))
        .count()
        .max(1);

    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();

    let word_count = words.len() as f64;
    let words_per_sentence = word_count / sentences as f64;
    let syllables_per_word = syllables as f64 / word_count;

    ReadabilityMetric::Computed(round2(
        206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
    ))
}

/// Vowel-group syllable estimate with a silent trailing `e`. Never less than one.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();

    let mut count = 0usize;
    let mut previous_vowel = false;
    for c in lower.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    if count > 1 && lower.ends_with('e') && !lower.ends_with("le") {
        count -= 1;
    }

    count.max(1)
}

/// Maps a raw Flesch value onto the scoring scale.
///
/// Below 0 → 10; `[0, 30)` → 40..50; 30 and above → 50..100 over the 30..100 input range.
/// Not clamped.
pub fn remap_flesch(raw: f64) -> f64 {
    if raw < 0.0 {
        10.0
    } else if raw < 30.0 {
        40.0 + (raw / 30.0) * 10.0
    } else {
        50.0 + ((raw - 30.0) / 70.0) * 50.0
    }
}

/// Readability sub-score of a description.
///
/// An unavailable metric yields the neutral score with no structure bonus.
pub fn readability_score(description: &str) -> (f64, ReadabilityMetric) {
    let metric = flesch_reading_ease(description);

    let score = match metric {
        ReadabilityMetric::Computed(raw) => {
            let mut score = remap_flesch(raw);
            if has_structure_markers(description) {
                score += READABILITY_STRUCTURE_BONUS;
            }
            clamp_score(score)
        }
        ReadabilityMetric::Unavailable => READABILITY_NEUTRAL_SCORE,
    };

    (score, metric)
}

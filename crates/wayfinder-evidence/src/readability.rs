//! Readability scoring (Flesch reading ease, Flesch-Kincaid grade)

use serde::Serialize;
use std::fmt;

/// Coarse reading-ease band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityBand {
    /// Reading ease 80 and above
    Easy,
    /// Reading ease 60 to 80
    Plain,
    /// Reading ease 30 to 60
    Difficult,
    /// Reading ease below 30
    VeryDifficult,
}

impl ReadabilityBand {
    fn from_ease(ease: f64) -> Self {
        if ease >= 80.0 {
            ReadabilityBand::Easy
        } else if ease >= 60.0 {
            ReadabilityBand::Plain
        } else if ease >= 30.0 {
            ReadabilityBand::Difficult
        } else {
            ReadabilityBand::VeryDifficult
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ReadabilityBand::Easy => "easy",
            ReadabilityBand::Plain => "plain language",
            ReadabilityBand::Difficult => "difficult",
            ReadabilityBand::VeryDifficult => "very difficult",
        }
    }
}

impl fmt::Display for ReadabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Readability metrics for one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityReport {
    /// Word count
    pub words: usize,
    /// Sentence count
    pub sentences: usize,
    /// Syllable count
    pub syllables: usize,
    /// Flesch reading ease (higher is easier)
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid grade level
    pub flesch_kincaid_grade: f64,
    /// Band derived from reading ease
    pub band: ReadabilityBand,
}

impl ReadabilityReport {
    /// Whether the text reads at or below a grade level
    pub fn meets_grade(&self, grade: f64) -> bool {
        self.flesch_kincaid_grade <= grade
    }
}

/// Scores plain text with the Flesch formulas
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityScorer;

impl ReadabilityScorer {
    /// Create a scorer
    pub fn new() -> Self {
        Self
    }

    /// Score a text
    ///
    /// Text with no words scores zero on every metric.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder_evidence::ReadabilityScorer;
    ///
    /// let report = ReadabilityScorer::new().score("The cat sat on the mat.");
    /// assert_eq!(report.words, 6);
    /// assert!(report.flesch_reading_ease > 100.0);
    /// ```
    pub fn score(&self, text: &str) -> ReadabilityReport {
        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .collect();

        if words.is_empty() {
            return ReadabilityReport {
                words: 0,
                sentences: 0,
                syllables: 0,
                flesch_reading_ease: 0.0,
                flesch_kincaid_grade: 0.0,
                band: ReadabilityBand::VeryDifficult,
            };
        }

        let sentences = count_sentences(text).max(1);
        let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

        let w = words.len() as f64;
        let words_per_sentence = w / sentences as f64;
        let syllables_per_word = syllables as f64 / w;

        let ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        let grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

        ReadabilityReport {
            words: words.len(),
            sentences,
            syllables,
            flesch_reading_ease: ease,
            flesch_kincaid_grade: grade,
            band: ReadabilityBand::from_ease(ease),
        }
    }
}

/// Runs of `.`, `!` or `?` count as one sentence end
fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_terminator = false;
    for c in text.chars() {
        let terminator = matches!(c, '.' | '!' | '?');
        if terminator && !in_terminator {
            count += 1;
        }
        in_terminator = terminator;
    }
    count
}

/// Vowel groups, less a silent trailing `e`, at least one
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let v = is_vowel(c);
        if v && !prev_vowel {
            groups += 1;
        }
        prev_vowel = v;
    }

    let n = letters.len();
    let silent_e = n > 2 && letters[n - 1] == 'e' && letters[n - 2] != 'l';
    if silent_e && groups > 1 {
        groups -= 1;
    }

    groups.max(1)
}

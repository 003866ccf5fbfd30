use super::{Analyzer, ScoreResult, Tally};
use crate::config::AnalyzerConfig;
use crate::lexicon::{
    self, CALL_TO_ACTION_PATTERN, FINANCIAL_INCENTIVE_PATTERN, GENERIC_GREETING_PATTERN,
    LINK_PATTERN, PHISHING_KEYWORDS, URGENCY_PHRASES,
};

pub const TEXT_ALGORITHM: &str = "TF-IDF + DistilBERT (Simulated)";
pub const TEXT_NORMAL_REASON: &str = "Text appears legitimate";

const MIN_KEYWORDS: usize = 2;
const KEYWORDS_REPORTED: usize = 4;
const MAX_LINKS: usize = 2;
const CAPS_RATIO_LIMIT: f64 = 0.3;
const CAPS_MIN_LENGTH: usize = 20;
const SHORT_MESSAGE_LENGTH: usize = 30;

/// Lexical and statistical checks over a free-text message body.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::text_defaults())
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self { config: *config }
    }

    pub fn analyze_text(&self, text: &str) -> ScoreResult {
        let lower = text.to_lowercase();
        let length = text.encode_utf16().count();
        let mut tally = Tally::default();

        let keywords = lexicon::matching_entries(&lower, PHISHING_KEYWORDS);
        if keywords.len() > MIN_KEYWORDS {
            let shown: Vec<&str> = keywords.iter().copied().take(KEYWORDS_REPORTED).collect();
            tally.add(
                8 * keywords.len() as u32,
                format!("Phishing keywords detected: {}", shown.join(", ")),
            );
        }

        let urgency = lexicon::matching_entries(&lower, URGENCY_PHRASES);
        if let Some(first) = urgency.first() {
            tally.add(
                15 * urgency.len() as u32,
                format!("Urgency tactics: \"{}\"", first),
            );
        }

        let links = LINK_PATTERN.find_iter(text).count();
        if links > MAX_LINKS {
            tally.add(10, format!("Multiple links present ({})", links));
        }

        if CALL_TO_ACTION_PATTERN.is_match(text) {
            tally.add(15, "Suspicious call-to-action phrases".to_string());
        }

        if GENERIC_GREETING_PATTERN.is_match(text) {
            tally.add(10, "Generic greeting (not personalized)".to_string());
        }

        if FINANCIAL_INCENTIVE_PATTERN.is_match(text) {
            tally.add(12, "Financial incentive or prize mention".to_string());
        }

        if caps_ratio(text, length) > CAPS_RATIO_LIMIT && length > CAPS_MIN_LENGTH {
            tally.add(10, "Excessive capitalization".to_string());
        }

        if length < SHORT_MESSAGE_LENGTH {
            tally.add(5, "Very short message (suspicious)".to_string());
        }

        let result = tally.finish(
            self.config.threshold,
            self.config.confidence_baseline,
            TEXT_NORMAL_REASON,
            TEXT_ALGORITHM,
        );
        log::debug!(
            "text of {} UTF-16 units scored {} ({})",
            length,
            result.score,
            result.classification()
        );
        result
    }
}

/// Share of ASCII capitals over the UTF-16 length; zero for empty text.
fn caps_ratio(text: &str, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let upper = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    upper as f64 / length as f64
}

impl Analyzer for TextAnalyzer {
    fn analyze(&self, input: &str) -> ScoreResult {
        self.analyze_text(input)
    }

    fn name(&self) -> &str {
        "text"
    }
}

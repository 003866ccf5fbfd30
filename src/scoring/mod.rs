pub mod text_analyzer;
pub mod url_analyzer;

use serde::{Deserialize, Serialize};

/// Upper bound on any reported confidence.
pub const CONFIDENCE_CAP: u32 = 95;

/// Verdict produced by either analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub is_phishing: bool,
    pub score: u32,
    pub confidence: u32,
    pub reasons: Vec<String>,
    pub algorithm: String,
}

impl ScoreResult {
    pub fn classification(&self) -> &'static str {
        if self.is_phishing {
            "PHISHING"
        } else {
            "LEGITIMATE"
        }
    }

    pub fn explanation(&self) -> &'static str {
        if self.is_phishing {
            "This content shows signs of phishing. Exercise caution."
        } else {
            "This content appears legitimate based on analysis."
        }
    }
}

/// Common shape of the URL and text analyzers: string in, verdict out.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, input: &str) -> ScoreResult;
    fn name(&self) -> &str;
}

/// Running total of triggered checks.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    score: u32,
    reasons: Vec<String>,
}

impl Tally {
    pub(crate) fn add(&mut self, weight: u32, reason: String) {
        log::debug!("check triggered (+{}): {}", weight, reason);
        self.score = self.score.saturating_add(weight);
        self.reasons.push(reason);
    }

    pub(crate) fn finish(
        self,
        threshold: u32,
        confidence_baseline: u32,
        normal_reason: &str,
        algorithm: &str,
    ) -> ScoreResult {
        let reasons = if self.reasons.is_empty() {
            vec![normal_reason.to_string()]
        } else {
            self.reasons
        };

        ScoreResult {
            is_phishing: self.score >= threshold,
            score: self.score,
            confidence: confidence_for(confidence_baseline, self.score),
            reasons,
            algorithm: algorithm.to_string(),
        }
    }
}

/// Maps a score onto the bounded display confidence.
pub fn confidence_for(baseline: u32, score: u32) -> u32 {
    baseline.saturating_add(score).min(CONFIDENCE_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_capped() {
        assert_eq!(confidence_for(50, 0), 50);
        assert_eq!(confidence_for(50, 45), 95);
        assert_eq!(confidence_for(45, 1000), 95);
        assert_eq!(confidence_for(45, u32::MAX), 95);
    }

    #[test]
    fn test_empty_tally_uses_normal_reason() {
        let result = Tally::default().finish(40, 50, "all good", "Test");
        assert_eq!(result.score, 0);
        assert!(!result.is_phishing);
        assert_eq!(result.confidence, 50);
        assert_eq!(result.reasons, vec!["all good".to_string()]);
        assert_eq!(result.algorithm, "Test");
    }

    #[test]
    fn test_tally_threshold_is_inclusive() {
        let mut tally = Tally::default();
        tally.add(20, "first".to_string());
        tally.add(15, "second".to_string());
        let result = tally.finish(35, 45, "unused", "Test");
        assert_eq!(result.score, 35);
        assert!(result.is_phishing);
        assert_eq!(result.reasons, vec!["first", "second"]);
        assert_eq!(result.classification(), "PHISHING");
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = Tally::default().finish(40, 50, "ok", "Test");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isPhishing"], serde_json::Value::Bool(false));
        assert_eq!(json["confidence"], 50);
        assert_eq!(json["reasons"][0], "ok");
    }
}

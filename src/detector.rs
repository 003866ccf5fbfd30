use crate::config::ScannerConfig;
use crate::scoring::text_analyzer::TextAnalyzer;
use crate::scoring::url_analyzer::UrlAnalyzer;
use crate::scoring::{Analyzer, ScoreResult};
use lazy_static::lazy_static;

/// Which analyzer an input should be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Url,
    Text,
}

/// Both analyzers configured from one `ScannerConfig`. Holds no mutable
/// state, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct PhishingDetector {
    url: UrlAnalyzer,
    text: TextAnalyzer,
}

impl Default for PhishingDetector {
    fn default() -> Self {
        Self::new(&ScannerConfig::default())
    }
}

impl PhishingDetector {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            url: UrlAnalyzer::from_config(&config.url),
            text: TextAnalyzer::from_config(&config.text),
        }
    }

    pub fn analyze_url(&self, raw: &str) -> ScoreResult {
        self.url.analyze_url(raw)
    }

    pub fn analyze_text(&self, raw: &str) -> ScoreResult {
        self.text.analyze_text(raw)
    }

    pub fn analyzer(&self, kind: InputKind) -> &dyn Analyzer {
        match kind {
            InputKind::Url => &self.url,
            InputKind::Text => &self.text,
        }
    }

    pub fn analyze(&self, kind: InputKind, raw: &str) -> ScoreResult {
        let analyzer = self.analyzer(kind);
        log::debug!("Running {} analyzer", analyzer.name());
        analyzer.analyze(raw)
    }
}

lazy_static! {
    static ref DEFAULT_DETECTOR: PhishingDetector = PhishingDetector::default();
}

/// Scores a URL with the built-in thresholds.
pub fn analyze_url(raw: &str) -> ScoreResult {
    DEFAULT_DETECTOR.analyze_url(raw)
}

/// Scores free text with the built-in thresholds.
pub fn analyze_text(raw: &str) -> ScoreResult {
    DEFAULT_DETECTOR.analyze_text(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::scoring::CONFIDENCE_CAP;

    const SAMPLE_INPUTS: &[&str] = &[
        "",
        "hi",
        "not a url",
        "https://example.com",
        "http://user@example.com",
        "http://198.51.100.23/paypal/login-verify_account@update.tk",
        "DEAR CUSTOMER!!! YOU HAVE WON $1000. CLICK HERE NOW: http://x.tk http://y.tk http://z.tk",
        "Hello team, the quarterly review is on Monday at ten in the main room.",
    ];

    #[test]
    fn test_free_functions_match_default_detector() {
        let detector = PhishingDetector::default();
        for input in SAMPLE_INPUTS {
            assert_eq!(analyze_url(input), detector.analyze_url(input));
            assert_eq!(analyze_text(input), detector.analyze_text(input));
        }
    }

    #[test]
    fn test_results_are_well_formed() {
        for input in SAMPLE_INPUTS {
            for result in [analyze_url(input), analyze_text(input)] {
                assert!(result.confidence <= CONFIDENCE_CAP, "{:?}", input);
                assert!(!result.reasons.is_empty(), "{:?}", input);
                assert_eq!(result.is_phishing, result.classification() == "PHISHING");
            }
            assert_eq!(analyze_url(input), analyze_url(input));
            assert_eq!(analyze_text(input), analyze_text(input));
        }
    }

    #[test]
    fn test_dispatch_by_kind() {
        let detector = PhishingDetector::default();
        assert_eq!(detector.analyzer(InputKind::Url).name(), "url");
        assert_eq!(detector.analyzer(InputKind::Text).name(), "text");
        assert_eq!(
            detector.analyze(InputKind::Url, "not a url"),
            analyze_url("not a url")
        );
        assert_eq!(detector.analyze(InputKind::Text, "hi").score, 5);
    }

    #[test]
    fn test_configured_thresholds_apply() {
        let config = ScannerConfig {
            url: AnalyzerConfig::url_defaults(),
            text: AnalyzerConfig {
                threshold: 5,
                confidence_baseline: 0,
            },
        };
        let detector = PhishingDetector::new(&config);
        let result = detector.analyze_text("hi");
        assert!(result.is_phishing);
        assert_eq!(result.confidence, 5);
        // Malformed URLs keep their fixed verdict regardless of configuration
        assert_eq!(detector.analyze_url("not a url").confidence, 90);
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| analyze_url("http://user@example.com").score))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 45);
        }
    }
}

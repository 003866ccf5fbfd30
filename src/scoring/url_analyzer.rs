use super::{Analyzer, ScoreResult, Tally};
use crate::config::AnalyzerConfig;
use crate::lexicon::{self, PHISHING_KEYWORDS, SUSPICIOUS_DOMAINS};
use url::Url;

pub const URL_ALGORITHM: &str = "Random Forest (Simulated)";
pub const URL_NORMAL_REASON: &str = "URL structure appears normal";
pub const MALFORMED_URL_REASON: &str = "Invalid or malformed URL";

const MALFORMED_SCORE: u32 = 100;
const MALFORMED_CONFIDENCE: u32 = 90;

const MAX_HOSTNAME_LENGTH: usize = 40;
const MAX_SPECIAL_CHARS: usize = 3;
const MAX_HOSTNAME_DOTS: usize = 3;
const MAX_HOSTNAME_DIGITS: usize = 3;
const MAX_URL_LENGTH: usize = 100;
const KEYWORDS_REPORTED: usize = 3;

/// Structural and lexical checks over a single URL.
#[derive(Debug, Clone)]
pub struct UrlAnalyzer {
    config: AnalyzerConfig,
}

impl Default for UrlAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlAnalyzer {
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::url_defaults())
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self { config: *config }
    }

    /// Scores `raw`. Input the `url` crate cannot parse is classified as
    /// phishing outright rather than reported as an error.
    pub fn analyze_url(&self, raw: &str) -> ScoreResult {
        let parsed = match Url::parse(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::debug!("URL parse failed for {:?}: {}", raw, e);
                return Self::malformed();
            }
        };

        let href = parsed.as_str();
        let hostname = parsed.host_str().unwrap_or("");
        let mut tally = Tally::default();

        if parsed.scheme() != "https" {
            tally.add(20, "Non-HTTPS connection (insecure)".to_string());
        }

        if hostname.len() > MAX_HOSTNAME_LENGTH {
            tally.add(15, "Unusually long domain name".to_string());
        }

        let special_chars = href.chars().filter(|&c| matches!(c, '@' | '-' | '_')).count();
        if special_chars > MAX_SPECIAL_CHARS {
            tally.add(
                15,
                format!("High special character count ({})", special_chars),
            );
        }

        let dots = hostname.matches('.').count();
        if dots > MAX_HOSTNAME_DOTS {
            tally.add(15, format!("Multiple subdomains detected ({} dots)", dots));
        }

        if href.contains('@') {
            tally.add(25, "Contains @ symbol (URL obfuscation)".to_string());
        }

        let digits = hostname.chars().filter(|c| c.is_ascii_digit()).count();
        if digits > MAX_HOSTNAME_DIGITS {
            tally.add(10, format!("Many digits in domain ({})", digits));
        }

        let keywords = lexicon::matching_entries(&href.to_lowercase(), PHISHING_KEYWORDS);
        if !keywords.is_empty() {
            let shown: Vec<&str> = keywords.iter().copied().take(KEYWORDS_REPORTED).collect();
            tally.add(
                10 * keywords.len() as u32,
                format!("Suspicious keywords: {}", shown.join(", ")),
            );
        }

        if let Some(fragment) = suspicious_domain_match(hostname) {
            tally.add(20, format!("Suspicious TLD or domain: .{}", fragment));
        }

        if href.len() > MAX_URL_LENGTH {
            tally.add(10, "Extremely long URL".to_string());
        }

        let result = tally.finish(
            self.config.threshold,
            self.config.confidence_baseline,
            URL_NORMAL_REASON,
            URL_ALGORITHM,
        );
        log::debug!(
            "URL {} scored {} ({})",
            href,
            result.score,
            result.classification()
        );
        result
    }

    fn malformed() -> ScoreResult {
        ScoreResult {
            is_phishing: true,
            score: MALFORMED_SCORE,
            confidence: MALFORMED_CONFIDENCE,
            reasons: vec![MALFORMED_URL_REASON.to_string()],
            algorithm: URL_ALGORITHM.to_string(),
        }
    }
}

/// First suspicious-domain entry that is the hostname's suffix or appears anywhere in it.
fn suspicious_domain_match(hostname: &str) -> Option<&'static str> {
    SUSPICIOUS_DOMAINS.iter().copied().find(|entry| {
        hostname.ends_with(&format!(".{}", entry)) || hostname.contains(entry)
    })
}

impl Analyzer for UrlAnalyzer {
    fn analyze(&self, input: &str) -> ScoreResult {
        self.analyze_url(input)
    }

    fn name(&self) -> &str {
        "url"
    }
}

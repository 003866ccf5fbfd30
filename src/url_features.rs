use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const FEATURE_NAMES: [&str; 12] = [
    "url_length",
    "hostname_length",
    "path_length",
    "num_dots",
    "num_hyphens",
    "num_at",
    "num_qm",
    "num_eq",
    "num_slash",
    "has_ip",
    "has_https",
    "digit_ratio",
];

lazy_static! {
    static ref SCHEME_PREFIX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap();
    static ref IPV4_PATTERN: Regex = Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+").unwrap();
}

/// Numeric lexical profile of a URL string. Extraction is purely textual and
/// accepts any input, so it is usable on strings the URL analyzer rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlFeatures {
    pub url_length: usize,
    pub hostname_length: usize,
    pub path_length: usize,
    pub num_dots: usize,
    pub num_hyphens: usize,
    pub num_at: usize,
    pub num_qm: usize,
    pub num_eq: usize,
    pub num_slash: usize,
    pub has_ip: bool,
    pub has_https: bool,
    pub digit_ratio: f64,
}

impl UrlFeatures {
    pub fn extract(raw: &str) -> Self {
        let url = raw.trim();
        let (hostname, path) = split_authority_and_path(url);
        let url_length = url.chars().count();
        let digits = url.chars().filter(|c| c.is_ascii_digit()).count();

        Self {
            url_length,
            hostname_length: hostname.chars().count(),
            path_length: path.chars().count(),
            num_dots: url.matches('.').count(),
            num_hyphens: url.matches('-').count(),
            num_at: url.matches('@').count(),
            num_qm: url.matches('?').count(),
            num_eq: url.matches('=').count(),
            num_slash: url.matches('/').count(),
            has_ip: IPV4_PATTERN.is_match(hostname),
            has_https: url.to_lowercase().starts_with("https://"),
            digit_ratio: if url_length > 0 {
                digits as f64 / url_length as f64
            } else {
                0.0
            },
        }
    }

    /// Values in `FEATURE_NAMES` order, booleans as 0/1.
    pub fn to_vector(&self) -> Vec<f64> {
        vec![
            self.url_length as f64,
            self.hostname_length as f64,
            self.path_length as f64,
            self.num_dots as f64,
            self.num_hyphens as f64,
            self.num_at as f64,
            self.num_qm as f64,
            self.num_eq as f64,
            self.num_slash as f64,
            if self.has_ip { 1.0 } else { 0.0 },
            if self.has_https { 1.0 } else { 0.0 },
            self.digit_ratio,
        ]
    }
}

/// Splits off the authority (userinfo and port included) and the path.
/// Without a `//` after the scheme there is no authority and everything up to
/// the query or fragment is path.
fn split_authority_and_path(url: &str) -> (&str, &str) {
    let rest = match SCHEME_PREFIX.find(url) {
        Some(scheme) => &url[scheme.end()..],
        None => url,
    };

    let (hostname, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(|c: char| matches!(c, '/' | '?' | '#')).unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    };

    let path_end = rest.find(|c: char| matches!(c, '?' | '#')).unwrap_or(rest.len());
    (hostname, &rest[..path_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_url() {
        let features = UrlFeatures::extract("https://login.example.com/verify?id=7&step=2");
        assert_eq!(features.url_length, 44);
        assert_eq!(features.hostname_length, 17);
        assert_eq!(features.path_length, 7);
        assert_eq!(features.num_dots, 2);
        assert_eq!(features.num_hyphens, 0);
        assert_eq!(features.num_qm, 1);
        assert_eq!(features.num_eq, 2);
        assert_eq!(features.num_slash, 3);
        assert!(!features.has_ip);
        assert!(features.has_https);
        assert!((features.digit_ratio - 2.0 / 44.0).abs() < 1e-9);
    }

    #[test]
    fn test_ip_host_with_credentials() {
        let features = UrlFeatures::extract("  http://admin@192.168.10.1:8080/a-b  ");
        assert_eq!(features.url_length, 34);
        assert_eq!(features.hostname_length, 23);
        assert_eq!(features.path_length, 4);
        assert_eq!(features.num_at, 1);
        assert_eq!(features.num_hyphens, 1);
        assert!(features.has_ip);
        assert!(!features.has_https);
    }

    #[test]
    fn test_no_authority() {
        let features = UrlFeatures::extract("example.com/path#frag");
        assert_eq!(features.hostname_length, 0);
        assert_eq!(features.path_length, 16);

        // "mailto:" has a scheme but no "//"
        let features = UrlFeatures::extract("mailto:someone@example.com");
        assert_eq!(features.hostname_length, 0);
        assert_eq!(features.path_length, 19);
    }

    #[test]
    fn test_empty_input() {
        let features = UrlFeatures::extract("   ");
        assert_eq!(features.url_length, 0);
        assert_eq!(features.digit_ratio, 0.0);
        assert_eq!(features.to_vector().len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_vector_order() {
        let features = UrlFeatures::extract("https://1.2.3.4/");
        let vector = features.to_vector();
        assert_eq!(vector[0], 16.0);
        assert_eq!(vector[9], 1.0);
        assert_eq!(vector[10], 1.0);
    }
}

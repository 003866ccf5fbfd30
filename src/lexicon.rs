use lazy_static::lazy_static;
use regex::Regex;

/// Financial, security and urgency vocabulary shared by both analyzers.
/// Order matters: matched keywords are reported in this order.
pub const PHISHING_KEYWORDS: &[&str] = &[
    "verify",
    "account",
    "suspend",
    "confirm",
    "urgent",
    "immediate",
    "click",
    "update",
    "secure",
    "banking",
    "password",
    "login",
    "paypal",
    "ebay",
    "amazon",
    "apple",
    "microsoft",
    "security",
    "alert",
    "warning",
    "expire",
    "limited",
    "act now",
    "congratulations",
    "winner",
    "claim",
    "prize",
    "free",
    "bonus",
    "offer",
];

/// Multi-word pressure phrases, text analysis only.
pub const URGENCY_PHRASES: &[&str] = &[
    "act now",
    "urgent",
    "immediate action",
    "within 24 hours",
    "expire",
    "suspended",
    "locked",
    "unusual activity",
    "verify immediately",
    "confirm now",
    "click here now",
    "limited time",
    "last chance",
    "don't miss",
];

/// Abused TLDs, shorteners and throwaway host fragments, URL analysis only.
/// First entry (in this order) that matches a hostname wins.
pub const SUSPICIOUS_DOMAINS: &[&str] = &[
    "tk", "ml", "ga", "cf", "gq", "bit.ly", "tinyurl", "xyz", "top", "click", "loan", "download",
];

lazy_static! {
    pub static ref LINK_PATTERN: Regex = Regex::new(r"(?i-u)https?://").unwrap();
    pub static ref CALL_TO_ACTION_PATTERN: Regex =
        Regex::new(r"(?i-u)click here|click now|click below").unwrap();
    pub static ref GENERIC_GREETING_PATTERN: Regex =
        Regex::new(r"(?i-u)dear (customer|user|member)").unwrap();
    pub static ref FINANCIAL_INCENTIVE_PATTERN: Regex =
        Regex::new(r"(?i-u)\$[0-9]+|prize|reward|won|winner").unwrap();
}

/// Every lexicon entry contained in `haystack`, in lexicon order.
/// `haystack` is expected to be lowercased already.
pub fn matching_entries<'a>(haystack: &str, entries: &[&'a str]) -> Vec<&'a str> {
    entries
        .iter()
        .copied()
        .filter(|entry| haystack.contains(entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicons_are_lowercase() {
        for entry in PHISHING_KEYWORDS
            .iter()
            .chain(URGENCY_PHRASES)
            .chain(SUSPICIOUS_DOMAINS)
        {
            assert_eq!(*entry, entry.to_lowercase());
        }
    }

    #[test]
    fn test_keywords_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for keyword in PHISHING_KEYWORDS {
            assert!(seen.insert(keyword), "duplicate keyword {}", keyword);
        }
    }

    #[test]
    fn test_matching_entries_keeps_lexicon_order() {
        let found = matching_entries("please login and verify your paypal", PHISHING_KEYWORDS);
        assert_eq!(found, vec!["verify", "login", "paypal"]);
        assert!(matching_entries("nothing here", PHISHING_KEYWORDS).is_empty());
    }

    #[test]
    fn test_patterns() {
        assert!(CALL_TO_ACTION_PATTERN.is_match("Please CLICK BELOW"));
        assert!(GENERIC_GREETING_PATTERN.is_match("Dear Member,"));
        assert!(!GENERIC_GREETING_PATTERN.is_match("Dear Alice,"));
        assert!(!GENERIC_GREETING_PATTERN.is_match("dear cu\u{17F}tomer"));
        assert!(!CALL_TO_ACTION_PATTERN.is_match("\u{212A}lick here"));
        assert!(FINANCIAL_INCENTIVE_PATTERN.is_match("get $500 today"));
        assert!(!FINANCIAL_INCENTIVE_PATTERN.is_match("costs $ five"));
        assert_eq!(LINK_PATTERN.find_iter("HTTP://a http://b https://c").count(), 3);
    }
}

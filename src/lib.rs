pub mod config;
pub mod detector;
pub mod lexicon;
pub mod scoring;
pub mod url_features;

pub use config::ScannerConfig;
pub use detector::{analyze_text, analyze_url, InputKind, PhishingDetector};
pub use scoring::text_analyzer::TextAnalyzer;
pub use scoring::url_analyzer::UrlAnalyzer;
pub use scoring::{Analyzer, ScoreResult};
pub use url_features::UrlFeatures;

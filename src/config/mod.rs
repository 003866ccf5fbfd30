pub mod yaml_config;

use crate::scoring::CONFIDENCE_CAP;
use serde::{Deserialize, Serialize};

pub use yaml_config::{load_config, load_config_or_default};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    #[serde(default = "AnalyzerConfig::url_defaults")]
    pub url: AnalyzerConfig,
    #[serde(default = "AnalyzerConfig::text_defaults")]
    pub text: AnalyzerConfig,
}

/// Verdict parameters for one analyzer. Check weights and lexicons are fixed.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Score at or above which input is classified as phishing.
    pub threshold: u32,
    /// Confidence reported for a zero score.
    pub confidence_baseline: u32,
}

impl AnalyzerConfig {
    pub fn url_defaults() -> Self {
        Self {
            threshold: 40,
            confidence_baseline: 50,
        }
    }

    pub fn text_defaults() -> Self {
        Self {
            threshold: 35,
            confidence_baseline: 45,
        }
    }

    fn validate(&self, section: &str) -> anyhow::Result<()> {
        if self.threshold == 0 {
            anyhow::bail!("{}.threshold must be greater than zero", section);
        }
        if self.confidence_baseline > CONFIDENCE_CAP {
            anyhow::bail!(
                "{}.confidence_baseline ({}) exceeds the confidence cap of {}",
                section,
                self.confidence_baseline,
                CONFIDENCE_CAP
            );
        }
        Ok(())
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            url: AnalyzerConfig::url_defaults(),
            text: AnalyzerConfig::text_defaults(),
        }
    }
}

impl ScannerConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.url.validate("url")?;
        self.text.validate("text")?;
        Ok(())
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

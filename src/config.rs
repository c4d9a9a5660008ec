use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Default URL list read at startup
pub const DEFAULT_URL_FILE: &str = "urls.txt";

/// Default path of the exported report table
pub const DEFAULT_OUTPUT_FILE: &str = "seo_reports.csv";

/// Configuration for an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// File holding one URL per line
    #[serde(default = "default_url_file")]
    pub url_file: String,

    /// Where the CSV report is written
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to show the word count chart after exporting
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            url_file: default_url_file(),
            output_file: default_output_file(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            show_chart: default_show_chart(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_url_file() -> String {
    DEFAULT_URL_FILE.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("seo-pages/{}", env!("CARGO_PKG_VERSION"))
}

fn default_show_chart() -> bool {
    true
}

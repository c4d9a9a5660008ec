use clap::Parser;
use seo_pages::AnalyzerConfig;

#[derive(Parser, Debug)]
#[command(name = "seo-pages")]
#[command(about = "Fetches pages from a URL list and reports their on-page SEO signals")]
#[command(version)]
pub struct Args {
    /// File with one URL per line
    #[arg(long, value_name = "FILE")]
    pub urls: Option<String>,

    /// CSV file to write the report to
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip the word count chart
    #[arg(long, default_value_t = false)]
    pub no_chart: bool,
}

impl Args {
    /// Apply command-line overrides on top of a base configuration
    pub fn apply(&self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if let Some(urls) = &self.urls {
            config.url_file = urls.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if self.no_chart {
            config.show_chart = false;
        }
        config
    }
}

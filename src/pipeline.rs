use crate::analyzer::PageAnalyzer;
use crate::config::AnalyzerConfig;
use crate::fetcher::Fetcher;
use crate::sources;
use crate::stats::StatsCollector;
use std::path::Path;

/// Builder for configuring and running an analysis over a URL list
pub struct Pipeline {
    config: AnalyzerConfig,
}

impl Pipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(
        mut self,
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = AnalyzerConfig::from_file(path)?;
        Ok(self)
    }

    /// Override the URL list location
    pub fn with_url_file(mut self, path: impl Into<String>) -> Self {
        self.config.url_file = path.into();
        self
    }

    /// Override the report location
    pub fn with_output_file(mut self, path: impl Into<String>) -> Self {
        self.config.output_file = path.into();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Enable or disable the chart shown after export
    pub fn with_chart(mut self, show: bool) -> Self {
        self.config.show_chart = show;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze every URL in order, export the table, then show the chart.
    ///
    /// Only a missing URL list, a failed export or a terminal error ends the
    /// run early; pages that cannot be fetched still get an (empty) row.
    pub async fn run(self) -> Result<StatsCollector, Box<dyn std::error::Error>> {
        let urls = sources::read_urls(&self.config.url_file)?;
        ::log::info!(
            "Analyzing {} URLs from {}",
            urls.len(),
            self.config.url_file
        );

        let fetcher = Fetcher::new(&self.config)?;
        let mut collector = StatsCollector::new();

        for url in urls {
            let mut analyzer = PageAnalyzer::new(url, &fetcher);
            analyzer.fetch().await;
            analyzer.parse();
            analyzer.analyze_images();

            collector.add_report(analyzer.generate_report());
        }

        collector.export_to_csv(&self.config.output_file)?;

        if self.config.show_chart {
            collector.visualize_word_counts()?;
        }

        Ok(collector)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export modules
pub mod analyzer;
pub mod chart;
pub mod config;
pub mod fetcher;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod sources;
pub mod stats;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use analyzer::PageAnalyzer;
pub use config::AnalyzerConfig;
pub use pipeline::Pipeline;
pub use results::PageRecord;
pub use stats::StatsCollector;

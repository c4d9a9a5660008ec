use clap::Parser;
use seo_pages::{AnalyzerConfig, Pipeline};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging, INFO unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => match AnalyzerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AnalyzerConfig::default(),
    };
    let config = args.apply(base);

    let start_time = std::time::Instant::now();
    match Pipeline::new().with_config(config).run().await {
        Ok(collector) => {
            ::log::info!(
                "Analysis complete - {} pages in {:.2} seconds",
                collector.len(),
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            ::log::error!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    }
}

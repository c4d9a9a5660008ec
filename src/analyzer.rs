use crate::fetcher::Fetcher;
use crate::parsers::{ParseResult, html};
use crate::results::PageRecord;
use std::collections::BTreeMap;

/// Image summary for one page, used for logging only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageStats {
    pub total: usize,
    /// Occurrences of each file extension, keyed by the text after the last `.`
    pub extensions: BTreeMap<String, usize>,
}

/// Analyzes a single URL: fetch, parse, summarize, report.
///
/// A failed fetch is logged and leaves the analyzer empty, so the report for
/// that URL still exists but carries empty text and zero counts.
pub struct PageAnalyzer<'a> {
    url: String,
    fetcher: &'a Fetcher,
    document: Option<String>,
    signals: ParseResult,
}

impl<'a> PageAnalyzer<'a> {
    pub fn new(url: impl Into<String>, fetcher: &'a Fetcher) -> Self {
        Self {
            url: url.into(),
            fetcher,
            document: None,
            signals: ParseResult::default(),
        }
    }

    /// Whether a document was fetched successfully
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Fetch the page. Errors are logged, never returned.
    pub async fn fetch(&mut self) {
        match self.fetcher.fetch(&self.url).await {
            Ok(body) => {
                ::log::info!("Fetched page: {}", self.url);
                self.document = Some(body);
            }
            Err(e) => {
                ::log::error!("Error fetching {}: {}", self.url, e);
                self.document = None;
            }
        }
    }

    /// Use an already downloaded document instead of fetching
    pub fn with_document(mut self, html: impl Into<String>) -> Self {
        self.document = Some(html.into());
        self
    }

    /// Extract SEO signals from the fetched document
    pub fn parse(&mut self) {
        let Some(document) = &self.document else {
            ::log::warn!("No HTML content to parse.");
            return;
        };

        self.signals = html::parse(document);

        ::log::info!("Page Title: {}", self.signals.title);
        ::log::info!("Meta Description: {}", self.signals.meta_description);
        ::log::info!("H1 Tags: {:?}", self.signals.h1_tags);
        ::log::info!("Word Count: {}", self.signals.word_count);
    }

    /// Count images and their file extensions
    pub fn analyze_images(&self) -> ImageStats {
        let stats = image_stats(&self.signals.images);

        ::log::info!("Total images found: {}", stats.total);
        if stats.total > 0 {
            ::log::info!("Image extensions: {:?}", stats.extensions);
        }
        stats
    }

    /// Build the record for this URL from whatever was parsed
    pub fn generate_report(&self) -> PageRecord {
        PageRecord::new(
            self.url.clone(),
            self.signals.title.clone(),
            self.signals.meta_description.clone(),
            self.signals.word_count,
            self.signals.h1_tags.clone(),
            self.signals.images.clone(),
        )
    }
}

/// Tallies image sources by extension
pub fn image_stats(images: &[String]) -> ImageStats {
    let mut extensions = BTreeMap::new();
    for src in images {
        *extensions.entry(image_extension(src).to_string()).or_insert(0) += 1;
    }

    ImageStats {
        total: images.len(),
        extensions,
    }
}

/// Text after the last `.`; the whole source when there is none
pub fn image_extension(src: &str) -> &str {
    src.rsplit('.').next().unwrap_or(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::test_support::{TestServer, refused_url};

    const PAGE: &str = r#"<html><head>
        <title>Widgets</title>
        <meta name="description" content="Buy widgets">
        </head><body>
        <h1>Best widgets</h1>
        <p>Hello, world! 123</p>
        <img src="a.png"><img><img src="b.jpg"><img src="/img/c.png">
        </body></html>"#;

    fn fetcher() -> Fetcher {
        Fetcher::new(&AnalyzerConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_parse_report() {
        let server = TestServer::start(vec![("/widgets", 200, PAGE)]).await;
        let fetcher = fetcher();
        let mut analyzer = PageAnalyzer::new(server.url("/widgets"), &fetcher);

        analyzer.fetch().await;
        assert!(analyzer.has_document());
        analyzer.parse();
        let images = analyzer.analyze_images();
        let report = analyzer.generate_report();

        assert_eq!(report.url(), server.url("/widgets"));
        assert_eq!(report.title(), "Widgets");
        assert_eq!(report.meta_description(), "Buy widgets");
        assert_eq!(report.h1_tags(), ["Best widgets"]);
        assert_eq!(report.images(), ["a.png", "b.jpg", "/img/c.png"]);
        assert_eq!(report.image_count(), 3);
        // Widgets + Best widgets + Hello world 123
        assert_eq!(report.word_count(), 6);
        assert_eq!(images.total, 3);
        assert_eq!(images.extensions.get("png"), Some(&2));
        assert_eq!(images.extensions.get("jpg"), Some(&1));
    }

    #[tokio::test]
    async fn test_connection_refused_degrades_to_empty_record() {
        let url = refused_url().await;
        let fetcher = fetcher();
        let mut analyzer = PageAnalyzer::new(url.clone(), &fetcher);

        analyzer.fetch().await;
        assert!(!analyzer.has_document());
        analyzer.parse();
        assert_eq!(analyzer.analyze_images().total, 0);
        let report = analyzer.generate_report();

        assert_eq!(report, PageRecord::empty(url));
        assert_eq!(report.title(), "");
        assert_eq!(report.meta_description(), "");
        assert!(report.h1_tags().is_empty());
        assert!(report.images().is_empty());
        assert_eq!(report.word_count(), 0);
    }

    #[tokio::test]
    async fn test_error_status_degrades_to_empty_record() {
        let server = TestServer::start(vec![("/broken", 500, PAGE)]).await;
        let fetcher = fetcher();
        let mut analyzer = PageAnalyzer::new(server.url("/broken"), &fetcher);

        analyzer.fetch().await;
        analyzer.parse();

        assert_eq!(analyzer.generate_report().word_count(), 0);
        assert_eq!(analyzer.generate_report().title(), "");
    }

    #[test]
    fn test_report_without_parse() {
        let fetcher = fetcher();
        let analyzer = PageAnalyzer::new("https://example.com", &fetcher).with_document(PAGE);

        // Nothing is extracted until parse runs
        assert_eq!(
            analyzer.generate_report(),
            PageRecord::empty("https://example.com")
        );
    }

    #[test]
    fn test_parse_preloaded_document() {
        let fetcher = fetcher();
        let mut analyzer = PageAnalyzer::new("https://example.com", &fetcher)
            .with_document(r#"<img src="a.png"><img><img src="b.jpg">"#);
        analyzer.parse();

        let report = analyzer.generate_report();
        assert_eq!(report.images(), ["a.png", "b.jpg"]);
        assert_eq!(report.image_count(), 2);
    }

    #[test]
    fn test_image_extension() {
        assert_eq!(image_extension("a.png"), "png");
        assert_eq!(image_extension("/cdn/v1.2/photo.JPG"), "JPG");
        assert_eq!(image_extension("https://cdn.example/pic.webp?w=200"), "webp?w=200");
        assert_eq!(image_extension("noext"), "noext");
    }

    #[test]
    fn test_image_stats() {
        let images = vec![
            "a.png".to_string(),
            "b.png".to_string(),
            "c.gif".to_string(),
        ];
        let stats = image_stats(&images);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.extensions.len(), 2);
        assert_eq!(stats.extensions["png"], 2);
        assert_eq!(stats.extensions["gif"], 1);

        assert_eq!(image_stats(&[]), ImageStats::default());
    }
}

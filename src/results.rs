use serde::{Deserialize, Serialize};

/// Column order of the exported report table
pub const REPORT_COLUMNS: [&str; 7] = [
    "url",
    "title",
    "meta_description",
    "word_count",
    "h1_tags",
    "images",
    "image_count",
];

/// SEO signals gathered for a single URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    url: String,
    title: String,
    meta_description: String,
    word_count: usize,
    h1_tags: Vec<String>,
    images: Vec<String>,
    image_count: usize,
}

impl PageRecord {
    /// Create a new record; `image_count` is derived from `images`
    pub fn new(
        url: String,
        title: String,
        meta_description: String,
        word_count: usize,
        h1_tags: Vec<String>,
        images: Vec<String>,
    ) -> Self {
        let image_count = images.len();
        Self {
            url,
            title,
            meta_description,
            word_count,
            h1_tags,
            images,
            image_count,
        }
    }

    /// Record for a URL whose page could not be fetched or parsed
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta_description(&self) -> &str {
        &self.meta_description
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn h1_tags(&self) -> &[String] {
        &self.h1_tags
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Flatten into one table row, in `REPORT_COLUMNS` order.
    ///
    /// List fields are written as JSON arrays of strings.
    pub fn to_row(&self) -> Result<[String; 7], serde_json::Error> {
        Ok([
            self.url.clone(),
            self.title.clone(),
            self.meta_description.clone(),
            self.word_count.to_string(),
            serde_json::to_string(&self.h1_tags)?,
            serde_json::to_string(&self.images)?,
            self.image_count.to_string(),
        ])
    }
}

pub mod html;
pub mod text;


/// On-page signals extracted from one HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Text of the first `<title>` element
    pub title: String,
    /// `content` of `<meta name="description">`
    pub meta_description: String,
    /// Text of every `<h1>`, in document order
    pub h1_tags: Vec<String>,
    /// `src` of every `<img>` that has one, in document order
    pub images: Vec<String>,
    /// Number of word-like tokens in the visible text
    pub word_count: usize,
}

impl ParseResult {
    /// Number of image references found
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

use crate::config::AnalyzerConfig;
use reqwest::Client;

/// Thin wrapper around a reqwest client that fetches HTML documents
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Issues one GET request and returns the body of a 2xx response
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(body)
    }
}

#[derive(Debug)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    Http(u16),
    /// Connection, timeout, invalid URL or body decoding failure
    Request(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(code) => write!(f, "HTTP error: {}", code),
            FetchError::Request(e) => write!(f, "Request error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(_) => None,
            FetchError::Request(e) => Some(e),
        }
    }
}

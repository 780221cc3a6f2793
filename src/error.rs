use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("GitHub API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(u32),

    #[error("Invalid contact form: {0}")]
    InvalidContactForm(String),

    #[error("Contact relay error: {0}")]
    RelayError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error(
        "OpenRouter API key not found. Please set the OPENROUTER_API_KEY environment variable in your .env file."
    )]
    MissingApiKey,

    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),

    /// Transport-level timeout (connect phase).
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("api error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("completion returned no content")]
    EmptyResponse,

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CompletionError::Timeout(err)
        } else {
            CompletionError::Http(err)
        }
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("image url not found")]
    MissingImageUrl,
    #[error("comment is empty")]
    EmptyComment,
    #[error("Erro: {status}, {body}")]
    Http { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("dom error: {0}")]
    Dom(String),
}

impl FeedError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FeedError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

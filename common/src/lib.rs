pub mod comment;
pub mod config;
pub mod error;
pub mod modal;
pub mod post;
pub mod structs;
pub mod toggles;
pub mod transport;

pub use config::FeedConfig;
pub use error::FeedError;

/// Trims a form value, returning an owned string.
pub fn trimmed(s: &str) -> String {
    s.trim().to_string()
}

/// Builds `{base}/{path}` without doubling or dropping the separator.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
pub(crate) mod fakes;

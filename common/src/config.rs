use crate::join_url;

pub const DEFAULT_API_BASE: &str = "https://api-devorbirt.onrender.com";
pub const DEFAULT_FEED_URL: &str = "http://127.0.0.1:5000/devorbit/feed/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub api_base: String,
    /// Where the post form sends the user once they click submit.
    pub feed_url: String,
    /// Navigate to `feed_url` as soon as the post button is clicked, before the
    /// API has answered. The deployed page does this; turning it off makes the
    /// retry label reachable.
    pub eager_redirect: bool,
    /// On a failed comment POST, append the text locally and show the
    /// "sent successfully" alert after the error alert, as the deployed page does.
    pub legacy_comment_fallback: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            feed_url: DEFAULT_FEED_URL.to_owned(),
            eager_redirect: true,
            legacy_comment_fallback: true,
        }
    }
}

impl FeedConfig {
    /// Reads overrides baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("FEED_API_BASE"),
            option_env!("FEED_REDIRECT_URL"),
            option_env!("FEED_EAGER_REDIRECT"),
            option_env!("FEED_LEGACY_COMMENT_FALLBACK"),
        )
    }

    pub fn with_overrides(
        mut self,
        api_base: Option<&str>,
        feed_url: Option<&str>,
        eager_redirect: Option<&str>,
        legacy_comment_fallback: Option<&str>,
    ) -> Self {
        if let Some(v) = api_base.filter(|v| !v.trim().is_empty()) {
            self.api_base = v.trim().to_owned();
        }
        if let Some(v) = feed_url.filter(|v| !v.trim().is_empty()) {
            self.feed_url = v.trim().to_owned();
        }
        if let Some(v) = eager_redirect.and_then(parse_flag) {
            self.eager_redirect = v;
        }
        if let Some(v) = legacy_comment_fallback.and_then(parse_flag) {
            self.legacy_comment_fallback = v;
        }
        self
    }

    pub fn post_url(&self) -> String {
        join_url(&self.api_base, "post")
    }

    pub fn comment_url(&self, post_id: &str, user_id: &str) -> String {
        join_url(&self.api_base, &format!("post/{post_id}/{user_id}/comment/"))
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            log::warn!("ignoring unrecognised flag value {other:?}");
            None
        }
    }
}

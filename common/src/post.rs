use log::{error, info, warn};

use crate::{
    structs::{CreatedPost, PostSubmission},
    transport::Transport,
    FeedConfig, FeedError,
};

pub const DISABLED_CLASSES: [&str; 2] = ["opacity-50", "cursor-not-allowed"];
pub const PROCESSING_LABEL: &str = "Processando...";
pub const RETRY_LABEL: &str = "Tentar novamente";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Processing,
    Retry,
}

impl ButtonState {
    pub fn disabled(&self) -> bool {
        matches!(self, ButtonState::Processing)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonState::Processing => PROCESSING_LABEL,
            ButtonState::Retry => RETRY_LABEL,
        }
    }
}

/// The bits of the page the post form touches.
pub trait PostPage {
    fn set_button(&self, state: ButtonState);
    fn redirect(&self, url: &str) -> Result<(), FeedError>;
    fn reset_form(&self);
}

pub async fn submit_post<T, P>(
    transport: &T,
    page: &P,
    config: &FeedConfig,
    submission: PostSubmission<T::Attachment>,
) -> Result<CreatedPost, FeedError>
where
    T: Transport + ?Sized,
    P: PostPage + ?Sized,
{
    page.set_button(ButtonState::Processing);
    if config.eager_redirect {
        eager_redirect(page, config);
    }

    match send(transport, config, submission).await {
        Ok(created) => {
            info!("post created: {created:?}");
            page.reset_form();
            Ok(created)
        }
        Err(e) => {
            error!("error creating post: {e}");
            page.set_button(ButtonState::Retry);
            Err(e)
        }
    }
}

// Known quirk kept from the deployed page: the user is sent to the feed before
// the API answers, so the retry state below is never seen by them.
fn eager_redirect<P: PostPage + ?Sized>(page: &P, config: &FeedConfig) {
    if let Err(e) = page.redirect(&config.feed_url) {
        warn!("redirect to {} failed: {e}", config.feed_url);
    }
}

async fn send<T: Transport + ?Sized>(
    transport: &T,
    config: &FeedConfig,
    submission: PostSubmission<T::Attachment>,
) -> Result<CreatedPost, FeedError> {
    transport
        .post_multipart(&config.post_url(), submission.into_multipart())
        .await?
        .error_for_status()?
        .json()
}

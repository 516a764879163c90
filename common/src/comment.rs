use log::{error, warn};

use crate::{
    structs::{CommentFields, CommentSubmission},
    transport::{post_json, Transport},
    FeedConfig, FeedError,
};

pub const EMPTY_COMMENT_ALERT: &str = "O comentário não pode estar vazio.";
pub const CONNECTION_ALERT: &str = "Erro ao processar o comentário. Verifique sua conexão.";
pub const LEGACY_SUCCESS_ALERT: &str = "Comentário enviado com sucesso!";

pub fn status_alert(status: u16) -> String {
    format!("Erro ao enviar o comentário: {status}")
}

/// Id of the element holding a post's rendered comments.
pub fn comment_section_id(post_id: &str) -> String {
    format!("comments-post-{post_id}")
}

pub trait CommentForm {
    fn fields(&self) -> Result<CommentFields, FeedError>;
    fn clear_comment(&self);
    fn append_to_comment_section(&self, post_id: &str, text: &str) -> Result<(), FeedError>;
}

pub trait Alerts {
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentOutcome {
    Sent,
    /// Blank comment, nothing was sent.
    Rejected,
    Failed(FeedError),
}

pub async fn submit_comment<T, F, A>(
    transport: &T,
    form: &F,
    alerts: &A,
    config: &FeedConfig,
) -> CommentOutcome
where
    T: Transport + ?Sized,
    F: CommentForm + ?Sized,
    A: Alerts + ?Sized,
{
    let fields = match form.fields() {
        Ok(fields) => fields,
        Err(e) => {
            error!("error reading comment form: {e}");
            return CommentOutcome::Failed(e);
        }
    };
    let submission = match CommentSubmission::new(&fields) {
        Ok(s) => s,
        Err(_) => {
            alerts.alert(EMPTY_COMMENT_ALERT);
            return CommentOutcome::Rejected;
        }
    };

    let url = config.comment_url(&submission.post_id, &submission.user_id);
    match post_json(transport, &url, &submission.body()).await {
        Ok(res) if res.ok() => {
            form.clear_comment();
            CommentOutcome::Sent
        }
        Ok(res) => {
            warn!("comment on post {} rejected with {}", submission.post_id, res.status);
            alerts.alert(&status_alert(res.status));
            if config.legacy_comment_fallback {
                legacy_comment_fallback(form, alerts, &submission);
            }
            CommentOutcome::Failed(FeedError::Http {
                status: res.status,
                body: res.body,
            })
        }
        Err(e) => {
            error!("error sending comment: {e}");
            alerts.alert(CONNECTION_ALERT);
            CommentOutcome::Failed(e)
        }
    }
}

// Known quirk kept from the deployed page: after reporting the failure it shows
// the comment locally and claims success.
fn legacy_comment_fallback<F, A>(form: &F, alerts: &A, submission: &CommentSubmission)
where
    F: CommentForm + ?Sized,
    A: Alerts + ?Sized,
{
    if let Err(e) = form.append_to_comment_section(&submission.post_id, &submission.comment) {
        // the page script throws here and lands in its connection-error branch
        error!("could not append comment locally: {e}");
        alerts.alert(CONNECTION_ALERT);
        return;
    }
    alerts.alert(LEGACY_SUCCESS_ALERT);
}

use std::rc::Rc;

use common::{
    comment::{comment_section_id, submit_comment, Alerts, CommentForm, CommentOutcome},
    structs::CommentFields,
    FeedError,
};
use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::{api::GlooTransport, dom, CONFIG};

const FORM_SELECTOR: &str = "form[id^=\"comment-form-\"]";
const POST_ID_SELECTOR: &str = "input[name=\"post_id\"]";
const USER_ID_SELECTOR: &str = "input[name=\"user_id\"]";
const COMMENT_SELECTOR: &str = "textarea[name=\"comment\"]";

struct DomCommentForm {
    form: HtmlFormElement,
}

impl DomCommentForm {
    fn textarea(&self) -> Result<HtmlTextAreaElement, FeedError> {
        dom::query(&self.form, COMMENT_SELECTOR)
    }
}

impl CommentForm for DomCommentForm {
    fn fields(&self) -> Result<CommentFields, FeedError> {
        Ok(CommentFields {
            post_id: dom::query::<HtmlInputElement>(&self.form, POST_ID_SELECTOR)?.value(),
            user_id: dom::query::<HtmlInputElement>(&self.form, USER_ID_SELECTOR)?.value(),
            comment: self.textarea()?.value(),
        })
    }

    fn clear_comment(&self) {
        match self.textarea() {
            Ok(t) => t.set_value(""),
            Err(e) => log::error!("could not clear comment: {e}"),
        }
    }

    fn append_to_comment_section(&self, post_id: &str, text: &str) -> Result<(), FeedError> {
        let section = dom::by_id::<Element>(&comment_section_id(post_id))?;
        let node = gloo::utils::document()
            .create_element("div")
            .map_err(dom::dom_err)?;
        node.set_text_content(Some(text));
        section.append_child(&node).map_err(dom::dom_err)?;
        Ok(())
    }
}

struct BrowserAlerts;

impl Alerts for BrowserAlerts {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

pub fn attach() -> anyhow::Result<()> {
    let forms = gloo::utils::document()
        .query_selector_all(FORM_SELECTOR)
        .map_err(dom::dom_err)?;

    let mut wired = 0;
    for i in 0..forms.length() {
        let Some(form) = forms.item(i).and_then(|n| n.dyn_into::<HtmlFormElement>().ok()) else {
            continue;
        };
        let target = form.clone();
        let form = Rc::new(DomCommentForm { form });
        EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |e| {
                e.prevent_default();
                let form = form.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = submit_comment(&GlooTransport, &*form, &BrowserAlerts, &CONFIG).await;
                    if outcome == CommentOutcome::Sent {
                        debug!("comment sent from #{}", form.form.id());
                    }
                });
            },
        )
        .forget();
        wired += 1;
    }
    info!("wired {wired} comment forms");
    Ok(())
}

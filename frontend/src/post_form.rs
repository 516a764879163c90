use std::rc::Rc;

use common::{
    post::{submit_post, ButtonState, PostPage, DISABLED_CLASSES},
    structs::PostSubmission,
    FeedError,
};
use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, error, info};
use web_sys::{File, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::{api::GlooTransport, dom, CONFIG};

const BUTTON_ID: &str = "postBtn";
const FORM_ID: &str = "post-form";

struct DomPostPage {
    button: HtmlButtonElement,
}

impl PostPage for DomPostPage {
    fn set_button(&self, state: ButtonState) {
        self.button.set_disabled(state.disabled());
        let classes = self.button.class_list();
        for class in DISABLED_CLASSES {
            let res = if state.disabled() {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
            if let Err(e) = res {
                error!("could not update class {class} on #{BUTTON_ID}: {e:?}");
            }
        }
        self.button.set_inner_html(state.label());
    }

    fn redirect(&self, url: &str) -> Result<(), FeedError> {
        gloo::utils::window()
            .location()
            .set_href(url)
            .map_err(dom::dom_err)
    }

    fn reset_form(&self) {
        match dom::by_id::<HtmlFormElement>(FORM_ID) {
            Ok(form) => form.reset(),
            Err(e) => error!("could not reset post form: {e}"),
        }
    }
}

fn read_submission() -> Result<PostSubmission<File>, FeedError> {
    let file = dom::by_id::<HtmlInputElement>("file")?
        .files()
        .and_then(|files| files.get(0));
    Ok(PostSubmission {
        user_id: dom::value_by_id("id_user")?,
        display_name: dom::value_by_id("nome")?,
        title: dom::value_by_id("titulo")?,
        body: dom::value_by_id("post")?,
        file,
    })
}

pub fn attach() -> anyhow::Result<()> {
    let button = dom::by_id::<HtmlButtonElement>(BUTTON_ID)?;
    let page = Rc::new(DomPostPage {
        button: button.clone(),
    });

    EventListener::new_with_options(
        &button,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |e| {
            e.prevent_default();
            let submission = match read_submission() {
                Ok(s) => s,
                Err(e) => {
                    error!("error reading post form: {e}");
                    return;
                }
            };
            if let Some(file) = &submission.file {
                info!("attaching {} ({} bytes)", file.name(), file.size());
            }
            let page = page.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = submit_post(&GlooTransport, &*page, &CONFIG, submission).await {
                    debug!("post handler finished with {e}");
                }
            });
        },
    )
    .forget();
    Ok(())
}

use common::toggles::{expand_comment, toggle_sidebar, ClassToggle, DisplayStyle};
use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, error};
use web_sys::{Element, HtmlElement};

use crate::dom;

const SIDEBAR_TOGGLE_ID: &str = "sidebar-toggle-button";
const SIDEBAR_ID: &str = "cta-button-sidebar";
const VIEW_MORE_ID: &str = "view-more";
const FULL_COMMENT_ID: &str = "full-comment";
const COMMENT_BUTTON_ID: &str = "comment-btn";

struct Classes(Element);

impl ClassToggle for Classes {
    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or_else(|e| {
            error!("could not toggle {class}: {e:?}");
            false
        })
    }
}

struct Styled(HtmlElement);

impl DisplayStyle for Styled {
    fn set_display(&self, value: &str) {
        if let Err(e) = self.0.style().set_property("display", value) {
            error!("could not set display on #{}: {e:?}", self.0.id());
        }
    }
}

pub fn attach_sidebar() -> anyhow::Result<()> {
    let toggle = dom::by_id::<Element>(SIDEBAR_TOGGLE_ID)?;
    EventListener::new(&toggle, "click", |_| match dom::by_id::<Element>(SIDEBAR_ID) {
        Ok(sidebar) => {
            let hidden = toggle_sidebar(&Classes(sidebar));
            debug!("sidebar hidden: {hidden}");
        }
        Err(e) => error!("sidebar toggle: {e}"),
    })
    .forget();
    Ok(())
}

pub fn attach_comment_expander() -> anyhow::Result<()> {
    let view_more = dom::by_id::<Element>(VIEW_MORE_ID)?;
    EventListener::new_with_options(
        &view_more,
        "click",
        EventListenerOptions::enable_prevent_default(),
        |e| {
            e.prevent_default();
            let full = dom::by_id::<HtmlElement>(FULL_COMMENT_ID);
            let button = dom::by_id::<HtmlElement>(COMMENT_BUTTON_ID);
            match (full, button) {
                (Ok(full), Ok(button)) => expand_comment(&Styled(full), &Styled(button)),
                (Err(e), _) | (_, Err(e)) => error!("comment expander: {e}"),
            }
        },
    )
    .forget();
    Ok(())
}

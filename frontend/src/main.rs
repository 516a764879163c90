use common::FeedConfig;
use gloo::events::EventListener;
use lazy_static::lazy_static;

mod api;
mod comment_form;
mod dom;
mod image_modal;
mod logger;
mod post_form;
mod toggles;

lazy_static! {
    pub static ref CONFIG: FeedConfig = FeedConfig::from_build_env();
}

type Attach = fn() -> anyhow::Result<()>;

const WIRING: [(&str, Attach); 5] = [
    ("post form", post_form::attach),
    ("comment forms", comment_form::attach),
    ("image modal", image_modal::attach),
    ("sidebar toggle", toggles::attach_sidebar),
    ("comment expander", toggles::attach_comment_expander),
];

fn main() {
    logger::init();
    log::debug!("config: {:?}", *CONFIG);

    let document = gloo::utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| wire()).forget();
    } else {
        wire();
    }
}

fn wire() {
    // each piece is optional on a given page, one missing element must not stop the rest
    for (name, attach) in WIRING {
        if let Err(e) = attach() {
            log::info!("{name} not wired: {e:#}");
        }
    }
}

use std::{cell::RefCell, rc::Rc};

use common::{
    modal::{open_image_modal, ImageShape, ModalVariant, Overlay, OverlayHost, OverlayView, UrlSource},
    FeedError,
};
use log::error;
use wasm_bindgen::{prelude::*, JsValue};
use web_sys::Element;
use yew::{prelude::*, AppHandle};

use crate::dom::dom_err;

#[function_component]
pub fn ImageOverlay(props: &Props) -> Html {
    let mvon_close = props.on_close.clone();
    let on_close = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        mvon_close.emit(());
    });

    let view = &props.view;
    html! {
        <div class="image-modal" style={view.overlay_style}>
            <img src={view.image_url.clone()} alt={view.image_alt} style={view.image_style.clone()} />
            <span class="image-modal-close" style={view.close_style} onclick={on_close}>{view.close_label}</span>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub view: OverlayView,
    pub on_close: Callback<()>,
}

/// Renders each overlay into its own container under `<body>`.
struct BodyHost {
    on_close: Callback<()>,
}

struct MountedOverlay {
    container: Element,
    app: AppHandle<ImageOverlay>,
}

impl OverlayHost for BodyHost {
    type Mounted = MountedOverlay;

    fn mount(&self, view: &OverlayView) -> Result<MountedOverlay, FeedError> {
        let document = gloo::utils::document();
        let body = document
            .body()
            .ok_or_else(|| FeedError::MissingElement("body".to_owned()))?;
        let container = document.create_element("div").map_err(dom_err)?;
        body.append_child(&container).map_err(dom_err)?;

        let props = Props {
            view: view.clone(),
            on_close: self.on_close.clone(),
        };
        let app = yew::Renderer::<ImageOverlay>::with_root_and_props(container.clone(), props).render();
        Ok(MountedOverlay { container, app })
    }

    fn unmount(&self, mounted: MountedOverlay) {
        mounted.app.destroy();
        mounted.container.remove();
    }
}

fn open_for(element: &Element, variant: Option<ModalVariant>) {
    let lookup = |name: &str| element.get_attribute(name);
    let variant = variant.unwrap_or_else(|| ModalVariant::detect(lookup));

    // the overlay lives until its close control fires
    let slot: Rc<RefCell<Option<Overlay<BodyHost>>>> = Rc::default();
    let mvslot = slot.clone();
    let on_close = Callback::from(move |_: ()| {
        let overlay = mvslot.borrow_mut().take();
        // tear down after yew has finished dispatching this click
        wasm_bindgen_futures::spawn_local(async move {
            drop(overlay);
        });
    });

    match open_image_modal(BodyHost { on_close }, variant, lookup) {
        Ok(Some(overlay)) => *slot.borrow_mut() = Some(overlay),
        Ok(None) => {}
        Err(e) => error!("could not open image modal: {e}"),
    }
}

fn open_with_shape(element: &Element, circular: bool) {
    let shape = if circular {
        ImageShape::Circular
    } else {
        ImageShape::Rounded
    };
    let variant = ModalVariant::with_shape(shape, |name: &str| element.get_attribute(name));
    open_for(element, Some(variant));
}

fn publish(name: &str, handler: &JsValue) -> anyhow::Result<()> {
    js_sys::Reflect::set(&gloo::utils::window(), &JsValue::from_str(name), handler)
        .map_err(dom_err)?;
    Ok(())
}

/// Puts the page-facing entry points on `window` so inline `onclick`
/// attributes reach them:
///
/// - `handleImageClick(el)`: post images (`data-src`) open rounded, profile
///   photos (`data-image-url`) open circular.
/// - `openImageModal(el, circular)`: same url lookup, explicit shape.
pub fn attach() -> anyhow::Result<()> {
    let handle_click = Closure::<dyn Fn(Element)>::new(|element: Element| open_for(&element, None));
    publish("handleImageClick", handle_click.as_ref())?;
    handle_click.forget();

    let open_shaped = Closure::<dyn Fn(Element, bool)>::new(|element: Element, circular: bool| {
        open_with_shape(&element, circular)
    });
    publish("openImageModal", open_shaped.as_ref())?;
    open_shaped.forget();

    log::debug!(
        "image modal ready for [{}] and [{}]",
        UrlSource::DataSrc.attribute(),
        UrlSource::DataImageUrl.attribute()
    );
    Ok(())
}

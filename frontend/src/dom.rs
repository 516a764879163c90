use common::FeedError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

pub fn dom_err(e: JsValue) -> FeedError {
    FeedError::Dom(format!("{e:?}"))
}

fn cast<T: JsCast>(element: Element, what: &str) -> Result<T, FeedError> {
    element
        .dyn_into::<T>()
        .map_err(|_| FeedError::Dom(format!("`{what}` has an unexpected element type")))
}

pub fn by_id<T: JsCast>(id: &str) -> Result<T, FeedError> {
    let element = gloo::utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| FeedError::MissingElement(id.to_owned()))?;
    cast(element, id)
}

pub fn query<T: JsCast>(root: &Element, selector: &str) -> Result<T, FeedError> {
    let element = root
        .query_selector(selector)
        .map_err(dom_err)?
        .ok_or_else(|| FeedError::MissingElement(selector.to_owned()))?;
    cast(element, selector)
}

/// Current value of an `<input>` or `<textarea>`.
pub fn field_value(element: Element, what: &str) -> Result<String, FeedError> {
    let element = match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Ok(input.value()),
        Err(element) => element,
    };
    cast::<HtmlTextAreaElement>(element, what).map(|t| t.value())
}

pub fn value_by_id(id: &str) -> Result<String, FeedError> {
    field_value(by_id(id)?, id)
}

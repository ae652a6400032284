use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding behaviours to the live document. Behaviours
/// themselves never fail; these only surface from startup wiring.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not an HTML element")]
    NotHtmlElement(&'static str),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(format!("{:?}", value))
    }
}

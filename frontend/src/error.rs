use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    #[error("no window or document available")]
    MissingWindow,
    #[error("nothing matches selector `{selector}`")]
    MissingElement { selector: String },
    #[error("dot index `{raw}` is not a slide position (0..{slides})")]
    InvalidDotIndex { raw: String, slides: usize },
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
use pyo3::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use serde::{Deserialize, Serialize};

pub mod ast;
pub mod error;
pub mod html;
mod lexer;
pub mod parser;
pub mod render;
pub mod serialize;
pub mod types;

pub use ast::{Document, Node, Quote};
pub use error::{QuoteError, Result};
pub use html::to_html;
pub use lexer::{CLOSE_TAG, OPEN_TAG};
pub use parser::{parse, parse_with_options, ParseOptions, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
pub use render::{render, RenderOptions, Renderer};
pub use serialize::{quote_reply, serialize};
pub use types::{Block, RenderOutput};

/// Options accepted by the JSON entry points, e.g.
/// `{"parse": {"max_depth": 8}, "render": {"trim_text": true}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub parse: ParseOptions,
    pub render: RenderOptions,
}

impl EngineOptions {
    /// A blank string means defaults.
    pub fn from_json(options_json: &str) -> Result<Self> {
        if options_json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(options_json).map_err(QuoteError::Options)
    }
}

pub fn render_output(text: &str, options: &EngineOptions) -> RenderOutput {
    let doc = parse_with_options(text, &options.parse);
    Renderer::with_options(options.render.clone()).render_output(&doc)
}

pub fn render_json(text: &str, options_json: &str) -> Result<String> {
    let options = EngineOptions::from_json(options_json)?;
    let output = render_output(text, &options);
    serde_json::to_string_pretty(&output).map_err(QuoteError::Encode)
}

pub fn render_html(text: &str, options_json: &str) -> Result<String> {
    let options = EngineOptions::from_json(options_json)?;
    Ok(to_html(&render_output(text, &options).blocks))
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
fn to_py_err(e: QuoteError) -> PyErr {
    match e {
        QuoteError::Options(_) => PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()),
        QuoteError::Encode(_) => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()),
    }
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pyfunction]
#[pyo3(name = "render_text", signature = (text, options_json = None))]
fn render_text_py(text: String, options_json: Option<String>) -> PyResult<String> {
    render_json(&text, options_json.as_deref().unwrap_or("")).map_err(to_py_err)
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pyfunction]
#[pyo3(name = "render_html", signature = (text, options_json = None))]
fn render_html_py(text: String, options_json: Option<String>) -> PyResult<String> {
    render_html(&text, options_json.as_deref().unwrap_or("")).map_err(to_py_err)
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pyfunction]
#[pyo3(name = "quote_reply")]
fn quote_reply_py(author: String, content: String) -> String {
    quote_reply(&author, &content)
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pymodule]
fn quote_markup(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(render_text_py, m)?)?;
    m.add_function(wrap_pyfunction!(render_html_py, m)?)?;
    m.add_function(wrap_pyfunction!(quote_reply_py, m)?)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_text_wasm(text: &str, options_json: &str) -> std::result::Result<String, JsValue> {
    render_json(text, options_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_html_wasm(text: &str, options_json: &str) -> std::result::Result<String, JsValue> {
    render_html(text, options_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn quote_reply_wasm(author: &str, content: &str) -> String {
    quote_reply(author, content)
}

//! Interactive WebGL2 vector drawing.
//!
//! Pick a draw mode and a color, then click the canvas: every click appends a
//! vertex to the current shape, every mode change starts a new shape, and
//! the whole scene is redrawn in creation order after each change.
//!
//! The [`scene`] and [`storage`] modules hold the shape and vertex
//! bookkeeping and do not touch the browser; everything else is glue around
//! `web-sys`.

mod app;
mod input;
mod renderer;
mod shader;
mod vao;
mod vbo;

pub mod color;
pub mod config;
pub mod coords;
pub mod error;
pub mod logging;
pub mod primitive;
pub mod scene;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement,
    WebGl2RenderingContext as GL,
};

pub use crate::app::DrawingApp;
pub use crate::config::DrawingConfig;
pub use crate::error::{ColorError, Error, GlError, SceneError, StorageError};
pub use crate::primitive::PrimitiveKind;
pub use crate::renderer::gl_mode;
pub use crate::scene::{Scene, SceneState, Shape};
pub use crate::storage::{Color, Position, VertexRange, VertexStorage, DEFAULT_CAPACITY};

const DEFAULT_MODE: &str = "POINTS";

/// Starts drawing on `canvas` with the default configuration.
#[wasm_bindgen]
pub fn start_drawing(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    start(canvas, DrawingConfig::default())?;
    Ok(())
}

/// Starts drawing on `canvas` with `capacity` vertices per shape.
#[wasm_bindgen]
pub fn start_drawing_with_capacity(
    canvas: HtmlCanvasElement,
    capacity: usize,
) -> Result<(), JsValue> {
    start(canvas, DrawingConfig::default().with_capacity(capacity))?;
    Ok(())
}

/// Looks up the configured canvas in the page and starts drawing on it.
#[wasm_bindgen]
pub fn start_drawing_in_page() -> Result<(), JsValue> {
    let config = DrawingConfig::default();
    let canvas = element_by_id::<HtmlCanvasElement>(&document()?, &config.canvas_id)?
        .ok_or_else(|| Error::MissingElement(config.canvas_id.clone()))?;
    start(canvas, config)?;
    Ok(())
}

pub fn start(canvas: HtmlCanvasElement, config: DrawingConfig) -> Result<(), Error> {
    logging::init_logging(config.log_level);
    config.validate()?;

    let gl: GL = canvas
        .get_context("webgl2")
        .map_err(|_| GlError::Context)?
        .ok_or(GlError::Context)?
        .dyn_into::<GL>()
        .map_err(|_| GlError::Context)?;

    let mut app = DrawingApp::new(gl, &config)?;
    app.set_viewport(canvas.width(), canvas.height());

    // the first shape and color come from whatever the inputs currently show
    let document = document()?;
    let mode_select = element_by_id::<HtmlSelectElement>(&document, &config.mode_select_id)?;
    let color_input = element_by_id::<HtmlInputElement>(&document, &config.color_input_id)?;

    let mode = mode_select
        .as_ref()
        .map(|select| select.value())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_MODE.to_owned());
    app.set_mode(&mode)?;

    if let Some(input) = &color_input {
        match color::parse_hex_color(&input.value()) {
            Ok(rgb) => app.set_color(scene::with_alpha(rgb)),
            Err(err) => log::warn!("keeping default color: {}", err),
        }
    }

    app.render();
    info!(
        "drawing on {}x{} canvas, {} vertices per shape",
        canvas.width(),
        canvas.height(),
        config.capacity
    );

    let app = Rc::new(RefCell::new(app));
    input::enable_canvas_clicks(canvas, app.clone()).map_err(dom_failure)?;
    if let Some(select) = mode_select {
        input::enable_mode_select(select, app.clone()).map_err(dom_failure)?;
    }
    if let Some(input) = color_input {
        input::enable_color_input(input, app).map_err(dom_failure)?;
    }
    Ok(())
}

fn document() -> Result<Document, Error> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(Error::NoDocument)
}

/// `Ok(None)` when the element is absent, an error when it has the wrong type.
fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<Option<T>, Error> {
    match document.get_element_by_id(id) {
        Some(element) => element
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| Error::WrongElement(id.to_owned())),
        None => Ok(None),
    }
}

fn dom_failure(err: JsValue) -> Error {
    Error::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

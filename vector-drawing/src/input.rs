use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlInputElement, HtmlSelectElement, MouseEvent};

use crate::app::DrawingApp;
use crate::color::parse_hex_color;
use crate::coords::to_ndc;
use crate::scene::with_alpha;

/// Appends a vertex at every click on the canvas and redraws.
pub fn enable_canvas_clicks(
    canvas: HtmlCanvasElement,
    app: Rc<RefCell<DrawingApp>>,
) -> Result<(), JsValue> {
    let canvas = Rc::new(canvas);
    let canvas_clone = canvas.clone();

    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        // offsets are in css pixels, so scale against the displayed size
        let position = to_ndc(
            event.offset_x() as f64,
            event.offset_y() as f64,
            canvas_clone.client_width() as f64,
            canvas_clone.client_height() as f64,
        );

        let mut app = app.borrow_mut();
        if let Err(err) = app.click(position) {
            warn!("click ignored: {}", err);
            return;
        }
        app.render();
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

/// Starts a new shape whenever a different draw mode is picked.
pub fn enable_mode_select(
    select: HtmlSelectElement,
    app: Rc<RefCell<DrawingApp>>,
) -> Result<(), JsValue> {
    let select = Rc::new(select);
    let select_clone = select.clone();

    let on_change = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let mode = select_clone.value();
        let mut app = app.borrow_mut();
        if let Err(err) = app.set_mode(&mode) {
            warn!("mode change ignored: {}", err);
            return;
        }
        app.render();
    }) as Box<dyn FnMut(_)>);
    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    Ok(())
}

/// Keeps the current color in step with the color input.
pub fn enable_color_input(
    input: HtmlInputElement,
    app: Rc<RefCell<DrawingApp>>,
) -> Result<(), JsValue> {
    let input = Rc::new(input);
    let input_clone = input.clone();

    let on_input = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        match parse_hex_color(&input_clone.value()) {
            Ok(rgb) => app.borrow_mut().set_color(with_alpha(rgb)),
            Err(err) => warn!("color ignored: {}", err),
        }
    }) as Box<dyn FnMut(_)>);
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    Ok(())
}

//! Browser host for the canvas Pong game
//!
//! Draws through the 2D canvas context, follows the mouse for the left
//! paddle and ticks the simulation from `setInterval`.
//! Only built for the wasm32 target.

#![cfg(target_arch = "wasm32")]

mod canvas;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasSurface;
use game_core::{Config, Game, GameLoop, GameMap};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

type SharedLoop = Rc<RefCell<GameLoop<CanvasSurface>>>;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
    // Ignored if a logger is already installed
    console_log::init_with_level(log::Level::Info).ok();
}

/// Size the canvas to the window and start playing on it
#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas '{canvas_id}' not found")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("'{canvas_id}' is not a canvas")))?;

    let (width, height) = fit_to_window(&window, &canvas)?;

    let map = GameMap::new(width as f32, height as f32);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let game = Game::new(map, Config::new(), seed);
    let surface = CanvasSurface::new(&canvas)?;
    let game_loop: SharedLoop = Rc::new(RefCell::new(GameLoop::new(game, surface)));

    listen_pointer(&canvas, Rc::clone(&game_loop))?;
    start_interval(&window, Rc::clone(&game_loop))?;

    log::info!("Pong started on {width}x{height} canvas");
    Ok(())
}

fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Result<(u32, u32), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .map_or(canvas.width(), |w| w as u32);
    let height = window
        .inner_height()?
        .as_f64()
        .map_or(canvas.height(), |h| h as u32);
    canvas.set_width(width);
    canvas.set_height(height);
    Ok((width, height))
}

fn listen_pointer(canvas: &HtmlCanvasElement, game_loop: SharedLoop) -> Result<(), JsValue> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let top = target.get_bounding_client_rect().top();
        game_loop
            .borrow_mut()
            .on_pointer_move(event.client_y() as f32, top as f32);
    });
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    // Lives for the rest of the page
    on_move.forget();
    Ok(())
}

fn start_interval(window: &Window, game_loop: SharedLoop) -> Result<(), JsValue> {
    let period = game_loop.borrow().period_ms() as i32;
    let on_tick = Closure::<dyn FnMut()>::new(move || {
        game_loop.borrow_mut().on_tick();
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        on_tick.as_ref().unchecked_ref(),
        period,
    )?;
    on_tick.forget();
    Ok(())
}

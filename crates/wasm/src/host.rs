//! `wasm-bindgen` entry point and DOM wiring.

use crate::window_surface;
use lumen_core::{FrameLoop, InputSender, LumenError, Schedule, SessionConfig, SurfaceSize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, WebGl2RenderingContext, Window};

type Session = FrameLoop<glow::Context>;

/// Starts a session on `canvas`.
///
/// `config_json` is a `SessionConfig` JSON object (`""` for defaults).
/// Setup failures are logged to the console and returned as an error
/// string; nothing is drawn in that case.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement, config_json: &str) -> Result<(), JsValue> {
    init_logging();
    run(canvas, config_json).inspect_err(|e| log::error!("setup aborted: {e:?}"))
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // A second start() on the same page finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn run(canvas: HtmlCanvasElement, config_json: &str) -> Result<(), JsValue> {
    let config = SessionConfig::from_json_str(config_json).map_err(to_js)?;
    let window = web_sys::window().ok_or("no global window")?;

    let surface = fit_canvas(&window, &canvas).map_err(to_js)?;
    let gl = webgl2_context(&canvas).map_err(to_js)?;

    let mut session = FrameLoop::new(gl, config, surface).map_err(to_js)?;
    log::info!(
        "{} session on {}x{} canvas",
        config.variant.name(),
        surface.width(),
        surface.height()
    );

    if session.start() == Schedule::Stop {
        return Ok(());
    }

    let input = session.input();
    listen_pointer(&canvas, input.clone())?;
    listen_resize(&window, &canvas, input)?;
    animate(session)
}

fn to_js(e: LumenError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Sizes the canvas backing store to the window and returns the new size.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Result<SurfaceSize, LumenError> {
    let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let surface = window_surface(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )?;
    canvas.set_width(surface.width());
    canvas.set_height(surface.height());
    Ok(surface)
}

fn webgl2_context(canvas: &HtmlCanvasElement) -> Result<glow::Context, LumenError> {
    let unavailable = |reason: String| {
        log::error!("WebGL2 not supported: {reason}");
        LumenError::ContextUnavailable(reason)
    };

    let context = canvas
        .get_context("webgl2")
        .map_err(|e| unavailable(format!("{e:?}")))?
        .ok_or_else(|| unavailable("canvas returned no webgl2 context".into()))?
        .dyn_into::<WebGl2RenderingContext>()
        .map_err(|_| unavailable("context is not a WebGl2RenderingContext".into()))?;

    Ok(glow::Context::from_webgl2_context(context))
}

fn listen_pointer(canvas: &HtmlCanvasElement, input: InputSender) -> Result<(), JsValue> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        match SurfaceSize::new(target.width(), target.height()) {
            Ok(surface) => {
                input.pointer_moved(event.offset_x() as f32, event.offset_y() as f32, surface)
            }
            Err(e) => log::warn!("pointer event ignored: {e}"),
        }
    });
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    // Listener lives as long as the page.
    on_move.forget();
    Ok(())
}

fn listen_resize(
    window: &Window,
    canvas: &HtmlCanvasElement,
    input: InputSender,
) -> Result<(), JsValue> {
    let (win, target) = (window.clone(), canvas.clone());
    let on_resize = Closure::<dyn FnMut()>::new(move || match fit_canvas(&win, &target) {
        Ok(surface) => input.resized(surface),
        Err(e) => log::warn!("resize ignored: {e}"),
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

/// Runs the session from `requestAnimationFrame` until the page goes away.
///
/// The callback re-requests itself through a shared slot, so the closure
/// is created first and stored before the first frame is requested.
fn animate(session: Session) -> Result<(), JsValue> {
    let session = Rc::new(RefCell::new(session));
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = slot.clone();

    *first.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        if session.borrow_mut().tick() != Schedule::NextFrame {
            return;
        }
        if let Some(callback) = slot.borrow().as_ref() {
            if let Err(e) = request_frame(callback) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }));

    match first.borrow().as_ref() {
        Some(callback) => request_frame(callback).map(|_| ()),
        None => Err("animation callback missing".into()),
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no global window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

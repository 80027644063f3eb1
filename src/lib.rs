#![cfg(target_arch = "wasm32")]
//! Single-page portfolio front end: a WebGPU scene that leans with the
//! pointer and scroll position, plus the DOM blocks below it (comparison
//! slider, filterable gallery, timeline, custom cursor).

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod blocks;
mod constants;
mod content;
mod cursor;
mod dom;
mod events;
mod frame;
mod geometry;
mod motion;
mod render;
mod scene;
mod signals;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    // Seed the signal container with the real viewport and scroll offset so
    // the first frame is already correct.
    let signals = Rc::new(RefCell::new(signals::InputSignals::default()));
    {
        let mut s = signals.borrow_mut();
        let (w, h) = dom::viewport_size(&window);
        s.set_viewport(w, h);
        let top = window.scroll_y().unwrap_or(0.0) as f32;
        s.set_scroll(top, dom::document_height(&document));
    }
    let cursor_fx = Rc::new(RefCell::new(content::CursorFx::default()));

    let graph = scene::portfolio_scene();
    let motion = motion::MotionState::new(graph.policies(), motion::SmoothingMode::FrameLocked);

    let assets = Rc::new(RefCell::new(assets::AssetStore::new()));
    assets::AssetStore::begin_loads(assets.clone(), &graph);

    let mut hooks = events::EventHooks::new();
    events::wire_signal_handlers(&mut hooks, &window, &canvas, signals.clone(), cursor_fx.clone());
    blocks::wire_compare_slider(&mut hooks, &document);
    blocks::wire_gallery(&mut hooks, &document);
    blocks::render_timeline(&document);
    hooks.start();

    let cursor_layer = match cursor::CursorLayer::create(&document) {
        Ok(layer) => Some(layer),
        Err(e) => {
            log::warn!("cursor layer unavailable: {}", e);
            None
        }
    };

    // A page without WebGPU still gets the DOM blocks and cursor.
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        signals,
        cursor_fx,
        assets,
        graph,
        motion,
        canvas,
        cursor_layer,
        gpu,
        hooks,
        last_instant: Instant::now(),
        last_camera: scene::CameraNode {
            eye: glam::Vec3::new(constants::CAMERA_BASE_X, 0.0, constants::CAMERA_BASE_Z),
            target: glam::Vec3::new(
                constants::CAMERA_BASE_X,
                0.0,
                constants::CAMERA_BASE_Z - 1.0,
            ),
            fovy: constants::CAMERA_FOVY,
        },
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

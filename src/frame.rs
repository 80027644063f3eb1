use crate::assets::AssetStore;
use crate::content::CursorFx;
use crate::cursor::CursorLayer;
use crate::events::EventHooks;
use crate::motion::MotionState;
use crate::render;
use crate::scene::{self, CameraNode, SceneGraph};
use crate::signals::InputSignals;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub signals: Rc<RefCell<InputSignals>>,
    pub cursor_fx: Rc<RefCell<CursorFx>>,
    pub assets: Rc<RefCell<AssetStore>>,

    pub graph: SceneGraph,
    pub motion: MotionState,

    pub canvas: web::HtmlCanvasElement,
    pub cursor_layer: Option<CursorLayer>,
    pub gpu: Option<render::GpuState<'a>>,
    /// Listeners stay attached for as long as the loop context lives.
    pub hooks: EventHooks,

    pub last_instant: Instant,
    /// Picking uses the previous frame's camera; one frame of lag is
    /// imperceptible at hover granularity.
    pub last_camera: CameraNode,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let (snapshot, pointer_px, viewport) = {
            let s = self.signals.borrow();
            (s.snapshot(), s.pointer_px, s.viewport)
        };

        // Hover pick in canvas backing pixels (client coords scaled by the
        // device pixel ratio baked into the backing size).
        self.motion.clear_hover();
        if viewport.x > 0.0 && viewport.y > 0.0 {
            let w = self.canvas.width() as f32;
            let h = self.canvas.height() as f32;
            let sx = pointer_px.x * (w / viewport.x);
            let sy = pointer_px.y * (h / viewport.y);
            if let Some(hit) = scene::pick_entity(
                &self.graph,
                self.motion.transforms(),
                &self.last_camera,
                w,
                h,
                sx,
                sy,
            ) {
                self.motion.set_hovered(hit, true);
            }
        }

        self.motion.step(&snapshot, dt_sec);
        let frame = scene::compose(&self.graph, self.motion.transforms());
        self.last_camera = frame.camera;

        {
            let mut fx = self.cursor_fx.borrow_mut();
            fx.step();
            if let Some(layer) = &mut self.cursor_layer {
                layer.apply(&fx);
            }
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&frame, &self.assets.borrow(), dt_sec) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

//! Browser event wiring.
//!
//! Every listener is owned by an [`EventHooks`] object: `start()` attaches,
//! `stop()` (or drop) detaches. Handlers only mutate shared state containers;
//! the frame loop reads them on its next tick.

use crate::content::CursorFx;
use crate::dom;
use crate::signals::InputSignals;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Hook {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

/// Scoped ownership of a set of DOM listeners.
pub struct EventHooks {
    hooks: Vec<Hook>,
    attached: bool,
}

impl EventHooks {
    pub fn new() -> Self {
        Self {
            hooks: Vec::new(),
            attached: false,
        }
    }

    /// Register a handler; it attaches on `start()` (or immediately when the
    /// hooks are already live).
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let hook = Hook {
            target: target.clone(),
            kind,
            callback: Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>),
        };
        if self.attached {
            let _ = hook
                .target
                .add_event_listener_with_callback(hook.kind, hook.callback.as_ref().unchecked_ref());
        }
        self.hooks.push(hook);
    }

    pub fn start(&mut self) {
        if self.attached {
            return;
        }
        for hook in &self.hooks {
            let _ = hook
                .target
                .add_event_listener_with_callback(hook.kind, hook.callback.as_ref().unchecked_ref());
        }
        self.attached = true;
    }

    pub fn stop(&mut self) {
        if !self.attached {
            return;
        }
        for hook in &self.hooks {
            let _ = hook.target.remove_event_listener_with_callback(
                hook.kind,
                hook.callback.as_ref().unchecked_ref(),
            );
        }
        self.attached = false;
    }
}

impl Drop for EventHooks {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Wire pointer, scroll, click and resize into the shared signal container
/// and the cursor effect state.
pub fn wire_signal_handlers(
    hooks: &mut EventHooks,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    signals: Rc<RefCell<InputSignals>>,
    cursor_fx: Rc<RefCell<CursorFx>>,
) {
    let target: web::EventTarget = window.clone().into();

    {
        let signals = signals.clone();
        let cursor_fx = cursor_fx.clone();
        hooks.add(&target, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
                signals.borrow_mut().set_pointer(x, y);
                cursor_fx.borrow_mut().set_pointer(Vec2::new(x, y));
            }
        });
    }

    {
        let signals = signals.clone();
        let window = window.clone();
        hooks.add(&target, "scroll", move |_| {
            let doc_height = window
                .document()
                .map(|d| dom::document_height(&d))
                .unwrap_or(0.0);
            let top = window.scroll_y().unwrap_or(0.0) as f32;
            signals.borrow_mut().set_scroll(top, doc_height);
        });
    }

    {
        let cursor_fx = cursor_fx.clone();
        hooks.add(&target, "click", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                cursor_fx
                    .borrow_mut()
                    .spawn_burst(at, &mut rand::thread_rng());
            }
        });
    }

    {
        let window = window.clone();
        let canvas = canvas.clone();
        hooks.add(&target, "resize", move |_| {
            let (w, h) = dom::viewport_size(&window);
            signals.borrow_mut().set_viewport(w, h);
            dom::sync_canvas_backing_size(&canvas);
        });
    }
}

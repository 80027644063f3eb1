//! DOM layer for the custom cursor: a dot that tracks the pointer, a lagging
//! glow trail, and click-burst particles. State lives in
//! [`crate::content::CursorFx`]; this module only mirrors it into fixed
//! positioned elements once per frame.

use crate::content::CursorFx;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CursorLayer {
    dot: web::HtmlElement,
    trail: web::HtmlElement,
    particles: Vec<web::HtmlElement>,
    document: web::Document,
}

fn make_div(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

impl CursorLayer {
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        let dot = make_div(document)?;
        let trail = make_div(document)?;
        for el in [&trail, &dot] {
            body.append_child(el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        Ok(Self {
            dot,
            trail,
            particles: Vec::new(),
            document: document.clone(),
        })
    }

    /// Mirror the effect state into element styles for this frame.
    pub fn apply(&mut self, fx: &CursorFx) {
        dom::set_style(
            &self.dot,
            &format!(
                "position:fixed;top:{}px;left:{}px;width:20px;height:20px;\
                 background:white;border-radius:50%;transform:translate(-50%,-50%);\
                 pointer-events:none;mix-blend-mode:difference;z-index:9999",
                fx.pointer.y, fx.pointer.x
            ),
        );
        dom::set_style(
            &self.trail,
            &format!(
                "position:fixed;top:{}px;left:{}px;width:50px;height:50px;\
                 background:rgba(255,165,0,0.5);border-radius:50%;\
                 transform:translate(-50%,-50%) scale(1.2);filter:blur(8px);\
                 pointer-events:none;z-index:9998",
                fx.trail.y, fx.trail.x
            ),
        );

        // Grow the element pool to the live particle count, hide the rest.
        let live = fx.particles();
        while self.particles.len() < live.len() {
            if let Ok(el) = make_div(&self.document) {
                if let Some(body) = self.document.body() {
                    let _ = body.append_child(&el);
                }
                self.particles.push(el);
            } else {
                break;
            }
        }
        for (el, p) in self.particles.iter().zip(live) {
            dom::set_style(
                el,
                &format!(
                    "position:fixed;top:{}px;left:{}px;width:{}px;height:{}px;\
                     background:rgba(255,165,0,{});border-radius:50%;\
                     transform:translate(-50%,-50%);pointer-events:none;z-index:9997",
                    p.position.y, p.position.x, p.size, p.size, p.alpha
                ),
            );
        }
        for el in self.particles.iter().skip(live.len()) {
            dom::set_style(el, "display:none");
        }
    }
}

//! DOM wiring for the marketing sections below the scene canvas: the
//! before/after comparison slider, the filterable project gallery, and the
//! career timeline. Each block owns its own state and never touches the 3D
//! pipeline.

use crate::content::{
    CompareSlider, Gallery, GALLERY_SLIDES, SLIDER_CAPTIONS, TIMELINE,
};
use crate::dom;
use crate::events::EventHooks;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Before/after slider ----------------

pub fn wire_compare_slider(hooks: &mut EventHooks, document: &web::Document) {
    let Some(container) = dom::element_by_id(document, "compare") else {
        log::info!("no #compare block on this page");
        return;
    };
    let slider = Rc::new(RefCell::new(CompareSlider::new(SLIDER_CAPTIONS.len())));
    apply_slider(document, &slider.borrow());

    let target: web::EventTarget = container.clone().into();
    let document = document.clone();
    hooks.add(&target, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = container.get_bounding_client_rect();
        let mut s = slider.borrow_mut();
        s.set_from_pointer(ev.client_x() as f32, rect.left() as f32, rect.width() as f32);
        apply_slider(&document, &s);
    });
}

fn apply_slider(document: &web::Document, slider: &CompareSlider) {
    if let Some(divider) = dom::element_by_id(document, "compare-divider") {
        dom::set_style(
            &divider,
            &format!(
                "position:absolute;top:0;left:{}%;width:3px;height:100%;\
                 background:white;transform:translateX(-50%);z-index:3",
                slider.position()
            ),
        );
    }
    for i in 0..SLIDER_CAPTIONS.len() {
        if let Some(after) = dom::element_by_id(document, &format!("compare-after-{}", i)) {
            dom::set_style(
                &after,
                &format!(
                    "position:absolute;width:100%;height:100%;z-index:2;\
                     clip-path:inset(0 {}% 0 0)",
                    slider.clip_inset_percent()
                ),
            );
        }
    }
    if let Some(caption) = dom::element_by_id(document, "compare-caption") {
        caption.set_text_content(Some(SLIDER_CAPTIONS[slider.active_index()]));
    }
}

// ---------------- Filterable gallery ----------------

pub fn wire_gallery(hooks: &mut EventHooks, document: &web::Document) {
    let Some(select) = document
        .get_element_by_id("project-filter")
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    else {
        log::info!("no #project-filter on this page");
        return;
    };
    let gallery = Rc::new(RefCell::new(Gallery::new(GALLERY_SLIDES.to_vec())));
    apply_gallery(document, &gallery.borrow());

    let target: web::EventTarget = select.clone().into();
    let document = document.clone();
    hooks.add(&target, "change", move |_| {
        let mut g = gallery.borrow_mut();
        g.set_filter(&select.value());
        apply_gallery(&document, &g);
    });
}

fn apply_gallery(document: &web::Document, gallery: &Gallery) {
    let visible = gallery.visible();
    for (i, slide) in gallery.slides().iter().enumerate() {
        let Some(el) = dom::element_by_id(document, &format!("slide-{}", i)) else {
            continue;
        };
        match visible.iter().position(|&v| v == i) {
            Some(nth) => {
                let at = gallery.layout(nth, slide);
                // Gallery units are scene-ish; 40px per unit keeps the grid shape.
                dom::set_style(
                    &el,
                    &format!(
                        "position:absolute;transform:translate({}px,{}px)",
                        at.x * 40.0,
                        -at.y * 40.0
                    ),
                );
            }
            None => dom::set_style(&el, "display:none"),
        }
    }
}

// ---------------- Career timeline ----------------

/// The timeline is static content; build it once at startup.
pub fn render_timeline(document: &web::Document) {
    let Some(container) = dom::element_by_id(document, "timeline") else {
        log::info!("no #timeline on this page");
        return;
    };
    for entry in &TIMELINE {
        let Ok(item) = document.create_element("div") else {
            continue;
        };
        let _ = item.set_attribute("class", "timeline-item");
        if let Ok(title) = document.create_element("h3") {
            title.set_text_content(Some(entry.title));
            let _ = item.append_child(&title);
        }
        if let Ok(body) = document.create_element("p") {
            body.set_text_content(Some(entry.description));
            let _ = item.append_child(&body);
        }
        for action in entry.actions {
            if let Ok(link) = document.create_element("button") {
                let _ = link.set_attribute("class", "timeline-action");
                link.set_text_content(Some(action));
                let _ = item.append_child(&link);
            }
        }
        let _ = container.append_child(&item);
    }
}

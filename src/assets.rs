//! Asynchronous asset loading.
//!
//! Sprite textures decode through an offscreen 2D canvas; model files are
//! fetched as bytes and parsed by `geometry::mesh_from_glb`. Loads run on
//! `spawn_local` tasks that write back into the shared [`AssetStore`]; the
//! renderer uploads whatever has become ready and omits the rest. A failed
//! load degrades to an omitted entity with a single diagnostic warning.

use crate::geometry::{self, MeshData};
use crate::scene::{EntityKind, SceneGraph};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub enum AssetState<T> {
    Pending,
    Ready(T),
    Failed,
}

pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Default)]
pub struct AssetStore {
    textures: FnvHashMap<&'static str, AssetState<TextureData>>,
    meshes: FnvHashMap<&'static str, AssetState<MeshData>>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texture(&self, path: &str) -> Option<&TextureData> {
        match self.textures.get(path) {
            Some(AssetState::Ready(t)) => Some(t),
            _ => None,
        }
    }

    pub fn mesh(&self, path: &str) -> Option<&MeshData> {
        match self.meshes.get(path) {
            Some(AssetState::Ready(m)) => Some(m),
            _ => None,
        }
    }

    /// Kick off one load task per referenced asset in the scene table.
    pub fn begin_loads(store: Rc<RefCell<Self>>, graph: &SceneGraph) {
        for d in graph.descriptors() {
            let Some(path) = d.asset else { continue };
            match d.kind {
                EntityKind::Letter => {
                    let already = store.borrow().textures.contains_key(path);
                    if already {
                        continue;
                    }
                    store.borrow_mut().textures.insert(path, AssetState::Pending);
                    let store = store.clone();
                    spawn_local(async move {
                        let state = match load_texture(path).await {
                            Ok(t) => AssetState::Ready(t),
                            Err(e) => {
                                log::warn!("texture {} failed to load, omitting: {}", path, e);
                                AssetState::Failed
                            }
                        };
                        store.borrow_mut().textures.insert(path, state);
                    });
                }
                EntityKind::Model => {
                    let already = store.borrow().meshes.contains_key(path);
                    if already {
                        continue;
                    }
                    store.borrow_mut().meshes.insert(path, AssetState::Pending);
                    let store = store.clone();
                    spawn_local(async move {
                        let state = match load_mesh(path).await {
                            Ok(m) => {
                                log::info!(
                                    "model {} ready ({} vertices)",
                                    path,
                                    m.vertices.len()
                                );
                                AssetState::Ready(m)
                            }
                            Err(e) => {
                                log::warn!("model {} failed to load, omitting: {}", path, e);
                                AssetState::Failed
                            }
                        };
                        store.borrow_mut().meshes.insert(path, state);
                    });
                }
                _ => {}
            }
        }
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

async fn fetch_bytes(path: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned status {}", path, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_mesh(path: &str) -> anyhow::Result<MeshData> {
    let bytes = fetch_bytes(path).await?;
    geometry::mesh_from_glb(&bytes)
}

/// Decode an image by drawing it onto an offscreen 2D canvas and reading the
/// pixels back, which sidesteps format handling entirely.
async fn load_texture(path: &str) -> anyhow::Result<TextureData> {
    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let img: web::HtmlImageElement = document
        .create_element("img")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    img.set_cross_origin(Some("anonymous"));

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(path);
    JsFuture::from(loaded)
        .await
        .map_err(|_| anyhow::anyhow!("image {} failed to load", path))?;

    let width = img.natural_width();
    let height = img.natural_height();
    if width == 0 || height == 0 {
        anyhow::bail!("image {} decoded to zero size", path);
    }

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(js_err)?;
    ctx.draw_image_with_html_image_element(&img, 0.0, 0.0)
        .map_err(js_err)?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_err)?;
    Ok(TextureData {
        width,
        height,
        rgba: data.data().0,
    })
}

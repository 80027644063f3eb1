//! Raw input signal normalization.
//!
//! Event handlers are the sole writers of [`InputSignals`]; the frame loop
//! reads a [`SignalSnapshot`] once per tick. Both sides run on the same
//! thread, so last-write-wins is the only ordering that matters.

use glam::Vec2;

/// Pointer position normalized to [-1, 1] on both axes, Y up.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerVector {
    pub x: f32,
    pub y: f32,
}

impl PointerVector {
    /// Normalize viewport-relative client coordinates.
    ///
    /// A degenerate viewport (hidden tab reports zero size) yields the
    /// centered vector instead of propagating non-finite values.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: ((client_x / width) * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: (-(client_y / height) * 2.0 + 1.0).clamp(-1.0, 1.0),
        }
    }
}

/// Vertical scroll offset normalized to [0, 1].
///
/// When the content fits in one screen the denominator collapses; that case
/// reads as 0 rather than NaN.
#[inline]
pub fn scroll_ratio(scroll_top: f32, doc_height: f32, viewport_height: f32) -> f32 {
    let span = doc_height - viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    (scroll_top / span).clamp(0.0, 1.0)
}

/// Shared raw-signal container. Mutated by event handlers, read each frame.
#[derive(Default, Clone, Copy, Debug)]
pub struct InputSignals {
    pub pointer: PointerVector,
    /// Pointer in canvas backing-store pixels, for picking and the cursor layer.
    pub pointer_px: Vec2,
    pub scroll: f32,
    pub viewport: Vec2,
}

impl InputSignals {
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32) {
        self.pointer =
            PointerVector::from_client(client_x, client_y, self.viewport.x, self.viewport.y);
        self.pointer_px = Vec2::new(client_x, client_y);
    }

    pub fn set_scroll(&mut self, scroll_top: f32, doc_height: f32) {
        self.scroll = scroll_ratio(scroll_top, doc_height, self.viewport.y);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Immutable copy handed to the motion state for one frame.
    #[inline]
    pub fn snapshot(&self) -> SignalSnapshot {
        SignalSnapshot {
            pointer: self.pointer,
            scroll: self.scroll,
        }
    }
}

/// The values a single frame sees; handlers firing mid-frame affect the next.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct SignalSnapshot {
    pub pointer: PointerVector,
    pub scroll: f32,
}

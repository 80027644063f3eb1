//! Local state for the ancillary page blocks: the before/after comparison
//! slider, the filterable project gallery, the career timeline, and the
//! custom cursor layer. None of these read the 3D pipeline.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

// ---------------- Before/after slider ----------------

/// Captions shown over the comparison block, one per after-image.
pub const SLIDER_CAPTIONS: [&str; 3] = ["Concept", "Art Direction", "Launch"];

/// Divider position in [0, 100] over a stack of after-images. The active
/// caption/image index moves in steps of `100 / segments` from the right.
#[derive(Clone, Copy, Debug)]
pub struct CompareSlider {
    position: f32,
    segments: usize,
}

impl CompareSlider {
    pub fn new(segments: usize) -> Self {
        Self {
            position: SLIDER_MAX / 2.0,
            segments: segments.max(1),
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Update from a pointer X over the block. A zero-width block leaves the
    /// position unchanged.
    pub fn set_from_pointer(&mut self, client_x: f32, block_left: f32, block_width: f32) {
        if block_width <= 0.0 {
            return;
        }
        self.position = ((client_x - block_left) / block_width * SLIDER_MAX).clamp(0.0, SLIDER_MAX);
    }

    pub fn set_position(&mut self, position: f32) {
        self.position = position.clamp(0.0, SLIDER_MAX);
    }

    /// Which after-image/caption is active for the current position.
    pub fn active_index(&self) -> usize {
        let step = SLIDER_MAX / self.segments as f32;
        (((SLIDER_MAX - self.position) / step) as usize).min(self.segments - 1)
    }

    /// Right inset percentage for the after-image clip rect.
    pub fn clip_inset_percent(&self) -> f32 {
        SLIDER_MAX - self.position
    }
}

// ---------------- Filterable gallery ----------------

#[derive(Clone, Copy, Debug)]
pub struct GallerySlide {
    pub asset: &'static str,
    pub category: &'static str,
    /// Authored position used when no filter is applied.
    pub home: Vec2,
}

pub const GALLERY_SLIDES: [GallerySlide; 9] = [
    GallerySlide { asset: "assets/projects/man_dancing.jpg", category: "AI", home: Vec2::new(-4.5, 2.0) },
    GallerySlide { asset: "assets/projects/girls_dancing.jpg", category: "Marketing", home: Vec2::new(0.5, 2.0) },
    GallerySlide { asset: "assets/projects/image3.png", category: "Web Development", home: Vec2::new(5.5, 2.0) },
    GallerySlide { asset: "assets/projects/girls_dancing.jpg", category: "Marketing", home: Vec2::new(-3.5, -2.0) },
    GallerySlide { asset: "assets/projects/man_dancing.jpg", category: "AI", home: Vec2::new(1.5, -2.0) },
    GallerySlide { asset: "assets/projects/image3.png", category: "Web Development", home: Vec2::new(6.5, -2.0) },
    GallerySlide { asset: "assets/projects/man_dancing.jpg", category: "AI", home: Vec2::new(-2.5, -6.0) },
    GallerySlide { asset: "assets/projects/girls_dancing.jpg", category: "Marketing", home: Vec2::new(2.5, -6.0) },
    GallerySlide { asset: "assets/projects/image3.png", category: "Web Development", home: Vec2::new(7.5, -6.0) },
];

pub struct Gallery {
    slides: Vec<GallerySlide>,
    filter: String,
}

impl Gallery {
    pub fn new(slides: Vec<GallerySlide>) -> Self {
        Self {
            slides,
            filter: "All".to_owned(),
        }
    }

    pub fn slides(&self) -> &[GallerySlide] {
        &self.slides
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_owned();
    }

    /// Indices of visible slides, preserving the authored order.
    pub fn visible(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| self.filter == "All" || s.category == self.filter)
            .map(|(i, _)| i)
            .collect()
    }

    /// Grid position for the nth visible slide: the authored spot when
    /// unfiltered, otherwise a packed 3-column grid.
    pub fn layout(&self, nth_visible: usize, slide: &GallerySlide) -> Vec2 {
        if self.filter == "All" {
            return slide.home;
        }
        let row = nth_visible / GALLERY_COLUMNS;
        let col = nth_visible % GALLERY_COLUMNS;
        Vec2::new(
            col as f32 * GALLERY_COLUMN_SPACING - GALLERY_COLUMN_SPACING,
            -(row as f32) * GALLERY_ROW_SPACING,
        )
    }
}

// ---------------- Career timeline ----------------

pub struct TimelineEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Labels for the entry's action links, rendered in order.
    pub actions: &'static [&'static str],
}

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        title: "8 years in Brand Management in FMCG",
        description: "Employed by FLAYR and Suedlich-t agencies as an art director. \
            Realized web projects for company websites and clients, and creative \
            content for Henkel, Oral-B and Swiss banks. Completed a front-end web \
            development course at ReDI School.",
        actions: &["View projects"],
    },
    TimelineEntry {
        title: "4 years enthusiastic self-learning web development",
        description: "Relocated to Germany and learned German to C1 level. Studied \
            media design at Wildner Akademie, launched a personal website and \
            created brand concepts in Adobe programs.",
        actions: &["Certificates"],
    },
    TimelineEntry {
        title: "3 years of AI art direction for well-known brands",
        description: "Built a career in brand management at FMCG companies. Managed \
            projects for Listerine, Gliss Kur and Syoss, and discovered a passion \
            for oil painting.",
        actions: &["View projects", "Contact"],
    },
];

// ---------------- Custom cursor ----------------

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// Cursor dot, lagging trail, and click-burst particles, all in client
/// pixels. The dot tracks the pointer directly; only the trail is smoothed.
pub struct CursorFx {
    pub pointer: Vec2,
    pub trail: Vec2,
    particles: Vec<Particle>,
    initialized: bool,
}

impl Default for CursorFx {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            trail: Vec2::ZERO,
            particles: Vec::new(),
            initialized: false,
        }
    }
}

impl CursorFx {
    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = position;
        if !self.initialized {
            self.trail = position;
            self.initialized = true;
        }
    }

    pub fn spawn_burst(&mut self, at: Vec2, rng: &mut impl Rng) {
        for _ in 0..PARTICLES_PER_CLICK {
            self.particles.push(Particle {
                position: at,
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                ),
                size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
                alpha: 1.0,
            });
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One frame of trail lag and particle fade; spent particles drop out.
    pub fn step(&mut self) {
        self.trail += (self.pointer - self.trail) * TRAIL_FOLLOW_FACTOR;
        for p in &mut self.particles {
            p.position += p.velocity;
            p.alpha -= PARTICLE_FADE_PER_FRAME;
        }
        self.particles.retain(|p| p.alpha > 0.0);
    }
}

use serde::{Deserialize, Serialize};

use crate::motion::interpolate;

const OPACITY_BREAKPOINTS: [f64; 4] = [0.0, 0.2, 0.8, 1.0];
const SCALE_BREAKPOINTS: [f64; 2] = [0.0, 0.2];
const SCALE_IN_FROM: f64 = 0.8;
/// Pixels travelled at full local progress for a parallax factor of 1.
const PARALLAX_DISTANCE: f64 = 100.0;

/// How a scroll section animates while it travels through the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionAnimationConfig {
    pub fade_in: bool,
    pub fade_out: bool,
    pub scale_in: bool,
    pub parallax_factor: f64,
    pub pinned: bool,
}

impl SectionAnimationConfig {
    pub const fn new() -> Self {
        Self {
            fade_in: false,
            fade_out: false,
            scale_in: false,
            parallax_factor: 0.0,
            pinned: false,
        }
    }

    pub const fn fade_in(mut self) -> Self {
        self.fade_in = true;
        self
    }

    pub const fn fade_out(mut self) -> Self {
        self.fade_out = true;
        self
    }

    pub const fn scale_in(mut self) -> Self {
        self.scale_in = true;
        self
    }

    pub const fn parallax(mut self, factor: f64) -> Self {
        self.parallax_factor = factor;
        self
    }

    pub const fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn has_parallax(&self) -> bool {
        self.parallax_factor != 0.0
    }

    /// Values for the wrapped content at local `progress`.
    pub fn derive(&self, progress: f64) -> DerivedAnimationValues {
        let opacity = interpolate(
            progress,
            &OPACITY_BREAKPOINTS,
            &[
                if self.fade_in { 0.0 } else { 1.0 },
                1.0,
                1.0,
                if self.fade_out { 0.0 } else { 1.0 },
            ],
        );
        let scale = interpolate(
            progress,
            &SCALE_BREAKPOINTS,
            &[if self.scale_in { SCALE_IN_FROM } else { 1.0 }, 1.0],
        );
        let translate_y = if self.has_parallax() {
            interpolate(
                progress,
                &[0.0, 1.0],
                &[0.0, self.parallax_factor * PARALLAX_DISTANCE],
            )
        } else {
            0.0
        };
        DerivedAnimationValues {
            opacity,
            scale,
            translate_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedAnimationValues {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl Default for DerivedAnimationValues {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate_y: 0.0,
        }
    }
}

impl DerivedAnimationValues {
    /// Inline style for the animated element. `translateY` is only emitted
    /// when `with_translate` is set.
    pub fn to_style(&self, with_translate: bool) -> String {
        let transform = if with_translate {
            format!(
                "translateY({:.2}px) scale({:.4})",
                self.translate_y, self.scale
            )
        } else {
            format!("scale({:.4})", self.scale)
        };
        format!(
            "opacity: {:.4}; transform: {transform}; will-change: opacity, transform;",
            self.opacity
        )
    }
}

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::motion::interpolate;

pub const PRIMARY_COLOR: &str = "#0f4331";
pub const SECONDARY_COLOR: &str = "#b8860b";
pub const DEFAULT_SEED: u64 = 0x0d1a_4d0e;
pub const HERO_ACCENT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Density {
    Low,
    #[default]
    Medium,
    High,
}

impl Density {
    pub fn count(self) -> usize {
        match self {
            Self::Low => 20,
            Self::Medium => 40,
            Self::High => 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diamond {
    pub id: usize,
    /// Horizontal position in percent of the container.
    pub x: f64,
    /// Vertical position in percent of the container.
    pub y: f64,
    pub size: f64,
    pub color: String,
    pub rotation: f64,
    pub parallax_factor: f64,
    pub depth: f64,
}

impl Diamond {
    /// Scroll-linked `(x, y)` displacement in pixels. Even ids drift up,
    /// every third id drifts right.
    pub fn offset(&self, scroll_y: f64) -> (f64, f64) {
        let y_sign = if self.id % 2 == 0 { -1.0 } else { 1.0 };
        let x_sign = if self.id % 3 == 0 { 1.0 } else { -1.0 };
        let y = scroll_y * self.parallax_factor * y_sign;
        let x = scroll_y * self.parallax_factor * 0.3 * x_sign;
        (x, y)
    }

    pub fn rotation_for(&self, hovered: bool) -> f64 {
        if hovered {
            self.rotation + 45.0
        } else {
            self.rotation
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiamondField {
    pub density: Density,
    pub primary_color: String,
    pub secondary_color: String,
    pub seed: u64,
}

impl Default for DiamondField {
    fn default() -> Self {
        Self {
            density: Density::default(),
            primary_color: PRIMARY_COLOR.to_string(),
            secondary_color: SECONDARY_COLOR.to_string(),
            seed: DEFAULT_SEED,
        }
    }
}

impl DiamondField {
    /// Generates the diamonds for this field. The same field always yields
    /// the same diamonds, so server and client renders agree.
    pub fn generate(&self) -> Vec<Diamond> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.density.count())
            .map(|id| Diamond {
                id,
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: rng.gen_range(40.0..100.0),
                color: if rng.gen_bool(0.5) {
                    self.primary_color.clone()
                } else {
                    self.secondary_color.clone()
                },
                rotation: rng.gen_range(0.0..45.0),
                parallax_factor: rng.gen_range(0.1..0.6),
                depth: rng.gen_range(0.0..5.0),
            })
            .collect()
    }
}

/// CSS filter for the background at page progress `progress`.
pub fn background_filter(progress: f64) -> String {
    let blur = interpolate(progress, &[0.0, 0.5, 1.0], &[0.0, 2.0, 5.0]);
    let brightness = interpolate(progress, &[0.0, 0.5, 1.0], &[1.0, 0.95, 0.9]);
    format!("blur({blur:.2}px) brightness({brightness:.3})")
}

/// Small decorative diamonds floating over the hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroAccent {
    pub index: usize,
    pub top: f64,
    pub left: f64,
    pub scale: f64,
    pub drift_x: f64,
    pub duration: f64,
}

impl HeroAccent {
    pub fn translate_y(&self, scroll_y: f64) -> f64 {
        let sign = if self.index % 2 == 0 { 1.0 } else { -1.0 };
        (scroll_y / 10.0).min(50.0) * sign
    }
}

pub fn hero_accents(seed: u64) -> Vec<HeroAccent> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..HERO_ACCENT_COUNT)
        .map(|index| HeroAccent {
            index,
            top: rng.gen_range(0.0..100.0),
            left: rng.gen_range(0.0..100.0),
            scale: rng.gen_range(0.5..2.0),
            drift_x: rng.gen_range(-10.0..10.0),
            duration: rng.gen_range(3.0..8.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_density_counts() {
        for (density, count) in [(Density::Low, 20), (Density::Medium, 40), (Density::High, 60)] {
            let field = DiamondField {
                density,
                ..DiamondField::default()
            };
            assert_eq!(field.generate().len(), count);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let field = DiamondField::default();
        assert_eq!(field.generate(), field.generate());

        let other = DiamondField {
            seed: 7,
            ..DiamondField::default()
        };
        assert_ne!(field.generate(), other.generate());
    }

    #[test]
    fn test_diamonds_within_ranges() {
        let field = DiamondField {
            density: Density::High,
            ..DiamondField::default()
        };
        for (i, d) in field.generate().iter().enumerate() {
            assert_eq!(d.id, i);
            assert!((0.0..100.0).contains(&d.x));
            assert!((0.0..100.0).contains(&d.y));
            assert!((40.0..100.0).contains(&d.size));
            assert!((0.0..45.0).contains(&d.rotation));
            assert!((0.1..0.6).contains(&d.parallax_factor));
            assert!((0.0..5.0).contains(&d.depth));
            assert!(d.color == PRIMARY_COLOR || d.color == SECONDARY_COLOR);
        }
    }

    #[test]
    fn test_diamond_offsets() {
        let mut d = DiamondField::default().generate().remove(0);
        d.parallax_factor = 0.5;
        // id 0: even and divisible by three
        assert_eq!(d.offset(100.0), (15.0, -50.0));
        d.id = 1;
        assert_eq!(d.offset(100.0), (-15.0, 50.0));
        d.id = 3;
        assert_eq!(d.offset(100.0), (15.0, 50.0));
        assert_eq!(d.offset(0.0), (0.0, 0.0));
    }

    #[test]
    fn test_hover_rotation() {
        let mut d = DiamondField::default().generate().remove(0);
        d.rotation = 10.0;
        assert_eq!(d.rotation_for(false), 10.0);
        assert_eq!(d.rotation_for(true), 55.0);
    }

    #[test]
    fn test_background_filter() {
        assert_eq!(background_filter(0.0), "blur(0.00px) brightness(1.000)");
        assert_eq!(background_filter(0.5), "blur(2.00px) brightness(0.950)");
        assert_eq!(background_filter(1.0), "blur(5.00px) brightness(0.900)");
    }

    #[test]
    fn test_hero_accents() {
        let accents = hero_accents(DEFAULT_SEED);
        assert_eq!(accents.len(), HERO_ACCENT_COUNT);
        assert_eq!(accents, hero_accents(DEFAULT_SEED));
        for a in &accents {
            assert!((0.5..2.0).contains(&a.scale));
            assert!((3.0..8.0).contains(&a.duration));
        }
        assert_eq!(accents[0].translate_y(200.0), 20.0);
        assert_eq!(accents[1].translate_y(200.0), -20.0);
        assert_eq!(accents[0].translate_y(5000.0), 50.0);
    }
}

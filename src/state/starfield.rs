//! Twinkling background stars with a cheap size-scaled parallax.

use super::rng::Rng;
use super::spacecraft::Spacecraft;

pub const STAR_COUNT: usize = 300;

const OPACITY_MIN: f64 = 0.3;
const OPACITY_MAX: f64 = 1.0;
const PARALLAX_FACTOR: f64 = 0.02;

/// rgb triples; mostly white with a few tinted outliers.
const STAR_COLORS: [(u8, u8, u8); 4] = [
    (255, 255, 255),
    (150, 180, 255),
    (255, 220, 150),
    (255, 150, 150),
];

#[derive(Debug, Clone)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub twinkle_speed: f64,
    pub color: (u8, u8, u8),
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Populate on the first frame that finds the field empty; afterwards the
    /// same stars live for the rest of the session.
    pub fn ensure(&mut self, width: f64, height: f64, rng: &mut Rng) {
        if !self.stars.is_empty() {
            return;
        }
        self.stars = (0..STAR_COUNT)
            .map(|_| {
                let sign = if rng.chance(0.5) { 1.0 } else { -1.0 };
                Star {
                    x: rng.range(0.0, width),
                    y: rng.range(0.0, height),
                    size: rng.range(0.5, 3.0),
                    opacity: rng.range(OPACITY_MIN, OPACITY_MAX),
                    twinkle_speed: rng.range(0.01, 0.03) * sign,
                    color: *rng.pick(&STAR_COLORS),
                }
            })
            .collect();
    }

    /// One twinkle tick: opacity ping-pongs inside [0.3, 1.0], clamping to
    /// the crossed boundary and reversing so there is never a discontinuity.
    pub fn twinkle(&mut self) {
        for star in &mut self.stars {
            star.opacity += star.twinkle_speed;
            if star.opacity > OPACITY_MAX {
                star.opacity = OPACITY_MAX;
                star.twinkle_speed = -star.twinkle_speed;
            }
            if star.opacity < OPACITY_MIN {
                star.opacity = OPACITY_MIN;
                star.twinkle_speed = -star.twinkle_speed;
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

/// Offset of a star from its resting position, proportional to the ship's
/// displacement from canvas center and the star's own size, so larger
/// (nearer-looking) stars drift more.
pub fn parallax_offset(star: &Star, ship: &Spacecraft, width: f64, height: f64) -> (f64, f64) {
    (
        (ship.x - width / 2.0) * PARALLAX_FACTOR * star.size,
        (ship.y - height / 2.0) * PARALLAX_FACTOR * star.size,
    )
}

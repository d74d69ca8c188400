//! Ephemeral per-planet appearance, assigned once per in-memory lifetime.
//!
//! The checklist tree only stores names and completion flags; what a planet
//! looks like is decided here, lazily, the first time the renderer meets it,
//! and cached by planet id so the choice survives reducer clones without
//! ever being persisted.

use std::collections::HashMap;

use super::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetKind {
    Rocky,
    Gas,
    Ice,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetVisual {
    pub kind: PlanetKind,
    /// Base hue in [0, 360).
    pub hue: f64,
    /// Gas giants may carry a decorative ring; decided here so the overlay
    /// is stable frame to frame.
    pub ring: bool,
}

const KINDS: [PlanetKind; 3] = [PlanetKind::Rocky, PlanetKind::Gas, PlanetKind::Ice];
const RING_CHANCE: f64 = 0.4;

#[derive(Debug, Clone, Default)]
pub struct VisualTable {
    visuals: HashMap<u64, PlanetVisual>,
}

impl VisualTable {
    pub fn ensure(&mut self, planet_id: u64, rng: &mut Rng) -> PlanetVisual {
        *self.visuals.entry(planet_id).or_insert_with(|| PlanetVisual {
            kind: *rng.pick(&KINDS),
            hue: rng.range(0.0, 360.0),
            ring: rng.chance(RING_CHANCE),
        })
    }

    pub fn get(&self, planet_id: u64) -> Option<&PlanetVisual> {
        self.visuals.get(&planet_id)
    }
}

//! Static grid geometry for the universe map.
//!
//! One row per system, star in the left column, planets marching right at
//! fixed spacing. Not an orbit simulation; the only job is deterministic,
//! clickable geometry.

use super::visuals::{PlanetKind, VisualTable};
use crate::model::Universe;

/// Vertical distance between system rows.
pub const SYSTEM_ROW_SPACING: f64 = 200.0;
/// Horizontal distance between successive bodies in a row.
pub const BODY_SPACING: f64 = 150.0;
/// Vertical center of the first system row.
pub const FIRST_ROW_Y: f64 = 140.0;

pub const STAR_RADIUS: f64 = 26.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetLayout {
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemLayout {
    pub star: Point,
    pub star_radius: f64,
    pub planets: Vec<PlanetLayout>,
}

pub fn planet_radius(kind: PlanetKind) -> f64 {
    match kind {
        PlanetKind::Rocky => 30.0,
        PlanetKind::Gas => 36.0,
        PlanetKind::Ice => 32.0,
    }
}

/// Positions every body; index-aligned with the universe so callers can key
/// hit regions and navigation targets by the same indices.
pub fn layout_universe(universe: &Universe, visuals: &VisualTable) -> Vec<SystemLayout> {
    universe
        .systems
        .iter()
        .enumerate()
        .map(|(row, system)| {
            let y = FIRST_ROW_Y + row as f64 * SYSTEM_ROW_SPACING;
            let star = Point { x: BODY_SPACING, y };
            let planets = system
                .planets
                .iter()
                .enumerate()
                .map(|(col, planet)| PlanetLayout {
                    center: Point {
                        x: BODY_SPACING * (col as f64 + 2.0),
                        y,
                    },
                    radius: visuals
                        .get(planet.id)
                        .map_or(30.0, |v| planet_radius(v.kind)),
                })
                .collect();
            SystemLayout {
                star,
                star_radius: STAR_RADIUS,
                planets,
            }
        })
        .collect()
}

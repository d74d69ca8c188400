//! The map engine: one struct owning every piece of view-only state, with a
//! pure per-frame step the canvas component calls before painting.

use super::autopilot::Autopilot;
use super::hittest::{HitRegion, HitRegistry, HitTarget};
use super::layout::{SystemLayout, layout_universe};
use super::rng::Rng;
use super::spacecraft::Spacecraft;
use super::starfield::Starfield;
use super::visuals::VisualTable;
use crate::model::Universe;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub struct MapEngine {
    pub rng: Rng,
    pub stars: Starfield,
    pub ship: Spacecraft,
    pub autopilot: Autopilot,
    pub visuals: VisualTable,
    pub hits: HitRegistry,
}

impl MapEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            stars: Starfield::default(),
            ship: Spacecraft::default(),
            autopilot: Autopilot::default(),
            visuals: VisualTable::default(),
            hits: HitRegistry::default(),
        }
    }

    /// One frame of state evolution, in fixed order: starfield, hit-registry
    /// reset, early-out for an empty universe, render attributes, layout,
    /// hit regions, autopilot decision, ship movement. Returns the layout
    /// the paint pass reads; paints never mutate.
    pub fn advance(&mut self, universe: &Universe, viewport: Viewport) -> Vec<SystemLayout> {
        self.stars
            .ensure(viewport.width, viewport.height, &mut self.rng);
        self.stars.twinkle();

        self.hits.begin_frame();
        if universe.systems.is_empty() {
            return Vec::new();
        }

        for system in &universe.systems {
            for planet in &system.planets {
                self.visuals.ensure(planet.id, &mut self.rng);
            }
        }

        let layout = layout_universe(universe, &self.visuals);
        for (system_index, row) in layout.iter().enumerate() {
            self.hits.record(HitRegion {
                target: HitTarget::System { system_index },
                x: row.star.x,
                y: row.star.y,
                radius: row.star_radius,
            });
            for (planet_index, spot) in row.planets.iter().enumerate() {
                self.hits.record(HitRegion {
                    target: HitTarget::Planet {
                        system_index,
                        planet_index,
                    },
                    x: spot.center.x,
                    y: spot.center.y,
                    radius: spot.radius,
                });
            }
        }

        self.autopilot.step(universe, &layout, &mut self.ship);
        self.ship.step();
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mission, Planet, System};
    use crate::state::autopilot::NavState;
    use crate::state::starfield::STAR_COUNT;

    const VIEW: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn two_system_universe() -> Universe {
        let mut universe = Universe::default();
        let mut alpha = System::new("Alpha");
        let mut rock = Planet::new(1, "Rock");
        rock.missions.push(Mission::new("survey"));
        alpha.planets.push(rock);
        let beta = System::new("Beta");
        universe.systems.push(alpha);
        universe.systems.push(beta);
        universe
    }

    #[test]
    fn empty_universe_skips_bodies_but_keeps_stars() {
        let mut engine = MapEngine::new(1);
        let layout = engine.advance(&Universe::default(), VIEW);
        assert!(layout.is_empty());
        assert!(engine.hits.is_empty());
        assert_eq!(engine.stars.stars().len(), STAR_COUNT);
        // Ship untouched and autopilot never consulted.
        assert_eq!(engine.ship, Spacecraft::default());
        assert_eq!(engine.autopilot.state(), NavState::Idle);
    }

    #[test]
    fn hit_regions_cover_every_body_in_registration_order() {
        let mut engine = MapEngine::new(1);
        let universe = two_system_universe();
        engine.advance(&universe, VIEW);
        // Alpha star, Alpha's planet, Beta star.
        assert_eq!(engine.hits.len(), 3);
        let layout = layout_universe(&universe, &engine.visuals);
        assert_eq!(
            engine.hits.resolve(layout[0].star.x, layout[0].star.y),
            Some(HitTarget::System { system_index: 0 })
        );
        let spot = &layout[0].planets[0];
        assert_eq!(
            engine.hits.resolve(spot.center.x, spot.center.y),
            Some(HitTarget::Planet {
                system_index: 0,
                planet_index: 0
            })
        );
    }

    #[test]
    fn registry_reflects_current_frame_only() {
        let mut engine = MapEngine::new(1);
        let universe = two_system_universe();
        engine.advance(&universe, VIEW);
        assert_eq!(engine.hits.len(), 3);
        engine.advance(&Universe::default(), VIEW);
        assert!(engine.hits.is_empty());
    }

    #[test]
    fn visuals_persist_across_frames() {
        let mut engine = MapEngine::new(1);
        let universe = two_system_universe();
        engine.advance(&universe, VIEW);
        let first = *engine.visuals.get(1).unwrap();
        engine.advance(&universe, VIEW);
        assert_eq!(*engine.visuals.get(1).unwrap(), first);
    }

    #[test]
    fn ship_moves_toward_autopilot_target() {
        let mut engine = MapEngine::new(1);
        let universe = two_system_universe();
        let layout = engine.advance(&universe, VIEW);
        // Nothing completed: heading for Alpha's star.
        assert_eq!(engine.ship.target_x, layout[0].star.x);
        assert_eq!(engine.ship.target_y, layout[0].star.y);
        let start = Spacecraft::default();
        let moved = (engine.ship.x - start.x).abs() + (engine.ship.y - start.y).abs();
        assert!(moved > 0.0);
    }
}

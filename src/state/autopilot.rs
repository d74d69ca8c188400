//! Autopilot: decides where the spacecraft flies next.
//!
//! The next destination is derived from mission completion, re-evaluated
//! from the current model every step so a removal can never leave the ship
//! chasing indices that no longer exist.

use super::layout::SystemLayout;
use super::spacecraft::Spacecraft;
use crate::model::Universe;

/// Where the ship is currently heading. A `None` planet index means "hover
/// at the system's star": work there has not begun, so the ship waits at
/// the edge of the system instead of warping in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavTarget {
    pub system_index: usize,
    pub planet_index: Option<usize>,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// No decision made yet this session.
    Idle,
    /// Moving toward a target.
    EnRoute,
    /// Every mission everywhere is done; the ship holds position.
    AllComplete,
}

/// What opening a detail view does to the autopilot for the rest of the
/// session. Kept as an explicit policy; the product default is permanent
/// suspension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendPolicy {
    Permanent,
    ResumeOnClose,
}

pub type NavTrace = Box<dyn Fn(Option<&NavTarget>)>;

pub struct Autopilot {
    enabled: bool,
    evaluated: bool,
    target: Option<NavTarget>,
    trace: Option<NavTrace>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            enabled: true,
            evaluated: false,
            target: None,
            trace: None,
        }
    }
}

/// Evaluated in system order:
/// a system with zero completed missions is targeted at its star; a system
/// with at least one completed mission is scanned for the first planet still
/// holding incomplete work; a system whose planets are all complete is
/// skipped. No system yielding a target means everything is done.
pub fn find_next_target(universe: &Universe, layout: &[SystemLayout]) -> Option<NavTarget> {
    for (system_index, (system, row)) in universe.systems.iter().zip(layout).enumerate() {
        if system.completed_missions() == 0 {
            return Some(NavTarget {
                system_index,
                planet_index: None,
                x: row.star.x,
                y: row.star.y,
            });
        }
        for (planet_index, (planet, spot)) in
            system.planets.iter().zip(&row.planets).enumerate()
        {
            if planet.has_incomplete_missions() {
                return Some(NavTarget {
                    system_index,
                    planet_index: Some(planet_index),
                    x: spot.center.x,
                    y: spot.center.y,
                });
            }
        }
    }
    None
}

impl Autopilot {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// One-way unless the suspend policy says otherwise; the ship keeps
    /// gliding toward its last target, only target acquisition stops.
    pub fn suspend(&mut self) {
        self.enabled = false;
    }

    pub fn resume(&mut self) {
        self.enabled = true;
    }

    pub fn set_trace(&mut self, trace: NavTrace) {
        self.trace = Some(trace);
    }

    pub fn target(&self) -> Option<&NavTarget> {
        self.target.as_ref()
    }

    pub fn state(&self) -> NavState {
        match (self.evaluated, &self.target) {
            (false, _) => NavState::Idle,
            (true, Some(_)) => NavState::EnRoute,
            (true, None) => NavState::AllComplete,
        }
    }

    /// One decision step: recompute the destination from the current model
    /// (an unchanged model reproduces the same answer) and point the ship at
    /// it. The trace hook fires only when the decision changes.
    pub fn step(
        &mut self,
        universe: &Universe,
        layout: &[SystemLayout],
        ship: &mut Spacecraft,
    ) {
        if !self.enabled {
            return;
        }
        let next = find_next_target(universe, layout);
        if next != self.target {
            if let Some(trace) = &self.trace {
                trace(next.as_ref());
            }
        }
        self.target = next;
        self.evaluated = true;
        if let Some(target) = &self.target {
            ship.set_target(target.x, target.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mission, Planet, System, Universe};
    use crate::state::layout::layout_universe;
    use crate::state::visuals::VisualTable;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mission(name: &str, completed: bool) -> Mission {
        Mission {
            name: name.into(),
            completed,
        }
    }

    fn planet(id: u64, name: &str, missions: Vec<Mission>) -> Planet {
        Planet {
            id,
            name: name.into(),
            missions,
        }
    }

    fn system(name: &str, planets: Vec<Planet>) -> System {
        System {
            name: name.into(),
            planets,
        }
    }

    fn universe(systems: Vec<System>) -> Universe {
        Universe {
            systems,
            ..Universe::default()
        }
    }

    fn layout(u: &Universe) -> Vec<crate::state::layout::SystemLayout> {
        layout_universe(u, &VisualTable::default())
    }

    #[test]
    fn untouched_universe_targets_first_star() {
        let u = universe(vec![
            system("Alpha", vec![planet(1, "A1", vec![mission("m", false)])]),
            system("Beta", vec![planet(2, "B1", vec![mission("m", false)])]),
        ]);
        let target = find_next_target(&u, &layout(&u)).unwrap();
        assert_eq!(target.system_index, 0);
        assert_eq!(target.planet_index, None);
        assert_eq!(target.x, layout(&u)[0].star.x);
    }

    #[test]
    fn fully_completed_planet_is_never_targeted() {
        let u = universe(vec![system(
            "Alpha",
            vec![
                planet(1, "done", vec![mission("a", true), mission("b", true)]),
                planet(2, "open", vec![mission("c", false)]),
            ],
        )]);
        let target = find_next_target(&u, &layout(&u)).unwrap();
        assert_eq!(target.planet_index, Some(1));
    }

    #[test]
    fn first_incomplete_planet_wins_in_order() {
        let u = universe(vec![system(
            "Alpha",
            vec![
                planet(1, "p0", vec![mission("a", true)]),
                planet(2, "p1", vec![mission("b", false)]),
                planet(3, "p2", vec![mission("c", false)]),
            ],
        )]);
        let target = find_next_target(&u, &layout(&u)).unwrap();
        assert_eq!(target.system_index, 0);
        assert_eq!(target.planet_index, Some(1));
    }

    #[test]
    fn started_but_finished_system_is_skipped() {
        let u = universe(vec![
            system("Alpha", vec![planet(1, "done", vec![mission("a", true)])]),
            system("Beta", vec![planet(2, "open", vec![mission("b", false)])]),
        ]);
        // Beta has zero completed missions, so it is a star target.
        let target = find_next_target(&u, &layout(&u)).unwrap();
        assert_eq!(target.system_index, 1);
        assert_eq!(target.planet_index, None);
    }

    #[test]
    fn all_complete_yields_no_target_and_ship_stops() {
        let u = universe(vec![system(
            "Alpha",
            vec![planet(1, "done", vec![mission("a", true)])],
        )]);
        let rows = layout(&u);
        assert_eq!(find_next_target(&u, &rows), None);

        let mut pilot = Autopilot::default();
        let mut ship = Spacecraft {
            x: 250.0,
            y: 140.0,
            target_x: 250.0,
            target_y: 140.0,
        };
        pilot.step(&u, &rows, &mut ship);
        assert_eq!(pilot.state(), NavState::AllComplete);
        for _ in 0..10 {
            pilot.step(&u, &rows, &mut ship);
            ship.step();
        }
        assert_eq!((ship.x, ship.y), (250.0, 140.0));
    }

    #[test]
    fn suspended_autopilot_acquires_no_targets() {
        let u = universe(vec![system(
            "Alpha",
            vec![planet(1, "open", vec![mission("a", false)])],
        )]);
        let rows = layout(&u);
        let mut pilot = Autopilot::default();
        let mut ship = Spacecraft::default();
        pilot.suspend();
        pilot.step(&u, &rows, &mut ship);
        assert_eq!(pilot.state(), NavState::Idle);
        assert_eq!(ship.target_x, Spacecraft::default().target_x);
    }

    #[test]
    fn trace_fires_only_on_decision_change() {
        let u = universe(vec![system(
            "Alpha",
            vec![planet(1, "open", vec![mission("a", false)])],
        )]);
        let rows = layout(&u);
        let calls = Rc::new(RefCell::new(0));
        let mut pilot = Autopilot::default();
        {
            let calls = calls.clone();
            pilot.set_trace(Box::new(move |_| *calls.borrow_mut() += 1));
        }
        let mut ship = Spacecraft::default();
        for _ in 0..5 {
            pilot.step(&u, &rows, &mut ship);
        }
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn sol_scenario_runs_to_all_complete() {
        // One system "Sol": Mars carries one mission, Venus carries none.
        let mut u = universe(vec![system(
            "Sol",
            vec![
                planet(1, "Mars", vec![mission("Probe", false)]),
                planet(2, "Venus", vec![]),
            ],
        )]);
        let rows = layout(&u);

        // Nothing completed anywhere: hover at Sol's star.
        let target = find_next_target(&u, &rows).unwrap();
        assert_eq!((target.system_index, target.planet_index), (0, None));

        // Completing Probe exhausts Mars, Venus has no missions at all, so
        // the machine lands on AllComplete.
        u.systems[0].planets[0].missions[0].completed = true;
        assert_eq!(find_next_target(&u, &rows), None);
    }
}

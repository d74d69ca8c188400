//! Core data model for Mission Map: the persisted Systems → Planets →
//! Missions tree and the reducer that applies every structural mutation.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub name: String,
    pub completed: bool,
}

impl Mission {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Stable identity for this planet's in-memory lifetime; render
    /// attributes are cached against it. Assigned by the universe on
    /// creation, normalized on load for data saved without ids.
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub missions: Vec<Mission>,
}

impl Planet {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            missions: Vec::new(),
        }
    }

    pub fn has_incomplete_missions(&self) -> bool {
        self.missions.iter().any(|m| !m.completed)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            total: self.missions.len(),
            completed: self.missions.iter().filter(|m| m.completed).count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub name: String,
    pub planets: Vec<Planet>,
}

impl System {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            planets: Vec::new(),
        }
    }

    pub fn completed_missions(&self) -> usize {
        self.planets
            .iter()
            .map(|p| p.missions.iter().filter(|m| m.completed).count())
            .sum()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            total: self.planets.iter().map(|p| p.missions.len()).sum(),
            completed: self.completed_missions(),
        }
    }
}

/// Mission counts resolved for a system or planet; what the detail sidebar
/// renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
}

impl Progress {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}

/// The root aggregate, persisted as one unit on every structural mutation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    #[serde(default)]
    pub systems: Vec<System>,
    #[serde(default)]
    pub next_planet_id: u64,
    /// Bumped on every effective mutation; drives the persistence and
    /// re-render effects. Not persisted.
    #[serde(skip)]
    pub version: u64,
}

impl Universe {
    fn allocate_planet_id(&mut self) -> u64 {
        if self.next_planet_id == 0 {
            self.next_planet_id = 1;
        }
        let id = self.next_planet_id;
        self.next_planet_id += 1;
        id
    }

    /// Repair ids after loading data that predates them (or was hand-edited):
    /// every zero id gets a fresh one and the allocator moves past the max.
    pub fn normalize_ids(&mut self) {
        let mut next = self
            .systems
            .iter()
            .flat_map(|s| &s.planets)
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1;
        for system in &mut self.systems {
            for planet in &mut system.planets {
                if planet.id == 0 {
                    planet.id = next;
                    next += 1;
                }
            }
        }
        self.next_planet_id = self.next_planet_id.max(next);
    }
}

/// One action per structural change. Blank names and out-of-range indices
/// are silent no-ops: the reducer returns the original state untouched, so
/// no save or re-render fires.
#[derive(Clone, Debug, PartialEq)]
pub enum UniverseAction {
    AddSystem { name: String },
    RemoveSystem { system_index: usize },
    AddPlanet { system_index: usize, name: String },
    RemovePlanet { system_index: usize, planet_index: usize },
    AddMission {
        system_index: usize,
        planet_index: usize,
        name: String,
    },
    RemoveMission {
        system_index: usize,
        planet_index: usize,
        mission_index: usize,
    },
    ToggleMission {
        system_index: usize,
        planet_index: usize,
        mission_index: usize,
    },
    Clear,
}

fn valid_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Reducible for Universe {
    type Action = UniverseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use UniverseAction::*;
        let mut new = (*self).clone();
        let changed = match action {
            AddSystem { name } => match valid_name(&name) {
                Some(name) => {
                    new.systems.push(System::new(name));
                    true
                }
                None => false,
            },
            RemoveSystem { system_index } => {
                if system_index < new.systems.len() {
                    new.systems.remove(system_index);
                    true
                } else {
                    false
                }
            }
            AddPlanet { system_index, name } => match valid_name(&name) {
                Some(name) => {
                    let id = new.allocate_planet_id();
                    match new.systems.get_mut(system_index) {
                        Some(system) => {
                            system.planets.push(Planet::new(id, name));
                            true
                        }
                        None => false,
                    }
                }
                None => false,
            },
            RemovePlanet {
                system_index,
                planet_index,
            } => match new.systems.get_mut(system_index) {
                Some(system) if planet_index < system.planets.len() => {
                    system.planets.remove(planet_index);
                    true
                }
                _ => false,
            },
            AddMission {
                system_index,
                planet_index,
                name,
            } => match valid_name(&name) {
                Some(name) => {
                    match new
                        .systems
                        .get_mut(system_index)
                        .and_then(|s| s.planets.get_mut(planet_index))
                    {
                        Some(planet) => {
                            planet.missions.push(Mission::new(name));
                            true
                        }
                        None => false,
                    }
                }
                None => false,
            },
            RemoveMission {
                system_index,
                planet_index,
                mission_index,
            } => match new
                .systems
                .get_mut(system_index)
                .and_then(|s| s.planets.get_mut(planet_index))
            {
                Some(planet) if mission_index < planet.missions.len() => {
                    planet.missions.remove(mission_index);
                    true
                }
                _ => false,
            },
            ToggleMission {
                system_index,
                planet_index,
                mission_index,
            } => match new
                .systems
                .get_mut(system_index)
                .and_then(|s| s.planets.get_mut(planet_index))
                .and_then(|p| p.missions.get_mut(mission_index))
            {
                Some(mission) => {
                    mission.completed = !mission.completed;
                    true
                }
                None => false,
            },
            Clear => {
                if new.systems.is_empty() {
                    false
                } else {
                    new.systems.clear();
                    true
                }
            }
        };
        if !changed {
            return self;
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

/// What the user clicked on the map; the sidebar resolves it against the
/// current universe every render, so summaries never go stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    System { system_index: usize },
    Planet { system_index: usize, planet_index: usize },
}

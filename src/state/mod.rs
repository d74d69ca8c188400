pub mod autopilot;
pub mod engine;
pub mod hittest;
pub mod layout;
pub mod rng;
pub mod spacecraft;
pub mod starfield;
pub mod visuals;

pub use autopilot::{Autopilot, NavState, NavTarget, SuspendPolicy, find_next_target};
pub use engine::{MapEngine, Viewport};
pub use hittest::{HitRegion, HitRegistry, HitTarget};
pub use layout::{SystemLayout, layout_universe};
pub use rng::Rng;
pub use spacecraft::Spacecraft;
pub use starfield::{Star, Starfield, parallax_offset};
pub use visuals::{PlanetKind, PlanetVisual, VisualTable};

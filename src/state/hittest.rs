//! Per-frame registry of clickable screen regions.
//!
//! Rebuilt from scratch by every frame's layout pass; a click is resolved by
//! scanning in registration order and taking the first circle containing the
//! point. Overlaps resolve by registration order, not z-order or proximity —
//! a deliberate simplification.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    System {
        system_index: usize,
    },
    Planet {
        system_index: usize,
        planet_index: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub target: HitTarget,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Default)]
pub struct HitRegistry {
    regions: Vec<HitRegion>,
}

impl HitRegistry {
    /// Drop every region from the previous frame.
    pub fn begin_frame(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, region: HitRegion) {
        self.regions.push(region);
    }

    /// First region (in registration order) whose circle contains the point.
    pub fn resolve(&self, x: f64, y: f64) -> Option<HitTarget> {
        self.regions
            .iter()
            .find(|r| (x - r.x).hypot(y - r.y) <= r.radius)
            .map(|r| r.target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(target: HitTarget, x: f64, y: f64, radius: f64) -> HitRegion {
        HitRegion { target, x, y, radius }
    }

    #[test]
    fn miss_resolves_to_none() {
        let mut reg = HitRegistry::default();
        reg.record(region(HitTarget::System { system_index: 0 }, 100.0, 100.0, 20.0));
        assert_eq!(reg.resolve(300.0, 300.0), None);
    }

    #[test]
    fn point_on_rim_counts_as_hit() {
        let mut reg = HitRegistry::default();
        reg.record(region(HitTarget::System { system_index: 0 }, 100.0, 100.0, 20.0));
        assert_eq!(
            reg.resolve(120.0, 100.0),
            Some(HitTarget::System { system_index: 0 })
        );
    }

    #[test]
    fn overlap_resolves_to_first_registered() {
        let a = HitTarget::System { system_index: 0 };
        let b = HitTarget::Planet {
            system_index: 0,
            planet_index: 0,
        };
        let mut reg = HitRegistry::default();
        reg.record(region(a, 100.0, 100.0, 30.0));
        reg.record(region(b, 110.0, 100.0, 30.0));
        // Inside both circles.
        assert_eq!(reg.resolve(105.0, 100.0), Some(a));

        // Same regions registered the other way around flip the answer.
        let mut reg = HitRegistry::default();
        reg.record(region(b, 110.0, 100.0, 30.0));
        reg.record(region(a, 100.0, 100.0, 30.0));
        assert_eq!(reg.resolve(105.0, 100.0), Some(b));
    }

    #[test]
    fn begin_frame_discards_previous_geometry() {
        let mut reg = HitRegistry::default();
        reg.record(region(HitTarget::System { system_index: 0 }, 100.0, 100.0, 20.0));
        reg.begin_frame();
        assert!(reg.is_empty());
        assert_eq!(reg.resolve(100.0, 100.0), None);
    }
}

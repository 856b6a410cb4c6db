//! Placement planning for loaded models: one data-driven rule per asset
//! kind, replacing per-kind copy-pasted placement loops.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// How repeated clones of one loaded asset are distributed along the road
/// axis. Each axis step yields two clones, one per side of the road.
#[derive(Clone, Copy, Debug)]
pub struct PlacementRule {
    /// First step position along z.
    pub axis_start: f32,
    /// End of the stepped range, exclusive.
    pub axis_end: f32,
    pub spacing: f32,
    pub left_offset: f32,
    pub right_offset: f32,
    /// Y translation applied to every clone (model-origin correction).
    pub height: f32,
    pub scale: f32,
    pub left_yaw: f32,
    pub right_yaw: f32,
}

/// A single planned clone: an independent transform, sharing nothing mutable
/// with its source or its siblings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannedClone {
    pub translation: Vec3,
    pub yaw: f32,
    pub scale: f32,
}

/// Houses line the corridor close to the road, facing it from both sides.
pub const HOUSE_RULE: PlacementRule = PlacementRule {
    axis_start: -215.0,
    axis_end: 220.0,
    spacing: 30.0,
    left_offset: -20.0,
    right_offset: 20.0,
    height: -1.5,
    scale: 2.0,
    left_yaw: FRAC_PI_2,
    right_yaw: -FRAC_PI_2,
};

/// Apartment blocks form an outer row behind the houses.
pub const APARTMENT_RULE: PlacementRule = PlacementRule {
    axis_start: -230.0,
    axis_end: 230.0,
    spacing: 30.0,
    left_offset: -26.0,
    right_offset: 26.0,
    height: -0.7,
    scale: 0.03,
    left_yaw: FRAC_PI_2,
    right_yaw: -FRAC_PI_2,
};

/// Expand a rule into concrete clone transforms. Steps `[axis_start,
/// axis_end)` by `spacing` — `ceil((end - start) / spacing)` steps, two
/// clones each. A non-positive spacing or empty range plans nothing.
pub fn plan(rule: &PlacementRule) -> Vec<PlannedClone> {
    let mut out = Vec::new();
    if rule.spacing <= 0.0 || rule.axis_end <= rule.axis_start {
        return out;
    }
    let steps = ((rule.axis_end - rule.axis_start) / rule.spacing).ceil() as i32;
    for i in 0..steps {
        let z = rule.axis_start + i as f32 * rule.spacing;
        out.push(PlannedClone {
            translation: Vec3::new(rule.left_offset, rule.height, z),
            yaw: rule.left_yaw,
            scale: rule.scale,
        });
        out.push(PlannedClone {
            translation: Vec3::new(rule.right_offset, rule.height, z),
            yaw: rule.right_yaw,
            scale: rule.scale,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_rule_plans_fifteen_steps() {
        let clones = plan(&HOUSE_RULE);
        // ceil((220 - -215) / 30) = 15 steps, two clones each.
        assert_eq!(clones.len(), 30);
        assert_eq!(clones[0].translation.z, -215.0);
        assert_eq!(clones[28].translation.z, -215.0 + 14.0 * 30.0);
    }

    #[test]
    fn step_count_is_ceil_of_span_over_spacing() {
        let rule = PlacementRule {
            axis_start: 0.0,
            axis_end: 90.0,
            spacing: 30.0,
            ..HOUSE_RULE
        };
        // Exact division: the end itself is excluded.
        assert_eq!(plan(&rule).len(), 3 * 2);
    }

    #[test]
    fn each_step_places_one_clone_per_side() {
        let clones = plan(&APARTMENT_RULE);
        for pair in clones.chunks(2) {
            assert_eq!(pair[0].translation.x, APARTMENT_RULE.left_offset);
            assert_eq!(pair[1].translation.x, APARTMENT_RULE.right_offset);
            assert_eq!(pair[0].translation.z, pair[1].translation.z);
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn degenerate_rules_plan_nothing() {
        let empty = PlacementRule {
            axis_start: 10.0,
            axis_end: 10.0,
            ..HOUSE_RULE
        };
        assert!(plan(&empty).is_empty());
        let bad_spacing = PlacementRule {
            spacing: 0.0,
            ..HOUSE_RULE
        };
        assert!(plan(&bad_spacing).is_empty());
    }
}

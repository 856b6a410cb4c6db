//! Forward chase camera: trails the vehicle at a heading-relative offset,
//! smoothed by a fixed-factor lerp so the view eases behind the vehicle
//! instead of being rigidly attached.

use bevy::prelude::*;

use world::vehicle::{Heading, PlayerVehicle};

/// Offset from the vehicle, in vehicle-local space (behind and above).
pub const CHASE_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Per-frame blend factor toward the anchor position.
pub const CHASE_LERP: f32 = 0.1;

#[derive(Component)]
pub struct ChaseCamera;

/// Where the camera wants to be for a vehicle at `position` facing `yaw`:
/// the local offset rotated into world space, added to the position.
pub fn chase_anchor(position: Vec3, yaw: f32) -> Vec3 {
    position + Quat::from_rotation_y(yaw) * CHASE_OFFSET
}

pub fn setup_chase_camera(mut commands: Commands) {
    commands.spawn((
        ChaseCamera,
        Camera3d::default(),
        Camera {
            order: 0,
            ..default()
        },
        Transform::from_translation(chase_anchor(Vec3::ZERO, 0.0))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Ease the camera toward its anchor and aim it at the vehicle. The look-at
/// target is the vehicle's true position, never the smoothed one.
pub fn follow_vehicle(
    vehicles: Query<(&Transform, &Heading), (With<PlayerVehicle>, Without<ChaseCamera>)>,
    mut cameras: Query<&mut Transform, With<ChaseCamera>>,
) {
    let Ok((vehicle, heading)) = vehicles.get_single() else {
        return;
    };
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };
    let anchor = chase_anchor(vehicle.translation, heading.0);
    camera.translation = camera.translation.lerp(anchor, CHASE_LERP);
    camera.look_at(vehicle.translation, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn anchor_sits_behind_and_above_at_zero_yaw() {
        let anchor = chase_anchor(Vec3::new(1.0, 0.0, 2.0), 0.0);
        assert!((anchor - Vec3::new(1.0, 5.0, 12.0)).length() < 1e-5);
    }

    #[test]
    fn anchor_rotates_with_heading() {
        // Facing -x (yaw = pi/2): "behind" is +x.
        let anchor = chase_anchor(Vec3::ZERO, PI / 2.0);
        assert!((anchor - Vec3::new(10.0, 5.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn repeated_lerp_strictly_approaches_the_anchor() {
        let anchor = chase_anchor(Vec3::new(4.0, 0.0, -30.0), 0.7);
        let mut position = Vec3::ZERO;
        let mut distance = position.distance(anchor);
        for _ in 0..50 {
            position = position.lerp(anchor, CHASE_LERP);
            let next = position.distance(anchor);
            assert!(next < distance);
            distance = next;
        }
        // Converges toward (but does not overshoot) the anchor.
        assert!(distance < 0.1 * Vec3::ZERO.distance(anchor));
    }
}

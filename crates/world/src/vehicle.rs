//! Player vehicle kinematics: heading-integrated motion driven by held
//! arrow keys. Position advances along the facing direction derived from
//! yaw; all four inputs compose additively with no mutual exclusion.

use bevy::prelude::*;

use crate::config::{DRIVE_SPEED, TURN_SPEED};

/// Marker for the player-controlled vehicle entity.
#[derive(Component)]
pub struct PlayerVehicle;

/// Yaw of the vehicle in radians, kept alongside the `Transform` so the
/// integration never has to recover an angle from a quaternion.
#[derive(Component, Default)]
pub struct Heading(pub f32);

/// Set by the UI while a text field owns the keyboard; drive input is
/// skipped so arrow keys edit text instead of steering.
#[derive(Resource, Default)]
pub struct KeyboardCapture(pub bool);

/// Continuous vehicle state: pure-function form of the entity's transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleState {
    pub position: Vec3,
    pub yaw: f32,
}

/// One frame's worth of held drive keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct DriveInput {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Advance the vehicle by one frame. Fixed per-frame increments, no
/// delta-time scaling (see `config::DRIVE_SPEED`). Movement uses the yaw
/// from the start of the frame; turning applies after.
pub fn integrate(state: &mut VehicleState, input: DriveInput) {
    let heading = Vec3::new(state.yaw.sin(), 0.0, state.yaw.cos());
    if input.forward {
        state.position -= heading * DRIVE_SPEED;
    }
    if input.backward {
        state.position += heading * DRIVE_SPEED;
    }
    if input.turn_left {
        state.yaw += TURN_SPEED;
    }
    if input.turn_right {
        state.yaw -= TURN_SPEED;
    }
}

/// Sample held keys and integrate the player vehicle once per frame.
pub fn drive_vehicle(
    keys: Res<ButtonInput<KeyCode>>,
    capture: Res<KeyboardCapture>,
    mut vehicles: Query<(&mut Transform, &mut Heading), With<PlayerVehicle>>,
) {
    if capture.0 {
        return;
    }
    let Ok((mut transform, mut heading)) = vehicles.get_single_mut() else {
        return;
    };
    let input = DriveInput {
        forward: keys.pressed(KeyCode::ArrowUp),
        backward: keys.pressed(KeyCode::ArrowDown),
        turn_left: keys.pressed(KeyCode::ArrowLeft),
        turn_right: keys.pressed(KeyCode::ArrowRight),
    };
    let mut state = VehicleState {
        position: transform.translation,
        yaw: heading.0,
    };
    integrate(&mut state, input);
    transform.translation = state.position;
    transform.rotation = Quat::from_rotation_y(state.yaw);
    heading.0 = state.yaw;
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: DriveInput = DriveInput {
        forward: true,
        backward: false,
        turn_left: false,
        turn_right: false,
    };

    #[test]
    fn forward_at_zero_yaw_decreases_z_only() {
        let mut state = VehicleState {
            position: Vec3::ZERO,
            yaw: 0.0,
        };
        for i in 1..=10 {
            integrate(&mut state, FORWARD);
            assert_eq!(state.position.x, 0.0);
            assert!((state.position.z + i as f32 * DRIVE_SPEED).abs() < 1e-5);
        }
    }

    #[test]
    fn turning_alone_never_moves_the_vehicle() {
        let mut state = VehicleState {
            position: Vec3::new(3.0, 0.0, -7.0),
            yaw: 0.5,
        };
        let start = state.position;
        for _ in 0..100 {
            integrate(
                &mut state,
                DriveInput {
                    turn_left: true,
                    ..Default::default()
                },
            );
        }
        assert_eq!(state.position, start);
        assert!((state.yaw - (0.5 + 100.0 * TURN_SPEED)).abs() < 1e-4);
    }

    #[test]
    fn opposed_turns_cancel() {
        let mut state = VehicleState {
            position: Vec3::ZERO,
            yaw: 1.0,
        };
        integrate(
            &mut state,
            DriveInput {
                turn_left: true,
                turn_right: true,
                ..Default::default()
            },
        );
        assert!((state.yaw - 1.0).abs() < 1e-6);
    }

    #[test]
    fn integration_is_deterministic() {
        let inputs: Vec<DriveInput> = (0..200)
            .map(|i| DriveInput {
                forward: i % 2 == 0,
                backward: i % 7 == 0,
                turn_left: i % 3 == 0,
                turn_right: i % 5 == 0,
            })
            .collect();
        let run = || {
            let mut state = VehicleState {
                position: Vec3::new(0.0, 0.0, 230.0),
                yaw: 0.0,
            };
            for input in &inputs {
                integrate(&mut state, *input);
            }
            state
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn movement_uses_pre_turn_heading() {
        // Forward + turn in one frame: displacement reflects the yaw held at
        // the start of the frame, the turn lands afterwards.
        let mut state = VehicleState {
            position: Vec3::ZERO,
            yaw: 0.0,
        };
        integrate(
            &mut state,
            DriveInput {
                forward: true,
                turn_left: true,
                ..Default::default()
            },
        );
        assert_eq!(state.position.x, 0.0);
        assert!((state.position.z + DRIVE_SPEED).abs() < 1e-6);
        assert!((state.yaw - TURN_SPEED).abs() < 1e-6);
    }
}

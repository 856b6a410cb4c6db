use bevy::prelude::*;

pub mod chase_camera;
pub mod marker;
pub mod minimap;
pub mod models;
pub mod road_recycler;
pub mod scenery;

use world::vehicle::drive_vehicle;

/// Sky color cleared behind the main view.
const SKY_BLUE: Color = Color::srgb(0.53, 0.81, 0.92);

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_BLUE))
            .add_systems(
                Startup,
                (
                    setup_lighting,
                    scenery::spawn_scenery,
                    chase_camera::setup_chase_camera,
                    minimap::setup_minimap,
                    models::load_models,
                ),
            )
            // Pending model placements drain at the start of the frame, so
            // newly loaded clones become visible at a defined point rather
            // than mid-frame.
            .add_systems(
                Update,
                models::drain_pending_placements.before(drive_vehicle),
            )
            .add_systems(
                Update,
                (
                    chase_camera::follow_vehicle,
                    minimap::recenter_over_vehicle,
                    road_recycler::recycle_road_tiles,
                )
                    .after(drive_vehicle),
            )
            .add_systems(
                Update,
                (minimap::apply_window_resize, marker::place_destination_marker),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}

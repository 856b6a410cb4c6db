//! Static scenery spawning: converts the generated layout into mesh
//! entities. Dashes and stripes share one mesh and material handle per
//! kind; only the handful of road tiles get per-placement plane meshes.

use bevy::prelude::*;

use world::config::{DASH_LENGTH, DASH_THICKNESS, DASH_WIDTH, STRIPE_THICKNESS};
use world::layout::{generate, LayoutParams, Placement};

/// Marker for a main-road tile, so the looping-road recycler can find them.
#[derive(Component)]
pub struct RoadTile;

pub fn spawn_scenery(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    params: Res<LayoutParams>,
) {
    let road_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.2, 0.2),
        perceptual_roughness: 0.9,
        ..default()
    });
    let marking_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });
    let sidewalk_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.53, 0.53, 0.53),
        ..default()
    });

    let dash_mesh = meshes.add(Cuboid::new(DASH_WIDTH, DASH_THICKNESS, DASH_LENGTH));
    let mut stripe_mesh: Option<Handle<Mesh>> = None;

    for placement in generate(&params) {
        match placement {
            Placement::Road {
                center,
                width,
                length,
                yaw,
            } => {
                commands.spawn((
                    RoadTile,
                    Mesh3d(meshes.add(Plane3d::default().mesh().size(width, length))),
                    MeshMaterial3d(road_material.clone()),
                    Transform::from_translation(center)
                        .with_rotation(Quat::from_rotation_y(yaw)),
                ));
            }
            Placement::LaneDash { center, yaw } => {
                commands.spawn((
                    Mesh3d(dash_mesh.clone()),
                    MeshMaterial3d(marking_material.clone()),
                    Transform::from_translation(center)
                        .with_rotation(Quat::from_rotation_y(yaw)),
                ));
            }
            Placement::CrossingStripe {
                center,
                width,
                length,
            } => {
                // All stripes share dimensions; build the mesh on first use.
                let mesh = stripe_mesh
                    .get_or_insert_with(|| {
                        meshes.add(Cuboid::new(width, STRIPE_THICKNESS, length))
                    })
                    .clone();
                commands.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(marking_material.clone()),
                    Transform::from_translation(center),
                ));
            }
            Placement::Sidewalk { center, size } => {
                commands.spawn((
                    Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
                    MeshMaterial3d(sidewalk_material.clone()),
                    Transform::from_translation(center),
                ));
            }
            Placement::TrafficLight { base } => {
                spawn_traffic_light(&mut commands, &mut meshes, &mut materials, base);
            }
        }
    }
}

/// Pole + housing + three static light discs at fixed relative offsets.
/// The lights do not cycle; the fixture is scenery.
fn spawn_traffic_light(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    base: Vec3,
) {
    let pole_mesh = meshes.add(Cylinder::new(0.1, 3.0));
    let pole_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.13, 0.13, 0.13),
        ..default()
    });
    let housing_mesh = meshes.add(Cuboid::new(0.5, 1.5, 0.3));
    let housing_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.07, 0.07, 0.07),
        ..default()
    });
    let disc_mesh = meshes.add(Circle::new(0.15));

    let lights = [
        (3.5, Color::srgb(1.0, 0.0, 0.0), LinearRgba::rgb(0.33, 0.0, 0.0)),
        (3.15, Color::srgb(1.0, 1.0, 0.0), LinearRgba::rgb(0.33, 0.33, 0.0)),
        (2.8, Color::srgb(0.0, 1.0, 0.0), LinearRgba::rgb(0.0, 0.33, 0.0)),
    ];

    commands
        .spawn((Transform::from_translation(base), Visibility::default()))
        .with_children(|fixture| {
            fixture.spawn((
                Mesh3d(pole_mesh),
                MeshMaterial3d(pole_material),
                Transform::from_xyz(0.0, 1.5, 0.0),
            ));
            fixture.spawn((
                Mesh3d(housing_mesh),
                MeshMaterial3d(housing_material),
                Transform::from_xyz(0.0, 3.0, 0.0),
            ));
            for (y, base_color, emissive) in lights {
                fixture.spawn((
                    Mesh3d(disc_mesh.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color,
                        emissive,
                        ..default()
                    })),
                    // Just proud of the housing front face so the discs
                    // never z-fight with it.
                    Transform::from_xyz(0.0, y, 0.16),
                ));
            }
        });
}

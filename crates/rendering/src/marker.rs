//! Destination marker: a tall emissive beacon placed where a looked-up
//! destination landed. One marker exists at a time; a new choice moves it.

use bevy::prelude::*;

use world::destinations::DestinationChosen;

const BEACON_SIZE: Vec3 = Vec3::new(1.0, 8.0, 1.0);

#[derive(Component)]
pub struct DestinationMarker;

pub fn place_destination_marker(
    mut chosen: EventReader<DestinationChosen>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut existing: Query<&mut Transform, With<DestinationMarker>>,
) {
    // Only the most recent choice this frame matters.
    let Some(DestinationChosen(coord)) = chosen.read().last() else {
        return;
    };
    let translation = Vec3::new(coord.x, BEACON_SIZE.y / 2.0, coord.y);

    if let Ok(mut transform) = existing.get_single_mut() {
        transform.translation = translation;
        return;
    }
    commands.spawn((
        DestinationMarker,
        Mesh3d(meshes.add(Cuboid::new(BEACON_SIZE.x, BEACON_SIZE.y, BEACON_SIZE.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.6, 0.1),
            emissive: LinearRgba::rgb(0.8, 0.4, 0.0),
            ..default()
        })),
        Transform::from_translation(translation),
    ));
}

//! GLB model loading and deferred placement.
//!
//! Loads are requested once at startup; a pending entry per model waits
//! until the asset server reports the scene loaded, then spawns its clones
//! in one batch at the start of a frame. A failed load is logged and its
//! entry dropped permanently — the model is simply absent from the town.

use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use world::config::{VEHICLE_SCALE, VEHICLE_SPAWN};
use world::placement::{plan, PlacementRule, APARTMENT_RULE, HOUSE_RULE};
use world::vehicle::{Heading, PlayerVehicle};

/// One model whose spawn is deferred until its scene finishes loading.
pub enum PendingSpawn {
    /// The single player vehicle.
    Vehicle { scene: Handle<Scene> },
    /// Repeated clones along the corridor per a placement rule.
    Repeated {
        scene: Handle<Scene>,
        rule: PlacementRule,
        label: &'static str,
    },
}

impl PendingSpawn {
    fn scene(&self) -> &Handle<Scene> {
        match self {
            PendingSpawn::Vehicle { scene } => scene,
            PendingSpawn::Repeated { scene, .. } => scene,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PendingSpawn::Vehicle { .. } => "taxi",
            PendingSpawn::Repeated { label, .. } => label,
        }
    }
}

/// Spawns waiting on their scene load, drained at frame start.
#[derive(Resource, Default)]
pub struct PendingPlacements(pub Vec<PendingSpawn>);

/// Startup system: request every GLB scene once and queue its placement.
pub fn load_models(mut commands: Commands, asset_server: Res<AssetServer>) {
    let load_scene = |path: &'static str| -> Handle<Scene> {
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(path))
    };

    commands.insert_resource(PendingPlacements(vec![
        PendingSpawn::Vehicle {
            scene: load_scene("models/taxi.glb"),
        },
        PendingSpawn::Repeated {
            scene: load_scene("models/house.glb"),
            rule: HOUSE_RULE,
            label: "house",
        },
        PendingSpawn::Repeated {
            scene: load_scene("models/apartment.glb"),
            rule: APARTMENT_RULE,
            label: "apartment",
        },
    ]));
}

/// Frame-start system: spawn entries whose scene has loaded, drop entries
/// whose load failed, keep the rest pending. Each spawned clone owns its
/// transform; clones share only the immutable scene asset.
pub fn drain_pending_placements(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut pending: ResMut<PendingPlacements>,
) {
    pending.0.retain(|entry| match asset_server.load_state(entry.scene().id()) {
        LoadState::Loaded => {
            spawn_entry(&mut commands, entry);
            false
        }
        LoadState::Failed(err) => {
            warn!("model '{}' failed to load, not placed: {err}", entry.label());
            false
        }
        _ => true,
    });
}

fn spawn_entry(commands: &mut Commands, entry: &PendingSpawn) {
    match entry {
        PendingSpawn::Vehicle { scene } => {
            commands.spawn((
                PlayerVehicle,
                Heading::default(),
                SceneRoot(scene.clone()),
                Transform::from_translation(VEHICLE_SPAWN)
                    .with_scale(Vec3::splat(VEHICLE_SCALE)),
            ));
            info!("player vehicle spawned");
        }
        PendingSpawn::Repeated { scene, rule, label } => {
            let clones = plan(rule);
            info!("placing {} '{label}' clones", clones.len());
            for clone in clones {
                commands.spawn((
                    SceneRoot(scene.clone()),
                    Transform::from_translation(clone.translation)
                        .with_rotation(Quat::from_rotation_y(clone.yaw))
                        .with_scale(Vec3::splat(clone.scale)),
                ));
            }
        }
    }
}

//! Overhead minimap: a second orthographic camera recentered exactly over
//! the vehicle every frame (no smoothing, unlike the chase camera), plus a
//! border camera painting an opaque dark backing behind it.
//!
//! The original multi-pass scissored composite maps onto Bevy camera
//! ordering: the chase camera renders full-window (order 0), the border
//! camera paints its quad into a slightly inflated corner viewport
//! (order 1), and the minimap camera renders the world into the corner
//! viewport on top without clearing (order 2). The border backing
//! guarantees the minimap edges stay opaque regardless of what world
//! geometry the overhead camera sees.

use bevy::prelude::*;
use bevy::render::camera::{ClearColorConfig, ScalingMode, Viewport};
use bevy::render::view::RenderLayers;
use bevy::window::{PrimaryWindow, WindowResized};

use world::vehicle::PlayerVehicle;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimap edge length in logical pixels.
pub const MINIMAP_SIZE_PX: f32 = 200.0;

/// Gap between the minimap and the window corner, logical pixels.
pub const MINIMAP_PADDING_PX: f32 = 10.0;

/// Border frame thickness around the minimap, logical pixels.
pub const MINIMAP_BORDER_PX: f32 = 4.0;

/// Orthographic half-extents are the window dimensions divided by this, so
/// the minimap's world coverage scales with the window.
pub const MINIMAP_ORTHO_RATIO: f32 = 30.0;

/// Fixed overhead camera height.
pub const MINIMAP_HEIGHT: f32 = 100.0;

/// Render layer holding only the border backing quad.
const BORDER_LAYER: usize = 1;

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Component)]
pub struct MinimapCamera;

#[derive(Component)]
pub struct BorderCamera;

// ---------------------------------------------------------------------------
// Viewport math
// ---------------------------------------------------------------------------

/// Minimap rectangle in physical pixels, anchored to the top-right corner
/// with fixed padding. Shrinks rather than overflowing tiny windows.
pub fn minimap_rect(window: UVec2, scale_factor: f32) -> (UVec2, UVec2) {
    let size = ((MINIMAP_SIZE_PX * scale_factor).round() as u32)
        .min(window.x)
        .min(window.y);
    let pad = (MINIMAP_PADDING_PX * scale_factor).round() as u32;
    let x = window.x.saturating_sub(size + pad);
    let y = pad.min(window.y.saturating_sub(size));
    (UVec2::new(x, y), UVec2::splat(size))
}

/// Minimap rectangle inflated by the border thickness, clamped to the
/// window bounds.
pub fn border_rect(window: UVec2, scale_factor: f32) -> (UVec2, UVec2) {
    let (pos, size) = minimap_rect(window, scale_factor);
    let border = (MINIMAP_BORDER_PX * scale_factor).round() as u32;
    let outer_pos = UVec2::new(pos.x.saturating_sub(border), pos.y.saturating_sub(border));
    let outer_size = UVec2::new(
        (size.x + 2 * border).min(window.x - outer_pos.x),
        (size.y + 2 * border).min(window.y - outer_pos.y),
    );
    (outer_pos, outer_size)
}

fn viewport_from(rect: (UVec2, UVec2)) -> Viewport {
    Viewport {
        physical_position: rect.0,
        physical_size: rect.1,
        ..default()
    }
}

/// Overhead camera position for a vehicle position: exactly over (x, z).
pub fn overhead_translation(vehicle: Vec3) -> Vec3 {
    Vec3::new(vehicle.x, MINIMAP_HEIGHT, vehicle.z)
}

fn ortho_scaling(window: &Window) -> ScalingMode {
    ScalingMode::Fixed {
        width: 2.0 * window.width() / MINIMAP_ORTHO_RATIO,
        height: 2.0 * window.height() / MINIMAP_ORTHO_RATIO,
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn setup_minimap(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let physical = UVec2::new(window.physical_width(), window.physical_height());
    let scale = window.scale_factor();

    // Border pass: 2D camera over a dedicated layer holding one oversized
    // dark quad, scoped to the inflated corner viewport.
    commands.spawn((
        BorderCamera,
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            viewport: Some(viewport_from(border_rect(physical, scale))),
            ..default()
        },
        RenderLayers::layer(BORDER_LAYER),
    ));
    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(4096.0, 4096.0))),
        MeshMaterial2d(materials.add(Color::srgb(0.02, 0.02, 0.02))),
        RenderLayers::layer(BORDER_LAYER),
    ));

    // Minimap pass: orthographic world camera looking straight down. Up is
    // pinned to -z so the minimap's vertical axis tracks the world z axis
    // instead of whatever a degenerate top-down look-at would pick.
    commands.spawn((
        MinimapCamera,
        Camera3d::default(),
        Camera {
            order: 2,
            clear_color: ClearColorConfig::None,
            viewport: Some(viewport_from(minimap_rect(physical, scale))),
            ..default()
        },
        Projection::Orthographic(OrthographicProjection {
            near: 0.1,
            far: 500.0,
            scaling_mode: ortho_scaling(window),
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(overhead_translation(Vec3::ZERO))
            .looking_at(Vec3::ZERO, Vec3::NEG_Z),
    ));
}

/// Snap the minimap camera directly over the vehicle. Zero lag by design.
pub fn recenter_over_vehicle(
    vehicles: Query<&Transform, (With<PlayerVehicle>, Without<MinimapCamera>)>,
    mut cameras: Query<&mut Transform, With<MinimapCamera>>,
) {
    let Ok(vehicle) = vehicles.get_single() else {
        return;
    };
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };
    let target = Vec3::new(vehicle.translation.x, 0.0, vehicle.translation.z);
    camera.translation = overhead_translation(vehicle.translation);
    camera.look_at(target, Vec3::NEG_Z);
}

/// Recompute viewports and orthographic bounds when the window changes size.
pub fn apply_window_resize(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut minimap: Query<(&mut Camera, &mut Projection), With<MinimapCamera>>,
    mut border: Query<&mut Camera, (With<BorderCamera>, Without<MinimapCamera>)>,
) {
    if resized.is_empty() {
        return;
    }
    resized.clear();
    let Ok(window) = windows.get_single() else {
        return;
    };
    let physical = UVec2::new(window.physical_width(), window.physical_height());
    if physical.x == 0 || physical.y == 0 {
        return;
    }
    let scale = window.scale_factor();

    if let Ok((mut camera, mut projection)) = minimap.get_single_mut() {
        camera.viewport = Some(viewport_from(minimap_rect(physical, scale)));
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scaling_mode = ortho_scaling(window);
        }
    }
    if let Ok(mut camera) = border.get_single_mut() {
        camera.viewport = Some(viewport_from(border_rect(physical, scale)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimap_rect_anchors_top_right() {
        let (pos, size) = minimap_rect(UVec2::new(1280, 720), 1.0);
        assert_eq!(size, UVec2::splat(200));
        assert_eq!(pos, UVec2::new(1280 - 200 - 10, 10));
    }

    #[test]
    fn minimap_rect_scales_with_dpi() {
        let (pos, size) = minimap_rect(UVec2::new(2560, 1440), 2.0);
        assert_eq!(size, UVec2::splat(400));
        assert_eq!(pos, UVec2::new(2560 - 400 - 20, 20));
    }

    #[test]
    fn border_rect_contains_minimap_rect() {
        let window = UVec2::new(1280, 720);
        let (inner_pos, inner_size) = minimap_rect(window, 1.0);
        let (outer_pos, outer_size) = border_rect(window, 1.0);
        assert!(outer_pos.x <= inner_pos.x && outer_pos.y <= inner_pos.y);
        assert!(outer_pos.x + outer_size.x >= inner_pos.x + inner_size.x);
        assert!(outer_pos.y + outer_size.y >= inner_pos.y + inner_size.y);
        // And stays inside the window.
        assert!(outer_pos.x + outer_size.x <= window.x);
        assert!(outer_pos.y + outer_size.y <= window.y);
    }

    #[test]
    fn tiny_window_never_overflows() {
        let window = UVec2::new(120, 90);
        for rect in [minimap_rect(window, 1.0), border_rect(window, 1.0)] {
            assert!(rect.0.x + rect.1.x <= window.x);
            assert!(rect.0.y + rect.1.y <= window.y);
        }
    }

    #[test]
    fn overhead_translation_has_zero_lag() {
        let vehicle = Vec3::new(12.5, 0.0, -83.0);
        let cam = overhead_translation(vehicle);
        assert_eq!(cam.x, vehicle.x);
        assert_eq!(cam.z, vehicle.z);
        assert_eq!(cam.y, MINIMAP_HEIGHT);
    }
}

use bevy::prelude::*;

pub const ROAD_WIDTH: f32 = 25.0;
pub const ROAD_SEGMENT_LENGTH: f32 = 50.0;
pub const ROAD_EXTENT: f32 = 200.0;
pub const LANE_COUNT: u32 = 5;

/// Stride between consecutive dashes along a dashed marking line. Together
/// with [`DASH_LENGTH`] this fixes the dash/gap ratio independent of road
/// length, so markings read as evenly dashed on any corridor.
pub const DASH_STRIDE: f32 = 10.0;
pub const DASH_LENGTH: f32 = 2.0;
pub const DASH_WIDTH: f32 = 0.2;
pub const DASH_THICKNESS: f32 = 0.01;

/// Y height for dashed lane markings (above the road surface at 0).
pub const Y_DASH: f32 = 0.01;

/// Y height for crossing stripes (above lane markings, avoids coplanar
/// overlap with both road and dashes).
pub const Y_STRIPE: f32 = 0.02;

pub const CROSSING_Z: f32 = -70.0;
pub const STRIPE_LENGTH: f32 = 1.5;
pub const STRIPE_GAP: f32 = 1.5;
pub const STRIPE_THICKNESS: f32 = 0.02;

pub const SIDEWALK_WIDTH: f32 = 4.0;
pub const SIDEWALK_HEIGHT: f32 = 0.2;

/// Cross-street center line: dashes along x at a fixed z.
pub const CROSS_LINE_START_X: f32 = 20.0;
pub const CROSS_LINE_END_X: f32 = 100.0;
pub const CROSS_LINE_Z: f32 = -50.0;

pub const TRAFFIC_LIGHT_BASE: Vec3 = Vec3::new(-10.0, 0.0, -70.0);

/// Per-frame drive increments. Deliberately NOT scaled by elapsed time:
/// effective speed tracks the display refresh rate, matching the reference
/// behavior of the town demo this reproduces.
pub const DRIVE_SPEED: f32 = 0.2;
pub const TURN_SPEED: f32 = 0.03;

pub const VEHICLE_SPAWN: Vec3 = Vec3::new(0.0, 0.0, 230.0);
pub const VEHICLE_SCALE: f32 = 0.5;

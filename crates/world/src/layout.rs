//! Procedural town layout: road corridor, lane markings, pedestrian
//! crossing, sidewalks, and the traffic-light fixture.
//!
//! `generate` is a pure function of [`LayoutParams`] — every derived count
//! (road tiles, dashes, stripes) is computed from the parameters, never
//! hand-duplicated, so changing one parameter regenerates a consistent
//! layout.

use bevy::prelude::*;

use crate::config::{
    CROSSING_Z, CROSS_LINE_END_X, CROSS_LINE_START_X, CROSS_LINE_Z, DASH_STRIDE, LANE_COUNT,
    ROAD_EXTENT, ROAD_SEGMENT_LENGTH, ROAD_WIDTH, SIDEWALK_HEIGHT, SIDEWALK_WIDTH, STRIPE_GAP,
    STRIPE_LENGTH, TRAFFIC_LIGHT_BASE, Y_DASH, Y_STRIPE,
};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Configuration driving layout generation. `Default` reproduces the
/// reference town: a 25-unit-wide, 5-lane corridor from z = -200 to 200.
#[derive(Resource, Clone, Debug)]
pub struct LayoutParams {
    pub road_width: f32,
    pub segment_length: f32,
    /// Corridor half-length: road tiles run from `-extent` to `+extent`.
    pub extent: f32,
    pub lane_count: u32,
    pub dash_stride: f32,
    pub stripe_width: f32,
    pub stripe_gap: f32,
    pub stripe_length: f32,
    pub crossing_z: f32,
    pub sidewalk_width: f32,
    pub sidewalk_height: f32,
    pub cross_line_start_x: f32,
    pub cross_line_end_x: f32,
    pub cross_line_z: f32,
    pub traffic_light_base: Vec3,
    /// Looping-road mode: when set, road tiles are recycled around the
    /// vehicle instead of the corridor being bounded.
    pub infinite: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            road_width: ROAD_WIDTH,
            segment_length: ROAD_SEGMENT_LENGTH,
            extent: ROAD_EXTENT,
            lane_count: LANE_COUNT,
            dash_stride: DASH_STRIDE,
            stripe_width: ROAD_WIDTH / 10.0,
            stripe_gap: STRIPE_GAP,
            stripe_length: STRIPE_LENGTH,
            crossing_z: CROSSING_Z,
            sidewalk_width: SIDEWALK_WIDTH,
            sidewalk_height: SIDEWALK_HEIGHT,
            cross_line_start_x: CROSS_LINE_START_X,
            cross_line_end_x: CROSS_LINE_END_X,
            cross_line_z: CROSS_LINE_Z,
            traffic_light_base: TRAFFIC_LIGHT_BASE,
            infinite: false,
        }
    }
}

impl LayoutParams {
    /// Full period of the road tiling: the distance a recycled tile jumps.
    pub fn corridor_span(&self) -> f32 {
        2.0 * self.extent + self.segment_length
    }
}

// ---------------------------------------------------------------------------
// Placements
// ---------------------------------------------------------------------------

/// One positioned, oriented unit of static scenery. Output ordering is
/// irrelevant; placements are independent renderables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// A flat road tile. `yaw` supports angled connector variants; the main
    /// corridor emits yaw 0.
    Road {
        center: Vec3,
        width: f32,
        length: f32,
        yaw: f32,
    },
    /// One short dash of a dashed marking line.
    LaneDash { center: Vec3, yaw: f32 },
    /// One stripe of the pedestrian crossing.
    CrossingStripe {
        center: Vec3,
        width: f32,
        length: f32,
    },
    Sidewalk { center: Vec3, size: Vec3 },
    TrafficLight { base: Vec3 },
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the full static layout. Deterministic, pure function of `params`.
pub fn generate(params: &LayoutParams) -> Vec<Placement> {
    let mut out = Vec::new();
    road_tiles(params, &mut out);
    lane_dashes(params, &mut out);
    cross_street_line(params, &mut out);
    crossing_stripes(params, &mut out);
    sidewalks(params, &mut out);
    out.push(Placement::TrafficLight {
        base: params.traffic_light_base,
    });
    out
}

/// Main road: fixed-length tiles every `segment_length` from `-extent` to
/// `+extent` inclusive. Tiling a corridor out of short planes (rather than
/// one long plane) keeps the door open for chunked loading.
fn road_tiles(params: &LayoutParams, out: &mut Vec<Placement>) {
    let count = (2.0 * params.extent / params.segment_length).floor() as i32 + 1;
    for i in 0..count {
        let z = -params.extent + i as f32 * params.segment_length;
        out.push(Placement::Road {
            center: Vec3::new(0.0, 0.0, z),
            width: params.road_width,
            length: params.segment_length,
            yaw: 0.0,
        });
    }
}

/// Dashed divider lines: one line per offset `i * (road_width / lane_count)`
/// for `i` in the centered symmetric range, dashed every `dash_stride` over
/// `[-extent, extent)`.
fn lane_dashes(params: &LayoutParams, out: &mut Vec<Placement>) {
    let half = (params.lane_count / 2) as i32;
    let lane_width = params.road_width / params.lane_count as f32;
    let dashes = (2.0 * params.extent / params.dash_stride).ceil() as i32;
    for i in -half..=half {
        let x = i as f32 * lane_width;
        for d in 0..dashes {
            let z = -params.extent + d as f32 * params.dash_stride;
            out.push(Placement::LaneDash {
                center: Vec3::new(x, Y_DASH, z),
                yaw: 0.0,
            });
        }
    }
}

/// Center line of the cross street: dashes along x at a fixed z, each
/// rotated a quarter turn.
fn cross_street_line(params: &LayoutParams, out: &mut Vec<Placement>) {
    let span = params.cross_line_end_x - params.cross_line_start_x;
    if span <= 0.0 {
        return;
    }
    let dashes = (span / params.dash_stride).ceil() as i32;
    for d in 0..dashes {
        let x = params.cross_line_start_x + d as f32 * params.dash_stride;
        out.push(Placement::LaneDash {
            center: Vec3::new(x, Y_DASH, params.cross_line_z),
            yaw: std::f32::consts::FRAC_PI_2,
        });
    }
}

/// Pedestrian crossing: stripes spaced across the road width. A road
/// narrower than one stripe+gap yields zero stripes, which is a valid
/// degenerate layout rather than an error.
fn crossing_stripes(params: &LayoutParams, out: &mut Vec<Placement>) {
    let pitch = params.stripe_width + params.stripe_gap;
    if pitch <= 0.0 {
        return;
    }
    let count = (params.road_width / pitch).floor() as i32;
    for i in 0..count {
        let x = -params.road_width / 2.0 + i as f32 * pitch + params.stripe_width / 2.0;
        out.push(Placement::CrossingStripe {
            center: Vec3::new(x, Y_STRIPE, params.crossing_z),
            width: params.stripe_width,
            length: params.stripe_length,
        });
    }
}

/// Two long slabs flanking the road, resting on the ground plane (center at
/// half height so the bottom face touches y = 0).
fn sidewalks(params: &LayoutParams, out: &mut Vec<Placement>) {
    let x = params.road_width / 2.0 + params.sidewalk_width / 2.0;
    let size = Vec3::new(
        params.sidewalk_width,
        params.sidewalk_height,
        params.corridor_span(),
    );
    for side in [-1.0, 1.0] {
        out.push(Placement::Sidewalk {
            center: Vec3::new(side * x, params.sidewalk_height / 2.0, 0.0),
            size,
        });
    }
}

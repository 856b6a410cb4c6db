//! Looping-road mode: in an `infinite` layout, road tiles that drift more
//! than half the corridor period from the vehicle are re-homed one full
//! period to the other side, so the road never ends.

use bevy::prelude::*;

use world::layout::LayoutParams;
use world::vehicle::PlayerVehicle;

use crate::scenery::RoadTile;

/// Signed z shift for a tile at offset `dz` from the vehicle. The threshold
/// is half the period: a tile just past it lands strictly inside the window
/// on the far side, so a re-homed tile never qualifies again next frame.
pub fn rehome_shift(dz: f32, span: f32) -> f32 {
    let half = span / 2.0;
    if dz > half {
        -span
    } else if dz < -half {
        span
    } else {
        0.0
    }
}

pub fn recycle_road_tiles(
    params: Res<LayoutParams>,
    vehicles: Query<&Transform, (With<PlayerVehicle>, Without<RoadTile>)>,
    mut tiles: Query<&mut Transform, With<RoadTile>>,
) {
    if !params.infinite {
        return;
    }
    let Ok(vehicle) = vehicles.get_single() else {
        return;
    };
    let span = params.corridor_span();
    for mut tile in &mut tiles {
        let dz = tile.translation.z - vehicle.translation.z;
        tile.translation.z += rehome_shift(dz, span);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use world::layout::LayoutParams;

    const SPAN: f32 = 450.0;

    #[test]
    fn corridor_span_covers_all_tiles() {
        // 9 tiles of length 50 tile a 450-unit period exactly.
        let params = LayoutParams::default();
        let tiles = 2.0 * params.extent / params.segment_length + 1.0;
        assert_eq!(params.corridor_span(), tiles * params.segment_length);
    }

    #[test]
    fn tiles_inside_the_half_period_window_stay_put() {
        for dz in [0.0, 100.0, -100.0, 225.0, -225.0] {
            assert_eq!(rehome_shift(dz, SPAN), 0.0, "dz={dz}");
        }
    }

    #[test]
    fn tiles_beyond_the_threshold_jump_one_full_period() {
        assert_eq!(rehome_shift(226.0, SPAN), -SPAN);
        assert_eq!(rehome_shift(-226.0, SPAN), SPAN);
        assert_eq!(rehome_shift(500.0, SPAN), -SPAN);
    }

    #[test]
    fn rehoming_never_oscillates() {
        // A tile just past the threshold must land inside the window, so a
        // second pass leaves it alone.
        for dz in [225.1, 300.0, 449.0, -225.1, -449.0] {
            let landed = dz + rehome_shift(dz, SPAN);
            assert!(landed.abs() <= SPAN / 2.0, "dz={dz} landed={landed}");
            assert_eq!(rehome_shift(landed, SPAN), 0.0, "dz={dz}");
        }
    }
}

use bevy::prelude::*;

pub mod config;
pub mod destinations;
pub mod layout;
pub mod placement;
pub mod vehicle;

use destinations::{DestinationChosen, TargetDestination};
use layout::LayoutParams;
use vehicle::KeyboardCapture;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutParams>()
            .init_resource::<TargetDestination>()
            .init_resource::<KeyboardCapture>()
            .add_event::<DestinationChosen>()
            .add_systems(Update, vehicle::drive_vehicle);
    }
}

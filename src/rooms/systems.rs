//! Rooms domain: camera framing.

use bevy::prelude::*;

use crate::rooms::grid::{ActiveRoom, RoomGrid, RoomQuery};

/// Centre the camera on the active room whenever it changes.
pub(crate) fn snap_camera_to_room(
    active: Res<ActiveRoom>,
    grid: Res<RoomGrid>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    if !active.is_changed() {
        return;
    }

    let center = grid.room_center(active.0);
    for mut transform in &mut cameras {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
    debug!("Camera framing room {:?}", active.0);
}

//! Validation for level definitions against the room layout.

use bevy::prelude::*;
use std::collections::HashSet;

use super::data::*;
use crate::pickups::PickupKind;
use crate::rooms::RoomLayout;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub level_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "level '{}' field '{}': {}",
            self.level_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a world position lies inside the map
macro_rules! check_inside {
    ($errors:expr, $level:expr, $extent:expr, $field:expr, $pos:expr) => {
        let pos = to_vec2($pos);
        if pos.x < 0.0 || pos.y < 0.0 || pos.x >= $extent.x || pos.y >= $extent.y {
            $errors.push(ValidationError {
                level_id: $level.id.clone(),
                field: $field,
                message: format!("position {:?} lies outside the {:?} map", pos, $extent),
            });
        }
    };
}

/// Validate every level. Returns an empty list when all levels are usable.
pub fn validate_levels(levels: &[LevelDef], layout: &RoomLayout) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if levels.is_empty() {
        errors.push(ValidationError {
            level_id: "<none>".to_string(),
            field: "items",
            message: "the level sequence is empty".to_string(),
        });
    }

    let mut seen_ids = HashSet::new();
    for level in levels {
        if !seen_ids.insert(level.id.as_str()) {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field: "id",
                message: "duplicate level id".to_string(),
            });
        }

        if level.rooms.0 <= 0 || level.rooms.1 <= 0 {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field: "rooms",
                message: format!("room counts must be positive, got {:?}", level.rooms),
            });
            continue;
        }

        let extent = Vec2::new(level.rooms.0 as f32, level.rooms.1 as f32) * layout.room_size();

        check_inside!(errors, level, extent, "avatar_start", level.avatar_start);
        for spiker in &level.spikers {
            check_inside!(errors, level, extent, "spikers", spiker.position);
        }
        for pickup in &level.pickups {
            check_inside!(errors, level, extent, "pickups", pickup.position);
            if pickup.kind == PickupKind::Unassigned {
                errors.push(ValidationError {
                    level_id: level.id.clone(),
                    field: "pickups",
                    message: format!("pickup at {:?} has no kind", pickup.position),
                });
            }
        }

        for spiker in &level.spikers {
            let mut drops = spiker
                .guaranteed_drop
                .iter()
                .chain(spiker.random_drops.iter().flatten());
            if drops.any(|kind| *kind == PickupKind::Unassigned) {
                errors.push(ValidationError {
                    level_id: level.id.clone(),
                    field: "spikers",
                    message: format!("spiker at {:?} drops an unassigned pickup", spiker.position),
                });
            }
        }

        for wall in &level.walls {
            if wall.rect.min.0 > wall.rect.max.0 || wall.rect.min.1 > wall.rect.max.1 {
                errors.push(ValidationError {
                    level_id: level.id.clone(),
                    field: "walls",
                    message: format!("inverted rect {:?}", wall.rect),
                });
            }
        }
        for hazard in &level.hazards {
            if hazard.min.0 > hazard.max.0 || hazard.min.1 > hazard.max.1 {
                errors.push(ValidationError {
                    level_id: level.id.clone(),
                    field: "hazards",
                    message: format!("inverted rect {:?}", hazard),
                });
            }
        }
    }

    errors
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{ArchitecturalStyle, BuildingArchetype, RoomCategory};

/// A placed room. `(x, y)` is the top-left corner in meters within the lot,
/// y increasing southward; `floor` is zero-based.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub category: RoomCategory,
    pub display_name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub floor: usize,
    pub color: String,
}

/// A complete generated layout: lot metadata plus the rooms of every floor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub id: String,
    pub project_name: String,
    pub building_archetype: BuildingArchetype,
    pub lot_width: f64,
    pub lot_length: f64,
    pub floors: usize,
    pub rooms: Vec<Room>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied building specification. Lot dimensions are expected to be
/// positive; the engine does not validate them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpec {
    pub project_name: String,
    pub building_archetype: BuildingArchetype,
    pub lot_width: f64,
    pub lot_length: f64,
    pub floors: usize,
    pub room_count: usize,
    #[serde(default)]
    pub style: ArchitecturalStyle,
}

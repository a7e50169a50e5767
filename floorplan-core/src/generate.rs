use chrono::Utc;
use nanoid::nanoid;
use rand::Rng;

use crate::catalog::{BuildingArchetype, RoomCategory};
use crate::constants::{FILL_RATIO_MIN, FILL_RATIO_SPAN, ID_LENGTH, ROOM_GAP, WALL_MARGIN};
use crate::model::{Blueprint, ProjectSpec, Room};

/// Categories kept on the ground floor when a building has several floors.
const GROUND_FLOOR_ROLES: [RoomCategory; 6] = [
    RoomCategory::Living,
    RoomCategory::Kitchen,
    RoomCategory::Dining,
    RoomCategory::Garage,
    RoomCategory::Office,
    RoomCategory::Hallway,
];

/// Categories kept on every floor above the ground floor.
const UPPER_FLOOR_ROLES: [RoomCategory; 5] = [
    RoomCategory::Bedroom,
    RoomCategory::Bathroom,
    RoomCategory::Office,
    RoomCategory::Balcony,
    RoomCategory::Storage,
];

/// Packing result for one floor. Categories that did not fit are recorded in
/// `dropped` instead of being placed; this is expected behavior on small lots,
/// not an error.
#[derive(Clone, Debug, Default)]
pub struct FloorPlan {
    pub rooms: Vec<Room>,
    pub dropped: Vec<RoomCategory>,
}

/// A generated blueprint together with every category the packer could not
/// fit, in drop order.
#[derive(Clone, Debug)]
pub struct GeneratedPlan {
    pub blueprint: Blueprint,
    pub unplaced: Vec<RoomCategory>,
}

impl GeneratedPlan {
    pub fn placed(&self) -> usize {
        self.blueprint.rooms.len()
    }

    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Expands or truncates the archetype's template to exactly `room_count`
/// entries. Extension cycles bedroom/bathroom/storage keyed on the current
/// length; truncation keeps the first entries in template order.
/// `room_count == 0` yields an empty list.
pub fn normalize_room_list(archetype: BuildingArchetype, room_count: usize) -> Vec<RoomCategory> {
    let mut list = archetype.template().to_vec();
    while list.len() < room_count {
        list.push(match list.len() % 3 {
            0 => RoomCategory::Bedroom,
            1 => RoomCategory::Bathroom,
            _ => RoomCategory::Storage,
        });
    }
    list.truncate(room_count);
    list
}

/// Splits a normalized room list into one category multiset per floor.
///
/// Floor 0 keeps the ground-floor roles; every floor above gets the same
/// upper-floor selection. When a role filter matches nothing the template is
/// split positionally at `ceil(len / floors)` instead.
pub fn partition_floors(template: &[RoomCategory], floors: usize) -> Vec<Vec<RoomCategory>> {
    if floors == 0 {
        return Vec::new();
    }
    let split = template.len().div_ceil(floors).min(template.len());
    (0..floors)
        .map(|floor| {
            if floor == 0 {
                let picked: Vec<_> = template
                    .iter()
                    .copied()
                    .filter(|c| GROUND_FLOOR_ROLES.contains(c))
                    .collect();
                if picked.is_empty() {
                    template[..split].to_vec()
                } else {
                    picked
                }
            } else {
                let picked: Vec<_> = template
                    .iter()
                    .copied()
                    .filter(|c| UPPER_FLOOR_ROLES.contains(c))
                    .collect();
                if picked.is_empty() {
                    template[split..].to_vec()
                } else {
                    picked
                }
            }
        })
        .collect()
}

/// Picks a width/height for a room of `category` given the remaining usable
/// space at the packing cursor. Each axis takes an independent random share of
/// the remaining space, clamped to the category bounds and rounded to 0.1 m.
pub fn sample_room_size(
    category: RoomCategory,
    remaining_width: f64,
    remaining_height: f64,
    rng: &mut impl Rng,
) -> (f64, f64) {
    let spec = category.spec();
    let share = FILL_RATIO_MIN..FILL_RATIO_MIN + FILL_RATIO_SPAN;
    let width =
        (remaining_width * rng.random_range(share.clone())).clamp(spec.min_width, spec.max_width);
    let height =
        (remaining_height * rng.random_range(share)).clamp(spec.min_height, spec.max_height);
    (round_tenth(width), round_tenth(height))
}

/// Row-based shelf packing: fills rows left to right, wraps below the tallest
/// room of the row when the lot edge is reached, and drops any room that does
/// not fit vertically.
pub fn pack_floor(
    categories: &[RoomCategory],
    lot_width: f64,
    lot_length: f64,
    floor: usize,
    rng: &mut impl Rng,
) -> FloorPlan {
    let usable_width = lot_width - WALL_MARGIN * 2.0;
    let usable_length = lot_length - WALL_MARGIN * 2.0;

    // Stable sort: equal priorities keep their template order.
    let mut ordered = categories.to_vec();
    ordered.sort_by_key(|c| c.spec().priority);

    let mut rooms: Vec<Room> = Vec::new();
    let mut dropped: Vec<RoomCategory> = Vec::new();
    let mut current_x = WALL_MARGIN;
    let mut current_y = WALL_MARGIN;
    let mut row_height = 0.0_f64;

    for category in ordered {
        let remaining_width = usable_width - (current_x - WALL_MARGIN);
        let remaining_height = usable_length - (current_y - WALL_MARGIN);
        let (width, height) = sample_room_size(category, remaining_width, remaining_height, rng);

        if current_x + width > lot_width - WALL_MARGIN {
            current_x = WALL_MARGIN;
            current_y += row_height + ROOM_GAP;
            row_height = 0.0;
        }
        if current_y + height > lot_length - WALL_MARGIN {
            dropped.push(category);
            continue;
        }

        let ordinal = rooms.iter().filter(|r| r.category == category).count() + 1;
        rooms.push(Room {
            id: nanoid!(ID_LENGTH),
            category,
            display_name: format!("{} {}", category.label(), ordinal),
            x: round_tenth(current_x),
            y: round_tenth(current_y),
            width,
            height,
            floor,
            color: category.spec().color.to_string(),
        });

        current_x += width + ROOM_GAP;
        row_height = row_height.max(height);
    }

    FloorPlan { rooms, dropped }
}

/// Runs the full pipeline with a caller-supplied random source: normalize the
/// template, partition across floors, pack each floor, assemble the blueprint.
pub fn generate_blueprint_with(spec: &ProjectSpec, rng: &mut impl Rng) -> GeneratedPlan {
    let template = normalize_room_list(spec.building_archetype, spec.room_count);
    let per_floor = partition_floors(&template, spec.floors);

    let mut rooms = Vec::new();
    let mut unplaced = Vec::new();
    for (floor, categories) in per_floor.iter().enumerate() {
        let plan = pack_floor(categories, spec.lot_width, spec.lot_length, floor, rng);
        rooms.extend(plan.rooms);
        unplaced.extend(plan.dropped);
    }

    let now = Utc::now();
    GeneratedPlan {
        blueprint: Blueprint {
            id: nanoid!(ID_LENGTH),
            project_name: spec.project_name.clone(),
            building_archetype: spec.building_archetype,
            lot_width: spec.lot_width,
            lot_length: spec.lot_length,
            floors: spec.floors,
            rooms,
            created_at: now,
            updated_at: now,
        },
        unplaced,
    }
}

/// [`generate_blueprint_with`] using the process-wide random source.
pub fn generate_blueprint(spec: &ProjectSpec) -> GeneratedPlan {
    generate_blueprint_with(spec, &mut rand::rng())
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

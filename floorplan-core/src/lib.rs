//! Procedural floor-plan layout engine.
//!
//! Turns an abstract building specification into a set of non-overlapping
//! rectangular rooms packed into a bounded lot, partitioned across floors,
//! and renders the result as a self-contained SVG drawing. Generation is a
//! single synchronous pass (template lookup, room-count normalization, floor
//! partition, shelf packing, assembly). Sizing is stochastic; pass a seeded
//! rng to [`generate_blueprint_with`] to pin outputs.

pub mod catalog;
pub mod constants;
pub mod generate;
pub mod model;
pub mod svg;

pub use catalog::{ArchitecturalStyle, BuildingArchetype, CategorySpec, RoomCategory};
pub use generate::{
    FloorPlan, GeneratedPlan, generate_blueprint, generate_blueprint_with, normalize_room_list,
    pack_floor, partition_floors, sample_room_size,
};
pub use model::{Blueprint, ProjectSpec, Room};
pub use svg::blueprint_to_svg;

use serde::{Deserialize, Serialize};

/// Size bounds, display color and placement priority for one room category.
/// Lengths are in meters; lower priority is placed first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategorySpec {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: f64,
    pub max_height: f64,
    pub color: &'static str,
    pub priority: u8,
}

/// Functional type of a room, determining its bounds, color and priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RoomCategory {
    Living,
    Kitchen,
    Bedroom,
    Bathroom,
    Dining,
    Office,
    Storage,
    Garage,
    Balcony,
    Hallway,
}

impl RoomCategory {
    pub const ALL: [Self; 10] = [
        Self::Living,
        Self::Kitchen,
        Self::Bedroom,
        Self::Bathroom,
        Self::Dining,
        Self::Office,
        Self::Storage,
        Self::Garage,
        Self::Balcony,
        Self::Hallway,
    ];

    pub const fn spec(self) -> CategorySpec {
        match self {
            Self::Living => CategorySpec {
                min_width: 4.0,
                min_height: 4.0,
                max_width: 8.0,
                max_height: 6.0,
                color: "#3b82f6",
                priority: 1,
            },
            Self::Kitchen => CategorySpec {
                min_width: 3.0,
                min_height: 3.0,
                max_width: 5.0,
                max_height: 4.0,
                color: "#f59e0b",
                priority: 2,
            },
            Self::Bedroom => CategorySpec {
                min_width: 3.0,
                min_height: 3.0,
                max_width: 5.0,
                max_height: 4.0,
                color: "#8b5cf6",
                priority: 3,
            },
            Self::Bathroom => CategorySpec {
                min_width: 2.0,
                min_height: 2.0,
                max_width: 3.0,
                max_height: 3.0,
                color: "#06b6d4",
                priority: 4,
            },
            Self::Dining => CategorySpec {
                min_width: 3.0,
                min_height: 3.0,
                max_width: 5.0,
                max_height: 4.0,
                color: "#10b981",
                priority: 5,
            },
            Self::Office => CategorySpec {
                min_width: 2.5,
                min_height: 2.5,
                max_width: 4.0,
                max_height: 4.0,
                color: "#6366f1",
                priority: 6,
            },
            Self::Garage => CategorySpec {
                min_width: 3.0,
                min_height: 5.0,
                max_width: 6.0,
                max_height: 7.0,
                color: "#64748b",
                priority: 7,
            },
            Self::Storage => CategorySpec {
                min_width: 1.5,
                min_height: 1.5,
                max_width: 3.0,
                max_height: 3.0,
                color: "#78716c",
                priority: 8,
            },
            Self::Balcony => CategorySpec {
                min_width: 2.0,
                min_height: 1.5,
                max_width: 4.0,
                max_height: 2.0,
                color: "#84cc16",
                priority: 9,
            },
            Self::Hallway => CategorySpec {
                min_width: 1.5,
                min_height: 3.0,
                max_width: 2.0,
                max_height: 8.0,
                color: "#a3a3a3",
                priority: 10,
            },
        }
    }

    /// Capitalized name used when composing room display names.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Living => "Living",
            Self::Kitchen => "Kitchen",
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::Dining => "Dining",
            Self::Office => "Office",
            Self::Storage => "Storage",
            Self::Garage => "Garage",
            Self::Balcony => "Balcony",
            Self::Hallway => "Hallway",
        }
    }

    /// Unknown names resolve to `Storage`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "living" => Self::Living,
            "kitchen" => Self::Kitchen,
            "bedroom" => Self::Bedroom,
            "bathroom" => Self::Bathroom,
            "dining" => Self::Dining,
            "office" => Self::Office,
            "garage" => Self::Garage,
            "balcony" => Self::Balcony,
            "hallway" => Self::Hallway,
            _ => Self::Storage,
        }
    }
}

impl From<String> for RoomCategory {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

/// Overall building type, determining the default room composition template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BuildingArchetype {
    House,
    Apartment,
    Office,
    Hospital,
    School,
    Warehouse,
    Hotel,
    Restaurant,
}

impl BuildingArchetype {
    pub const ALL: [Self; 8] = [
        Self::House,
        Self::Apartment,
        Self::Office,
        Self::Hospital,
        Self::School,
        Self::Warehouse,
        Self::Hotel,
        Self::Restaurant,
    ];

    /// Default room composition, in template order (not priority order).
    pub const fn template(self) -> &'static [RoomCategory] {
        use RoomCategory::*;
        match self {
            Self::House => &[Living, Kitchen, Bedroom, Bedroom, Bathroom, Dining, Storage],
            Self::Apartment => &[Living, Kitchen, Bedroom, Bathroom, Balcony],
            Self::Office => &[Office, Office, Office, Bathroom, Kitchen, Storage],
            Self::Hospital => &[Office, Bathroom, Bathroom, Storage, Hallway, Hallway],
            Self::School => &[Office, Office, Bathroom, Storage, Hallway],
            Self::Warehouse => &[Storage, Storage, Storage, Office, Bathroom],
            Self::Hotel => &[Bedroom, Bedroom, Bathroom, Bathroom, Living, Kitchen],
            Self::Restaurant => &[Dining, Dining, Kitchen, Kitchen, Bathroom, Storage],
        }
    }

    /// Unknown names resolve to `House`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "apartment" => Self::Apartment,
            "office" => Self::Office,
            "hospital" => Self::Hospital,
            "school" => Self::School,
            "warehouse" => Self::Warehouse,
            "hotel" => Self::Hotel,
            "restaurant" => Self::Restaurant,
            _ => Self::House,
        }
    }
}

impl From<String> for BuildingArchetype {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

/// Presentation metadata only; never consulted during packing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ArchitecturalStyle {
    #[default]
    Modern,
    Traditional,
    Minimalist,
    Industrial,
}

impl ArchitecturalStyle {
    pub fn from_name(name: &str) -> Self {
        match name {
            "traditional" => Self::Traditional,
            "minimalist" => Self::Minimalist,
            "industrial" => Self::Industrial,
            _ => Self::Modern,
        }
    }
}

impl From<String> for ArchitecturalStyle {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

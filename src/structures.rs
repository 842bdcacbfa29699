//! Placeable structure templates and their fixed economic profiles.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::goods::Good;

/// Maximum grid distance at which a warehouse supplies a structure.
/// A structure exactly at the radius is in range.
pub const EFFECT_RADIUS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum StructureKind {
    Warehouse,
    Farm,
    Well,
    Sawmill,
    LumberCamp,
    Quarry,
    Bakery,
    House,
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKind::Warehouse => write!(f, "Warehouse"),
            StructureKind::Farm => write!(f, "Farm"),
            StructureKind::Well => write!(f, "Well"),
            StructureKind::Sawmill => write!(f, "Sawmill"),
            StructureKind::LumberCamp => write!(f, "Lumber Camp"),
            StructureKind::Quarry => write!(f, "Quarry"),
            StructureKind::Bakery => write!(f, "Bakery"),
            StructureKind::House => write!(f, "House"),
        }
    }
}

/// Contribution a structure makes to the settlement's running totals
/// each turn it was built.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactProfile {
    pub social: f64,
    pub economy: f64,
    pub ecology: f64,
}

impl ImpactProfile {
    pub const fn new(social: f64, economy: f64, ecology: f64) -> Self {
        Self {
            social,
            economy,
            ecology,
        }
    }
}

/// A placeable entity: its kind plus the fixed lists of goods it consumes
/// and produces each supplied turn, and its one-off impact contribution.
///
/// Immutable once placed; turn processing reads it as a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    kind: StructureKind,
    needs: Vec<(Good, u32)>,
    production: Vec<(Good, u32)>,
    impacts: ImpactProfile,
}

impl Structure {
    /// Builds the template for the given kind from the fixed catalog.
    pub fn of(kind: StructureKind) -> Self {
        let (needs, production, impacts) = match kind {
            StructureKind::Warehouse => (vec![], vec![], ImpactProfile::new(0.0, 1.0, 0.0)),
            StructureKind::Farm => (
                vec![(Good::Water, 1)],
                vec![(Good::Grain, 2)],
                ImpactProfile::new(1.0, 1.0, -0.5),
            ),
            StructureKind::Well => (
                vec![],
                vec![(Good::Water, 2)],
                ImpactProfile::new(0.5, 0.0, 0.0),
            ),
            StructureKind::Sawmill => (
                vec![(Good::Wood, 3)],
                vec![(Good::Plank, 1)],
                ImpactProfile::new(0.5, 1.5, -1.0),
            ),
            StructureKind::LumberCamp => (
                vec![],
                vec![(Good::Wood, 2)],
                ImpactProfile::new(0.5, 1.0, -2.0),
            ),
            StructureKind::Quarry => (
                vec![],
                vec![(Good::Stone, 2)],
                ImpactProfile::new(0.0, 1.0, -1.5),
            ),
            StructureKind::Bakery => (
                vec![(Good::Grain, 2)],
                vec![(Good::Food, 2)],
                ImpactProfile::new(1.0, 1.0, 0.0),
            ),
            StructureKind::House => (
                vec![(Good::Food, 1), (Good::Water, 1)],
                vec![],
                ImpactProfile::new(2.0, 0.5, -0.5),
            ),
        };
        Self {
            kind,
            needs,
            production,
            impacts,
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    pub fn is_warehouse(&self) -> bool {
        self.kind == StructureKind::Warehouse
    }

    /// Fixed list of (good, quantity) the structure consumes each supplied turn
    pub fn needs(&self) -> &[(Good, u32)] {
        &self.needs
    }

    /// Fixed list of (good, quantity) the structure produces each supplied turn
    pub fn production(&self) -> &[(Good, u32)] {
        &self.production
    }

    pub fn impacts(&self) -> ImpactProfile {
        self.impacts
    }
}

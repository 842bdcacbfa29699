use core::fmt;

use serde::{Deserialize, Serialize};

/// A typed resource kind moved through the settlement economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Good {
    // Raw resources
    Wood,
    Grain,
    Water,
    Stone,

    // Processed goods
    Plank, // from Wood
    Food,  // from Grain
}

impl Good {
    /// Returns true if this good is extracted directly from the land
    pub fn is_raw(self) -> bool {
        matches!(self, Good::Wood | Good::Grain | Good::Water | Good::Stone)
    }

    /// Returns true if this good is the output of another structure's inputs
    pub fn is_processed(self) -> bool {
        !self.is_raw()
    }
}

impl fmt::Display for Good {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Good::Wood => write!(f, "Wood"),
            Good::Grain => write!(f, "Grain"),
            Good::Water => write!(f, "Water"),
            Good::Stone => write!(f, "Stone"),
            Good::Plank => write!(f, "Plank"),
            Good::Food => write!(f, "Food"),
        }
    }
}

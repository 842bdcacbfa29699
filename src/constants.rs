//! Shared configuration values for the settlement map.

/// Width of the default settlement grid, in cells
pub const MAP_WIDTH: i32 = 32;

/// Height of the default settlement grid, in cells
pub const MAP_HEIGHT: i32 = 32;

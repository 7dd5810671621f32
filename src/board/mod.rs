pub mod square;
pub mod tour;

pub use square::Square;
pub use tour::Tour;

/// Edge length of the board the search subcommands run on.
pub const SEARCH_BOARD_SIZE: i32 = 5;

/// Edge length of the board used by the interactive play mode.
pub const PLAY_BOARD_SIZE: i32 = 8;

pub mod dtos;
pub mod handlers;

pub use handlers::{get_game, search_games};

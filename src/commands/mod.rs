//! Command implementations for the Fantasy Football Data CLI

pub mod dp_player_ids;
pub mod sleeper_players;

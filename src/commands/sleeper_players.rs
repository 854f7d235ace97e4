//! Sleeper player roster command implementation

use std::path::PathBuf;

use crate::{output::write_output, sources::sleeper, Result};

/// Handle the sleeper-players command
pub async fn handle_sleeper_players(output: Option<PathBuf>) -> Result<()> {
    let players = sleeper::get_players().await?;
    write_output(&players, output.as_deref())
}

//! DynastyProcess player ID map command implementation

use std::path::PathBuf;

use crate::{output::write_output, sources::dynastyprocess, Result};

/// Handle the dp-player-ids command
pub async fn handle_dp_player_ids(output: Option<PathBuf>) -> Result<()> {
    let rows = dynastyprocess::get_player_ids().await?;
    write_output(&rows, output.as_deref())
}

use serde_json::Value;

use super::HTTP;
use crate::Result;

/// Sleeper NFL players endpoint.
pub const PLAYERS_URL: &str = "https://api.sleeper.app/v1/players/nfl";

/// Fetch the full NFL player map as untyped JSON.
///
/// The response shape is whatever Sleeper currently returns (a map from
/// player ID to attributes); no local schema is imposed and the value is
/// forwarded unmodified.
pub async fn get_players() -> Result<Value> {
    let players = HTTP
        .get(PLAYERS_URL)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(players)
}

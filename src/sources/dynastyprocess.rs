use serde_json::{Map, Value};

use super::HTTP;
use crate::Result;

/// Raw CSV of the DynastyProcess player ID map (stable file name on master).
pub const PLAYER_IDS_URL: &str =
    "https://raw.githubusercontent.com/dynastyprocess/data/master/files/playerids.csv";

/// Fetch the player ID map and convert each CSV row to a JSON object.
pub async fn get_player_ids() -> Result<Value> {
    let body = HTTP
        .get(PLAYER_IDS_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    records_from_csv(&body)
}

/// Convert header-driven CSV text into a JSON array of row objects.
///
/// The first line supplies the keys; each subsequent row becomes one
/// object, in row order, with keys in column order.
pub fn records_from_csv(text: &str) -> Result<Value> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), Value::String(field.to_string()));
        }
        rows.push(Value::Object(row));
    }

    Ok(Value::Array(rows))
}

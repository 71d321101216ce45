//! 盤面セルのシリアライズ
//!
//! セルは 0 = 空, 1 = Player1, 2 = Player2 の正方行列として書き出す
//! (Webフロントエンド時代からの盤面表現と同じ形)

use crate::core::PlayerId;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(cells: &[Vec<Option<PlayerId>>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rows: Vec<Vec<u8>> = cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    None => 0,
                    Some(PlayerId::Player1) => 1,
                    Some(PlayerId::Player2) => 2,
                })
                .collect()
        })
        .collect();
    rows.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<Option<PlayerId>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<Vec<u8>> = Vec::deserialize(deserializer)?;
    let size = rows.len();
    rows.into_iter()
        .map(|row| {
            if row.len() != size {
                return Err(D::Error::custom("board rows must form a square grid"));
            }
            row.into_iter()
                .map(|value| match value {
                    0 => Ok(None),
                    1 => Ok(Some(PlayerId::Player1)),
                    2 => Ok(Some(PlayerId::Player2)),
                    other => Err(D::Error::custom(format!("invalid cell value: {}", other))),
                })
                .collect()
        })
        .collect()
}

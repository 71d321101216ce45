use crate::core::{Board, Difficulty, PlayerId, Position};
use serde::{Deserialize, Serialize};

/// 着手計算サービスのメッセージ (1行1メッセージのJSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NetMessage {
    // Client -> Server
    MoveRequest {
        board: Board,
        difficulty: Difficulty,
        player: PlayerId,
    },

    // Server -> Client
    MoveReply {
        mv: Option<Position>,
    },
    Error {
        message: String,
    },
}

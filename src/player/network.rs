use crate::core::{Board, Difficulty, PlayerId, Position};
use crate::network::protocol::NetMessage;
use crate::player::PlayerController;
use std::sync::mpsc;
use tokio::sync::mpsc as tokio_mpsc;

/// 着手計算サーバーに盤面を送り、返ってきた手を指すコントローラ
///
/// 通信は別タスクが受け持ち、ここではチャネル越しに応答を待つだけ。
/// 盤面と難易度を毎回送るので、サーバー側に状態は残らない
pub struct RemoteAI {
    player_id: PlayerId,
    name: String,
    difficulty: Difficulty,
    request_tx: tokio_mpsc::UnboundedSender<NetMessage>,
    reply_rx: mpsc::Receiver<Option<Position>>,
}

impl RemoteAI {
    pub fn new(
        player_id: PlayerId,
        name: &str,
        difficulty: Difficulty,
        request_tx: tokio_mpsc::UnboundedSender<NetMessage>,
        reply_rx: mpsc::Receiver<Option<Position>>,
    ) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            difficulty,
            request_tx,
            reply_rx,
        }
    }
}

impl PlayerController for RemoteAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, _legal_moves: &[Position]) -> Option<Position> {
        let request = NetMessage::MoveRequest {
            board: board.clone(),
            difficulty: self.difficulty,
            player: self.player_id,
        };
        if self.request_tx.send(request).is_err() {
            return None;
        }
        // Block until a reply is received from the server
        self.reply_rx.recv().ok().flatten()
    }
}

use crate::core::{Board, Position};

/// プレイヤー操作のtrait
///
/// 盤面は呼び出しの間だけ借りる。None は AI なら「置ける場所がない」、
/// 人間操作なら投了を意味する
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;
}

use super::random::RandomAI;
use crate::core::{Board, PlayerId, Position};
use crate::logic::has_five_at;
use crate::player::PlayerController;

/// 一手先の勝ち負けだけを見るAI
///
/// 相手の五目完成を防ぐ手 → 自分の五目を完成させる手 → ランダム、の
/// 優先順で着手する。判定は作業用盤面への仮置きで行い、呼び出し元の
/// 盤面には一切触れない
pub struct HeuristicAI {
    pub player_id: PlayerId,
    pub name: String,
    fallback: RandomAI,
}

impl HeuristicAI {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            fallback: RandomAI::new(player_id, "Fallback"),
        }
    }

    /// player が一手で五目を完成できる空点を行優先で探す
    ///
    /// 仮置きした石は判定の直後に必ず取り除く
    fn winning_square(board: &mut Board, moves: &[Position], player: PlayerId) -> Option<Position> {
        for &pos in moves {
            board.place_stone(pos, player);
            let wins = has_five_at(board, pos, player);
            board.remove_stone(pos);
            if wins {
                return Some(pos);
            }
        }
        None
    }
}

impl PlayerController for HeuristicAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position> {
        if legal_moves.is_empty() {
            return None;
        }

        let mut scratch = board.clone();

        // 1. 相手のリーチを止める
        if let Some(pos) = Self::winning_square(&mut scratch, legal_moves, self.player_id.opponent())
        {
            return Some(pos);
        }

        // 2. 自分の五目を完成させる
        if let Some(pos) = Self::winning_square(&mut scratch, legal_moves, self.player_id) {
            return Some(pos);
        }

        // 3. どちらも無ければランダム
        self.fallback.choose_move(board, legal_moves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

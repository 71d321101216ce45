use super::config::AIConfig;
use super::eval::{evaluate, LOSS_SCORE, WIN_SCORE};
use crate::core::{Board, PlayerId, Position};
use crate::logic::{has_five_at, legal_moves};
use crate::player::PlayerController;

/// αβ枝刈り付きミニマックス探索AI
///
/// 探索中の仮置きはすべて同じ盤面上で行い、どの経路から戻るときも
/// 必ず取り除く。呼び出し元の盤面は作業用の複製で守る
pub struct MinimaxAI {
    pub player_id: PlayerId,
    pub name: String,
    pub depth: usize,
}

impl MinimaxAI {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self::with_depth(player_id, name, AIConfig::get().search.max_depth as usize)
    }

    pub fn with_depth(player_id: PlayerId, name: &str, depth: usize) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            depth,
        }
    }

    fn minimax(
        &self,
        board: &mut Board,
        depth: usize,
        alpha: i32,
        beta: i32,
        is_maximizing: bool,
    ) -> i32 {
        if depth == 0 {
            return evaluate(board, self.player_id);
        }

        let moves = legal_moves(board);
        if moves.is_empty() {
            // 盤が埋まり切った (引き分け直前) 局面
            return evaluate(board, self.player_id);
        }

        let mover = if is_maximizing {
            self.player_id
        } else {
            self.player_id.opponent()
        };

        if is_maximizing {
            let mut max_eval = i32::MIN;
            let mut alpha = alpha;
            for &pos in moves.iter() {
                board.place_stone(pos, mover);
                // この一手で五目が完成するなら、先を読む必要はない。
                // 残り深さを足して、早い勝ちほど高く評価する
                if has_five_at(board, pos, mover) {
                    board.remove_stone(pos);
                    return WIN_SCORE + depth as i32;
                }
                let eval = self.minimax(board, depth - 1, alpha, beta, false);
                board.remove_stone(pos);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break; // Beta Cutoff
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            let mut beta = beta;
            for &pos in moves.iter() {
                board.place_stone(pos, mover);
                // 相手の五目完成。深い位置での負けより浅い位置での負けを
                // 強く嫌うよう残り深さを引く
                if has_five_at(board, pos, mover) {
                    board.remove_stone(pos);
                    return LOSS_SCORE - depth as i32;
                }
                let eval = self.minimax(board, depth - 1, alpha, beta, true);
                board.remove_stone(pos);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position> {
        if legal_moves.is_empty() {
            return None;
        }

        let mut scratch = board.clone();
        let mut best_move = None;
        let mut best_value = i32::MIN;

        for &pos in legal_moves {
            scratch.place_stone(pos, self.player_id);
            let value = if has_five_at(&scratch, pos, self.player_id) {
                WIN_SCORE + self.depth as i32
            } else {
                self.minimax(&mut scratch, self.depth - 1, i32::MIN, i32::MAX, false)
            };
            scratch.remove_stone(pos);

            // 同点は先に見つけた手 (行優先で若い座標) を保持する
            if value > best_value {
                best_value = value;
                best_move = Some(pos);
            }
        }

        best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}

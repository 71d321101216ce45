//! # 評価モジュール
//!
//! 勝敗の付いていない盤面を、指定プレイヤーから見た1つの整数スコアに
//! 落とす。自分の石を正、相手の石を負として、盤中央に近い石ほど大きい
//! 重みで合計する (序盤に中央へ石が集まるようにするための評価)。
//!
//! 重み付け自体は調整用パラメータであって契約ではない。守るべきは
//! 次の2点だけ:
//! - 符号対称性: 両者の石を入れ替えた盤面はスコアの符号が反転する
//! - 有限スコアが WIN_SCORE / LOSS_SCORE に届かないこと

use super::config::AIConfig;
use crate::core::{Board, PlayerId};

/// 勝ちが確定した探索枝の飽和スコア。静的評価はこの値に届かない
pub const WIN_SCORE: i32 = 100_000;
/// 負けが確定した探索枝の飽和スコア
pub const LOSS_SCORE: i32 = -100_000;

/// 静的評価関数
pub fn evaluate(board: &Board, player: PlayerId) -> i32 {
    let mut score = 0;
    for y in 0..board.size {
        for x in 0..board.size {
            if let Some(owner) = board.cells[y][x] {
                let weight = center_weight(board.size, x, y);
                if owner == player {
                    score += weight;
                } else {
                    score -= weight;
                }
            }
        }
    }
    score
}

/// 盤中央からのマンハッタン距離に反比例する重み
///
/// 偶数サイズの盤は中央がマスの間に落ちるため、距離は2倍スケールで測る
fn center_weight(size: usize, x: usize, y: usize) -> i32 {
    let c = size as i32 - 1;
    let distance = (2 * x as i32 - c).abs() + (2 * y as i32 - c).abs();
    AIConfig::get().evaluation.center_weight / (distance + 2)
}

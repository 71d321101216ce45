use super::types::{PlayerId, Position};
use serde::{Deserialize, Serialize};

/// 標準の盤面サイズ
pub const BOARD_SIZE: usize = 12;

/// 盤面 (N x N の正方格子)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub size: usize,
    /// 各マスの石 (None = 空点)
    #[serde(with = "crate::core::serialization")]
    pub cells: Vec<Vec<Option<PlayerId>>>,
    pub last_move: Option<Position>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![vec![None; size]; size],
            last_move: None,
        }
    }

    /// 石の取得 (盤外は空点扱い)
    pub fn get_stone(&self, pos: Position) -> Option<PlayerId> {
        if pos.x < self.size && pos.y < self.size {
            self.cells[pos.y][pos.x]
        } else {
            None
        }
    }

    /// 符号付き座標版。勝利判定の方向走査で使う
    pub fn stone_at(&self, x: i32, y: i32) -> Option<PlayerId> {
        if x >= 0 && x < self.size as i32 && y >= 0 && y < self.size as i32 {
            self.cells[y as usize][x as usize]
        } else {
            None
        }
    }

    /// 石を置く (空点かどうかは呼び出し側が検証済み)
    pub fn place_stone(&mut self, pos: Position, player: PlayerId) {
        self.cells[pos.y][pos.x] = Some(player);
    }

    /// 石を取り除く (探索の仮置きを戻すときに使う)
    pub fn remove_stone(&mut self, pos: Position) {
        self.cells[pos.y][pos.x] = None;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

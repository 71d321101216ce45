use crate::core::{Board, PlayerId, Position};
use crate::display::{render_board, DisplayState, Theme};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

/// カーソル操作で石を置く人間プレイヤー
pub struct TuiController {
    player_id: PlayerId,
    name: String,
    theme: Theme,
}

impl TuiController {
    pub fn new(player_id: PlayerId, name: &str, theme: Theme) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            theme,
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position> {
        if legal_moves.is_empty() {
            return None;
        }

        let mut state = DisplayState::default();
        state.theme = self.theme;
        state.last_move = board.last_move;
        state.status_msg = Some(format!("{}'s turn ({:?})", self.name, self.player_id));
        // 初期カーソルは盤の中央
        state.cursor = Position::new(board.size / 2, board.size / 2);

        loop {
            // 描画
            render_board(board, &state);
            print!("[Arrows]: Move | [Enter]: Place | [q]: Resign\r\n");

            if event::poll(Duration::from_millis(100)).unwrap() {
                if let Event::Key(KeyEvent { code, .. }) = event::read().unwrap() {
                    match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up => {
                            if state.cursor.y > 0 {
                                state.cursor.y -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if state.cursor.y < board.size - 1 {
                                state.cursor.y += 1;
                            }
                        }
                        KeyCode::Left => {
                            if state.cursor.x > 0 {
                                state.cursor.x -= 1;
                            }
                        }
                        KeyCode::Right => {
                            if state.cursor.x < board.size - 1 {
                                state.cursor.x += 1;
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            // 既に石のある場所には置けない
                            if board.get_stone(state.cursor).is_none() {
                                return Some(state.cursor);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

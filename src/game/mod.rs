use crate::core::{Board, PlayerId};
use crate::display::{render_board, DisplayState, Theme};
use crate::logic::{has_five_at, legal_moves};
use crate::player::PlayerController;
use std::time::{Duration, Instant};

/// 持ち時間 (Webカンバス版の初期値と同じ: 先手3分、後手4分)
const CLOCK_P1: Duration = Duration::from_secs(3 * 60);
const CLOCK_P2: Duration = Duration::from_secs(4 * 60);
/// AIの着手前に入れる見かけ上の間。探索そのものは同期的に一気に走る
const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// 対局結果 (Draw 以外は勝者を持つ)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    FiveInARow(PlayerId),
    Resignation(PlayerId),
    Timeout(PlayerId),
    Draw,
}

pub struct Game {
    pub board: Board,
    pub current_player: PlayerId,
    pub theme: Theme,
    pub move_count: usize,
    clocks: [Duration; 2],
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            board,
            current_player: PlayerId::Player1,
            theme: Theme::Wood,
            move_count: 0,
            clocks: [CLOCK_P1, CLOCK_P2],
        }
    }

    /// 対局ループ
    ///
    /// 盤面は手番のコントローラに渡している間だけ貸し、着手の確定は
    /// 常にここで行う。コントローラ呼び出し中に盤面へ触る者は他にいない
    pub fn play(&mut self, p1: &dyn PlayerController, p2: &dyn PlayerController) -> GameResult {
        loop {
            let controller = match self.current_player {
                PlayerId::Player1 => p1,
                PlayerId::Player2 => p2,
            };

            let mut state = self.display_state();
            state.status_msg = Some(format!(
                "{}'s turn ({:?})",
                controller.name(),
                self.current_player
            ));
            render_board(&self.board, &state);

            let moves = legal_moves(&self.board);
            if moves.is_empty() {
                // 空点が尽きたら引き分け
                return self.finish(GameResult::Draw);
            }

            if controller.name().contains("AI") {
                let mut state = self.display_state();
                state.status_msg = Some(format!("{} is thinking...", controller.name()));
                render_board(&self.board, &state);
                std::thread::sleep(AI_MOVE_DELAY);
            }

            let started = Instant::now();
            let chosen = controller.choose_move(&self.board, &moves);
            let elapsed = started.elapsed();

            let clock = &mut self.clocks[clock_index(self.current_player)];
            if elapsed >= *clock {
                // 時間切れ。計算し終わっていても、遅れて返ってきた手は適用しない
                *clock = Duration::ZERO;
                return self.finish(GameResult::Timeout(self.current_player.opponent()));
            }
            *clock -= elapsed;

            let pos = match chosen {
                Some(pos) => pos,
                None => {
                    return self.finish(GameResult::Resignation(self.current_player.opponent()))
                }
            };

            self.board.place_stone(pos, self.current_player);
            self.board.last_move = Some(pos);
            self.move_count += 1;

            if has_five_at(&self.board, pos, self.current_player) {
                return self.finish(GameResult::FiveInARow(self.current_player));
            }

            self.current_player = self.current_player.opponent();
        }
    }

    fn display_state(&self) -> DisplayState {
        let mut state = DisplayState::default();
        state.theme = self.theme;
        state.last_move = self.board.last_move;
        state.move_count = self.move_count;
        state.clocks = Some(self.clocks);
        state.show_cursor = false;
        state
    }

    /// 最終局面を結果メッセージ付きで描画してから結果を返す
    fn finish(&self, result: GameResult) -> GameResult {
        let mut state = self.display_state();
        state.status_msg = Some(match result {
            GameResult::FiveInARow(winner) => format!("Five in a row! {:?} wins!", winner),
            GameResult::Resignation(winner) => format!("Resignation. {:?} wins!", winner),
            GameResult::Timeout(winner) => format!("Time out! {:?} wins!", winner),
            GameResult::Draw => "Board is full. Draw!".to_string(),
        });
        render_board(&self.board, &state);
        result
    }
}

fn clock_index(player: PlayerId) -> usize {
    match player {
        PlayerId::Player1 => 0,
        PlayerId::Player2 => 1,
    }
}

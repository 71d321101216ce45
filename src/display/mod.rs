use crate::core::{Board, PlayerId, Position};
use crossterm::style::{Color, Stylize};
use crossterm::{cursor, execute, terminal};
use std::io::stdout;
use std::time::Duration;

/// 盤面の配色テーマ (Webカンバス版のテーマ選択をそのまま引き継いだ)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Wood,
    Paper,
    Dark,
}

pub struct ThemeColors {
    pub board: Color,
    pub line: Color,
    pub p1: Color,
    pub p2: Color,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Wood => ThemeColors {
                board: Color::Rgb {
                    r: 0xee,
                    g: 0xcf,
                    b: 0xa1,
                },
                line: Color::Rgb {
                    r: 0x5e,
                    g: 0x40,
                    b: 0x26,
                },
                p1: Color::Rgb { r: 0, g: 0, b: 0 },
                p2: Color::Rgb {
                    r: 0xff,
                    g: 0xff,
                    b: 0xff,
                },
            },
            Theme::Paper => ThemeColors {
                board: Color::Rgb {
                    r: 0xf8,
                    g: 0xf9,
                    b: 0xfa,
                },
                line: Color::Rgb {
                    r: 0x2c,
                    g: 0x3e,
                    b: 0x50,
                },
                p1: Color::Rgb {
                    r: 0x2c,
                    g: 0x3e,
                    b: 0x50,
                },
                p2: Color::Rgb {
                    r: 0xff,
                    g: 0xff,
                    b: 0xff,
                },
            },
            Theme::Dark => ThemeColors {
                board: Color::Rgb {
                    r: 0x2d,
                    g: 0x34,
                    b: 0x36,
                },
                line: Color::Rgb {
                    r: 0x63,
                    g: 0x6e,
                    b: 0x72,
                },
                p1: Color::Rgb {
                    r: 0x00,
                    g: 0xce,
                    b: 0xc9,
                },
                p2: Color::Rgb {
                    r: 0xff,
                    g: 0x76,
                    b: 0x75,
                },
            },
        }
    }
}

pub struct DisplayState {
    pub cursor: Position,
    pub status_msg: Option<String>,
    pub last_move: Option<Position>,
    pub show_cursor: bool,
    pub theme: Theme,
    pub move_count: usize,
    /// 残り持ち時間 [Player1, Player2]
    pub clocks: Option<[Duration; 2]>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            status_msg: None,
            last_move: None,
            show_cursor: true,
            theme: Theme::Wood,
            move_count: 0,
            clocks: None,
        }
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();
    let colors = state.theme.colors();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Gomoku AI ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }

    if let Some(clocks) = state.clocks {
        print!(
            "Move {} | P1 {} | P2 {}\r\n",
            state.move_count,
            format_clock(clocks[0]),
            format_clock(clocks[1])
        );
    }
    print!("\r\n");

    // X軸ラベル
    print!("   ");
    for x in 0..board.size {
        print!("{:>3}", x + 1);
    }
    print!("\r\n");

    for y in 0..board.size {
        print!("{:2} ", y + 1);
        for x in 0..board.size {
            let pos = Position::new(x, y);
            let stone = board.get_stone(pos);

            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_last_move = state.last_move == Some(pos);

            let symbol = match stone {
                Some(PlayerId::Player1) => "●",
                Some(PlayerId::Player2) => "○",
                None => "·",
            };
            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };

            let cell_text = format!("{}{}{}", prefix, symbol, suffix);
            let styled = match stone {
                Some(PlayerId::Player1) => cell_text.with(colors.p1).on(colors.board),
                Some(PlayerId::Player2) => cell_text.with(colors.p2).on(colors.board),
                None => cell_text.with(colors.line).on(colors.board),
            };

            if is_cursor {
                print!("{}", styled.bold());
            } else {
                print!("{}", styled);
            }
        }
        print!("\r\n");
    }
    print!("\r\n");
}

fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

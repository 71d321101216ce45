use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use gomoku_ai::core::{Board, Difficulty, PlayerId, BOARD_SIZE};
use gomoku_ai::display::Theme;
use gomoku_ai::game::{Game, GameResult};
use gomoku_ai::network::client::MoveClient;
use gomoku_ai::player::{ai, PlayerController, RemoteAI, TuiController};
use std::io;
use std::time::Duration;

const SERVER_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run().await;

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

async fn run() -> anyhow::Result<()> {
    print!("=== Gomoku AI (12x12) ===\r\n");

    print!("\r\nSelect mode:\r\n");
    print!("1. Local Play\r\n");
    print!("2. Start Move Server ({})\r\n", SERVER_ADDR);
    print!("3. Play vs Remote AI ({})\r\n", SERVER_ADDR);

    let mode = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break "local",
                    KeyCode::Char('2') => break "server",
                    KeyCode::Char('3') => break "client",
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    match mode {
        "server" => {
            gomoku_ai::network::server::start_server(SERVER_ADDR).await?;
            Ok(())
        }
        "client" => run_remote().await,
        _ => run_local(),
    }
}

fn run_local() -> anyhow::Result<()> {
    let difficulty = match select_difficulty(true)? {
        Some(difficulty) => difficulty,
        None => return Ok(()),
    };
    let theme = match select_theme()? {
        Some(theme) => theme,
        None => return Ok(()),
    };

    let p1: Box<dyn PlayerController> =
        Box::new(TuiController::new(PlayerId::Player1, "Player 1", theme));
    let p2: Box<dyn PlayerController> = match ai::create_ai(difficulty, PlayerId::Player2) {
        Some(controller) => controller,
        // PvP は2人目も人間
        None => Box::new(TuiController::new(PlayerId::Player2, "Player 2", theme)),
    };

    let mut game = Game::new(Board::new(BOARD_SIZE));
    game.theme = theme;
    let result = game.play(p1.as_ref(), p2.as_ref());
    announce(result)
}

async fn run_remote() -> anyhow::Result<()> {
    let difficulty = match select_difficulty(false)? {
        Some(difficulty) => difficulty,
        None => return Ok(()),
    };
    let theme = match select_theme()? {
        Some(theme) => theme,
        None => return Ok(()),
    };

    print!("Connecting to server...\r\n");
    let mut client = MoveClient::connect(SERVER_ADDR).await?;
    print!("Connected!\r\n");

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (reply_tx, reply_rx) = std::sync::mpsc::channel();

    tokio::spawn(async move {
        if let Err(e) = client.run(request_rx, reply_tx).await {
            eprintln!("Client networking error: {}", e);
        }
    });

    let p1: Box<dyn PlayerController> = Box::new(TuiController::new(PlayerId::Player1, "You", theme));
    let p2: Box<dyn PlayerController> = Box::new(RemoteAI::new(
        PlayerId::Player2,
        "Remote AI",
        difficulty,
        request_tx,
        reply_rx,
    ));

    let mut game = Game::new(Board::new(BOARD_SIZE));
    game.theme = theme;
    let result = game.play(p1.as_ref(), p2.as_ref());
    announce(result)
}

fn select_difficulty(include_pvp: bool) -> anyhow::Result<Option<Difficulty>> {
    print!("\r\nSelect difficulty:\r\n");
    print!("1. Easy (random)\r\n");
    print!("2. Medium (block & attack)\r\n");
    print!("3. Hard (minimax search)\r\n");
    if include_pvp {
        print!("4. Human vs Human\r\n");
    }

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => return Ok(Some(Difficulty::Random)),
                    KeyCode::Char('2') => return Ok(Some(Difficulty::Heuristic)),
                    KeyCode::Char('3') => return Ok(Some(Difficulty::Adversarial)),
                    KeyCode::Char('4') if include_pvp => {
                        return Ok(Some(Difficulty::HumanVsHuman))
                    }
                    KeyCode::Char('q') => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}

fn select_theme() -> anyhow::Result<Option<Theme>> {
    print!("\r\nSelect theme:\r\n");
    print!("1. Wood\r\n");
    print!("2. Paper\r\n");
    print!("3. Dark\r\n");

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => return Ok(Some(Theme::Wood)),
                    KeyCode::Char('2') => return Ok(Some(Theme::Paper)),
                    KeyCode::Char('3') => return Ok(Some(Theme::Dark)),
                    KeyCode::Char('q') => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}

fn announce(result: GameResult) -> anyhow::Result<()> {
    let message = match result {
        GameResult::FiveInARow(winner) => format!("{:?} wins by five in a row!", winner),
        GameResult::Resignation(winner) => format!("{:?} wins by resignation!", winner),
        GameResult::Timeout(winner) => format!("{:?} wins on time!", winner),
        GameResult::Draw => "Draw: the board is full.".to_string(),
    };
    print!("\r\n{}\r\n", message);
    print!("Press any key to exit...\r\n");

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}

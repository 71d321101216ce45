use crate::core::PlayerId;
use crate::logic::{has_five_in_row, legal_moves};
use crate::network::protocol::NetMessage;
use crate::player::ai;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// 着手計算サーバー
///
/// 盤面と難易度を受け取り、AIの着手を返す。局面を保持しない
/// リクエスト応答型で、探索はリクエストごとに同期的に完結する
pub async fn start_server(addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    print!("Move server started on {}\r\n", addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket).await {
                eprintln!("Error handling connection from {}: {}", peer, e);
            }
        });
    }
}

async fn handle_connection(mut socket: TcpStream) -> anyhow::Result<()> {
    let (reader, mut writer) = socket.split();
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        let reply = match serde_json::from_str::<NetMessage>(&line) {
            Ok(msg) => compute_reply(msg),
            Err(e) => NetMessage::Error {
                message: format!("bad request: {}", e),
            },
        };
        let json = serde_json::to_string(&reply)? + "\n";
        writer.write_all(json.as_bytes()).await?;
    }
    Ok(())
}

/// リクエスト1件分の応答を作る。AI探索はここで同期的に走る
fn compute_reply(msg: NetMessage) -> NetMessage {
    let (board, difficulty, player) = match msg {
        NetMessage::MoveRequest {
            board,
            difficulty,
            player,
        } => (board, difficulty, player),
        _ => {
            return NetMessage::Error {
                message: "expected MoveRequest".to_string(),
            }
        }
    };

    // 決着済みの盤面に手は返さない
    for side in [PlayerId::Player1, PlayerId::Player2] {
        if has_five_in_row(&board, side) {
            return NetMessage::Error {
                message: format!("game is already over: {:?} has five in a row", side),
            };
        }
    }

    match ai::create_ai(difficulty, player) {
        Some(controller) => {
            let moves = legal_moves(&board);
            NetMessage::MoveReply {
                mv: controller.choose_move(&board, &moves),
            }
        }
        None => NetMessage::Error {
            message: "no AI controller for this difficulty".to_string(),
        },
    }
}

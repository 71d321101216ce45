use crate::core::Position;
use crate::network::protocol::NetMessage;
use std::sync::mpsc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc as tokio_mpsc;

/// 着手計算サーバーへの接続
pub struct MoveClient {
    stream: TcpStream,
}

impl MoveClient {
    pub async fn connect(addr: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self { stream })
    }

    /// リクエスト送信と応答受信のループ
    ///
    /// プロトコルは厳密な1リクエスト1応答なので、送って読むだけの逐次処理
    pub async fn run(
        &mut self,
        mut request_rx: tokio_mpsc::UnboundedReceiver<NetMessage>,
        reply_tx: mpsc::Sender<Option<Position>>,
    ) -> anyhow::Result<()> {
        let (reader, mut writer) = self.stream.split();
        let mut lines = BufReader::new(reader).lines();

        while let Some(request) = request_rx.recv().await {
            let json = serde_json::to_string(&request)? + "\n";
            writer.write_all(json.as_bytes()).await?;

            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break, // サーバー切断
            };
            match serde_json::from_str::<NetMessage>(&line)? {
                NetMessage::MoveReply { mv } => {
                    let _ = reply_tx.send(mv);
                }
                NetMessage::Error { message } => {
                    eprintln!("Server error: {}", message);
                    let _ = reply_tx.send(None);
                }
                _ => {
                    let _ = reply_tx.send(None);
                }
            }
        }
        Ok(())
    }
}

//! Streaming example: print deltas as they arrive, stop on Ctrl-C.

use std::io::Write;

use byok_async::{
    ByokError, Client,
    types::chat::{ChatMessage, ChatRequest},
};
use futures::StreamExt;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();
    let cancel = CancellationToken::new();

    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let req = ChatRequest::new(vec![ChatMessage::user(
        "Tell me the legend of the drowned bell.",
    )]);
    let mut stream = client.chat().stream_with_cancel(req, cancel).await?;

    while let Some(item) = stream.next().await {
        match item {
            Ok(chunk) if chunk.done => {
                println!("\n[done]");
                break;
            }
            Ok(chunk) => {
                print!("{}", chunk.content);
                std::io::stdout().flush()?;
            }
            Err(ByokError::Cancelled) => {
                println!("\n[cancelled]");
                break;
            }
            Err(ByokError::IncompleteStream { chunks }) => {
                println!("\n[connection closed after {chunks} chunks]");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

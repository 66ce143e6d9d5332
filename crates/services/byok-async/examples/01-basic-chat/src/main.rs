//! Basic chat example: one NPC line, whole-body response.
//!
//! Reads `BYOK_API_KEY` (and optionally `BYOK_USER_ID`) from the environment.

use byok_async::{
    Client,
    types::chat::{ChatMessage, ChatRequest, QualityTier},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    let req = ChatRequest::new(vec![
        ChatMessage::system("You are Thorn, a gruff village blacksmith."),
        ChatMessage::user("Can you repair my sword?"),
    ])
    .with_quality_tier(QualityTier::Standard)
    .with_lorevault_entity_ref("characters/blacksmith-thorn");

    println!("Asking Thorn...");
    let res = client.chat().send(req).await?;

    println!("\nThorn says:");
    println!("{}", res.text().unwrap_or("<no reply>"));

    println!("\nToken usage:");
    println!("  Prompt: {}", res.usage.prompt_tokens);
    println!("  Completion: {}", res.usage.completion_tokens);

    Ok(())
}

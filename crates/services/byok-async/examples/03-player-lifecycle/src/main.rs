//! Player lifecycle: register, update state, react to events, check wallet.

use byok_async::{
    ByokError, Client, ErrorCategory,
    types::{
        JsonObject,
        events::{IngestEventRequest, PollEventsParams},
        players::RegisterPlayerRequest,
        state::UpdateStateRequest,
        wallet::CheckoutRequest,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    let player = client
        .players()
        .register(RegisterPlayerRequest::device("3f1c9a2e-demo").with_display_name("Wanderer"))
        .await?;
    println!(
        "Player {} ({})",
        player.user_id,
        if player.created { "new" } else { "returning" }
    );
    let me = Some(player.user_id.as_str());

    let update = UpdateStateRequest::default()
        .with_markers(["tutorial_done"])
        .with_location("riverside");
    let state = client.state().update(&update, me).await?;
    println!("Markers: {:?}", state.markers_activated);

    let mut payload = JsonObject::new();
    payload.insert("target".into(), serde_json::json!("river troll"));
    let ingest = client
        .events()
        .ingest(&IngestEventRequest::new("world.kill", payload), me)
        .await?;
    println!("World reacted with {} effect(s)", ingest.effects_count);

    let pending = client.events().poll(&PollEventsParams::default(), me).await?;
    let ids: Vec<String> = pending.events.iter().map(|e| e.id.clone()).collect();
    for event in &pending.events {
        println!("Event {}: {}", event.id, event.event_type);
    }
    if !ids.is_empty() {
        client.events().ack_batch(&ids, me).await?;
    }

    match client.wallet().get(me).await {
        Ok(wallet) => println!("Balance: {} {}", wallet.available_cents, wallet.currency),
        Err(ByokError::Api(api)) if api.category == ErrorCategory::PaymentRequired => {
            let checkout = client
                .wallet()
                .checkout(&CheckoutRequest::new(500), me)
                .await?;
            println!("Top up at {}", checkout.checkout_url);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

//! API resource implementations for the BYOK client

/// Chat completions (whole-body and streaming)
pub mod chat;
/// Game events: polling, acknowledgement, ingestion
pub mod events;
/// Player registration, profiles, and passports
pub mod players;
/// Player state
pub mod state;
/// Wallet balance and checkout
pub mod wallet;

pub use chat::Chat;
pub use events::Events;
pub use players::Players;
pub use state::State;
pub use wallet::Wallet;

pub mod discord_client;
pub mod mock_transport;

pub use discord_client::DiscordWebhookClient;
pub use mock_transport::{MockTransport, RecordedUpload};

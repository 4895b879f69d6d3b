use super::send_card::{SendCardError, SendCardUseCase};
use crate::domain::delivery::DeliveryStatus;
use tracing::info;

/// 疎通確認に送るサンプル文
pub const SAMPLE_TEXT: &str =
    "This is the title\nThis is the second line\nThis is the third line\nA much longer line of text\nTesting line breaks\nText Card Notifier";

/// 固定のサンプル文を送って Webhook の疎通を確認する
#[derive(Clone)]
pub struct SendTestCardUseCase {
    send_card: SendCardUseCase,
}

impl SendTestCardUseCase {
    pub fn new(send_card: SendCardUseCase) -> Self {
        Self { send_card }
    }

    pub async fn execute(&self) -> Result<DeliveryStatus, SendCardError> {
        info!("Sending diagnostic card");
        self.send_card.execute(SAMPLE_TEXT).await
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Webhook プロバイダが返した HTTP ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryStatus(u16);

impl DeliveryStatus {
    /// Discord webhooks answer a successful upload with `204 No Content`.
    pub const ACCEPTED: DeliveryStatus = DeliveryStatus(204);

    pub fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn code(&self) -> u16 {
        self.0
    }

    pub fn is_accepted(&self) -> bool {
        *self == Self::ACCEPTED
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for DeliveryStatus {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

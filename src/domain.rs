//! ドメイン層
//!
//! カード生成と Webhook 配信のビジネスロジックを含む層

pub mod card;
pub mod delivery;

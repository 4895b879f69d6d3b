//! 配信集約
//!
//! 生成したカードを Webhook へ送る契約と、その結果の解釈を扱う

pub mod errors;
pub mod services;
pub mod transport;
pub mod value_objects;

pub use errors::*;
pub use services::*;
pub use transport::*;
pub use value_objects::*;

//! カード集約
//!
//! テキストの正規化、レイアウト、透かしの合成、PNG エンコードを扱う

pub mod errors;
pub mod layout;
pub mod services;
pub mod typeface;
pub mod value_objects;
pub mod watermark;

pub use errors::*;
pub use layout::*;
pub use services::*;
pub use typeface::*;
pub use value_objects::*;
pub use watermark::*;

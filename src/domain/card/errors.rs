use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Text is empty after removing blank lines")]
    EmptyInput,

    #[error("Watermark text must not be blank")]
    BlankWatermark,

    #[error("Failed to load font {path}: {reason}")]
    FontLoad { path: String, reason: String },

    #[error("Card is too large to render: {width}x{height} pixels")]
    CanvasTooLarge { width: u64, height: u64 },

    #[error("Failed to encode card image: {0}")]
    Encode(String),
}

impl CardError {
    /// 呼び出し側の入力に起因するエラーかどうか
    pub fn is_client_error(&self) -> bool {
        matches!(self, CardError::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_error_classification() {
        assert!(CardError::EmptyInput.is_client_error());
        assert!(!CardError::Encode("boom".to_string()).is_client_error());
        assert!(!CardError::BlankWatermark.is_client_error());
        assert!(
            !CardError::FontLoad {
                path: "/missing.ttf".to_string(),
                reason: "not found".to_string(),
            }
            .is_client_error()
        );
    }
}

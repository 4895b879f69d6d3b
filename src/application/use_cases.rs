pub mod render_card;
pub mod run_application;
pub mod send_card;
pub mod send_test_card;

pub use render_card::RenderCardUseCase;
pub use run_application::RunApplicationUseCase;
pub use send_card::{SendCardError, SendCardUseCase};
pub use send_test_card::{SAMPLE_TEXT, SendTestCardUseCase};

pub mod client;
pub mod text;

pub use client::LlmClient;
pub use text::{CannedText, LlmTextGenerator, TextGenerator};

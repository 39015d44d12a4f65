//! LLM-backed query synthesis.

pub mod openai;
pub mod prompts;

pub use openai::OpenAiGenerator;

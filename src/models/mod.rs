// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod chat;
pub mod match_result;
pub mod record;

pub use chat::{ChatRequest, ChatResponse};
pub use match_result::{MatchOutcome, MatchResult};
pub use record::Record;

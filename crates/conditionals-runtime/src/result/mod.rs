//! Evaluation outcomes and explanations

mod message;
mod outcome;

pub use message::{ConditionMessage, ItemStyle, ItemsBuilder, MessageBuilder, MESSAGE_SEPARATOR};
pub use outcome::{ConditionOutcome, MatchOutcome};

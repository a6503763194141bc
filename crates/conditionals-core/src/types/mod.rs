//! Type system for conditions
//!
//! This module contains:
//! - Raw values
//! - Value kinds and match types
//! - Duration literals
//! - Coercion from raw values into declared kinds

pub mod coerce;
pub mod duration;
pub mod kind;
pub mod value;

pub use coerce::FromValue;
pub use duration::parse_duration;
pub use kind::{CollectionMatch, NumberMatch, OrderingMatch, StringMatch, UnknownMatchType, ValueKind};
pub use value::Value;

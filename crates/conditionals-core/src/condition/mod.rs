//! Condition declarations and specifications
//!
//! A condition declaration is a flat attribute map:
//!
//! ```yaml
//! prefix: app
//! name: [count]
//! havingValue: 5
//! matchType: GREATER_THAN
//! not: false
//! matchIfMissing: false
//! ```
//!
//! [`SpecParser`] turns it into an immutable [`PropertySpec`] whose
//! [`PropertyPredicate`] carries the already-parsed expected value.
//!
//! ## Recognized attributes
//! - `value` / `name` (exactly one, string or string array)
//! - `prefix`, `havingValue`, `matchIfMissing`
//! - `not`, `matchType` (every kind but enum)
//! - `ignoreCase`, `trim` (string)
//! - `size` (collection)
//! - `enumType` (enum; registered name or inline member list)

pub mod declaration;
mod enums;
mod parser;
mod types;

pub use declaration::Declaration;
pub use enums::{EnumRegistry, EnumType};
pub use parser::{normalize_prefix, SpecParser};
pub use types::{
    CollectionPredicate, DurationPredicate, EnumPredicate, FloatPredicate, NumberPredicate,
    PropertyPredicate, PropertySpec, StringPredicate, PREFIX_SEPARATOR,
};

//! Domain model for denomination decomposition.
//!
//! This crate defines the value types and their invariants. It contains no
//! decomposition or conversion logic; see `denom-convert` for the engine.
//!
//! # Modules
//!
//! - `denomination` - A single unit with a positive magnitude
//! - `set` - Non-empty, duplicate-free denomination sets
//! - `decomposition` - Counts per denomination plus remainder
//! - `exact` - Exact decimal arithmetic that never rounds
//! - `error` - Validation errors

pub mod decomposition;
pub mod denomination;
pub mod error;
pub mod exact;
pub mod set;

pub use decomposition::{Decomposition, DenominationCount};
pub use denomination::Denomination;
pub use error::{DomainError, DomainResult};
pub use exact::{ExactDecimal, exact_mul};
pub use set::DenominationSet;

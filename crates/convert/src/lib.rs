//! Decomposition and conversion engine for denomination sets.
//!
//! Breaks amounts down into denomination counts and re-expresses those
//! breakdowns in other denomination systems. All operations are synchronous
//! pure functions; nothing here fetches rates or persists anything.
//!
//! # Modules
//!
//! - `engine` - Entry points: `decompose`, `convert`
//! - `greedy` / `optimal` - Decomposition strategies
//! - `canonical` - Optional greedy-safety probe
//! - `exchange` - Exact exchange factors
//! - `config` - Engine bounds
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use denom_core::DenominationSet;
//! use denom_convert::{ExchangeFactor, Strategy, convert, decompose};
//!
//! let notes = DenominationSet::from_pairs([(dec!(10), "ten"), (dec!(50), "fifty")]).unwrap();
//! let coins = DenominationSet::from_pairs([(dec!(1), "one"), (dec!(2), "two")]).unwrap();
//!
//! let wallet = decompose(dec!(70), &notes, Strategy::Greedy).unwrap();
//! let factor = ExchangeFactor::new(dec!(0.1)).unwrap();
//! let converted = convert(&wallet, &coins, factor, Strategy::Optimal).unwrap();
//!
//! assert_eq!(converted.amount(), dec!(7));
//! assert_eq!(converted.count_of("two"), 3);
//! assert_eq!(converted.count_of("one"), 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod strategy;

mod canonical;
mod greedy;
mod grid;
mod optimal;

#[cfg(test)]
mod props;

pub use config::EngineConfig;
pub use engine::{DecompositionEngine, convert, decompose};
pub use error::{ConvertError, ConvertResult};
pub use exchange::ExchangeFactor;
pub use strategy::Strategy;

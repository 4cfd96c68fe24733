//! # passgen-core - Core Domain Types
//!
//! Foundation crate for passgen. Provides the generation constraints, the
//! password generator, the strength scorer, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, rand, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`GeneratorConfig`] - Length (clamped to 6..=100) plus the digit/symbol flags
//! - [`IndexPolicy`] - Uniform indexing or the legacy off-by-one
//!
//! ### Generation (`generator`)
//! - [`generate()`] - Produce a password from a config and any `rand::Rng`
//! - [`alphabet()`] - The characters a config draws from
//!
//! ### Strength (`strength`)
//! - [`score()`] - Heuristic label/colour/percent for a config
//! - [`Strength`], [`StrengthInfo`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use passgen_core::prelude::*;
//! ```

pub mod error;
pub mod generator;
pub mod logging;
pub mod strength;
pub mod types;

/// Prelude for common imports used throughout all passgen crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use generator::{alphabet, generate, DIGITS, LETTERS, SYMBOLS};
pub use strength::{score, Strength, StrengthInfo};
pub use types::{
    clamp_length, GeneratorConfig, IndexPolicy, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH,
};

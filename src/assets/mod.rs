//! # Assets Module — The Multi-Asset Value Algebra
//!
//! Everything a ledger needs to account for bundles of fungible tokens:
//! the native currency plus arbitrarily many user-minted token classes,
//! kept in one canonical sparse structure.
//!
//! ## Architecture
//!
//! ```text
//! ids.rs    — PolicyId / AssetName identifiers, validation, hex forms
//! value.rs  — Value: construction, inspection, combination, traversal
//! ```
//!
//! ## Design Principles
//!
//! 1. **Canonical or nothing.** A [`Value`] never stores a zero quantity,
//!    never keeps an empty policy entry, and always iterates in ascending
//!    byte-lexicographic order. Equality of Values is equality of their
//!    canonical flattenings — downstream balance checks depend on that.
//!
//! 2. **Smart constructors, private representation.** The two-level map
//!    inside [`Value`] is not publicly constructible. The only ways in
//!    are constructors that enforce the invariants, so every `Value` a
//!    caller can get their hands on is safe to combine and compare.
//!
//! 3. **Total operations.** Construction from untrusted grouped data can
//!    fail ([`ValueError`]); everything after that is a total function.
//!    No partial failures, no degraded modes.
//!
//! 4. **Immutable value semantics.** Combinators return fresh Values.
//!    Share instances across threads without locks.

pub mod ids;
pub mod value;

pub use ids::{AssetName, IdError, PolicyId, MAX_ASSET_NAME_LENGTH, POLICY_ID_LENGTH};
pub use value::{Quantity, Value, ValueError};

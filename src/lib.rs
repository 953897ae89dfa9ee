// Copyright (c) 2026 Multiasset Contributors. MIT License.

//! # Multiasset — Canonical Multi-Asset Value Algebra
//!
//! A ledger does not track "a balance"; it tracks a bundle: some amount
//! of the native currency plus any number of user-minted token classes.
//! This crate is that bundle done properly — a sparse, two-level mapping
//! from minting policy to token name to signed quantity, with every
//! operation proven to keep the representation canonical.
//!
//! Canonical matters because equality matters. Downstream ledger logic
//! proves balance by comparing Values, and a single dead zero entry or a
//! pair of out-of-order keys would make two equal bundles compare
//! unequal. So the invariants are not a convention here, they are the
//! contract: no zeros, no duplicates, ascending order, always.
//!
//! ## Architecture
//!
//! - **dict** — the ordered-map primitive: a `BTreeMap` wrapper with
//!   merge-with-combiner semantics, where a combiner can signal deletion.
//! - **assets** — the algebra itself: identifiers, the [`Value`] type,
//!   its constructors, combinators, and canonical traversal.
//!
//! ## Design Philosophy
//!
//! 1. Pure and deterministic. No I/O, no clocks, no randomness.
//! 2. Construction can fail; nothing after construction can.
//! 3. Immutable values. Combinators return new Values, callers share
//!    instances freely across threads.
//! 4. If it defines equality, it has tests. The algebraic laws (merge
//!    identity, inverse, commutativity, associativity) are verified over
//!    randomized inputs, not just hand-picked ones.

pub mod assets;
pub mod dict;

pub use assets::{AssetName, IdError, PolicyId, Quantity, Value, ValueError};
pub use dict::Dict;

//! # Multi-Asset Value
//!
//! [`Value`] is the canonical sparse bundle of token holdings: an ordered
//! map from [`PolicyId`] to an ordered map from [`AssetName`] to a signed
//! quantity. The representation is private and every public operation
//! preserves three invariants:
//!
//! 1. No entry ever stores quantity 0, and no policy ever maps to an
//!    empty inner map — an inner map emptied by a mutation takes its
//!    policy entry with it.
//! 2. Each policy appears at most once, each asset name at most once per
//!    policy.
//! 3. Iteration is ascending byte-lexicographic at both levels, so two
//!    Values are equal exactly when their [`flatten`](Value::flatten)ings
//!    are equal sequences.
//!
//! Because of those invariants, absence and zero are the same thing:
//! [`quantity_of`](Value::quantity_of) answers 0 for anything not stored,
//! and that answer is always correct.
//!
//! A `Value` is an immutable value type. Combinators take `&self` and
//! return a fresh `Value`; nothing ever mutates in place, so instances can
//! be shared across threads freely.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::dict::Dict;

use super::ids::{AssetName, PolicyId};

/// Signed token quantity.
///
/// Wide enough that summing any realistic ledger's worth of holdings
/// cannot overflow, which keeps [`Value::merge`] and [`Value::add`] total.
pub type Quantity = i128;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by [`Value::from_asset_list`].
///
/// Construction either succeeds with a fully canonical [`Value`] or fails
/// with one of these — there is no partially-built result to misuse. Every
/// other operation on an already-constructed `Value` is total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The same policy appeared in more than one outer group. Absorbing
    /// the duplicate silently would be a last-write-wins merge, which is
    /// never what the caller meant.
    #[error("duplicate policy {policy} across asset groups")]
    DuplicatePolicy {
        /// The policy that appeared twice.
        policy: PolicyId,
    },

    /// A policy came with zero asset entries. An empty group is invalid
    /// input, not an empty holding.
    #[error("policy {policy} has an empty asset group")]
    EmptyGroup {
        /// The policy whose group was empty.
        policy: PolicyId,
    },

    /// Asset names within a group were not strictly ascending.
    #[error("assets under policy {policy} are not strictly ascending by name")]
    UnsortedGroup {
        /// The policy whose group was out of order.
        policy: PolicyId,
    },

    /// A group carried an explicit zero quantity.
    #[error("zero quantity for asset {asset} under policy {policy}")]
    ZeroQuantity {
        /// The policy of the offending entry.
        policy: PolicyId,
        /// The asset of the offending entry.
        asset: AssetName,
    },
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A canonical multi-asset bundle of token quantities.
///
/// See the [module docs](self) for the invariants. Construct through
/// [`Value::zero`], [`Value::from_asset`], [`Value::from_lovelace`], or
/// [`Value::from_asset_list`]; there is deliberately no constructor that
/// accepts a raw map.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Value {
    inner: Dict<PolicyId, Dict<AssetName, Quantity>>,
}

impl Value {
    // -- construction -------------------------------------------------------

    /// The empty value: no policies, no holdings. Identity for
    /// [`merge`](Value::merge).
    pub fn zero() -> Self {
        Self::default()
    }

    /// A value holding a single asset, or [`zero`](Value::zero) if the
    /// quantity is 0. Never produces a dangling empty inner map.
    pub fn from_asset(policy: PolicyId, asset: AssetName, quantity: Quantity) -> Self {
        if quantity == 0 {
            return Self::zero();
        }
        Self {
            inner: Dict::singleton(policy, Dict::singleton(asset, quantity)),
        }
    }

    /// A value holding only the native currency.
    pub fn from_lovelace(quantity: Quantity) -> Self {
        Self::from_asset(PolicyId::ada(), AssetName::ada(), quantity)
    }

    /// Builds a value from pre-grouped `(policy, assets)` data.
    ///
    /// Each inner group must be strictly ascending by asset name with no
    /// zero quantities; that is checked once while the group is absorbed.
    /// Across groups, a repeated policy or an empty group fails the whole
    /// construction — there is no partial result.
    ///
    /// # Errors
    ///
    /// Any [`ValueError`] variant, depending on which rule the input broke
    /// first.
    pub fn from_asset_list<I>(groups: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = (PolicyId, Vec<(AssetName, Quantity)>)>,
    {
        let mut inner: Dict<PolicyId, Dict<AssetName, Quantity>> = Dict::new();

        for (policy, group) in groups {
            if group.is_empty() {
                debug!(policy = %policy, "rejected asset list: empty group");
                return Err(ValueError::EmptyGroup { policy });
            }
            if inner.get(&policy).is_some() {
                debug!(policy = %policy, "rejected asset list: duplicate policy");
                return Err(ValueError::DuplicatePolicy { policy });
            }

            let mut tokens = Dict::new();
            let mut previous: Option<AssetName> = None;
            for (asset, quantity) in group {
                if quantity == 0 {
                    debug!(policy = %policy, asset = %asset, "rejected asset list: zero quantity");
                    return Err(ValueError::ZeroQuantity { policy, asset });
                }
                if previous.as_ref().is_some_and(|last| *last >= asset) {
                    debug!(policy = %policy, "rejected asset list: unsorted group");
                    return Err(ValueError::UnsortedGroup { policy });
                }
                previous = Some(asset.clone());
                tokens.insert(asset, quantity);
            }
            inner.insert(policy, tokens);
        }

        Ok(Self { inner })
    }

    // -- inspection ---------------------------------------------------------

    /// Returns `true` if this is the empty value.
    pub fn is_zero(&self) -> bool {
        self.inner.is_empty()
    }

    /// The native-currency quantity, 0 if absent.
    pub fn lovelace(&self) -> Quantity {
        self.quantity_of(&PolicyId::ada(), &AssetName::ada())
    }

    /// The stored quantity for `(policy, asset)`, 0 if absent.
    ///
    /// Absence and zero are indistinguishable by construction, so 0 is
    /// always the right answer for a missing entry, never an error.
    pub fn quantity_of(&self, policy: &PolicyId, asset: &AssetName) -> Quantity {
        self.inner
            .get(policy)
            .and_then(|tokens| tokens.get(asset))
            .copied()
            .unwrap_or(0)
    }

    /// The policies with any holding, ascending.
    pub fn policies(&self) -> Vec<PolicyId> {
        self.inner.keys().cloned().collect()
    }

    /// The inner name→quantity map under `policy`, empty if the policy is
    /// absent.
    pub fn tokens(&self, policy: &PolicyId) -> Dict<AssetName, Quantity> {
        self.inner.get(policy).cloned().unwrap_or_default()
    }

    // -- combination --------------------------------------------------------

    /// Adjusts a single entry by `delta`, pruning the entry (and, if it
    /// was the last one, the policy) when the result lands on 0.
    ///
    /// A `delta` of 0 returns the value unchanged without touching either
    /// map level — this is the hot path for no-op adjustments.
    pub fn add(&self, policy: &PolicyId, asset: &AssetName, delta: Quantity) -> Self {
        if delta == 0 {
            return self.clone();
        }

        let mut next = self.clone();
        let mut tokens = next.inner.remove(policy).unwrap_or_default();
        match tokens.get(asset).copied().unwrap_or(0) + delta {
            0 => {
                tokens.remove(asset);
            }
            updated => {
                tokens.insert(asset.clone(), updated);
            }
        }
        if !tokens.is_empty() {
            next.inner.insert(policy.clone(), tokens);
        }
        next
    }

    /// Combines two values entry-wise: entries on one side pass through,
    /// entries on both sides are summed, zero sums are pruned, and a
    /// policy whose inner map empties out is pruned with it.
    ///
    /// Commutative and associative, with [`zero`](Value::zero) as the
    /// identity — the same `union_with` primitive drives both map levels,
    /// so the pruning cascade cannot diverge between them.
    pub fn merge(&self, other: &Value) -> Value {
        let inner = self
            .inner
            .clone()
            .union_with(other.inner.clone(), |_, left, right| {
                let tokens = left.union_with(right, |_, a, b| match a + b {
                    0 => None,
                    sum => Some(sum),
                });
                if tokens.is_empty() {
                    None
                } else {
                    Some(tokens)
                }
            });
        Value { inner }
    }

    /// Flips the sign of every quantity.
    ///
    /// Invariant-preserving for free: negating a non-zero quantity cannot
    /// produce zero, so nothing needs pruning.
    pub fn negate(&self) -> Value {
        let inner = self
            .inner
            .iter()
            .map(|(policy, tokens)| {
                let flipped = tokens
                    .iter()
                    .map(|(asset, quantity)| (asset.clone(), -quantity))
                    .collect();
                (policy.clone(), flipped)
            })
            .collect();
        Value { inner }
    }

    /// Drops the native-currency entry, leaving everything else untouched.
    pub fn without_lovelace(&self) -> Value {
        let mut next = self.clone();
        next.inner.remove(&PolicyId::ada());
        next
    }

    /// Keeps only the holdings under the given policies.
    pub fn restricted_to(&self, policies: &[PolicyId]) -> Value {
        let inner = policies
            .iter()
            .filter_map(|policy| {
                self.inner
                    .get(policy)
                    .map(|tokens| (policy.clone(), tokens.clone()))
            })
            .collect();
        Value { inner }
    }

    // -- traversal ----------------------------------------------------------

    /// The canonical flattening: `(policy, asset, quantity)` triples,
    /// ascending by policy then asset name.
    ///
    /// This is the ground truth for equality — two Values are equal
    /// exactly when their flattenings are equal sequences.
    pub fn flatten(&self) -> Vec<(PolicyId, AssetName, Quantity)> {
        self.flatten_with(|policy, asset, quantity| {
            Some((policy.clone(), asset.clone(), quantity))
        })
    }

    /// Flattening with a projection: entries mapped to `None` are dropped,
    /// kept entries preserve their canonical relative order.
    pub fn flatten_with<T, F>(&self, mut project: F) -> Vec<T>
    where
        F: FnMut(&PolicyId, &AssetName, Quantity) -> Option<T>,
    {
        let mut out = Vec::new();
        for (policy, tokens) in self.inner.iter() {
            for (asset, quantity) in tokens.iter() {
                if let Some(item) = project(policy, asset, *quantity) {
                    out.push(item);
                }
            }
        }
        out
    }

    /// A strict left fold over every triple in canonical order, without
    /// materializing the flattening.
    pub fn reduce<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &PolicyId, &AssetName, Quantity) -> A,
    {
        self.inner.fold(initial, |acc, policy, tokens| {
            tokens.fold(acc, |acc, asset, quantity| {
                combine(acc, policy, asset, *quantity)
            })
        })
    }

    /// A read-only view of the underlying two-level map, for collaborators
    /// that need structural access without re-deriving it from
    /// [`flatten`](Value::flatten).
    pub fn to_dict(&self) -> &Dict<PolicyId, Dict<AssetName, Quantity>> {
        &self.inner
    }
}

// ---------------------------------------------------------------------------
// Serde: a Value travels as its canonical flattening
// ---------------------------------------------------------------------------

/// Wire form of one flattened entry.
#[derive(Serialize, Deserialize)]
struct FlatEntry {
    policy: PolicyId,
    asset: AssetName,
    quantity: Quantity,
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.flatten_with(|policy, asset, quantity| {
            Some(FlatEntry {
                policy: policy.clone(),
                asset: asset.clone(),
                quantity,
            })
        });
        entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    /// Rebuilds through [`Value::add`], so a decoded value is canonical no
    /// matter how the input was ordered or padded with zeros.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<FlatEntry>::deserialize(deserializer)?;
        let value = entries.iter().fold(Value::zero(), |acc, entry| {
            acc.add(&entry.policy, &entry.asset, entry.quantity)
        });
        Ok(value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

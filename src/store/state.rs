//! Marker trait for values a store can hold.

/// State held by a [`Store`](crate::store::Store).
///
/// A state value is never mutated in place: reducers take the current value
/// and return a replacement. `Default` supplies the state before any
/// dispatch; `PartialEq` lets observers detect real changes.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

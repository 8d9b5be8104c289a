//! Marker trait for dispatched actions.

/// A description of an intended state change, handed to
/// [`Store::dispatch`](crate::store::Store::dispatch).
///
/// Actions form a closed set of tagged variants, are created by
/// collaborators, and are consumed exactly once by the reducer.
pub trait Action: Send + 'static {}

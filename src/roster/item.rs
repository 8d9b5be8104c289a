//! Records held in the lists.

/// Identifier for a roster item.
///
/// Ids come from [`IdGenerator`](crate::roster::IdGenerator) and are unique
/// across both lists for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// A crew member. `complete` marks the pirate as done for the day and is
/// rendered struck through.
#[derive(Debug, Clone, PartialEq)]
pub struct Pirate {
    pub id: ItemId,
    pub name: String,
    pub complete: bool,
}

/// An armoury entry. Weapons carry no completion flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub id: ItemId,
    pub name: String,
}

//! Corsair: a terminal list manager for a pirate crew and its armoury,
//! built on a minimal observable state container.

pub mod config;
pub mod filter;
pub mod logging;
pub mod roster;
pub mod store;
pub mod ui;

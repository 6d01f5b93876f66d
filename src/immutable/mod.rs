//! Persistent collections. Every update returns a new version that shares
//! unmodified structure with the old one; nothing is mutated in place.

mod list;
mod map;

pub use list::{Iter, List};
pub use map::Map;

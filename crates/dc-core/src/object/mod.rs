//! Object system
//!
//! Object classes and the inventory items carried in a snapshot.

mod item;
mod objclass;

pub use item::Item;
pub use objclass::ObjectClass;

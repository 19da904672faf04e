//! Domain models
//!
//! A favorite's target is a tagged variant, so a favorite that points at
//! neither (or both) of a person and a planet is unrepresentable in process.

pub mod favorite;

pub use favorite::FavoriteTarget;

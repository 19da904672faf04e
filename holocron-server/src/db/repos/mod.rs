//! Repository implementations for database access
//!
//! Each repository borrows the pool and scopes every query explicitly -
//! favorite queries take the owning user id as a parameter rather than
//! reading ambient state.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

pub use favorites::{Favorite, FavoriteRepo};
pub use people::{PeopleRepo, Person};
pub use planets::{Planet, PlanetRepo};
pub use users::{DbError, User, UserRepo};

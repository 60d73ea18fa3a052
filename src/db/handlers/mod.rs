//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut PgConnection`, so callers decide the
//! transaction scope: handlers that write begin a transaction and hand it to
//! the repositories involved, then commit.
//!
//! - [`Users`]: username resolution
//! - [`Recipes`]: detail lookup, listing, ingredient search
//! - [`Ratings`]: rating inserts

pub mod ratings;
pub mod recipes;
pub mod users;

pub use ratings::Ratings;
pub use recipes::Recipes;
pub use users::Users;

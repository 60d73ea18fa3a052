//! Type aliases for entity identifiers.
//!
//! All ids are 32-bit serials assigned by PostgreSQL:
//!
//! - [`UserId`]: user account identifier
//! - [`RecipeId`]: recipe identifier
//! - [`RatingId`]: recipe rating identifier (monotone with insertion order)

pub type UserId = i32;
pub type RecipeId = i32;
pub type RatingId = i32;

//! Flat data-transfer records mapped from Facets result rows.
//!
//! Field names mirror the vendor column names (`rename_all =
//! "SCREAMING_SNAKE_CASE"` on `FromRow`). Contrived-key columns are NOT
//! NULL in the vendor schema and map to plain `i64`; every other column
//! is independently nullable and maps to `Option`.

mod group;
mod member;
mod subscriber;

pub use group::*;
pub use member::*;
pub use subscriber::*;

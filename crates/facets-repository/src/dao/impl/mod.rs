//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module. Implementations
//! are organized by technology; only MySQL exists today.

pub mod mysql;

pub use mysql::{MySqlGroupDaoImpl, MySqlMemberDaoImpl, MySqlSubscriberDaoImpl};

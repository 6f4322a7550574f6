//! DAO traits and implementations.
//!
//! Trait definitions live in this module (`member_dao.rs`,
//! `subscriber_dao.rs`, `group_dao.rs`). Implementations are organized by
//! technology under `impl/` (mysql today).

pub mod group_dao;
pub mod member_dao;
pub mod subscriber_dao;
pub mod r#impl;

pub use group_dao::GroupDao;
pub use member_dao::MemberDao;
pub use subscriber_dao::SubscriberDao;

pub use r#impl::{MySqlGroupDaoImpl, MySqlMemberDaoImpl, MySqlSubscriberDaoImpl};

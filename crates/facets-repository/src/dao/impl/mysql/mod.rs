//! MySQL DAO implementations.
//!
//! Each file carries the fixed SQL for one vendor table family. Table
//! and column names are vendor-owned and preserved verbatim.

mod group_dao_impl;
mod member_dao_impl;
mod subscriber_dao_impl;

pub use group_dao_impl::MySqlGroupDaoImpl;
pub use member_dao_impl::MySqlMemberDaoImpl;
pub use subscriber_dao_impl::MySqlSubscriberDaoImpl;

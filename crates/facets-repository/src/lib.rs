//! # Facets Repository
//!
//! Data access for the third-party Facets eligibility schema.
//!
//! Every operation follows the same routine: acquire a pooled connection,
//! bind positional parameters into a fixed SQL constant, execute, map the
//! result columns into a flat DTO, log timing and row count, and release
//! the connection. The eligibility rules live in the SQL text; nothing in
//! this crate interprets them.
//!
//! Four-layer data access hierarchy:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn EligibilityRepository>   (domain interface)
//! EligibilityRepositoryImpl             (facade, coordinates DAOs)
//!   ↓  Arc<dyn MemberDao / SubscriberDao / GroupDao>
//! MySqlMemberDaoImpl / …                (DAO impls, MySQL / SQLx)
//!   ↓
//! Facets schema
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                      ← DatabasePool + named DatasourceRegistry
//!   query.rs                     ← shared query-and-map routine
//!   dto/                         ← flat row records (FromRow)
//!   dao/
//!     member_dao.rs              ← DAO traits
//!     impl/mysql/                ← MySQL DAO implementations
//!   traits.rs                    ← EligibilityRepository trait
//!   impl/
//!     eligibility_repository_impl.rs
//! ```

pub mod dao;
pub mod dto;
pub mod pool;
pub mod query;
pub mod traits;
pub mod r#impl;

pub use dao::{GroupDao, MemberDao, SubscriberDao};
pub use dao::{MySqlGroupDaoImpl, MySqlMemberDaoImpl, MySqlSubscriberDaoImpl};
pub use dto::*;
pub use pool::*;
pub use r#impl::EligibilityRepositoryImpl;
pub use traits::EligibilityRepository;

//! Repository implementations.

mod eligibility_repository_impl;

pub use eligibility_repository_impl::EligibilityRepositoryImpl;

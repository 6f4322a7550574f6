//! `SubscriberDao` trait for subscriber and contract data access.

use crate::dto::{ContractSpanDto, SubscriberAddressDto, SubscriberDto};
use facets_core::{FacetsResult, GroupCk, Interface, SubscriberCk};
use async_trait::async_trait;

/// Low-level subscriber data access object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriberDao: Interface + Send + Sync {
    /// Finds a subscriber by contrived key.
    async fn find_by_subscriber_ck(
        &self,
        sbsb_ck: SubscriberCk,
    ) -> FacetsResult<Option<SubscriberDto>>;

    /// Finds a subscriber by subscriber ID.
    ///
    /// Subscriber IDs are unique per group, not globally; across groups
    /// the first match is taken and logged.
    async fn find_by_subscriber_id(&self, sbsb_id: &str) -> FacetsResult<Option<SubscriberDto>>;

    /// Finds a subscriber by subscriber ID within one group.
    async fn find_by_subscriber_id_in_group(
        &self,
        sbsb_id: &str,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Option<SubscriberDto>>;

    /// Finds subscribers in a group whose last name starts with a prefix.
    async fn find_by_last_name_prefix(
        &self,
        prefix: &str,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Vec<SubscriberDto>>;

    /// Finds every subscriber in a group.
    async fn find_for_group(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<SubscriberDto>>;

    /// Checks whether a subscriber ID exists anywhere.
    async fn exists_by_subscriber_id(&self, sbsb_id: &str) -> FacetsResult<bool>;

    /// Finds every contract-eligibility entry for a subscriber.
    async fn find_contract_spans(
        &self,
        sbsb_ck: SubscriberCk,
    ) -> FacetsResult<Vec<ContractSpanDto>>;

    /// Finds a subscriber address by address type (`H`, `M`, `W`).
    async fn find_address(
        &self,
        sbsb_ck: SubscriberCk,
        sbad_type: &str,
    ) -> FacetsResult<Option<SubscriberAddressDto>>;
}

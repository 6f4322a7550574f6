//! Repository trait definitions.

use crate::dto::{
    ContractSpanDto, DualEligibilityDto, EligibilitySpanDto, GroupDto, MemberDto, PlanOfferingDto,
    ProductDto, SubgroupDto, SubscriberAddressDto, SubscriberDto,
};
use chrono::NaiveDate;
use facets_core::{FacetsResult, GroupCk, Interface, MemberCk, SubscriberCk};
use async_trait::async_trait;

/// Eligibility repository trait.
///
/// The domain-facing surface over the member, subscriber, and group DAOs.
/// Every operation maps one-to-one onto a DAO query; the repository layer
/// exists so services depend on one interface and so alternate DAO
/// backings (read replica, remote) can be swapped in underneath.
#[async_trait]
pub trait EligibilityRepository: Interface + Send + Sync {
    // ---- member ----

    /// Finds a member by contrived key.
    async fn find_member(&self, meme_ck: MemberCk) -> FacetsResult<Option<MemberDto>>;

    /// Finds a member by subscriber ID and suffix.
    async fn find_member_by_subscriber_and_suffix(
        &self,
        sbsb_id: &str,
        meme_sfx: i16,
    ) -> FacetsResult<Option<MemberDto>>;

    /// Finds every member on a subscriber's contract.
    async fn find_members_for_subscriber(
        &self,
        sbsb_ck: SubscriberCk,
    ) -> FacetsResult<Vec<MemberDto>>;

    /// Finds members by Medicaid number.
    async fn find_members_by_medicaid_no(&self, medcd_no: &str) -> FacetsResult<Vec<MemberDto>>;

    /// Finds a member by Medicare HICN.
    async fn find_member_by_hicn(&self, hicn: &str) -> FacetsResult<Option<MemberDto>>;

    /// Finds every eligibility span for a member.
    async fn find_eligibility_spans(
        &self,
        meme_ck: MemberCk,
    ) -> FacetsResult<Vec<EligibilitySpanDto>>;

    /// Finds the eligibility span covering a date.
    async fn find_eligibility_as_of(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Option<EligibilitySpanDto>>;

    /// Finds spans still active on the given date.
    async fn find_active_eligibility(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Vec<EligibilitySpanDto>>;

    /// Finds every dual-eligibility linkage for a member.
    async fn find_dual_eligibility(
        &self,
        meme_ck: MemberCk,
    ) -> FacetsResult<Vec<DualEligibilityDto>>;

    /// Finds the dual-eligibility linkage in force on a date.
    async fn find_dual_linkage_as_of(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Option<DualEligibilityDto>>;

    /// Counts members enrolled under a group.
    async fn count_members_in_group(&self, grgr_ck: GroupCk) -> FacetsResult<u64>;

    // ---- subscriber ----

    /// Finds a subscriber by contrived key.
    async fn find_subscriber(&self, sbsb_ck: SubscriberCk) -> FacetsResult<Option<SubscriberDto>>;

    /// Finds a subscriber by subscriber ID.
    async fn find_subscriber_by_id(&self, sbsb_id: &str) -> FacetsResult<Option<SubscriberDto>>;

    /// Finds a subscriber by subscriber ID within one group.
    async fn find_subscriber_by_id_in_group(
        &self,
        sbsb_id: &str,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Option<SubscriberDto>>;

    /// Finds subscribers in a group by last-name prefix.
    async fn find_subscribers_by_last_name_prefix(
        &self,
        prefix: &str,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Vec<SubscriberDto>>;

    /// Finds every subscriber in a group.
    async fn find_subscribers_for_group(&self, grgr_ck: GroupCk)
        -> FacetsResult<Vec<SubscriberDto>>;

    /// Checks whether a subscriber ID exists.
    async fn subscriber_id_exists(&self, sbsb_id: &str) -> FacetsResult<bool>;

    /// Finds every contract-eligibility entry for a subscriber.
    async fn find_contract_spans(
        &self,
        sbsb_ck: SubscriberCk,
    ) -> FacetsResult<Vec<ContractSpanDto>>;

    /// Finds a subscriber address by address type.
    async fn find_subscriber_address(
        &self,
        sbsb_ck: SubscriberCk,
        sbad_type: &str,
    ) -> FacetsResult<Option<SubscriberAddressDto>>;

    // ---- group hierarchy ----

    /// Finds a group by contrived key.
    async fn find_group(&self, grgr_ck: GroupCk) -> FacetsResult<Option<GroupDto>>;

    /// Finds a group by group ID.
    async fn find_group_by_id(&self, grgr_id: &str) -> FacetsResult<Option<GroupDto>>;

    /// Finds every subgroup of a group.
    async fn find_subgroups(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<SubgroupDto>>;

    /// Finds a subgroup by its ID within a group.
    async fn find_subgroup_by_id(
        &self,
        grgr_ck: GroupCk,
        sgsg_id: &str,
    ) -> FacetsResult<Option<SubgroupDto>>;

    /// Finds every class/plan offering for a group.
    async fn find_plan_offerings(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<PlanOfferingDto>>;

    /// Finds the class/plan offerings in force on a date.
    async fn find_plan_offerings_as_of(
        &self,
        grgr_ck: GroupCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Vec<PlanOfferingDto>>;

    /// Finds a product by product ID.
    async fn find_product(&self, pdpd_id: &str) -> FacetsResult<Option<ProductDto>>;

    /// Finds every product offered to a group.
    async fn find_products_for_group(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<ProductDto>>;

    /// Counts subgroups under a group.
    async fn count_subgroups(&self, grgr_ck: GroupCk) -> FacetsResult<u64>;
}

//! `MemberDao` trait for member and member-eligibility data access.
//!
//! Each method corresponds to one fixed query against the member tables
//! (`CMC_MEME_MEMBER`, `CMC_MEPE_PRCS_ELIG`, `CMC_MEME_XREF`).

use crate::dto::{DualEligibilityDto, EligibilitySpanDto, MemberDto};
use chrono::NaiveDate;
use facets_core::{FacetsResult, GroupCk, Interface, MemberCk, SubscriberCk};
use async_trait::async_trait;

/// Low-level member data access object.
///
/// Each implementation targets a single datasource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberDao: Interface + Send + Sync {
    /// Finds a member by contrived key.
    async fn find_by_member_ck(&self, meme_ck: MemberCk) -> FacetsResult<Option<MemberDto>>;

    /// Finds a member by subscriber ID and member suffix.
    async fn find_by_subscriber_and_suffix(
        &self,
        sbsb_id: &str,
        meme_sfx: i16,
    ) -> FacetsResult<Option<MemberDto>>;

    /// Finds every member on a subscriber's contract.
    async fn find_for_subscriber(&self, sbsb_ck: SubscriberCk) -> FacetsResult<Vec<MemberDto>>;

    /// Finds members by Medicaid number.
    ///
    /// Medicaid numbers are recycled across members in the vendor data,
    /// so this is a list accessor.
    async fn find_by_medicaid_no(&self, medcd_no: &str) -> FacetsResult<Vec<MemberDto>>;

    /// Finds a member by Medicare HICN.
    async fn find_by_hicn(&self, hicn: &str) -> FacetsResult<Option<MemberDto>>;

    /// Finds every processed-eligibility span for a member.
    async fn find_eligibility_spans(
        &self,
        meme_ck: MemberCk,
    ) -> FacetsResult<Vec<EligibilitySpanDto>>;

    /// Finds the eligibility span covering a date.
    ///
    /// Overlapping spans are possible in vendor data; the most recently
    /// created span wins and the surplus is logged.
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
    async fn count_in_group(&self, grgr_ck: GroupCk) -> FacetsResult<u64>;
}

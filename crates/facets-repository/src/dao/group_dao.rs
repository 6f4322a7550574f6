//! `GroupDao` trait for group, subgroup, and plan hierarchy data access.

use crate::dto::{GroupDto, PlanOfferingDto, ProductDto, SubgroupDto};
use chrono::NaiveDate;
use facets_core::{FacetsResult, GroupCk, Interface};
use async_trait::async_trait;

/// Low-level group hierarchy data access object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupDao: Interface + Send + Sync {
    /// Finds a group by contrived key.
    async fn find_by_group_ck(&self, grgr_ck: GroupCk) -> FacetsResult<Option<GroupDto>>;

    /// Finds a group by group ID.
    async fn find_by_group_id(&self, grgr_id: &str) -> FacetsResult<Option<GroupDto>>;

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

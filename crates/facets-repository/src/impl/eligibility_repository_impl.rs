//! `EligibilityRepositoryImpl` repository layer implementation.
//!
//! Implements [`EligibilityRepository`] by delegating to the member,
//! subscriber, and group DAOs. In the 4-layer hierarchy this sits between
//! Service and DAO:
//!
//! ```text
//! Service
//!   ↓ Arc<dyn EligibilityRepository>
//! EligibilityRepositoryImpl      ← coordinates DAOs
//!   ↓ Arc<dyn MemberDao / SubscriberDao / GroupDao>
//! MySqlMemberDaoImpl / …
//!   ↓
//! Facets schema
//! ```
//!
//! [`EligibilityRepository`]: crate::traits::EligibilityRepository

use crate::dao::{GroupDao, MemberDao, SubscriberDao};
use crate::dto::{
    ContractSpanDto, DualEligibilityDto, EligibilitySpanDto, GroupDto, MemberDto, PlanOfferingDto,
    ProductDto, SubgroupDto, SubscriberAddressDto, SubscriberDto,
};
use crate::traits::EligibilityRepository;
use chrono::NaiveDate;
use facets_core::{FacetsResult, GroupCk, MemberCk, SubscriberCk};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that orchestrates DAO access.
///
/// To split reads across datasources (e.g. primary + replica), inject
/// DAOs built on different pools from the [`DatasourceRegistry`].
///
/// [`DatasourceRegistry`]: crate::pool::DatasourceRegistry
#[derive(Component)]
#[shaku(interface = EligibilityRepository)]
pub struct EligibilityRepositoryImpl {
    #[shaku(inject)]
    member_dao: Arc<dyn MemberDao>,
    #[shaku(inject)]
    subscriber_dao: Arc<dyn SubscriberDao>,
    #[shaku(inject)]
    group_dao: Arc<dyn GroupDao>,
}

impl EligibilityRepositoryImpl {
    /// Creates a new repository over the given DAOs.
    #[must_use]
    pub fn new(
        member_dao: Arc<dyn MemberDao>,
        subscriber_dao: Arc<dyn SubscriberDao>,
        group_dao: Arc<dyn GroupDao>,
    ) -> Self {
        Self {
            member_dao,
            subscriber_dao,
            group_dao,
        }
    }
}

#[async_trait]
impl EligibilityRepository for EligibilityRepositoryImpl {
    async fn find_member(&self, meme_ck: MemberCk) -> FacetsResult<Option<MemberDto>> {
        debug!("Repository: find_member {}", meme_ck);
        self.member_dao.find_by_member_ck(meme_ck).await
    }

    async fn find_member_by_subscriber_and_suffix(
        &self,
        sbsb_id: &str,
        meme_sfx: i16,
    ) -> FacetsResult<Option<MemberDto>> {
        debug!("Repository: find_member_by_subscriber_and_suffix {}", sbsb_id);
        self.member_dao
            .find_by_subscriber_and_suffix(sbsb_id, meme_sfx)
            .await
    }

    async fn find_members_for_subscriber(
        &self,
        sbsb_ck: SubscriberCk,
    ) -> FacetsResult<Vec<MemberDto>> {
        debug!("Repository: find_members_for_subscriber {}", sbsb_ck);
        self.member_dao.find_for_subscriber(sbsb_ck).await
    }

    async fn find_members_by_medicaid_no(&self, medcd_no: &str) -> FacetsResult<Vec<MemberDto>> {
        self.member_dao.find_by_medicaid_no(medcd_no).await
    }

    async fn find_member_by_hicn(&self, hicn: &str) -> FacetsResult<Option<MemberDto>> {
        self.member_dao.find_by_hicn(hicn).await
    }

    async fn find_eligibility_spans(
        &self,
        meme_ck: MemberCk,
    ) -> FacetsResult<Vec<EligibilitySpanDto>> {
        debug!("Repository: find_eligibility_spans {}", meme_ck);
        self.member_dao.find_eligibility_spans(meme_ck).await
    }

    async fn find_eligibility_as_of(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Option<EligibilitySpanDto>> {
        debug!("Repository: find_eligibility_as_of {} {}", meme_ck, as_of);
        self.member_dao.find_eligibility_as_of(meme_ck, as_of).await
    }

    async fn find_active_eligibility(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Vec<EligibilitySpanDto>> {
        self.member_dao.find_active_eligibility(meme_ck, as_of).await
    }

    async fn find_dual_eligibility(
        &self,
        meme_ck: MemberCk,
    ) -> FacetsResult<Vec<DualEligibilityDto>> {
        debug!("Repository: find_dual_eligibility {}", meme_ck);
        self.member_dao.find_dual_eligibility(meme_ck).await
    }

    async fn find_dual_linkage_as_of(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Option<DualEligibilityDto>> {
        self.member_dao.find_dual_linkage_as_of(meme_ck, as_of).await
    }

    async fn count_members_in_group(&self, grgr_ck: GroupCk) -> FacetsResult<u64> {
        self.member_dao.count_in_group(grgr_ck).await
    }

    async fn find_subscriber(&self, sbsb_ck: SubscriberCk) -> FacetsResult<Option<SubscriberDto>> {
        debug!("Repository: find_subscriber {}", sbsb_ck);
        self.subscriber_dao.find_by_subscriber_ck(sbsb_ck).await
    }

    async fn find_subscriber_by_id(&self, sbsb_id: &str) -> FacetsResult<Option<SubscriberDto>> {
        debug!("Repository: find_subscriber_by_id {}", sbsb_id);
        self.subscriber_dao.find_by_subscriber_id(sbsb_id).await
    }

    async fn find_subscriber_by_id_in_group(
        &self,
        sbsb_id: &str,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Option<SubscriberDto>> {
        self.subscriber_dao
            .find_by_subscriber_id_in_group(sbsb_id, grgr_ck)
            .await
    }

    async fn find_subscribers_by_last_name_prefix(
        &self,
        prefix: &str,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Vec<SubscriberDto>> {
        self.subscriber_dao
            .find_by_last_name_prefix(prefix, grgr_ck)
            .await
    }

    async fn find_subscribers_for_group(
        &self,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Vec<SubscriberDto>> {
        debug!("Repository: find_subscribers_for_group {}", grgr_ck);
        self.subscriber_dao.find_for_group(grgr_ck).await
    }

    async fn subscriber_id_exists(&self, sbsb_id: &str) -> FacetsResult<bool> {
        self.subscriber_dao.exists_by_subscriber_id(sbsb_id).await
    }

    async fn find_contract_spans(
        &self,
        sbsb_ck: SubscriberCk,
    ) -> FacetsResult<Vec<ContractSpanDto>> {
        self.subscriber_dao.find_contract_spans(sbsb_ck).await
    }

    async fn find_subscriber_address(
        &self,
        sbsb_ck: SubscriberCk,
        sbad_type: &str,
    ) -> FacetsResult<Option<SubscriberAddressDto>> {
        self.subscriber_dao.find_address(sbsb_ck, sbad_type).await
    }

    async fn find_group(&self, grgr_ck: GroupCk) -> FacetsResult<Option<GroupDto>> {
        debug!("Repository: find_group {}", grgr_ck);
        self.group_dao.find_by_group_ck(grgr_ck).await
    }

    async fn find_group_by_id(&self, grgr_id: &str) -> FacetsResult<Option<GroupDto>> {
        self.group_dao.find_by_group_id(grgr_id).await
    }

    async fn find_subgroups(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<SubgroupDto>> {
        self.group_dao.find_subgroups(grgr_ck).await
    }

    async fn find_subgroup_by_id(
        &self,
        grgr_ck: GroupCk,
        sgsg_id: &str,
    ) -> FacetsResult<Option<SubgroupDto>> {
        self.group_dao.find_subgroup_by_id(grgr_ck, sgsg_id).await
    }

    async fn find_plan_offerings(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<PlanOfferingDto>> {
        debug!("Repository: find_plan_offerings {}", grgr_ck);
        self.group_dao.find_plan_offerings(grgr_ck).await
    }

    async fn find_plan_offerings_as_of(
        &self,
        grgr_ck: GroupCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Vec<PlanOfferingDto>> {
        self.group_dao.find_plan_offerings_as_of(grgr_ck, as_of).await
    }

    async fn find_product(&self, pdpd_id: &str) -> FacetsResult<Option<ProductDto>> {
        self.group_dao.find_product(pdpd_id).await
    }

    async fn find_products_for_group(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<ProductDto>> {
        self.group_dao.find_products_for_group(grgr_ck).await
    }

    async fn count_subgroups(&self, grgr_ck: GroupCk) -> FacetsResult<u64> {
        self.group_dao.count_subgroups(grgr_ck).await
    }
}

impl std::fmt::Debug for EligibilityRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EligibilityRepositoryImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::group_dao::MockGroupDao;
    use crate::dao::member_dao::MockMemberDao;
    use crate::dao::subscriber_dao::MockSubscriberDao;
    use facets_core::FacetsError;
    use mockall::predicate::eq;

    fn repo(
        member_dao: MockMemberDao,
        subscriber_dao: MockSubscriberDao,
        group_dao: MockGroupDao,
    ) -> EligibilityRepositoryImpl {
        EligibilityRepositoryImpl::new(
            Arc::new(member_dao),
            Arc::new(subscriber_dao),
            Arc::new(group_dao),
        )
    }

    #[tokio::test]
    async fn test_find_member_delegates_to_dao() {
        let mut member_dao = MockMemberDao::new();
        member_dao
            .expect_find_by_member_ck()
            .with(eq(MemberCk::from_raw(1_000_234)))
            .once()
            .returning(|meme_ck| {
                Ok(Some(MemberDto {
                    meme_ck: meme_ck.into_inner(),
                    sbsb_ck: 500_100,
                    grgr_ck: 42,
                    sbsb_id: Some("A12345678".to_string()),
                    ..MemberDto::default()
                }))
            });

        let repo = repo(member_dao, MockSubscriberDao::new(), MockGroupDao::new());
        let found = repo
            .find_member(MemberCk::from_raw(1_000_234))
            .await
            .expect("query")
            .expect("member");

        assert_eq!(found.meme_ck, 1_000_234);
        assert_eq!(found.sbsb_id.as_deref(), Some("A12345678"));
    }

    #[tokio::test]
    async fn test_find_eligibility_as_of_delegates() {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let mut member_dao = MockMemberDao::new();
        member_dao
            .expect_find_eligibility_as_of()
            .with(eq(MemberCk::from_raw(7)), eq(as_of))
            .once()
            .returning(|_, _| Ok(None));

        let repo = repo(member_dao, MockSubscriberDao::new(), MockGroupDao::new());
        let span = repo
            .find_eligibility_as_of(MemberCk::from_raw(7), as_of)
            .await
            .expect("query");

        assert!(span.is_none());
    }

    #[tokio::test]
    async fn test_subscriber_exists_delegates() {
        let mut subscriber_dao = MockSubscriberDao::new();
        subscriber_dao
            .expect_exists_by_subscriber_id()
            .withf(|sbsb_id| sbsb_id == "A12345678")
            .once()
            .returning(|_| Ok(true));

        let repo = repo(MockMemberDao::new(), subscriber_dao, MockGroupDao::new());
        assert!(repo.subscriber_id_exists("A12345678").await.expect("query"));
    }

    #[tokio::test]
    async fn test_group_count_delegates() {
        let mut group_dao = MockGroupDao::new();
        group_dao
            .expect_count_subgroups()
            .with(eq(GroupCk::from_raw(42)))
            .once()
            .returning(|_| Ok(3));

        let repo = repo(MockMemberDao::new(), MockSubscriberDao::new(), group_dao);
        assert_eq!(
            repo.count_subgroups(GroupCk::from_raw(42)).await.expect("query"),
            3
        );
    }

    #[tokio::test]
    async fn test_dao_errors_propagate_unchanged() {
        let mut member_dao = MockMemberDao::new();
        member_dao.expect_find_by_hicn().once().returning(|_| {
            Err(FacetsError::read(
                "SELECT ... FROM CMC_MEME_MEMBER",
                sqlx::Error::RowNotFound,
            ))
        });

        let repo = repo(member_dao, MockSubscriberDao::new(), MockGroupDao::new());
        let err = repo.find_member_by_hicn("123456789A").await.unwrap_err();

        assert_eq!(err.error_code(), "READ_ERROR");
        assert!(err.to_string().contains("CMC_MEME_MEMBER"));
    }
}

//! MySQL group hierarchy DAO implementation.

use crate::dao::GroupDao;
use crate::dto::{GroupDto, PlanOfferingDto, ProductDto, SubgroupDto};
use crate::pool::DatabasePoolInterface;
use crate::query;
use chrono::NaiveDate;
use facets_core::{FacetsResult, GroupCk};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

const FIND_BY_GROUP_CK: &str = r"
SELECT GRGR_CK, GRGR_ID, GRGR_NAME, GRGR_STS, GRGR_ORIG_EFF_DT, GRGR_TERM_DT
FROM CMC_GRGR_GROUP
WHERE GRGR_CK = ?
";

const FIND_BY_GROUP_ID: &str = r"
SELECT GRGR_CK, GRGR_ID, GRGR_NAME, GRGR_STS, GRGR_ORIG_EFF_DT, GRGR_TERM_DT
FROM CMC_GRGR_GROUP
WHERE GRGR_ID = ?
";

const FIND_SUBGROUPS: &str = r"
SELECT SGSG_CK, GRGR_CK, SGSG_ID, SGSG_NAME, SGSG_EFF_DT, SGSG_TERM_DT
FROM CMC_SGSG_SUB_GROUP
WHERE GRGR_CK = ?
ORDER BY SGSG_ID
";

const FIND_SUBGROUP_BY_ID: &str = r"
SELECT SGSG_CK, GRGR_CK, SGSG_ID, SGSG_NAME, SGSG_EFF_DT, SGSG_TERM_DT
FROM CMC_SGSG_SUB_GROUP
WHERE GRGR_CK = ? AND SGSG_ID = ?
";

const FIND_PLAN_OFFERINGS: &str = r"
SELECT CSPI.GRGR_CK, CSPI.CSCS_ID, CSPI.CSPI_ID, CSPI.CSPD_CAT,
       CSPI.PDPD_ID, PDPD.PDPD_DESC, CSPI.CSPI_EFF_DT, CSPI.CSPI_TERM_DT
FROM CMC_CSPI_CS_PLAN CSPI
LEFT JOIN CMC_PDPD_PRODUCT PDPD ON PDPD.PDPD_ID = CSPI.PDPD_ID
WHERE CSPI.GRGR_CK = ?
ORDER BY CSPI.CSCS_ID, CSPI.CSPI_ID
";

const FIND_PLAN_OFFERINGS_AS_OF: &str = r"
SELECT CSPI.GRGR_CK, CSPI.CSCS_ID, CSPI.CSPI_ID, CSPI.CSPD_CAT,
       CSPI.PDPD_ID, PDPD.PDPD_DESC, CSPI.CSPI_EFF_DT, CSPI.CSPI_TERM_DT
FROM CMC_CSPI_CS_PLAN CSPI
LEFT JOIN CMC_PDPD_PRODUCT PDPD ON PDPD.PDPD_ID = CSPI.PDPD_ID
WHERE CSPI.GRGR_CK = ?
  AND CSPI.CSPI_EFF_DT <= ?
  AND CSPI.CSPI_TERM_DT >= ?
ORDER BY CSPI.CSCS_ID, CSPI.CSPI_ID
";

const FIND_PRODUCT: &str = r"
SELECT PDPD_ID, PDPD_DESC, PDPD_TYPE, LOBD_ID, PDPD_EFF_DT, PDPD_TERM_DT
FROM CMC_PDPD_PRODUCT
WHERE PDPD_ID = ?
";

const FIND_PRODUCTS_FOR_GROUP: &str = r"
SELECT DISTINCT PDPD.PDPD_ID, PDPD.PDPD_DESC, PDPD.PDPD_TYPE, PDPD.LOBD_ID,
       PDPD.PDPD_EFF_DT, PDPD.PDPD_TERM_DT
FROM CMC_PDPD_PRODUCT PDPD
JOIN CMC_CSPI_CS_PLAN CSPI ON CSPI.PDPD_ID = PDPD.PDPD_ID
WHERE CSPI.GRGR_CK = ?
ORDER BY PDPD.PDPD_ID
";

const COUNT_SUBGROUPS: &str = r"
SELECT COUNT(*) FROM CMC_SGSG_SUB_GROUP WHERE GRGR_CK = ?
";

/// MySQL group hierarchy DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = GroupDao)]
pub struct MySqlGroupDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlGroupDaoImpl {
    /// Creates a new MySQL group DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupDao for MySqlGroupDaoImpl {
    async fn find_by_group_ck(&self, grgr_ck: GroupCk) -> FacetsResult<Option<GroupDto>> {
        debug!(%grgr_ck, "find_by_group_ck");

        let query = sqlx::query_as::<_, GroupDto>(FIND_BY_GROUP_CK).bind(grgr_ck.into_inner());
        query::fetch_first(query, self.pool.inner(), FIND_BY_GROUP_CK).await
    }

    async fn find_by_group_id(&self, grgr_id: &str) -> FacetsResult<Option<GroupDto>> {
        debug!(grgr_id, "find_by_group_id");

        let query = sqlx::query_as::<_, GroupDto>(FIND_BY_GROUP_ID).bind(grgr_id);
        query::fetch_first(query, self.pool.inner(), FIND_BY_GROUP_ID).await
    }

    async fn find_subgroups(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<SubgroupDto>> {
        debug!(%grgr_ck, "find_subgroups");

        let query = sqlx::query_as::<_, SubgroupDto>(FIND_SUBGROUPS).bind(grgr_ck.into_inner());
        query::fetch_rows(query, self.pool.inner(), FIND_SUBGROUPS).await
    }

    async fn find_subgroup_by_id(
        &self,
        grgr_ck: GroupCk,
        sgsg_id: &str,
    ) -> FacetsResult<Option<SubgroupDto>> {
        debug!(%grgr_ck, sgsg_id, "find_subgroup_by_id");

        let query = sqlx::query_as::<_, SubgroupDto>(FIND_SUBGROUP_BY_ID)
            .bind(grgr_ck.into_inner())
            .bind(sgsg_id);
        query::fetch_first(query, self.pool.inner(), FIND_SUBGROUP_BY_ID).await
    }

    async fn find_plan_offerings(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<PlanOfferingDto>> {
        debug!(%grgr_ck, "find_plan_offerings");

        let query =
            sqlx::query_as::<_, PlanOfferingDto>(FIND_PLAN_OFFERINGS).bind(grgr_ck.into_inner());
        query::fetch_rows(query, self.pool.inner(), FIND_PLAN_OFFERINGS).await
    }

    async fn find_plan_offerings_as_of(
        &self,
        grgr_ck: GroupCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Vec<PlanOfferingDto>> {
        debug!(%grgr_ck, %as_of, "find_plan_offerings_as_of");

        let query = sqlx::query_as::<_, PlanOfferingDto>(FIND_PLAN_OFFERINGS_AS_OF)
            .bind(grgr_ck.into_inner())
            .bind(as_of)
            .bind(as_of);
        query::fetch_rows(query, self.pool.inner(), FIND_PLAN_OFFERINGS_AS_OF).await
    }

    async fn find_product(&self, pdpd_id: &str) -> FacetsResult<Option<ProductDto>> {
        debug!(pdpd_id, "find_product");

        let query = sqlx::query_as::<_, ProductDto>(FIND_PRODUCT).bind(pdpd_id);
        query::fetch_first(query, self.pool.inner(), FIND_PRODUCT).await
    }

    async fn find_products_for_group(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<ProductDto>> {
        debug!(%grgr_ck, "find_products_for_group");

        let query =
            sqlx::query_as::<_, ProductDto>(FIND_PRODUCTS_FOR_GROUP).bind(grgr_ck.into_inner());
        query::fetch_rows(query, self.pool.inner(), FIND_PRODUCTS_FOR_GROUP).await
    }

    async fn count_subgroups(&self, grgr_ck: GroupCk) -> FacetsResult<u64> {
        let query = sqlx::query_scalar::<_, i64>(COUNT_SUBGROUPS).bind(grgr_ck.into_inner());
        let count = query::fetch_scalar(query, self.pool.inner(), COUNT_SUBGROUPS).await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlGroupDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlGroupDaoImpl").finish_non_exhaustive()
    }
}

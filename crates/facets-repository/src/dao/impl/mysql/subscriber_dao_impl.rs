//! MySQL subscriber DAO implementation.

use crate::dao::SubscriberDao;
use crate::dto::{ContractSpanDto, SubscriberAddressDto, SubscriberDto};
use crate::pool::DatabasePoolInterface;
use crate::query;
use facets_core::{FacetsResult, GroupCk, SubscriberCk};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

const FIND_BY_SUBSCRIBER_CK: &str = r"
SELECT SBSB_CK, GRGR_CK, SBSB_ID, SBSB_LAST_NAME, SBSB_FIRST_NAME,
       SBSB_MID_INIT, SBSB_ELIG_IND
FROM CMC_SBSB_SUBSC
WHERE SBSB_CK = ?
";

const FIND_BY_SUBSCRIBER_ID: &str = r"
SELECT SBSB_CK, GRGR_CK, SBSB_ID, SBSB_LAST_NAME, SBSB_FIRST_NAME,
       SBSB_MID_INIT, SBSB_ELIG_IND
FROM CMC_SBSB_SUBSC
WHERE SBSB_ID = ?
ORDER BY GRGR_CK
";

const FIND_BY_SUBSCRIBER_ID_IN_GROUP: &str = r"
SELECT SBSB_CK, GRGR_CK, SBSB_ID, SBSB_LAST_NAME, SBSB_FIRST_NAME,
       SBSB_MID_INIT, SBSB_ELIG_IND
FROM CMC_SBSB_SUBSC
WHERE SBSB_ID = ? AND GRGR_CK = ?
";

const FIND_BY_LAST_NAME_PREFIX: &str = r"
SELECT SBSB_CK, GRGR_CK, SBSB_ID, SBSB_LAST_NAME, SBSB_FIRST_NAME,
       SBSB_MID_INIT, SBSB_ELIG_IND
FROM CMC_SBSB_SUBSC
WHERE GRGR_CK = ? AND SBSB_LAST_NAME LIKE CONCAT(?, '%')
ORDER BY SBSB_LAST_NAME, SBSB_FIRST_NAME
";

const FIND_FOR_GROUP: &str = r"
SELECT SBSB_CK, GRGR_CK, SBSB_ID, SBSB_LAST_NAME, SBSB_FIRST_NAME,
       SBSB_MID_INIT, SBSB_ELIG_IND
FROM CMC_SBSB_SUBSC
WHERE GRGR_CK = ?
ORDER BY SBSB_ID
";

const EXISTS_BY_SUBSCRIBER_ID: &str = r"
SELECT COUNT(*) FROM CMC_SBSB_SUBSC WHERE SBSB_ID = ?
";

const FIND_CONTRACT_SPANS: &str = r"
SELECT SBSB_CK, GRGR_CK, SGSG_CK, SBEL_ELIG_TYPE, SBEL_EFF_DT, SBEL_TERM_DT
FROM CMC_SBEL_ELIG_ENT
WHERE SBSB_CK = ?
ORDER BY SBEL_EFF_DT
";

const FIND_ADDRESS: &str = r"
SELECT SBSB_CK, SBAD_TYPE, SBAD_ADDR1, SBAD_ADDR2, SBAD_CITY, SBAD_STATE,
       SBAD_ZIP, SBAD_COUNTY, SBAD_PHONE
FROM CMC_SBAD_ADDR
WHERE SBSB_CK = ? AND SBAD_TYPE = ?
";

/// MySQL subscriber DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = SubscriberDao)]
pub struct MySqlSubscriberDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlSubscriberDaoImpl {
    /// Creates a new MySQL subscriber DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberDao for MySqlSubscriberDaoImpl {
    async fn find_by_subscriber_ck(
        &self,
        sbsb_ck: SubscriberCk,
    ) -> FacetsResult<Option<SubscriberDto>> {
        debug!(%sbsb_ck, "find_by_subscriber_ck");

        let query =
            sqlx::query_as::<_, SubscriberDto>(FIND_BY_SUBSCRIBER_CK).bind(sbsb_ck.into_inner());
        query::fetch_first(query, self.pool.inner(), FIND_BY_SUBSCRIBER_CK).await
    }

    async fn find_by_subscriber_id(&self, sbsb_id: &str) -> FacetsResult<Option<SubscriberDto>> {
        debug!(sbsb_id, "find_by_subscriber_id");

        let query = sqlx::query_as::<_, SubscriberDto>(FIND_BY_SUBSCRIBER_ID).bind(sbsb_id);
        query::fetch_first(query, self.pool.inner(), FIND_BY_SUBSCRIBER_ID).await
    }

    async fn find_by_subscriber_id_in_group(
        &self,
        sbsb_id: &str,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Option<SubscriberDto>> {
        debug!(sbsb_id, %grgr_ck, "find_by_subscriber_id_in_group");

        let query = sqlx::query_as::<_, SubscriberDto>(FIND_BY_SUBSCRIBER_ID_IN_GROUP)
            .bind(sbsb_id)
            .bind(grgr_ck.into_inner());
        query::fetch_first(query, self.pool.inner(), FIND_BY_SUBSCRIBER_ID_IN_GROUP).await
    }

    async fn find_by_last_name_prefix(
        &self,
        prefix: &str,
        grgr_ck: GroupCk,
    ) -> FacetsResult<Vec<SubscriberDto>> {
        debug!(prefix, %grgr_ck, "find_by_last_name_prefix");

        let query = sqlx::query_as::<_, SubscriberDto>(FIND_BY_LAST_NAME_PREFIX)
            .bind(grgr_ck.into_inner())
            .bind(prefix);
        query::fetch_rows(query, self.pool.inner(), FIND_BY_LAST_NAME_PREFIX).await
    }

    async fn find_for_group(&self, grgr_ck: GroupCk) -> FacetsResult<Vec<SubscriberDto>> {
        debug!(%grgr_ck, "find_for_group");

        let query = sqlx::query_as::<_, SubscriberDto>(FIND_FOR_GROUP).bind(grgr_ck.into_inner());
        query::fetch_rows(query, self.pool.inner(), FIND_FOR_GROUP).await
    }

    async fn exists_by_subscriber_id(&self, sbsb_id: &str) -> FacetsResult<bool> {
        let query = sqlx::query_scalar::<_, i64>(EXISTS_BY_SUBSCRIBER_ID).bind(sbsb_id);
        let count = query::fetch_scalar(query, self.pool.inner(), EXISTS_BY_SUBSCRIBER_ID).await?;

        Ok(count > 0)
    }

    async fn find_contract_spans(
        &self,
        sbsb_ck: SubscriberCk,
    ) -> FacetsResult<Vec<ContractSpanDto>> {
        debug!(%sbsb_ck, "find_contract_spans");

        let query =
            sqlx::query_as::<_, ContractSpanDto>(FIND_CONTRACT_SPANS).bind(sbsb_ck.into_inner());
        query::fetch_rows(query, self.pool.inner(), FIND_CONTRACT_SPANS).await
    }

    async fn find_address(
        &self,
        sbsb_ck: SubscriberCk,
        sbad_type: &str,
    ) -> FacetsResult<Option<SubscriberAddressDto>> {
        debug!(%sbsb_ck, sbad_type, "find_address");

        let query = sqlx::query_as::<_, SubscriberAddressDto>(FIND_ADDRESS)
            .bind(sbsb_ck.into_inner())
            .bind(sbad_type);
        query::fetch_first(query, self.pool.inner(), FIND_ADDRESS).await
    }
}

impl std::fmt::Debug for MySqlSubscriberDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlSubscriberDaoImpl").finish_non_exhaustive()
    }
}

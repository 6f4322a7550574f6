//! MySQL member DAO implementation.

use crate::dao::MemberDao;
use crate::dto::{DualEligibilityDto, EligibilitySpanDto, MemberDto};
use crate::pool::DatabasePoolInterface;
use crate::query;
use chrono::NaiveDate;
use facets_core::{FacetsResult, GroupCk, MemberCk, SubscriberCk};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

const FIND_BY_MEMBER_CK: &str = r"
SELECT MEME.MEME_CK, MEME.SBSB_CK, MEME.GRGR_CK, SBSB.SBSB_ID,
       MEME.MEME_SFX, MEME.MEME_LAST_NAME, MEME.MEME_FIRST_NAME,
       MEME.MEME_MID_INIT, MEME.MEME_REL, MEME.MEME_BIRTH_DT,
       MEME.MEME_MEDCD_NO, MEME.MEME_HICN
FROM CMC_MEME_MEMBER MEME
JOIN CMC_SBSB_SUBSC SBSB ON SBSB.SBSB_CK = MEME.SBSB_CK
WHERE MEME.MEME_CK = ?
";

const FIND_BY_SUBSCRIBER_AND_SUFFIX: &str = r"
SELECT MEME.MEME_CK, MEME.SBSB_CK, MEME.GRGR_CK, SBSB.SBSB_ID,
       MEME.MEME_SFX, MEME.MEME_LAST_NAME, MEME.MEME_FIRST_NAME,
       MEME.MEME_MID_INIT, MEME.MEME_REL, MEME.MEME_BIRTH_DT,
       MEME.MEME_MEDCD_NO, MEME.MEME_HICN
FROM CMC_MEME_MEMBER MEME
JOIN CMC_SBSB_SUBSC SBSB ON SBSB.SBSB_CK = MEME.SBSB_CK
WHERE SBSB.SBSB_ID = ? AND MEME.MEME_SFX = ?
";

const FIND_FOR_SUBSCRIBER: &str = r"
SELECT MEME.MEME_CK, MEME.SBSB_CK, MEME.GRGR_CK, SBSB.SBSB_ID,
       MEME.MEME_SFX, MEME.MEME_LAST_NAME, MEME.MEME_FIRST_NAME,
       MEME.MEME_MID_INIT, MEME.MEME_REL, MEME.MEME_BIRTH_DT,
       MEME.MEME_MEDCD_NO, MEME.MEME_HICN
FROM CMC_MEME_MEMBER MEME
JOIN CMC_SBSB_SUBSC SBSB ON SBSB.SBSB_CK = MEME.SBSB_CK
WHERE MEME.SBSB_CK = ?
ORDER BY MEME.MEME_SFX
";

const FIND_BY_MEDICAID_NO: &str = r"
SELECT MEME.MEME_CK, MEME.SBSB_CK, MEME.GRGR_CK, SBSB.SBSB_ID,
       MEME.MEME_SFX, MEME.MEME_LAST_NAME, MEME.MEME_FIRST_NAME,
       MEME.MEME_MID_INIT, MEME.MEME_REL, MEME.MEME_BIRTH_DT,
       MEME.MEME_MEDCD_NO, MEME.MEME_HICN
FROM CMC_MEME_MEMBER MEME
JOIN CMC_SBSB_SUBSC SBSB ON SBSB.SBSB_CK = MEME.SBSB_CK
WHERE MEME.MEME_MEDCD_NO = ?
ORDER BY MEME.MEME_CK
";

const FIND_BY_HICN: &str = r"
SELECT MEME.MEME_CK, MEME.SBSB_CK, MEME.GRGR_CK, SBSB.SBSB_ID,
       MEME.MEME_SFX, MEME.MEME_LAST_NAME, MEME.MEME_FIRST_NAME,
       MEME.MEME_MID_INIT, MEME.MEME_REL, MEME.MEME_BIRTH_DT,
       MEME.MEME_MEDCD_NO, MEME.MEME_HICN
FROM CMC_MEME_MEMBER MEME
JOIN CMC_SBSB_SUBSC SBSB ON SBSB.SBSB_CK = MEME.SBSB_CK
WHERE MEME.MEME_HICN = ?
";

const FIND_ELIGIBILITY_SPANS: &str = r"
SELECT MEME_CK, GRGR_CK, SGSG_CK, CSCS_ID, CSPI_ID, CSPD_CAT, PDPD_ID,
       MEPE_ELIG_IND, MEPE_EFF_DT, MEPE_TERM_DT, MEPE_CREATE_DTM
FROM CMC_MEPE_PRCS_ELIG
WHERE MEME_CK = ?
ORDER BY MEPE_EFF_DT, MEPE_CREATE_DTM
";

const FIND_ELIGIBILITY_AS_OF: &str = r"
SELECT MEME_CK, GRGR_CK, SGSG_CK, CSCS_ID, CSPI_ID, CSPD_CAT, PDPD_ID,
       MEPE_ELIG_IND, MEPE_EFF_DT, MEPE_TERM_DT, MEPE_CREATE_DTM
FROM CMC_MEPE_PRCS_ELIG
WHERE MEME_CK = ?
  AND MEPE_ELIG_IND = 'Y'
  AND MEPE_EFF_DT <= ?
  AND MEPE_TERM_DT >= ?
ORDER BY MEPE_CREATE_DTM DESC
";

const FIND_ACTIVE_ELIGIBILITY: &str = r"
SELECT MEME_CK, GRGR_CK, SGSG_CK, CSCS_ID, CSPI_ID, CSPD_CAT, PDPD_ID,
       MEPE_ELIG_IND, MEPE_EFF_DT, MEPE_TERM_DT, MEPE_CREATE_DTM
FROM CMC_MEPE_PRCS_ELIG
WHERE MEME_CK = ?
  AND MEPE_ELIG_IND = 'Y'
  AND MEPE_TERM_DT >= ?
ORDER BY MEPE_EFF_DT
";

const FIND_DUAL_ELIGIBILITY: &str = r"
SELECT XR.MEME_CK, XR.XREF_MEME_CK, XR.XREF_TYPE,
       PRI.PDPD_ID AS PRIMARY_PDPD_ID,
       LNK.PDPD_ID AS LINKED_PDPD_ID,
       GREATEST(PRI.MEPE_EFF_DT, LNK.MEPE_EFF_DT) AS OVERLAP_EFF_DT,
       LEAST(PRI.MEPE_TERM_DT, LNK.MEPE_TERM_DT) AS OVERLAP_TERM_DT
FROM CMC_MEME_XREF XR
JOIN CMC_MEPE_PRCS_ELIG PRI ON PRI.MEME_CK = XR.MEME_CK
JOIN CMC_MEPE_PRCS_ELIG LNK ON LNK.MEME_CK = XR.XREF_MEME_CK
WHERE XR.MEME_CK = ?
  AND PRI.MEPE_ELIG_IND = 'Y'
  AND LNK.MEPE_ELIG_IND = 'Y'
  AND PRI.MEPE_EFF_DT <= LNK.MEPE_TERM_DT
  AND LNK.MEPE_EFF_DT <= PRI.MEPE_TERM_DT
ORDER BY OVERLAP_EFF_DT
";

const FIND_DUAL_LINKAGE_AS_OF: &str = r"
SELECT XR.MEME_CK, XR.XREF_MEME_CK, XR.XREF_TYPE,
       PRI.PDPD_ID AS PRIMARY_PDPD_ID,
       LNK.PDPD_ID AS LINKED_PDPD_ID,
       GREATEST(PRI.MEPE_EFF_DT, LNK.MEPE_EFF_DT) AS OVERLAP_EFF_DT,
       LEAST(PRI.MEPE_TERM_DT, LNK.MEPE_TERM_DT) AS OVERLAP_TERM_DT
FROM CMC_MEME_XREF XR
JOIN CMC_MEPE_PRCS_ELIG PRI ON PRI.MEME_CK = XR.MEME_CK
JOIN CMC_MEPE_PRCS_ELIG LNK ON LNK.MEME_CK = XR.XREF_MEME_CK
WHERE XR.MEME_CK = ?
  AND PRI.MEPE_ELIG_IND = 'Y'
  AND LNK.MEPE_ELIG_IND = 'Y'
  AND PRI.MEPE_EFF_DT <= ? AND PRI.MEPE_TERM_DT >= ?
  AND LNK.MEPE_EFF_DT <= ? AND LNK.MEPE_TERM_DT >= ?
ORDER BY OVERLAP_TERM_DT DESC
";

const COUNT_IN_GROUP: &str = r"
SELECT COUNT(*) FROM CMC_MEME_MEMBER WHERE GRGR_CK = ?
";

/// MySQL member DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = MemberDao)]
pub struct MySqlMemberDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlMemberDaoImpl {
    /// Creates a new MySQL member DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberDao for MySqlMemberDaoImpl {
    async fn find_by_member_ck(&self, meme_ck: MemberCk) -> FacetsResult<Option<MemberDto>> {
        debug!(%meme_ck, "find_by_member_ck");

        let query = sqlx::query_as::<_, MemberDto>(FIND_BY_MEMBER_CK).bind(meme_ck.into_inner());
        query::fetch_first(query, self.pool.inner(), FIND_BY_MEMBER_CK).await
    }

    async fn find_by_subscriber_and_suffix(
        &self,
        sbsb_id: &str,
        meme_sfx: i16,
    ) -> FacetsResult<Option<MemberDto>> {
        debug!(sbsb_id, meme_sfx, "find_by_subscriber_and_suffix");

        let query = sqlx::query_as::<_, MemberDto>(FIND_BY_SUBSCRIBER_AND_SUFFIX)
            .bind(sbsb_id)
            .bind(meme_sfx);
        query::fetch_first(query, self.pool.inner(), FIND_BY_SUBSCRIBER_AND_SUFFIX).await
    }

    async fn find_for_subscriber(&self, sbsb_ck: SubscriberCk) -> FacetsResult<Vec<MemberDto>> {
        debug!(%sbsb_ck, "find_for_subscriber");

        let query = sqlx::query_as::<_, MemberDto>(FIND_FOR_SUBSCRIBER).bind(sbsb_ck.into_inner());
        query::fetch_rows(query, self.pool.inner(), FIND_FOR_SUBSCRIBER).await
    }

    async fn find_by_medicaid_no(&self, medcd_no: &str) -> FacetsResult<Vec<MemberDto>> {
        debug!(medcd_no, "find_by_medicaid_no");

        let query = sqlx::query_as::<_, MemberDto>(FIND_BY_MEDICAID_NO).bind(medcd_no);
        query::fetch_rows(query, self.pool.inner(), FIND_BY_MEDICAID_NO).await
    }

    async fn find_by_hicn(&self, hicn: &str) -> FacetsResult<Option<MemberDto>> {
        debug!(hicn, "find_by_hicn");

        let query = sqlx::query_as::<_, MemberDto>(FIND_BY_HICN).bind(hicn);
        query::fetch_first(query, self.pool.inner(), FIND_BY_HICN).await
    }

    async fn find_eligibility_spans(
        &self,
        meme_ck: MemberCk,
    ) -> FacetsResult<Vec<EligibilitySpanDto>> {
        debug!(%meme_ck, "find_eligibility_spans");

        let query =
            sqlx::query_as::<_, EligibilitySpanDto>(FIND_ELIGIBILITY_SPANS).bind(meme_ck.into_inner());
        query::fetch_rows(query, self.pool.inner(), FIND_ELIGIBILITY_SPANS).await
    }

    async fn find_eligibility_as_of(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Option<EligibilitySpanDto>> {
        debug!(%meme_ck, %as_of, "find_eligibility_as_of");

        let query = sqlx::query_as::<_, EligibilitySpanDto>(FIND_ELIGIBILITY_AS_OF)
            .bind(meme_ck.into_inner())
            .bind(as_of)
            .bind(as_of);
        query::fetch_first(query, self.pool.inner(), FIND_ELIGIBILITY_AS_OF).await
    }

    async fn find_active_eligibility(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Vec<EligibilitySpanDto>> {
        debug!(%meme_ck, %as_of, "find_active_eligibility");

        let query = sqlx::query_as::<_, EligibilitySpanDto>(FIND_ACTIVE_ELIGIBILITY)
            .bind(meme_ck.into_inner())
            .bind(as_of);
        query::fetch_rows(query, self.pool.inner(), FIND_ACTIVE_ELIGIBILITY).await
    }

    async fn find_dual_eligibility(
        &self,
        meme_ck: MemberCk,
    ) -> FacetsResult<Vec<DualEligibilityDto>> {
        debug!(%meme_ck, "find_dual_eligibility");

        let query =
            sqlx::query_as::<_, DualEligibilityDto>(FIND_DUAL_ELIGIBILITY).bind(meme_ck.into_inner());
        query::fetch_rows(query, self.pool.inner(), FIND_DUAL_ELIGIBILITY).await
    }

    async fn find_dual_linkage_as_of(
        &self,
        meme_ck: MemberCk,
        as_of: NaiveDate,
    ) -> FacetsResult<Option<DualEligibilityDto>> {
        debug!(%meme_ck, %as_of, "find_dual_linkage_as_of");

        let query = sqlx::query_as::<_, DualEligibilityDto>(FIND_DUAL_LINKAGE_AS_OF)
            .bind(meme_ck.into_inner())
            .bind(as_of)
            .bind(as_of)
            .bind(as_of)
            .bind(as_of);
        query::fetch_first(query, self.pool.inner(), FIND_DUAL_LINKAGE_AS_OF).await
    }

    async fn count_in_group(&self, grgr_ck: GroupCk) -> FacetsResult<u64> {
        let query = sqlx::query_scalar::<_, i64>(COUNT_IN_GROUP).bind(grgr_ck.into_inner());
        let count = query::fetch_scalar(query, self.pool.inner(), COUNT_IN_GROUP).await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlMemberDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlMemberDaoImpl").finish_non_exhaustive()
    }
}

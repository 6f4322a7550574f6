//! Member-level DTOs (`CMC_MEME_MEMBER`, `CMC_MEPE_PRCS_ELIG`,
//! `CMC_MEME_XREF`).

use chrono::{NaiveDate, NaiveDateTime};
use facets_core::dates;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One member row, joined with the owning subscriber for `SBSB_ID`.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MemberDto {
    pub meme_ck: i64,
    pub sbsb_ck: i64,
    pub grgr_ck: i64,
    pub sbsb_id: Option<String>,
    pub meme_sfx: Option<i16>,
    pub meme_last_name: Option<String>,
    pub meme_first_name: Option<String>,
    pub meme_mid_init: Option<String>,
    pub meme_rel: Option<String>,
    pub meme_birth_dt: Option<NaiveDateTime>,
    pub meme_medcd_no: Option<String>,
    pub meme_hicn: Option<String>,
}

/// One processed-eligibility row (`CMC_MEPE_PRCS_ELIG`).
///
/// A member usually has several spans over time; overlapping spans for
/// the same category are legitimate data, not an error.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EligibilitySpanDto {
    pub meme_ck: i64,
    pub grgr_ck: i64,
    pub sgsg_ck: Option<i64>,
    pub cscs_id: Option<String>,
    pub cspi_id: Option<String>,
    pub cspd_cat: Option<String>,
    pub pdpd_id: Option<String>,
    pub mepe_elig_ind: Option<String>,
    pub mepe_eff_dt: Option<NaiveDateTime>,
    pub mepe_term_dt: Option<NaiveDateTime>,
    pub mepe_create_dtm: Option<NaiveDateTime>,
}

impl EligibilitySpanDto {
    /// Returns true if the span has the vendor's open-ended termination.
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.mepe_term_dt.is_some_and(dates::is_open_ended)
    }

    /// Returns true if this span covers the given date (inclusive bounds).
    #[must_use]
    pub fn covers(&self, as_of: NaiveDate) -> bool {
        match (self.mepe_eff_dt, self.mepe_term_dt) {
            (Some(eff), Some(term)) => dates::covers(eff, term, as_of),
            _ => false,
        }
    }
}

/// One dual-eligibility linkage row.
///
/// Produced by joining a member's eligibility to the eligibility of the
/// cross-referenced member (`CMC_MEME_XREF`) where the two date ranges
/// overlap. The overlap columns are computed in SQL.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DualEligibilityDto {
    pub meme_ck: i64,
    pub xref_meme_ck: i64,
    pub xref_type: Option<String>,
    pub primary_pdpd_id: Option<String>,
    pub linked_pdpd_id: Option<String>,
    pub overlap_eff_dt: Option<NaiveDateTime>,
    pub overlap_term_dt: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_span_covers() {
        let span = EligibilitySpanDto {
            meme_ck: 1,
            grgr_ck: 10,
            mepe_eff_dt: Some(dt(2024, 1, 1)),
            mepe_term_dt: Some(dt(2024, 6, 30)),
            ..EligibilitySpanDto::default()
        };

        assert!(span.covers(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
        assert!(!span.covers(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    }

    #[test]
    fn test_span_with_null_dates_never_covers() {
        let span = EligibilitySpanDto::default();
        assert!(!span.covers(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
        assert!(!span.is_open_ended());
    }

    #[test]
    fn test_open_ended_span() {
        let span = EligibilitySpanDto {
            mepe_term_dt: Some(dt(9999, 12, 31)),
            ..EligibilitySpanDto::default()
        };
        assert!(span.is_open_ended());
    }

    #[test]
    fn test_member_dto_serde_round_trip() {
        let member = MemberDto {
            meme_ck: 1_000_234,
            sbsb_ck: 500_100,
            grgr_ck: 42,
            sbsb_id: Some("A12345678".to_string()),
            meme_sfx: Some(1),
            meme_last_name: Some("DOE".to_string()),
            ..MemberDto::default()
        };

        let json = serde_json::to_string(&member).expect("serialize");
        let back: MemberDto = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, member);
        assert_eq!(back.meme_first_name, None);
    }
}

//! Group-hierarchy DTOs (`CMC_GRGR_GROUP`, `CMC_SGSG_SUB_GROUP`,
//! `CMC_CSPI_CS_PLAN`, `CMC_PDPD_PRODUCT`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One group row.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GroupDto {
    pub grgr_ck: i64,
    pub grgr_id: Option<String>,
    pub grgr_name: Option<String>,
    pub grgr_sts: Option<String>,
    pub grgr_orig_eff_dt: Option<NaiveDateTime>,
    pub grgr_term_dt: Option<NaiveDateTime>,
}

/// One subgroup row.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SubgroupDto {
    pub sgsg_ck: i64,
    pub grgr_ck: i64,
    pub sgsg_id: Option<String>,
    pub sgsg_name: Option<String>,
    pub sgsg_eff_dt: Option<NaiveDateTime>,
    pub sgsg_term_dt: Option<NaiveDateTime>,
}

/// One class/plan offering row, joined with the product for its
/// description.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PlanOfferingDto {
    pub grgr_ck: i64,
    pub cscs_id: Option<String>,
    pub cspi_id: Option<String>,
    pub cspd_cat: Option<String>,
    pub pdpd_id: Option<String>,
    pub pdpd_desc: Option<String>,
    pub cspi_eff_dt: Option<NaiveDateTime>,
    pub cspi_term_dt: Option<NaiveDateTime>,
}

/// One product row.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ProductDto {
    pub pdpd_id: String,
    pub pdpd_desc: Option<String>,
    pub pdpd_type: Option<String>,
    pub lobd_id: Option<String>,
    pub pdpd_eff_dt: Option<NaiveDateTime>,
    pub pdpd_term_dt: Option<NaiveDateTime>,
}

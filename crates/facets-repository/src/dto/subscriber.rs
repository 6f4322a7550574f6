//! Subscriber-level DTOs (`CMC_SBSB_SUBSC`, `CMC_SBEL_ELIG_ENT`,
//! `CMC_SBAD_ADDR`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One subscriber row.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SubscriberDto {
    pub sbsb_ck: i64,
    pub grgr_ck: i64,
    pub sbsb_id: Option<String>,
    pub sbsb_last_name: Option<String>,
    pub sbsb_first_name: Option<String>,
    pub sbsb_mid_init: Option<String>,
    pub sbsb_elig_ind: Option<String>,
}

/// One subscriber contract-eligibility entry (`CMC_SBEL_ELIG_ENT`).
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContractSpanDto {
    pub sbsb_ck: i64,
    pub grgr_ck: i64,
    pub sgsg_ck: Option<i64>,
    pub sbel_elig_type: Option<String>,
    pub sbel_eff_dt: Option<NaiveDateTime>,
    pub sbel_term_dt: Option<NaiveDateTime>,
}

/// One subscriber address row (`CMC_SBAD_ADDR`), keyed by address type.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SubscriberAddressDto {
    pub sbsb_ck: i64,
    pub sbad_type: Option<String>,
    pub sbad_addr1: Option<String>,
    pub sbad_addr2: Option<String>,
    pub sbad_city: Option<String>,
    pub sbad_state: Option<String>,
    pub sbad_zip: Option<String>,
    pub sbad_county: Option<String>,
    pub sbad_phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_all_fields_independently_nullable() {
        let address = SubscriberAddressDto {
            sbsb_ck: 500_100,
            sbad_city: Some("ALBANY".to_string()),
            ..SubscriberAddressDto::default()
        };

        assert_eq!(address.sbad_addr1, None);
        assert_eq!(address.sbad_city.as_deref(), Some("ALBANY"));

        let json = serde_json::to_string(&address).expect("serialize");
        let back: SubscriberAddressDto = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, address);
    }
}

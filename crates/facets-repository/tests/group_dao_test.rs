//! Integration tests for `MySqlGroupDaoImpl`.
//!
//! Ignored by default; run with `cargo test -- --ignored` when a Docker
//! daemon is available.

mod common;

use chrono::NaiveDate;
use common::{insert_group, TestDatabase};
use facets_core::GroupCk;
use facets_repository::{GroupDao, MySqlGroupDaoImpl};

async fn insert_subgroup(db: &TestDatabase, sgsg_ck: i64, grgr_ck: i64, sgsg_id: &str) {
    sqlx::query(
        r"INSERT INTO CMC_SGSG_SUB_GROUP
          (SGSG_CK, GRGR_CK, SGSG_ID, SGSG_NAME, SGSG_EFF_DT, SGSG_TERM_DT)
          VALUES (?, ?, ?, NULL, NULL, NULL)",
    )
    .bind(sgsg_ck)
    .bind(grgr_ck)
    .bind(sgsg_id)
    .execute(db.pool().inner())
    .await
    .expect("insert subgroup");
}

async fn insert_plan_offering(
    db: &TestDatabase,
    grgr_ck: i64,
    cspi_id: &str,
    pdpd_id: &str,
    eff_dt: &str,
    term_dt: &str,
) {
    sqlx::query(
        r"INSERT INTO CMC_CSPI_CS_PLAN
          (GRGR_CK, CSCS_ID, CSPI_ID, CSPD_CAT, PDPD_ID, CSPI_EFF_DT, CSPI_TERM_DT)
          VALUES (?, 'C001', ?, 'M', ?, ?, ?)",
    )
    .bind(grgr_ck)
    .bind(cspi_id)
    .bind(pdpd_id)
    .bind(eff_dt)
    .bind(term_dt)
    .execute(db.pool().inner())
    .await
    .expect("insert plan offering");
}

async fn insert_product(db: &TestDatabase, pdpd_id: &str, desc: Option<&str>) {
    sqlx::query(
        r"INSERT INTO CMC_PDPD_PRODUCT
          (PDPD_ID, PDPD_DESC, PDPD_TYPE, LOBD_ID, PDPD_EFF_DT, PDPD_TERM_DT)
          VALUES (?, ?, NULL, NULL, NULL, NULL)",
    )
    .bind(pdpd_id)
    .bind(desc)
    .execute(db.pool().inner())
    .await
    .expect("insert product");
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_find_group_by_ck_and_id() {
    let db = TestDatabase::new().await;
    let dao = MySqlGroupDaoImpl::new(db.pool());

    insert_group(&db.pool(), 42, "GRP00042", Some("ACME WIDGETS")).await;

    let by_ck = dao
        .find_by_group_ck(GroupCk::from_raw(42))
        .await
        .expect("query")
        .expect("group");
    assert_eq!(by_ck.grgr_id.as_deref(), Some("GRP00042"));
    assert_eq!(by_ck.grgr_name.as_deref(), Some("ACME WIDGETS"));
    assert_eq!(by_ck.grgr_term_dt, None);

    let by_id = dao
        .find_by_group_id("GRP00042")
        .await
        .expect("query")
        .expect("group");
    assert_eq!(by_id.grgr_ck, 42);

    let missing = dao.find_by_group_id("GRP99999").await.expect("query");
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_subgroups_listing_and_count() {
    let db = TestDatabase::new().await;
    let dao = MySqlGroupDaoImpl::new(db.pool());

    insert_group(&db.pool(), 42, "GRP00042", None).await;
    insert_subgroup(&db, 9_002, 42, "SG02").await;
    insert_subgroup(&db, 9_001, 42, "SG01").await;

    let subgroups = dao.find_subgroups(GroupCk::from_raw(42)).await.expect("query");
    assert_eq!(subgroups.len(), 2);
    assert_eq!(subgroups[0].sgsg_id.as_deref(), Some("SG01"));

    let count = dao.count_subgroups(GroupCk::from_raw(42)).await.expect("query");
    assert_eq!(count, 2);

    let found = dao
        .find_subgroup_by_id(GroupCk::from_raw(42), "SG02")
        .await
        .expect("query")
        .expect("subgroup");
    assert_eq!(found.sgsg_ck, 9_002);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_plan_offerings_join_product_description() {
    let db = TestDatabase::new().await;
    let dao = MySqlGroupDaoImpl::new(db.pool());

    insert_group(&db.pool(), 42, "GRP00042", None).await;
    insert_product(&db, "HMO01", Some("STANDARD HMO")).await;
    insert_plan_offering(
        &db,
        42,
        "PLN1",
        "HMO01",
        "2024-01-01 00:00:00",
        "2024-12-31 00:00:00",
    )
    .await;
    // Offering with no matching product row still comes back, with a
    // NULL description from the outer join.
    insert_plan_offering(
        &db,
        42,
        "PLN2",
        "PPO09",
        "2024-01-01 00:00:00",
        "9999-12-31 00:00:00",
    )
    .await;

    let offerings = dao.find_plan_offerings(GroupCk::from_raw(42)).await.expect("query");
    assert_eq!(offerings.len(), 2);
    assert_eq!(offerings[0].pdpd_desc.as_deref(), Some("STANDARD HMO"));
    assert_eq!(offerings[1].pdpd_desc, None);

    let in_force = dao
        .find_plan_offerings_as_of(
            GroupCk::from_raw(42),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .await
        .expect("query");
    assert_eq!(in_force.len(), 1);
    assert_eq!(in_force[0].cspi_id.as_deref(), Some("PLN2"));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_products_for_group_distinct() {
    let db = TestDatabase::new().await;
    let dao = MySqlGroupDaoImpl::new(db.pool());

    insert_group(&db.pool(), 42, "GRP00042", None).await;
    insert_product(&db, "HMO01", Some("STANDARD HMO")).await;
    insert_plan_offering(
        &db,
        42,
        "PLN1",
        "HMO01",
        "2024-01-01 00:00:00",
        "2024-06-30 00:00:00",
    )
    .await;
    insert_plan_offering(
        &db,
        42,
        "PLN2",
        "HMO01",
        "2024-07-01 00:00:00",
        "2024-12-31 00:00:00",
    )
    .await;

    let products = dao
        .find_products_for_group(GroupCk::from_raw(42))
        .await
        .expect("query");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].pdpd_id, "HMO01");

    let product = dao.find_product("HMO01").await.expect("query").expect("product");
    assert_eq!(product.pdpd_desc.as_deref(), Some("STANDARD HMO"));
    assert_eq!(product.pdpd_type, None);
}

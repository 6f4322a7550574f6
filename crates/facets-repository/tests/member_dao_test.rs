//! Integration tests for `MySqlMemberDaoImpl`.
//!
//! These run against a real MySQL database using testcontainers and are
//! ignored by default; run with `cargo test -- --ignored` when a Docker
//! daemon is available.

mod common;

use chrono::NaiveDate;
use common::{insert_eligibility_span, insert_member, insert_subscriber, TestDatabase};
use facets_core::{GroupCk, MemberCk, SubscriberCk};
use facets_repository::{MemberDao, MySqlMemberDaoImpl};

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_find_by_member_ck_maps_columns_and_nulls() {
    let db = TestDatabase::new().await;
    let dao = MySqlMemberDaoImpl::new(db.pool());

    insert_subscriber(&db.pool(), 500_100, 42, "A12345678", Some("DOE")).await;
    insert_member(
        &db.pool(),
        1_000_234,
        500_100,
        42,
        1,
        Some("DOE"),
        None,
        Some("123456789A"),
    )
    .await;

    let member = dao
        .find_by_member_ck(MemberCk::from_raw(1_000_234))
        .await
        .expect("query")
        .expect("member");

    assert_eq!(member.meme_ck, 1_000_234);
    assert_eq!(member.sbsb_ck, 500_100);
    assert_eq!(member.grgr_ck, 42);
    assert_eq!(member.sbsb_id.as_deref(), Some("A12345678"));
    assert_eq!(member.meme_sfx, Some(1));
    assert_eq!(member.meme_last_name.as_deref(), Some("DOE"));
    assert_eq!(member.meme_hicn.as_deref(), Some("123456789A"));
    // Columns left NULL map to None, each independently.
    assert_eq!(member.meme_first_name, None);
    assert_eq!(member.meme_medcd_no, None);
    assert_eq!(member.meme_birth_dt, None);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_find_by_member_ck_not_found() {
    let db = TestDatabase::new().await;
    let dao = MySqlMemberDaoImpl::new(db.pool());

    let result = dao
        .find_by_member_ck(MemberCk::from_raw(999_999))
        .await
        .expect("query");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_find_for_subscriber_ordered_by_suffix() {
    let db = TestDatabase::new().await;
    let dao = MySqlMemberDaoImpl::new(db.pool());

    insert_subscriber(&db.pool(), 500_200, 42, "B00000001", Some("SMITH")).await;
    insert_member(&db.pool(), 2_002, 500_200, 42, 2, Some("SMITH"), None, None).await;
    insert_member(&db.pool(), 2_001, 500_200, 42, 1, Some("SMITH"), None, None).await;

    let members = dao
        .find_for_subscriber(SubscriberCk::from_raw(500_200))
        .await
        .expect("query");

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].meme_sfx, Some(1));
    assert_eq!(members[1].meme_sfx, Some(2));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_find_by_medicaid_no_empty_result_is_empty_vec() {
    let db = TestDatabase::new().await;
    let dao = MySqlMemberDaoImpl::new(db.pool());

    let members = dao.find_by_medicaid_no("ZZ999").await.expect("query");
    assert!(members.is_empty());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_eligibility_as_of_takes_latest_created_span() {
    let db = TestDatabase::new().await;
    let dao = MySqlMemberDaoImpl::new(db.pool());

    insert_subscriber(&db.pool(), 500_300, 42, "C00000001", None).await;
    insert_member(&db.pool(), 3_001, 500_300, 42, 1, None, None, None).await;

    // Two overlapping spans; the one created later wins on the singular
    // accessor, with a warning logged for the surplus row.
    insert_eligibility_span(
        &db.pool(),
        3_001,
        42,
        "HMO01",
        "Y",
        "2024-01-01 00:00:00",
        "2024-12-31 00:00:00",
        "2023-12-01 10:00:00",
    )
    .await;
    insert_eligibility_span(
        &db.pool(),
        3_001,
        42,
        "HMO02",
        "Y",
        "2024-03-01 00:00:00",
        "9999-12-31 00:00:00",
        "2024-02-15 10:00:00",
    )
    .await;

    let span = dao
        .find_eligibility_as_of(
            MemberCk::from_raw(3_001),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
        .await
        .expect("query")
        .expect("span");

    assert_eq!(span.pdpd_id.as_deref(), Some("HMO02"));
    assert!(span.is_open_ended());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_active_eligibility_excludes_termed_spans() {
    let db = TestDatabase::new().await;
    let dao = MySqlMemberDaoImpl::new(db.pool());

    insert_subscriber(&db.pool(), 500_400, 42, "D00000001", None).await;
    insert_member(&db.pool(), 4_001, 500_400, 42, 1, None, None, None).await;

    insert_eligibility_span(
        &db.pool(),
        4_001,
        42,
        "HMO01",
        "Y",
        "2023-01-01 00:00:00",
        "2023-12-31 00:00:00",
        "2022-12-01 10:00:00",
    )
    .await;
    insert_eligibility_span(
        &db.pool(),
        4_001,
        42,
        "PPO01",
        "Y",
        "2024-01-01 00:00:00",
        "9999-12-31 00:00:00",
        "2023-12-01 10:00:00",
    )
    .await;

    let active = dao
        .find_active_eligibility(
            MemberCk::from_raw(4_001),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
        .await
        .expect("query");

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].pdpd_id.as_deref(), Some("PPO01"));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_dual_eligibility_overlap_window() {
    let db = TestDatabase::new().await;
    let dao = MySqlMemberDaoImpl::new(db.pool());

    insert_subscriber(&db.pool(), 500_500, 42, "E00000001", None).await;
    insert_member(&db.pool(), 5_001, 500_500, 42, 1, None, None, Some("987654321A")).await;
    insert_member(&db.pool(), 5_002, 500_500, 42, 2, None, Some("MCD123"), None).await;

    sqlx::query("INSERT INTO CMC_MEME_XREF (MEME_CK, XREF_MEME_CK, XREF_TYPE) VALUES (?, ?, 'DU')")
        .bind(5_001_i64)
        .bind(5_002_i64)
        .execute(db.pool().inner())
        .await
        .expect("insert xref");

    // Medicare side: Feb through Nov. Medicaid side: Jun through next year.
    insert_eligibility_span(
        &db.pool(),
        5_001,
        42,
        "MCR01",
        "Y",
        "2024-02-01 00:00:00",
        "2024-11-30 00:00:00",
        "2024-01-15 10:00:00",
    )
    .await;
    insert_eligibility_span(
        &db.pool(),
        5_002,
        42,
        "MCD01",
        "Y",
        "2024-06-01 00:00:00",
        "2025-05-31 00:00:00",
        "2024-05-15 10:00:00",
    )
    .await;

    let linkages = dao
        .find_dual_eligibility(MemberCk::from_raw(5_001))
        .await
        .expect("query");

    assert_eq!(linkages.len(), 1);
    let linkage = &linkages[0];
    assert_eq!(linkage.meme_ck, 5_001);
    assert_eq!(linkage.xref_meme_ck, 5_002);
    assert_eq!(linkage.xref_type.as_deref(), Some("DU"));
    assert_eq!(linkage.primary_pdpd_id.as_deref(), Some("MCR01"));
    assert_eq!(linkage.linked_pdpd_id.as_deref(), Some("MCD01"));
    // Overlap window is the later effective date through the earlier term.
    assert_eq!(
        linkage.overlap_eff_dt.map(|dt| dt.date()),
        NaiveDate::from_ymd_opt(2024, 6, 1)
    );
    assert_eq!(
        linkage.overlap_term_dt.map(|dt| dt.date()),
        NaiveDate::from_ymd_opt(2024, 11, 30)
    );
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_count_in_group() {
    let db = TestDatabase::new().await;
    let dao = MySqlMemberDaoImpl::new(db.pool());

    insert_subscriber(&db.pool(), 500_600, 77, "F00000001", None).await;
    insert_member(&db.pool(), 6_001, 500_600, 77, 1, None, None, None).await;
    insert_member(&db.pool(), 6_002, 500_600, 77, 2, None, None, None).await;

    let count = dao.count_in_group(GroupCk::from_raw(77)).await.expect("query");
    assert_eq!(count, 2);

    let empty = dao.count_in_group(GroupCk::from_raw(78)).await.expect("query");
    assert_eq!(empty, 0);
}

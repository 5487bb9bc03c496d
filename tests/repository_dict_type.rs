mod common;

use dict_admin::domain::entities::{
    DictTypeFilter, DictTypePatch, DictTypeStatus, NewDictType, Page,
};
use dict_admin::domain::repositories::DictTypeRepository;
use dict_admin::infrastructure::persistence::PgDictTypeRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_dict_type(dict_type: &str) -> NewDictType {
    NewDictType {
        dict_name: format!("Name of {dict_type}"),
        dict_type: dict_type.to_string(),
        status: DictTypeStatus::Normal,
        remark: Some("created in test".to_string()),
        create_by: 11,
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgDictTypeRepository::new(Arc::new(pool));

    let created = repo.create(new_dict_type("order_status")).await.unwrap();

    assert_eq!(created.dict_type, "order_status");
    assert_eq!(created.status, 2);
    assert_eq!(created.create_by, 11);
    assert_eq!(created.update_by, 0);
    assert!(created.deleted_at.is_none());

    let found = repo.find_by_id(created.dict_id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
async fn test_create_duplicate_is_conflict(pool: PgPool) {
    let repo = PgDictTypeRepository::new(Arc::new(pool));

    let result = repo.create(new_dict_type("sys_user_sex")).await;

    assert!(matches!(
        result.unwrap_err(),
        dict_admin::AppError::Conflict { .. }
    ));
}

#[sqlx::test]
async fn test_list_pages_in_id_order(pool: PgPool) {
    let repo = PgDictTypeRepository::new(Arc::new(pool));

    let (first_page, total) = repo
        .list(DictTypeFilter::default(), Page::new(0, 2))
        .await
        .unwrap();
    let (second_page, _) = repo
        .list(DictTypeFilter::default(), Page::new(2, 2))
        .await
        .unwrap();

    assert_eq!(total, common::SEEDED_DICT_TYPES);
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);
    assert!(first_page[0].dict_id < first_page[1].dict_id);
    assert!(first_page[1].dict_id < second_page[0].dict_id);
}

#[sqlx::test]
async fn test_list_filter_treats_wildcards_literally(pool: PgPool) {
    common::create_test_dict_type(&pool, "sysXuser", "No underscore", 2).await;
    let repo = PgDictTypeRepository::new(Arc::new(pool));

    let filter = DictTypeFilter {
        dict_type: Some("sys_user".to_string()),
        ..Default::default()
    };
    let (items, total) = repo.list(filter, Page::new(0, 10)).await.unwrap();

    assert_eq!(total, 1);
    assert_eq!(items[0].dict_type, "sys_user_sex");
}

#[sqlx::test]
async fn test_list_all_by_id_and_status(pool: PgPool) {
    let disabled = common::create_test_dict_type(&pool, "legacy", "Legacy", 1).await;
    let repo = PgDictTypeRepository::new(Arc::new(pool));

    let by_status = repo
        .list_all(DictTypeFilter {
            status: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].dict_id, disabled);

    let by_id = repo
        .list_all(DictTypeFilter {
            dict_id: Some(disabled),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_id.len(), 1);
}

#[sqlx::test]
async fn test_exists_by_type(pool: PgPool) {
    let own_id = common::seeded_dict_id(&pool, "sys_yes_no").await;
    common::create_deleted_dict_type(&pool, "retired").await;
    let repo = PgDictTypeRepository::new(Arc::new(pool));

    assert!(repo.exists_by_type("sys_yes_no", None).await.unwrap());
    assert!(!repo.exists_by_type("sys_yes_no", Some(own_id)).await.unwrap());
    assert!(!repo.exists_by_type("retired", None).await.unwrap());
    assert!(!repo.exists_by_type("never_created", None).await.unwrap());
}

#[sqlx::test]
async fn test_update_replaces_editable_columns(pool: PgPool) {
    let repo = PgDictTypeRepository::new(Arc::new(pool));
    let created = repo.create(new_dict_type("order_status")).await.unwrap();

    let updated = repo
        .update(
            created.dict_id,
            DictTypePatch {
                dict_name: "Order state".to_string(),
                dict_type: "order_state".to_string(),
                status: DictTypeStatus::Disabled,
                remark: None,
                update_by: 12,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.dict_name, "Order state");
    assert_eq!(updated.dict_type, "order_state");
    assert_eq!(updated.status, 1);
    assert!(updated.remark.is_none());
    assert_eq!(updated.create_by, 11);
    assert_eq!(updated.update_by, 12);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn test_update_deleted_row_returns_none(pool: PgPool) {
    let deleted = common::create_deleted_dict_type(&pool, "retired").await;
    let repo = PgDictTypeRepository::new(Arc::new(pool));

    let result = repo
        .update(
            deleted,
            DictTypePatch {
                dict_name: "Back".to_string(),
                dict_type: "retired".to_string(),
                status: DictTypeStatus::Normal,
                remark: None,
                update_by: 1,
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_soft_delete_counts_live_rows_only(pool: PgPool) {
    let live = common::create_test_dict_type(&pool, "live_one", "Live", 2).await;
    let deleted = common::create_deleted_dict_type(&pool, "dead_one").await;
    let repo = PgDictTypeRepository::new(Arc::new(pool));

    let removed = repo
        .soft_delete(vec![live, deleted, 999_999], 9)
        .await
        .unwrap();

    assert_eq!(removed, 1);
    assert!(repo.find_by_id(live).await.unwrap().is_none());
    assert_eq!(repo.soft_delete(vec![live], 9).await.unwrap(), 0);
}

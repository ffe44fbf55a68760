use std::path::Path;

use tempfile::tempdir;

use waitumusic_core::errors::{DatabaseError, Error};
use waitumusic_core::objectives::{
    NewObjective, ObjectiveRepositoryTrait, ObjectiveStatus, ObjectiveType, Priority,
};
use waitumusic_storage_sqlite::db;
use waitumusic_storage_sqlite::objectives::ObjectiveRepository;

fn build_repository(data_dir: &Path) -> ObjectiveRepository {
    let db_path = data_dir.join("objectives.db");
    let db_path = db::init(db_path.to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = db::write_actor::spawn_writer((*pool).clone());
    ObjectiveRepository::new(pool, writer)
}

fn new_objective(booking_id: i64, objective_type: ObjectiveType) -> NewObjective {
    NewObjective {
        booking_id,
        objective_type,
        title: "Press outreach".to_string(),
        description: "Pitch the show to local press".to_string(),
        priority: Priority::High,
        status: ObjectiveStatus::Planning,
        target_deadline: None,
        assigned_to: Some(25),
        tags: vec!["press".to_string(), "promo".to_string()],
        related_professionals: vec![25, 26],
        created_by: 7,
        confidential: true,
    }
}

#[tokio::test]
async fn insert_assigns_increasing_ids_and_round_trips_fields() {
    let tmp = tempdir().unwrap();
    let repository = build_repository(tmp.path());

    let first = repository
        .insert(new_objective(1, ObjectiveType::Photography))
        .await
        .unwrap();
    let second = repository
        .insert(new_objective(1, ObjectiveType::Revenue))
        .await
        .unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.objective_type, ObjectiveType::Photography);
    assert_eq!(first.tags, vec!["press", "promo"]);
    assert_eq!(first.related_professionals, vec![25, 26]);
    assert_eq!(first.assigned_to, Some(25));
    assert!(first.confidential);
    assert_eq!(first.created_by, 7);
}

#[tokio::test]
async fn list_for_booking_filters_and_orders_by_id() {
    let tmp = tempdir().unwrap();
    let repository = build_repository(tmp.path());

    repository
        .insert_many(vec![
            new_objective(1, ObjectiveType::Photography),
            new_objective(2, ObjectiveType::Videography),
            new_objective(1, ObjectiveType::Strategic),
        ])
        .await
        .unwrap();

    let booking_one = repository.list_for_booking(1).unwrap();
    assert_eq!(booking_one.len(), 2);
    assert!(booking_one.windows(2).all(|w| w[0].id < w[1].id));
    assert!(booking_one.iter().all(|o| o.booking_id == 1));

    assert!(repository.list_for_booking(99).unwrap().is_empty());
}

#[tokio::test]
async fn update_status_persists_and_refreshes_updated_at() {
    let tmp = tempdir().unwrap();
    let repository = build_repository(tmp.path());

    let created = repository
        .insert(new_objective(4, ObjectiveType::SocialMedia))
        .await
        .unwrap();
    assert_eq!(created.status, ObjectiveStatus::Planning);

    let updated = repository
        .update_status(created.id, ObjectiveStatus::Completed)
        .await
        .unwrap();
    assert_eq!(updated.status, ObjectiveStatus::Completed);
    assert!(updated.updated_at >= created.updated_at);

    let listed = repository.list_for_booking(4).unwrap();
    assert_eq!(listed[0].status, ObjectiveStatus::Completed);
}

#[tokio::test]
async fn update_status_for_unknown_id_is_not_found() {
    let tmp = tempdir().unwrap();
    let repository = build_repository(tmp.path());

    let result = repository.update_status(404, ObjectiveStatus::Cancelled).await;
    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("objectives.db");
    let db_path = db::init(db_path.to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    db::run_migrations(&pool).unwrap();
}

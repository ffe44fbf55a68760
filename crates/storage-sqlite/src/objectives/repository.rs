use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use waitumusic_core::errors::{DatabaseError, Error, Result};
use waitumusic_core::objectives::{
    NewObjective, Objective, ObjectiveRepositoryTrait, ObjectiveStatus,
};

use super::model::{NewObjectiveDB, ObjectiveDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::internal_objectives;

pub struct ObjectiveRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ObjectiveRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ObjectiveRepository { pool, writer }
    }

    fn list_for_booking_impl(&self, for_booking_id: i64) -> Result<Vec<Objective>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = internal_objectives::table
            .filter(internal_objectives::booking_id.eq(for_booking_id))
            .order(internal_objectives::id.asc())
            .select(ObjectiveDB::as_select())
            .load::<ObjectiveDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Objective::try_from).collect()
    }
}

fn insert_objective(conn: &mut SqliteConnection, new_objective: NewObjective) -> Result<Objective> {
    let new_objective_db: NewObjectiveDB = new_objective.into();
    let row = diesel::insert_into(internal_objectives::table)
        .values(&new_objective_db)
        .returning(ObjectiveDB::as_returning())
        .get_result::<ObjectiveDB>(conn)
        .map_err(StorageError::from)?;
    Objective::try_from(row)
}

#[async_trait]
impl ObjectiveRepositoryTrait for ObjectiveRepository {
    fn list_for_booking(&self, booking_id: i64) -> Result<Vec<Objective>> {
        self.list_for_booking_impl(booking_id)
    }

    async fn insert(&self, new_objective: NewObjective) -> Result<Objective> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| insert_objective(conn, new_objective))
            .await
    }

    /// Inserts a batch inside one transaction, preserving order.
    async fn insert_many(&self, new_objectives: Vec<NewObjective>) -> Result<Vec<Objective>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<Objective>> {
                new_objectives
                    .into_iter()
                    .map(|new_objective| insert_objective(conn, new_objective))
                    .collect()
            })
            .await
    }

    async fn update_status(
        &self,
        objective_id: i64,
        new_status: ObjectiveStatus,
    ) -> Result<Objective> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Objective> {
                let affected = diesel::update(internal_objectives::table.find(objective_id))
                    .set((
                        internal_objectives::status.eq(new_status.as_str()),
                        internal_objectives::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "objective {objective_id}"
                    ))));
                }

                let row = internal_objectives::table
                    .find(objective_id)
                    .select(ObjectiveDB::as_select())
                    .first::<ObjectiveDB>(conn)
                    .map_err(StorageError::from)?;
                Objective::try_from(row)
            })
            .await
    }
}

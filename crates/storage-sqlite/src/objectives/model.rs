//! Database models for internal booking objectives.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use waitumusic_core::errors::{DatabaseError, Error};
use waitumusic_core::objectives::{NewObjective, Objective};

/// Database model for internal objectives.
///
/// Enum-typed domain fields are stored as their wire strings; `tags` and
/// `related_professionals` are JSON arrays in text columns.
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::internal_objectives)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveDB {
    pub id: i64,
    pub booking_id: i64,
    pub objective_type: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub target_deadline: Option<NaiveDateTime>,
    pub assigned_to: Option<i64>,
    pub confidential: bool,
    pub created_by: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub tags: String,
    pub related_professionals: String,
}

/// Database model for inserting a new objective. The `id` column is omitted
/// so SQLite assigns the next AUTOINCREMENT value.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::internal_objectives)]
#[serde(rename_all = "camelCase")]
pub struct NewObjectiveDB {
    pub booking_id: i64,
    pub objective_type: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub target_deadline: Option<NaiveDateTime>,
    pub assigned_to: Option<i64>,
    pub confidential: bool,
    pub created_by: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub tags: String,
    pub related_professionals: String,
}

// Conversion to the domain model. Fallible: unknown enum strings or
// malformed JSON columns surface as database errors.
impl TryFrom<ObjectiveDB> for Objective {
    type Error = Error;

    fn try_from(db: ObjectiveDB) -> Result<Self, Self::Error> {
        let objective_type = db
            .objective_type
            .parse()
            .map_err(|_| bad_column("objective_type", db.id, &db.objective_type))?;
        let priority = db
            .priority
            .parse()
            .map_err(|_| bad_column("priority", db.id, &db.priority))?;
        let status = db
            .status
            .parse()
            .map_err(|_| bad_column("status", db.id, &db.status))?;
        let tags = serde_json::from_str(&db.tags)
            .map_err(|_| bad_column("tags", db.id, &db.tags))?;
        let related_professionals = serde_json::from_str(&db.related_professionals)
            .map_err(|_| bad_column("related_professionals", db.id, &db.related_professionals))?;

        Ok(Self {
            id: db.id,
            booking_id: db.booking_id,
            objective_type,
            title: db.title,
            description: db.description,
            priority,
            status,
            target_deadline: db.target_deadline,
            assigned_to: db.assigned_to,
            confidential: db.confidential,
            created_by: db.created_by,
            created_at: db.created_at,
            updated_at: db.updated_at,
            tags,
            related_professionals,
        })
    }
}

fn bad_column(column: &str, id: i64, value: &str) -> Error {
    Error::Database(DatabaseError::Internal(format!(
        "objective {id} has unreadable {column}: {value}"
    )))
}

impl From<NewObjective> for NewObjectiveDB {
    fn from(domain: NewObjective) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            booking_id: domain.booking_id,
            objective_type: domain.objective_type.as_str().to_string(),
            title: domain.title,
            description: domain.description,
            priority: domain.priority.as_str().to_string(),
            status: domain.status.as_str().to_string(),
            target_deadline: domain.target_deadline,
            assigned_to: domain.assigned_to,
            confidential: domain.confidential,
            created_by: domain.created_by,
            created_at: now,
            updated_at: now,
            tags: serde_json::to_string(&domain.tags).unwrap_or_else(|_| "[]".to_string()),
            related_professionals: serde_json::to_string(&domain.related_professionals)
                .unwrap_or_else(|_| "[]".to_string()),
        }
    }
}

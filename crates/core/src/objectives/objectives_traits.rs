use crate::auth::Caller;
use crate::errors::Result;
use crate::objectives::objectives_model::{
    NewObjective, Objective, ObjectiveStatus, ObjectiveTemplate, ObjectivesReport,
};
use async_trait::async_trait;

/// Trait for objective repository operations.
///
/// Reads run directly against the connection pool; writes go through the
/// storage layer's single-writer transaction path.
#[async_trait]
pub trait ObjectiveRepositoryTrait: Send + Sync {
    fn list_for_booking(&self, booking_id: i64) -> Result<Vec<Objective>>;
    async fn insert(&self, new_objective: NewObjective) -> Result<Objective>;
    async fn insert_many(&self, new_objectives: Vec<NewObjective>) -> Result<Vec<Objective>>;
    async fn update_status(
        &self,
        objective_id: i64,
        new_status: ObjectiveStatus,
    ) -> Result<Objective>;
}

/// Trait for objective service operations.
///
/// Every operation takes the authenticated caller explicitly and consults
/// the authorization policy before touching the repository.
#[async_trait]
pub trait ObjectiveServiceTrait: Send + Sync {
    async fn get_objectives(&self, booking_id: i64, caller: &Caller) -> Result<Vec<Objective>>;
    async fn create_objective(
        &self,
        new_objective: NewObjective,
        caller: &Caller,
    ) -> Result<Objective>;
    async fn update_objective_status(
        &self,
        objective_id: i64,
        new_status: ObjectiveStatus,
        caller: &Caller,
    ) -> Result<Objective>;
    fn objective_templates(&self, caller: &Caller) -> Result<Vec<ObjectiveTemplate>>;
    async fn generate_automatic_objectives(
        &self,
        booking_id: i64,
        artist_user_id: i64,
        booking_type: &str,
        artist_managed: bool,
        caller: &Caller,
    ) -> Result<Vec<Objective>>;
    async fn objectives_report(&self, booking_id: i64, caller: &Caller)
        -> Result<ObjectivesReport>;
}

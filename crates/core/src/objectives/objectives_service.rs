use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::{authorize, Caller, ObjectiveAction};
use crate::errors::Result;

use super::objectives_catalog::{
    builtin_templates, estimated_value, managed_artist_auto_objectives, standard_objective_plan,
};
use super::objectives_model::{
    NewObjective, Objective, ObjectiveStatus, ObjectiveTemplate, ObjectiveType, ObjectivesReport,
    ProfessionalInvolvement,
};
use super::objectives_traits::{ObjectiveRepositoryTrait, ObjectiveServiceTrait};

pub struct ObjectiveService {
    objective_repository: Arc<dyn ObjectiveRepositoryTrait>,
}

impl ObjectiveService {
    pub fn new(objective_repository: Arc<dyn ObjectiveRepositoryTrait>) -> Self {
        ObjectiveService {
            objective_repository,
        }
    }
}

#[async_trait]
impl ObjectiveServiceTrait for ObjectiveService {
    /// Returns the booking's objectives. A booking with no stored objectives
    /// gets the standard plan materialized on first read, stamped with the
    /// caller's identity.
    async fn get_objectives(&self, booking_id: i64, caller: &Caller) -> Result<Vec<Objective>> {
        authorize(caller, ObjectiveAction::View)?;

        let existing = self.objective_repository.list_for_booking(booking_id)?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        log::info!("Seeding standard objective plan for booking {}", booking_id);
        self.objective_repository
            .insert_many(standard_objective_plan(booking_id, caller.user_id))
            .await
    }

    async fn create_objective(
        &self,
        new_objective: NewObjective,
        caller: &Caller,
    ) -> Result<Objective> {
        authorize(caller, ObjectiveAction::Create)?;

        let mut new_objective = new_objective;
        new_objective.created_by = caller.user_id;
        // Objectives are always hidden from bookers, whatever the client sent.
        new_objective.confidential = true;

        let created = self.objective_repository.insert(new_objective).await?;
        log::info!(
            "Internal objective {} created for booking {} by user {}",
            created.id,
            created.booking_id,
            caller.user_id
        );
        Ok(created)
    }

    async fn update_objective_status(
        &self,
        objective_id: i64,
        new_status: ObjectiveStatus,
        caller: &Caller,
    ) -> Result<Objective> {
        authorize(caller, ObjectiveAction::UpdateStatus)?;

        let updated = self
            .objective_repository
            .update_status(objective_id, new_status)
            .await?;
        log::info!(
            "Internal objective {} status set to {} by user {}",
            objective_id,
            new_status,
            caller.user_id
        );
        Ok(updated)
    }

    fn objective_templates(&self, caller: &Caller) -> Result<Vec<ObjectiveTemplate>> {
        authorize(caller, ObjectiveAction::ViewTemplates)?;
        Ok(builtin_templates())
    }

    /// Generates and stores the automatic objective set for a managed
    /// artist's booking. Non-managed artists get no objectives.
    async fn generate_automatic_objectives(
        &self,
        booking_id: i64,
        artist_user_id: i64,
        booking_type: &str,
        artist_managed: bool,
        caller: &Caller,
    ) -> Result<Vec<Objective>> {
        authorize(caller, ObjectiveAction::AutoGenerate)?;

        if !artist_managed {
            return Ok(Vec::new());
        }

        log::info!(
            "Generating automatic objectives for booking {} (artist {}, booking type {})",
            booking_id,
            artist_user_id,
            booking_type
        );
        self.objective_repository
            .insert_many(managed_artist_auto_objectives(booking_id, caller.user_id))
            .await
    }

    async fn objectives_report(
        &self,
        booking_id: i64,
        caller: &Caller,
    ) -> Result<ObjectivesReport> {
        authorize(caller, ObjectiveAction::ViewReport)?;

        let objectives = self.objective_repository.list_for_booking(booking_id)?;
        Ok(build_report(&objectives))
    }
}

fn build_report(objectives: &[Objective]) -> ObjectivesReport {
    let total = objectives.len();
    let completed = count_status(objectives, ObjectiveStatus::Completed);
    let in_progress = count_status(objectives, ObjectiveStatus::InProgress);
    let pending = count_status(objectives, ObjectiveStatus::Planning);

    let completion_rate = if total > 0 {
        (completed as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    ObjectivesReport {
        total_objectives: total,
        completed_objectives: completed,
        in_progress_objectives: in_progress,
        pending_objectives: pending,
        completion_rate,
        professional_involvement: ProfessionalInvolvement {
            photographers: count_type(objectives, ObjectiveType::Photography),
            videographers: count_type(objectives, ObjectiveType::Videography),
            marketing_specialists: count_type(objectives, ObjectiveType::Marketing),
            social_media_specialists: count_type(objectives, ObjectiveType::SocialMedia),
        },
        estimated_roi: objectives
            .iter()
            .map(|o| estimated_value(o.objective_type))
            .sum(),
    }
}

fn count_status(objectives: &[Objective], status: ObjectiveStatus) -> usize {
    objectives.iter().filter(|o| o.status == status).count()
}

fn count_type(objectives: &[Objective], objective_type: ObjectiveType) -> usize {
    objectives
        .iter()
        .filter(|o| o.objective_type == objective_type)
        .count()
}

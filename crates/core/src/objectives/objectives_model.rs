//! Objectives domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Category of an internal objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    Marketing,
    Photography,
    Videography,
    SocialMedia,
    Revenue,
    Strategic,
}

impl ObjectiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveType::Marketing => "marketing",
            ObjectiveType::Photography => "photography",
            ObjectiveType::Videography => "videography",
            ObjectiveType::SocialMedia => "social_media",
            ObjectiveType::Revenue => "revenue",
            ObjectiveType::Strategic => "strategic",
        }
    }
}

impl fmt::Display for ObjectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectiveType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "marketing" => Ok(ObjectiveType::Marketing),
            "photography" => Ok(ObjectiveType::Photography),
            "videography" => Ok(ObjectiveType::Videography),
            "social_media" => Ok(ObjectiveType::SocialMedia),
            "revenue" => Ok(ObjectiveType::Revenue),
            "strategic" => Ok(ObjectiveType::Strategic),
            other => Err(ValidationError::InvalidValue(
                "objectiveType".to_string(),
                other.to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(ValidationError::InvalidValue(
                "priority".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Objective lifecycle status. There is no transition table: any status may
/// be set to any other, last-writer-wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveStatus {
    #[default]
    Planning,
    InProgress,
    Completed,
    Cancelled,
}

impl ObjectiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveStatus::Planning => "planning",
            ObjectiveStatus::InProgress => "in_progress",
            ObjectiveStatus::Completed => "completed",
            ObjectiveStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ObjectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectiveStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "planning" => Ok(ObjectiveStatus::Planning),
            "in_progress" => Ok(ObjectiveStatus::InProgress),
            "completed" => Ok(ObjectiveStatus::Completed),
            "cancelled" => Ok(ObjectiveStatus::Cancelled),
            other => Err(ValidationError::InvalidValue(
                "status".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Domain model representing an internal booking objective.
///
/// Objectives are internal planning records attached to a booking. They are
/// confidential: never exposed to the booker role class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: i64,
    pub booking_id: i64,
    pub objective_type: ObjectiveType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: ObjectiveStatus,
    pub target_deadline: Option<NaiveDateTime>,
    pub assigned_to: Option<i64>,
    pub confidential: bool,
    pub created_by: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub tags: Vec<String>,
    pub related_professionals: Vec<i64>,
}

/// Input model for creating a new objective.
///
/// `created_by` and `confidential` are overwritten by the service from the
/// caller identity and the confidentiality invariant; they are accepted here
/// only so that arbitrary client payloads deserialize cleanly.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewObjective {
    pub booking_id: i64,
    pub objective_type: ObjectiveType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub status: ObjectiveStatus,
    #[serde(default)]
    pub target_deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_professionals: Vec<i64>,
    #[serde(default)]
    pub created_by: i64,
    #[serde(default = "default_confidential")]
    pub confidential: bool,
}

fn default_confidential() -> bool {
    true
}

/// A single objective inside a reusable template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateObjective {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_duration: String,
}

/// Reusable objective template, grouped by category. Static, read-only data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveTemplate {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub objectives: Vec<TemplateObjective>,
    pub applicable_artist_types: Vec<String>,
    pub applicable_booking_types: Vec<String>,
}

/// Per-specialty counts used in the objectives report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalInvolvement {
    pub photographers: usize,
    pub videographers: usize,
    pub marketing_specialists: usize,
    pub social_media_specialists: usize,
}

/// Aggregated view of a booking's objectives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectivesReport {
    pub total_objectives: usize,
    pub completed_objectives: usize,
    pub in_progress_objectives: usize,
    pub pending_objectives: usize,
    pub completion_rate: f64,
    pub professional_involvement: ProfessionalInvolvement,
    pub estimated_roi: i64,
}

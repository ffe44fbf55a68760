//! Internal booking objectives - domain models, services, and traits.

mod objectives_catalog;
mod objectives_model;
mod objectives_service;
mod objectives_traits;

pub use objectives_catalog::{
    builtin_templates, estimated_value, managed_artist_auto_objectives, standard_objective_plan,
};
pub use objectives_model::{
    NewObjective, Objective, ObjectiveStatus, ObjectiveTemplate, ObjectiveType, ObjectivesReport,
    Priority, ProfessionalInvolvement, TemplateObjective,
};
pub use objectives_service::ObjectiveService;
pub use objectives_traits::{ObjectiveRepositoryTrait, ObjectiveServiceTrait};

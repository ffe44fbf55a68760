//! SQLite storage implementation for internal booking objectives.

mod model;
mod repository;

pub use model::{NewObjectiveDB, ObjectiveDB};
pub use repository::ObjectiveRepository;

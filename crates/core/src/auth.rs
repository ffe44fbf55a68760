//! Caller identity and the authorization policy for internal objectives.
//!
//! The policy is a single allow-list consulted by both the service layer and
//! the HTTP layer. Role matching is exact and case-sensitive; there is no
//! role hierarchy.

use std::fmt;

use crate::errors::{Error, Result};

/// Roles permitted to read and write internal booking objectives.
/// Objectives are confidential: bookers are deliberately absent.
pub const OBJECTIVE_ROLES: [&str; 5] = [
    "superadmin",
    "admin",
    "managed_artist",
    "managed_musician",
    "managed_professional",
];

/// Roles permitted to view aggregated objectives reports.
pub const REPORT_ROLES: [&str; 2] = ["superadmin", "admin"];

/// Authenticated caller identity, populated by the HTTP layer from the
/// bearer token. Every service operation takes one explicitly; business
/// logic never synthesizes a privileged identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i64,
    pub role: String,
}

/// The operations the policy distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveAction {
    View,
    Create,
    UpdateStatus,
    ViewTemplates,
    AutoGenerate,
    ViewReport,
}

impl fmt::Display for ObjectiveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ObjectiveAction::View => "view internal objectives",
            ObjectiveAction::Create => "create internal booking objectives",
            ObjectiveAction::UpdateStatus => "update internal objectives",
            ObjectiveAction::ViewTemplates => "view objective templates",
            ObjectiveAction::AutoGenerate => "generate automatic objectives",
            ObjectiveAction::ViewReport => "view objectives reports",
        };
        f.write_str(description)
    }
}

/// Whether `role` may perform `action`. Templates are readable by any
/// authenticated caller; reports are restricted to admin roles; everything
/// else requires membership in the objectives allow-list.
pub fn is_permitted(role: &str, action: ObjectiveAction) -> bool {
    match action {
        ObjectiveAction::ViewTemplates => true,
        ObjectiveAction::ViewReport => REPORT_ROLES.contains(&role),
        _ => OBJECTIVE_ROLES.contains(&role),
    }
}

/// Policy check returning `AccessDenied` for callers outside the allow-list.
pub fn authorize(caller: &Caller, action: ObjectiveAction) -> Result<()> {
    if is_permitted(&caller.role, action) {
        Ok(())
    } else {
        Err(Error::AccessDenied(format!(
            "Insufficient permissions to {action}"
        )))
    }
}

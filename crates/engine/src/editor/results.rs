use serde::{Deserialize, Serialize};

/// Outcome of one executed [`super::EditorAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionResult {
    Success,
    /// The editor corrected itself while executing (e.g. the selected zone
    /// had vanished from the collection and the selection was cleared).
    /// Not a failure the user must act on.
    SuccessWithWarning(String),
    Error(ActionError),
}

impl ActionResult {
    /// Returns `true` for both `Success` and `SuccessWithWarning`.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ActionResult::Success | ActionResult::SuccessWithWarning(_)
        )
    }

    /// Extract the warning string if present.
    pub fn warning(&self) -> Option<&str> {
        match self {
            ActionResult::SuccessWithWarning(w) => Some(w.as_str()),
            _ => None,
        }
    }
}

/// Why an action was refused. Gating conditions (`BelowMinimumArea`,
/// `ZoneInactive`) are here too: a well-behaved UI disables those controls,
/// so reaching them means the caller raced the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionError {
    /// The current role may not perform this action.
    RoleNotPermitted,
    /// A session-scoped action arrived with nothing selected.
    NothingSelected,
    /// The update would violate the zone's geometry invariants; the prior
    /// value is retained.
    InvalidGeometry,
    /// The zone is below the minimum viable area and cannot be activated.
    BelowMinimumArea,
    /// Campaigns can only start on active zones.
    ZoneInactive,
    /// The requested duration is not one of the offered plans.
    UnknownPlan,
}

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::zone::{ZoneDimension, ZoneId, ZoneShape};

/// Everything a collaborator can ask the editor to do. Serializable so
/// sessions can be scripted and replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorAction {
    /// Arm (or, with the same shape, disarm) a draw tool. Radio-style
    /// toggle, not a stack.
    ArmDrawTool { shape: ZoneShape },
    /// A click on the map background. Meaning depends on role and state:
    /// places a zone while drawing, otherwise clears the selection.
    MapClick { point: GeoPoint },
    /// Select a zone for editing, or `None` to deselect.
    Select { zone_id: Option<ZoneId> },
    /// Open the inline name editor on the selected zone.
    BeginRename,
    /// Apply a new name and close the inline editor. Empty names are
    /// accepted as-is.
    CommitRename { name: String },
    /// Drag one dimension of the selected zone. Clamped to the editing
    /// range for that dimension; arrives at drag frequency.
    Resize { dimension: ZoneDimension, meters: f64 },
    /// Ask to rent the selected zone for one of the offered duration plans.
    RequestActivation { months: u32 },
    /// Delete the selected zone. No confirmation at this layer.
    DeleteZone,
    /// Advertiser: start a campaign on the selected (active) zone.
    StartCampaign,
}

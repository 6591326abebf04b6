//! The ad-zone entity: geometry sum type, invariants, immutable field
//! updates, and the externally-owned zone collection.
//!
//! The engine never keeps a long-lived reference to a zone — only a
//! [`ZoneId`] that is re-resolved against the [`ZoneRegistry`] on every
//! operation. The registry itself is owned and mutated by the surrounding
//! collaborator (the host application); the engine reads it and requests
//! changes through the events in [`crate::events`].

use std::f64::consts::PI;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DEFAULT_HEIGHT_M, DEFAULT_RADIUS_M, DEFAULT_WIDTH_M};
use crate::events::{
    CampaignStartRequested, PaymentInitiated, ZoneCreateRequested, ZoneDeleteRequested, ZoneUpdated,
};
use crate::geo::{bounds_for, GeoPoint};

// =============================================================================
// Identity and shape discriminators
// =============================================================================

/// Stable zone identifier, assigned once by the collection owner at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u64);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fieldless shape discriminator used by the drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneShape {
    Circle,
    Rectangle,
}

impl ZoneShape {
    /// Human-readable name for logs and UI labels.
    pub fn name(self) -> &'static str {
        match self {
            ZoneShape::Circle => "Circle",
            ZoneShape::Rectangle => "Rectangle",
        }
    }
}

/// One editable dimension of a zone. Which dimensions apply depends on the
/// shape: `Radius` for circles, `Width`/`Height` for rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneDimension {
    Radius,
    Width,
    Height,
}

// =============================================================================
// Geometry
// =============================================================================

/// Zone footprint. A tagged union so that exactly one geometry field-set can
/// exist per zone; the discriminator is fixed for the zone's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoneGeometry {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl ZoneGeometry {
    /// The fieldless discriminator for this geometry.
    pub fn shape(&self) -> ZoneShape {
        match self {
            ZoneGeometry::Circle { .. } => ZoneShape::Circle,
            ZoneGeometry::Rectangle { .. } => ZoneShape::Rectangle,
        }
    }

    /// Footprint area in whole square meters, rounded half-up.
    ///
    /// O(1); safe to call on every frame of a resize drag.
    pub fn area_sqm(&self) -> u32 {
        let raw = match *self {
            ZoneGeometry::Circle { radius } => PI * radius * radius,
            ZoneGeometry::Rectangle { width, height } => width * height,
        };
        raw.round() as u32
    }

    /// Check the positivity/finiteness invariant on all dimensions.
    pub fn validate(&self) -> Result<(), ZoneError> {
        fn positive(value: f64, what: &'static str) -> Result<(), ZoneError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ZoneError::InvalidGeometry(what))
            }
        }
        match *self {
            ZoneGeometry::Circle { radius } => positive(radius, "radius must be positive"),
            ZoneGeometry::Rectangle { width, height } => {
                positive(width, "width must be positive")?;
                positive(height, "height must be positive")
            }
        }
    }
}

/// Model-level validation error. The editor decides whether it blocks a
/// transition or is absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("invalid zone geometry: {0}")]
    InvalidGeometry(&'static str),
}

/// Area viability gate: `true` once the area reaches the configured floor.
pub fn is_viable_area(area_sqm: u32, min_area_sqm: u32) -> bool {
    area_sqm >= min_area_sqm
}

// =============================================================================
// AdZone
// =============================================================================

/// A single field replacement for [`AdZone::with_field`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZoneField {
    Name(String),
    Radius(f64),
    Width(f64),
    Height(f64),
}

impl ZoneField {
    /// Build a dimension update from its discriminator and a value in meters.
    pub fn dimension(dimension: ZoneDimension, meters: f64) -> Self {
        match dimension {
            ZoneDimension::Radius => ZoneField::Radius(meters),
            ZoneDimension::Width => ZoneField::Width(meters),
            ZoneDimension::Height => ZoneField::Height(meters),
        }
    }
}

/// A geographically anchored advertising zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdZone {
    pub id: ZoneId,
    pub name: String,
    pub center: GeoPoint,
    pub geometry: ZoneGeometry,
    /// Flipped by the payment collaborator on confirmed payment; the engine
    /// only reads it.
    pub is_active: bool,
    /// Advertiser-facing CPM rate, set externally. Unrelated to the
    /// owner-facing area × rate × months quote.
    pub price_per_1k: f64,
}

impl AdZone {
    /// The zone a draw-tool click places: default-sized for its shape,
    /// inactive, with no CPM rate yet.
    pub fn new_at(id: ZoneId, center: GeoPoint, shape: ZoneShape) -> Self {
        let geometry = match shape {
            ZoneShape::Circle => ZoneGeometry::Circle {
                radius: DEFAULT_RADIUS_M,
            },
            ZoneShape::Rectangle => ZoneGeometry::Rectangle {
                width: DEFAULT_WIDTH_M,
                height: DEFAULT_HEIGHT_M,
            },
        };
        Self {
            id,
            name: format!("Zone {id}"),
            center,
            geometry,
            is_active: false,
            price_per_1k: 0.0,
        }
    }

    pub fn shape(&self) -> ZoneShape {
        self.geometry.shape()
    }

    pub fn area_sqm(&self) -> u32 {
        self.geometry.area_sqm()
    }

    /// Axis-aligned lat/lng bounds of the footprint (circles use their
    /// bounding square). For rendering collaborators.
    pub fn bounds(&self) -> (GeoPoint, GeoPoint) {
        match self.geometry {
            ZoneGeometry::Circle { radius } => bounds_for(self.center, radius * 2.0, radius * 2.0),
            ZoneGeometry::Rectangle { width, height } => bounds_for(self.center, width, height),
        }
    }

    /// Return a copy of this zone with one field replaced, re-validated.
    ///
    /// A dimension that does not belong to the zone's shape, or a
    /// non-positive value, is refused; the input zone is untouched either
    /// way. Range clamping is the editor's concern, not the model's.
    pub fn with_field(&self, field: ZoneField) -> Result<AdZone, ZoneError> {
        let mut updated = self.clone();
        let geometry = match (field, updated.geometry) {
            (ZoneField::Name(name), _) => {
                updated.name = name;
                return Ok(updated);
            }
            (ZoneField::Radius(radius), ZoneGeometry::Circle { .. }) => {
                ZoneGeometry::Circle { radius }
            }
            (ZoneField::Width(width), ZoneGeometry::Rectangle { height, .. }) => {
                ZoneGeometry::Rectangle { width, height }
            }
            (ZoneField::Height(height), ZoneGeometry::Rectangle { width, .. }) => {
                ZoneGeometry::Rectangle { width, height }
            }
            _ => return Err(ZoneError::InvalidGeometry("field does not match shape")),
        };
        geometry.validate()?;
        updated.geometry = geometry;
        Ok(updated)
    }
}

// =============================================================================
// ZoneRegistry resource
// =============================================================================

/// The ordered zone collection. Owned and mutated by the host collaborator;
/// the engine treats it as read-mostly and re-resolves ids against it on
/// every operation.
#[derive(Resource, Debug, Clone, Default)]
pub struct ZoneRegistry {
    zones: Vec<AdZone>,
}

impl ZoneRegistry {
    /// Insert a zone, or replace the existing zone with the same id in place.
    pub fn upsert(&mut self, zone: AdZone) {
        match self.zones.iter_mut().find(|z| z.id == zone.id) {
            Some(existing) => *existing = zone,
            None => self.zones.push(zone),
        }
    }

    /// Remove a zone by id, returning it if present.
    pub fn remove(&mut self, id: ZoneId) -> Option<AdZone> {
        let idx = self.zones.iter().position(|z| z.id == id)?;
        Some(self.zones.remove(idx))
    }

    pub fn get(&self, id: ZoneId) -> Option<&AdZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn get_mut(&mut self, id: ZoneId) -> Option<&mut AdZone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    pub fn contains(&self, id: ZoneId) -> bool {
        self.get(id).is_some()
    }

    /// Zones in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AdZone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

// =============================================================================
// Plugin
// =============================================================================

/// Registers the zone collection and the engine's outbound contract events.
pub struct ZonesPlugin;

impl Plugin for ZonesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ZoneRegistry>()
            .add_event::<ZoneCreateRequested>()
            .add_event::<ZoneUpdated>()
            .add_event::<ZoneDeleteRequested>()
            .add_event::<PaymentInitiated>()
            .add_event::<CampaignStartRequested>();
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Reference host for the zone engine: owns the zone collection, applies
//! the engine's side-effect events, confirms payments, and records started
//! campaigns. Everything the engine treats as "the external collaborator"
//! lives here.

pub mod host;
pub mod seed;

pub use host::HostPlugin;

//! Client record — the mutable onboarding aggregate.
//!
//! One record exists per session. The wizard mutates it field by field via
//! typed updates, the entity registry keeps the client's structures in
//! insertion order, and the summary/submission collaborators only ever read
//! snapshots of it.

pub mod model;
pub mod update;

pub use model::{ClientRecord, Entity, EntityKind, INCOME_SOURCES, ResidencyStatus};
pub use update::{EntityUpdate, RecordUpdate};

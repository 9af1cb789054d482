//! Client record model — the onboarding aggregate and its entity list.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Income-source checklist labels, in display order. The checklist always
/// offers all four regardless of other record state.
pub const INCOME_SOURCES: [&str; 4] = [
    "Bank Interest",
    "Share Dividends",
    "Rental Property",
    "ABN / Side Business",
];

/// Australian tax residency categories recognised by the intake flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResidencyStatus {
    Resident,
    NonResident,
    WorkingHolidayMaker,
}

impl Default for ResidencyStatus {
    fn default() -> Self {
        Self::Resident
    }
}

/// The structure types a client can attach to their file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Company,
    Trust,
    Smsf,
    Partnership,
}

impl Default for EntityKind {
    fn default() -> Self {
        Self::Company
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Company => write!(f, "company"),
            Self::Trust => write!(f, "trust"),
            Self::Smsf => write!(f, "smsf"),
            Self::Partnership => write!(f, "partnership"),
        }
    }
}

/// A business or investment structure attached to the client record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Unique identifier assigned at creation, stable for the entity's
    /// lifetime, never reused.
    pub id: Uuid,
    /// Structure type. Serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub name: String,
    /// ABN (or TFN) of the structure.
    pub registration_number: String,
    /// What the structure does, in the client's words.
    pub activity: String,
}

impl Entity {
    /// Create a blank entity with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: EntityKind::default(),
            name: String::new(),
            registration_number: String::new(),
            activity: String::new(),
        }
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

/// The full onboarding record for one client session.
///
/// Mutated field by field as the user moves through the wizard, in any
/// order. Conditional fields (`spouse_name`, `spouse_doing_return`,
/// `entities`, `medicare_number`) keep whatever value they last held when
/// their governing flag is toggled off; consumers must treat them as inert
/// whenever the flag is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    // Identity
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub has_spouse: bool,
    pub spouse_name: String,
    pub spouse_doing_return: bool,

    // Entities
    pub has_entities: bool,
    pub entities: Vec<Entity>,

    // Tax profile. TFN length is a display convention, not enforced here.
    pub tfn: String,
    pub residency_status: ResidencyStatus,
    pub has_medicare_card: bool,
    pub medicare_number: String,

    // Income
    pub annual_salary: f64,
    pub has_interest_income: bool,
    pub has_dividends: bool,
    pub has_rental_property: bool,
    pub has_side_business: bool,

    // Wealth & goals
    pub super_balance: f64,
    pub total_assets: f64,
    pub total_debts: f64,
    pub primary_goal: String,
}

impl Default for ClientRecord {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            dob: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            has_spouse: false,
            spouse_name: String::new(),
            spouse_doing_return: false,
            has_entities: false,
            entities: Vec::new(),
            tfn: String::new(),
            residency_status: ResidencyStatus::default(),
            has_medicare_card: false,
            medicare_number: String::new(),
            annual_salary: 0.0,
            has_interest_income: false,
            has_dividends: false,
            has_rental_property: false,
            has_side_business: false,
            super_balance: 0.0,
            total_assets: 0.0,
            total_debts: 0.0,
            primary_goal: String::new(),
        }
    }
}

// ── Entity registry ─────────────────────────────────────────────────────

impl ClientRecord {
    /// Append a blank entity with a fresh id and return a copy of it.
    /// Always succeeds; insertion order is the display order.
    pub fn add_entity(&mut self) -> Entity {
        let entity = Entity::new();
        self.entities.push(entity.clone());
        debug!(entity_id = %entity.id, count = self.entities.len(), "Entity added");
        entity
    }

    /// Remove the entity with the given id. Returns false (and leaves the
    /// list untouched) when no entity matches — stale ids from a UI that
    /// raced a removal are not an error.
    pub fn remove_entity(&mut self, id: Uuid) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| e.id != id);
        let removed = self.entities.len() < before;
        if !removed {
            debug!(entity_id = %id, "Remove ignored: no such entity");
        }
        removed
    }

    /// Mutable handle to an entity by id, if present. Position in the list
    /// is never affected by lookups.
    pub fn entity_mut(&mut self, id: Uuid) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }
}

//! Typed field updates — how the presentation layer mutates the record.
//!
//! Each update names exactly one field and carries its new value, so a
//! change arrives as `{"field": "firstName", "value": "Alice"}` on the
//! wire. Tag values match the record's camelCase serialization.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::model::{ClientRecord, EntityKind, ResidencyStatus};

/// A single-field change to the client record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum RecordUpdate {
    FirstName(String),
    LastName(String),
    Dob(String),
    Email(String),
    Phone(String),
    Address(String),
    HasSpouse(bool),
    SpouseName(String),
    SpouseDoingReturn(bool),
    HasEntities(bool),
    Tfn(String),
    ResidencyStatus(ResidencyStatus),
    HasMedicareCard(bool),
    MedicareNumber(String),
    AnnualSalary(f64),
    HasInterestIncome(bool),
    HasDividends(bool),
    HasRentalProperty(bool),
    HasSideBusiness(bool),
    SuperBalance(f64),
    TotalAssets(f64),
    TotalDebts(f64),
    PrimaryGoal(String),
}

/// A single-field change to one entity in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EntityUpdate {
    #[serde(rename = "type")]
    Kind(EntityKind),
    Name(String),
    RegistrationNumber(String),
    Activity(String),
}

impl ClientRecord {
    /// Apply one field update. Toggling a governing flag off never clears
    /// the fields it governs; they simply go inert.
    pub fn apply(&mut self, update: RecordUpdate) {
        match update {
            RecordUpdate::FirstName(v) => self.first_name = v,
            RecordUpdate::LastName(v) => self.last_name = v,
            RecordUpdate::Dob(v) => self.dob = v,
            RecordUpdate::Email(v) => self.email = v,
            RecordUpdate::Phone(v) => self.phone = v,
            RecordUpdate::Address(v) => self.address = v,
            RecordUpdate::HasSpouse(v) => self.has_spouse = v,
            RecordUpdate::SpouseName(v) => self.spouse_name = v,
            RecordUpdate::SpouseDoingReturn(v) => self.spouse_doing_return = v,
            RecordUpdate::HasEntities(v) => self.has_entities = v,
            RecordUpdate::Tfn(v) => self.tfn = v,
            RecordUpdate::ResidencyStatus(v) => self.residency_status = v,
            RecordUpdate::HasMedicareCard(v) => self.has_medicare_card = v,
            RecordUpdate::MedicareNumber(v) => self.medicare_number = v,
            RecordUpdate::AnnualSalary(v) => self.annual_salary = v,
            RecordUpdate::HasInterestIncome(v) => self.has_interest_income = v,
            RecordUpdate::HasDividends(v) => self.has_dividends = v,
            RecordUpdate::HasRentalProperty(v) => self.has_rental_property = v,
            RecordUpdate::HasSideBusiness(v) => self.has_side_business = v,
            RecordUpdate::SuperBalance(v) => self.super_balance = v,
            RecordUpdate::TotalAssets(v) => self.total_assets = v,
            RecordUpdate::TotalDebts(v) => self.total_debts = v,
            RecordUpdate::PrimaryGoal(v) => self.primary_goal = v,
        }
    }

    /// Replace exactly one field of the entity with the given id, leaving
    /// its position untouched. Returns false (no-op) when the id matches
    /// nothing.
    pub fn update_entity(&mut self, id: Uuid, update: EntityUpdate) -> bool {
        let Some(entity) = self.entity_mut(id) else {
            debug!(entity_id = %id, "Entity update ignored: no such entity");
            return false;
        };
        match update {
            EntityUpdate::Kind(v) => entity.kind = v,
            EntityUpdate::Name(v) => entity.name = v,
            EntityUpdate::RegistrationNumber(v) => entity.registration_number = v,
            EntityUpdate::Activity(v) => entity.activity = v,
        }
        true
    }
}

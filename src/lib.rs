//! Intake Portal — guided client onboarding for a private wealth practice.

pub mod config;
pub mod error;
pub mod record;
pub mod submit;
pub mod summary;
pub mod wizard;

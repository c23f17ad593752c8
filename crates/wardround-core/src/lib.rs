//! Wardround Core - quiz domain engine
//!
//! This crate provides the domain logic for the Wardround treatment quiz:
//! - Catalog: fixed disorder/symptom/medication data and random selection
//! - Picker: pluggable randomness source (deterministic in tests)
//! - Store: in-memory patient ward with one-shot treatment evaluation

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod picker;
pub mod store;

pub use catalog::{Catalog, DisorderRecord, SYMPTOMS_PER_PATIENT};
pub use error::{Error, Result};
pub use picker::{Picker, RngPicker, ScriptedPicker};
pub use store::{AdmittedPatient, PatientStore, Verdict};

//! In-memory patient ward.
//!
//! Admits virtual patients and evaluates exactly one treatment per
//! patient. The ward is the only shared mutable state in the system.


use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::catalog::{Catalog, DisorderRecord, SYMPTOMS_PER_PATIENT};
use crate::error::{Error, Result};
use crate::picker::Picker;

/// A freshly admitted virtual patient, ready to present to the player.
#[derive(Debug, Clone)]
pub struct AdmittedPatient {
    /// Sequential patient id, unique for the process lifetime
    pub id: u64,
    /// Cosmetic display name, carries no game-state meaning
    pub display_name: &'static str,
    /// Three distinct symptoms of the assigned disorder
    pub symptoms: Vec<&'static str>,
    /// All selectable medications, first-seen order
    pub medication_options: Vec<&'static str>,
}

/// Outcome of a treatment evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the chosen medication matched the recommendation
    pub correct: bool,
    /// The recommended medication for the assigned disorder
    pub recommended: &'static str,
    /// Human-readable feedback for the player
    pub message: String,
}

struct Inner {
    next_id: u64,
    patients: HashMap<u64, &'static DisorderRecord>,
}

/// In-memory ward keyed by patient id.
///
/// One instance per process, shared with request handlers. Ids start at 1,
/// strictly increase and are never reused, even after a patient is
/// removed. The single mutex makes [`treat`](Self::treat) an atomic
/// take-and-remove: of two concurrent evaluations of the same id, exactly
/// one observes the patient and the other gets
/// [`Error::UnknownPatient`].
pub struct PatientStore {
    catalog: Catalog,
    inner: Mutex<Inner>,
}

impl PatientStore {
    /// Create an empty ward over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            inner: Mutex::new(Inner {
                next_id: 1,
                patients: HashMap::new(),
            }),
        }
    }

    /// The catalog this ward draws patients from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Admit a new patient: pick a disorder, allocate the next id and
    /// remember the assignment for the eventual treatment evaluation.
    pub fn admit(&self, picker: &mut dyn Picker) -> AdmittedPatient {
        let disorder = self.catalog.pick_disorder(picker);
        let display_name = self.catalog.pick_display_name(picker);
        let symptoms = self
            .catalog
            .pick_symptoms(disorder, picker, SYMPTOMS_PER_PATIENT);

        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.patients.insert(id, disorder);
        drop(inner);

        debug!(id, disorder = disorder.name, "admitted patient");

        AdmittedPatient {
            id,
            display_name,
            symptoms,
            medication_options: self.catalog.medications().to_vec(),
        }
    }

    /// Evaluate a treatment choice for patient `id`.
    ///
    /// One-shot: the patient is removed from the ward whether or not the
    /// choice was correct, so a second call with the same id fails with
    /// [`Error::UnknownPatient`]. The chosen medication is compared to the
    /// recommendation case-insensitively after trimming surrounding
    /// whitespace; internal whitespace is significant. An absent or empty
    /// choice is simply incorrect, not an error.
    pub fn treat(&self, id: u64, chosen: Option<&str>) -> Result<Verdict> {
        let disorder = self
            .lock()
            .patients
            .remove(&id)
            .ok_or(Error::UnknownPatient(id))?;

        let recommended = disorder.medication;
        let correct = chosen
            .map(|m| m.trim().to_lowercase() == recommended.to_lowercase())
            .unwrap_or(false);

        let message = if correct {
            format!(
                "You chose the recommended treatment (\"{recommended}\"). \
                 The patient reports improvement!"
            )
        } else {
            format!(
                "The recommended treatment was \"{recommended}\". \
                 Your choice \"{}\" was not ideal.",
                chosen.unwrap_or_default()
            )
        };

        debug!(id, correct, "treated patient");

        Ok(Verdict {
            correct,
            recommended,
            message,
        })
    }

    /// Number of admitted patients still awaiting treatment.
    pub fn waiting(&self) -> usize {
        self.lock().patients.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Inner is only ever mutated in single steps; absorb poisoning.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

//! Static disorder catalog.
//!
//! Holds the fixed domain data — disorders with their symptoms and
//! recommended medications, plus generic patient display names — and the
//! random selection helpers built on top of it. The data is deliberately
//! simplified and fictionalized.

#[cfg(test)]
mod tests;

use crate::picker::Picker;

/// Number of symptoms presented per patient.
pub const SYMPTOMS_PER_PATIENT: usize = 3;

/// One entry of the domain data: a disorder, its observable symptoms and
/// the single recommended treatment.
#[derive(Debug, PartialEq, Eq)]
pub struct DisorderRecord {
    /// Disorder name, unique within the catalog
    pub name: &'static str,
    /// Observable symptoms; at least [`SYMPTOMS_PER_PATIENT`] distinct entries
    pub symptoms: &'static [&'static str],
    /// Recommended medication
    pub medication: &'static str,
}

const DISORDERS: &[DisorderRecord] = &[
    DisorderRecord {
        name: "Bipolar Disorder",
        symptoms: &[
            "mood swings",
            "periods of high energy",
            "feelings of sadness",
            "irritability",
            "difficulty sleeping",
        ],
        medication: "Mood Stabilizer",
    },
    DisorderRecord {
        name: "Depression",
        symptoms: &[
            "persistent sadness",
            "loss of interest",
            "fatigue",
            "feelings of guilt",
            "changes in appetite",
        ],
        medication: "Antidepressant",
    },
    DisorderRecord {
        name: "Anxiety Disorder",
        symptoms: &[
            "excessive worry",
            "restlessness",
            "muscle tension",
            "irritability",
            "difficulty concentrating",
        ],
        medication: "Anxiolytic",
    },
    DisorderRecord {
        name: "Schizophrenia",
        symptoms: &[
            "hallucinations",
            "delusions",
            "disorganized thinking",
            "social withdrawal",
            "flat affect",
        ],
        medication: "Antipsychotic",
    },
    DisorderRecord {
        name: "Attention-Deficit/Hyperactivity Disorder",
        symptoms: &[
            "difficulty paying attention",
            "hyperactivity",
            "impulsivity",
            "forgetfulness",
            "fidgeting",
        ],
        medication: "Stimulant",
    },
    DisorderRecord {
        name: "Obsessive-Compulsive Disorder",
        symptoms: &[
            "obsessive thoughts",
            "compulsive behaviors",
            "need for symmetry",
            "fear of contamination",
            "repetitive rituals",
        ],
        medication: "Serotonin Reuptake Inhibitor",
    },
    DisorderRecord {
        name: "Post-Traumatic Stress Disorder",
        symptoms: &[
            "flashbacks",
            "nightmares",
            "avoidance",
            "hypervigilance",
            "emotional numbness",
        ],
        medication: "Trauma-Focused Therapy",
    },
];

/// Generic names used to label virtual patients. Cosmetic only.
const PATIENT_NAMES: &[&str] = &[
    "Alex", "Taylor", "Jordan", "Casey", "Morgan", "Riley", "Jamie", "Sydney", "Bailey", "Cameron",
];

/// Immutable domain catalog: disorder records, patient names and the
/// derived deduplicated medication list.
#[derive(Debug)]
pub struct Catalog {
    disorders: &'static [DisorderRecord],
    names: &'static [&'static str],
    medications: Vec<&'static str>,
}

impl Catalog {
    /// Build the catalog from the built-in domain data.
    pub fn builtin() -> Self {
        Self::from_records(DISORDERS, PATIENT_NAMES)
    }

    fn from_records(
        disorders: &'static [DisorderRecord],
        names: &'static [&'static str],
    ) -> Self {
        debug_assert!(!disorders.is_empty());
        debug_assert!(!names.is_empty());
        debug_assert!(disorders
            .iter()
            .all(|d| distinct_count(d.symptoms) >= SYMPTOMS_PER_PATIENT));

        // Medication options keep first-seen order so the client's
        // drop-down is stable across restarts.
        let mut medications = Vec::with_capacity(disorders.len());
        for disorder in disorders {
            if !medications.contains(&disorder.medication) {
                medications.push(disorder.medication);
            }
        }
        Self {
            disorders,
            names,
            medications,
        }
    }

    /// All disorder records.
    pub fn disorders(&self) -> &'static [DisorderRecord] {
        self.disorders
    }

    /// Distinct medication names across all disorders, first-seen order.
    pub fn medications(&self) -> &[&'static str] {
        &self.medications
    }

    /// Pick one disorder uniformly at random.
    pub fn pick_disorder(&self, picker: &mut dyn Picker) -> &'static DisorderRecord {
        &self.disorders[picker.pick_index(self.disorders.len())]
    }

    /// Pick a patient display name uniformly at random.
    pub fn pick_display_name(&self, picker: &mut dyn Picker) -> &'static str {
        self.names[picker.pick_index(self.names.len())]
    }

    /// Draw `count` distinct symptoms from `disorder`, uniformly at random
    /// with rejection of repeats.
    ///
    /// # Panics
    ///
    /// Panics if `disorder` has fewer than `count` distinct symptoms. The
    /// built-in data guarantees at least [`SYMPTOMS_PER_PATIENT`], so this
    /// is a programmer error, not a runtime condition.
    pub fn pick_symptoms(
        &self,
        disorder: &DisorderRecord,
        picker: &mut dyn Picker,
        count: usize,
    ) -> Vec<&'static str> {
        assert!(
            distinct_count(disorder.symptoms) >= count,
            "disorder {:?} has fewer than {} distinct symptoms",
            disorder.name,
            count
        );
        let mut chosen = Vec::with_capacity(count);
        while chosen.len() < count {
            let symptom = disorder.symptoms[picker.pick_index(disorder.symptoms.len())];
            if !chosen.contains(&symptom) {
                chosen.push(symptom);
            }
        }
        chosen
    }
}

fn distinct_count(items: &[&str]) -> usize {
    let mut seen: Vec<&str> = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(item) {
            seen.push(item);
        }
    }
    seen.len()
}

use serde::{Deserialize, Serialize};
use wardround_core::{AdmittedPatient, Verdict};

/// A newly admitted patient, as presented to the client.
#[derive(Debug, Serialize)]
pub struct PatientResponse {
    /// Patient id to submit back with the treatment
    pub id: u64,
    /// Cosmetic display name
    pub name: String,
    /// Three distinct symptoms of the assigned disorder
    pub symptoms: Vec<String>,
    /// All selectable medications for the drop-down
    #[serde(rename = "medicationOptions")]
    pub medication_options: Vec<String>,
}

impl From<AdmittedPatient> for PatientResponse {
    fn from(patient: AdmittedPatient) -> Self {
        Self {
            id: patient.id,
            name: patient.display_name.to_string(),
            symptoms: patient.symptoms.iter().map(|s| s.to_string()).collect(),
            medication_options: patient
                .medication_options
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// Treatment submission.
#[derive(Debug, Deserialize)]
pub struct TreatRequest {
    /// Patient id from a previous `/patient` response
    pub id: u64,
    /// Chosen medication; absent or empty counts as an incorrect answer
    #[serde(default)]
    pub medication: Option<String>,
}

/// Verdict returned for a treatment submission.
#[derive(Debug, Serialize)]
pub struct TreatResponse {
    /// Whether the choice matched the recommendation
    pub correct: bool,
    /// Feedback message for the player
    pub message: String,
    /// The recommended medication
    pub recommended: String,
}

impl From<Verdict> for TreatResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            correct: verdict.correct,
            message: verdict.message,
            recommended: verdict.recommended.to_string(),
        }
    }
}

/// Client-error body for unknown patient ids.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Description of the rejection
    pub error: String,
}

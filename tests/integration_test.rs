//! Integration tests for Wardround
//!
//! These tests drive full generate/evaluate cycles through the
//! wardround-core crate, the way the HTTP handlers do.

use std::sync::Arc;

use wardround_core::{Catalog, Error, PatientStore, RngPicker, ScriptedPicker};

#[test]
fn full_game_round_with_a_correct_answer() {
    let store = PatientStore::new(Catalog::builtin());
    // Pin the disorder to Depression and the symptoms to indices 0, 1, 2.
    let mut picker = ScriptedPicker::new(vec![1, 3, 0, 1, 2]);

    let patient = store.admit(&mut picker);
    assert_eq!(patient.id, 1);
    assert_eq!(patient.display_name, "Casey");
    assert_eq!(
        patient.symptoms,
        vec!["persistent sadness", "loss of interest", "fatigue"]
    );
    assert!(patient.medication_options.contains(&"Antidepressant"));

    let verdict = store.treat(patient.id, Some("Antidepressant")).unwrap();
    assert!(verdict.correct);
    assert_eq!(verdict.recommended, "Antidepressant");
}

#[test]
fn many_rounds_issue_unique_increasing_ids() {
    let store = PatientStore::new(Catalog::builtin());
    let mut picker = RngPicker;

    let mut last_id = 0;
    for round in 0..100 {
        let patient = store.admit(&mut picker);
        assert!(patient.id > last_id);
        last_id = patient.id;

        // Treat every other patient; the rest stay in the ward.
        if round % 2 == 0 {
            let verdict = store.treat(patient.id, Some("Anxiolytic")).unwrap();
            assert!(verdict.message.contains(verdict.recommended));
        }
    }
    assert_eq!(store.waiting(), 50);
}

#[test]
fn consumed_patients_stay_consumed_across_threads() {
    let store = Arc::new(PatientStore::new(Catalog::builtin()));
    let mut picker = RngPicker;

    let ids: Vec<u64> = (0..16).map(|_| store.admit(&mut picker).id).collect();

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let store = store.clone();
            std::thread::spawn(move || store.treat(id, Some("Stimulant")))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    assert_eq!(store.waiting(), 0);
    for id in ids {
        assert_eq!(
            store.treat(id, Some("Stimulant")),
            Err(Error::UnknownPatient(id))
        );
    }
}

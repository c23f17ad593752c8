use super::*;
use crate::picker::ScriptedPicker;

#[test]
fn every_disorder_has_enough_distinct_symptoms() {
    let catalog = Catalog::builtin();
    for disorder in catalog.disorders() {
        assert!(
            distinct_count(disorder.symptoms) >= SYMPTOMS_PER_PATIENT,
            "{} has too few distinct symptoms",
            disorder.name
        );
    }
}

#[test]
fn disorder_names_are_unique() {
    let catalog = Catalog::builtin();
    let names: Vec<_> = catalog.disorders().iter().map(|d| d.name).collect();
    for (i, name) in names.iter().enumerate() {
        assert!(!names[i + 1..].contains(name), "duplicate disorder {name}");
    }
}

#[test]
fn medications_are_deduplicated_and_cover_all_disorders() {
    let catalog = Catalog::builtin();
    let medications = catalog.medications();

    assert!(medications.len() <= catalog.disorders().len());
    for (i, med) in medications.iter().enumerate() {
        assert!(!medications[i + 1..].contains(med), "duplicate option {med}");
    }
    for disorder in catalog.disorders() {
        assert!(medications.contains(&disorder.medication));
    }
}

#[test]
fn medications_keep_first_seen_order() {
    let catalog = Catalog::builtin();
    let first_seen: Vec<_> = catalog.disorders().iter().map(|d| d.medication).collect();
    // Built-in data has no duplicate medications, so the derived list
    // matches the record order exactly.
    assert_eq!(catalog.medications(), &first_seen[..]);
}

#[test]
fn pick_disorder_follows_the_picker() {
    let catalog = Catalog::builtin();
    let mut picker = ScriptedPicker::new(vec![1]);
    let disorder = catalog.pick_disorder(&mut picker);
    assert_eq!(disorder.name, "Depression");
}

#[test]
fn pick_display_name_follows_the_picker() {
    let catalog = Catalog::builtin();
    let mut picker = ScriptedPicker::new(vec![0, 9]);
    assert_eq!(catalog.pick_display_name(&mut picker), "Alex");
    assert_eq!(catalog.pick_display_name(&mut picker), "Cameron");
}

#[test]
fn pick_symptoms_rejects_repeats() {
    let catalog = Catalog::builtin();
    let disorder = &catalog.disorders()[0];
    // Index 2 repeats twice; the rejection loop must skip the duplicate
    // and move on to indices 0 and 4.
    let mut picker = ScriptedPicker::new(vec![2, 2, 0, 4]);
    let symptoms = catalog.pick_symptoms(disorder, &mut picker, SYMPTOMS_PER_PATIENT);

    assert_eq!(
        symptoms,
        vec![
            "feelings of sadness",
            "mood swings",
            "difficulty sleeping"
        ]
    );
}

#[test]
fn pick_symptoms_returns_distinct_entries_from_the_disorder() {
    let catalog = Catalog::builtin();
    let mut picker = ScriptedPicker::new(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    for disorder in catalog.disorders() {
        let symptoms = catalog.pick_symptoms(disorder, &mut picker, SYMPTOMS_PER_PATIENT);
        assert_eq!(symptoms.len(), SYMPTOMS_PER_PATIENT);
        for (i, symptom) in symptoms.iter().enumerate() {
            assert!(disorder.symptoms.contains(symptom));
            assert!(!symptoms[i + 1..].contains(symptom));
        }
    }
}

#[test]
#[should_panic(expected = "fewer than")]
fn pick_symptoms_panics_when_asked_for_too_many() {
    let catalog = Catalog::builtin();
    let disorder = &catalog.disorders()[0];
    let mut picker = ScriptedPicker::new(vec![0]);
    catalog.pick_symptoms(disorder, &mut picker, disorder.symptoms.len() + 1);
}

//! Demo data for previews and the demo core.

use chrono::{Duration, Utc};

use crate::history::RecentAnalyses;
use crate::models::{DiagnosisStatus, DiagnosisSummary, PetProfile, VitalKind, VitalReading};

/// The three sample pets.
pub fn demo_pets() -> Vec<PetProfile> {
    [
        ("Luna", "Canine", 4, "18", "Seasonal pollen", "Responds well to inhaler therapy."),
        ("Atlas", "Feline", 7, "6", "Chicken", "Prefers pill pockets for medication."),
        ("Nova", "Canine", 2, "22", "None", "High energy, monitor post-op activity."),
    ]
    .into_iter()
    .map(|(name, species, age, weight, allergies, notes)| {
        let mut pet = PetProfile::new(name, species, age);
        pet.weight = Some(weight.into());
        pet.allergies = allergies.into();
        pet.notes = Some(notes.into());
        pet
    })
    .collect()
}

/// Sample recent analyses, most recent first.
pub fn demo_recent_analyses() -> RecentAnalyses {
    let now = Utc::now();
    let mut history = RecentAnalyses::new();
    let samples = [
        (
            "Nova",
            "Elevated temperature trending upward; watch closely.",
            DiagnosisStatus::Urgent,
            ["Re-run vitals in clinic", "Consider anti-inflammatory protocol"],
            now - Duration::hours(26),
        ),
        (
            "Atlas",
            "Mild GI distress detected from symptom clustering.",
            DiagnosisStatus::Monitor,
            ["Recommend bland diet for 24 hours", "Flag recurrence for deeper scan"],
            now - Duration::hours(1),
        ),
        (
            "Luna",
            "Respiratory rate normalized after bronchodilator therapy.",
            DiagnosisStatus::Stable,
            ["Continue monitoring at-home inhaler usage", "Schedule follow-up in 48 hours"],
            now - Duration::minutes(20),
        ),
    ];

    // Oldest first so the newest ends up at the front.
    for (pet, brief, status, notes, at) in samples {
        history.record(DiagnosisSummary::recorded_at(
            pet.into(),
            brief.into(),
            status,
            notes.iter().map(|n| n.to_string()).collect(),
            at,
        ));
    }
    history
}

/// The wearable stream sample shown on the Vitals stage.
pub fn demo_vitals(species: &str) -> Vec<VitalReading> {
    vec![
        VitalReading::measure(VitalKind::HeartRate, 92.0, species),
        VitalReading::measure(VitalKind::Respiration, 26.0, species),
        VitalReading::measure(VitalKind::Temperature, 102.1, species),
    ]
}

//! End-to-end behavior of the questionnaire pipeline through the public API.

use hair_profile::analysis::domain::{
    Density, Elasticity, HairType, MaintenanceLevel, Porosity, ProductCompatibility,
    QuestionnaireAnswers, ScalpCondition, Thickness,
};
use hair_profile::analysis::engine::{score_labels, HairAnalysisEngine};
use hair_profile::analysis::{analyze, import_answers_csv, ProfileInsights};

fn coily_answers() -> QuestionnaireAnswers {
    [
        ("pattern", "coily"),
        ("curl_diameter", "4b"),
        ("float_test", "high_porosity_confirmed"),
        ("density", "high_density"),
        ("thickness", "coarse"),
        ("elasticity", "low_elasticity"),
        ("scalp_condition", "dry_scalp"),
        ("product_buildup", "buildup_prone"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn coily_walkthrough_produces_high_maintenance_profile() {
    let result = analyze(&coily_answers());

    assert_eq!(result.hair_type, HairType::Type4B);
    assert_eq!(result.porosity, Porosity::High);
    assert_eq!(result.density, Density::High);
    assert_eq!(result.thickness, Thickness::Coarse);
    assert_eq!(result.elasticity, Elasticity::Low);
    assert_eq!(result.scalp_condition, ScalpCondition::Dry);
    assert_eq!(
        result.product_compatibility,
        ProductCompatibility::BuildupProne
    );
    assert_eq!(result.maintenance_level, MaintenanceLevel::High);

    assert!(result
        .recommended_products
        .iter()
        .any(|entry| entry == "Protein treatment"));
    assert!(!result.recommended_routine.is_empty());
    assert!(result
        .care_instructions
        .iter()
        .any(|entry| entry.contains("protective styling")));
    assert!(result
        .care_instructions
        .iter()
        .any(|entry| entry.starts_with("Minimize heat styling")));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let engine = HairAnalysisEngine::new();
    let first = serde_json::to_vec(&engine.analyze(&coily_answers())).expect("serialize");
    let second = serde_json::to_vec(&engine.analyze(&coily_answers())).expect("serialize");
    assert_eq!(first, second);
}

#[test]
fn empty_questionnaire_degrades_to_defaults() {
    let result = analyze(&QuestionnaireAnswers::new());

    assert_eq!(result.hair_type, HairType::Type3B);
    assert_eq!(result.porosity, Porosity::Medium);
    assert_eq!(result.scalp_condition, ScalpCondition::Balanced);
    assert_eq!(result.product_compatibility, ProductCompatibility::Normal);
    // 3B, Medium, Medium, Medium: 4 + 2 + 3 + 3.
    assert_eq!(result.maintenance_level, MaintenanceLevel::Moderate);
    assert_eq!(result.recommended_products[0], "Sulfate-free shampoo");
}

#[test]
fn result_serializes_with_display_spellings() {
    let payload = serde_json::to_value(analyze(&coily_answers())).expect("serialize");

    assert_eq!(payload["hairType"], "4B");
    assert_eq!(payload["porosity"], "High");
    assert_eq!(payload["scalpCondition"], "Dry");
    assert_eq!(payload["productCompatibility"], "Buildup Prone");
    assert_eq!(payload["maintenanceLevel"], "High");
    assert!(payload["recommendedProducts"].is_array());
    assert!(payload["recommendedRoutine"].is_array());
    assert!(payload["careInstructions"].is_array());
}

#[test]
fn photo_hair_type_flows_through_the_same_rules() {
    let engine = HairAnalysisEngine::new();
    let external = HairType::from_external_label("Type 2A - Wavy");
    let result = engine.analyze_with_hair_type(&coily_answers(), external);

    assert_eq!(result.hair_type, HairType::Type2A);
    assert_eq!(result.porosity, Porosity::High);
    assert!(result
        .recommended_products
        .iter()
        .any(|entry| entry == "Curl enhancing cream"));
    assert!(!result
        .care_instructions
        .iter()
        .any(|entry| entry.contains("protective styling")));

    let rescored = score_labels("2A", "High", "High", "Coarse");
    assert_eq!(rescored.level, result.maintenance_level);
}

#[test]
fn csv_answers_feed_the_pipeline() {
    let csv = "question,answer\n\
pattern,curly\n\
curl_diameter,3a\n\
float_test,unknown\n\
porosity,low_porosity\n\
density,low_density\n\
thickness,fine\n";

    let answers = import_answers_csv(csv.as_bytes()).expect("import succeeds");
    let result = analyze(&answers);

    assert_eq!(result.hair_type, HairType::Type3A);
    assert_eq!(result.porosity, Porosity::Low);
    // 3 + 4 + 2 + 2.
    assert_eq!(result.maintenance_level, MaintenanceLevel::Moderate);
}

#[test]
fn insights_describe_the_result() {
    let result = analyze(&coily_answers());
    let insights = ProfileInsights::for_result(&result);

    assert!(!insights.hair_type.description.is_empty());
    assert!(!insights.porosity.tips.is_empty());
    assert_eq!(
        ProfileInsights::from_labels("9Z", "??", ""),
        ProfileInsights::from_labels("4B", "Medium", "Medium")
    );
}

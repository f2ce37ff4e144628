use crate::analysis::domain::{HairType, QuestionnaireAnswers};
use crate::analysis::engine::classifier::{classify, classify_answers};

const DIAMETERS: [&str; 11] = [
    "2a", "2b", "2c", "3a", "3b", "3c", "4a", "4b", "4c", "none", "bogus",
];

#[test]
fn straight_ignores_curl_diameter() {
    for diameter in DIAMETERS {
        assert_eq!(classify("straight", diameter), HairType::Type1);
    }
}

#[test]
fn diameters_select_within_their_family() {
    assert_eq!(classify("wavy", "2a"), HairType::Type2A);
    assert_eq!(classify("wavy", "2c"), HairType::Type2C);
    assert_eq!(classify("curly", "3a"), HairType::Type3A);
    assert_eq!(classify("curly", "3c"), HairType::Type3C);
    assert_eq!(classify("coily", "4a"), HairType::Type4A);
    assert_eq!(classify("coily", "4c"), HairType::Type4C);
}

#[test]
fn mismatched_or_unknown_diameters_use_family_default() {
    assert_eq!(classify("coily", "bogus"), HairType::Type4B);
    assert_eq!(classify("wavy", "3a"), HairType::Type2B);
    assert_eq!(classify("curly", "none"), HairType::Type3B);
    assert_eq!(classify("coily", "2c"), HairType::Type4B);
}

#[test]
fn every_combination_yields_a_documented_label() {
    for pattern in ["straight", "wavy", "curly", "coily", "zigzag", ""] {
        for diameter in DIAMETERS {
            let hair_type = classify(pattern, diameter);
            assert!(HairType::ordered().contains(&hair_type));
        }
    }
}

#[test]
fn unknown_pattern_falls_back_to_3b() {
    assert_eq!(classify("zigzag", "4c"), HairType::Type3B);
    assert_eq!(classify_answers(&QuestionnaireAnswers::new()), HairType::Type3B);
}

#[test]
fn option_values_match_exactly() {
    assert_eq!(classify("COILY", "4C"), HairType::Type3B);
    assert_eq!(classify(" coily ", "4c"), HairType::Type3B);
    assert_eq!(classify("coily", "4C"), HairType::Type4B);
    assert_eq!(classify("curly", " 3c "), HairType::Type3B);
}

#[test]
fn case_folded_answers_default_like_every_other_attribute() {
    let answers = QuestionnaireAnswers::new()
        .with("pattern", "Coily")
        .with("curl_diameter", "4C")
        .with("density", "High_Density");

    let result = crate::analysis::analyze(&answers);

    assert_eq!(result.hair_type, HairType::Type3B);
    assert_eq!(result.density, crate::analysis::domain::Density::Medium);
}

use super::super::domain::{HairFamily, HairType, QuestionnaireAnswers};
use super::super::questionnaire::QuestionId;

/// Curl-diameter option values and the type each selects within its own family.
const CURL_DIAMETERS: [(&str, HairType); 9] = [
    ("2a", HairType::Type2A),
    ("2b", HairType::Type2B),
    ("2c", HairType::Type2C),
    ("3a", HairType::Type3A),
    ("3b", HairType::Type3B),
    ("3c", HairType::Type3C),
    ("4a", HairType::Type4A),
    ("4b", HairType::Type4B),
    ("4c", HairType::Type4C),
];

pub(crate) fn pattern_family(pattern: &str) -> Option<HairFamily> {
    HairFamily::ordered()
        .into_iter()
        .find(|family| family.pattern_value() == pattern)
}

/// Maps the `pattern` and `curl_diameter` answers to a hair type.
///
/// Option values match exactly. Straight hair ignores the diameter. A diameter from
/// another family, or any unrecognized value, falls back to the family's middle type.
/// An unrecognized pattern, including a differently cased one, yields the module
/// default, `3B`.
pub fn classify(pattern: &str, curl_diameter: &str) -> HairType {
    let Some(family) = pattern_family(pattern) else {
        return HairType::default();
    };

    if family == HairFamily::Straight {
        return HairType::Type1;
    }

    CURL_DIAMETERS
        .iter()
        .find(|(value, hair_type)| hair_type.family() == family && *value == curl_diameter)
        .map(|(_, hair_type)| *hair_type)
        .unwrap_or_else(|| family.default_type())
}

pub fn classify_answers(answers: &QuestionnaireAnswers) -> HairType {
    classify(
        answers.answer(QuestionId::Pattern).unwrap_or_default(),
        answers.answer(QuestionId::CurlDiameter).unwrap_or_default(),
    )
}

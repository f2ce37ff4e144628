//! The fixed, ordered hair quiz and the completeness check callers run before analysis.
//!
//! Option values here are the exact strings the engine's lookup tables match on.

use serde::{Deserialize, Serialize};

use super::domain::QuestionnaireAnswers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Pattern,
    CurlDiameter,
    Porosity,
    FloatTest,
    Density,
    Thickness,
    Elasticity,
    ScalpCondition,
    ProductBuildup,
    ColorTreatment,
    FrizzTendency,
}

impl QuestionId {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Pattern,
            Self::CurlDiameter,
            Self::Porosity,
            Self::FloatTest,
            Self::Density,
            Self::Thickness,
            Self::Elasticity,
            Self::ScalpCondition,
            Self::ProductBuildup,
            Self::ColorTreatment,
            Self::FrizzTendency,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::CurlDiameter => "curl_diameter",
            Self::Porosity => "porosity",
            Self::FloatTest => "float_test",
            Self::Density => "density",
            Self::Thickness => "thickness",
            Self::Elasticity => "elasticity",
            Self::ScalpCondition => "scalp_condition",
            Self::ProductBuildup => "product_buildup",
            Self::ColorTreatment => "color_treatment",
            Self::FrizzTendency => "frizz_tendency",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ordered()
            .into_iter()
            .find(|question| question.key() == key)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub text: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub help_text: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

const fn option(
    value: &'static str,
    text: &'static str,
    description: &'static str,
) -> QuestionOption {
    QuestionOption {
        value,
        text,
        description,
    }
}

static QUESTIONS: [Question; 11] = [
    Question {
        id: QuestionId::Pattern,
        prompt: "When your hair is completely dry and product-free, what pattern do you observe?",
        help_text: "Look at your hair in its natural state without any styling products or manipulation.",
        options: &[
            option("straight", "Straight with no bend or curl", "Hair falls straight down with no natural curve"),
            option("wavy", "Slight wave, S-shaped pattern", "Forms a loose \"S\" shape throughout the length"),
            option("curly", "Defined curls, spiral pattern", "Forms springy, well-defined curls"),
            option("coily", "Tight coils or zigzag pattern", "Very tight curls forming a zigzag pattern"),
        ],
    },
    Question {
        id: QuestionId::CurlDiameter,
        prompt: "If your hair has curls or waves, what is the approximate diameter?",
        help_text: "Look at a single curl or wave and estimate its width at the widest point.",
        options: &[
            option("none", "No curls (straight hair)", "My hair is completely straight"),
            option("2a", "Wide waves (> 2 inches)", "Loose, barely-there waves with an \"S\" shape wider than 2 inches"),
            option("2b", "Medium waves (1-2 inches)", "Defined \"S\" waves that are 1-2 inches wide"),
            option("2c", "Tight waves (< 1 inch)", "Well-defined \"S\" waves that are less than 1 inch wide"),
            option("3a", "Wide curls (> 1 inch)", "Loose, springy curls with a diameter larger than 1 inch"),
            option("3b", "Medium curls (pencil-sized)", "Springy, defined curls about the width of a marker or pencil"),
            option("3c", "Tight curls (straw-sized)", "Densely packed, tight curls about the width of a drinking straw"),
            option("4a", "Wide coils (coffee stirrer)", "Tightly coiled strands with a visible \"S\" pattern when stretched"),
            option("4b", "Tight coils (spring-like)", "Densely packed, \"Z\" pattern coils that form a spring-like shape"),
            option("4c", "Very tight coils (zigzag)", "Extremely tight coils with less definition and a zigzag pattern"),
        ],
    },
    Question {
        id: QuestionId::Porosity,
        prompt: "How does your hair react to water?",
        help_text: "Porosity determines how well your hair absorbs and retains moisture, affecting product selection and styling methods.",
        options: &[
            option("low_porosity", "Takes a long time to get wet and dry", "Water beads on hair before absorbing; products sit on hair; resistant to chemical treatments"),
            option("medium_porosity", "Gets wet easily and takes average time to dry", "Balanced moisture absorption and retention; accepts color treatments well"),
            option("high_porosity", "Absorbs water quickly but dries very fast", "Quickly absorbs water but loses moisture easily; may feel dry or frizzy; often damaged"),
        ],
    },
    Question {
        id: QuestionId::FloatTest,
        prompt: "If you place a clean strand of hair in water, what happens?",
        help_text: "This is the scientific float test for porosity. Take a clean strand and place it in a glass of water.",
        options: &[
            option("low_porosity_confirmed", "Floats for a long time", "Hair cuticles are tightly closed, preventing water absorption"),
            option("medium_porosity_confirmed", "Floats briefly then sinks", "Hair cuticles are partially open, allowing balanced moisture exchange"),
            option("high_porosity_confirmed", "Sinks immediately", "Hair cuticles are very open, allowing rapid water absorption"),
            option("unknown", "Haven't tried this test", "Skip this question if you haven't performed the test"),
        ],
    },
    Question {
        id: QuestionId::Density,
        prompt: "When you gather your hair in a ponytail, what's the circumference compared to a coin?",
        help_text: "Hair density refers to how many strands you have per square inch of scalp, affecting fullness and styling needs.",
        options: &[
            option("low_density", "Thinner than a quarter", "Scalp is easily visible through hair; ponytail feels thin"),
            option("medium_density", "About the size of a quarter", "Scalp is partially visible; average ponytail thickness"),
            option("high_density", "Thicker than a quarter", "Scalp is barely visible; ponytail feels thick and full"),
        ],
    },
    Question {
        id: QuestionId::Thickness,
        prompt: "Compare a single strand of hair to a sewing thread:",
        help_text: "Hair thickness (or width) refers to the diameter of individual strands, not the overall amount of hair.",
        options: &[
            option("fine", "Much thinner than thread", "Individual strands are barely visible; hair feels silky and may lack volume"),
            option("medium", "Similar to thread", "Individual strands are visible but not thick; balanced texture"),
            option("coarse", "Thicker than thread", "Individual strands are thick and strong; hair may feel rough or wiry"),
        ],
    },
    Question {
        id: QuestionId::Elasticity,
        prompt: "When you stretch a wet hair strand, what happens?",
        help_text: "Elasticity indicates hair health and protein/moisture balance. Gently pull a wet strand and observe.",
        options: &[
            option("low_elasticity", "Breaks immediately", "Hair lacks stretch and snaps easily; may indicate protein overload or damage"),
            option("medium_elasticity", "Stretches a bit before breaking", "Hair stretches somewhat and returns to shape; balanced protein/moisture"),
            option("high_elasticity", "Stretches significantly and returns to shape", "Hair stretches well without breaking; indicates healthy, well-moisturized hair"),
        ],
    },
    Question {
        id: QuestionId::ScalpCondition,
        prompt: "How would you describe your scalp condition?",
        help_text: "Scalp health directly impacts hair growth and overall hair health.",
        options: &[
            option("dry_scalp", "Dry and flaky", "Feels tight, itchy, with visible flakes; may need hydrating treatments"),
            option("oily_scalp", "Oily, especially at roots", "Becomes greasy quickly after washing; may need clarifying products"),
            option("balanced_scalp", "Balanced, rarely problematic", "Neither too dry nor too oily; comfortable between washes"),
            option("combination_scalp", "Combination (oily roots, dry ends)", "Oily at the scalp but dry at the ends; requires targeted care"),
            option("sensitive_scalp", "Sensitive or irritated", "Prone to irritation, redness, or discomfort; may need gentle products"),
        ],
    },
    Question {
        id: QuestionId::ProductBuildup,
        prompt: "How does your hair respond to product application?",
        help_text: "This helps determine if your hair is prone to buildup, which affects product selection.",
        options: &[
            option("buildup_prone", "Products sit on top and feel heavy", "Hair feels weighed down easily; may need regular clarifying"),
            option("balanced_absorption", "Absorbs products well without residue", "Products are absorbed appropriately without buildup or dryness"),
            option("high_absorption", "Seems to \"drink up\" products quickly", "Hair absorbs products rapidly and may need frequent reapplication"),
        ],
    },
    Question {
        id: QuestionId::ColorTreatment,
        prompt: "Have you chemically treated your hair in the past year?",
        help_text: "Chemical treatments affect porosity, strength, and product needs.",
        options: &[
            option("virgin_hair", "No chemical treatments", "Hair has not been colored, permed, relaxed, or chemically treated"),
            option("color_treated", "Color-treated only", "Hair has been dyed but not structurally altered"),
            option("bleached", "Bleached or highlighted", "Hair has been lightened, which increases porosity and potential damage"),
            option("relaxed", "Chemically straightened/relaxed", "Hair structure has been permanently altered to be straighter"),
            option("permed", "Permed or curled", "Hair structure has been permanently altered to be curlier"),
            option("multiple_treatments", "Multiple treatments", "Hair has undergone several different chemical processes"),
        ],
    },
    Question {
        id: QuestionId::FrizzTendency,
        prompt: "How does your hair react to humidity?",
        help_text: "Frizz tendency indicates cuticle condition and moisture balance needs.",
        options: &[
            option("frizz_resistant", "Minimal change, stays smooth", "Hair maintains its style regardless of weather conditions"),
            option("moderate_frizz", "Slight frizz in high humidity", "Some flyaways or texture changes in humid conditions"),
            option("high_frizz", "Significant frizz and volume increase", "Hair expands and becomes unmanageable in humid conditions"),
        ],
    },
];

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question(id: QuestionId) -> &'static Question {
    // The catalog is declared in `QuestionId::ordered()` order.
    &QUESTIONS[id as usize]
}

/// Catalog ids, in quiz order, that have no non-blank answer.
pub fn missing_answers(answers: &QuestionnaireAnswers) -> Vec<QuestionId> {
    QuestionId::ordered()
        .into_iter()
        .filter(|question| answers.answer(*question).is_none())
        .collect()
}

pub fn ensure_complete(answers: &QuestionnaireAnswers) -> Result<(), QuestionnaireError> {
    let missing = missing_answers(answers);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(QuestionnaireError::Incomplete { missing })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("questionnaire incomplete, unanswered: {}", join_keys(.missing))]
    Incomplete { missing: Vec<QuestionId> },
}

fn join_keys(missing: &[QuestionId]) -> String {
    missing
        .iter()
        .map(|question| question.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_follows_quiz_order() {
        let ids: Vec<QuestionId> = questions().iter().map(|question| question.id).collect();
        assert_eq!(ids, QuestionId::ordered().to_vec());
        for id in QuestionId::ordered() {
            assert_eq!(question(id).id, id);
        }
    }

    #[test]
    fn float_test_offers_unknown_sentinel() {
        let float_test = question(QuestionId::FloatTest);
        assert!(float_test.accepts("unknown"));
        assert!(float_test.accepts("high_porosity_confirmed"));
        assert!(!float_test.accepts("high_porosity"));
    }

    #[test]
    fn blank_answers_count_as_missing() {
        let answers = QuestionnaireAnswers::new()
            .with("pattern", "curly")
            .with("curl_diameter", "   ");

        let missing = missing_answers(&answers);

        assert_eq!(missing.len(), 10);
        assert_eq!(missing[0], QuestionId::CurlDiameter);
    }

    #[test]
    fn complete_answers_pass_the_check() {
        let answers: QuestionnaireAnswers = questions()
            .iter()
            .map(|question| (question.id.key(), question.options[0].value))
            .collect();

        assert!(ensure_complete(&answers).is_ok());
    }

    #[test]
    fn incomplete_error_names_missing_keys() {
        let answers = QuestionnaireAnswers::new().with("pattern", "wavy");

        let err = ensure_complete(&answers).expect_err("incomplete");

        assert!(err.to_string().contains("curl_diameter"));
        assert!(err.to_string().contains("frizz_tendency"));
    }
}

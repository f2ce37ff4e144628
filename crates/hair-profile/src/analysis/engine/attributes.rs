use super::super::domain::{
    Density, Elasticity, Porosity, ProductCompatibility, QuestionnaireAnswers, ScalpCondition,
    Thickness,
};
use super::super::questionnaire::QuestionId;

const FLOAT_TEST: [(&str, Porosity); 3] = [
    ("low_porosity_confirmed", Porosity::Low),
    ("medium_porosity_confirmed", Porosity::Medium),
    ("high_porosity_confirmed", Porosity::High),
];

const WATER_REACTION: [(&str, Porosity); 3] = [
    ("low_porosity", Porosity::Low),
    ("medium_porosity", Porosity::Medium),
    ("high_porosity", Porosity::High),
];

const DENSITY: [(&str, Density); 3] = [
    ("low_density", Density::Low),
    ("medium_density", Density::Medium),
    ("high_density", Density::High),
];

const THICKNESS: [(&str, Thickness); 3] = [
    ("fine", Thickness::Fine),
    ("medium", Thickness::Medium),
    ("coarse", Thickness::Coarse),
];

const ELASTICITY: [(&str, Elasticity); 3] = [
    ("low_elasticity", Elasticity::Low),
    ("medium_elasticity", Elasticity::Medium),
    ("high_elasticity", Elasticity::High),
];

const SCALP: [(&str, ScalpCondition); 5] = [
    ("dry_scalp", ScalpCondition::Dry),
    ("oily_scalp", ScalpCondition::Oily),
    ("balanced_scalp", ScalpCondition::Balanced),
    ("combination_scalp", ScalpCondition::Combination),
    ("sensitive_scalp", ScalpCondition::Sensitive),
];

const PRODUCT_BUILDUP: [(&str, ProductCompatibility); 3] = [
    ("buildup_prone", ProductCompatibility::BuildupProne),
    ("balanced_absorption", ProductCompatibility::Normal),
    ("high_absorption", ProductCompatibility::HighAbsorption),
];

/// Attributes derived from their dedicated questions; every field always holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HairAttributes {
    pub porosity: Porosity,
    pub density: Density,
    pub thickness: Thickness,
    pub elasticity: Elasticity,
    pub scalp_condition: ScalpCondition,
    pub product_compatibility: ProductCompatibility,
}

fn lookup<T: Copy>(table: &[(&str, T)], answer: Option<&str>) -> Option<T> {
    let answer = answer?;
    table
        .iter()
        .find(|(value, _)| *value == answer)
        .map(|(_, resolved)| *resolved)
}

/// The float test wins whenever it holds a confirmed result; `unknown` or anything
/// else defers to the water-reaction question.
pub fn resolve_porosity(answers: &QuestionnaireAnswers) -> Porosity {
    lookup(&FLOAT_TEST, answers.answer(QuestionId::FloatTest))
        .or_else(|| lookup(&WATER_REACTION, answers.answer(QuestionId::Porosity)))
        .unwrap_or_default()
}

pub fn resolve_attributes(answers: &QuestionnaireAnswers) -> HairAttributes {
    HairAttributes {
        porosity: resolve_porosity(answers),
        density: lookup(&DENSITY, answers.answer(QuestionId::Density)).unwrap_or_default(),
        thickness: lookup(&THICKNESS, answers.answer(QuestionId::Thickness)).unwrap_or_default(),
        elasticity: lookup(&ELASTICITY, answers.answer(QuestionId::Elasticity))
            .unwrap_or_default(),
        scalp_condition: lookup(&SCALP, answers.answer(QuestionId::ScalpCondition))
            .unwrap_or_default(),
        product_compatibility: lookup(
            &PRODUCT_BUILDUP,
            answers.answer(QuestionId::ProductBuildup),
        )
        .unwrap_or_default(),
    }
}

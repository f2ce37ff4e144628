//! Ordered recommendation rule tables.
//!
//! Each table is evaluated top to bottom and every matching rule appends its entries,
//! so list order follows the table order: cleansing, conditioning, styling, treatment,
//! scalp for products; washing through heat for the routine; nighttime care through
//! heat guidance for care instructions. Entries are never de-duplicated.

use super::super::domain::HairFamily::{self, Coily, Curly, Straight, Wavy};
use super::super::domain::{Elasticity, HairProfile, Porosity, ScalpCondition};

/// Predicate over a resolved profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    Porosity(Porosity),
    Elasticity(Elasticity),
    Scalp(ScalpCondition),
    Family(&'static [HairFamily]),
    Not(&'static Condition),
    AnyOf(&'static [Condition]),
    AllOf(&'static [Condition]),
}

impl Condition {
    pub fn matches(&self, profile: &HairProfile) -> bool {
        match self {
            Condition::Always => true,
            Condition::Porosity(porosity) => profile.porosity == *porosity,
            Condition::Elasticity(elasticity) => profile.elasticity == *elasticity,
            Condition::Scalp(scalp) => profile.scalp_condition == *scalp,
            Condition::Family(families) => families.contains(&profile.family()),
            Condition::Not(inner) => !inner.matches(profile),
            Condition::AnyOf(conditions) => conditions.iter().any(|c| c.matches(profile)),
            Condition::AllOf(conditions) => conditions.iter().all(|c| c.matches(profile)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    pub key: &'static str,
    pub condition: Condition,
    pub entries: &'static [&'static str],
}

impl RecommendationRule {
    pub fn applies(&self, profile: &HairProfile) -> bool {
        self.condition.matches(profile)
    }
}

const fn rule(
    key: &'static str,
    condition: Condition,
    entries: &'static [&'static str],
) -> RecommendationRule {
    RecommendationRule {
        key,
        condition,
        entries,
    }
}

const HIGH_POROSITY_OR_LOW_ELASTICITY: Condition = Condition::AnyOf(&[
    Condition::Porosity(Porosity::High),
    Condition::Elasticity(Elasticity::Low),
]);

const HIGH_POROSITY_OR_COILY: Condition = Condition::AnyOf(&[
    Condition::Porosity(Porosity::High),
    Condition::Family(&[Coily]),
]);

const NOT_OILY: Condition = Condition::Not(&Condition::Scalp(ScalpCondition::Oily));

static PRODUCT_RULES: [RecommendationRule; 14] = [
    rule(
        "cleansing_low_porosity",
        Condition::Porosity(Porosity::Low),
        &["Clarifying shampoo (bi-weekly)", "Lightweight co-wash"],
    ),
    rule(
        "cleansing_medium_porosity",
        Condition::Porosity(Porosity::Medium),
        &["Sulfate-free shampoo", "Moisturizing co-wash"],
    ),
    rule(
        "cleansing_high_porosity",
        Condition::Porosity(Porosity::High),
        &["Hydrating, sulfate-free shampoo", "Cream-based co-wash"],
    ),
    rule(
        "conditioning_straight_wavy",
        Condition::Family(&[Straight, Wavy]),
        &["Lightweight conditioner"],
    ),
    rule(
        "conditioning_curly",
        Condition::Family(&[Curly]),
        &["Moisturizing conditioner", "Leave-in conditioner"],
    ),
    rule(
        "conditioning_coily",
        Condition::Family(&[Coily]),
        &["Deep conditioner", "Heavy leave-in conditioner"],
    ),
    rule(
        "styling_straight",
        Condition::Family(&[Straight]),
        &["Volumizing mousse"],
    ),
    rule(
        "styling_wavy",
        Condition::Family(&[Wavy]),
        &["Curl enhancing cream", "Lightweight gel"],
    ),
    rule(
        "styling_curly",
        Condition::Family(&[Curly]),
        &["Curl defining cream", "Medium-hold gel"],
    ),
    rule(
        "styling_coily",
        Condition::Family(&[Coily]),
        &["Curl defining butter or cream", "Edge control", "Strong-hold gel"],
    ),
    rule(
        "treatment_low_elasticity",
        Condition::Elasticity(Elasticity::Low),
        &["Protein treatment"],
    ),
    rule(
        "scalp_dry",
        Condition::Scalp(ScalpCondition::Dry),
        &["Scalp oil treatment"],
    ),
    rule(
        "scalp_oily",
        Condition::Scalp(ScalpCondition::Oily),
        &["Scalp exfoliator"],
    ),
    rule(
        "scalp_sensitive",
        Condition::Scalp(ScalpCondition::Sensitive),
        &["Fragrance-free scalp treatment"],
    ),
];

static ROUTINE_RULES: [RecommendationRule; 12] = [
    rule(
        "wash_oily_scalp",
        Condition::Scalp(ScalpCondition::Oily),
        &["Wash 2-3 times per week"],
    ),
    rule(
        "wash_straight_wavy",
        Condition::AllOf(&[NOT_OILY, Condition::Family(&[Straight, Wavy])]),
        &["Wash every 2-3 days"],
    ),
    rule(
        "wash_curly",
        Condition::AllOf(&[NOT_OILY, Condition::Family(&[Curly])]),
        &["Wash 1-2 times per week"],
    ),
    rule(
        "wash_coily",
        Condition::AllOf(&[NOT_OILY, Condition::Family(&[Coily])]),
        &["Wash once per week"],
    ),
    rule(
        "deep_condition_weekly",
        HIGH_POROSITY_OR_COILY,
        &["Deep condition weekly"],
    ),
    rule(
        "deep_condition_biweekly",
        Condition::Not(&HIGH_POROSITY_OR_COILY),
        &["Deep condition bi-weekly"],
    ),
    rule(
        "protein_low_elasticity",
        Condition::Elasticity(Elasticity::Low),
        &["Protein treatment every 4-6 weeks"],
    ),
    rule(
        "protein_maintenance",
        Condition::Not(&Condition::Elasticity(Elasticity::Low)),
        &["Protein treatment every 8-12 weeks"],
    ),
    rule(
        "detangle",
        Condition::Family(&[Curly, Coily]),
        &["Detangle with conditioner using wide-tooth comb"],
    ),
    rule(
        "wet_styling",
        Condition::Family(&[Wavy, Curly, Coily]),
        &["Style on wet or damp hair"],
    ),
    rule(
        "heat_open_cuticles",
        Condition::Porosity(Porosity::Low),
        &["Use heat to help open cuticles when deep conditioning"],
    ),
    rule(
        "avoid_heat",
        Condition::Porosity(Porosity::High),
        &["Avoid excessive heat"],
    ),
];

static CARE_RULES: [RecommendationRule; 6] = [
    rule(
        "night_protection",
        Condition::Family(&[Wavy, Curly, Coily]),
        &["Sleep with a satin/silk bonnet or pillowcase"],
    ),
    rule(
        "seal_moisture",
        Condition::Porosity(Porosity::High),
        &["Seal moisture with oils or butters after conditioning"],
    ),
    rule(
        "protective_styling",
        Condition::Family(&[Curly, Coily]),
        &["Consider protective styling to reduce manipulation"],
    ),
    rule(
        "trim_ends",
        Condition::Always,
        &["Trim ends every 8-12 weeks to prevent split ends"],
    ),
    rule(
        "minimize_heat",
        HIGH_POROSITY_OR_LOW_ELASTICITY,
        &["Minimize heat styling to prevent further damage"],
    ),
    rule(
        "heat_protectant",
        Condition::Not(&HIGH_POROSITY_OR_LOW_ELASTICITY),
        &["Always use heat protectant before heat styling"],
    ),
];

pub fn product_rules() -> &'static [RecommendationRule] {
    &PRODUCT_RULES
}

pub fn routine_rules() -> &'static [RecommendationRule] {
    &ROUTINE_RULES
}

pub fn care_rules() -> &'static [RecommendationRule] {
    &CARE_RULES
}

/// Appends the entries of every matching rule, in table order.
pub fn expand(rules: &[RecommendationRule], profile: &HairProfile) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.applies(profile))
        .flat_map(|rule| rule.entries.iter().map(|entry| entry.to_string()))
        .collect()
}

pub fn recommended_products(profile: &HairProfile) -> Vec<String> {
    expand(product_rules(), profile)
}

pub fn recommended_routine(profile: &HairProfile) -> Vec<String> {
    expand(routine_rules(), profile)
}

pub fn care_instructions(profile: &HairProfile) -> Vec<String> {
    expand(care_rules(), profile)
}

use super::common::*;
use crate::analysis::domain::{Elasticity, HairType, Porosity, ScalpCondition};
use crate::analysis::engine::recommendations::{
    care_instructions, care_rules, product_rules, recommended_products, recommended_routine,
    routine_rules,
};

#[test]
fn products_follow_cleansing_conditioning_styling_treatment_scalp_order() {
    let mut profile = profile(HairType::Type4B);
    profile.porosity = Porosity::High;
    profile.elasticity = Elasticity::Low;
    profile.scalp_condition = ScalpCondition::Dry;

    assert_eq!(
        recommended_products(&profile),
        vec![
            "Hydrating, sulfate-free shampoo",
            "Cream-based co-wash",
            "Deep conditioner",
            "Heavy leave-in conditioner",
            "Curl defining butter or cream",
            "Edge control",
            "Strong-hold gel",
            "Protein treatment",
            "Scalp oil treatment",
        ]
    );
}

#[test]
fn straight_hair_gets_lightweight_products() {
    let mut profile = profile(HairType::Type1);
    profile.porosity = Porosity::Low;
    profile.scalp_condition = ScalpCondition::Sensitive;

    assert_eq!(
        recommended_products(&profile),
        vec![
            "Clarifying shampoo (bi-weekly)",
            "Lightweight co-wash",
            "Lightweight conditioner",
            "Volumizing mousse",
            "Fragrance-free scalp treatment",
        ]
    );
}

#[test]
fn oily_scalp_overrides_type_based_wash_frequency() {
    let mut profile = profile(HairType::Type1);
    profile.scalp_condition = ScalpCondition::Oily;

    assert_eq!(
        recommended_routine(&profile),
        vec![
            "Wash 2-3 times per week",
            "Deep condition bi-weekly",
            "Protein treatment every 8-12 weeks",
        ]
    );
}

#[test]
fn coily_routine_includes_weekly_deep_conditioning_and_detangling() {
    let mut profile = profile(HairType::Type4A);
    profile.porosity = Porosity::Low;

    assert_eq!(
        recommended_routine(&profile),
        vec![
            "Wash once per week",
            "Deep condition weekly",
            "Protein treatment every 8-12 weeks",
            "Detangle with conditioner using wide-tooth comb",
            "Style on wet or damp hair",
            "Use heat to help open cuticles when deep conditioning",
        ]
    );
}

#[test]
fn wavy_routine_skips_detangling() {
    let mut profile = profile(HairType::Type2C);
    profile.porosity = Porosity::High;
    profile.elasticity = Elasticity::Low;

    assert_eq!(
        recommended_routine(&profile),
        vec![
            "Wash every 2-3 days",
            "Deep condition weekly",
            "Protein treatment every 4-6 weeks",
            "Style on wet or damp hair",
            "Avoid excessive heat",
        ]
    );
}

#[test]
fn care_instructions_always_include_trimming() {
    assert_eq!(
        care_instructions(&profile(HairType::Type1)),
        vec![
            "Trim ends every 8-12 weeks to prevent split ends",
            "Always use heat protectant before heat styling",
        ]
    );

    let mut curly = profile(HairType::Type3B);
    curly.porosity = Porosity::High;
    assert_eq!(
        care_instructions(&curly),
        vec![
            "Sleep with a satin/silk bonnet or pillowcase",
            "Seal moisture with oils or butters after conditioning",
            "Consider protective styling to reduce manipulation",
            "Trim ends every 8-12 weeks to prevent split ends",
            "Minimize heat styling to prevent further damage",
        ]
    );
}

#[test]
fn heat_guidance_is_exclusive() {
    for hair_type in HairType::ordered() {
        for porosity in Porosity::ordered() {
            for elasticity in Elasticity::ordered() {
                let mut profile = profile(hair_type);
                profile.porosity = porosity;
                profile.elasticity = elasticity;
                let fired: Vec<&str> = care_rules()
                    .iter()
                    .filter(|rule| rule.applies(&profile))
                    .map(|rule| rule.key)
                    .filter(|key| *key == "minimize_heat" || *key == "heat_protectant")
                    .collect();
                assert_eq!(fired.len(), 1, "{hair_type} {porosity} {elasticity}");
            }
        }
    }
}

#[test]
fn exactly_one_wash_frequency_fires() {
    for hair_type in HairType::ordered() {
        for scalp in ScalpCondition::ordered() {
            let mut profile = profile(hair_type);
            profile.scalp_condition = scalp;
            let washes = routine_rules()
                .iter()
                .filter(|rule| rule.key.starts_with("wash_") && rule.applies(&profile))
                .count();
            assert_eq!(washes, 1, "{hair_type} {scalp}");
        }
    }
}

#[test]
fn rule_keys_are_unique_per_table() {
    for rules in [product_rules(), routine_rules(), care_rules()] {
        let mut keys: Vec<&str> = rules.iter().map(|rule| rule.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), rules.len());
    }
}

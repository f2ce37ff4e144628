use crate::analysis::domain::{Density, HairType, MaintenanceLevel, Porosity, Thickness};
use crate::analysis::engine::maintenance::{level_for, score, score_labels, MaintenanceFactor};

#[test]
fn coarse_dense_coily_hair_is_high_maintenance() {
    let outcome = score(
        HairType::Type4C,
        Porosity::Low,
        Density::High,
        Thickness::Coarse,
    );
    assert_eq!(outcome.total, 17);
    assert_eq!(outcome.level, MaintenanceLevel::High);
}

#[test]
fn fine_straight_hair_is_low_maintenance() {
    let outcome = score(
        HairType::Type1,
        Porosity::Medium,
        Density::Low,
        Thickness::Fine,
    );
    assert_eq!(outcome.total, 7);
    assert_eq!(outcome.level, MaintenanceLevel::Low);
}

#[test]
fn bucket_boundaries() {
    assert_eq!(level_for(8), MaintenanceLevel::Low);
    assert_eq!(level_for(9), MaintenanceLevel::Moderate);
    assert_eq!(level_for(12), MaintenanceLevel::Moderate);
    assert_eq!(level_for(13), MaintenanceLevel::High);
}

#[test]
fn totals_stay_within_range_for_every_profile() {
    for hair_type in HairType::ordered() {
        for porosity in Porosity::ordered() {
            for density in Density::ordered() {
                for thickness in Thickness::ordered() {
                    let outcome = score(hair_type, porosity, density, thickness);
                    assert!((7..=18).contains(&outcome.total));
                    assert_eq!(outcome.level, level_for(outcome.total));
                    assert!(outcome.components.iter().all(|c| !c.defaulted));
                }
            }
        }
    }
}

#[test]
fn components_are_reported_in_factor_order() {
    let outcome = score(
        HairType::Type3A,
        Porosity::High,
        Density::Medium,
        Thickness::Medium,
    );
    let factors: Vec<MaintenanceFactor> = outcome.components.iter().map(|c| c.factor).collect();
    assert_eq!(
        factors,
        vec![
            MaintenanceFactor::HairType,
            MaintenanceFactor::Porosity,
            MaintenanceFactor::Density,
            MaintenanceFactor::Thickness,
        ]
    );
    assert_eq!(outcome.total, 3 + 3 + 3 + 3);
    assert_eq!(outcome.level, MaintenanceLevel::Moderate);
}

#[test]
fn unknown_labels_use_default_weights() {
    let outcome = score_labels("5Z", "Medium", "High", "Coarse");
    assert_eq!(outcome.total, 3 + 2 + 4 + 4);
    assert!(outcome.components[0].defaulted);
    assert!(!outcome.components[1].defaulted);

    let all_unknown = score_labels("", "", "", "");
    assert_eq!(all_unknown.total, 3 + 2 + 3 + 3);
    assert_eq!(all_unknown.level, MaintenanceLevel::Moderate);
}

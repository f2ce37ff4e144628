use serde::{Deserialize, Serialize};

use super::super::domain::{Density, HairType, MaintenanceLevel, Porosity, Thickness};

pub const DEFAULT_HAIR_TYPE_WEIGHT: u8 = 3;
pub const DEFAULT_POROSITY_WEIGHT: u8 = 2;
pub const DEFAULT_DENSITY_WEIGHT: u8 = 3;
pub const DEFAULT_THICKNESS_WEIGHT: u8 = 3;

/// Highest total still bucketed as `Low`.
pub const LOW_CEILING: u8 = 8;
/// Highest total still bucketed as `Moderate`.
pub const MODERATE_CEILING: u8 = 12;

const HAIR_TYPE_WEIGHTS: [(HairType, u8); 10] = [
    (HairType::Type1, 1),
    (HairType::Type2A, 2),
    (HairType::Type2B, 2),
    (HairType::Type2C, 3),
    (HairType::Type3A, 3),
    (HairType::Type3B, 4),
    (HairType::Type3C, 4),
    (HairType::Type4A, 4),
    (HairType::Type4B, 5),
    (HairType::Type4C, 5),
];

// Low porosity resists moisture and outweighs high.
const POROSITY_WEIGHTS: [(Porosity, u8); 3] = [
    (Porosity::Low, 4),
    (Porosity::Medium, 2),
    (Porosity::High, 3),
];

const DENSITY_WEIGHTS: [(Density, u8); 3] = [
    (Density::Low, 2),
    (Density::Medium, 3),
    (Density::High, 4),
];

const THICKNESS_WEIGHTS: [(Thickness, u8); 3] = [
    (Thickness::Fine, 2),
    (Thickness::Medium, 3),
    (Thickness::Coarse, 4),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceFactor {
    HairType,
    Porosity,
    Density,
    Thickness,
}

/// Weight contributed by one factor, kept so the total can be audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightComponent {
    pub factor: MaintenanceFactor,
    pub weight: u8,
    pub defaulted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceScore {
    pub total: u8,
    pub level: MaintenanceLevel,
    pub components: Vec<WeightComponent>,
}

fn weigh<T: Copy + PartialEq>(
    factor: MaintenanceFactor,
    table: &[(T, u8)],
    key: Option<T>,
    default: u8,
) -> WeightComponent {
    let found = key.and_then(|key| {
        table
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, weight)| *weight)
    });

    WeightComponent {
        factor,
        weight: found.unwrap_or(default),
        defaulted: found.is_none(),
    }
}

pub fn level_for(total: u8) -> MaintenanceLevel {
    if total <= LOW_CEILING {
        MaintenanceLevel::Low
    } else if total <= MODERATE_CEILING {
        MaintenanceLevel::Moderate
    } else {
        MaintenanceLevel::High
    }
}

fn score_components(components: Vec<WeightComponent>) -> MaintenanceScore {
    let total = components.iter().map(|component| component.weight).sum();
    MaintenanceScore {
        total,
        level: level_for(total),
        components,
    }
}

fn score_optional(
    hair_type: Option<HairType>,
    porosity: Option<Porosity>,
    density: Option<Density>,
    thickness: Option<Thickness>,
) -> MaintenanceScore {
    score_components(vec![
        weigh(
            MaintenanceFactor::HairType,
            &HAIR_TYPE_WEIGHTS,
            hair_type,
            DEFAULT_HAIR_TYPE_WEIGHT,
        ),
        weigh(
            MaintenanceFactor::Porosity,
            &POROSITY_WEIGHTS,
            porosity,
            DEFAULT_POROSITY_WEIGHT,
        ),
        weigh(
            MaintenanceFactor::Density,
            &DENSITY_WEIGHTS,
            density,
            DEFAULT_DENSITY_WEIGHT,
        ),
        weigh(
            MaintenanceFactor::Thickness,
            &THICKNESS_WEIGHTS,
            thickness,
            DEFAULT_THICKNESS_WEIGHT,
        ),
    ])
}

/// Sums the four factor weights (7..=18) and buckets the total.
pub fn score(
    hair_type: HairType,
    porosity: Porosity,
    density: Density,
    thickness: Thickness,
) -> MaintenanceScore {
    score_optional(
        Some(hair_type),
        Some(porosity),
        Some(density),
        Some(thickness),
    )
}

/// Label-based variant for results that arrive as strings, e.g. from the photo path.
/// Labels that do not parse contribute the factor's default weight.
pub fn score_labels(
    hair_type: &str,
    porosity: &str,
    density: &str,
    thickness: &str,
) -> MaintenanceScore {
    score_optional(
        hair_type.parse().ok(),
        porosity.parse().ok(),
        density.parse().ok(),
        thickness.parse().ok(),
    )
}

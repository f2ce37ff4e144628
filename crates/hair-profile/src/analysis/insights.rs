use serde::Serialize;

use super::domain::{Density, HairAnalysisResult, HairType, Porosity};

/// Short explanation and tips displayed next to a classified attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

const fn insight(description: &'static str, tips: &'static [&'static str]) -> Insight {
    Insight { description, tips }
}

pub fn hair_type_insight(hair_type: HairType) -> Insight {
    match hair_type {
        HairType::Type1 => insight(
            "Straight hair with no natural curl pattern",
            &["Use volumizing products", "Avoid heavy oils"],
        ),
        HairType::Type2A => insight(
            "Slight wave, barely noticeable S-pattern",
            &["Use lightweight products", "Enhance natural waves"],
        ),
        HairType::Type2B => insight(
            "Defined S-waves throughout hair",
            &["Use curl-enhancing products", "Avoid heavy styling"],
        ),
        HairType::Type2C => insight(
            "Well-defined S-waves, almost curly",
            &["Use moisturizing products", "Define waves while damp"],
        ),
        HairType::Type3A => insight(
            "Loose curls with a well-defined S-shape",
            &["Use lightweight products", "Diffuse to enhance curls"],
        ),
        HairType::Type3B => insight(
            "Springy, tight curls with volume",
            &["Deep condition regularly", "Avoid heavy oils"],
        ),
        HairType::Type3C => insight(
            "Tight, dense corkscrew curls",
            &["Co-wash frequently", "Use leave-in conditioners"],
        ),
        HairType::Type4A => insight(
            "Tightly coiled S-pattern curls",
            &["Seal moisture with oils", "Regular deep treatments"],
        ),
        HairType::Type4B => insight(
            "Z-pattern curls with less definition",
            &["LOC/LCO method for moisture", "Protect at night with satin"],
        ),
        HairType::Type4C => insight(
            "Extremely tight, less defined coils",
            &["Maximum moisture routines", "Gentle detangling methods"],
        ),
    }
}

pub fn porosity_insight(porosity: Porosity) -> Insight {
    match porosity {
        Porosity::Low => insight(
            "Hair that resists moisture absorption",
            &["Use heat to open cuticles", "Try lightweight products"],
        ),
        Porosity::Medium => insight(
            "Balanced moisture absorption and retention",
            &["Maintain current moisture balance", "Regular protein treatments"],
        ),
        Porosity::High => insight(
            "Hair that absorbs moisture quickly but loses it easily",
            &["Seal moisture with oils/butters", "Regular protein treatments"],
        ),
    }
}

pub fn density_insight(density: Density) -> Insight {
    match density {
        Density::Low => insight(
            "Fewer hair strands per square inch",
            &["Volumizing products", "Lightweight styling techniques"],
        ),
        Density::Medium => insight(
            "Average amount of hair strands",
            &["Balance moisture and protein", "Most styling methods work well"],
        ),
        Density::High => insight(
            "Many hair strands per square inch",
            &["Layered haircuts for management", "Section hair when styling"],
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileInsights {
    pub hair_type: Insight,
    pub porosity: Insight,
    pub density: Insight,
}

impl ProfileInsights {
    pub fn for_result(result: &HairAnalysisResult) -> Self {
        Self {
            hair_type: hair_type_insight(result.hair_type),
            porosity: porosity_insight(result.porosity),
            density: density_insight(result.density),
        }
    }

    /// Label lookup; unknown labels show the 4B, Medium, and Medium insights.
    pub fn from_labels(hair_type: &str, porosity: &str, density: &str) -> Self {
        Self {
            hair_type: hair_type_insight(hair_type.parse().unwrap_or(HairType::Type4B)),
            porosity: porosity_insight(porosity.parse().unwrap_or(Porosity::Medium)),
            density: density_insight(density.parse().unwrap_or(Density::Medium)),
        }
    }
}

pub mod attributes;
pub mod classifier;
pub mod maintenance;
pub mod recommendations;

pub use attributes::{resolve_attributes, HairAttributes};
pub use classifier::classify;
pub use maintenance::{score, score_labels, MaintenanceScore};
pub use recommendations::{care_instructions, recommended_products, recommended_routine};

use super::domain::{HairAnalysisResult, HairProfile, HairType, QuestionnaireAnswers};
use tracing::debug;

/// Stateless pipeline: classify, resolve attributes, score, expand.
#[derive(Debug, Clone, Copy, Default)]
pub struct HairAnalysisEngine;

impl HairAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, answers: &QuestionnaireAnswers) -> HairAnalysisResult {
        let hair_type = classifier::classify_answers(answers);
        self.analyze_with_hair_type(answers, hair_type)
    }

    /// Runs the pipeline with `hair_type` standing in for the classifier output.
    pub fn analyze_with_hair_type(
        &self,
        answers: &QuestionnaireAnswers,
        hair_type: HairType,
    ) -> HairAnalysisResult {
        let attributes = resolve_attributes(answers);
        let profile = HairProfile {
            hair_type,
            porosity: attributes.porosity,
            density: attributes.density,
            thickness: attributes.thickness,
            elasticity: attributes.elasticity,
            scalp_condition: attributes.scalp_condition,
            product_compatibility: attributes.product_compatibility,
        };
        self.expand(&profile)
    }

    /// Scores and expands an already resolved profile.
    pub fn expand(&self, profile: &HairProfile) -> HairAnalysisResult {
        let maintenance = score(
            profile.hair_type,
            profile.porosity,
            profile.density,
            profile.thickness,
        );

        debug!(
            hair_type = profile.hair_type.label(),
            porosity = profile.porosity.label(),
            maintenance_total = maintenance.total,
            maintenance_level = maintenance.level.label(),
            "hair profile scored"
        );

        HairAnalysisResult {
            hair_type: profile.hair_type,
            porosity: profile.porosity,
            density: profile.density,
            thickness: profile.thickness,
            elasticity: profile.elasticity,
            scalp_condition: profile.scalp_condition,
            product_compatibility: profile.product_compatibility,
            maintenance_level: maintenance.level,
            recommended_products: recommended_products(profile),
            recommended_routine: recommended_routine(profile),
            care_instructions: care_instructions(profile),
        }
    }
}

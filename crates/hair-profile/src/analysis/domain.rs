use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::questionnaire::QuestionId;

/// Raised when a label does not match any spelling of the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

fn parse_label<T: Copy>(
    kind: &'static str,
    value: &str,
    ordered: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, UnknownLabel> {
    let trimmed = value.trim();
    ordered
        .iter()
        .copied()
        .find(|candidate| label(*candidate).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| UnknownLabel {
            kind,
            value: value.to_string(),
        })
}

/// Curl-pattern family, the leading digit of a hair type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairFamily {
    Straight,
    Wavy,
    Curly,
    Coily,
}

impl HairFamily {
    pub const fn ordered() -> [Self; 4] {
        [Self::Straight, Self::Wavy, Self::Curly, Self::Coily]
    }

    /// Questionnaire option value for the `pattern` question.
    pub const fn pattern_value(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Wavy => "wavy",
            Self::Curly => "curly",
            Self::Coily => "coily",
        }
    }

    pub const fn digit(self) -> char {
        match self {
            Self::Straight => '1',
            Self::Wavy => '2',
            Self::Curly => '3',
            Self::Coily => '4',
        }
    }

    /// Type assigned when the family is known but the curl diameter is not.
    pub const fn default_type(self) -> HairType {
        match self {
            Self::Straight => HairType::Type1,
            Self::Wavy => HairType::Type2B,
            Self::Curly => HairType::Type3B,
            Self::Coily => HairType::Type4B,
        }
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|family| family.digit() == digit)
    }
}

/// Ten-label hair texture classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum HairType {
    #[serde(rename = "1")]
    Type1,
    #[serde(rename = "2A")]
    Type2A,
    #[serde(rename = "2B")]
    Type2B,
    #[serde(rename = "2C")]
    Type2C,
    #[serde(rename = "3A")]
    Type3A,
    #[default]
    #[serde(rename = "3B")]
    Type3B,
    #[serde(rename = "3C")]
    Type3C,
    #[serde(rename = "4A")]
    Type4A,
    #[serde(rename = "4B")]
    Type4B,
    #[serde(rename = "4C")]
    Type4C,
}

impl HairType {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Type1,
            Self::Type2A,
            Self::Type2B,
            Self::Type2C,
            Self::Type3A,
            Self::Type3B,
            Self::Type3C,
            Self::Type4A,
            Self::Type4B,
            Self::Type4C,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Type1 => "1",
            Self::Type2A => "2A",
            Self::Type2B => "2B",
            Self::Type2C => "2C",
            Self::Type3A => "3A",
            Self::Type3B => "3B",
            Self::Type3C => "3C",
            Self::Type4A => "4A",
            Self::Type4B => "4B",
            Self::Type4C => "4C",
        }
    }

    pub const fn family(self) -> HairFamily {
        match self {
            Self::Type1 => HairFamily::Straight,
            Self::Type2A | Self::Type2B | Self::Type2C => HairFamily::Wavy,
            Self::Type3A | Self::Type3B | Self::Type3C => HairFamily::Curly,
            Self::Type4A | Self::Type4B | Self::Type4C => HairFamily::Coily,
        }
    }
}

impl fmt::Display for HairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HairType {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label("hair type", value, &Self::ordered(), Self::label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Porosity {
    Low,
    #[default]
    Medium,
    High,
}

impl Porosity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Density {
    Low,
    #[default]
    Medium,
    High,
}

impl Density {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Strand diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Thickness {
    Fine,
    #[default]
    Medium,
    Coarse,
}

impl Thickness {
    pub const fn ordered() -> [Self; 3] {
        [Self::Fine, Self::Medium, Self::Coarse]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fine => "Fine",
            Self::Medium => "Medium",
            Self::Coarse => "Coarse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Elasticity {
    Low,
    #[default]
    Medium,
    High,
}

impl Elasticity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScalpCondition {
    Dry,
    Oily,
    #[default]
    Balanced,
    Combination,
    Sensitive,
}

impl ScalpCondition {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Dry,
            Self::Oily,
            Self::Balanced,
            Self::Combination,
            Self::Sensitive,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Oily => "Oily",
            Self::Balanced => "Balanced",
            Self::Combination => "Combination",
            Self::Sensitive => "Sensitive",
        }
    }
}

/// How the hair takes up styling and care products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductCompatibility {
    #[serde(rename = "Buildup Prone")]
    BuildupProne,
    #[default]
    Normal,
    #[serde(rename = "High Absorption")]
    HighAbsorption,
}

impl ProductCompatibility {
    pub const fn ordered() -> [Self; 3] {
        [Self::BuildupProne, Self::Normal, Self::HighAbsorption]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BuildupProne => "Buildup Prone",
            Self::Normal => "Normal",
            Self::HighAbsorption => "High Absorption",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MaintenanceLevel {
    Low,
    #[default]
    Moderate,
    High,
}

impl MaintenanceLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Porosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Elasticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ScalpCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ProductCompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MaintenanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Porosity {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label("porosity", value, &Self::ordered(), Self::label)
    }
}

impl FromStr for Density {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label("density", value, &Self::ordered(), Self::label)
    }
}

impl FromStr for Thickness {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label("thickness", value, &Self::ordered(), Self::label)
    }
}

impl FromStr for Elasticity {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label("elasticity", value, &Self::ordered(), Self::label)
    }
}

impl FromStr for ScalpCondition {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label("scalp condition", value, &Self::ordered(), Self::label)
    }
}

impl FromStr for ProductCompatibility {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label("product compatibility", value, &Self::ordered(), Self::label)
    }
}

impl FromStr for MaintenanceLevel {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label("maintenance level", value, &Self::ordered(), Self::label)
    }
}

/// One selected option value per question id, as submitted by the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireAnswers(BTreeMap<String, String>);

impl QuestionnaireAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, question: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(question, value);
        self
    }

    pub fn insert(
        &mut self,
        question: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(question.into(), value.into())
    }

    /// Returns the answer as submitted, treating blank values as unanswered.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.0
            .get(question)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn answer(&self, question: QuestionId) -> Option<&str> {
        self.get(question.key())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(question, value)| (question.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QuestionnaireAnswers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(question, value)| (question.into(), value.into()))
                .collect(),
        )
    }
}

/// The resolved attribute set consumed by the scorer and the recommendation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HairProfile {
    pub hair_type: HairType,
    pub porosity: Porosity,
    pub density: Density,
    pub thickness: Thickness,
    pub elasticity: Elasticity,
    pub scalp_condition: ScalpCondition,
    pub product_compatibility: ProductCompatibility,
}

impl HairProfile {
    pub fn family(&self) -> HairFamily {
        self.hair_type.family()
    }
}

/// Immutable outcome of one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HairAnalysisResult {
    pub hair_type: HairType,
    pub porosity: Porosity,
    pub density: Density,
    pub thickness: Thickness,
    pub elasticity: Elasticity,
    pub scalp_condition: ScalpCondition,
    pub product_compatibility: ProductCompatibility,
    pub maintenance_level: MaintenanceLevel,
    pub recommended_products: Vec<String>,
    pub recommended_routine: Vec<String>,
    pub care_instructions: Vec<String>,
}

impl HairAnalysisResult {
    pub fn profile(&self) -> HairProfile {
        HairProfile {
            hair_type: self.hair_type,
            porosity: self.porosity,
            density: self.density,
            thickness: self.thickness,
            elasticity: self.elasticity,
            scalp_condition: self.scalp_condition,
            product_compatibility: self.product_compatibility,
        }
    }
}

/// Identifier wrapper for stored analyses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the hair type of a stored analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Questionnaire,
    Photo,
}

impl AnalysisSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Questionnaire => "questionnaire",
            Self::Photo => "photo",
        }
    }
}

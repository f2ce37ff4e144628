use crate::infra::InMemoryAnalysisRepository;
use chrono::Local;
use clap::Args;
use hair_profile::analysis::engine::score;
use hair_profile::analysis::import::import_answers_csv_path;
use hair_profile::analysis::questionnaire::{ensure_complete, questions};
use hair_profile::analysis::{
    AnalysisRecord, HairAnalysisEngine, HairAnalysisResult, HairAnalysisService, HairType,
    ProfileInsights, QuestionId, QuestionnaireAnswers,
};
use hair_profile::config::AnalysisConfig;
use hair_profile::error::AppError;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Answer as QUESTION=VALUE, e.g. --answer pattern=coily (repeatable)
    #[arg(long = "answer", value_parser = crate::infra::parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
    /// CSV file with `question,answer` rows; --answer values take precedence
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// Hair type label reported by photo classification, replacing the quiz result
    #[arg(long)]
    pub(crate) hair_type: Option<String>,
    /// Reject answer sets that leave catalog questions unanswered
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Photo classification label applied after the questionnaire analysis
    #[arg(long, default_value = "Type 4C")]
    pub(crate) photo_label: String,
    /// Skip the photo override portion of the demo
    #[arg(long)]
    pub(crate) skip_photo: bool,
}

#[derive(Debug, Serialize)]
struct AnalysisOutput<'a> {
    result: &'a HairAnalysisResult,
    insights: ProfileInsights,
}

pub(crate) fn run_questions() {
    println!("Hair quiz ({} questions)", questions().len());
    for (index, question) in questions().iter().enumerate() {
        println!("\n{}. {} [{}]", index + 1, question.prompt, question.id.key());
        println!("   {}", question.help_text);
        for option in question.options {
            println!("   - {}: {}", option.value, option.text);
        }
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        answers: pairs,
        answers_csv,
        hair_type,
        strict,
        json,
    } = args;

    let mut answers = match answers_csv {
        Some(path) => import_answers_csv_path(path)?,
        None => QuestionnaireAnswers::new(),
    };
    for (question, value) in pairs {
        answers.insert(question, value);
    }

    if strict {
        ensure_complete(&answers)?;
    }

    let engine = HairAnalysisEngine::new();
    let result = match hair_type.as_deref() {
        Some(label) => {
            engine.analyze_with_hair_type(&answers, HairType::from_external_label(label))
        }
        None => engine.analyze(&answers),
    };

    if json {
        let output = AnalysisOutput {
            result: &result,
            insights: ProfileInsights::for_result(&result),
        };
        let rendered = serde_json::to_string_pretty(&output).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_answers(&answers);
        render_result(&result);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        photo_label,
        skip_photo,
    } = args;

    println!("Hair profile demo");
    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let service = HairAnalysisService::new(repository, AnalysisConfig::default());

    let answers = sample_answers();
    render_answers(&answers);
    let record = service.submit(answers)?;
    render_record(&record);

    if !skip_photo {
        println!("\nPhoto classification reported '{photo_label}'");
        let updated = service.apply_photo_hair_type(&record.analysis_id, &photo_label)?;
        if updated.result.hair_type == record.result.hair_type {
            println!("Hair type unchanged ({})", updated.result.hair_type);
        } else {
            println!(
                "Hair type {} -> {}, maintenance {} -> {}",
                record.result.hair_type,
                updated.result.hair_type,
                record.result.maintenance_level,
                updated.result.maintenance_level
            );
        }
        render_record(&updated);
    }

    Ok(())
}

fn sample_answers() -> QuestionnaireAnswers {
    let values = [
        "coily",
        "4b",
        "high_porosity",
        "high_porosity_confirmed",
        "high_density",
        "coarse",
        "low_elasticity",
        "dry_scalp",
        "buildup_prone",
        "color_treated",
        "high_frizz",
    ];
    QuestionId::ordered()
        .into_iter()
        .zip(values)
        .map(|(question, value)| (question.key(), value))
        .collect()
}

fn render_answers(answers: &QuestionnaireAnswers) {
    if answers.is_empty() {
        println!("Answers: none (all attributes use defaults)");
        return;
    }

    println!("Answers");
    for (question, value) in answers.iter() {
        println!("- {}: {}", question, value);
    }
}

fn render_record(record: &AnalysisRecord) {
    println!(
        "\nAnalysis {} ({}, recorded {})",
        record.analysis_id,
        record.source.label(),
        record
            .recorded_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    );
    render_result(&record.result);
}

fn render_result(result: &HairAnalysisResult) {
    let insights = ProfileInsights::for_result(result);
    let maintenance = score(
        result.hair_type,
        result.porosity,
        result.density,
        result.thickness,
    );

    println!(
        "\nHair type {}: {}",
        result.hair_type, insights.hair_type.description
    );
    println!(
        "Porosity {}: {}",
        result.porosity, insights.porosity.description
    );
    println!("Density {}: {}", result.density, insights.density.description);
    println!(
        "Thickness {} | Elasticity {} | Scalp {} | Products {}",
        result.thickness, result.elasticity, result.scalp_condition, result.product_compatibility
    );
    println!(
        "Maintenance {} (score {})",
        result.maintenance_level, maintenance.total
    );

    render_list("Recommended products", &result.recommended_products);
    render_list("Routine", &result.recommended_routine);
    render_list("Care instructions", &result.care_instructions);

    if !insights.hair_type.tips.is_empty() {
        println!("\nStyling tips");
        for tip in insights.hair_type.tips {
            println!("- {}", tip);
        }
    }
}

fn render_list(title: &str, entries: &[String]) {
    println!("\n{title}");
    for entry in entries {
        println!("- {}", entry);
    }
}

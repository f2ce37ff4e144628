//! Questionnaire answers supplied as a two-column CSV export (`question,answer`).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::domain::QuestionnaireAnswers;
use super::questionnaire::QuestionId;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answers file: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answers CSV: {}", err),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question: String,
    #[serde(default)]
    answer: Option<String>,
}

/// Reads answers from CSV. Blank answers are skipped; later rows overwrite earlier
/// ones for the same question. Unknown question ids are kept but logged.
pub fn import_answers_csv<R: Read>(reader: R) -> Result<QuestionnaireAnswers, AnswerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut answers = QuestionnaireAnswers::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        let Some(answer) = row.answer.filter(|value| !value.is_empty()) else {
            continue;
        };
        if QuestionId::from_key(&row.question).is_none() {
            warn!(question = %row.question, "answer for unknown question id");
        }
        answers.insert(row.question, answer);
    }

    Ok(answers)
}

pub fn import_answers_csv_path<P: AsRef<Path>>(
    path: P,
) -> Result<QuestionnaireAnswers, AnswerImportError> {
    let file = File::open(path)?;
    import_answers_csv(file)
}

use std::collections::HashSet;
use std::path::Path;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::input::{
    FreeTextInputRequest, InputRequest, MultipleChoiceInputRequest, NumericRangeInputRequest,
    YesNoInputRequest,
};

const ID_PATTERN: &str = "^[a-z][a-z0-9_-]*$";

/// The validation rule a question carries, as written in the question
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Closed set of acceptable answers
    Choice { choices: Vec<String> },
    /// yes/no confirmation
    YesNo,
    /// Any non-empty line
    Text,
    /// Integer inside an inclusive range
    Number { min: i64, max: i64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub id: String,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl QuestionSpec {
    /// Build the request this spec describes. Fails when the prompt or
    /// the rule parameters violate the request's construction rules.
    pub fn build_request(&self) -> Result<Box<dyn InputRequest>> {
        let request: Box<dyn InputRequest> = match &self.kind {
            QuestionKind::Choice { choices } => Box::new(MultipleChoiceInputRequest::new(
                self.prompt.clone(),
                choices.clone(),
            )?),
            QuestionKind::YesNo => Box::new(YesNoInputRequest::new(self.prompt.clone())?),
            QuestionKind::Text => Box::new(FreeTextInputRequest::new(self.prompt.clone())?),
            QuestionKind::Number { min, max } => Box::new(NumericRangeInputRequest::new(
                self.prompt.clone(),
                *min,
                *max,
            )?),
        };
        Ok(request)
    }
}

/// An ordered list of questions loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Questionnaire {
    pub questions: Vec<QuestionSpec>,
}

impl Questionnaire {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question file {}", path.display()))?;
        let questionnaire: Questionnaire = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse question file {}", path.display()))?;
        Ok(questionnaire)
    }

    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            anyhow::bail!("Question file contains no questions");
        }

        let id_pattern = Regex::new(ID_PATTERN)?;
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !id_pattern.is_match(&question.id) {
                anyhow::bail!("Question id '{}' is not a valid identifier", question.id);
            }
            if !seen.insert(question.id.as_str()) {
                anyhow::bail!("Duplicate question id '{}'", question.id);
            }
            question
                .build_request()
                .with_context(|| format!("Question '{}' is not well formed", question.id))?;
        }
        Ok(())
    }

    pub fn info(&self) -> String {
        let ids: Vec<_> = self.questions.iter().map(|q| q.id.as_str()).collect();
        format!("{} questions: {}", self.questions.len(), ids.join(", "))
    }
}

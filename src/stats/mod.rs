use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress counters for one questionnaire run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub run_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_questions: u32,
    pub total_answered: u32,
    pub total_retries: u32,
}

impl RunStats {
    pub fn new(run_name: String, total_questions: u32) -> Self {
        Self {
            run_name,
            start_time: Utc::now(),
            end_time: None,
            total_questions,
            total_answered: 0,
            total_retries: 0,
        }
    }

    pub fn duration(&self) -> Duration {
        let end = self.end_time.unwrap_or_else(Utc::now);
        end.signed_duration_since(self.start_time)
            .to_std()
            .unwrap_or_else(|_| Duration::from_secs(0))
    }

    pub fn complete(&mut self) {
        self.end_time = Some(Utc::now());
    }

    /// Record an accepted answer; tries beyond the first count as
    /// retries.
    pub fn add_answer(&mut self, attempts: u32) {
        self.total_answered += 1;
        self.total_retries += attempts.saturating_sub(1);
    }

    pub fn summary(&self) -> String {
        format!(
            "Run {}: answered {}/{} questions, {} retries, took {:?}",
            self.run_name,
            self.total_answered,
            self.total_questions,
            self.total_retries,
            self.duration()
        )
    }
}

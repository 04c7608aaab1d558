use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use anyhow::Result;
use colored::*;
use log::info;

use crate::cli::config::answers_path;
use crate::input::{create_default_input_handler, InputHandler};
use crate::models::Questionnaire;
use crate::stats::RunStats;
use crate::utils::answer_file::{log_answers, AnswerRecord};
use crate::utils::generate_run_name;

/// One interactive pass over a questionnaire: ask each question in
/// order, record the accepted answers, stop early on cancellation.
pub struct AskRun {
    questionnaire: Questionnaire,
    run_name: String,
    interrupted: Arc<AtomicBool>,
    stats: RunStats,
}

impl AskRun {
    pub fn new(questionnaire: Questionnaire, run_name: Option<String>) -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));
        let int_handler = Arc::clone(&interrupted);

        ctrlc::set_handler(move || {
            int_handler.store(true, Ordering::SeqCst);
        })
        .expect("Error setting Ctrl-C handler");

        let run_name = run_name.unwrap_or_else(generate_run_name);
        let stats = RunStats::new(run_name.clone(), questionnaire.questions.len() as u32);

        Self {
            questionnaire,
            run_name,
            interrupted,
            stats,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.questionnaire.validate()?;

        println!(
            "{}",
            format!(
                "starting run | name: {} ({})",
                self.run_name.cyan(),
                self.questionnaire.info()
            )
            .dimmed()
        );

        let mut handler = create_default_input_handler();
        let mut records = Vec::new();

        for question in &self.questionnaire.questions {
            // Ctrl-C lands between questions; answers collected so far
            // are still written out.
            if self.interrupted.load(Ordering::SeqCst) {
                println!(
                    "{}",
                    "Interrupted before all questions were answered.".yellow()
                );
                break;
            }

            let request = question.build_request()?;
            match handler.ask(request.as_ref())? {
                Some(answer) => {
                    self.stats.add_answer(answer.attempts);
                    records.push(AnswerRecord::new(&question.id, &answer.text, answer.attempts));
                }
                None => {
                    println!(
                        "{}",
                        "Input closed before all questions were answered.".yellow()
                    );
                    break;
                }
            }
        }

        if !records.is_empty() {
            let path = answers_path(&self.run_name)?;
            log_answers(&path, &records)?;
            println!(
                "{}",
                format!("saved {} answers to {}", records.len(), path.display()).dimmed()
            );
        }

        self.stats.complete();
        info!("{}", self.stats.summary());

        Ok(())
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}

/// Validate a question file without asking anything.
pub fn check(file: &Path) -> Result<()> {
    let questionnaire = Questionnaire::load(file)?;
    questionnaire.validate()?;
    println!("{} {}", "OK".green().bold(), questionnaire.info());
    Ok(())
}

/// Print the rendered prompt for every question in a file.
pub fn render(file: &Path) -> Result<()> {
    let questionnaire = Questionnaire::load(file)?;
    questionnaire.validate()?;
    for question in &questionnaire.questions {
        println!("{}", question.build_request()?.prompt());
    }
    Ok(())
}

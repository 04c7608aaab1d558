use anyhow::Result;
use colored::*;

use crate::cli::config::answers_dir;
use crate::utils::answer_file::{clear_answer_files, list_sorted_answer_files, read_from_file};

/// List recorded runs, newest first.
pub fn list() -> Result<()> {
    let dir = answers_dir();
    if !dir.exists() {
        println!("No recorded answers.");
        return Ok(());
    }

    let runs = list_sorted_answer_files(&dir)?;
    if runs.is_empty() {
        println!("No recorded answers.");
        return Ok(());
    }

    for (name, path) in runs {
        let count = read_from_file(&path).map(|records| records.len()).unwrap_or(0);
        println!("{}  {} answers  {}", name.cyan(), count, path.display());
    }
    Ok(())
}

/// Delete all but the `keep` newest recorded runs.
pub fn clear(keep: usize) -> Result<()> {
    let dir = answers_dir();
    if !dir.exists() {
        println!("No recorded answers.");
        return Ok(());
    }

    let removed = clear_answer_files(&dir, keep)?;
    println!("Removed {} answer files", removed);
    Ok(())
}

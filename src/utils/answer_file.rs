use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ANSWER_FILE_SUFFIX: &str = ".jsonl";

/// One accepted operator answer, as persisted to a run's answer file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: String,
    pub question_id: String,
    pub answer: String,
    pub attempts: u32,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn new(question_id: &str, answer: &str, attempts: u32) -> Self {
        Self {
            id: format!("ans_{}", uuid::Uuid::new_v4()),
            question_id: question_id.to_string(),
            answer: answer.to_string(),
            attempts,
            answered_at: Utc::now(),
        }
    }
}

pub fn read_from_file(file_path: &Path) -> Result<Vec<AnswerRecord>> {
    let content = std::fs::read_to_string(file_path)?;
    let records = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

pub fn log_answers(file_path: &Path, records: &[AnswerRecord]) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(file_path)?;

    for record in records {
        serde_json::to_writer(&mut file, record)?;
        writeln!(file)?;
    }
    Ok(())
}

pub fn list_answer_files(answers_directory: &Path) -> Result<Vec<PathBuf>> {
    Ok(std::fs::read_dir(answers_directory)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|ext| ext == "jsonl").unwrap_or(false))
        .collect())
}

/// Recorded runs, newest first.
pub fn list_sorted_answer_files(answers_directory: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut runs = list_answer_files(answers_directory)?
        .into_iter()
        .filter_map(|path| {
            path.file_stem()
                .map(|stem| (stem.to_string_lossy().into_owned(), path.clone()))
        })
        .collect::<Vec<_>>();

    runs.sort_by_key(|(_, path)| {
        std::cmp::Reverse(
            path.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH),
        )
    });

    Ok(runs)
}

/// Delete all but the `keep` newest answer files. Returns how many were
/// removed.
pub fn clear_answer_files(answers_directory: &Path, keep: usize) -> Result<usize> {
    let runs = list_sorted_answer_files(answers_directory)?;
    let mut removed = 0;
    for (_, path) in runs.into_iter().skip(keep) {
        std::fs::remove_file(path)?;
        removed += 1;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_and_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run-ab12.jsonl");

        let records = vec![
            AnswerRecord::new("env", "prod", 1),
            AnswerRecord::new("deploy", "yes", 3),
        ];
        log_answers(&path, &records).unwrap();

        let loaded = read_from_file(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].question_id, "env");
        assert_eq!(loaded[0].answer, "prod");
        assert_eq!(loaded[1].attempts, 3);
        assert!(loaded[0].id.starts_with("ans_"));
    }

    #[test]
    fn test_append_preserves_existing_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run-cd34.jsonl");

        log_answers(&path, &[AnswerRecord::new("env", "dev", 1)]).unwrap();
        log_answers(&path, &[AnswerRecord::new("reason", "smoke test", 1)]).unwrap();

        let loaded = read_from_file(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_list_ignores_other_files() {
        let dir = tempdir().unwrap();
        log_answers(
            &dir.path().join("run-a.jsonl"),
            &[AnswerRecord::new("q", "a", 1)],
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not an answer file").unwrap();

        let files = list_answer_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_clear_keeps_requested_count() {
        let dir = tempdir().unwrap();
        for name in ["run-a", "run-b", "run-c"] {
            log_answers(
                &dir.path().join(format!("{}.jsonl", name)),
                &[AnswerRecord::new("q", "a", 1)],
            )
            .unwrap();
        }

        let removed = clear_answer_files(dir.path(), 1).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(list_answer_files(dir.path()).unwrap().len(), 1);
    }
}

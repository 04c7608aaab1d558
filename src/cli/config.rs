use std::path::PathBuf;
use anyhow::Result;

use crate::utils::answer_file::ANSWER_FILE_SUFFIX;

pub const ASKLINE_GLOBAL_PATH: &str = "~/.config/askline";
pub const ANSWERS_PATH: &str = "~/.config/askline/answers";

pub fn answers_dir() -> PathBuf {
    shellexpand::tilde(ANSWERS_PATH).into_owned().into()
}

/// The answer file for a named run. Creates the answers directory on
/// first use.
pub fn answers_path(name: &str) -> Result<PathBuf> {
    let mut path = answers_dir();
    std::fs::create_dir_all(&path)?;
    path.push(format!("{}{}", name, ANSWER_FILE_SUFFIX));
    Ok(path)
}

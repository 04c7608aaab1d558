//! Backward compatible accessors for compile options.
//!
//! Older build scripts configured the bootstrap classpath as a single
//! separator-joined string; the current property is a list of paths.
//! The string accessors forward to the list property and nag via the
//! log.

use std::env;
use std::path::PathBuf;
use anyhow::Result;
use log::warn;

/// Options handed to the compiler process.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    bootstrap_classpath: Option<Vec<PathBuf>>,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bootstrap_classpath(&self) -> Option<&[PathBuf]> {
        self.bootstrap_classpath.as_deref()
    }

    pub fn set_bootstrap_classpath(&mut self, paths: Option<Vec<PathBuf>>) {
        self.bootstrap_classpath = paths;
    }

    /// The bootstrap classpath as a single string joined with the
    /// platform path-list separator. `None` when unset.
    #[deprecated(note = "use bootstrap_classpath instead")]
    pub fn boot_classpath(&self) -> Result<Option<String>> {
        warn!("CompileOptions.boot_classpath has been replaced by CompileOptions.bootstrap_classpath");
        match &self.bootstrap_classpath {
            None => Ok(None),
            Some(paths) => {
                let joined = env::join_paths(paths)?;
                Ok(Some(joined.to_string_lossy().into_owned()))
            }
        }
    }

    /// Sets the bootstrap classpath from a separator-joined string.
    /// `None` clears it.
    #[deprecated(note = "use set_bootstrap_classpath instead")]
    pub fn set_boot_classpath(&mut self, value: Option<&str>) {
        warn!("CompileOptions.boot_classpath has been replaced by CompileOptions.bootstrap_classpath");
        self.bootstrap_classpath = value.map(|v| env::split_paths(v).collect());
    }
}

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::constants::discovery::SKIPPED_DIRS;
use crate::error::LearningGraphError;
use crate::progress::ProgressReporter;

/// Expands CLI paths into the learning graph files to check
pub struct GraphDiscovery {
    pattern: Pattern,
}

impl GraphDiscovery {
    pub fn new(pattern: &str) -> Result<Self, LearningGraphError> {
        let pattern = Pattern::new(pattern).map_err(|source| LearningGraphError::PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Files are taken as given; directories are searched recursively for
    /// file names matching the pattern. The result is sorted and unique.
    pub fn discover(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>, LearningGraphError> {
        let mut found = BTreeSet::new();

        for path in paths {
            if path.is_file() {
                found.insert(path.clone());
            } else if path.is_dir() {
                if let Some(p) = progress {
                    p.scanning_directory(path);
                }
                found.extend(self.discover_in_dir(path));
            } else {
                return Err(LearningGraphError::SourceNotFound { path: path.clone() });
            }
        }

        Ok(found.into_iter().collect())
    }

    fn discover_in_dir(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| {
                // The root itself is never skipped, even if it is named e.g. `site`
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || !SKIPPED_DIRS.iter().any(|skip| e.file_name() == *skip)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|name| self.pattern.matches(name))
            })
            .map(|e| e.into_path())
            .collect()
    }
}

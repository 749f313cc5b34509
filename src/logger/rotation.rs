//! File rotation management for the logger

use crate::logger::compression::gzip_file;
use crate::logger::config::{RotationConfig, RotationStrategy, TimeUnit};
use jiff::{Timestamp, Zoned};
use std::fs;
use std::path::{Path, PathBuf};

/// Decides when the active log file rotates and prunes old files afterwards.
pub struct RotationManager {
    config: RotationConfig,
    next_time_boundary: Option<Timestamp>,
}

impl RotationManager {
    pub fn new(config: RotationConfig) -> Self {
        let next_time_boundary = Self::time_unit(&config.strategy)
            .map(|unit| unit.next_boundary(Timestamp::now()));

        Self {
            config,
            next_time_boundary,
        }
    }

    fn time_unit(strategy: &RotationStrategy) -> Option<TimeUnit> {
        match strategy {
            RotationStrategy::Time(unit) => Some(*unit),
            RotationStrategy::Combined => Some(TimeUnit::Daily),
            RotationStrategy::Size | RotationStrategy::Count => None,
        }
    }

    /// Whether the active file should be rotated before the next write.
    pub fn should_rotate(&self, current_file_size: u64) -> bool {
        let size_exceeded = current_file_size >= self.config.max_size;
        let time_elapsed = self
            .next_time_boundary
            .is_some_and(|boundary| Timestamp::now() >= boundary);

        match self.config.strategy {
            RotationStrategy::Size => size_exceeded,
            RotationStrategy::Time(_) => time_elapsed,
            RotationStrategy::Count => false,
            RotationStrategy::Combined => size_exceeded || time_elapsed,
        }
    }

    /// Renames the active file to a timestamped sibling, optionally gzips
    /// it, then prunes rotated files beyond `max_files`.
    pub fn rotate(&mut self, current_path: &Path) -> anyhow::Result<()> {
        if current_path.exists() {
            let rotated_path = rotated_path_for(current_path);
            fs::rename(current_path, &rotated_path)?;

            if self.config.compress {
                gzip_file(&rotated_path)?;
            }
        }

        self.next_time_boundary = Self::time_unit(&self.config.strategy)
            .map(|unit| unit.next_boundary(Timestamp::now()));

        self.prune(current_path, self.config.max_files)
    }

    /// Drops rotated files, oldest first, until fewer than `keep` remain.
    pub fn prune(&self, base_path: &Path, keep: usize) -> anyhow::Result<()> {
        let parent = match base_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let stem = base_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        let prefix = format!("{stem}.");

        let mut rotated_files: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.as_path() != base_path
                    && path
                        .file_name()
                        .is_some_and(|name| name.to_string_lossy().starts_with(&prefix))
            })
            .collect();

        rotated_files.sort_by_key(|path| fs::metadata(path).and_then(|m| m.modified()).ok());

        let excess = (rotated_files.len() + 1).saturating_sub(keep);
        for oldest in rotated_files.iter().take(excess) {
            fs::remove_file(oldest)?;
        }

        Ok(())
    }
}

/// `logs/app.log` becomes `logs/app.20240101_120000.log`.
fn rotated_path_for(base_path: &Path) -> PathBuf {
    let timestamp = Zoned::now().strftime("%Y%m%d_%H%M%S").to_string();
    let stem = base_path.file_stem().unwrap_or_default().to_string_lossy();
    let new_name = match base_path.extension() {
        Some(ext) => format!("{}.{}.{}", stem, timestamp, ext.to_string_lossy()),
        None => format!("{}.{}", stem, timestamp),
    };

    base_path.with_file_name(new_name)
}

//! Prompt-state persistence.
//!
//! "Have we already asked this device?" is a single write-once flag. It sits
//! behind a trait so the manager can be tested without touching disk.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use color_eyre::eyre::WrapErr as _;
use serde::{Deserialize, Serialize};

/// Persisted "permission prompt already shown" flag.
pub trait PromptStore: Send + Sync {
    /// Whether the prompt has already been shown on this device.
    fn was_prompted(&self) -> color_eyre::eyre::Result<bool>;

    /// Record that the prompt has been shown.
    fn mark_prompted(&self) -> color_eyre::eyre::Result<()>;

    /// Clear the flag. Only explicit user/device action does this.
    fn clear(&self) -> color_eyre::eyre::Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PromptRecord {
    prompted: bool,
}

/// Prompt store backed by a one-field TOML file.
#[derive(Debug, Clone)]
pub struct FilePromptStore {
    path: PathBuf,
}

impl FilePromptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> color_eyre::eyre::Result<PromptRecord> {
        if !self.path.exists() {
            return Ok(PromptRecord::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .wrap_err("failed to read prompt state file")?;
        toml::from_str(&raw).wrap_err("failed to parse prompt state file")
    }

    fn write(&self, record: &PromptRecord) -> color_eyre::eyre::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err("failed to create prompt state directory")?;
        }
        let raw = toml::to_string(record).wrap_err("failed to serialize prompt state")?;
        std::fs::write(&self.path, raw).wrap_err("failed to write prompt state file")
    }
}

impl PromptStore for FilePromptStore {
    fn was_prompted(&self) -> color_eyre::eyre::Result<bool> {
        Ok(self.read()?.prompted)
    }

    fn mark_prompted(&self) -> color_eyre::eyre::Result<()> {
        self.write(&PromptRecord { prompted: true })
    }

    fn clear(&self) -> color_eyre::eyre::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).wrap_err("failed to remove prompt state file")?;
        }
        Ok(())
    }
}

/// In-memory prompt store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPromptStore {
    prompted: AtomicBool,
}

impl PromptStore for MemoryPromptStore {
    fn was_prompted(&self) -> color_eyre::eyre::Result<bool> {
        Ok(self.prompted.load(Ordering::SeqCst))
    }

    fn mark_prompted(&self) -> color_eyre::eyre::Result<()> {
        self.prompted.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> color_eyre::eyre::Result<()> {
        self.prompted.store(false, Ordering::SeqCst);
        Ok(())
    }
}

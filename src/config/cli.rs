use crate::core::{RoundSource, Storage};
use crate::utils::error::{LigaError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(full_path, data).await?;
        Ok(())
    }

    fn location(&self, path: &str) -> String {
        self.base_path.join(path).display().to_string()
    }
}

/// Reads leagues from `<root>/<league>/*.txt`, one file per round.
#[derive(Debug, Clone)]
pub struct LocalRoundSource {
    root: PathBuf,
}

impl LocalRoundSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unknown(&self, league: &str) -> LigaError {
        LigaError::UnknownLeague {
            league: league.to_string(),
            root: self.root.display().to_string(),
        }
    }

    async fn sorted_entries(&self, dir: &Path, want_dirs: bool) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let file_type = entry.file_type().await?;
            let path = entry.path();
            let keep = if want_dirs {
                file_type.is_dir()
            } else {
                file_type.is_file() && path.extension().is_some_and(|ext| ext == "txt")
            };
            if !keep {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => tracing::warn!("Skipping non UTF-8 entry {:?}", name),
            }
        }

        names.sort();
        Ok(names)
    }
}

impl RoundSource for LocalRoundSource {
    async fn list_leagues(&self) -> Result<Vec<String>> {
        if !fs::try_exists(&self.root).await.unwrap_or(false) {
            return Err(self.unknown(""));
        }
        self.sorted_entries(&self.root, true).await
    }

    async fn list_rounds(&self, league: &str) -> Result<Vec<String>> {
        let league_dir = self.root.join(league);
        if league.trim().is_empty() || !fs::metadata(&league_dir).await.is_ok_and(|m| m.is_dir()) {
            return Err(self.unknown(league));
        }
        self.sorted_entries(&league_dir, false).await
    }

    async fn read_round(&self, league: &str, round_id: &str) -> Result<Vec<String>> {
        let content = fs::read_to_string(self.root.join(league).join(round_id)).await?;
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

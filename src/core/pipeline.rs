use crate::core::render::render;
use crate::core::table::build_table;
use crate::core::{ConfigProvider, Pipeline, Result, RoundSource, Storage};
use crate::domain::model::{LeagueTable, RoundBatch, TableRequest};
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub struct LeaguePipeline<R: RoundSource, S: Storage, C: ConfigProvider> {
    source: R,
    storage: S,
    config: C,
}

impl<R: RoundSource, S: Storage, C: ConfigProvider> LeaguePipeline<R, S, C> {
    pub fn new(source: R, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    fn rendered_files(&self, table: &LeagueTable) -> Result<Vec<(String, String)>> {
        self.config
            .output_formats()
            .iter()
            .map(|format| {
                let name = format!("{}.{}", table.league, format.extension());
                Ok((name, render(table, *format)?))
            })
            .collect()
    }

    fn archive(files: &[(String, String)]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (name, content) in files {
            zip.start_file(name.as_str(), SimpleFileOptions::default())?;
            zip.write_all(content.as_bytes())?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<R: RoundSource, S: Storage, C: ConfigProvider> Pipeline for LeaguePipeline<R, S, C> {
    async fn extract(&self, request: &TableRequest) -> Result<Vec<RoundBatch>> {
        let round_ids = self.source.list_rounds(&request.league).await?;
        tracing::debug!(
            "League '{}' has {} round files",
            request.league,
            round_ids.len()
        );

        let mut rounds = Vec::with_capacity(round_ids.len());
        for id in round_ids {
            let lines = self.source.read_round(&request.league, &id).await?;
            tracing::debug!("Read round '{}' ({} lines)", id, lines.len());
            rounds.push(RoundBatch::new(id, lines));
        }

        if rounds.is_empty() {
            tracing::warn!("No round files found for league '{}'", request.league);
        }

        Ok(rounds)
    }

    async fn transform(
        &self,
        request: &TableRequest,
        rounds: Vec<RoundBatch>,
    ) -> Result<LeagueTable> {
        build_table(request, &rounds)
    }

    async fn load(&self, table: &LeagueTable) -> Result<Vec<String>> {
        if self.config.output_path().is_none() {
            tracing::debug!("No output path configured, skipping file output");
            return Ok(Vec::new());
        }

        let files = self.rendered_files(table)?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(archive_name) = self.config.archive_name() {
            tracing::debug!("Creating ZIP archive with {} files", files.len());
            let zip_data = Self::archive(&files)?;
            self.storage.write_file(archive_name, &zip_data).await?;
            return Ok(vec![self.storage.location(archive_name)]);
        }

        let mut written = Vec::with_capacity(files.len());
        for (name, content) in &files {
            self.storage.write_file(name, content.as_bytes()).await?;
            written.push(self.storage.location(name));
        }
        Ok(written)
    }
}

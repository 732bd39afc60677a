use crate::core::Pipeline;
use crate::domain::model::{LeagueTable, TableRequest};
use crate::utils::error::Result;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub table: LeagueTable,
    pub outputs: Vec<String>,
}

pub struct TableEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TableEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self, request: &TableRequest) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!(
            "Building table for '{}' ({:?})",
            request.league,
            request.selection
        );

        let rounds = self.pipeline.extract(request).await?;
        tracing::info!("Extracted {} rounds", rounds.len());

        let table = self.pipeline.transform(request, rounds).await?;
        tracing::info!(
            "Ranked {} teams over {} of {} rounds",
            table.standings.len(),
            table.rounds_processed,
            table.total_rounds
        );

        let outputs = self.pipeline.load(&table).await?;
        for output in &outputs {
            tracing::info!("Output saved to: {}", output);
        }

        tracing::debug!("Run finished in {:?}", started.elapsed());
        Ok(RunSummary { table, outputs })
    }
}

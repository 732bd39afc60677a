use crate::domain::model::{LeagueTable, OutputFormat, RoundBatch, TableRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies league names, ordered round ids and the raw lines of a round.
pub trait RoundSource: Send + Sync {
    fn list_leagues(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;

    /// Round ids in canonical order.
    fn list_rounds(
        &self,
        league: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;

    fn read_round(
        &self,
        league: &str,
        round_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Display form of where `path` ends up.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> Option<&str>;
    fn output_formats(&self) -> &[OutputFormat];
    fn archive_name(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, request: &TableRequest) -> Result<Vec<RoundBatch>>;
    async fn transform(&self, request: &TableRequest, rounds: Vec<RoundBatch>)
        -> Result<LeagueTable>;
    async fn load(&self, table: &LeagueTable) -> Result<Vec<String>>;
}

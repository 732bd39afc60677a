pub mod aggregate;
pub mod etl;
pub mod outcome;
pub mod parser;
pub mod pipeline;
pub mod ranking;
pub mod render;
pub mod selection;
pub mod table;

pub use crate::domain::model::{
    LeagueTable, MatchRecord, RankedStanding, RoundBatch, RoundSelection, TableRequest,
    TeamOutcome, TeamStanding,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RoundSource, Storage};
pub use crate::utils::error::Result;

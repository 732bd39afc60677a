use crate::core::aggregate::aggregate;
use crate::core::outcome::derive_outcomes;
use crate::core::parser::parse_match;
use crate::core::ranking::rank;
use crate::core::selection::select_rounds;
use crate::domain::model::{LeagueTable, RoundBatch, TableRequest, TeamOutcome};
use crate::utils::error::Result;

fn round_outcomes(round: &RoundBatch, outcomes: &mut Vec<TeamOutcome>) -> Result<()> {
    for (index, line) in round.lines.iter().enumerate() {
        let record = parse_match(line).inspect_err(|e| {
            tracing::error!("Round '{}' line {}: {}", round.id, index + 1, e);
        })?;
        let (home, away) = derive_outcomes(&record);
        outcomes.push(home);
        outcomes.push(away);
    }
    Ok(())
}

/// Runs parse, derive, aggregate and rank over an in-memory round snapshot.
pub fn build_table(request: &TableRequest, rounds: &[RoundBatch]) -> Result<LeagueTable> {
    let selected = select_rounds(rounds, request.selection)?;

    let mut outcomes = Vec::new();
    for round in selected {
        round_outcomes(round, &mut outcomes)?;
        tracing::debug!("Round '{}': {} matches", round.id, round.lines.len());
    }

    let standings = rank(aggregate(outcomes)?);

    Ok(LeagueTable {
        league: request.league.clone(),
        selection: request.selection,
        rounds_processed: selected.len(),
        total_rounds: rounds.len(),
        standings,
    })
}

use crate::domain::model::RoundSelection;
use crate::utils::error::{LigaError, Result};

/// Returns the rounds covered by `selection`. A cutoff outside
/// `1..=rounds.len()` is rejected, never clamped.
pub fn select_rounds<T>(rounds: &[T], selection: RoundSelection) -> Result<&[T]> {
    match selection {
        RoundSelection::All => Ok(rounds),
        RoundSelection::UpTo(k) if (1..=rounds.len()).contains(&k) => Ok(&rounds[..k]),
        RoundSelection::UpTo(k) => Err(LigaError::RoundOutOfRange {
            requested: k,
            total: rounds.len(),
        }),
    }
}

/// Blank input means all rounds; otherwise a round number in `1..=total`.
pub fn parse_round_selection(input: &str, total: usize) -> Result<RoundSelection> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(RoundSelection::All);
    }

    let requested = input.parse::<usize>().map_err(|_| LigaError::InvalidSelection {
        input: input.to_string(),
        reason: "not a round number".to_string(),
    })?;

    if requested == 0 || requested > total {
        return Err(LigaError::RoundOutOfRange { requested, total });
    }
    Ok(RoundSelection::UpTo(requested))
}

/// Picks a league by 1-based position or by exact name.
pub fn select_league<'a>(leagues: &'a [String], input: &str) -> Result<&'a str> {
    let input = input.trim();

    if let Ok(position) = input.parse::<usize>() {
        if (1..=leagues.len()).contains(&position) {
            return Ok(&leagues[position - 1]);
        }
    }

    leagues
        .iter()
        .find(|league| league.as_str() == input)
        .map(String::as_str)
        .ok_or_else(|| LigaError::UnknownLeague {
            league: input.to_string(),
            root: format!("{} available leagues", leagues.len()),
        })
}

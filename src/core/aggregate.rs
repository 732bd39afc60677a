use crate::domain::model::{TeamOutcome, TeamStanding};
use crate::utils::error::{LigaError, Result};
use std::collections::BTreeMap;

fn add(total: &mut u32, value: u32, team: &str, field: &str) -> Result<()> {
    *total = total
        .checked_add(value)
        .ok_or_else(|| LigaError::StatisticsOverflow {
            team: team.to_string(),
            field: field.to_string(),
        })?;
    Ok(())
}

/// Sums outcomes per exact team name. Teams without outcomes never appear.
pub fn aggregate<I>(outcomes: I) -> Result<Vec<TeamStanding>>
where
    I: IntoIterator<Item = TeamOutcome>,
{
    let mut by_team: BTreeMap<String, TeamStanding> = BTreeMap::new();

    for outcome in outcomes {
        let standing = by_team
            .entry(outcome.team_name.clone())
            .or_insert_with(|| TeamStanding::new(outcome.team_name.as_str()));
        let team = outcome.team_name.as_str();
        add(&mut standing.wins, outcome.win, team, "wins")?;
        add(&mut standing.losses, outcome.loss, team, "losses")?;
        add(&mut standing.draws, outcome.draw, team, "draws")?;
        add(&mut standing.goals_for, outcome.goals_for, team, "goals_for")?;
        add(&mut standing.goals_against, outcome.goals_against, team, "goals_against")?;
    }

    Ok(by_team.into_values().collect())
}

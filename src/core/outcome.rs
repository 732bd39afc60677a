use crate::domain::model::{MatchRecord, TeamOutcome};
use std::cmp::Ordering;

fn outcome(team_name: &str, goals_for: u32, goals_against: u32) -> TeamOutcome {
    let (win, loss, draw) = match goals_for.cmp(&goals_against) {
        Ordering::Greater => (1, 0, 0),
        Ordering::Less => (0, 1, 0),
        Ordering::Equal => (0, 0, 1),
    };
    TeamOutcome {
        team_name: team_name.to_string(),
        goals_for,
        goals_against,
        win,
        loss,
        draw,
    }
}

/// Splits a match into the home and away perspective.
pub fn derive_outcomes(record: &MatchRecord) -> (TeamOutcome, TeamOutcome) {
    (
        outcome(&record.team1_name, record.team1_goals, record.team2_goals),
        outcome(&record.team2_name, record.team2_goals, record.team1_goals),
    )
}

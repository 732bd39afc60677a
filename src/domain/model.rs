use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed `"<team1> <g1> : <g2> <team2>"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub team1_name: String,
    pub team1_goals: u32,
    pub team2_name: String,
    pub team2_goals: u32,
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} : {} {}",
            self.team1_name, self.team1_goals, self.team2_goals, self.team2_name
        )
    }
}

/// A single team's view of one match. Exactly one of `win`, `loss`, `draw` is 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOutcome {
    pub team_name: String,
    pub goals_for: u32,
    pub goals_against: u32,
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStanding {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStanding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedStanding {
    pub rank: usize,
    pub standing: TeamStanding,
}

/// The raw lines of one round file, in canonical round order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundBatch {
    pub id: String,
    pub lines: Vec<String>,
}

impl RoundBatch {
    pub fn new(id: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            id: id.into(),
            lines,
        }
    }
}

/// Which rounds feed the table. `All` is kept distinct from `UpTo(total)`
/// so renderers can tell a final table from a partial one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundSelection {
    #[default]
    All,
    UpTo(usize),
}

impl RoundSelection {
    pub fn from_cutoff(cutoff: Option<usize>) -> Self {
        cutoff.map_or(RoundSelection::All, RoundSelection::UpTo)
    }

    pub fn cutoff(&self) -> Option<usize> {
        match self {
            RoundSelection::All => None,
            RoundSelection::UpTo(k) => Some(*k),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRequest {
    pub league: String,
    pub selection: RoundSelection,
}

impl TableRequest {
    pub fn new(league: impl Into<String>, selection: RoundSelection) -> Self {
        Self {
            league: league.into(),
            selection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueTable {
    pub league: String,
    pub selection: RoundSelection,
    pub rounds_processed: usize,
    pub total_rounds: usize,
    pub standings: Vec<RankedStanding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_derived_fields() {
        let standing = TeamStanding {
            name: "TeamA".to_string(),
            wins: 1,
            losses: 2,
            draws: 1,
            goals_for: 3,
            goals_against: 6,
        };
        assert_eq!(standing.points(), 4);
        assert_eq!(standing.goal_difference(), -3);
        assert_eq!(standing.matches_played(), 4);
    }

    #[test]
    fn test_round_selection_from_cutoff() {
        assert_eq!(RoundSelection::from_cutoff(None), RoundSelection::All);
        assert_eq!(RoundSelection::from_cutoff(Some(3)), RoundSelection::UpTo(3));
        assert_eq!(RoundSelection::UpTo(3).cutoff(), Some(3));
    }

    #[test]
    fn test_match_record_display() {
        let record = MatchRecord {
            team1_name: "Bayern München".to_string(),
            team1_goals: 2,
            team2_name: "Hertha BSC".to_string(),
            team2_goals: 0,
        };
        assert_eq!(record.to_string(), "Bayern München 2 : 0 Hertha BSC");
    }
}

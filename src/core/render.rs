use crate::domain::model::{LeagueTable, OutputFormat, RankedStanding, RoundSelection};
use crate::utils::error::{LigaError, Result};
use serde::Serialize;
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 120;

/// Flat row shared by the JSON and CSV outputs.
#[derive(Debug, Serialize)]
pub struct StandingRow<'a> {
    pub rank: usize,
    pub team: &'a str,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
}

impl<'a> From<&'a RankedStanding> for StandingRow<'a> {
    fn from(ranked: &'a RankedStanding) -> Self {
        let s = &ranked.standing;
        Self {
            rank: ranked.rank,
            team: &s.name,
            points: s.points(),
            wins: s.wins,
            losses: s.losses,
            draws: s.draws,
            goals_for: s.goals_for,
            goals_against: s.goals_against,
            goal_difference: s.goal_difference(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TableDocument<'a> {
    league: &'a str,
    through_round: Option<usize>,
    rounds_processed: usize,
    total_rounds: usize,
    generated_at: String,
    standings: Vec<StandingRow<'a>>,
}

pub fn table_header(table: &LeagueTable) -> String {
    match table.selection {
        RoundSelection::All => format!("League table: {} - final standings", table.league),
        RoundSelection::UpTo(k) => format!("League table through round {}: {}", k, table.league),
    }
}

fn write_row<W: Write>(out: &mut W, cells: [&dyn fmt::Display; 9]) -> fmt::Result {
    let [rank, team, points, wins, losses, draws, goals, against, difference] = cells;
    writeln!(
        out,
        "{:>5}  {:<41}{:>6}  {:>5}  {:>6}  {:>5}  {:>5}  {:>7}  {:>10}",
        rank, team, points, wins, losses, draws, goals, against, difference
    )
}

fn write_table<W: Write>(out: &mut W, table: &LeagueTable) -> fmt::Result {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{}", table_header(table))?;
    writeln!(out, "{}", rule)?;
    write_row(
        out,
        [
            &"Rank", &"Team", &"Points", &"Wins", &"Losses", &"Draws", &"Goals", &"Against",
            &"Difference",
        ],
    )?;
    writeln!(out, "{}", rule)?;

    for ranked in &table.standings {
        let row = StandingRow::from(ranked);
        write_row(
            out,
            [
                &row.rank,
                &row.team,
                &row.points,
                &row.wins,
                &row.losses,
                &row.draws,
                &row.goals_for,
                &row.goals_against,
                &row.goal_difference,
            ],
        )?;
    }
    Ok(())
}

pub fn render_text(table: &LeagueTable) -> String {
    let mut out = String::new();
    if write_table(&mut out, table).is_err() {
        tracing::warn!("Text rendering of '{}' stopped early", table.league);
    }
    out
}

pub fn render_json(table: &LeagueTable) -> Result<String> {
    let document = TableDocument {
        league: &table.league,
        through_round: table.selection.cutoff(),
        rounds_processed: table.rounds_processed,
        total_rounds: table.total_rounds,
        generated_at: chrono::Utc::now().to_rfc3339(),
        standings: table.standings.iter().map(StandingRow::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn render_csv(table: &LeagueTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if table.standings.is_empty() {
        // serialize() only emits headers alongside the first record
        writer.write_record([
            "rank",
            "team",
            "points",
            "wins",
            "losses",
            "draws",
            "goals_for",
            "goals_against",
            "goal_difference",
        ])?;
    }
    for ranked in &table.standings {
        writer.serialize(StandingRow::from(ranked))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LigaError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| LigaError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn render(table: &LeagueTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(table)),
        OutputFormat::Json => render_json(table),
        OutputFormat::Csv => render_csv(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TeamStanding;

    fn table(selection: RoundSelection) -> LeagueTable {
        LeagueTable {
            league: "bundesliga".to_string(),
            selection,
            rounds_processed: 2,
            total_rounds: 5,
            standings: vec![
                RankedStanding {
                    rank: 1,
                    standing: TeamStanding {
                        name: "FC Bayern München".to_string(),
                        wins: 2,
                        losses: 0,
                        draws: 0,
                        goals_for: 5,
                        goals_against: 1,
                    },
                },
                RankedStanding {
                    rank: 2,
                    standing: TeamStanding {
                        name: "Hertha BSC".to_string(),
                        wins: 0,
                        losses: 2,
                        draws: 0,
                        goals_for: 1,
                        goals_against: 5,
                    },
                },
            ],
        }
    }

    #[test]
    fn test_header_distinguishes_final_and_partial() {
        assert_eq!(
            table_header(&table(RoundSelection::All)),
            "League table: bundesliga - final standings"
        );
        assert_eq!(
            table_header(&table(RoundSelection::UpTo(2))),
            "League table through round 2: bundesliga"
        );
    }

    #[test]
    fn test_render_text_rows() {
        let text = render_text(&table(RoundSelection::All));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[4].trim_start().starts_with("1  FC Bayern München"));
        assert!(lines[5].trim_end().ends_with("-4"));
    }

    #[test]
    fn test_render_text_columns_line_up() {
        let text = render_text(&table(RoundSelection::UpTo(2)));
        let widths: Vec<usize> = text
            .lines()
            .skip(2)
            .filter(|line| !line.starts_with('-'))
            .map(|line| line.chars().count())
            .collect();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_write_table_propagates_write_errors() {
        let table = table(RoundSelection::All);
        assert!(write_table(&mut FailingWriter, &table).is_err());
        let mut out = String::new();
        assert!(write_table(&mut out, &table).is_ok());
        assert_eq!(out, render_text(&table));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&table(RoundSelection::UpTo(2))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["league"], "bundesliga");
        assert_eq!(value["through_round"], 2);
        assert_eq!(value["standings"][0]["team"], "FC Bayern München");
        assert_eq!(value["standings"][0]["points"], 6);
        assert_eq!(value["standings"][1]["goal_difference"], -4);

        let final_json = render_json(&table(RoundSelection::All)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&final_json).unwrap();
        assert!(value["through_round"].is_null());
    }

    #[test]
    fn test_render_csv() {
        let csv_output = render_csv(&table(RoundSelection::All)).unwrap();
        let lines: Vec<&str> = csv_output.lines().collect();
        assert_eq!(
            lines[0],
            "rank,team,points,wins,losses,draws,goals_for,goals_against,goal_difference"
        );
        assert_eq!(lines[1], "1,FC Bayern München,6,2,0,0,5,1,4");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_render_csv_empty_table_keeps_header() {
        let mut empty = table(RoundSelection::All);
        empty.standings.clear();
        let csv_output = render_csv(&empty).unwrap();
        assert_eq!(csv_output.lines().count(), 1);
    }
}

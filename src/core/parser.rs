use crate::domain::model::MatchRecord;
use crate::utils::error::{LigaError, Result};

fn malformed(line: &str, reason: impl Into<String>) -> LigaError {
    LigaError::MalformedMatchLine {
        line: line.to_string(),
        reason: reason.into(),
    }
}

fn parse_goals(line: &str, token: &str) -> Result<u32> {
    token.parse::<u32>().map_err(|_| {
        malformed(
            line,
            format!("goal count '{}' is not a non-negative integer", token),
        )
    })
}

/// Parses `"<team1 tokens> <g1> : <g2> <team2 tokens>"`.
///
/// The goal count is the last token left of the colon and the first token
/// right of it, so multi-word names work on either side.
pub fn parse_match(line: &str) -> Result<MatchRecord> {
    let mut halves = line.split(':');
    let (left, right) = match (halves.next(), halves.next(), halves.next()) {
        (Some(left), Some(right), None) => (left.trim(), right.trim()),
        _ => return Err(malformed(line, "expected exactly one ':' separator")),
    };

    let mut left_tokens: Vec<&str> = left.split_whitespace().collect();
    let team1_goals = match left_tokens.pop() {
        Some(token) => parse_goals(line, token)?,
        None => return Err(malformed(line, "missing home side")),
    };
    if left_tokens.is_empty() {
        return Err(malformed(line, "missing home team name"));
    }

    let mut right_tokens = right.split_whitespace();
    let team2_goals = match right_tokens.next() {
        Some(token) => parse_goals(line, token)?,
        None => return Err(malformed(line, "missing away side")),
    };
    let team2_name = right_tokens.collect::<Vec<_>>().join(" ");
    if team2_name.is_empty() {
        return Err(malformed(line, "missing away team name"));
    }

    Ok(MatchRecord {
        team1_name: left_tokens.join(" "),
        team1_goals,
        team2_name,
        team2_goals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let record = parse_match("TeamA 2 : 1 TeamB").unwrap();
        assert_eq!(record.team1_name, "TeamA");
        assert_eq!(record.team1_goals, 2);
        assert_eq!(record.team2_name, "TeamB");
        assert_eq!(record.team2_goals, 1);
    }

    #[test]
    fn test_parse_multi_word_names_and_loose_spacing() {
        let record = parse_match("  Borussia   Mönchengladbach 3:3  1. FC Köln\r").unwrap();
        assert_eq!(record.team1_name, "Borussia Mönchengladbach");
        assert_eq!(record.team1_goals, 3);
        assert_eq!(record.team2_name, "1. FC Köln");
        assert_eq!(record.team2_goals, 3);
    }

    #[test]
    fn test_reparse_of_display_form_is_identity() {
        let lines = [
            "Real Madrid 4 : 0 FC Barcelona",
            "A 0 : 0 B",
            "Paris Saint-Germain 10 : 2 Olympique de Marseille",
        ];
        for line in lines {
            let record = parse_match(line).unwrap();
            assert_eq!(parse_match(&record.to_string()).unwrap(), record);
        }
    }

    #[test]
    fn test_non_numeric_goals_rejected() {
        let err = parse_match("TeamA two : 1 TeamB").unwrap_err();
        assert!(matches!(err, LigaError::MalformedMatchLine { .. }));

        assert!(parse_match("TeamA 2 : one TeamB").is_err());
        assert!(parse_match("TeamA -1 : 1 TeamB").is_err());
    }

    #[test]
    fn test_separator_count_enforced() {
        assert!(parse_match("TeamA 2 - 1 TeamB").is_err());
        assert!(parse_match("TeamA 2 : 1 : 0 TeamB").is_err());
    }

    #[test]
    fn test_missing_names_rejected() {
        assert!(parse_match("2 : 1 TeamB").is_err());
        assert!(parse_match("TeamA 2 : 1").is_err());
        assert!(parse_match(" : ").is_err());
        assert!(parse_match("").is_err());
    }
}

use crate::core::selection::{parse_round_selection, select_league};
use crate::domain::model::RoundSelection;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Reads one line; `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks until a valid league is chosen. `None` on `exit` or end of input.
pub fn prompt_league<R: BufRead, W: Write>(
    leagues: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>> {
    writeln!(out, "Available leagues:")?;
    for (index, league) in leagues.iter().enumerate() {
        writeln!(out, "[{}] {}", index + 1, league)?;
    }

    loop {
        write!(out, "\nEnter league number or name, or 'exit' to quit: ")?;
        out.flush()?;

        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };
        if answer.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }

        match select_league(leagues, &answer) {
            Ok(league) => return Ok(Some(league.to_string())),
            Err(e) => {
                tracing::debug!("Rejected league input: {}", e);
                writeln!(
                    out,
                    "{}. Enter a number between 1 and {} or a listed league name.",
                    e.user_friendly_message(),
                    leagues.len()
                )?;
            }
        }
    }
}

/// Asks until the answer is blank (all rounds) or a round in `1..=total`.
/// `None` at end of input.
pub fn prompt_round_selection<R: BufRead, W: Write>(
    total: usize,
    input: &mut R,
    out: &mut W,
) -> Result<Option<RoundSelection>> {
    loop {
        writeln!(
            out,
            "Compute the table up to which round? (1 to {}, leave empty for all rounds): ",
            total
        )?;
        out.flush()?;

        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };

        match parse_round_selection(&answer, total) {
            Ok(selection) => return Ok(Some(selection)),
            Err(e) if e.is_recoverable() => {
                writeln!(
                    out,
                    "Invalid input. Please enter a number between 1 and {}.",
                    total
                )?;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn leagues() -> Vec<String> {
        vec!["bundesliga".to_string(), "premier-league".to_string()]
    }

    #[test]
    fn test_round_selection_empty_means_all() {
        let mut out = Vec::new();
        let selection = prompt_round_selection(5, &mut Cursor::new("\n"), &mut out).unwrap();
        assert_eq!(selection, Some(RoundSelection::All));
    }

    #[test]
    fn test_round_selection_valid_number() {
        let mut out = Vec::new();
        let selection = prompt_round_selection(5, &mut Cursor::new("3\n"), &mut out).unwrap();
        assert_eq!(selection, Some(RoundSelection::UpTo(3)));
    }

    #[test]
    fn test_round_selection_prompts_again() {
        let mut out = Vec::new();
        let selection =
            prompt_round_selection(5, &mut Cursor::new("invalid\n9\n3\n"), &mut out).unwrap();
        assert_eq!(selection, Some(RoundSelection::UpTo(3)));

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_round_selection_end_of_input() {
        let mut out = Vec::new();
        let selection = prompt_round_selection(5, &mut Cursor::new(""), &mut out).unwrap();
        assert_eq!(selection, None);
    }

    #[test]
    fn test_league_by_number_after_bad_input() {
        let mut out = Vec::new();
        let league = prompt_league(&leagues(), &mut Cursor::new("serie-a\n2\n"), &mut out).unwrap();
        assert_eq!(league.as_deref(), Some("premier-league"));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("[1] bundesliga"));
        assert!(printed.contains("League 'serie-a' was not found"));
    }

    #[test]
    fn test_league_exit() {
        let mut out = Vec::new();
        let league = prompt_league(&leagues(), &mut Cursor::new("EXIT\n"), &mut out).unwrap();
        assert!(league.is_none());
    }
}

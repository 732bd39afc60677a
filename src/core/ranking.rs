use crate::domain::model::{RankedStanding, TeamStanding};
use std::cmp::Ordering;

/// Points, goal difference and wins descending, then name ascending.
/// Names are unique after aggregation, so this never returns `Equal` for
/// distinct standings.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| a.name.cmp(&b.name))
}

pub fn rank(mut standings: Vec<TeamStanding>) -> Vec<RankedStanding> {
    standings.sort_by(compare_standings);
    standings
        .into_iter()
        .enumerate()
        .map(|(index, standing)| RankedStanding {
            rank: index + 1,
            standing,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(name: &str, wins: u32, draws: u32, goals_for: u32, goals_against: u32) -> TeamStanding {
        TeamStanding {
            name: name.to_string(),
            wins,
            losses: 0,
            draws,
            goals_for,
            goals_against,
        }
    }

    fn names(ranked: &[RankedStanding]) -> Vec<&str> {
        ranked.iter().map(|r| r.standing.name.as_str()).collect()
    }

    #[test]
    fn test_points_then_difference() {
        // TeamA: 4 pts, +2; TeamB: 4 pts, +1; TeamC: 3 pts, +1
        let ranked = rank(vec![
            standing("TeamB", 1, 1, 2, 1),
            standing("TeamA", 1, 1, 3, 1),
            standing("TeamC", 1, 0, 2, 1),
        ]);
        assert_eq!(names(&ranked), vec!["TeamA", "TeamB", "TeamC"]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_wins_break_equal_points_and_difference() {
        // both 3 points and +0
        let ranked = rank(vec![
            standing("Draws", 0, 3, 3, 3),
            standing("Winner", 1, 0, 4, 4),
        ]);
        assert_eq!(names(&ranked), vec!["Winner", "Draws"]);
    }

    #[test]
    fn test_name_breaks_remaining_ties() {
        let ranked = rank(vec![
            standing("Gamma", 1, 0, 2, 1),
            standing("Alpha", 1, 0, 2, 1),
            standing("Beta", 1, 0, 2, 1),
        ]);
        assert_eq!(names(&ranked), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_order_is_total() {
        let standings = vec![
            standing("A", 2, 0, 5, 1),
            standing("B", 1, 3, 4, 4),
            standing("C", 2, 0, 5, 1),
            standing("D", 0, 6, 2, 2),
        ];
        for a in &standings {
            for b in &standings {
                if a.name != b.name {
                    assert_ne!(compare_standings(a, b), Ordering::Equal);
                }
            }
        }
    }

    #[test]
    fn test_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}

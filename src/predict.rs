use super::generic_structs::*;
use std::cmp::Ordering;

/// More points wins. Level on points, better goal difference wins. Level on both is a draw.
/// Nothing but points and goal difference is looked at.
pub fn predict(home: &StandingsRow, away: &StandingsRow) -> Prediction {
    match home
        .points
        .cmp(&away.points)
        .then(home.goal_difference.cmp(&away.goal_difference))
    {
        Ordering::Greater => Prediction::HomeWin,
        Ordering::Less => Prediction::AwayWin,
        Ordering::Equal => Prediction::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(points: i64, goal_difference: i64) -> StandingsRow {
        StandingsRow {
            team: String::from("Team"),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            points,
            goals_for: 0,
            goals_against: 0,
            goal_difference,
        }
    }

    #[test]
    fn goal_difference_breaks_tie() {
        let home = row(50, 10);
        let away = row(50, 5);
        assert_eq!(predict(&home, &away), Prediction::HomeWin);
        assert_eq!(predict(&away, &home), Prediction::AwayWin);
    }

    #[test]
    fn level_is_draw() {
        assert_eq!(predict(&row(40, -2), &row(40, -2)), Prediction::Draw);
    }

    #[test]
    fn points_dominate_goal_difference() {
        assert_eq!(predict(&row(61, 0), &row(58, 20)), Prediction::HomeWin);
        assert_eq!(predict(&row(58, 20), &row(61, 0)), Prediction::AwayWin);
    }

    #[test]
    fn other_fields_ignored() {
        let mut home = row(30, 3);
        home.won = 10;
        home.goals_for = 50;
        home.team = String::from("Someone");
        let mut away = row(30, 3);
        away.lost = 12;
        away.played = 38;
        assert_eq!(predict(&home, &away), Prediction::Draw);
    }

    #[test]
    fn mirrored_when_swapped() {
        let values = [-3, 0, 1, 7];
        for &ph in &values {
            for &pa in &values {
                for &gh in &values {
                    for &ga in &values {
                        let home = row(ph, gh);
                        let away = row(pa, ga);
                        let expected = match predict(&home, &away) {
                            Prediction::HomeWin => Prediction::AwayWin,
                            Prediction::AwayWin => Prediction::HomeWin,
                            other => other,
                        };
                        assert_eq!(predict(&away, &home), expected);
                    }
                }
            }
        }
    }
}

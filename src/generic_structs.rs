use serde::Deserialize;
use std::fmt;

/// A tournament or league instance as listed by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Competition {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// One scheduled or completed match. Only the team names are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub home: FixtureSide,
    pub away: FixtureSide,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureSide {
    pub name: String,
}

/// One team's aggregated season record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub team: String,
    pub played: i64,
    pub won: i64,
    pub drawn: i64,
    pub lost: i64,
    pub points: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
}

impl fmt::Display for StandingsRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{team} {points}pts {won}-{drawn}-{lost} {gf}-{ga} ({gd:+})",
            team = self.team,
            points = self.points,
            won = self.won,
            drawn = self.drawn,
            lost = self.lost,
            gf = self.goals_for,
            ga = self.goals_against,
            gd = self.goal_difference
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    HomeWin,
    AwayWin,
    Draw,
    /// At least one of the teams has no standings row
    Unknown,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Prediction::HomeWin => "Home Win",
            Prediction::AwayWin => "Away Win",
            Prediction::Draw => "Draw",
            Prediction::Unknown => "Unknown (missing stats)",
        };
        // pad() so width/alignment flags in the report apply
        f.pad(label)
    }
}

use super::generic_structs::*;
use super::predict::predict;
use super::standings::Standings;
use log::warn;
use std::fmt::Write;

const TEAM_WIDTH: usize = 25;
const PREDICTION_WIDTH: usize = 15;
const SEPARATOR_WIDTH: usize = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Fixtures as the API lists them
    First,
    /// Home and away swapped
    Second,
}

impl Leg {
    fn title(&self) -> &'static str {
        match self {
            Leg::First => "Predicting outcomes for all fixtures (1st leg):",
            Leg::Second => "Predicting outcomes for all fixtures (2nd leg):",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub home: String,
    pub away: String,
    pub prediction: Prediction,
}

/// One row per fixture. For the second leg the teams are swapped before looking them up, and
/// the prediction is made afresh.
pub fn build_report(fixtures: &[Fixture], standings: &Standings, leg: Leg) -> Vec<ReportRow> {
    fixtures
        .iter()
        .map(|fixture| {
            let (home, away) = match leg {
                Leg::First => (&fixture.home.name, &fixture.away.name),
                Leg::Second => (&fixture.away.name, &fixture.home.name),
            };
            let prediction = match (standings.find(home), standings.find(away)) {
                (Some(home_stats), Some(away_stats)) => predict(home_stats, away_stats),
                _ => {
                    warn!("No standings for {} - {}", home, away);
                    Prediction::Unknown
                }
            };
            ReportRow {
                home: home.to_owned(),
                away: away.to_owned(),
                prediction,
            }
        })
        .collect()
}

/// Title, header, dashed separator, then one fixed-width line per row.
pub fn render_report(leg: Leg, rows: &[ReportRow]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", leg.title());
    let _ = writeln!(
        out,
        "{:<tw$} {:<tw$} {:<pw$}",
        "Home Team",
        "Away Team",
        "Prediction",
        tw = TEAM_WIDTH,
        pw = PREDICTION_WIDTH
    );
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<tw$} {:<tw$} {:<pw$}",
            row.home,
            row.away,
            row.prediction,
            tw = TEAM_WIDTH,
            pw = PREDICTION_WIDTH
        );
    }
    out
}

mod config;
mod error;
mod footballwebpages;
mod generic_structs;
mod predict;
mod report;
mod search;
mod standings;

pub use config::Config;
pub use error::Error;
pub use footballwebpages::{ApiClient, RawStandingsRecord};
pub use generic_structs::*;
pub use predict::predict;
pub use report::{build_report, render_report, Leg, ReportRow};
pub use search::{select_competition, team_directory};
pub use standings::{build_standings, Standings};

use log::{debug, info, trace};
use std::collections::HashMap;

/// Everything one run produces, before printing
#[derive(Debug, Clone)]
pub struct Forecast {
    pub competition_id: i64,
    /// Name -> id from the teams feed. Not used for joining fixtures to the table (yet).
    pub team_ids: HashMap<String, i64>,
    pub standings: Standings,
    pub first_leg: Vec<ReportRow>,
    pub second_leg: Vec<ReportRow>,
}

/// Resolves the competition, then fetches its teams, fixtures, and table and predicts both legs.
/// The first failing request aborts the whole thing.
pub async fn forecast(client: &ApiClient, pattern: &str) -> Result<Forecast, Error> {
    info!("Fetching competitions...");
    let competitions = client.competitions().await?;
    let competition_id = select_competition(&competitions, pattern)?;
    info!("{} competition ID: {}", pattern, competition_id);

    // Everything below only depends on competition_id
    info!("Fetching teams...");
    let teams = client.teams(competition_id).await?;
    let team_ids = team_directory(&teams);
    info!("Found {} teams.", teams.len());
    trace!("{:#?}", team_ids);

    info!("Fetching fixtures...");
    let fixtures = client.fixtures(competition_id).await?;
    info!("Found {} fixtures.", fixtures.len());

    info!("Fetching league table...");
    let league_table = client.league_table(competition_id).await?;
    let standings = build_standings(&league_table)?;
    info!("League table data loaded, {} rows.", standings.len());
    for row in &standings.rows {
        debug!("{}", row);
    }

    let first_leg = build_report(&fixtures, &standings, Leg::First);
    let second_leg = build_report(&fixtures, &standings, Leg::Second);
    Ok(Forecast {
        competition_id,
        team_ids,
        standings,
        first_leg,
        second_leg,
    })
}

impl Forecast {
    pub fn render(&self) -> String {
        format!(
            "\n{}\n{}",
            render_report(Leg::First, &self.first_leg),
            render_report(Leg::Second, &self.second_leg)
        )
    }
}

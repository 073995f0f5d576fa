use super::error::Error;
use super::generic_structs::*;
use std::collections::HashMap;

/// Id of the first competition whose name contains `pattern`. First match wins, so the order
/// the API lists competitions in matters.
pub fn select_competition(competitions: &[Competition], pattern: &str) -> Result<i64, Error> {
    competitions
        .iter()
        .find(|competition| competition.name.contains(pattern))
        .map(|competition| competition.id)
        .ok_or_else(|| Error::CompetitionNotFound(pattern.to_string()))
}

/// Team name -> team id. Later duplicates overwrite earlier ones.
pub fn team_directory(teams: &[Team]) -> HashMap<String, i64> {
    teams
        .iter()
        .map(|team| (team.name.to_owned(), team.id))
        .collect()
}

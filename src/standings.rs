use super::error::Error;
use super::footballwebpages::RawStandingsRecord;
use super::generic_structs::*;
use serde_json::Value;

/// League table rows in the order the API gave them
#[derive(Debug, Clone, Default)]
pub struct Standings {
    pub rows: Vec<StandingsRow>,
}

impl Standings {
    /// First row whose team name is exactly `team`. Case sensitive, no trimming.
    pub fn find(&self, team: &str) -> Option<&StandingsRow> {
        self.rows.iter().find(|row| row.team == team)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Renames the API's fields into [StandingsRow]s, one per record, order kept.
///
/// Strict: a record lacking any of the source fields, or with a non-integer in a numeric
/// field, fails the whole table with [Error::Schema].
pub fn build_standings(raw_table: &[RawStandingsRecord]) -> Result<Standings, Error> {
    let rows = raw_table
        .iter()
        .enumerate()
        .map(|(idx, record)| to_row(idx, record))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Standings { rows })
}

fn to_row(row: usize, record: &RawStandingsRecord) -> Result<StandingsRow, Error> {
    let number = |field: &'static str| -> Result<i64, Error> {
        record
            .get(field)
            .and_then(Value::as_i64)
            .ok_or(Error::Schema { field, row })
    };
    let team = record
        .get("team_name")
        .map(team_to_string)
        .ok_or(Error::Schema {
            field: "team_name",
            row,
        })?;
    Ok(StandingsRow {
        team,
        played: number("played")?,
        won: number("won")?,
        drawn: number("drawn")?,
        lost: number("lost")?,
        points: number("points")?,
        goals_for: number("goals_for")?,
        goals_against: number("goals_against")?,
        goal_difference: number("goal_difference")?,
    })
}

/// Team names are compared as strings, whatever JSON type they arrived as.
fn team_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_owned(),
        other => other.to_string(),
    }
}

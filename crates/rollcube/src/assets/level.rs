use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::components::grid::{Cell, GridFloor};

/// Errors raised while loading a level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("malformed level json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell { ch: char, row: usize, col: usize },
    #[error("level has no spawn point")]
    MissingSpawn,
    #[error("level has more than one spawn marker")]
    DuplicateSpawn,
    #[error("spawn ({0}, {1}) lies outside the grid")]
    SpawnOutOfBounds(i32, i32),
}

/// A level as authored in JSON.
///
/// Each entry of `rows` is one line along +z; successive rows step along +x.
/// Cells: `#` block, `G` goal, `S` block with the spawn on it, `.` or space
/// empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    #[serde(default)]
    pub name: String,
    /// Explicit spawn cell; required unless a row contains `S`.
    #[serde(default)]
    pub spawn: Option<(i32, i32)>,
    /// Grid coordinates of the first cell of the first row.
    #[serde(default)]
    pub origin: (i32, i32),
    pub rows: Vec<String>,
}

impl LevelDef {
    /// Parse a level definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the floor and resolve the spawn cell.
    pub fn build(&self) -> Result<(GridFloor, (i32, i32)), LevelError> {
        let depth = self.rows.first().ok_or(LevelError::Empty)?.chars().count();
        if depth == 0 {
            return Err(LevelError::Empty);
        }

        let (ox, oz) = self.origin;
        let mut floor = GridFloor::new(self.rows.len() as u32, depth as u32).with_origin(ox, oz);
        let mut marker = None;

        for (row, line) in self.rows.iter().enumerate() {
            let found = line.chars().count();
            if found != depth {
                return Err(LevelError::RaggedRow { row, expected: depth, found });
            }
            for (col, ch) in line.chars().enumerate() {
                let (x, z) = (ox + row as i32, oz + col as i32);
                let cell = match ch {
                    '#' => Cell::Block,
                    'G' | 'g' => Cell::Goal,
                    '.' | ' ' => Cell::Empty,
                    'S' | 's' => {
                        if marker.replace((x, z)).is_some() {
                            return Err(LevelError::DuplicateSpawn);
                        }
                        Cell::Block
                    }
                    _ => return Err(LevelError::UnknownCell { ch, row, col }),
                };
                floor.set(x, z, cell);
            }
        }

        let spawn = self.spawn.or(marker).ok_or(LevelError::MissingSpawn)?;
        if !floor.contains(spawn.0, spawn.1) {
            return Err(LevelError::SpawnOutOfBounds(spawn.0, spawn.1));
        }
        Ok((floor, spawn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::floor::Floor;

    #[test]
    fn parse_level_with_marker() {
        let json = r####"{
            "name": "first steps",
            "rows": [
                "S##",
                "#.#",
                "##G"
            ]
        }"####;
        let def = LevelDef::from_json(json).unwrap();
        let (floor, spawn) = def.build().unwrap();
        assert_eq!(def.name, "first steps");
        assert_eq!(spawn, (0, 0));
        assert!(floor.has_block(0, 0));
        assert!(!floor.has_block(1, 1));
        assert!(floor.has_goal(2, 2));
    }

    #[test]
    fn explicit_spawn_and_origin() {
        let json = r####"{ "spawn": [5, 6], "origin": [5, 5], "rows": ["##", "#G"] }"####;
        let (floor, spawn) = LevelDef::from_json(json).unwrap().build().unwrap();
        assert_eq!(spawn, (5, 6));
        assert!(floor.has_goal(6, 6));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let def = LevelDef::from_json(r####"{ "spawn": [0, 0], "rows": ["###", "##"] }"####).unwrap();
        assert!(matches!(
            def.build(),
            Err(LevelError::RaggedRow { row: 1, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn unknown_cell_is_rejected() {
        let def = LevelDef::from_json(r####"{ "spawn": [0, 0], "rows": ["#x"] }"####).unwrap();
        let err = def.build().unwrap_err();
        assert_eq!(err.to_string(), "unknown cell 'x' at row 0, column 1");
    }

    #[test]
    fn spawn_is_required_and_in_bounds() {
        let def = LevelDef::from_json(r####"{ "rows": ["##"] }"####).unwrap();
        assert!(matches!(def.build(), Err(LevelError::MissingSpawn)));

        let def = LevelDef::from_json(r####"{ "spawn": [3, 0], "rows": ["##"] }"####).unwrap();
        assert!(matches!(def.build(), Err(LevelError::SpawnOutOfBounds(3, 0))));

        let def = LevelDef::from_json(r####"{ "rows": ["SS"] }"####).unwrap();
        assert!(matches!(def.build(), Err(LevelError::DuplicateSpawn)));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(LevelDef::from_json("{"), Err(LevelError::Json(_))));
        assert!(matches!(
            LevelDef::from_json(r#"{ "rows": [] }"#).unwrap().build(),
            Err(LevelError::Empty)
        ));
    }
}

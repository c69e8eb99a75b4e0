//! Maze files: JSON in, validated `Maze` out, and the reverse for `generate`.
//!
//! Accepted layouts
//! - `{"labyrinth": [...], "start": [r, c], "end": [r, c]}`; endpoints optional.
//! - A bare list of rows (endpoints default to opposite corners).
//!
//! Rows are either strings (`"..#."`) or lists of one-character strings
//! (`[".", ".", "#", "."]`). Every structural problem is a
//! `MazeError::Shape`; sizes and endpoints are range-checked by `Maze`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rodpath::api::{Cell, Maze, MazeError, SolveResult};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct MazeFile {
    labyrinth: Value,
    #[serde(default)]
    start: Option<Value>,
    #[serde(default)]
    end: Option<Value>,
}

/// Read and validate a maze file.
pub fn load_maze(path: &Path) -> Result<Maze> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let maze = parse_maze(&text).with_context(|| format!("loading {}", path.display()))?;
    Ok(maze)
}

/// Parse maze JSON text.
pub fn parse_maze(text: &str) -> Result<Maze, MazeError> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|e| MazeError::shape(format!("invalid JSON: {e}")))?;
    let file = match doc {
        Value::Array(_) => MazeFile {
            labyrinth: doc,
            start: None,
            end: None,
        },
        Value::Object(_) => serde_json::from_value(doc)
            .map_err(|e| MazeError::shape(format!("invalid maze object: {e}")))?,
        other => {
            return Err(MazeError::shape(format!(
                "expected an object or a list of rows, got {}",
                kind(&other)
            )))
        }
    };
    let rows = rows_of(&file.labyrinth)?;
    let start = file.start.as_ref().map(|v| coord_of("start", v)).transpose()?;
    let end = file.end.as_ref().map(|v| coord_of("end", v)).transpose()?;
    Maze::parse(&rows, start, end)
}

fn rows_of(labyrinth: &Value) -> Result<Vec<String>, MazeError> {
    let Value::Array(rows) = labyrinth else {
        return Err(MazeError::shape(format!(
            "labyrinth must be a list of rows, got {}",
            kind(labyrinth)
        )));
    };
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::String(s) => Ok(s.clone()),
            Value::Array(cells) => cells
                .iter()
                .enumerate()
                .map(|(j, cell)| match cell.as_str() {
                    Some(s) if s.chars().count() == 1 => Ok(s.to_string()),
                    _ => Err(MazeError::shape(format!(
                        "cell ({i}, {j}) must be a one-character string, got {cell}"
                    ))),
                })
                .collect::<Result<String, _>>(),
            other => Err(MazeError::shape(format!(
                "row {i} must be a string or a list of cells, got {}",
                kind(other)
            ))),
        })
        .collect()
}

fn coord_of(name: &str, v: &Value) -> Result<Cell, MazeError> {
    let bad = || MazeError::shape(format!("{name} must be a [row, column] pair, got {v}"));
    let Value::Array(pair) = v else {
        return Err(bad());
    };
    let [x, y] = pair.as_slice() else {
        return Err(bad());
    };
    let component = |c: &Value| c.as_i64().and_then(|n| i32::try_from(n).ok()).ok_or_else(bad);
    Ok(Cell::new(component(x)?, component(y)?))
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Maze file document, as read back by `parse_maze`.
pub fn maze_to_json(maze: &Maze) -> Value {
    let rows: Vec<String> = maze.grid.to_string().lines().map(str::to_string).collect();
    json!({
        "labyrinth": rows,
        "start": [maze.start.x, maze.start.y],
        "end": [maze.end.x, maze.end.y],
    })
}

/// Result record for one file.
pub fn result_record(file: &str, result: &SolveResult) -> Value {
    let path = result.rods().map(|rods| {
        rods.iter()
            .map(|r| json!([r.center.x, r.center.y, r.orientation.as_str()]))
            .collect::<Vec<_>>()
    });
    json!({
        "file": file,
        "path": path,
        "path_length": result.path_length,
        "nodes_expanded": result.nodes_expanded,
        "failure": result.failure.map(|f| f.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodpath::api::{solve_with_defaults, Axis, Endpoint, RangeError};
    use tempfile::tempdir;

    const CLASSIC: &str = r##"{
        "labyrinth": [
            [".",".",".",".",".",".",".",".","."],
            ["#",".",".",".","#",".",".",".","."],
            [".",".",".",".","#",".",".",".","."],
            [".","#",".",".",".",".",".",".","."],
            [".",".",".",".",".",".",".","#","."]
        ],
        "start": [0, 0],
        "end": [4, 8]
    }"##;

    #[test]
    fn classic_file_solves_in_eleven() {
        let m = parse_maze(CLASSIC).unwrap();
        assert_eq!(m.grid.shape(), (5, 9));
        let r = solve_with_defaults(&m);
        let rec = result_record("classic.json", &r);
        assert_eq!(rec["path_length"], 11);
        assert_eq!(rec["path"].as_array().unwrap().len(), 13);
        assert_eq!(rec["path"][10], json!([2, 7, "vertical"]));
        assert_eq!(rec["failure"], Value::Null);
    }

    #[test]
    fn bare_row_list_uses_corner_endpoints() {
        let m = parse_maze(r#"["...", "...", "..."]"#).unwrap();
        assert_eq!(m.start, Cell::new(0, 0));
        assert_eq!(m.end, Cell::new(2, 2));
        assert_eq!(solve_with_defaults(&m).path_length, 2);
    }

    #[test]
    fn malformed_container_is_a_shape_error() {
        for text in [
            r#""...""#,
            r#"{"labyrinth": "..."}"#,
            r#"{"labyrinth": [1, 2, 3]}"#,
            r#"{"labyrinth": [["..", ".", "."], ["...", "...", "..."]]}"#,
            r#"{"maze": ["...", "...", "..."]}"#,
            "not json",
        ] {
            let err = parse_maze(text).unwrap_err();
            assert!(matches!(err, MazeError::Shape { .. }), "{text}: {err}");
        }
    }

    #[test]
    fn endpoint_must_be_a_pair() {
        for start in ["[1]", "[1, 2, 3]", r#""0,0""#, "[0.5, 1]", "[0, 99999999999]"] {
            let text = format!(r#"{{"labyrinth": ["...", "...", "..."], "start": {start}}}"#);
            let err = parse_maze(&text).unwrap_err();
            assert!(matches!(err, MazeError::Shape { .. }), "{start}: {err}");
        }
    }

    #[test]
    fn out_of_range_values_are_range_errors() {
        let err = parse_maze(r#"["...", "..."]"#).unwrap_err();
        assert_eq!(
            err,
            MazeError::Range(RangeError::Dimension {
                axis: Axis::Rows,
                count: 2
            })
        );
        let err = parse_maze(r#"{"labyrinth": ["...", "...", "..."], "end": [0, 3]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            MazeError::Range(RangeError::Endpoint {
                which: Endpoint::End,
                axis: Axis::Cols,
                ..
            })
        ));
    }

    #[test]
    fn load_reports_file_and_keeps_the_cause() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"labyrinth": ["..", "..", ".."]}"#).unwrap();
        let err = load_maze(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
        assert!(matches!(
            err.downcast_ref::<MazeError>(),
            Some(MazeError::Range(_))
        ));
        assert!(load_maze(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn generated_document_reads_back() {
        let m = parse_maze(CLASSIC).unwrap();
        let text = serde_json::to_string(&maze_to_json(&m)).unwrap();
        assert_eq!(parse_maze(&text).unwrap(), m);
    }
}

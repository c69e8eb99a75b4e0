use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rodpath::api::{draw_maze, solve_maze, EndpointMode, MazeGenCfg, ReplayToken, SearchCfg};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod load;
mod provenance;

#[derive(Parser)]
#[command(name = "rodpath")]
#[command(about = "Rod path search through grid mazes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve maze files and print one JSON record per file
    Solve {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Keep the rod in its starting orientation
        #[arg(long)]
        no_rotation: bool,
        /// Half-width of the area that must be clear to rotate
        #[arg(long, default_value_t = SearchCfg::default().clearance)]
        clearance: usize,
        /// Give up after this many node expansions
        #[arg(long)]
        max_expansions: Option<usize>,
        /// Also write all records to this file (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a random maze and write it as a maze file
    Generate {
        #[arg(long, default_value_t = 20)]
        rows: usize,
        #[arg(long, default_value_t = 20)]
        cols: usize,
        /// Probability that a cell is blocked
        #[arg(long, default_value_t = 0.2)]
        density: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Draw start and end uniformly instead of using opposite corners
        #[arg(long)]
        uniform_endpoints: bool,
        /// Output path; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the search and generator defaults with provenance
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            files,
            no_rotation,
            clearance,
            max_expansions,
            out,
        } => {
            let cfg = SearchCfg {
                allow_rotation: !no_rotation,
                clearance,
                max_expansions,
            };
            solve(&files, cfg, out.as_deref())
        }
        Action::Generate {
            rows,
            cols,
            density,
            seed,
            index,
            uniform_endpoints,
            out,
        } => {
            let endpoints = if uniform_endpoints {
                EndpointMode::Uniform
            } else {
                EndpointMode::Corners
            };
            let cfg = MazeGenCfg {
                rows,
                cols,
                density,
                endpoints,
            };
            generate(cfg, ReplayToken { seed, index }, out.as_deref())
        }
        Action::Report => report(),
    }
}

fn solve(files: &[PathBuf], cfg: SearchCfg, out: Option<&Path>) -> Result<()> {
    let mut records = Vec::with_capacity(files.len());
    let mut failed = 0usize;
    for file in files {
        let name = file.display().to_string();
        let maze = match load::load_maze(file) {
            Ok(maze) => maze,
            Err(err) => {
                tracing::error!(file = %name, "{err:#}");
                failed += 1;
                continue;
            }
        };
        let result = solve_maze(&maze, cfg);
        tracing::info!(
            file = %name,
            path_length = result.path_length,
            nodes_expanded = result.nodes_expanded,
            "solved"
        );
        let record = load::result_record(&name, &result);
        println!("{}", serde_json::to_string(&record)?);
        records.push(record);
    }

    if let Some(out) = out {
        write_json(out, &Value::Array(records))?;
        let params = json!({
            "files": files.iter().map(|f| f.display().to_string()).collect::<Vec<_>>(),
            "allow_rotation": cfg.allow_rotation,
            "clearance": cfg.clearance,
            "max_expansions": cfg.max_expansions,
        });
        provenance::write_sidecar(out, provenance::Payload::new("solve", params))?;
    }

    if failed > 0 {
        bail!("{failed} of {} maze files failed to load", files.len());
    }
    Ok(())
}

fn generate(cfg: MazeGenCfg, tok: ReplayToken, out: Option<&Path>) -> Result<()> {
    tracing::info!(
        rows = cfg.rows,
        cols = cfg.cols,
        density = cfg.density,
        seed = tok.seed,
        index = tok.index,
        "generate"
    );
    let maze = draw_maze(cfg, tok).context("drawing maze")?;
    let doc = load::maze_to_json(&maze);
    match out {
        Some(out) => write_json(out, &doc),
        None => {
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

fn report() -> Result<()> {
    let payload = provenance::Payload::new("report", defaults());
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Defaults a bare `solve` or `generate` call would run with.
fn defaults() -> Value {
    let search = SearchCfg::default();
    let gen = MazeGenCfg::default();
    json!({
        "search": {
            "allow_rotation": search.allow_rotation,
            "clearance": search.clearance,
            "max_expansions": search.max_expansions,
        },
        "generate": {
            "rows": gen.rows,
            "cols": gen.cols,
            "density": gen.density,
            "uniform_endpoints": gen.endpoints == EndpointMode::Uniform,
        },
    })
}

fn write_json(out: &Path, doc: &Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn solve_writes_records_and_sidecar() {
        let dir = tempdir().unwrap();
        let maze = dir.path().join("open.json");
        std::fs::write(&maze, r#"["...", "...", "..."]"#).unwrap();
        let out = dir.path().join("out/results.json");
        solve(&[maze], SearchCfg::default(), Some(out.as_path())).unwrap();
        let records: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(records[0]["path_length"], 2);
        assert!(dir.path().join("out/results.provenance.json").exists());
    }

    #[test]
    fn solve_fails_after_processing_every_file() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"["...", "...", "..."]"#).unwrap();
        std::fs::write(&bad, r#"{"labyrinth": 3}"#).unwrap();
        let out = dir.path().join("results.json");
        let err = solve(&[bad, good], SearchCfg::default(), Some(out.as_path())).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 maze files failed to load");
        let records: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 1);
    }

    #[test]
    fn generate_writes_a_loadable_maze() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("gen.json");
        let cfg = MazeGenCfg {
            rows: 8,
            cols: 6,
            ..MazeGenCfg::default()
        };
        generate(cfg, ReplayToken { seed: 5, index: 2 }, Some(out.as_path())).unwrap();
        let m = load::load_maze(&out).unwrap();
        assert_eq!(m.grid.shape(), (8, 6));
        assert_eq!(m, draw_maze(cfg, ReplayToken { seed: 5, index: 2 }).unwrap());
    }

    #[test]
    fn bundled_mazes_keep_their_lengths() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/mazes");
        for (file, expected) in [
            ("classic_5x9.json", 11),
            ("sealed_5x9.json", -1),
            ("open_3x3.json", 2),
            ("classic_10x10.json", 16),
            ("wall_gap.json", 11),
        ] {
            let m = load::load_maze(&dir.join(file)).unwrap();
            assert_eq!(
                solve_maze(&m, SearchCfg::default()).path_length,
                expected,
                "{file}"
            );
        }
    }

    #[test]
    fn solve_flags_default_to_library_cfg() {
        let cmd = Cmd::try_parse_from(["rodpath", "solve", "maze.json"]).unwrap();
        let Action::Solve {
            clearance,
            no_rotation,
            max_expansions,
            ..
        } = cmd.action
        else {
            panic!("expected solve");
        };
        let lib = SearchCfg::default();
        assert_eq!(clearance, lib.clearance);
        assert_eq!(!no_rotation, lib.allow_rotation);
        assert_eq!(max_expansions, lib.max_expansions);
    }

    #[test]
    fn report_lists_search_and_generator_defaults() {
        let d = defaults();
        assert_eq!(d["search"]["allow_rotation"], true);
        assert_eq!(d["search"]["clearance"], 1);
        assert_eq!(d["search"]["max_expansions"], Value::Null);
        assert_eq!(d["generate"]["rows"], 20);
        assert_eq!(d["generate"]["uniform_endpoints"], false);
    }

    #[test]
    fn generate_rejects_oversized_dimensions() {
        let cfg = MazeGenCfg {
            rows: 100_000,
            cols: 100_000,
            ..MazeGenCfg::default()
        };
        let err = generate(cfg, ReplayToken { seed: 0, index: 0 }, None).unwrap_err();
        assert!(format!("{err:#}").contains("rows of the labyrinth"), "{err:#}");
    }
}

//! Timing probe for the classic labyrinths and a large random maze.
//!
//! Prints one line per case with the path length, expansions and wall time,
//! so regressions in either the result or the search effort are easy to spot.

use std::time::Instant;

use rodpath::api::{draw_maze, solve_with_defaults, EndpointMode, Maze, MazeGenCfg, ReplayToken};

fn main() {
    let cases = [
        (
            "classic_5x9",
            Maze::parse(
                &[
                    ".........",
                    "#...#....",
                    "....#....",
                    ".#.......",
                    ".......#.",
                ],
                None,
                None,
            )
            .expect("valid maze"),
        ),
        (
            "open_3x3",
            Maze::parse(&["...", "...", "..."], None, None).expect("valid maze"),
        ),
        (
            "random_300x300",
            draw_maze(
                MazeGenCfg {
                    rows: 300,
                    cols: 300,
                    density: 0.15,
                    endpoints: EndpointMode::Corners,
                },
                ReplayToken { seed: 1, index: 0 },
            )
            .expect("valid size"),
        ),
    ];

    for (name, maze) in &cases {
        let t0 = Instant::now();
        let r = solve_with_defaults(maze);
        let ms = t0.elapsed().as_secs_f64() * 1e3;
        println!(
            "case={name} path_length={} nodes_expanded={} time_ms={ms:.3}",
            r.path_length, r.nodes_expanded
        );
    }
}

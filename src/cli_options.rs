/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Gridmaze.

Gridmaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridmaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridmaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The command-line tool is intended for developers integrating the maze
//! engine: it carves random mazes, prints them as ASCII art, and runs the
//! structural queries whose results a presentation layer would paint.
//!
//! # Examples
//!
//! Carve a 12x8 maze from a fixed seed and solve it between its corners:
//!
//! ```text
//! $ gridmaze -W 12 -H 8 -s 42 --solve
//! 12x8(#42) - Recursive backtracker
//! +--+--+--+--+--+--+--+--+--+--+--+--+
//! |S |→ |...
//! ```
//!
//! Look for the longest start/finish pair of a random maze, with progress
//! on stderr:
//!
//! ```text
//! $ gridmaze -W 24 -H 24 --longest
//! ```

use clap::Parser;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::generator::cells::{Direction, Role};
use crate::generator::path::PathSet;
use crate::maze::Maze;
use crate::solver::dead_ends::Mask;
use crate::solver::diameter::DiameterTask;

/// Carve random mazes and run the structural queries on them.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Width of the maze in cells
    #[arg(short = 'W', long, default_value_t = 16)]
    width: usize,

    /// Height of the maze in cells
    #[arg(short = 'H', long, default_value_t = 16)]
    height: usize,

    /// Seed for the first maze; later mazes derive their seeds from the
    /// clock
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of mazes to carve
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Solve each maze between its top-left and bottom-right corners
    #[arg(long, default_value_t = false)]
    solve: bool,

    /// Search each maze for the start/finish pair with the longest walk
    #[arg(short, long, default_value_t = false)]
    longest: bool,

    /// Highlight the dead-end corridors of each maze
    #[arg(long, default_value_t = false)]
    dead_ends: bool,

    /// Print each maze as JSON instead of ASCII art
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after carving the mazes
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// JSON report for one carved maze.
#[derive(Serialize)]
struct MazeReport {
    width: usize,
    height: usize,
    seed: u64,
    removed_walls: usize,
    solution: Option<Vec<(usize, usize)>>,
    longest: Option<Vec<(usize, usize)>>,
    dead_end_cells: Option<Vec<(usize, usize)>>,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut maze: Maze = Maze::new(args.width, args.height);
    let mut total_time: f32 = 0.0;
    let mut max_time: f32 = 0.0;
    let mut total_steps: usize = 0;
    let mut total_backtracks: usize = 0;

    for i in 0..args.count {
        debug!("Maze {i}");

        // Only the first maze honors the explicit seed; reusing it would
        // carve identical copies.
        maze.regenerate(if i == 0 { args.seed } else { None });

        total_time += maze.generation().duration;
        if maze.generation().duration > max_time {
            max_time = maze.generation().duration;
        }
        total_steps += maze.generation().steps;
        total_backtracks += maze.generation().backtracks;

        let solution: Option<PathSet> = find_corner_solution(&maze, args.solve);
        let longest: Option<PathSet> = find_longest(&maze, args.longest);
        let walk: Option<&PathSet> = longest.as_ref().or(solution.as_ref());
        if let Some(path) = walk {
            maze.mark_endpoints(path);
        }
        let mask: Option<Mask> = if args.dead_ends {
            Some(maze.find_dead_end_passages_from_roles())
        } else {
            None
        };

        if args.json {
            let report: MazeReport = MazeReport {
                width: maze.width(),
                height: maze.height(),
                seed: maze.seed(),
                removed_walls: maze.grid().num_removed_walls(),
                solution: solution.as_ref().map(|path| walk_positions(&maze, path)),
                longest: longest.as_ref().map(|path| walk_positions(&maze, path)),
                dead_end_cells: mask.as_ref().map(|mask| {
                    mask.marked_ids()
                        .iter()
                        .map(|id| maze.grid().pos_of(*id))
                        .collect()
                }),
            };
            match serde_json::to_string(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Cannot serialize the maze report: {e}");
                    return 1;
                }
            }
        } else {
            println!("{} - {}", maze.description(), maze.algorithm_name());
            println!("{}", render_ascii(&maze, walk, mask.as_ref()));
            if let Some(path) = walk {
                println!("walk length = {}", path.len());
            }
            if let Some(mask) = &mask {
                println!("dead-end cells = {}", mask.num_marked());
            }
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
     average steps = {}
average backtracks = {}",
            total_time,
            total_time / args.count as f32,
            max_time,
            total_steps / args.count.max(1),
            total_backtracks / args.count.max(1)
        );
    }
    0
}

/// Solve the maze between its corners when requested.
fn find_corner_solution(maze: &Maze, requested: bool) -> Option<PathSet> {
    if !requested || maze.width() == 0 || maze.height() == 0 {
        return None;
    }
    let to: (usize, usize) = (maze.width() - 1, maze.height() - 1);
    match maze.find_shortest_path((0, 0), to) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Cannot solve the maze: {e}");
            None
        }
    }
}

/// Run the longest start/finish search when requested, printing progress on
/// stderr.
fn find_longest(maze: &Maze, requested: bool) -> Option<PathSet> {
    if !requested {
        return None;
    }
    let task: DiameterTask = maze.spawn_longest_search();
    while let Ok(progress) = task.progress.recv_blocking() {
        eprint!(
            "\rOptimising start/finish: {:3.0}% ({:3.0}% cache hits, best {})",
            progress.fraction * 100.0,
            progress.effectiveness * 100.0,
            progress.best_len
        );
    }
    eprintln!();
    task.join()
}

/// Positions of the cells of a walk, in walk order.
fn walk_positions(maze: &Maze, path: &PathSet) -> Vec<(usize, usize)> {
    path.get().iter().map(|id| maze.grid().pos_of(*id)).collect()
}

/// Render the maze as ASCII art.
///
/// Every cell is two characters wide. The optional walk overlays arrows on
/// its cells and the optional mask overlays `#` on its marked cells; start
/// and end cells always show as `S` and `F`.
fn render_ascii(maze: &Maze, walk: Option<&PathSet>, mask: Option<&Mask>) -> String {
    let width: usize = maze.grid().width();
    let height: usize = maze.grid().height();
    let mut out: String = String::new();

    // Walk cells by identifier, for the arrow lookup.
    let mut walk_index: HashMap<usize, usize> = HashMap::new();
    if let Some(path) = walk {
        for (pos, cell) in path.get().iter().enumerate() {
            walk_index.entry(*cell).or_insert(pos);
        }
    }

    for y in 0..height {
        // Walls above the row
        for x in 0..width {
            out.push('+');
            let id: usize = maze.grid().id_at(x, y);
            out.push_str(if maze.grid().is_open(id, Direction::Up) {
                "  "
            } else {
                "--"
            });
        }
        out.push_str("+\n");

        // Cell row with the left walls
        for x in 0..width {
            let id: usize = maze.grid().id_at(x, y);
            out.push(if maze.grid().is_open(id, Direction::Left) {
                ' '
            } else {
                '|'
            });
            out.push_str(&cell_text(maze, id, walk, &walk_index, mask));
        }
        if width > 0 {
            let last: usize = maze.grid().id_at(width - 1, y);
            out.push(if maze.grid().is_open(last, Direction::Right) {
                ' '
            } else {
                '|'
            });
        }
        out.push('\n');
    }

    // Walls below the last row
    for x in 0..width {
        out.push('+');
        let open: bool = height > 0
            && maze
                .grid()
                .is_open(maze.grid().id_at(x, height - 1), Direction::Down);
        out.push_str(if open { "  " } else { "--" });
    }
    out.push('+');
    out
}

/// Two-character body of a cell: role letter, walk arrow, mask mark, or
/// floor.
fn cell_text(
    maze: &Maze,
    id: usize,
    walk: Option<&PathSet>,
    walk_index: &HashMap<usize, usize>,
    mask: Option<&Mask>,
) -> String {
    match maze.grid().cell_by_id(id).role() {
        Role::Start => return String::from("S "),
        Role::End => return String::from("F "),
        Role::Floor => (),
    }
    if let Some(path) = walk
        && let Some(pos) = walk_index.get(&id)
    {
        return format!("{} ", path.arrow_for_pos(maze.grid(), *pos));
    }
    if let Some(mask) = mask
        && mask.get_id(id)
    {
        return String::from("# ");
    }
    String::from("  ")
}

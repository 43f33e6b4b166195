use std::collections::HashSet;
use std::sync::atomic::AtomicBool;

use gridmaze::generator::backtracker::Backtracker;
use gridmaze::generator::cells::{Direction, NUM_DIRECTIONS, Role};
use gridmaze::generator::grid::Grid;
use gridmaze::solver::dead_ends;
use gridmaze::solver::diameter::{DiameterSearch, DiameterTask};
use gridmaze::solver::frontier;

fn open(grid: &mut Grid, x: usize, y: usize, direction: Direction) {
    grid.remove_wall_at(x, y, direction)
        .expect("the position is valid");
}

/// A 1xN corridor with every vertical wall removed.
fn corridor(length: usize) -> Grid {
    let mut grid = Grid::new(1, length);
    for y in 0..length - 1 {
        open(&mut grid, 0, y, Direction::Down);
    }
    grid
}

/// Breadth-first distances over open edges, independent of the solver.
fn flood_distances(grid: &Grid, from: usize) -> Vec<Option<usize>> {
    let mut distances: Vec<Option<usize>> = vec![None; grid.num_cells()];
    distances[from] = Some(0);
    let mut frontier = vec![from];
    let mut depth = 0;
    while !frontier.is_empty() {
        depth += 1;
        let mut next = Vec::new();
        for id in frontier {
            for direction in (0..NUM_DIRECTIONS).filter_map(Direction::from_repr) {
                if let Some(neighbor) = grid.neighbor_if_open(id, direction) {
                    if distances[neighbor].is_none() {
                        distances[neighbor] = Some(depth);
                        next.push(neighbor);
                    }
                }
            }
        }
        frontier = next;
    }
    distances
}

#[test]
fn shortest_walk_through_an_open_corner_pair() {
    let mut grid = Grid::new(2, 2);
    open(&mut grid, 0, 0, Direction::Right);
    open(&mut grid, 1, 0, Direction::Down);

    let path = frontier::find_shortest(&grid, grid.id_at(0, 0), grid.id_at(1, 1))
        .expect("the corners are connected");
    let positions: Vec<(usize, usize)> = path.get().iter().map(|id| grid.pos_of(*id)).collect();
    assert_eq!(positions, vec![(0, 0), (1, 0), (1, 1)]);
    assert_eq!(path.len(), 3);
}

#[test]
fn shortest_walk_on_disconnected_endpoints_is_absent() {
    let grid = Grid::new(2, 2);
    assert!(frontier::find_shortest(&grid, 0, 3).is_none());
}

#[test]
fn search_expands_from_several_starts_at_once() {
    let grid = corridor(5);
    let solutions = frontier::search(&grid, &[0, 4], &[2], frontier::MAX_RESULTS);
    assert_eq!(solutions.len(), 2);
    for path in &solutions {
        assert_eq!(path.len(), 3);
        assert_eq!(path.current_pos(), Some(2));
    }
}

#[test]
fn search_with_no_start_or_no_end_is_empty() {
    let grid = corridor(3);
    assert!(frontier::search(&grid, &[], &[2], frontier::MAX_RESULTS).is_empty());
    assert!(frontier::search(&grid, &[0], &[], frontier::MAX_RESULTS).is_empty());
}

#[test]
fn search_stops_at_the_result_budget() {
    // Opening all four interior walls of a 2x2 grid creates a cycle with
    // two distinct walks between opposite corners.
    let mut grid = Grid::new(2, 2);
    open(&mut grid, 0, 0, Direction::Right);
    open(&mut grid, 0, 0, Direction::Down);
    open(&mut grid, 1, 0, Direction::Down);
    open(&mut grid, 0, 1, Direction::Right);

    let all = frontier::search(&grid, &[0], &[3], frontier::MAX_RESULTS);
    assert_eq!(all.len(), 2);

    let truncated = frontier::search(&grid, &[0], &[3], 1);
    assert_eq!(truncated.len(), 1);
}

#[test]
fn solver_length_agrees_with_an_independent_flood_fill() {
    let mut grid = Grid::new(9, 7);
    Backtracker::from_seed(11).carve(&mut grid);

    let from = grid.id_at(0, 0);
    let to = grid.id_at(8, 6);
    let distance = flood_distances(&grid, from)[to].expect("a carved grid is connected");
    let path = frontier::find_shortest(&grid, from, to).expect("a carved grid is connected");
    assert_eq!(path.len(), distance + 1);
}

#[test]
fn solve_all_reports_walks_by_ascending_length() {
    let mut grid = corridor(5);
    grid.set_role(grid.id_at(0, 1), Role::Start);
    grid.set_role(grid.id_at(0, 0), Role::End);
    grid.set_role(grid.id_at(0, 4), Role::End);

    let solutions = frontier::solve_all(&grid);
    let lengths: Vec<usize> = solutions.iter().map(|path| path.len()).collect();
    assert_eq!(lengths, vec![2, 4]);
}

#[test]
fn dead_ends_of_a_corridor_are_its_two_tips() {
    let grid = corridor(5);
    let mask = dead_ends::find_dead_ends(&grid);
    assert!(mask.get(0, 0));
    assert!(mask.get(0, 4));
    for y in 1..4 {
        assert!(!mask.get(0, y));
    }
}

#[test]
fn dead_end_passages_stop_at_junctions() {
    // A T junction at (1, 1) with three one-cell corridor arms.
    let mut grid = Grid::new(3, 3);
    open(&mut grid, 0, 1, Direction::Right);
    open(&mut grid, 1, 1, Direction::Right);
    open(&mut grid, 1, 0, Direction::Down);

    let mask = dead_ends::find_dead_end_passages(&grid, &HashSet::new());
    assert!(mask.get(1, 0));
    assert!(mask.get(0, 1));
    assert!(mask.get(2, 1));
    assert!(!mask.get(1, 1));
}

#[test]
fn protected_cells_are_never_marked() {
    let mut grid = Grid::new(3, 3);
    open(&mut grid, 0, 1, Direction::Right);
    open(&mut grid, 1, 1, Direction::Right);
    open(&mut grid, 1, 0, Direction::Down);

    // (1, 0) is structurally a dead end, but it is protected.
    let protected: HashSet<usize> = [grid.id_at(1, 0)].into_iter().collect();
    let mask = dead_ends::find_dead_end_passages(&grid, &protected);
    assert!(!mask.get(1, 0));
    assert!(mask.get(0, 1));
}

#[test]
fn corridor_diameter_joins_the_two_tips() {
    let grid = corridor(5);
    let cancel = AtomicBool::new(false);
    let path = DiameterSearch::new()
        .run(&grid, &cancel, None)
        .expect("the corridor is connected");

    assert_eq!(path.len(), 5);
    let endpoints: HashSet<usize> = [
        path.origin().expect("the walk is not empty"),
        path.current_pos().expect("the walk is not empty"),
    ]
    .into_iter()
    .collect();
    let tips: HashSet<usize> = [grid.id_at(0, 0), grid.id_at(0, 4)].into_iter().collect();
    assert_eq!(endpoints, tips);
}

#[test]
fn a_cancelled_search_returns_its_best_so_far() {
    let grid = corridor(5);
    let cancel = AtomicBool::new(true);
    // Cancelled before the first target cell: no walk was found yet.
    assert!(DiameterSearch::new().run(&grid, &cancel, None).is_none());
}

#[test]
fn cancelling_a_running_task_keeps_its_best_so_far() {
    let mut grid = Grid::new(12, 12);
    Backtracker::from_seed(5).carve(&mut grid);
    let task = DiameterTask::spawn(grid);
    task.cancel();

    // Depending on how far the worker got before it saw the flag, the
    // result is either absent or a genuine walk.
    if let Some(path) = task.join() {
        assert!(path.len() >= 2);
    }
}

#[test]
fn the_diameter_task_reports_progress_and_joins() {
    let task = DiameterTask::spawn(corridor(5));
    let mut last = None;
    while let Ok(progress) = task.progress.recv_blocking() {
        last = Some(progress);
    }
    let path = task.join().expect("the corridor is connected");
    assert_eq!(path.len(), 5);

    let last = last.expect("at least one progress notification");
    assert_eq!(last.fraction, 1.0);
    assert_eq!(last.best_len, 5);
}

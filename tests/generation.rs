use gridmaze::generator::backtracker::Backtracker;
use gridmaze::generator::cells::{Direction, NUM_DIRECTIONS};
use gridmaze::generator::grid::Grid;

fn carved(width: usize, height: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(width, height);
    Backtracker::from_seed(seed).carve(&mut grid);
    grid
}

fn reachable_count(grid: &Grid) -> usize {
    if grid.num_cells() == 0 {
        return 0;
    }
    let mut seen = vec![false; grid.num_cells()];
    let mut queue = vec![0usize];
    seen[0] = true;
    let mut count = 1;
    while let Some(id) = queue.pop() {
        for direction in (0..NUM_DIRECTIONS).filter_map(Direction::from_repr) {
            if let Some(next) = grid.neighbor_if_open(id, direction) {
                if !seen[next] {
                    seen[next] = true;
                    count += 1;
                    queue.push(next);
                }
            }
        }
    }
    count
}

#[test]
fn fresh_grid_is_fully_walled() {
    let grid = Grid::new(4, 4);
    assert_eq!(grid.num_removed_walls(), 0);
    for id in 0..grid.num_cells() {
        for direction in (0..NUM_DIRECTIONS).filter_map(Direction::from_repr) {
            assert!(!grid.is_open(id, direction));
        }
    }
}

#[test]
fn interior_edges_are_shared_between_neighbors() {
    let mut grid = Grid::new(3, 3);
    assert_eq!(
        grid.cell(1, 1).edge(Direction::Right),
        grid.cell(2, 1).edge(Direction::Left)
    );
    assert_eq!(
        grid.cell(1, 1).edge(Direction::Down),
        grid.cell(1, 2).edge(Direction::Up)
    );

    // Removing the wall from one side is visible from both.
    grid.remove_wall_at(1, 1, Direction::Right)
        .expect("the position is valid");
    assert!(grid.is_open(grid.id_at(1, 1), Direction::Right));
    assert!(grid.is_open(grid.id_at(2, 1), Direction::Left));
}

#[test]
fn carving_removes_exactly_the_spanning_tree_wall_count() {
    let grid = carved(8, 6, 7);
    assert_eq!(grid.num_removed_walls(), 8 * 6 - 1);
}

#[test]
fn every_cell_is_reachable_after_carving() {
    let grid = carved(8, 6, 7);
    assert_eq!(reachable_count(&grid), 48);
}

#[test]
fn same_seed_reproduces_an_identical_layout() {
    let first = carved(10, 10, 42);
    let second = carved(10, 10, 42);
    for id in 0..first.num_cells() {
        for direction in (0..NUM_DIRECTIONS).filter_map(Direction::from_repr) {
            assert_eq!(first.is_open(id, direction), second.is_open(id, direction));
        }
    }
}

#[test]
fn boundary_edges_stay_walled_after_carving() {
    let grid = carved(7, 5, 3);
    for x in 0..7 {
        assert!(!grid.is_open(grid.id_at(x, 0), Direction::Up));
        assert!(!grid.is_open(grid.id_at(x, 4), Direction::Down));
    }
    for y in 0..5 {
        assert!(!grid.is_open(grid.id_at(0, y), Direction::Left));
        assert!(!grid.is_open(grid.id_at(6, y), Direction::Right));
    }
}

#[test]
fn reset_restores_the_fully_walled_state() {
    let mut grid = carved(6, 6, 9);
    assert_ne!(grid.num_removed_walls(), 0);
    grid.reset();
    assert_eq!(grid.num_removed_walls(), 0);
}

#[test]
fn carving_a_zero_sized_grid_is_a_noop() {
    let mut grid = Grid::new(0, 5);
    Backtracker::from_seed(1).carve(&mut grid);
    assert_eq!(grid.num_cells(), 0);
    assert_eq!(grid.num_removed_walls(), 0);
}

#[test]
fn moves_are_only_allowed_across_open_edges() {
    let mut grid = Grid::new(3, 3);
    grid.remove_wall_at(1, 1, Direction::Right)
        .expect("the position is valid");
    assert!(grid.move_allowed((1, 1), (2, 1)));
    assert!(grid.move_allowed((2, 1), (1, 1)));
    assert!(!grid.move_allowed((1, 1), (1, 2)));
    // Not orthogonally adjacent.
    assert!(!grid.move_allowed((1, 1), (2, 2)));
}

#[test]
fn the_arena_distinguishes_boundary_and_interior_edges() {
    let grid = Grid::new(2, 2);
    let corner = grid.cell(0, 0);
    assert!(grid.edges().is_boundary(corner.edge(Direction::Up)));
    assert!(grid.edges().is_boundary(corner.edge(Direction::Left)));
    assert!(!grid.edges().is_boundary(corner.edge(Direction::Right)));
    assert!(!grid.edges().is_boundary(corner.edge(Direction::Down)));
}

#[test]
fn the_carver_records_its_seed_and_stats() {
    let mut grid = Grid::new(5, 5);
    let mut carver = Backtracker::from_seed(17);
    carver.carve(&mut grid);
    assert_eq!(carver.seed, 17);
    // One wall removed per visited cell after the first.
    assert_eq!(carver.steps, 24);
}

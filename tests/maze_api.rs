use gridmaze::generator::cells::{Direction, NUM_DIRECTIONS, Role};
use gridmaze::generator::grid::GridError;
use gridmaze::maze::{Maze, MazeEvent, MazeStyle};

fn layout(maze: &Maze) -> Vec<bool> {
    let grid = maze.grid();
    let mut walls = Vec::new();
    for id in 0..grid.num_cells() {
        for direction in (0..NUM_DIRECTIONS).filter_map(Direction::from_repr) {
            walls.push(grid.is_open(id, direction));
        }
    }
    walls
}

#[test]
fn regenerating_with_the_same_seed_is_deterministic() {
    let mut first = Maze::new(6, 6);
    first.regenerate(Some(3));
    let mut second = Maze::new(6, 6);
    second.regenerate(Some(3));

    assert_eq!(layout(&first), layout(&second));
    assert_eq!(first.seed(), 3);
    assert_eq!(first.description(), "6x6(#3)");
}

#[test]
fn structural_setters_notify_without_regenerating() {
    let mut maze = Maze::new(4, 4);
    let events = maze.subscribe();

    maze.set_width(8);
    assert_eq!(events.try_recv().ok(), Some(MazeEvent::Structural));
    // The grid still has the old shape until the caller regenerates.
    assert_eq!(maze.grid().width(), 4);

    maze.regenerate(Some(1));
    assert_eq!(events.try_recv().ok(), Some(MazeEvent::Generated));
    assert_eq!(maze.grid().width(), 8);
}

#[test]
fn cosmetic_setters_raise_their_own_notification() {
    let mut maze = Maze::new(4, 4);
    let events = maze.subscribe();

    let style = MazeStyle {
        line_width: 2,
        ..MazeStyle::default()
    };
    maze.set_style(style);
    assert_eq!(events.try_recv().ok(), Some(MazeEvent::Cosmetic));
    assert!(events.try_recv().is_err());
    assert_eq!(maze.style().line_width, 2);
}

#[test]
fn roles_can_be_set_and_listed_by_position() {
    let mut maze = Maze::new(3, 3);
    maze.set_role_at(2, 1, Role::Start)
        .expect("the position is valid");
    assert_eq!(maze.find_all(Role::Start), vec![(2, 1)]);
    assert_eq!(
        maze.set_role_at(5, 5, Role::End),
        Err(GridError::InvalidPosition { x: 5, y: 5 })
    );
}

#[test]
fn checked_accessors_reject_outside_positions() {
    let maze = Maze::new(3, 3);
    assert_eq!(
        maze.cell_at(9, 0).map(|_| ()),
        Err(GridError::InvalidPosition { x: 9, y: 0 })
    );
    assert_eq!(
        maze.find_shortest_path((0, 0), (0, 7)).map(|_| ()),
        Err(GridError::InvalidPosition { x: 0, y: 7 })
    );
}

#[test]
fn boundary_edges_of_a_fresh_maze_are_blocked() {
    let maze = Maze::new(3, 3);
    assert_eq!(maze.blocked(0, 0, Direction::Up), Ok(true));
    assert_eq!(maze.blocked(2, 2, Direction::Right), Ok(true));
}

#[test]
fn marked_endpoints_drive_solve_all() {
    let mut maze = Maze::new(5, 5);
    maze.regenerate(Some(21));

    let walk = maze
        .find_shortest_path((0, 0), (4, 4))
        .expect("the positions are valid")
        .expect("a carved maze is connected");
    maze.mark_endpoints(&walk);

    assert_eq!(maze.find_all(Role::Start), vec![(0, 0)]);
    assert_eq!(maze.find_all(Role::End), vec![(4, 4)]);

    let solutions = maze.solve_all();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].len(), walk.len());
}

#[test]
fn endpoint_roles_are_protected_from_the_passage_mask() {
    let mut maze = Maze::new(6, 6);
    maze.regenerate(Some(8));

    let walk = maze
        .find_shortest_path((0, 0), (5, 5))
        .expect("the positions are valid")
        .expect("a carved maze is connected");
    maze.mark_endpoints(&walk);

    let mask = maze.find_dead_end_passages_from_roles();
    assert!(!mask.get(0, 0));
    assert!(!mask.get(5, 5));
}

#[test]
fn a_zero_sized_maze_answers_empty_results() {
    let mut maze = Maze::new(0, 0);
    maze.regenerate(Some(1));
    assert!(maze.solve_all().is_empty());
    assert!(maze.find_longest_start_finish().is_none());
}

#[test]
fn the_longest_pair_of_a_single_corridor_spans_it() {
    let mut maze = Maze::new(1, 5);
    maze.regenerate(Some(99));

    // A 1xN grid carves into the full corridor for any seed.
    let walk = maze
        .find_longest_start_finish()
        .expect("the corridor is connected");
    assert_eq!(walk.len(), 5);
}

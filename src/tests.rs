#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use strum::VariantArray;
    use unordered_pair::UnorderedPair;

    use crate::config::{NavigatorConfig, Strategy};
    use crate::distance::DistanceField;
    use crate::error::{ConfigError, MazeParseError, MouseError, NavigationError};
    use crate::flood::flood;
    use crate::goal::GoalRegion;
    use crate::heading::{Heading, Side, Turn};
    use crate::location::{Dimension, Location};
    use crate::maze::{MazeState, RobotState};
    use crate::mouse::Mouse;
    use crate::navigator::{decide, run, Decision, FloodNavigator, FrontierNavigator, Navigator, Phase, Progress};
    use crate::perception::{absolute, perceive, WallReadings};
    use crate::sim::{Command, SimMaze, SimulatedMouse};
    use crate::walls::{Orientation, WallStore};

    fn dims(width: usize, height: usize) -> (Dimension, Dimension) {
        (NonZero::new(width).unwrap(), NonZero::new(height).unwrap())
    }

    fn facing(location: Location, heading: Heading) -> RobotState {
        RobotState { location, heading }
    }

    /// A 4x4 maze whose 2x2 center room is walled off from everything else.
    fn sealed_center() -> SimMaze {
        let mut maze = SimMaze::with_dims(dims(4, 4));
        maze.disconnect_around(Location(1, 1), vec![Heading::South, Heading::West])
            .disconnect_around(Location(2, 1), vec![Heading::South, Heading::East])
            .disconnect_around(Location(1, 2), vec![Heading::North, Heading::West])
            .disconnect_around(Location(2, 2), vec![Heading::North, Heading::East]);
        maze
    }

    #[test]
    fn outer_walls_are_implicit() {
        let walls = WallStore::with_dims(dims(4, 4));

        assert!(walls.has_wall(Location(3, 0), Orientation::Vertical));
        assert!(walls.has_wall(Location(0, 3), Orientation::Horizontal));
        assert!(!walls.has_wall(Location(2, 2), Orientation::Vertical));
        assert!(walls.is_walled(Location(0, 0), Heading::South));
        assert!(walls.is_walled(Location(0, 0), Heading::West));
        assert!(!walls.is_walled(Location(0, 0), Heading::North));
        assert_eq!(walls.boundary(Location(0, 0), Heading::West), None);
        assert_eq!(walls.wall_count(), 0);
    }

    #[test]
    fn each_boundary_has_one_owner() {
        let walls = WallStore::with_dims(dims(4, 4));

        assert_eq!(walls.boundary(Location(1, 1), Heading::South), Some((Location(1, 0), Orientation::Horizontal)));
        assert_eq!(walls.boundary(Location(1, 0), Heading::North), Some((Location(1, 0), Orientation::Horizontal)));
        assert_eq!(walls.boundary(Location(2, 1), Heading::West), Some((Location(1, 1), Orientation::Vertical)));
        assert_eq!(walls.boundary(Location(1, 1), Heading::East), Some((Location(1, 1), Orientation::Vertical)));
    }

    #[test]
    fn set_wall_is_idempotent() {
        let mut walls = WallStore::with_dims(dims(4, 4));

        assert!(walls.set_wall(Location(1, 1), Orientation::Horizontal));
        assert!(!walls.set_wall(Location(1, 1), Orientation::Horizontal));
        // the outer wall is already there
        assert!(!walls.set_wall(Location(3, 1), Orientation::Vertical));
        assert!(walls.is_walled(Location(1, 2), Heading::South));
        assert!(!walls.disconnect(UnorderedPair(Location(0, 0), Location(2, 0))));
        assert_eq!(walls.wall_count(), 1);
    }

    #[test]
    fn center_goal_seed_order() {
        assert_eq!(GoalRegion::center(dims(16, 16)).cells(), &[Location(8, 8), Location(7, 8), Location(8, 7), Location(7, 7)]);
        assert_eq!(GoalRegion::center(dims(5, 5)).cells(), &[Location(2, 2)]);
        assert_eq!(GoalRegion::center(dims(5, 4)).cells(), &[Location(2, 2), Location(2, 1)]);
    }

    #[test]
    fn explicit_goal_must_fit() {
        assert!(matches!(GoalRegion::new(vec![], dims(4, 4)), Err(ConfigError::EmptyGoal)));
        assert!(matches!(
            GoalRegion::new(vec![Location(4, 0)], dims(4, 4)),
            Err(ConfigError::OutOfBounds { what: "goal", location: Location(4, 0) })
        ));
        assert_eq!(GoalRegion::new(vec![Location(3, 3), Location(3, 3)], dims(4, 4)).unwrap().cells(), &[Location(3, 3)]);
    }

    #[test]
    fn flood_empty_maze() {
        let maze = MazeState::centered(dims(4, 4));
        let goal = maze.goal().cells().to_vec();

        for (location, distance) in maze.distances().iter() {
            let nearest = goal.iter().map(|cell| cell.manhattan(location)).min().unwrap();
            assert_eq!(distance as usize, nearest, "at {location}");
        }
        assert_eq!(maze.distances().iter().map(|(_, distance)| distance).max(), Some(2));
        assert_eq!(maze.distances().get(Location(0, 0)), 2);
        assert_eq!(maze.distances().get(Location(1, 0)), 1);
    }

    #[test]
    fn flood_sealed_goal() {
        let truth = sealed_center();
        let goal = GoalRegion::center(dims(4, 4));
        let mut field = DistanceField::with_dims(dims(4, 4));

        assert_eq!(flood(truth.walls(), &goal, &mut field), 4);
        for cell in goal.cells() {
            assert_eq!(field.get(*cell), 0);
        }
        assert_eq!(field.get(Location(0, 0)), field.unreachable());
        assert_eq!(field.unreachable(), 16);
        assert!(!field.is_reachable(Location(3, 3)));
    }

    #[test]
    fn flood_routes_around_walls() {
        // a wall along the whole top of row 0 except at the far east end
        let mut walls = WallStore::with_dims(dims(4, 4));
        for x in 0..3 {
            walls.wall_off(Location(x, 0), Heading::North);
        }
        let goal = GoalRegion::new(vec![Location(0, 1)], dims(4, 4)).unwrap();
        let mut field = DistanceField::with_dims(dims(4, 4));
        flood(&walls, &goal, &mut field);

        assert_eq!(field.get(Location(3, 0)), 4);
        assert_eq!(field.get(Location(0, 0)), 7);
    }

    #[test]
    fn flood_properties_under_random_walls() {
        let mut rng = StdRng::seed_from_u64(7);
        let size = dims(8, 8);
        let goal = GoalRegion::center(size);
        let mut walls = WallStore::with_dims(size);
        let mut field = DistanceField::with_dims(size);
        flood(&walls, &goal, &mut field);

        for _ in 0..120 {
            let location = Location(rng.gen_range(0..8), rng.gen_range(0..8));
            let orientation = if rng.gen() { Orientation::Horizontal } else { Orientation::Vertical };
            walls.set_wall(location, orientation);

            let before = field.clone();
            flood(&walls, &goal, &mut field);

            let mut again = field.clone();
            flood(&walls, &goal, &mut again);
            assert_eq!(again, field, "flood is not idempotent");

            for (cell, distance) in field.iter() {
                assert!(distance >= before.get(cell), "adding a wall lowered {cell}");

                if goal.contains(cell) {
                    assert_eq!(distance, 0);
                } else if field.is_reachable(cell) {
                    let downhill = Heading::FLOOD_ORDER.iter()
                        .filter_map(|heading| walls.passage(cell, *heading))
                        .any(|neighbor| field.get(neighbor) + 1 == distance);
                    assert!(downhill, "{cell} at {distance} has no open neighbor one closer");
                }
            }
        }
    }

    #[test]
    fn absolute_sides() {
        let expected = [
            (Heading::North, [Heading::West, Heading::North, Heading::East]),
            (Heading::East, [Heading::North, Heading::East, Heading::South]),
            (Heading::South, [Heading::East, Heading::South, Heading::West]),
            (Heading::West, [Heading::South, Heading::West, Heading::North]),
        ];

        for (front, sides) in expected {
            for (side, heading) in [Side::Left, Side::Front, Side::Right].into_iter().zip(sides) {
                assert_eq!(absolute(front, side), heading, "{front:?} {side:?}");
            }
        }
    }

    #[test]
    fn perception_writes_one_boundary_per_reading() {
        let cases = [
            (Heading::North, Side::Left, Location(4, 5), Orientation::Vertical),
            (Heading::North, Side::Front, Location(5, 5), Orientation::Horizontal),
            (Heading::North, Side::Right, Location(5, 5), Orientation::Vertical),
            (Heading::East, Side::Left, Location(5, 5), Orientation::Horizontal),
            (Heading::East, Side::Front, Location(5, 5), Orientation::Vertical),
            (Heading::East, Side::Right, Location(5, 4), Orientation::Horizontal),
            (Heading::South, Side::Left, Location(5, 5), Orientation::Vertical),
            (Heading::South, Side::Front, Location(5, 4), Orientation::Horizontal),
            (Heading::South, Side::Right, Location(4, 5), Orientation::Vertical),
            (Heading::West, Side::Left, Location(5, 4), Orientation::Horizontal),
            (Heading::West, Side::Front, Location(4, 5), Orientation::Vertical),
            (Heading::West, Side::Right, Location(5, 5), Orientation::Horizontal),
        ];

        for (heading, side, owner, orientation) in cases {
            let mut maze = MazeState::new(dims(16, 16), GoalRegion::center(dims(16, 16)), facing(Location(5, 5), heading));
            let mut mouse = SimulatedMouse::new(SimMaze::with_dims(dims(16, 16)), maze.robot());
            let readings = WallReadings {
                left: side == Side::Left,
                front: side == Side::Front,
                right: side == Side::Right,
            };

            let perception = perceive(&mut maze, readings, &mut mouse);

            assert_eq!(perception.discovered, 1, "{heading:?} {side:?}");
            assert!(maze.walls().has_wall(owner, orientation), "{heading:?} {side:?}");
            assert_eq!(maze.walls().wall_count(), 1, "{heading:?} {side:?}");
            assert_eq!(mouse.marks(), &[(Location(5, 5), absolute(heading, side))]);
        }
    }

    #[test]
    fn perception_at_start_corner() {
        let mut maze = MazeState::centered(dims(16, 16));
        let mut mouse = SimulatedMouse::new(SimMaze::with_dims(dims(16, 16)), maze.robot());

        let perception = perceive(&mut maze, WallReadings { left: true, front: false, right: false }, &mut mouse);

        assert_eq!(perception.discovered, 1);
        assert!(maze.walls().has_wall(Location(0, 0), Orientation::Horizontal));
        assert!(maze.walls().is_walled(Location(0, 0), Heading::North));
        assert_eq!(maze.walls().wall_count(), 1);
        assert_eq!(perception.open_sides().collect::<Vec<_>>(), vec![Heading::East, Heading::South]);
        // distances wait for a recompute
        assert_eq!(maze.current_distance(), 14);
    }

    #[test]
    fn perception_never_erases() {
        let mut maze = MazeState::centered(dims(4, 4));
        let mut mouse = SimulatedMouse::new(SimMaze::with_dims(dims(4, 4)), maze.robot());

        perceive(&mut maze, WallReadings { left: false, front: true, right: false }, &mut mouse);
        let perception = perceive(&mut maze, WallReadings::default(), &mut mouse);

        assert_eq!(perception.discovered, 0);
        assert!(maze.walls().is_walled(Location(0, 0), Heading::East));
    }

    #[test]
    fn minimal_turns() {
        for from in Heading::VARIANTS {
            assert_eq!(from.turn_to(*from), Turn::None);
            assert_eq!(from.turn_to(from.right()), Turn::Right);
            assert_eq!(from.turn_to(from.invert()), Turn::Around);
            assert_eq!(from.turn_to(from.left()), Turn::Left);
        }
        assert_eq!(Heading::North.turn_to(Heading::West), Turn::Left);
        assert_eq!(Heading::West.turn_to(Heading::North), Turn::Right);
    }

    #[test]
    fn decision_prefers_south_then_east() {
        let mut maze = MazeState::centered(dims(16, 16));
        assert_eq!(decide(&maze), Decision::Move(Heading::East));

        maze.robot = facing(Location(15, 15), Heading::West);
        assert_eq!(decide(&maze), Decision::Move(Heading::South));

        maze.robot = facing(Location(0, 15), Heading::North);
        assert_eq!(decide(&maze), Decision::Move(Heading::South));

        maze.robot = facing(Location(15, 0), Heading::North);
        assert_eq!(decide(&maze), Decision::Move(Heading::West));
    }

    #[test]
    fn decision_is_deterministic() {
        let mut maze = MazeState::centered(dims(8, 8));
        maze.walls_mut().wall_off(Location(2, 2), Heading::East);
        maze.walls_mut().wall_off(Location(2, 2), Heading::North);
        maze.recompute();
        maze.robot = facing(Location(2, 2), Heading::South);

        let copy = maze.clone();
        let first = decide(&maze);
        assert_eq!(first, decide(&copy));
        assert_eq!(first, decide(&maze));
        assert_eq!(first, Decision::Move(Heading::South));
    }

    #[test]
    fn decision_at_goal_is_stuck() {
        let mut maze = MazeState::centered(dims(4, 4));
        maze.robot = facing(Location(1, 1), Heading::North);
        assert_eq!(decide(&maze), Decision::Stuck);
    }

    fn dead_end() -> (SimulatedMouse, MazeState) {
        // (0, 0) and (0, 1) form a pocket whose only exit is already known to lead nowhere
        let mut truth = SimMaze::with_dims(dims(4, 4));
        truth.disconnect_around(Location(0, 1), vec![Heading::East, Heading::North])
            .disconnect_around(Location(0, 0), vec![Heading::East]);

        let mut maze = MazeState::centered(dims(4, 4));
        maze.walls_mut().wall_off(Location(0, 1), Heading::East);
        maze.walls_mut().wall_off(Location(0, 1), Heading::North);
        maze.recompute();
        assert_eq!(maze.distances().get(Location(0, 0)), 2);
        assert_eq!(maze.distances().get(Location(0, 1)), 3);

        (SimulatedMouse::new(truth, maze.robot()), maze)
    }

    #[test]
    fn stuck_recomputes_without_moving() {
        let (mouse, maze) = dead_end();
        let mut navigator = FloodNavigator::new(mouse, maze);

        assert_eq!(navigator.step().unwrap(), Phase::Deciding);
        assert_eq!(navigator.step().unwrap(), Phase::Stuck);
        assert_eq!(navigator.step().unwrap(), Phase::Sensing);

        assert_eq!(navigator.maze().robot(), facing(Location(0, 0), Heading::East));
        assert!(navigator.mouse().commands().is_empty());
        assert!(!navigator.maze().distances().is_reachable(Location(0, 0)));
    }

    #[test]
    fn stall_limit_reports_unreachable() {
        let (mouse, maze) = dead_end();
        let mut navigator = FloodNavigator::new(mouse, maze).with_stall_limit(2);

        assert_eq!(navigator.tick().unwrap(), Progress::Recomputed);
        assert_eq!(navigator.tick(), Err(NavigationError::Unreachable { location: Location(0, 0), stalls: 2 }));
        assert_eq!(navigator.phase(), Phase::Sensing);
    }

    #[test]
    fn dead_ends_do_not_count_as_stalls() {
        let (mouse, maze) = dead_end();
        let mut navigator = FloodNavigator::new(mouse, maze).with_stall_limit(1);
        assert_eq!(navigator.tick(), Err(NavigationError::Unreachable { location: Location(0, 0), stalls: 1 }));

        for seed in 0..6 {
            let truth = SimMaze::carve(dims(16, 16), &mut StdRng::seed_from_u64(seed));
            let mouse = SimulatedMouse::new(truth, RobotState::default());
            let mut navigator = FloodNavigator::new(mouse, MazeState::centered(dims(16, 16))).with_stall_limit(1);

            let report = run(&mut navigator, 100_000).unwrap();
            assert!(report.arrived, "seed {seed}");
            assert!(report.recomputes > 0, "seed {seed}");
        }
    }

    #[test]
    fn recompute_on_discovery() {
        let mut truth = SimMaze::with_dims(dims(4, 4));
        truth.disconnect_around(Location(0, 0), vec![Heading::North, Heading::East]);

        for (enabled, expected) in [(false, 2), (true, 16)] {
            let mouse = SimulatedMouse::new(truth.clone(), RobotState::default());
            let mut navigator = FloodNavigator::new(mouse, MazeState::centered(dims(4, 4)))
                .with_recompute_on_discovery(enabled);

            navigator.step().unwrap();
            assert_eq!(navigator.maze().current_distance(), expected);
        }
    }

    #[test]
    fn first_move_turns_the_short_way() {
        let cases = [
            (Heading::East, vec![Command::MoveForward]),
            (Heading::North, vec![Command::TurnRight, Command::MoveForward]),
            (Heading::West, vec![Command::TurnRight, Command::TurnRight, Command::MoveForward]),
            (Heading::South, vec![Command::TurnLeft, Command::MoveForward]),
        ];

        for (heading, commands) in cases {
            let start = facing(Location(0, 0), heading);
            let mouse = SimulatedMouse::new(SimMaze::with_dims(dims(16, 16)), start);
            let maze = MazeState::new(dims(16, 16), GoalRegion::center(dims(16, 16)), start);
            let mut navigator = FloodNavigator::new(mouse, maze);

            assert_eq!(navigator.tick().unwrap(), Progress::Moved { from: Location(0, 0), to: Location(1, 0), cells: 1 });
            assert_eq!(navigator.mouse().commands(), commands.as_slice(), "{heading:?}");
            assert_eq!(navigator.mouse().robot(), navigator.maze().robot());
            assert_eq!(navigator.maze().robot(), facing(Location(1, 0), Heading::East));
        }
    }

    #[test]
    fn marks_follow_sensor_order() {
        let start = facing(Location(0, 0), Heading::West);
        let mut mouse = SimulatedMouse::new(SimMaze::with_dims(dims(4, 4)), start);
        let mut maze = MazeState::new(dims(4, 4), GoalRegion::center(dims(4, 4)), start);

        let readings = WallReadings::sense(&mut mouse).unwrap();
        assert_eq!(readings, WallReadings { left: true, front: true, right: false });

        let perception = perceive(&mut maze, readings, &mut mouse);
        assert_eq!(perception.discovered, 0);
        assert_eq!(mouse.marks(), &[(Location(0, 0), Heading::South), (Location(0, 0), Heading::West)]);
    }

    #[test]
    fn flood_navigator_solves_carved_mazes() {
        for seed in 0..6 {
            let truth = SimMaze::carve(dims(16, 16), &mut StdRng::seed_from_u64(seed));
            let mouse = SimulatedMouse::new(truth, RobotState::default());
            let mut navigator = FloodNavigator::new(mouse, MazeState::centered(dims(16, 16)));

            let report = run(&mut navigator, 100_000).unwrap();

            assert!(report.arrived, "seed {seed}");
            assert_eq!(report.ticks, report.cells + report.recomputes);
            let (mouse, maze) = navigator.into_parts();
            assert!(maze.goal().contains(mouse.robot().location));
            assert_eq!(mouse.robot(), maze.robot());
            assert!(mouse.marks().len() >= maze.walls().wall_count());
        }
    }

    #[test]
    fn sample_maze_and_config() {
        let truth = SimMaze::from_ascii(include_str!("../mazes/classic16.txt")).unwrap();
        let config = NavigatorConfig::from_toml_str(include_str!("../mazes/run.toml")).unwrap();
        assert_eq!(truth.dims(), config.dims().unwrap());

        for strategy in [Strategy::FloodFill, Strategy::Frontier] {
            let config = NavigatorConfig { strategy, ..config.clone() };
            let mut mouse = SimulatedMouse::new(truth.clone(), facing(config.start, config.heading));
            let mut navigator = config.navigator(&mut mouse).unwrap();

            let report = run(navigator.as_mut(), config.max_ticks).unwrap();
            assert!(report.arrived, "{strategy:?}");
        }
    }

    #[test]
    fn flood_navigator_gives_up_on_sealed_goal() {
        let mouse = SimulatedMouse::new(sealed_center(), RobotState::default());
        let mut navigator = FloodNavigator::new(mouse, MazeState::centered(dims(4, 4)));

        let err = run(&mut navigator, 1_000).unwrap_err();
        assert!(matches!(err, NavigationError::Unreachable { stalls: 4, .. }), "{err}");
    }

    #[test]
    fn frontier_navigator_solves_carved_mazes() {
        for seed in 0..6 {
            let truth = SimMaze::carve(dims(16, 16), &mut StdRng::seed_from_u64(seed));
            let mouse = SimulatedMouse::new(truth, RobotState::default());
            let mut navigator = FrontierNavigator::new(mouse, MazeState::centered(dims(16, 16)));

            let report = run(&mut navigator, 1_000).unwrap();

            assert!(report.arrived, "seed {seed}");
            assert_eq!(report.recomputes, 0);
            let (mouse, maze) = navigator.into_parts();
            assert!(maze.goal().contains(mouse.robot().location));
            assert_eq!(mouse.robot(), maze.robot());
        }
    }

    #[test]
    fn frontier_navigator_looks_behind_at_start() {
        // facing into a dead end with the only way out behind
        let mut truth = SimMaze::with_dims(dims(4, 4));
        truth.disconnect_around(Location(1, 0), vec![Heading::North, Heading::East]);
        let start = facing(Location(1, 0), Heading::East);
        let mouse = SimulatedMouse::new(truth, start);
        let mut navigator = FrontierNavigator::new(mouse, MazeState::new(dims(4, 4), GoalRegion::center(dims(4, 4)), start));

        assert_eq!(navigator.tick().unwrap(), Progress::Moved { from: Location(1, 0), to: Location(0, 0), cells: 1 });
        assert_eq!(navigator.mouse().commands(), &[Command::TurnRight, Command::TurnRight, Command::MoveForward]);
        // arrived but not yet sensed
        assert_eq!(navigator.open_cells().collect::<Vec<_>>(), vec![Location(0, 0)]);
    }

    #[test]
    fn frontier_navigator_exhausts_sealed_goal() {
        let mouse = SimulatedMouse::new(sealed_center(), RobotState::default());
        let mut navigator = FrontierNavigator::new(mouse, MazeState::centered(dims(4, 4)));

        let err = run(&mut navigator, 1_000).unwrap_err();
        assert!(matches!(err, NavigationError::Exhausted { .. }), "{err}");
    }

    #[test]
    fn collisions_surface_as_errors() {
        let mut truth = SimMaze::with_dims(dims(4, 4));
        truth.seal(Location(0, 0));
        let mut mouse = SimulatedMouse::new(truth, RobotState::default());

        assert_eq!(mouse.move_forward(), Err(MouseError::Collision { location: Location(0, 0), heading: Heading::East }));
        assert_eq!(mouse.robot(), RobotState::default());
    }

    #[test]
    fn run_stops_at_tick_budget() {
        let truth = SimMaze::carve(dims(16, 16), &mut StdRng::seed_from_u64(3));
        let mouse = SimulatedMouse::new(truth, RobotState::default());
        let mut navigator = FloodNavigator::new(mouse, MazeState::centered(dims(16, 16)));

        let report = run(&mut navigator, 3).unwrap();
        assert!(!report.arrived);
        assert_eq!(report.ticks, 3);
    }

    #[test]
    fn display_known_maze() {
        let maze = MazeState::centered(dims(4, 4));

        assert_eq!(format!("{}", maze), "+---+---+---+---+
|  2   1   1   2|
+   +   +   +   +
|  1   0   0   1|
+   +   +   +   +
|  1   0   0   1|
+   +   +   +   +
| >    1   1   2|
+---+---+---+---+
");
    }

    #[test]
    fn display_unreachable_cells() {
        let mut maze = MazeState::centered(dims(2, 2));
        maze.walls_mut().wall_off(Location(1, 1), Heading::South);
        maze.walls_mut().wall_off(Location(1, 1), Heading::West);
        maze.robot = facing(Location(0, 1), Heading::North);
        let goal = GoalRegion::new(vec![Location(1, 1)], dims(2, 2)).unwrap();
        maze.goal = goal;
        maze.recompute();

        assert_eq!(format!("{}", maze), "+---+---+
| ^ |  0|
+   +---+
|  -   -|
+---+---+
");
    }

    #[test]
    fn parse_ascii_maze() {
        let drawing = "+---+---+---+
|       |   |
+   +---+   +
|   |       |
+---+---+---+
";
        let maze = SimMaze::from_ascii(drawing).unwrap();

        assert_eq!(maze.dims(), dims(3, 2));
        assert_eq!(maze.walls().wall_count(), 3);
        assert!(maze.walls().is_walled(Location(1, 1), Heading::East));
        assert!(maze.walls().is_walled(Location(1, 1), Heading::South));
        assert!(maze.walls().is_walled(Location(0, 0), Heading::East));
        assert!(!maze.walls().is_walled(Location(0, 0), Heading::North));
        assert_eq!(format!("{}", maze), drawing);
    }

    #[test]
    fn parse_rendered_knowledge() {
        let (_, maze) = dead_end();
        let parsed = SimMaze::from_ascii(&format!("{}", maze)).unwrap();
        assert_eq!(parsed.walls(), maze.walls());
    }

    #[test]
    fn parse_rejects_bad_drawings() {
        assert_eq!(SimMaze::from_ascii("\n\n"), Err(MazeParseError::Empty));
        assert_eq!(SimMaze::from_ascii("+---+\n|   |\n"), Err(MazeParseError::LineCount(2)));
        assert_eq!(
            SimMaze::from_ascii("+---+\n|   |   |\n+---+"),
            Err(MazeParseError::Ragged { line: 2, len: 9, expected: 5 })
        );
    }

    #[test]
    fn carved_mazes_are_connected() {
        let truth = SimMaze::carve(dims(16, 16), &mut StdRng::seed_from_u64(11));
        let mut field = DistanceField::with_dims(dims(16, 16));

        assert_eq!(flood(truth.walls(), &GoalRegion::center(dims(16, 16)), &mut field), 256);
        // a spanning tree of 256 cells has 255 passages; opening the goal room adds up to 4 more
        let passages = 2 * 16 * 15 - truth.walls().wall_count();
        assert!((256..=259).contains(&passages), "{passages}");

        // the center is one open room
        for (a, b) in [(Location(7, 7), Location(8, 7)), (Location(7, 8), Location(8, 8)), (Location(7, 7), Location(7, 8)), (Location(8, 7), Location(8, 8))] {
            assert_eq!(truth.walls().passage(a, Heading::between(a, b).unwrap()), Some(b));
        }
    }

    #[test]
    fn config_defaults() {
        let config = NavigatorConfig::from_toml_str("").unwrap();

        assert_eq!(config, NavigatorConfig::default());
        assert_eq!(config.dims().unwrap(), dims(16, 16));
        assert_eq!(config.goal_region().unwrap(), GoalRegion::center(dims(16, 16)));
        assert_eq!(config.build_maze().unwrap().current_distance(), 14);
    }

    #[test]
    fn config_from_toml() {
        let config = NavigatorConfig::from_toml_str(r#"
width = 8
height = 6
start = [7, 0]
heading = "north"
goal = [[3, 3], [4, 3]]
strategy = "frontier"
stall_limit = 2
recompute_on_discovery = true
"#).unwrap();

        assert_eq!(config.dims().unwrap(), dims(8, 6));
        assert_eq!(config.strategy, Strategy::Frontier);
        assert_eq!(config.stall_limit, 2);
        assert!(config.recompute_on_discovery);
        assert_eq!(config.max_ticks, 10_000);

        let maze = config.build_maze().unwrap();
        assert_eq!(maze.robot(), facing(Location(7, 0), Heading::North));
        assert_eq!(maze.goal().cells(), &[Location(3, 3), Location(4, 3)]);
        assert_eq!(maze.current_distance(), 6);
    }

    #[test]
    fn strategy_names_match_config() {
        for strategy in Strategy::VARIANTS {
            let name = strategy.to_string();
            assert_eq!(name.parse::<Strategy>().unwrap(), *strategy);

            let config = NavigatorConfig::from_toml_str(&format!("strategy = \"{name}\"")).unwrap();
            assert_eq!(config.strategy, *strategy);
        }
        assert_eq!(Strategy::FloodFill.to_string(), "flood-fill");
        assert!("wall-follower".parse::<Strategy>().is_err());
    }

    #[test]
    fn config_rejects_nonsense() {
        assert!(matches!(NavigatorConfig::from_toml_str("width = 0"), Err(ConfigError::ZeroDimension { width: 0, height: 16 })));
        assert!(matches!(
            NavigatorConfig::from_toml_str("start = [16, 0]"),
            Err(ConfigError::OutOfBounds { what: "start", .. })
        ));
        assert!(matches!(NavigatorConfig::from_toml_str("goal = []"), Err(ConfigError::EmptyGoal)));
        assert!(matches!(NavigatorConfig::from_toml_str("speed = 3"), Err(ConfigError::Parse(_))));
        assert!(matches!(NavigatorConfig::from_toml_str("strategy = \"wall-follower\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_builds_either_navigator() {
        for strategy in [Strategy::FloodFill, Strategy::Frontier] {
            let config = NavigatorConfig { width: 8, height: 8, strategy, ..Default::default() };
            let truth = SimMaze::carve(config.dims().unwrap(), &mut StdRng::seed_from_u64(5));
            let mut mouse = SimulatedMouse::new(truth, RobotState::default());

            let mut navigator = config.navigator(&mut mouse).unwrap();
            let report = run(navigator.as_mut(), config.max_ticks).unwrap();
            assert!(report.arrived, "{strategy:?}");
            drop(navigator);

            assert!(GoalRegion::center(dims(8, 8)).contains(mouse.robot().location));
        }
    }
}

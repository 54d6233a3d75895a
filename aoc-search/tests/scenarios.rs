//! Small hand-checked searches over grids, mazes and counters

use aoc_search::{HeapOrder, UniformCostSearch, all_cheapest_paths};

type Pos = (i32, i32);

const DELTAS: [Pos; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

fn parse(rows: &[&str]) -> (Vec<Vec<u8>>, Pos, Pos) {
    let grid: Vec<Vec<u8>> = rows.iter().map(|r| r.bytes().collect()).collect();
    let find = |target: u8| {
        grid.iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.iter()
                    .position(|&b| b == target)
                    .map(|x| (x as i32, y as i32))
            })
            .unwrap()
    };
    let (start, goal) = (find(b'S'), find(b'G'));
    (grid, start, goal)
}

fn open(grid: &[Vec<u8>], (x, y): Pos) -> bool {
    x >= 0
        && y >= 0
        && grid
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .is_some_and(|&b| b != b'#')
}

#[test]
fn test_grid_detour_around_wall() {
    let (grid, start, goal) = parse(&["S#G..", ".#...", ".....", ".....", "....."]);
    let search = UniformCostSearch::new(
        |&(x, y): &Pos| {
            DELTAS
                .iter()
                .map(|&(dx, dy)| (x + dx, y + dy))
                .filter(|&p| open(&grid, p))
                .map(|p| (p, 1u32))
                .collect::<Vec<_>>()
        },
        |&p: &Pos| p == goal,
    )
    .track_path();

    let found = search.run(start).unwrap();
    assert_eq!(found.cost, 6);
    let path = found.path.unwrap();
    assert_eq!(path.len(), 7);
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert!(path.iter().all(|&p| open(&grid, p)));

    let exhaustive = search.order(HeapOrder::MaxFirst).run(start).unwrap();
    assert_eq!(exhaustive.cost, 6);
}

/// Reindeer-style state: position plus facing index into `DELTAS`
type Heading = (Pos, usize);

fn turn_maze_expand(grid: &[Vec<u8>]) -> impl Fn(&Heading) -> Vec<(Heading, u32)> + '_ {
    move |&((x, y), facing): &Heading| {
        let (dx, dy) = DELTAS[facing];
        let mut next = vec![
            (((x, y), (facing + 1) % 4), 1000),
            (((x, y), (facing + 3) % 4), 1000),
        ];
        if open(grid, (x + dx, y + dy)) {
            next.push((((x + dx, y + dy), facing), 1));
        }
        next
    }
}

#[test]
fn test_turn_penalty_prefers_straight_run() {
    // Both routes are six tiles long. Going east first needs one turn, going
    // north first needs three.
    let (grid, start, goal) = parse(&["#######", "#####G#", "#.....#", "#S....#", "#######"]);

    let found = UniformCostSearch::new(turn_maze_expand(&grid), |&(p, _): &Heading| p == goal)
        .track_path()
        .run((start, 0))
        .unwrap();
    assert_eq!(found.cost, 1006);
    assert_ne!(found.cost, 3006);

    let path = found.path.unwrap();
    let turns = path.windows(2).filter(|w| w[0].0 == w[1].0).count();
    assert_eq!(turns, 1);

    let all = all_cheapest_paths((start, 0), turn_maze_expand(&grid), |&(p, _): &Heading| {
        p == goal
    })
    .unwrap();
    assert_eq!(all.cost(), 1006);
    let tiles: std::collections::HashSet<Pos> = all.states().into_iter().map(|(p, _)| p).collect();
    assert_eq!(tiles.len(), 7);
}

fn button_search(target: Pos) -> Option<u32> {
    // Button A adds (3, 1) and costs 3, button B adds (1, 0) and costs 1
    let buttons = [((3, 1), 3u32), ((1, 0), 1u32)];
    UniformCostSearch::new(
        move |&(x, y): &Pos| {
            buttons
                .iter()
                .map(|&((dx, dy), cost)| ((x + dx, y + dy), cost))
                .filter(|&((nx, ny), _)| nx <= target.0 && ny <= target.1)
                .collect::<Vec<_>>()
        },
        move |&p: &Pos| p == target,
    )
    .run((0, 0))
    .map(|found| found.cost)
}

#[test]
fn test_two_button_counter_reaches_target() {
    // One A press and four B presses
    assert_eq!(button_search((7, 1)), Some(7));
    assert_eq!(button_search((7, 2)), Some(7));
    assert_eq!(button_search((0, 0)), Some(0));
}

#[test]
fn test_two_button_counter_unreachable() {
    assert_eq!(button_search((2, 1)), None);
}

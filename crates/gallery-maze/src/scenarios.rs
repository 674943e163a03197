//! End-to-end solver checks on known mazes and on random ones.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use gallery_core::{Point, TargetSet};
use gallery_search::{SearchConfig, Solver, Strategy, TargetProblem, pathfind};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::layout::Maze;
use crate::mapgen::{GenConfig, MazeGen};
use crate::problem::MazeProblem;

fn problem(rows: &[&str]) -> MazeProblem {
    MazeProblem::new(Maze::from_rows(rows).unwrap())
}

/// Solve, replay the answer and check it clears the maze at `optimal` cost.
fn assert_solves(rows: &[&str], optimal: i32) {
    let p = problem(rows);
    for strategy in [Strategy::Reference, Strategy::UniformCost] {
        let mut solver = Solver::new(SearchConfig { strategy });
        let actions = solver
            .solve(&p)
            .unwrap_or_else(|| panic!("{strategy:?}: no solution for\n{}", p.maze()));
        let report = p.test_solution(&actions).unwrap();
        assert!(report.is_solution, "{strategy:?}: {actions:?} leaves targets");
        assert_eq!(report.cost, optimal, "{strategy:?}: {actions:?}");
        let goal = solver.goal().unwrap();
        assert_eq!(solver.tree().get(goal).cost, optimal);
    }
}

fn assert_unsolvable(rows: &[&str]) {
    let p = problem(rows);
    assert_eq!(pathfind(&p), None);
    let mut solver = Solver::new(SearchConfig {
        strategy: Strategy::UniformCost,
    });
    assert_eq!(solver.solve(&p), None);
    assert_eq!(solver.goal(), None);
}

#[test]
fn single_target_in_column() {
    assert_solves(&["XXXXXX", "XT...X", "X....X", "X@...X", "XXXXXX"], 2);
}

#[test]
fn single_target_needs_a_step() {
    assert_solves(&["XXXXXX", "X.T..X", "X....X", "X@...X", "XXXXXX"], 3);
}

#[test]
fn two_targets_one_shot() {
    assert_solves(&["XXXXXX", "XT...X", "X....X", "X@..TX", "XXXXXX"], 2);
}

#[test]
fn wall_hides_a_target() {
    assert_solves(&["XXXXXX", "XT...X", "X.XT.X", "X@..TX", "XXXXXX"], 6);
}

#[test]
fn corridors() {
    assert_solves(
        &["XXXXXX", "XT..XX", "XX@X.X", "XX.X.X", "X...TX", "XXXXXX"],
        8,
    );
}

#[test]
fn mud_corridors() {
    assert_solves(
        &["XXXXXX", "XTM.XX", "XXMX.X", "XX@X.X", "X.M.TX", "XXXXXX"],
        14,
    );
}

#[test]
fn three_scattered_targets() {
    assert_solves(
        &["XXXXXX", "XT..TX", "X..T.X", "X....X", "X@X..X", "XXXXXX"],
        7,
    );
}

#[test]
fn targets_behind_pillars() {
    assert_solves(
        &["XXXXXXX", "XT..T.X", "X..X..X", "X...X.X", "X@X..TX", "XXXXXXX"],
        11,
    );
}

#[test]
fn standing_targets_wall_off_a_column() {
    assert_solves(
        &["XXXXXX", "XT..TX", "X..TTX", "X...TX", "X@X.TX", "XXXXXX"],
        9,
    );
}

#[test]
fn surrounded_by_targets() {
    assert_solves(
        &["XXXXXXX", "XTTTTTX", "XTT@TTX", "XTTTTTX", "XTTTTTX", "XXXXXXX"],
        12,
    );
}

#[test]
fn large_mixed_maze() {
    assert_solves(
        &[
            "XXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
            "X.......X...............X...X",
            "X....T..X...........X.X...T.X",
            "XXMXXXXXX........XXXXXXXXXXXX",
            "X....XXXXXXXX..MMMMMMMM.....X",
            "X...........................X",
            "X.....T.....XXXXXXXXX.......X",
            "X.MM........................X",
            "X.....XXXXXXX.......T.......X",
            "X...........................X",
            "X..MMM.....XXXXXX......XXX..X",
            "X......X...........M.....X..X",
            "X......X.................X..X",
            "X.XXXXXX.....XXXXXXXXX..XXX.X",
            "X...T..X................X...X",
            "X......X......@.........XT..X",
            "XXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
        ],
        115,
    );
}

#[test]
fn sealed_target() {
    assert_unsolvable(&["XXXXXX", "XTX..X", "XX...X", "X@...X", "XXXXXX"]);
}

#[test]
fn one_of_two_targets_sealed() {
    assert_unsolvable(&["XXXXXX", "XTX.TX", "XX...X", "X@...X", "XXXXXX"]);
}

#[test]
fn agent_sealed_in() {
    assert_unsolvable(&["XXXXXX", "XTX.TX", "XX...X", "X@X..X", "XXXXXX"]);
}

#[test]
fn no_targets_is_no_solution() {
    assert_unsolvable(&["XXXXXX", "X.X..X", "X....X", "X@...X", "XXXXXX"]);
}

#[test]
fn clustered_targets_fall_to_one_shot() {
    let p = problem(&["XXXXXXX", "X..T..X", "X..T..X", "XTT@.TX", "X.....X", "XXXXXXX"]);
    let actions = pathfind(&p).unwrap();
    assert_eq!(gallery_core::format_actions(&actions), "S");
}

#[test]
fn solver_reuse_gives_same_answers() {
    let mazes: [&[&str]; 3] = [
        &["XXXXXX", "XT...X", "X.XT.X", "X@..TX", "XXXXXX"],
        &["XXXXXX", "XTX..X", "XX...X", "X@...X", "XXXXXX"],
        &["XXXXXX", "XTM.XX", "XXMX.X", "XX@X.X", "X.M.TX", "XXXXXX"],
    ];
    let mut solver = Solver::default();
    for rows in mazes {
        let p = problem(rows);
        assert_eq!(solver.solve(&p), pathfind(&p));
    }
}

/// Cheapest clearing cost by exhaustive Dijkstra over `(cell, remaining)`.
fn cheapest_cost(p: &MazeProblem) -> Option<i32> {
    let targets = p.initial_targets();
    if targets.is_empty() {
        return None;
    }
    let mut queue: BinaryHeap<Reverse<(i32, Point, Vec<Point>)>> = BinaryHeap::new();
    let mut done: HashSet<(Point, Vec<Point>)> = HashSet::new();
    queue.push(Reverse((0, p.initial_loc(), targets.iter().collect())));
    let mut buf = Vec::new();

    while let Some(Reverse((cost, loc, remaining))) = queue.pop() {
        if remaining.is_empty() {
            return Some(cost);
        }
        if !done.insert((loc, remaining.clone())) {
            continue;
        }
        let left: TargetSet = remaining.iter().copied().collect();
        buf.clear();
        p.transitions(loc, &left, &mut buf);
        for &(action, t) in &buf {
            let next = if action.is_shoot() {
                let hit = p.visible_targets(loc, &left);
                left.difference(&hit).iter().collect()
            } else {
                remaining.clone()
            };
            queue.push(Reverse((cost + t.cost, t.next_loc, next)));
        }
    }
    None
}

#[test]
fn random_mazes_match_exhaustive_search() {
    let mut mg = MazeGen::new(
        StdRng::seed_from_u64(7),
        GenConfig {
            wall_pct: 0.25,
            mud_pct: 0.15,
            target_pct: 0.12,
        },
    );
    let mut uniform = Solver::new(SearchConfig {
        strategy: Strategy::UniformCost,
    });
    let mut reference = Solver::default();

    for _ in 0..60 {
        let p = MazeProblem::new(mg.generate(8, 7));
        let best = cheapest_cost(&p);

        let u = uniform.solve(&p);
        let r = reference.solve(&p);
        assert_eq!(u.is_some(), best.is_some(), "maze:\n{}", p.maze());
        assert_eq!(r.is_some(), best.is_some(), "maze:\n{}", p.maze());

        if let (Some(best), Some(u), Some(r)) = (best, u, r) {
            let u = p.test_solution(&u).unwrap();
            let r = p.test_solution(&r).unwrap();
            assert!(u.is_solution && r.is_solution, "maze:\n{}", p.maze());
            assert_eq!(u.cost, best, "maze:\n{}", p.maze());
            assert!(r.cost >= best, "maze:\n{}", p.maze());
        }
    }
}

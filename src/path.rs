//! Solution path reconstruction from a predecessor map.

use crate::{grid::CellId, traversal::Predecessors};

/// Walks the predecessor chain from `goal` back to `start` and returns the path from `start` to
/// `goal`, both included.
///
/// When `start == goal` the path is that single cell. Returns `None` if the chain breaks before
/// reaching `start` or loops, which cannot happen for a successful traversal of a spanning-tree
/// maze.
pub fn reconstruct_path(
    predecessors: &Predecessors,
    start: CellId,
    goal: CellId,
) -> Option<Vec<CellId>> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        if path.len() > predecessors.capacity() {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use proptest::{prop_assert, prop_assert_eq, proptest};
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::{maze::Maze, traversal::Strategy};

    fn chain(links: &[(usize, usize)], cell_count: usize) -> Predecessors {
        let mut predecessors = Predecessors::new(cell_count);
        for &(id, from) in links {
            assert!(predecessors.record(CellId(id), CellId(from)));
        }
        predecessors
    }

    #[test]
    fn test_reconstruct_simple_chain() {
        let predecessors = chain(&[(1, 0), (2, 1), (5, 2)], 6);

        assert_eq!(
            reconstruct_path(&predecessors, CellId(0), CellId(5)),
            Some(vec![CellId(0), CellId(1), CellId(2), CellId(5)])
        );
    }

    #[test]
    fn test_reconstruct_start_is_goal() {
        let predecessors = Predecessors::new(1);

        assert_eq!(
            reconstruct_path(&predecessors, CellId(0), CellId(0)),
            Some(vec![CellId(0)])
        );
    }

    #[test]
    fn test_reconstruct_broken_chain() {
        let predecessors = chain(&[(2, 1)], 3);

        assert_eq!(reconstruct_path(&predecessors, CellId(0), CellId(2)), None);
    }

    #[test]
    fn test_reconstruct_cycle() {
        let predecessors = chain(&[(1, 2), (2, 1)], 3);

        assert_eq!(reconstruct_path(&predecessors, CellId(0), CellId(2)), None);
    }

    fn is_simple_linked_path(maze: &Maze, path: &[CellId], start: CellId, goal: CellId) -> bool {
        let grid = maze.grid();
        let mut seen = vec![false; grid.cell_count()];
        let unique = path.iter().all(|id| match seen.get_mut(id.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        });
        let linked = path.windows(2).all(|pair| match pair {
            [from, to] => grid.neighbors(*from).any(|next| next == *to),
            _ => false,
        });

        unique && linked && path.first() == Some(&start) && path.last() == Some(&goal)
    }

    fn solved_path(maze: &Maze, start: CellId, goal: CellId, strategy: Strategy) -> Vec<CellId> {
        maze.traverse(start, goal, strategy)
            .path()
            .expect("Every cell should be reachable")
    }

    #[test]
    fn test_path_backwards_through_maze() {
        let mut rng = StdRng::seed_from_u64(21);
        let maze = Maze::build(6, 5, &mut rng).expect("Dimensions should be valid");
        let (start, goal) = (maze.exit(), maze.entrance());

        let breadth = solved_path(&maze, start, goal, Strategy::BreadthFirst);
        let depth = solved_path(&maze, start, goal, Strategy::DepthFirst);

        assert_eq!(breadth, depth);
        assert!(is_simple_linked_path(&maze, &breadth, start, goal));

        let mut forward = solved_path(&maze, goal, start, Strategy::BreadthFirst);
        forward.reverse();
        assert_eq!(forward, breadth);
    }

    #[test]
    fn test_path_from_cell_to_itself() {
        let mut rng = StdRng::seed_from_u64(21);
        let maze = Maze::build(6, 5, &mut rng).expect("Dimensions should be valid");
        let cell = CellId(13);

        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
            assert_eq!(solved_path(&maze, cell, cell, strategy), vec![cell]);
        }
    }

    proptest! {
        #[test]
        fn test_path_is_simple_and_linked(
            length in 1_usize..12,
            height in 1_usize..12,
            seed: u64,
            start_pick: usize,
            goal_pick: usize,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::build(length, height, &mut rng).expect("Dimensions should be valid");
            let start = CellId(start_pick % (length * height));
            let goal = CellId(goal_pick % (length * height));

            let breadth = solved_path(&maze, start, goal, Strategy::BreadthFirst);
            let depth = solved_path(&maze, start, goal, Strategy::DepthFirst);

            prop_assert_eq!(&breadth, &depth);
            prop_assert!(is_simple_linked_path(&maze, &breadth, start, goal));
        }

        #[test]
        fn test_entrance_to_exit_path(
            length in 1_usize..12,
            height in 1_usize..12,
            seed: u64,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::build(length, height, &mut rng).expect("Dimensions should be valid");

            let path = maze
                .solve(Strategy::DepthFirst)
                .path()
                .expect("Exit should be reachable");

            prop_assert!(is_simple_linked_path(&maze, &path, maze.entrance(), maze.exit()));
        }
    }
}

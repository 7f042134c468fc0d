use std::collections::VecDeque;

/// Tracks which junction boxes are wired together as links are added.
///
/// Links are only ever added, so circuits only ever grow.
pub trait Connectivity {
    fn with_points(count: usize) -> Self;

    fn connect(&mut self, a: usize, b: usize);

    /// Sizes of every circuit that contains at least one link.
    fn circuit_sizes(&mut self) -> Vec<usize>;

    /// Whether every point can reach every other point.
    fn is_fully_connected(&mut self) -> bool;
}

/// Adjacency lists, answering queries by breadth-first search from scratch.
///
/// Quadratic when queried after every link; [`crate::UnionFind`] is the
/// incremental alternative.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Visits everything reachable from `start`, marking `visited`, and
    /// returns how many points were newly reached.
    fn flood(&self, start: usize, visited: &mut [bool]) -> usize {
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        let mut reached = 0;

        while let Some(node) = queue.pop_front() {
            reached += 1;
            for &next in &self.neighbors[node] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        reached
    }
}

impl Connectivity for Adjacency {
    fn with_points(count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); count],
        }
    }

    fn connect(&mut self, a: usize, b: usize) {
        self.neighbors[a].push(b);
        self.neighbors[b].push(a);
    }

    fn circuit_sizes(&mut self) -> Vec<usize> {
        let mut visited = vec![false; self.neighbors.len()];
        let mut sizes = Vec::new();

        for start in 0..self.neighbors.len() {
            if visited[start] || self.neighbors[start].is_empty() {
                continue;
            }
            sizes.push(self.flood(start, &mut visited));
        }

        sizes
    }

    fn is_fully_connected(&mut self) -> bool {
        if self.neighbors.is_empty() {
            return false;
        }
        let mut visited = vec![false; self.neighbors.len()];
        self.flood(0, &mut visited) == self.neighbors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circuits_skip_unlinked_points() {
        let mut graph = Adjacency::with_points(6);
        graph.connect(0, 1);
        graph.connect(1, 2);
        graph.connect(4, 5);

        assert_eq!(graph.circuit_sizes(), vec![3, 2]);
        assert!(!graph.is_fully_connected());
    }

    #[test]
    fn repeated_links_do_not_inflate_sizes() {
        let mut graph = Adjacency::with_points(2);
        graph.connect(0, 1);
        graph.connect(1, 0);

        assert_eq!(graph.circuit_sizes(), vec![2]);
        assert!(graph.is_fully_connected());
    }

    #[test]
    fn reachability_is_checked_from_the_first_point() {
        let mut graph = Adjacency::with_points(3);
        graph.connect(1, 2);
        assert!(!graph.is_fully_connected());

        graph.connect(0, 2);
        assert!(graph.is_fully_connected());
    }
}

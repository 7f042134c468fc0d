use crate::connectivity::Connectivity;

/// Disjoint Set Union with path compression and union by size.
///
/// Also counts the live sets so full connectivity is an O(1) check.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
            components: n,
        }
    }

    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass points everything on the path straight at the root.
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets holding `i` and `j`. Returns `false` if they were
    /// already the same set.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let mut root_i = self.find(i);
        let mut root_j = self.find(j);
        if root_i == root_j {
            return false;
        }

        if self.sizes[root_i] < self.sizes[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }
        self.parent[root_j] = root_i;
        self.sizes[root_i] += self.sizes[root_j];
        self.components -= 1;
        true
    }

    pub fn size_of(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.sizes[root]
    }

    pub fn components(&self) -> usize {
        self.components
    }
}

impl Connectivity for UnionFind {
    fn with_points(count: usize) -> Self {
        Self::new(count)
    }

    fn connect(&mut self, a: usize, b: usize) {
        self.union(a, b);
    }

    // A linked point always shares its set with its partner, so size 1 means
    // no links at all.
    fn circuit_sizes(&mut self) -> Vec<usize> {
        (0..self.parent.len())
            .filter(|&i| self.parent[i] == i && self.sizes[i] > 1)
            .map(|i| self.sizes[i])
            .collect()
    }

    fn is_fully_connected(&mut self) -> bool {
        !self.parent.is_empty() && self.components == 1
    }
}

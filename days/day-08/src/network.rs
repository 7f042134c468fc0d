use glam::I64Vec3;
use itertools::Itertools;

use crate::connectivity::Connectivity;
use crate::dsu::UnionFind;

/// Position of a junction box.
pub type Point = I64Vec3;

/// A candidate connection between two junction boxes.
///
/// Field order matters: the derived `Ord` sorts by distance first and breaks
/// ties by the index pair, which keeps every run reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Link {
    pub distance_squared: i64,
    pub a: usize,
    pub b: usize,
}

/// Squared Euclidean distance. Never square-rooted: ordering is all we need.
///
/// Exact for coordinates within [`crate::parser::MAX_COORDINATE`].
pub fn distance_squared(a: Point, b: Point) -> i64 {
    let delta = a - b;
    delta.dot(delta)
}

/// Every unordered pair of points as a [`Link`], shortest first.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn distance_table(points: &[Point]) -> Vec<Link> {
    let mut links = (0..points.len())
        .tuple_combinations()
        .map(|(a, b)| Link {
            distance_squared: distance_squared(points[a], points[b]),
            a,
            b,
        })
        .collect::<Vec<_>>();

    links.sort_unstable();
    tracing::debug!(links = links.len(), "built distance table");
    links
}

/// Junction boxes together with their sorted distance table.
#[derive(Debug, Clone)]
pub struct Network {
    points: Vec<Point>,
    links: Vec<Link>,
}

impl Network {
    pub fn new(points: Vec<Point>) -> Self {
        let links = distance_table(&points);
        Self { points, links }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Connects the `edge_count` shortest links and multiplies the sizes of
    /// the three largest circuits.
    ///
    /// Junction boxes left without any link do not form circuits of their
    /// own. Returns 0 when fewer than three circuits exist.
    pub fn top_three_product(&self, edge_count: usize) -> usize {
        self.top_three_product_with::<UnionFind>(edge_count)
    }

    #[tracing::instrument(skip(self), fields(points = self.points.len()))]
    pub fn top_three_product_with<C: Connectivity>(&self, edge_count: usize) -> usize {
        let mut sizes = self.circuit_sizes_with::<C>(edge_count);
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        tracing::debug!(circuits = sizes.len(), largest = ?sizes.first(), "partitioned");

        if sizes.len() < 3 {
            return 0;
        }
        sizes.iter().take(3).product()
    }

    /// Sizes of the non-trivial circuits after connecting the `edge_count`
    /// shortest links, in no particular order.
    pub fn circuit_sizes_with<C: Connectivity>(&self, edge_count: usize) -> Vec<usize> {
        let mut circuits = C::with_points(self.points.len());
        for link in self.links.iter().take(edge_count) {
            circuits.connect(link.a, link.b);
        }
        circuits.circuit_sizes()
    }

    /// The link whose addition first joins every junction box into a single
    /// circuit, or `None` if that never happens (fewer than two boxes).
    pub fn first_full_connection(&self) -> Option<Link> {
        self.first_full_connection_with::<UnionFind>()
    }

    #[tracing::instrument(skip(self), fields(points = self.points.len()))]
    pub fn first_full_connection_with<C: Connectivity>(&self) -> Option<Link> {
        let mut circuits = C::with_points(self.points.len());
        let found = self.links.iter().enumerate().find_map(|(index, link)| {
            circuits.connect(link.a, link.b);
            circuits.is_fully_connected().then_some((index, *link))
        });

        match found {
            Some((index, link)) => {
                tracing::debug!(edges = index + 1, ?link, "fully connected");
                Some(link)
            }
            None => {
                tracing::debug!("never fully connected");
                None
            }
        }
    }

    /// Applies `f` to the endpoints of [`Network::first_full_connection`].
    pub fn connecting_endpoints<T>(&self, f: impl FnOnce(Point, Point) -> T) -> Option<T> {
        self.first_full_connection()
            .map(|link| f(self.points[link.a], self.points[link.b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::connectivity::Adjacency;
    use crate::parser::MAX_COORDINATE;
    use rstest::rstest;

    fn line() -> Network {
        Network::new(vec![
            Point::new(0, 0, 0),
            Point::new(0, 0, 1),
            Point::new(0, 0, 5),
        ])
    }

    #[test]
    fn distance_table_is_sorted_with_index_tie_break() {
        let network = Network::new(vec![
            Point::new(0, 0, 0),
            Point::new(1, 0, 0),
            Point::new(0, 1, 0),
            Point::new(1, 1, 0),
        ]);
        let pairs = network
            .links()
            .iter()
            .map(|link| (link.distance_squared, link.a, link.b))
            .collect::<Vec<_>>();

        assert_eq!(
            pairs,
            vec![
                (1, 0, 1),
                (1, 0, 2),
                (1, 1, 3),
                (1, 2, 3),
                (2, 0, 3),
                (2, 1, 2),
            ]
        );
    }

    #[test]
    fn distance_between_extreme_boxes_fits() {
        let far = Point::splat(MAX_COORDINATE);
        assert_eq!(
            distance_squared(-far, far),
            3 * (2 * MAX_COORDINATE) * (2 * MAX_COORDINATE)
        );
    }

    #[test]
    fn line_distances() {
        let distances = line()
            .links()
            .iter()
            .map(|link| (link.a, link.b, link.distance_squared))
            .collect::<Vec<_>>();
        assert_eq!(distances, vec![(0, 1, 1), (1, 2, 16), (0, 2, 25)]);
    }

    #[test]
    fn single_circuit_has_no_top_three() {
        assert_eq!(line().top_three_product(3), 0);
        assert_eq!(line().top_three_product_with::<Adjacency>(3), 0);
    }

    #[test]
    fn line_connects_on_second_link() {
        let network = line();
        let link = network.first_full_connection().unwrap();
        assert_eq!((link.a, link.b), (1, 2));
        assert_eq!(network.connecting_endpoints(|a, b| a.x * b.x), Some(0));
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single(vec![Point::new(3, 4, 5)])]
    fn too_few_points_never_connect(#[case] points: Vec<Point>) {
        let network = Network::new(points);
        assert_eq!(network.first_full_connection(), None);
        assert_eq!(network.first_full_connection_with::<Adjacency>(), None);
        assert_eq!(network.top_three_product(network.points().len()), 0);
    }

    #[test]
    fn edge_count_beyond_table_uses_every_link() {
        let network = line();
        assert_eq!(network.circuit_sizes_with::<UnionFind>(100), vec![3]);
    }

    #[test]
    fn isolated_points_are_not_circuits() {
        // Three tight pairs and one far-away loner.
        let network = Network::new(vec![
            Point::new(0, 0, 0),
            Point::new(0, 0, 1),
            Point::new(100, 0, 0),
            Point::new(100, 0, 2),
            Point::new(0, 100, 0),
            Point::new(0, 100, 3),
            Point::new(1000, 1000, 1000),
        ]);

        let mut sizes = network.circuit_sizes_with::<Adjacency>(3);
        sizes.sort_unstable();
        assert_eq!(sizes, vec![2, 2, 2]);
        assert_eq!(network.top_three_product(3), 8);

        // Two links leave only two circuits; the loners do not make up a third.
        assert_eq!(network.top_three_product(2), 0);
        assert_eq!(network.top_three_product_with::<Adjacency>(2), 0);
    }
}

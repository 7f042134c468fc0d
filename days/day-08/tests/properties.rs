use aoc2025_day_8::connectivity::{Adjacency, Connectivity};
use aoc2025_day_8::{Network, Point, UnionFind};
use proptest::prelude::*;

fn points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50i64..50, -50i64..50, -50i64..50), 0..24)
        .prop_map(|coords| coords.into_iter().map(|(x, y, z)| Point::new(x, y, z)).collect())
}

fn sorted(mut sizes: Vec<usize>) -> Vec<usize> {
    sizes.sort_unstable();
    sizes
}

proptest! {
    #[test]
    fn prop_links_are_processed_shortest_first(points in points()) {
        let network = Network::new(points);
        for pair in network.links().windows(2) {
            prop_assert!(pair[0].distance_squared <= pair[1].distance_squared);
            prop_assert!(pair[0] < pair[1]);
        }
        for link in network.links() {
            prop_assert!(link.a < link.b);
            prop_assert!(link.distance_squared >= 0);
        }
    }

    #[test]
    fn prop_top_three_is_deterministic(points in points(), edge_count in 0usize..40) {
        let first = Network::new(points.clone()).top_three_product(edge_count);
        let second = Network::new(points).top_three_product(edge_count);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_backends_agree(points in points(), edge_count in 0usize..40) {
        let network = Network::new(points);
        prop_assert_eq!(
            sorted(network.circuit_sizes_with::<UnionFind>(edge_count)),
            sorted(network.circuit_sizes_with::<Adjacency>(edge_count))
        );
        prop_assert_eq!(
            network.first_full_connection_with::<UnionFind>(),
            network.first_full_connection_with::<Adjacency>()
        );
    }

    #[test]
    fn prop_connecting_link_is_the_earliest(points in points()) {
        let network = Network::new(points);
        let n = network.points().len();

        match network.first_full_connection() {
            Some(link) => {
                let k = network.links().iter().position(|l| *l == link).unwrap() + 1;

                let mut before = UnionFind::with_points(n);
                for l in &network.links()[..k - 1] {
                    before.connect(l.a, l.b);
                }
                prop_assert!(!before.is_fully_connected());

                before.connect(link.a, link.b);
                prop_assert!(before.is_fully_connected());
            }
            None => prop_assert!(n < 2),
        }
    }

    #[test]
    fn prop_circuits_only_grow(points in points(), probe in 0usize..24) {
        let network = Network::new(points);
        let n = network.points().len();
        prop_assume!(probe < n);

        let mut dsu = UnionFind::new(n);
        let mut previous = dsu.size_of(probe);
        for link in network.links() {
            dsu.connect(link.a, link.b);
            let current = dsu.size_of(probe);
            prop_assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn prop_linked_points_are_partitioned(points in points(), edge_count in 0usize..40) {
        let network = Network::new(points);
        let linked = network
            .links()
            .iter()
            .take(edge_count)
            .flat_map(|l| [l.a, l.b])
            .collect::<std::collections::HashSet<_>>();

        let total: usize = network.circuit_sizes_with::<Adjacency>(edge_count).iter().sum();
        prop_assert_eq!(total, linked.len());
    }
}

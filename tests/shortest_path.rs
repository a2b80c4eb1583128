use city_paths::{
    graphs::{
        graph_factory::{to_file_text, GraphFactory},
        Distance, Graph, Vertex, MAX_WEIGHT, MIN_WEIGHT,
    },
    search::{
        bellman_ford::{bellman_ford_one_to_all, bellman_ford_one_to_one, BellmanFord},
        path::{ShortestPathOutcome, ShortestPathRequest},
        PathFinding,
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, number_of_vertices: u32, edge_probability: f64) -> Graph {
    let neighbor_lists: Vec<Vec<Vertex>> = (1..=number_of_vertices)
        .map(|_| {
            (1..=number_of_vertices)
                .filter(|_| rng.gen_bool(edge_probability))
                .collect()
        })
        .collect();
    let weights: Vec<u32> = (0..number_of_vertices * number_of_vertices)
        .map(|_| rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT))
        .collect();

    GraphFactory::from_console_entries(number_of_vertices, &neighbor_lists, |tail, head| {
        Ok(weights[((tail - 1) * number_of_vertices + head - 1) as usize])
    })
    .unwrap()
}

fn random_graphs() -> Vec<Graph> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..20)
        .map(|_| {
            let number_of_vertices = rng.gen_range(1..=25);
            let edge_probability = rng.gen_range(0.0..0.3);
            random_graph(&mut rng, number_of_vertices, edge_probability)
        })
        .collect()
}

#[test]
fn detour_is_shorter_than_direct_edge() {
    let graph = GraphFactory::from_console_entries(3, &[vec![2, 3], vec![3], vec![]], |tail, head| {
        Ok(match (tail, head) {
            (1, 2) => 10,
            (2, 3) => 5,
            _ => 20,
        })
    })
    .unwrap();

    let request = ShortestPathRequest::new(&graph, 1, 3).unwrap();
    assert_eq!(
        BellmanFord::new(&graph).shortest_path_distance(&request),
        ShortestPathOutcome::Reachable(15)
    );
}

#[test]
fn graph_without_edges_is_unreachable() {
    let graph = GraphFactory::from_console_entries(2, &[vec![], vec![]], |_, _| Ok(1)).unwrap();
    assert_eq!(
        bellman_ford_one_to_one(&graph, 1, 2),
        ShortestPathOutcome::Unreachable
    );
}

#[test]
fn file_graph_is_directed() {
    let graph = GraphFactory::from_file_text("2\n2 10\n\n").unwrap();
    assert_eq!(
        bellman_ford_one_to_one(&graph, 1, 2),
        ShortestPathOutcome::Reachable(10)
    );
    assert_eq!(
        bellman_ford_one_to_one(&graph, 2, 1),
        ShortestPathOutcome::Unreachable
    );
}

#[test]
fn source_is_at_distance_zero() {
    for graph in random_graphs() {
        for vertex in 1..=graph.number_of_vertices() {
            assert_eq!(
                bellman_ford_one_to_one(&graph, vertex, vertex),
                ShortestPathOutcome::Reachable(0)
            );
        }
    }
}

#[test]
fn repeated_queries_agree() {
    for graph in random_graphs() {
        let pathfinder = BellmanFord::new(&graph);
        let n = pathfinder.number_of_vertices();
        let request = ShortestPathRequest::new(&graph, 1, n).unwrap();
        assert_eq!(
            pathfinder.shortest_path_distance(&request),
            pathfinder.shortest_path_distance(&request)
        );
    }
}

#[test]
fn triangle_inequality_holds() {
    for graph in random_graphs() {
        let n = graph.number_of_vertices();
        let all: Vec<Vec<Distance>> = (1..=n)
            .map(|source| bellman_ford_one_to_all(&graph, source))
            .collect();

        for source in 0..n as usize {
            for middle in 0..n as usize {
                for target in 0..n as usize {
                    let first = all[source][middle];
                    let second = all[middle][target];
                    if first == Distance::MAX || second == Distance::MAX {
                        continue;
                    }
                    assert!(all[source][target] <= first + second);
                }
            }
        }
    }
}

#[test]
fn unreachable_matches_missing_edge_path() {
    for graph in random_graphs() {
        let n = graph.number_of_vertices();
        for source in 1..=n {
            // plain reachability by repeated expansion
            let mut reached = vec![false; n as usize];
            reached[source as usize - 1] = true;
            let mut changed = true;
            while changed {
                changed = false;
                for edge in graph.edges() {
                    if reached[edge.tail() as usize - 1] && !reached[edge.head() as usize - 1] {
                        reached[edge.head() as usize - 1] = true;
                        changed = true;
                    }
                }
            }

            for target in 1..=n {
                assert_eq!(
                    bellman_ford_one_to_one(&graph, source, target).is_reachable(),
                    reached[target as usize - 1]
                );
            }
        }
    }
}

#[test]
fn file_round_trip_keeps_edges() {
    for graph in random_graphs() {
        let rebuilt = GraphFactory::from_file_text(&to_file_text(&graph)).unwrap();

        let mut expected = graph.edges().to_vec();
        let mut actual = rebuilt.edges().to_vec();
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual);
        assert_eq!(graph.incidence_list(), rebuilt.incidence_list());
    }
}

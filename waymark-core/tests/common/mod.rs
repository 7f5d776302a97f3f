use waymark_core::{Graph, GraphKind, Network, NetworkOptions};

/// Station names of the six-station reference network, indexed by vertex.
pub const STATIONS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Connections of the six-station reference network.
pub const CONNECTIONS: [(&str, &str, f64); 8] = [
    ("A", "B", 5.0),
    ("A", "C", 8.0),
    ("B", "C", 10.0),
    ("B", "D", 6.0),
    ("C", "D", 7.0),
    ("D", "E", 3.0),
    ("D", "F", 9.0),
    ("E", "F", 2.0),
];

/// Builds the reference network as a bare graph, stations indexed A..F.
#[must_use]
pub fn reference_graph(kind: GraphKind) -> Graph {
    let edges = CONNECTIONS.iter().map(|&(from, to, weight)| {
        (index_of(from), index_of(to), weight)
    });
    Graph::from_edges(STATIONS.len(), kind, edges).expect("reference edges are valid")
}

/// Builds the reference network with labels.
#[must_use]
pub fn reference_network(options: NetworkOptions) -> Network<&'static str> {
    Network::from_connections(CONNECTIONS, options).expect("reference connections are valid")
}

fn index_of(station: &str) -> usize {
    STATIONS
        .iter()
        .position(|&name| name == station)
        .expect("station is listed")
}

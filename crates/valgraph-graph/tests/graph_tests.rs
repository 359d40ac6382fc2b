//! Behavior shared by all graph kinds, exercised through the public API

use valgraph_core::{Error, ScalarType, ScalarValue, ValueSchema, vals};
use valgraph_graph::{
    AnyValueGraph, EdgeInit, EdgeListGraph, GraphConfig, GraphKind, InOutDirectedValueGraph,
    OutDirectedValueGraph, PlainGraph, UndirectedValueGraph, ValueGraph, ValueGraphMut,
    VertexInit, new_graph,
};

const KINDS: [GraphKind; 3] = [
    GraphKind::Undirected,
    GraphKind::OutDirected,
    GraphKind::InOutDirected,
];

fn distance_config() -> GraphConfig<u32> {
    GraphConfig::new()
        .vertex_schema(ValueSchema::named([("name", ScalarType::String)]).unwrap())
        .vertex_init(VertexInit::generator(|v: u32| vals![format!("v{v}")]))
        .edge_schema(ValueSchema::named([("distance", ScalarType::Float64)]).unwrap())
}

#[test]
fn test_vertex_values_from_generator() {
    for kind in KINDS {
        let g = new_graph(kind, 3, distance_config()).unwrap();
        assert_eq!(
            g.get_vertex_val(2, "name").unwrap(),
            ScalarValue::String("v2".into())
        );
        assert_eq!(g.get_vertex_vals(3).unwrap(), vals!["v3"]);
        assert!(g.has_vertex_key("name"));
        assert!(!g.has_vertex_key(1usize));
        assert!(g.has_edge_key("distance"));
    }
}

#[test]
fn test_deferred_vertex_values() {
    let config = GraphConfig::<u32>::new()
        .vertex_schema(ValueSchema::unnamed([ScalarType::Int64]));
    let mut g = UndirectedValueGraph::with_config(2, config).unwrap();

    let err = g.get_vertex_val(1, 0usize).unwrap_err();
    assert!(matches!(err, Error::Uninitialized(_)));
    assert!(err.is_recoverable());

    g.set_vertex_val(1, 0usize, 5i64).unwrap();
    assert_eq!(g.get_vertex_val(1, 0usize).unwrap(), ScalarValue::Int64(5));
}

#[test]
fn test_add_vertex_appends() {
    for kind in KINDS {
        let mut g = new_graph(kind, 2, distance_config()).unwrap();
        assert_eq!(g.add_vertex(vals!["extra"]).unwrap(), 3);
        assert_eq!(g.vertex_count(), 3);
        assert!(g.outneighbors(3).unwrap().is_empty());
        assert!(g.add_edge(3, 1, vals![1.0f64]).unwrap());

        let err = g.add_vertex(vals![1i64]).unwrap_err();
        assert!(err.is_schema_violation());
        assert_eq!(g.vertex_count(), 3);
    }
}

#[test]
fn test_edge_value_access() {
    for kind in KINDS {
        let mut g = new_graph(kind, 4, distance_config()).unwrap();
        g.add_edge(1, 2, vals![12.0f64]).unwrap();

        assert_eq!(
            g.get_edge_val(1, 2, "distance").unwrap(),
            ScalarValue::Float64(12.0)
        );
        assert_eq!(g.get_edge_vals(1, 2).unwrap(), vals![12.0f64]);
        assert!(g.get_edge_val(1, 3, "distance").unwrap_err().is_not_found());
        assert!(g.get_edge_val(1, 2, "weight").unwrap_err().is_not_found());
        assert_eq!(
            g.get_edge_val_or(1, 3, "distance", ScalarValue::Float64(-1.0)),
            ScalarValue::Float64(-1.0)
        );
        assert_eq!(
            g.get_edge_val_or(1, 9, "distance", ScalarValue::Float64(-1.0)),
            ScalarValue::Float64(-1.0)
        );
    }
}

#[test]
fn test_set_edge_vals_reports_write() {
    for kind in KINDS {
        let mut g = new_graph(kind, 3, distance_config()).unwrap();
        g.add_edge(1, 2, vals![1.0f64]).unwrap();
        g.add_edge(3, 3, vals![3.0f64]).unwrap();

        assert!(g.set_edge_vals(1, 2, vals![2.0f64]).unwrap(), "{kind:?}");
        assert_eq!(g.get_edge_vals(1, 2).unwrap(), vals![2.0f64]);
        assert!(g.set_edge_vals(3, 3, vals![4.0f64]).unwrap(), "{kind:?}");
        assert_eq!(g.get_edge_vals(3, 3).unwrap(), vals![4.0f64]);
        assert_eq!(g.edge_count(), 2);

        assert!(!g.set_edge_vals(2, 3, vals![5.0f64]).unwrap());
        assert!(!g.has_edge(2, 3));
        assert!(matches!(
            g.set_edge_vals(1, 9, vals![5.0f64]),
            Err(Error::InvalidVertex { .. })
        ));
        assert!(g.set_edge_vals(1, 2, vals!["far"]).unwrap_err().is_schema_violation());
        assert_eq!(g.get_edge_vals(1, 2).unwrap(), vals![2.0f64]);
    }
}

#[test]
fn test_undirected_edge_symmetry() {
    let mut g = new_graph(GraphKind::Undirected, 3, distance_config()).unwrap();
    g.add_edge(3, 1, vals![31.0f64]).unwrap();
    assert!(g.has_edge(1, 3));
    assert_eq!(g.get_edge_val(1, 3, 0usize).unwrap(), ScalarValue::Float64(31.0));
    assert_eq!(g.edge_count(), 1);
    assert!(g.rem_edge(1, 3).unwrap());
    assert!(!g.has_edge(3, 1));
}

#[test]
fn test_directed_kinds_agree() {
    let edges = [(1u32, 2u32), (2, 3), (3, 1), (1, 3), (2, 2)];
    let mut out = OutDirectedValueGraph::<u32>::new(3).unwrap();
    let mut inout = InOutDirectedValueGraph::<u32>::new(3).unwrap();
    for (s, d) in edges {
        out.add_edge(s, d, vals![]).unwrap();
        inout.add_edge(s, d, vals![]).unwrap();
    }
    out.rem_edge(2, 3).unwrap();
    inout.rem_edge(2, 3).unwrap();

    assert_eq!(out.edges().collect::<Vec<_>>(), inout.edges().collect::<Vec<_>>());
    for v in out.vertices() {
        assert_eq!(out.outneighbors(v).unwrap(), inout.outneighbors(v).unwrap());
        assert_eq!(out.inneighbors(v).unwrap(), inout.inneighbors(v).unwrap());
        assert_eq!(out.all_neighbors(v).unwrap(), inout.all_neighbors(v).unwrap());
    }
}

#[test]
fn test_edges_with_values_order() {
    let mut g = new_graph(GraphKind::OutDirected, 3, distance_config()).unwrap();
    g.add_edge(2, 1, vals![21.0f64]).unwrap();
    g.add_edge(1, 3, vals![13.0f64]).unwrap();

    let listed: Vec<String> = g
        .edges_with_values()
        .map(|e| e.unwrap().to_string())
        .collect();
    assert_eq!(
        listed,
        vec!["1 -> 3 with values (13.0,)", "2 -> 1 with values (21.0,)"]
    );
}

#[test]
fn test_convert_undirected_source() {
    let source = EdgeListGraph::<u32>::from_edges(4, false, [(1, 2), (3, 2), (4, 4)]).unwrap();
    let config = GraphConfig::new()
        .edge_schema(ValueSchema::unnamed([ScalarType::Int64]))
        .edge_init(EdgeInit::generator(|s: u32, d: u32| {
            vals![i64::from(s) * 10 + i64::from(d)]
        }));

    let g = UndirectedValueGraph::from_plain_graph(&source, config).unwrap();
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.get_edge_val(2, 3, 0usize).unwrap(), ScalarValue::Int64(23));
    assert_eq!(g.get_edge_val(3, 2, 0usize).unwrap(), ScalarValue::Int64(23));
    assert_eq!(g.get_edge_val(4, 4, 0usize).unwrap(), ScalarValue::Int64(44));

    let d = InOutDirectedValueGraph::<u32>::from_plain_graph(&source, GraphConfig::new()).unwrap();
    assert_eq!(d.edge_count(), 5);
    assert!(d.has_edge(2, 1));
    assert!(d.has_edge(1, 2));
    assert_eq!(d.inneighbors(2).unwrap().as_ref(), &[1, 3]);
}

#[test]
fn test_convert_directed_source_to_undirected() {
    let source = EdgeListGraph::<u32>::from_edges(3, true, [(1, 2), (2, 1), (3, 1)]).unwrap();
    let g = UndirectedValueGraph::<u32>::from_plain_graph(&source, GraphConfig::new()).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.all_neighbors(1).unwrap().as_ref(), &[2, 3]);
}

#[test]
fn test_convert_with_deferred_edge_values() {
    let source = EdgeListGraph::<u32>::from_edges(2, true, [(1, 2)]).unwrap();
    let config = GraphConfig::new().edge_schema(ValueSchema::unnamed([ScalarType::Bool]));
    let mut g = OutDirectedValueGraph::<u32>::from_plain_graph(&source, config).unwrap();

    assert!(matches!(
        g.get_edge_val(1, 2, 0usize),
        Err(Error::Uninitialized(_))
    ));
    assert!(g.edges_with_values().next().unwrap().is_err());

    assert!(g.set_edge_val(1, 2, 0usize, true).unwrap());
    assert_eq!(g.get_edge_vals(1, 2).unwrap(), vals![true]);
}

#[test]
fn test_convert_generator_schema_violation() {
    let source = EdgeListGraph::<u32>::from_edges(2, false, [(1, 2)]).unwrap();
    let config = GraphConfig::new()
        .edge_schema(ValueSchema::unnamed([ScalarType::Int64]))
        .edge_init(EdgeInit::generator(|_: u32, _: u32| vals!["bad"]));
    let err = UndirectedValueGraph::from_plain_graph(&source, config).unwrap_err();
    assert!(err.is_schema_violation());
}

#[test]
fn test_narrow_index_type() {
    let mut g = UndirectedValueGraph::<u8>::new(255).unwrap();
    assert!(matches!(
        g.add_vertex(vals![]),
        Err(Error::CapacityExceeded(_))
    ));
    assert!(g.add_edge(255, 1, vals![]).unwrap());
    assert_eq!(g.eltype_name(), "u8");
}

#[test]
fn test_any_graph_from_concrete() {
    let mut g: AnyValueGraph = UndirectedValueGraph::<u32>::new(2).unwrap().into();
    g.add_edge(1, 2, vals![]).unwrap();
    assert_eq!(g.kind(), GraphKind::Undirected);
    assert_eq!(
        g.to_string(),
        "{2, 1} undirected UndirectedValueGraph with\n              eltype: u32\n  vertex value types: ()\n    edge value types: ()"
    );
}

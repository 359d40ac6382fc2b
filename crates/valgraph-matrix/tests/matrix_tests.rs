//! Matrix views stay live against the graph they observe

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, RwLock};

use valgraph_core::{Key, ScalarType, ScalarValue, ValueSchema, vals};
use valgraph_graph::{
    GraphConfig, GraphKind, InOutDirectedValueGraph, OutDirectedValueGraph, PlainGraph,
    UndirectedValueGraph, ValueGraph, ValueGraphMut, new_graph,
};
use valgraph_matrix::{AdjacencyMatrix, ValueMatrix, Weights, weights};

fn distance_config() -> GraphConfig<u32> {
    GraphConfig::new()
        .edge_schema(ValueSchema::named([("distance", ScalarType::Float64)]).unwrap())
}

#[test]
fn test_adjacency_matrix_follows_mutation() {
    let g = Rc::new(RefCell::new(
        OutDirectedValueGraph::<u32>::new(3).unwrap(),
    ));
    let m = AdjacencyMatrix::new(Rc::clone(&g));
    assert_eq!(m.get(1, 2).unwrap(), 0);

    g.borrow_mut().add_edge(1, 2, vals![]).unwrap();
    assert_eq!(m.get(1, 2).unwrap(), 1);
    assert_eq!(m.get(2, 1).unwrap(), 0);

    g.borrow_mut().rem_edge(1, 2).unwrap();
    assert_eq!(m.get(1, 2).unwrap(), 0);

    let v = g.borrow_mut().add_vertex(vals![]).unwrap();
    assert_eq!(m.shape().unwrap(), (4, 4));
    assert_eq!(m.get(v, v).unwrap(), 0);
}

#[test]
fn test_value_matrix_behind_rwlock() {
    let g = Arc::new(RwLock::new(
        InOutDirectedValueGraph::with_config(3, distance_config()).unwrap(),
    ));
    let m = ValueMatrix::new(Arc::clone(&g), "distance", -1.0f64).unwrap();
    assert_eq!(m.get(1, 3).unwrap(), Some(ScalarValue::Float64(-1.0)));

    g.write().unwrap().add_edge(1, 3, vals![13.0f64]).unwrap();
    assert_eq!(m.get(1, 3).unwrap(), Some(ScalarValue::Float64(13.0)));

    g.write().unwrap().set_edge_val(1, 3, "distance", 31.0f64).unwrap();
    assert_eq!(m.get(1, 3).unwrap(), Some(ScalarValue::Float64(31.0)));
    assert_eq!(m.get(3, 1).unwrap(), Some(ScalarValue::Float64(-1.0)));
}

#[test]
fn test_matrix_over_borrowed_graph_fails_softly() {
    let g = Rc::new(RefCell::new(UndirectedValueGraph::<u32>::new(2).unwrap()));
    let m = AdjacencyMatrix::new(Rc::clone(&g));
    let guard = g.borrow_mut();
    let err = m.get(1, 1).unwrap_err();
    assert!(!err.is_recoverable());
    drop(guard);
    assert_eq!(m.get(1, 1).unwrap(), 0);
}

#[test]
fn test_weights_tagged_result() {
    let plain = UndirectedValueGraph::<u32>::new(3).unwrap();
    match weights(&plain, None).unwrap() {
        Weights::UniformWeight(w) => {
            assert_eq!(w.shape(), (3, 3));
            assert_eq!(w.get::<u32, f64>(1, 2).unwrap(), 1.0);
        }
        Weights::Explicit(_) => panic!("graph without edge values has uniform weights"),
    }

    let mut g = UndirectedValueGraph::with_config(3, distance_config()).unwrap();
    g.add_edge(1, 2, vals![12.0f64]).unwrap();
    let w = weights(&g, None).unwrap();
    assert!(!w.is_uniform());
    let m = w.as_explicit().unwrap();
    assert_eq!(m.get(2, 1).unwrap(), Some(ScalarValue::Float64(12.0)));
    assert_eq!(m.get(2, 3).unwrap(), Some(ScalarValue::Float64(0.0)));

    assert!(weights(&g, Some(Key::from("time"))).unwrap_err().is_not_found());
}

#[test]
fn test_weights_array() {
    let mut g = new_graph(GraphKind::OutDirected, 2, distance_config()).unwrap();
    g.add_edge(2, 1, vals![4.5f64]).unwrap();
    let array = weights(&g, Some("distance".into())).unwrap().to_f64_array().unwrap();
    assert_eq!(array, ndarray::array![[0.0, 0.0], [4.5, 0.0]]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every entry agrees with the graph, before and after a mutation
    #[test]
    fn prop_views_agree_with_graph(
        directed in any::<bool>(),
        pairs in prop::collection::vec((1u32..=5, 1u32..=5, -50i64..50), 0..20),
        extra in (1u32..=5, 1u32..=5),
    ) {
        let kind = if directed { GraphKind::InOutDirected } else { GraphKind::Undirected };
        let config = GraphConfig::new()
            .edge_schema(ValueSchema::named([("w", ScalarType::Int64)]).unwrap());
        let g = Rc::new(RefCell::new(new_graph::<u32>(kind, 5, config).unwrap()));
        for (s, d, w) in pairs {
            g.borrow_mut().add_edge(s, d, vals![w]).unwrap();
        }

        let adjacency = AdjacencyMatrix::new(Rc::clone(&g));
        let values = ValueMatrix::new(Rc::clone(&g), "w", 0i64).unwrap();

        for round in 0..2 {
            if round == 1 {
                let (s, d) = extra;
                if g.borrow().has_edge(s, d) {
                    g.borrow_mut().rem_edge(s, d).unwrap();
                } else {
                    g.borrow_mut().add_edge(s, d, vals![99i64]).unwrap();
                }
            }
            let graph = g.borrow();
            for i in 1..=5u32 {
                for j in 1..=5u32 {
                    let expected = u8::from(graph.has_edge(i, j));
                    prop_assert_eq!(adjacency.get(i, j).unwrap(), expected);
                    let expected = graph.get_edge_val_or(i, j, "w", ScalarValue::Int64(0));
                    prop_assert_eq!(values.get(i, j).unwrap(), Some(expected));
                }
            }
        }
    }
}

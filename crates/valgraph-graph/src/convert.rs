//! Conversion from plain graphs

use crate::config::EdgeInit;
use crate::traits::PlainGraph;
use crate::vertices::invalid_vertex;
use valgraph_core::{Result, ValueSchema, ValueTuple, VertexIndex};

/// Storage positions of the edges a converted graph must hold
///
/// For an undirected target every pair is canonical (`s <= d`) and appears
/// once, even if the source is directed and holds both directions. For a
/// directed target an undirected source contributes both directions.
pub(crate) fn edge_positions<S: PlainGraph>(
    source: &S,
    directed_target: bool,
) -> Result<Vec<(usize, usize)>> {
    let n = source.vertex_count();
    let position = |v: S::Vertex| match v.to_position() {
        Some(pos) if pos < n => Ok(pos),
        _ => Err(invalid_vertex(v, n)),
    };

    let mut pairs = Vec::with_capacity(source.edge_count());
    for edge in source.edges() {
        let (s, d) = (position(edge.src)?, position(edge.dst)?);
        if directed_target {
            pairs.push((s, d));
            if !source.is_directed() && s != d {
                pairs.push((d, s));
            }
        } else {
            pairs.push((s.min(d), s.max(d)));
        }
    }
    pairs.sort_unstable();
    pairs.dedup();
    Ok(pairs)
}

/// Values for a converted edge, `None` when initialization is deferred
pub(crate) fn initial_values<V: VertexIndex>(
    init: &EdgeInit<V>,
    schema: &ValueSchema,
    s: V,
    d: V,
) -> Result<Option<ValueTuple>> {
    match init {
        EdgeInit::Deferred => Ok(None),
        EdgeInit::Generator(generate) => {
            let values = generate(s, d);
            schema.check(&values)?;
            Ok(Some(values))
        }
    }
}

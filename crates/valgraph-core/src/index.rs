//! Vertex index types
//!
//! Vertices are identified by a primitive integer chosen when the graph is
//! built. Valid vertices form the dense range `1..=n`; a vertex `v` lives at
//! storage position `v - 1`.

use num_traits::{FromPrimitive, PrimInt, ToPrimitive};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Trait for all integer types usable as vertex indices
pub trait VertexIndex:
    PrimInt + FromPrimitive + ToPrimitive + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Name of the integer type, as shown in graph summaries
    fn type_name() -> &'static str;

    /// Storage position of this vertex, `None` for indices below 1
    fn to_position(self) -> Option<usize> {
        self.to_usize()?.checked_sub(1)
    }

    /// Vertex stored at `pos`, `None` if the type cannot represent it
    fn from_position(pos: usize) -> Option<Self> {
        Self::from_usize(pos.checked_add(1)?)
    }

    /// Largest number of vertices a graph with this index type can hold
    fn max_vertex_count() -> usize {
        Self::max_value().to_usize().unwrap_or(usize::MAX)
    }
}

macro_rules! impl_vertex_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl VertexIndex for $ty {
                fn type_name() -> &'static str {
                    stringify!($ty)
                }
            }
        )*
    };
}

impl_vertex_index!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// Ascending iterator over the vertices `1..=n` of a graph
#[derive(Debug, Clone)]
pub struct Vertices<V> {
    front: usize,
    back: usize,
    _marker: PhantomData<V>,
}

impl<V: VertexIndex> Vertices<V> {
    /// Iterate over the first `count` vertices
    pub fn new(count: usize) -> Self {
        Self {
            front: 0,
            back: count,
            _marker: PhantomData,
        }
    }
}

impl<V: VertexIndex> Iterator for Vertices<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.front >= self.back {
            return None;
        }
        let v = V::from_position(self.front)?;
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<V: VertexIndex> DoubleEndedIterator for Vertices<V> {
    fn next_back(&mut self) -> Option<V> {
        if self.front >= self.back {
            return None;
        }
        let v = V::from_position(self.back - 1)?;
        self.back -= 1;
        Some(v)
    }
}

impl<V: VertexIndex> ExactSizeIterator for Vertices<V> {}

impl<V: VertexIndex> FusedIterator for Vertices<V> {}

use arbor_core::{Edge, MstError, Weight, WeightedGraph};

/// Edge-list graph that answers incidence queries by scanning every edge.
#[derive(Clone, Debug)]
pub struct EdgeList {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl EdgeList {
    #[must_use]
    pub fn new(vertex_count: usize, triples: &[(usize, usize, Weight)]) -> Self {
        let edges = triples
            .iter()
            .enumerate()
            .map(|(id, &(from, to, weight))| Edge::new(id, from, to, weight))
            .collect();
        Self {
            vertex_count,
            edges,
        }
    }
}

impl WeightedGraph for EdgeList {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn incident(&self, vertex: usize) -> Result<impl Iterator<Item = &Edge>, MstError> {
        if vertex >= self.vertex_count {
            return Err(MstError::UnknownVertex {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(self
            .edges
            .iter()
            .filter(move |edge| edge.other_end(vertex).is_some()))
    }
}

//! Edge-to-triangle adjacency queries.
//!
//! The tear engine needs to know, for a pair of vertices, how many
//! triangles reference both and which one comes first in scan order.
//! Rather than rescanning the whole triangle list per query, the map is
//! built once per simulation step and updated incrementally whenever a
//! split retargets a triangle slot, so it always reflects the triangle
//! sequence as of the most recently applied split.

use std::collections::HashMap;

/// Edge → triangle multimap over a triangle sequence.
///
/// Keys are unordered vertex pairs canonicalized to `(min, max)`; values
/// are triangle indices in ascending scan order. For a closed, untorn
/// grid every interior structural edge maps to exactly 2 triangles and
/// every mesh-boundary edge to exactly 1.
#[derive(Debug, Clone, Default)]
pub struct EdgeTriangleMap {
    map: HashMap<(u32, u32), Vec<u32>>,
}

#[inline]
fn key(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

impl EdgeTriangleMap {
    /// Builds the map from a triangle sequence in one pass.
    pub fn build(triangles: &[[u32; 3]]) -> Self {
        let mut map: HashMap<(u32, u32), Vec<u32>> = HashMap::new();

        for (t, tri) in triangles.iter().enumerate() {
            let [a, b, c] = *tri;
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                map.entry(key(v0, v1)).or_default().push(t as u32);
            }
        }

        Self { map }
    }

    /// Number of triangles referencing both `a` and `b`, in any slot.
    pub fn triangle_count(&self, a: u32, b: u32) -> usize {
        self.map.get(&key(a, b)).map_or(0, Vec::len)
    }

    /// The first triangle (scan order) referencing both `a` and `b`.
    ///
    /// Only the first match is ever reported, even when the edge still
    /// borders two triangles; the split path migrates one triangle per
    /// affected spring and relies on this.
    pub fn first_triangle(&self, a: u32, b: u32) -> Option<u32> {
        self.map.get(&key(a, b)).and_then(|tris| tris.first().copied())
    }

    /// All triangles referencing both `a` and `b`, in scan order.
    pub fn triangles_of(&self, a: u32, b: u32) -> &[u32] {
        self.map.get(&key(a, b)).map_or(&[], Vec::as_slice)
    }

    /// Re-homes triangle `tri` after one of its slots was rewritten from
    /// `old_vertex` to `new_vertex`.
    ///
    /// `triangle` is the post-rewrite triple. The two unchanged slots
    /// each lose their edge to `old_vertex` and gain one to `new_vertex`.
    pub fn retarget(&mut self, tri: u32, old_vertex: u32, new_vertex: u32, triangle: [u32; 3]) {
        for &v in &triangle {
            if v == new_vertex {
                continue;
            }
            self.remove_edge(old_vertex, v, tri);
            self.map.entry(key(new_vertex, v)).or_default().push(tri);
        }
    }

    /// Number of distinct edges in the map.
    pub fn edge_count(&self) -> usize {
        self.map.len()
    }

    /// Number of edges touching exactly one triangle.
    pub fn boundary_edge_count(&self) -> usize {
        self.map.values().filter(|tris| tris.len() == 1).count()
    }

    fn remove_edge(&mut self, a: u32, b: u32, tri: u32) {
        let k = key(a, b);
        if let Some(tris) = self.map.get_mut(&k) {
            if let Some(pos) = tris.iter().position(|&t| t == tri) {
                tris.remove(pos);
            }
            if tris.is_empty() {
                self.map.remove(&k);
            }
        }
    }
}

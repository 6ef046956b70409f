//! Polyline as a doubly linked list of vertex slots
//!
//! Slots live in a flat arena and link to each other by index. Removing a
//! vertex only unlinks it: the slot keeps its own `prev`/`next`, so the
//! caller can still find the neighbors it was spliced out from.

/// One vertex slot of a [`Polyline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    /// Stable slot index within the polyline
    pub index: usize,
    /// Point id in the dataset's point storage
    pub id: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    /// Endpoints are never removable
    pub removable: bool,
}

/// Linked-list view over the point ids of one line cell
#[derive(Debug, Clone)]
pub struct Polyline {
    vertices: Vec<Vertex>,
    size: usize,
    is_loop: bool,
}

impl Polyline {
    /// Build the list from a cell's ordered point ids.
    ///
    /// A polyline whose first and last point ids are equal is a loop.
    pub fn new(point_ids: &[usize]) -> Self {
        let n = point_ids.len();
        let vertices = point_ids
            .iter()
            .enumerate()
            .map(|(index, &id)| Vertex {
                index,
                id,
                prev: index.checked_sub(1),
                next: (index + 1 < n).then_some(index + 1),
                removable: index != 0 && index + 1 != n,
            })
            .collect();
        let is_loop = matches!((point_ids.first(), point_ids.last()), (Some(a), Some(b)) if a == b);

        Self {
            vertices,
            size: n,
            is_loop,
        }
    }

    /// Number of vertices still linked
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of vertices the polyline was built with
    pub fn original_size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    /// Vertex count below which the polyline may not be reduced
    pub fn min_size(&self) -> usize {
        if self.is_loop {
            3
        } else {
            2
        }
    }

    /// Slot `index`. Panics if out of range.
    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    /// Unlink slot `index` from its neighbors.
    ///
    /// The slot must still be linked and must not be an endpoint. Its own
    /// links are left untouched.
    pub fn remove(&mut self, index: usize) {
        let Vertex { prev, next, removable, .. } = self.vertices[index];
        debug_assert!(removable, "endpoint {} cannot be removed", index);
        debug_assert!(
            prev.map_or(true, |p| self.vertices[p].next == Some(index)),
            "slot {} is no longer linked",
            index
        );

        if let Some(p) = prev {
            self.vertices[p].next = next;
        }
        if let Some(n) = next {
            self.vertices[n].prev = prev;
        }
        self.size -= 1;
    }

    /// Point ids of the linked vertices, walking from slot 0
    pub fn iter_ids(&self) -> impl Iterator<Item = usize> + '_ {
        let mut cursor = (!self.vertices.is_empty()).then_some(0);
        std::iter::from_fn(move || {
            let vertex = &self.vertices[cursor?];
            cursor = vertex.next;
            Some(vertex.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_links_and_flags() {
        let polyline = Polyline::new(&[10, 11, 12, 13]);
        assert_eq!(polyline.size(), 4);
        assert_eq!(polyline.original_size(), 4);
        assert!(!polyline.is_loop());
        assert_eq!(polyline.min_size(), 2);

        let first = polyline.vertex(0);
        assert_eq!(first.prev, None);
        assert_eq!(first.next, Some(1));
        assert!(!first.removable);

        let last = polyline.vertex(3);
        assert_eq!(last.prev, Some(2));
        assert_eq!(last.next, None);
        assert!(!last.removable);

        assert!(polyline.vertex(1).removable);
        assert!(polyline.vertex(2).removable);
        assert_eq!(polyline.vertex(2).id, 12);
    }

    #[test]
    fn test_loop_detection() {
        let polyline = Polyline::new(&[0, 1, 2, 0]);
        assert!(polyline.is_loop());
        assert_eq!(polyline.min_size(), 3);
        assert!(!Polyline::new(&[0, 1, 2]).is_loop());
    }

    #[test]
    fn test_remove_splices_neighbors() {
        let mut polyline = Polyline::new(&[0, 1, 2, 3, 4]);
        polyline.remove(2);
        assert_eq!(polyline.size(), 4);
        assert_eq!(polyline.vertex(1).next, Some(3));
        assert_eq!(polyline.vertex(3).prev, Some(1));
        // The removed slot still points at its old neighbors
        assert_eq!(polyline.vertex(2).prev, Some(1));
        assert_eq!(polyline.vertex(2).next, Some(3));

        polyline.remove(1);
        assert_eq!(polyline.vertex(0).next, Some(3));
        assert_eq!(polyline.iter_ids().collect::<Vec<_>>(), vec![0, 3, 4]);
    }

    #[test]
    fn test_single_segment_has_nothing_removable() {
        let polyline = Polyline::new(&[5, 6]);
        assert!(!polyline.vertex(0).removable);
        assert!(!polyline.vertex(1).removable);
        assert_eq!(polyline.iter_ids().collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn test_degenerate_sizes() {
        let single = Polyline::new(&[7]);
        assert_eq!(single.size(), 1);
        assert!(!single.vertex(0).removable);
        assert_eq!(single.iter_ids().collect::<Vec<_>>(), vec![7]);

        let empty = Polyline::new(&[]);
        assert_eq!(empty.size(), 0);
        assert!(!empty.is_loop());
        assert_eq!(empty.iter_ids().count(), 0);
    }
}

//! Line cell topology

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Packed list of cells, each an ordered run of point ids.
///
/// Cell `i` spans `connectivity[offsets[i]..offsets[i + 1]]`. `offsets`
/// always starts with a leading zero, so it holds `len() + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CellArrayData")]
pub struct CellArray {
    offsets: Vec<usize>,
    connectivity: Vec<usize>,
}

impl CellArray {
    /// Create a new empty cell array
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Create an empty cell array with room for `cells` cells and
    /// `connectivity` point ids in total
    pub fn with_capacity(cells: usize, connectivity: usize) -> Self {
        let mut offsets = Vec::with_capacity(cells + 1);
        offsets.push(0);
        Self {
            offsets,
            connectivity: Vec::with_capacity(connectivity),
        }
    }

    /// Build a cell array from a list of cells
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[usize]>,
    {
        let mut array = Self::new();
        for cell in cells {
            array.insert_next_cell(cell.as_ref());
        }
        array
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Check if there are no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of point ids over all cells
    pub fn connectivity_len(&self) -> usize {
        self.connectivity.len()
    }

    /// Append a complete cell. Returns its cell id.
    pub fn insert_next_cell(&mut self, point_ids: &[usize]) -> usize {
        self.connectivity.extend_from_slice(point_ids);
        self.offsets.push(self.connectivity.len());
        self.len() - 1
    }

    /// Start a new, empty cell to be filled with [`CellArray::insert_cell_point`].
    /// Returns its cell id.
    pub fn begin_cell(&mut self) -> usize {
        self.offsets.push(self.connectivity.len());
        self.len() - 1
    }

    /// Append a point id to the most recently started cell.
    ///
    /// Panics if no cell has been started.
    pub fn insert_cell_point(&mut self, point_id: usize) {
        assert!(!self.is_empty(), "insert_cell_point called before begin_cell");
        self.connectivity.push(point_id);
        if let Some(last) = self.offsets.last_mut() {
            *last = self.connectivity.len();
        }
    }

    /// Point ids of cell `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn cell(&self, index: usize) -> &[usize] {
        &self.connectivity[self.offsets[index]..self.offsets[index + 1]]
    }

    /// Iterate over all cells in order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.connectivity[w[0]..w[1]])
    }

    /// Largest point id referenced by any cell
    pub fn max_point_id(&self) -> Option<usize> {
        self.connectivity.iter().copied().max()
    }
}

impl Default for CellArray {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked serialized form of a [`CellArray`]
#[derive(Deserialize)]
struct CellArrayData {
    offsets: Vec<usize>,
    connectivity: Vec<usize>,
}

impl TryFrom<CellArrayData> for CellArray {
    type Error = Error;

    fn try_from(data: CellArrayData) -> Result<Self, Self::Error> {
        let CellArrayData {
            offsets,
            connectivity,
        } = data;
        if offsets.first() != Some(&0) {
            return Err(Error::InvalidData("Cell offsets must start with 0".to_string()));
        }
        if offsets.windows(2).any(|w| w[1] < w[0]) {
            return Err(Error::InvalidData("Cell offsets must not decrease".to_string()));
        }
        if offsets.last() != Some(&connectivity.len()) {
            return Err(Error::InvalidData(format!(
                "Cell offsets end at {:?} but connectivity holds {} point ids",
                offsets.last(),
                connectivity.len()
            )));
        }
        Ok(Self {
            offsets,
            connectivity,
        })
    }
}

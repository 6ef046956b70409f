//! Polygonal line datasets

use crate::attributes::AttributeTable;
use crate::cell_array::CellArray;
use crate::error::{Error, Result};
use crate::point::Points;
use serde::{Deserialize, Serialize};

/// A set of points, line cells over those points, and attribute tables
/// holding one record per point and one record per line cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyData {
    pub points: Points,
    pub lines: CellArray,
    pub point_data: AttributeTable,
    pub cell_data: AttributeTable,
}

impl PolyData {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset from points and lines, without attributes
    pub fn from_points_and_lines(points: impl Into<Points>, lines: CellArray) -> Self {
        Self {
            points: points.into(),
            lines,
            point_data: AttributeTable::new(),
            cell_data: AttributeTable::new(),
        }
    }

    /// Get the number of points
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Get the number of line cells
    pub fn number_of_lines(&self) -> usize {
        self.lines.len()
    }

    /// Check if the dataset has no points or no lines
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.lines.is_empty()
    }

    /// Check that every line references an existing point and that the
    /// attribute tables hold one record per point and per line
    pub fn validate(&self) -> Result<()> {
        if let Some(max_id) = self.lines.max_point_id() {
            if max_id >= self.points.len() {
                return Err(Error::InvalidData(format!(
                    "Line references point {} but only {} points exist",
                    max_id,
                    self.points.len()
                )));
            }
        }
        self.point_data.validate(self.points.len())?;
        self.cell_data.validate(self.lines.len())?;
        Ok(())
    }
}

//! Stitching reduced polylines into an output dataset

use polycrate_core::{AttributeTable, CellArray, Points, PolyData, Precision, Result};
use std::collections::HashMap;

/// Builds the output of one decimation run.
///
/// Polylines are emitted in input cell order. A point id referenced by
/// several polylines is written once and shared by every output cell that
/// uses it.
pub struct OutputAssembler<'a> {
    input: &'a PolyData,
    output: PolyData,
    point_map: HashMap<usize, usize>,
}

impl<'a> OutputAssembler<'a> {
    /// Prepare empty output storage shaped after `input`
    pub fn new(input: &'a PolyData, precision: Precision) -> Self {
        let num_lines = input.number_of_lines();
        let output = PolyData {
            points: Points::new(precision),
            lines: CellArray::with_capacity(num_lines, num_lines * 2),
            point_data: AttributeTable::copy_allocate(&input.point_data, 0),
            cell_data: AttributeTable::copy_allocate(&input.cell_data, num_lines),
        };
        Self {
            input,
            output,
            point_map: HashMap::new(),
        }
    }

    /// Append the surviving point ids of input cell `cell_index` as a new
    /// output cell. Returns the new cell id.
    pub fn emit(&mut self, cell_index: usize, point_ids: &[usize]) -> Result<usize> {
        let cell_id = self.output.lines.begin_cell();
        self.output
            .cell_data
            .copy_data(&self.input.cell_data, cell_index, cell_id)?;

        for &id in point_ids {
            let new_id = match self.point_map.get(&id) {
                Some(&new_id) => new_id,
                None => {
                    let new_id = self.output.points.push(self.input.points.point(id));
                    self.output
                        .point_data
                        .copy_data(&self.input.point_data, id, new_id)?;
                    self.point_map.insert(id, new_id);
                    new_id
                }
            };
            self.output.lines.insert_cell_point(new_id);
        }

        Ok(cell_id)
    }

    /// Number of cells emitted so far
    pub fn cells_emitted(&self) -> usize {
        self.output.number_of_lines()
    }

    pub fn finish(self) -> PolyData {
        self.output
    }
}

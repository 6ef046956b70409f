//! Greedy polyline decimation
//!
//! Each polyline is reduced independently. Every interior vertex gets an
//! error: its distance to the line through its current neighbors. The
//! vertex with the lowest error is removed, its two neighbors are
//! re-evaluated against their new neighbors, and the process repeats until
//! the target reduction is met, the polyline reaches its minimum size, or
//! no vertex under the error ceiling is left.

use crate::abort::{AbortCheck, NeverAbort};
use crate::assembler::OutputAssembler;
use crate::error_queue::ErrorQueue;
use crate::polyline::Polyline;
use crate::PolylineSimplifier;
use polycrate_core::{
    distance2_between_points, distance_to_line, Error, OutputPointsPrecision, Points, PolyData,
    Result,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error of removing slot `index`: the distance from its point to the line
/// through its current neighbors.
///
/// When both neighbors sit on the same position the error is 0, whatever
/// the position of the vertex itself. Slots without two neighbors (the
/// endpoints) have infinite error.
pub fn compute_error(points: &Points, polyline: &Polyline, index: usize) -> f64 {
    let vertex = polyline.vertex(index);
    let (Some(prev), Some(next)) = (vertex.prev, vertex.next) else {
        return f64::INFINITY;
    };

    let x1 = points.point(polyline.vertex(prev).id);
    let x = points.point(vertex.id);
    let x2 = points.point(polyline.vertex(next).id);

    if distance2_between_points(&x1, &x2) == 0.0 {
        0.0
    } else {
        distance_to_line(&x, &x1, &x2)
    }
}

/// Polyline decimation filter.
///
/// Reduces the vertex count of every line cell of a [`PolyData`] while
/// keeping each polyline's endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimatePolylineFilter {
    /// Fraction of each polyline's vertices to remove, in `[0, 1]`
    pub target_reduction: f64,
    /// Vertices whose error exceeds this are never removed
    pub maximum_error: f64,
    /// Precision of the output points
    pub output_points_precision: OutputPointsPrecision,
}

impl Default for DecimatePolylineFilter {
    fn default() -> Self {
        Self {
            target_reduction: 0.90,
            maximum_error: f64::MAX,
            output_points_precision: OutputPointsPrecision::Default,
        }
    }
}

/// Result of a decimation run that may have been aborted
#[derive(Debug, Clone)]
pub struct DecimationOutcome {
    pub output: PolyData,
    /// Number of input polylines that were reduced and emitted
    pub polylines_processed: usize,
    pub aborted: bool,
}

/// Vertex and point counts before and after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimationStats {
    pub input_points: usize,
    pub output_points: usize,
    pub input_vertices: usize,
    pub output_vertices: usize,
}

impl DecimationStats {
    pub fn new(input: &PolyData, output: &PolyData) -> Self {
        Self {
            input_points: input.number_of_points(),
            output_points: output.number_of_points(),
            input_vertices: input.lines.connectivity_len(),
            output_vertices: output.lines.connectivity_len(),
        }
    }

    /// Fraction of line vertices removed
    pub fn vertex_reduction(&self) -> f64 {
        if self.input_vertices == 0 {
            return 0.0;
        }
        1.0 - self.output_vertices as f64 / self.input_vertices as f64
    }
}

impl DecimatePolylineFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(
        target_reduction: f64,
        maximum_error: f64,
        output_points_precision: OutputPointsPrecision,
    ) -> Self {
        Self {
            target_reduction,
            maximum_error,
            output_points_precision,
        }
    }

    pub fn with_target_reduction(mut self, target_reduction: f64) -> Self {
        self.target_reduction = target_reduction;
        self
    }

    pub fn with_maximum_error(mut self, maximum_error: f64) -> Self {
        self.maximum_error = maximum_error;
        self
    }

    pub fn with_output_points_precision(mut self, precision: OutputPointsPrecision) -> Self {
        self.output_points_precision = precision;
        self
    }

    fn validate_params(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.target_reduction) {
            return Err(Error::InvalidParameter(format!(
                "Target reduction must be between 0.0 and 1.0, got {}",
                self.target_reduction
            )));
        }
        if self.maximum_error.is_nan() || self.maximum_error < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Maximum error must be non-negative, got {}",
                self.maximum_error
            )));
        }
        Ok(())
    }

    /// Checks parameters and input. Returns `None` when there is nothing to
    /// decimate.
    fn prepare<'a>(&self, input: &'a PolyData) -> Result<Option<OutputAssembler<'a>>> {
        self.validate_params()?;
        let precision = self
            .output_points_precision
            .resolve(input.points.precision());
        if input.is_empty() {
            return Ok(None);
        }
        input.validate()?;
        Ok(Some(OutputAssembler::new(input, precision)))
    }

    fn empty_output(&self, input: &PolyData) -> PolyData {
        let precision = self
            .output_points_precision
            .resolve(input.points.precision());
        PolyData::from_points_and_lines(Points::new(precision), Default::default())
    }

    /// Reduce one polyline given as point ids into `points`. Returns the
    /// surviving point ids in order.
    ///
    /// `queue` is scratch space; it is left empty on return.
    pub fn reduce_polyline(
        &self,
        points: &Points,
        point_ids: &[usize],
        queue: &mut ErrorQueue,
    ) -> Vec<usize> {
        let mut polyline = Polyline::new(point_ids);
        let original_size = polyline.original_size();
        if original_size == 0 {
            return Vec::new();
        }

        for index in 0..original_size {
            if polyline.vertex(index).removable {
                let error = compute_error(points, &polyline, index);
                if error <= self.maximum_error {
                    queue.insert(error, index);
                }
            }
        }

        while 1.0 - (polyline.size() as f64 / original_size as f64) < self.target_reduction
            && polyline.size() > polyline.min_size()
        {
            let Some(removed) = queue.pop() else {
                break;
            };
            polyline.remove(removed);

            let vertex = *polyline.vertex(removed);
            for neighbor in [vertex.prev, vertex.next].into_iter().flatten() {
                if !polyline.vertex(neighbor).removable {
                    continue;
                }
                let error = compute_error(points, &polyline, neighbor);
                queue.delete_id(neighbor);
                if error <= self.maximum_error {
                    queue.insert(error, neighbor);
                }
            }
        }

        let survivors: Vec<usize> = polyline.iter_ids().collect();
        tracing::trace!(
            original = original_size,
            remaining = survivors.len(),
            "polyline reduced"
        );
        queue.reset();
        survivors
    }

    /// Decimate every polyline of `input`
    pub fn decimate(&self, input: &PolyData) -> Result<PolyData> {
        self.decimate_with_abort(input, &NeverAbort)
            .map(|outcome| outcome.output)
    }

    /// Decimate polylines in order, checking `abort` before each one.
    ///
    /// On abort the polylines already emitted are kept and the rest are
    /// dropped.
    pub fn decimate_with_abort(
        &self,
        input: &PolyData,
        abort: &dyn AbortCheck,
    ) -> Result<DecimationOutcome> {
        let Some(mut assembler) = self.prepare(input)? else {
            return Ok(DecimationOutcome {
                output: self.empty_output(input),
                polylines_processed: 0,
                aborted: false,
            });
        };

        tracing::debug!(
            lines = input.number_of_lines(),
            points = input.number_of_points(),
            target_reduction = self.target_reduction,
            "Decimating polylines"
        );

        let longest = input.lines.iter().map(<[usize]>::len).max().unwrap_or(0);
        let mut queue = ErrorQueue::with_capacity(longest);
        let mut aborted = false;

        for (cell_index, point_ids) in input.lines.iter().enumerate() {
            if abort.should_abort() {
                tracing::debug!(processed = cell_index, "Polyline decimation aborted");
                aborted = true;
                break;
            }
            let survivors = self.reduce_polyline(&input.points, point_ids, &mut queue);
            assembler.emit(cell_index, &survivors)?;
        }

        let polylines_processed = assembler.cells_emitted();
        let output = assembler.finish();
        tracing::debug!(
            points = output.number_of_points(),
            vertices = output.lines.connectivity_len(),
            "Polyline decimation finished"
        );

        Ok(DecimationOutcome {
            output,
            polylines_processed,
            aborted,
        })
    }

    /// Decimate polylines on the rayon thread pool.
    ///
    /// Polylines are reduced independently and stitched back together in
    /// input cell order, so the output equals that of [`Self::decimate`].
    pub fn decimate_parallel(&self, input: &PolyData) -> Result<PolyData> {
        let Some(mut assembler) = self.prepare(input)? else {
            return Ok(self.empty_output(input));
        };

        tracing::debug!(
            lines = input.number_of_lines(),
            points = input.number_of_points(),
            threads = rayon::current_num_threads(),
            "Decimating polylines in parallel"
        );

        let cells: Vec<&[usize]> = input.lines.iter().collect();
        let reduced: Vec<Vec<usize>> = cells
            .par_iter()
            .map_init(ErrorQueue::new, |queue, point_ids| {
                self.reduce_polyline(&input.points, point_ids, queue)
            })
            .collect();

        for (cell_index, survivors) in reduced.iter().enumerate() {
            assembler.emit(cell_index, survivors)?;
        }
        Ok(assembler.finish())
    }
}

impl PolylineSimplifier for DecimatePolylineFilter {
    fn simplify(&self, data: &PolyData, reduction_ratio: f64) -> Result<PolyData> {
        self.clone()
            .with_target_reduction(reduction_ratio)
            .decimate(data)
    }
}

impl fmt::Display for DecimatePolylineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target Reduction: {}", self.target_reduction)?;
        writeln!(f, "Maximum Error: {}", self.maximum_error)?;
        writeln!(f, "Output Points Precision: {}", self.output_points_precision)
    }
}

//! Per-point and per-cell attribute tables

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Typed component storage of a [`DataArray`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayValues {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
}

impl ArrayValues {
    fn len(&self) -> usize {
        match self {
            ArrayValues::F32(v) => v.len(),
            ArrayValues::F64(v) => v.len(),
            ArrayValues::I32(v) => v.len(),
            ArrayValues::I64(v) => v.len(),
            ArrayValues::U8(v) => v.len(),
        }
    }

    /// Empty storage of the same type with reserved capacity
    fn empty_like(&self, capacity: usize) -> Self {
        match self {
            ArrayValues::F32(_) => ArrayValues::F32(Vec::with_capacity(capacity)),
            ArrayValues::F64(_) => ArrayValues::F64(Vec::with_capacity(capacity)),
            ArrayValues::I32(_) => ArrayValues::I32(Vec::with_capacity(capacity)),
            ArrayValues::I64(_) => ArrayValues::I64(Vec::with_capacity(capacity)),
            ArrayValues::U8(_) => ArrayValues::U8(Vec::with_capacity(capacity)),
        }
    }

    /// Append `src[range]` to `self`; both must hold the same type
    fn extend_from(&mut self, src: &ArrayValues, start: usize, end: usize) -> Result<()> {
        match (self, src) {
            (ArrayValues::F32(dst), ArrayValues::F32(src)) => {
                dst.extend_from_slice(&src[start..end])
            }
            (ArrayValues::F64(dst), ArrayValues::F64(src)) => {
                dst.extend_from_slice(&src[start..end])
            }
            (ArrayValues::I32(dst), ArrayValues::I32(src)) => {
                dst.extend_from_slice(&src[start..end])
            }
            (ArrayValues::I64(dst), ArrayValues::I64(src)) => {
                dst.extend_from_slice(&src[start..end])
            }
            (ArrayValues::U8(dst), ArrayValues::U8(src)) => {
                dst.extend_from_slice(&src[start..end])
            }
            _ => {
                return Err(Error::InvalidData(
                    "Attribute array value types do not match".to_string(),
                ))
            }
        }
        Ok(())
    }
}

/// A named array of fixed-size tuples (one tuple per point or per cell)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DataArrayData")]
pub struct DataArray {
    pub name: String,
    pub num_components: usize,
    pub values: ArrayValues,
}

impl DataArray {
    /// Create an array. `values.len()` must be a multiple of `num_components`.
    pub fn new(
        name: impl Into<String>,
        num_components: usize,
        values: ArrayValues,
    ) -> Result<Self> {
        let array = Self {
            name: name.into(),
            num_components,
            values,
        };
        array.validate()?;
        Ok(array)
    }

    /// Number of tuples (0 when `num_components` is 0)
    pub fn tuple_count(&self) -> usize {
        self.values
            .len()
            .checked_div(self.num_components)
            .unwrap_or(0)
    }

    /// Check the component count and that values form whole tuples
    pub fn validate(&self) -> Result<()> {
        if self.num_components == 0 {
            return Err(Error::InvalidData(format!(
                "Attribute array '{}' must have at least one component",
                self.name
            )));
        }
        if self.values.len() % self.num_components != 0 {
            return Err(Error::InvalidData(format!(
                "Attribute array '{}' has {} values, not a multiple of {} components",
                self.name,
                self.values.len(),
                self.num_components
            )));
        }
        Ok(())
    }

    /// Empty array with the same name, type, and component count
    pub fn empty_like(&self, capacity: usize) -> Self {
        Self {
            name: self.name.clone(),
            num_components: self.num_components,
            values: self.values.empty_like(capacity * self.num_components),
        }
    }

    /// Append tuple `src_id` of `src` to this array
    pub fn copy_tuple_from(&mut self, src: &DataArray, src_id: usize) -> Result<()> {
        if src.num_components != self.num_components {
            return Err(Error::InvalidData(format!(
                "Attribute array '{}' expects {} components, source has {}",
                self.name, self.num_components, src.num_components
            )));
        }
        if src_id >= src.tuple_count() {
            return Err(Error::InvalidData(format!(
                "Tuple {} out of range for attribute array '{}' with {} tuples",
                src_id,
                src.name,
                src.tuple_count()
            )));
        }
        let start = src_id * self.num_components;
        self.values
            .extend_from(&src.values, start, start + self.num_components)
    }
}

/// Unchecked serialized form of a [`DataArray`]
#[derive(Deserialize)]
struct DataArrayData {
    name: String,
    num_components: usize,
    values: ArrayValues,
}

impl TryFrom<DataArrayData> for DataArray {
    type Error = Error;

    fn try_from(data: DataArrayData) -> Result<Self> {
        DataArray::new(data.name, data.num_components, data.values)
    }
}

/// An ordered collection of [`DataArray`]s sharing one tuple count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeTable {
    arrays: Vec<DataArray>,
}

impl AttributeTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self { arrays: Vec::new() }
    }

    /// Add an array. Arrays already present must share its tuple count.
    pub fn add_array(&mut self, array: DataArray) -> Result<()> {
        if let Some(first) = self.arrays.first() {
            if first.tuple_count() != array.tuple_count() {
                return Err(Error::InvalidData(format!(
                    "Attribute array '{}' has {} tuples, table has {}",
                    array.name,
                    array.tuple_count(),
                    first.tuple_count()
                )));
            }
        }
        self.arrays.push(array);
        Ok(())
    }

    /// Look up an array by name
    pub fn array(&self, name: &str) -> Option<&DataArray> {
        self.arrays.iter().find(|a| a.name == name)
    }

    /// Number of arrays
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Check if the table holds no arrays
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Tuple count shared by all arrays (0 for an empty table)
    pub fn tuple_count(&self) -> usize {
        self.arrays.first().map_or(0, DataArray::tuple_count)
    }

    /// New table with the same array layout as `input` and no tuples,
    /// with room for `capacity` tuples per array
    pub fn copy_allocate(input: &AttributeTable, capacity: usize) -> Self {
        Self {
            arrays: input.arrays.iter().map(|a| a.empty_like(capacity)).collect(),
        }
    }

    /// Copy record `src_id` of `input` into record `dst_id` of this table.
    ///
    /// Records are appended, so `dst_id` must equal the current tuple count.
    /// A no-op for tables without arrays.
    pub fn copy_data(
        &mut self,
        input: &AttributeTable,
        src_id: usize,
        dst_id: usize,
    ) -> Result<()> {
        if self.arrays.is_empty() {
            return Ok(());
        }
        if dst_id != self.tuple_count() {
            return Err(Error::InvalidData(format!(
                "Attribute record {} is not the next record ({})",
                dst_id,
                self.tuple_count()
            )));
        }
        if input.arrays.len() != self.arrays.len() {
            return Err(Error::InvalidData("Attribute table layouts do not match".to_string()));
        }
        for (dst, src) in self.arrays.iter_mut().zip(&input.arrays) {
            dst.copy_tuple_from(src, src_id)?;
        }
        Ok(())
    }

    /// Check that every array is well formed and holds exactly `expected` tuples
    pub fn validate(&self, expected: usize) -> Result<()> {
        for array in &self.arrays {
            array.validate()?;
            if array.tuple_count() != expected {
                return Err(Error::InvalidData(format!(
                    "Attribute array '{}' has {} tuples, expected {}",
                    array.name,
                    array.tuple_count(),
                    expected
                )));
            }
        }
        Ok(())
    }
}

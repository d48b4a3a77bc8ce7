// File: crates/tidy-core/src/frame.rs
// Summary: Column-oriented table with elementwise maps, wide-to-long melt and CSV export.

use std::io::Write;
use std::path::Path;

use crate::error::{PlotError, Result};

/// Typed column storage.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Cell `row` formatted for display or CSV.
    pub fn cell_string(&self, row: usize) -> Option<String> {
        match self {
            ColumnData::Float(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::Text(v) => v.get(row).cloned(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ColumnData::Float(_) => "float",
            ColumnData::Text(_) => "text",
        }
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(v: Vec<f64>) -> Self { ColumnData::Float(v) }
}

impl From<Vec<String>> for ColumnData {
    fn from(v: Vec<String>) -> Self { ColumnData::Text(v) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// A table of equally long, uniquely named columns.
/// Contract: every column has `n_rows()` entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// Row count; an empty frame has zero rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    pub fn n_columns(&self) -> usize { self.columns.len() }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Append a column. Fails on a duplicate name or when the length differs
    /// from the existing columns.
    pub fn push_column(&mut self, name: impl Into<String>, data: impl Into<ColumnData>) -> Result<()> {
        let name = name.into();
        let data = data.into();
        if self.column(&name).is_some() {
            return Err(PlotError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && data.len() != self.n_rows() {
            return Err(PlotError::LengthMismatch { name, expected: self.n_rows(), got: data.len() });
        }
        self.columns.push(Column { name, data });
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.data)
    }

    fn require(&self, name: &str) -> Result<&ColumnData> {
        self.column(name).ok_or_else(|| PlotError::UnknownColumn(name.to_string()))
    }

    pub fn float_column(&self, name: &str) -> Result<&[f64]> {
        match self.require(name)? {
            ColumnData::Float(v) => Ok(v),
            _ => Err(PlotError::ColumnType { name: name.to_string(), expected: "float" }),
        }
    }

    pub fn text_column(&self, name: &str) -> Result<&[String]> {
        match self.require(name)? {
            ColumnData::Text(v) => Ok(v),
            _ => Err(PlotError::ColumnType { name: name.to_string(), expected: "text" }),
        }
    }

    /// Apply `f` to every value of the float column `name`, in row order.
    /// The first error aborts the map and is returned as is.
    pub fn try_map_float<F, E>(&self, name: &str, mut f: F) -> std::result::Result<Vec<f64>, E>
    where
        F: FnMut(f64) -> std::result::Result<f64, E>,
        E: From<PlotError>,
    {
        let src = self.float_column(name)?;
        let mut out = Vec::with_capacity(src.len());
        for &x in src {
            out.push(f(x)?);
        }
        Ok(out)
    }

    /// Pivot wide to long: `id_var` is repeated, every other column becomes
    /// (`var_name` = its header, `value_name` = its value) rows. Rows are
    /// emitted column by column, each column in row order.
    pub fn melt(&self, id_var: &str, var_name: &str, value_name: &str) -> Result<DataFrame> {
        let ids = self.require(id_var)?;
        let value_columns: Vec<&Column> = self.columns.iter().filter(|c| c.name != id_var).collect();
        let n = self.n_rows();
        let total = n * value_columns.len();

        let mut var_out: Vec<String> = Vec::with_capacity(total);
        let mut value_out: Vec<f64> = Vec::with_capacity(total);
        for col in &value_columns {
            let values = match &col.data {
                ColumnData::Float(v) => v,
                other => {
                    tracing::debug!(column = %col.name, kind = other.kind(), "melt: non-float value column");
                    return Err(PlotError::ColumnType { name: col.name.clone(), expected: "float" });
                }
            };
            var_out.extend(std::iter::repeat(col.name.clone()).take(n));
            value_out.extend_from_slice(values);
        }

        // The id column is repeated once per value column.
        let id_out = match ids {
            ColumnData::Float(src) => ColumnData::Float(src.iter().copied().cycle().take(total).collect()),
            ColumnData::Text(src) => ColumnData::Text(src.iter().cloned().cycle().take(total).collect()),
        };

        tracing::trace!(rows = total, value_columns = value_columns.len(), "melted frame");
        let mut long = DataFrame::new();
        long.push_column(id_var, id_out)?;
        long.push_column(var_name, var_out)?;
        long.push_column(value_name, value_out)?;
        Ok(long)
    }

    /// Write the frame as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.column_names())?;
        for row in 0..self.n_rows() {
            wtr.write_record(self.columns.iter().map(|c| c.data.cell_string(row).unwrap_or_default()))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| PlotError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Write CSV to `path`, creating parent directories.
    pub fn write_csv_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.write_csv(std::fs::File::create(path)?)
    }
}

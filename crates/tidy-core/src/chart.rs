// File: crates/tidy-core/src/chart.rs
// Summary: Declarative chart description (data + aesthetic mapping + layers + labels) and its builder.

use crate::error::{PlotError, Result};
use crate::frame::{ColumnData, DataFrame};
use crate::series::Series;

/// Binding of data columns to visual channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes {
    pub x: String,
    pub y: String,
    pub color: Option<String>,
}

impl Aes {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self { x: x.into(), y: y.into(), color: None }
    }

    /// Map a column to a categorical color channel.
    pub fn color(mut self, column: impl Into<String>) -> Self {
        self.color = Some(column.into());
        self
    }
}

/// Geometry layer kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geom {
    /// Connect the points of each series in row order.
    Line,
}

/// Axis titles. `None` leaves the renderer's default (the mapped column
/// name); an empty string hides the title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels {
    pub x: Option<String>,
    pub y: Option<String>,
}

impl Labels {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self { x: Some(x.into()), y: Some(y.into()) }
    }
}

/// Accumulates mapping, layers and labels; [`ChartBuilder::build`] checks
/// them against the data and freezes the result.
#[derive(Clone, Debug)]
pub struct ChartBuilder {
    data: DataFrame,
    aes: Option<Aes>,
    layers: Vec<Geom>,
    labels: Labels,
    title: Option<String>,
}

impl ChartBuilder {
    pub fn aes(mut self, aes: Aes) -> Self {
        self.aes = Some(aes);
        self
    }

    pub fn geom(mut self, geom: Geom) -> Self {
        self.layers.push(geom);
        self
    }

    pub fn labs(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> Result<Chart> {
        let aes = self.aes.ok_or(PlotError::MissingAes)?;
        self.data.float_column(&aes.x)?;
        self.data.float_column(&aes.y)?;
        if let Some(color) = &aes.color {
            if self.data.column(color).is_none() {
                return Err(PlotError::UnknownColumn(color.clone()));
            }
        }
        tracing::debug!(rows = self.data.n_rows(), layers = self.layers.len(), "chart built");
        Ok(Chart { data: self.data, aes, layers: self.layers, labels: self.labels, title: self.title })
    }
}

/// Immutable chart description. Rendering is up to the caller; see
/// `Chart::render_to_png`.
#[derive(Clone, Debug)]
pub struct Chart {
    data: DataFrame,
    aes: Aes,
    layers: Vec<Geom>,
    labels: Labels,
    title: Option<String>,
}

impl Chart {
    pub fn builder(data: DataFrame) -> ChartBuilder {
        ChartBuilder { data, aes: None, layers: Vec::new(), labels: Labels::default(), title: None }
    }

    pub fn data(&self) -> &DataFrame { &self.data }
    pub fn aes(&self) -> &Aes { &self.aes }
    pub fn layers(&self) -> &[Geom] { &self.layers }
    pub fn labels(&self) -> &Labels { &self.labels }
    pub fn title(&self) -> Option<&str> { self.title.as_deref() }

    /// Effective x-axis title: the label if set, else the mapped column.
    pub fn x_title(&self) -> &str {
        self.labels.x.as_deref().unwrap_or(&self.aes.x)
    }

    pub fn y_title(&self) -> &str {
        self.labels.y.as_deref().unwrap_or(&self.aes.y)
    }

    /// Split rows into one series per distinct color value, ordered by first
    /// appearance. Points keep row order within a series.
    pub fn series(&self) -> Vec<Series> {
        // Columns were checked in `build`; the fallbacks are unreachable for a built chart.
        let xs = self.data.float_column(&self.aes.x).unwrap_or(&[]);
        let ys = self.data.float_column(&self.aes.y).unwrap_or(&[]);
        let keys = self.aes.color.as_deref().and_then(|c| self.data.column(c));

        let Some(keys) = keys else {
            let points = xs.iter().copied().zip(ys.iter().copied()).collect();
            return vec![Series::with_data(None, points)];
        };

        let mut out: Vec<Series> = Vec::new();
        for (row, (&x, &y)) in xs.iter().zip(ys).enumerate() {
            let key = match keys {
                ColumnData::Text(v) => v[row].clone(),
                ColumnData::Float(_) => keys.cell_string(row).unwrap_or_default(),
            };
            match out.iter_mut().find(|s| s.name.as_deref() == Some(key.as_str())) {
                Some(s) => s.data_xy.push((x, y)),
                None => out.push(Series::with_data(Some(key), vec![(x, y)])),
            }
        }
        out
    }
}

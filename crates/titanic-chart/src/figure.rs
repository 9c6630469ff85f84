//! Serializable figure model
//!
//! A [`Figure`] is plain data: column sources, glyphs bound to columns by
//! name, axis configuration, a hover tooltip and an optional checkbox filter.
//! It serializes to the JSON document the embedded browser script draws.
//!
//! ```text
//! Figure
//! ├─ sources: Vec<ColumnDataSource>   (named columns, one value per row)
//! ├─ glyphs: Vec<Glyph>               (VBar / Scatter, each referencing a source)
//! ├─ x_range: XRange                  (Auto or categorical factors)
//! ├─ tooltip: Option<Tooltip>         (template or label/value fields)
//! └─ filter: Option<CheckboxFilter>   (client-side row filter)
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Color used for glyphs whose color is missing.
pub const DEFAULT_COLOR: &str = "#1f77b4";

const DEFAULT_SIZE: u32 = 600;

/// Named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColumnDataSource {
    columns: BTreeMap<String, Vec<Value>>,
}

impl ColumnDataSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a column.
    ///
    /// # Panics
    ///
    /// Panics if the column length differs from the existing columns.
    #[must_use]
    pub fn with_column<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let name = name.into();
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        if let Some((other, column)) = self.columns.iter().find(|(other, _)| **other != name) {
            assert_eq!(
                column.len(),
                values.len(),
                "column '{name}' length differs from column '{other}'"
            );
        }
        self.columns.insert(name, values);
        self
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A position on a categorical axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Factor {
    Flat(String),
    /// Two-level factor: `(group, item)`, drawn with the group label below its items
    Nested(String, String),
}

impl From<&str> for Factor {
    fn from(value: &str) -> Self {
        Factor::Flat(value.to_owned())
    }
}

impl From<(String, String)> for Factor {
    fn from((group, item): (String, String)) -> Self {
        Factor::Nested(group, item)
    }
}

impl From<Factor> for Value {
    fn from(factor: Factor) -> Self {
        match factor {
            Factor::Flat(value) => Value::String(value),
            Factor::Nested(group, item) => Value::from(vec![group, item]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum XRange {
    /// Numeric range fitted to the data
    #[default]
    Auto,
    Factors { factors: Vec<Factor> },
}

impl XRange {
    pub fn factors<I, F>(factors: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Factor>,
    {
        XRange::Factors {
            factors: factors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Fill color of a glyph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    /// Per-row color read from a source column; null cells use [`DEFAULT_COLOR`]
    Field(String),
    Value(String),
    #[default]
    Default,
}

impl From<Option<&str>> for Color {
    fn from(color: Option<&str>) -> Self {
        color.map_or(Color::Default, |c| Color::Value(c.to_owned()))
    }
}

/// Index of a source within its figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceId(usize);

/// Vertical bars over a categorical x axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VBar {
    pub source: SourceId,
    pub x: String,
    pub top: String,
    pub bottom: f64,
    /// Bar width as a fraction of one factor slot
    pub width: f64,
    pub color: Color,
    pub line_color: Option<String>,
    /// Column whose distinct values become legend entries
    pub legend_field: Option<String>,
}

impl VBar {
    #[must_use]
    pub fn new(source: SourceId, x: impl Into<String>, top: impl Into<String>) -> Self {
        Self {
            source,
            x: x.into(),
            top: top.into(),
            bottom: 0.0,
            width: 0.8,
            color: Color::Default,
            line_color: None,
            legend_field: None,
        }
    }
}

/// Circular markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scatter {
    pub source: SourceId,
    pub x: String,
    pub y: String,
    pub color: Color,
    pub alpha: f64,
    /// Marker diameter in pixels
    pub size: f64,
    pub legend_label: Option<String>,
}

impl Scatter {
    #[must_use]
    pub fn new(source: SourceId, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            source,
            x: x.into(),
            y: y.into(),
            color: Color::Default,
            alpha: 1.0,
            size: 4.0,
            legend_label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "glyph")]
pub enum Glyph {
    #[serde(rename = "vbar")]
    VBar(VBar),
    #[serde(rename = "scatter")]
    Scatter(Scatter),
}

impl Glyph {
    #[must_use]
    pub fn source(&self) -> SourceId {
        match self {
            Glyph::VBar(bar) => bar.source,
            Glyph::Scatter(scatter) => scatter.source,
        }
    }
}

/// Hover tooltip. `@Column` placeholders are replaced with the hovered row's value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tooltip {
    Template(String),
    Fields(Vec<(String, String)>),
}

impl Tooltip {
    pub fn fields<I, L, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        Tooltip::Fields(
            fields
                .into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
        )
    }
}

/// Alternating fill between horizontal grid lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridBand {
    pub fill_color: String,
    pub fill_alpha: f64,
}

/// Client-side row filter.
///
/// When a box is toggled, the browser keeps the rows of the source's initial
/// snapshot whose `field` value is an active label, replaces the source with
/// them, and resets the categorical x range to their `factor_field` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxFilter {
    pub labels: Vec<String>,
    pub active: Vec<usize>,
    pub source: SourceId,
    pub field: String,
    pub factor_field: String,
}

impl CheckboxFilter {
    /// A filter with every label initially checked.
    pub fn all_active<I, L>(
        labels: I,
        source: SourceId,
        field: impl Into<String>,
        factor_field: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let labels = labels.into_iter().map(Into::into).collect::<Vec<_>>();
        Self {
            active: (0..labels.len()).collect(),
            labels,
            source,
            field: field.into(),
            factor_field: factor_field.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    title: String,
    x_axis_label: String,
    y_axis_label: String,
    width: u32,
    height: u32,
    x_range: XRange,
    y_grid_band: Option<GridBand>,
    sources: Vec<ColumnDataSource>,
    glyphs: Vec<Glyph>,
    tooltip: Option<Tooltip>,
    filter: Option<CheckboxFilter>,
}

impl Figure {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            x_range: XRange::Auto,
            y_grid_band: None,
            sources: Vec::new(),
            glyphs: Vec::new(),
            tooltip: None,
            filter: None,
        }
    }

    #[must_use]
    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_label = x.into();
        self.y_axis_label = y.into();
        self
    }

    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn x_range(mut self, x_range: XRange) -> Self {
        self.x_range = x_range;
        self
    }

    #[must_use]
    pub fn y_grid_band(mut self, fill_color: impl Into<String>, fill_alpha: f64) -> Self {
        self.y_grid_band = Some(GridBand {
            fill_color: fill_color.into(),
            fill_alpha,
        });
        self
    }

    #[must_use]
    pub fn tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn add_source(&mut self, source: ColumnDataSource) -> SourceId {
        self.sources.push(source);
        SourceId(self.sources.len() - 1)
    }

    pub fn add_glyph(&mut self, glyph: Glyph) {
        debug_assert!(glyph.source().0 < self.sources.len());
        self.glyphs.push(glyph);
    }

    pub fn set_filter(&mut self, filter: CheckboxFilter) {
        debug_assert!(filter.source.0 < self.sources.len());
        self.filter = Some(filter);
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn source(&self, id: SourceId) -> Option<&ColumnDataSource> {
        self.sources.get(id.0)
    }

    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[must_use]
    pub fn filter(&self) -> Option<&CheckboxFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn x_range_factors(&self) -> Option<&[Factor]> {
        match &self.x_range {
            XRange::Auto => None,
            XRange::Factors { factors } => Some(factors.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_source_serializes_as_column_map() {
        let source = ColumnDataSource::new()
            .with_column("AgeGroup", ["Child", "Adult"])
            .with_column("Color", [Some("#34344A"), None]);
        assert_eq!(source.len(), 2);
        assert_eq!(
            serde_json::to_value(&source).unwrap(),
            json!({"AgeGroup": ["Child", "Adult"], "Color": ["#34344A", null]})
        );
    }

    #[test]
    #[should_panic(expected = "length differs")]
    fn test_mismatched_column_lengths_panic() {
        let _ = ColumnDataSource::new()
            .with_column("a", [1, 2])
            .with_column("b", [1]);
    }

    #[test]
    fn test_factors_serialize_flat_and_nested() {
        let flat = XRange::factors(["Child", "Adult"]);
        assert_eq!(
            serde_json::to_value(&flat).unwrap(),
            json!({"type": "factors", "factors": ["Child", "Adult"]})
        );

        let nested = XRange::factors([("1".to_owned(), "female".to_owned())]);
        assert_eq!(
            serde_json::to_value(&nested).unwrap(),
            json!({"type": "factors", "factors": [["1", "female"]]})
        );
        assert_eq!(
            serde_json::to_value(XRange::Auto).unwrap(),
            json!({"type": "auto"})
        );
    }

    #[test]
    fn test_glyph_and_color_encoding() {
        let mut figure = Figure::new("t");
        let source = figure.add_source(ColumnDataSource::new().with_column("x", [1.0]));
        let mut bar = VBar::new(source, "x", "x");
        bar.color = Color::Field("Color".to_owned());
        figure.add_glyph(Glyph::VBar(bar));
        let mut scatter = Scatter::new(source, "x", "x");
        scatter.color = Color::from(None);
        figure.add_glyph(Glyph::Scatter(scatter));

        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["glyphs"][0]["glyph"], "vbar");
        assert_eq!(value["glyphs"][0]["color"], json!({"field": "Color"}));
        assert_eq!(value["glyphs"][1]["glyph"], "scatter");
        assert_eq!(value["glyphs"][1]["color"], "default");
        assert_eq!(value["width"], 600);
        assert_eq!(value["tooltip"], Value::Null);
    }

    #[test]
    fn test_filter_starts_with_all_labels_active() {
        let mut figure = Figure::new("t");
        let source = figure.add_source(ColumnDataSource::new().with_column("Sex", ["male"]));
        figure.set_filter(CheckboxFilter::all_active(["male", "female"], source, "Sex", "Key"));

        let filter = figure.filter().unwrap();
        assert_eq!(filter.active, [0, 1]);
        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["filter"]["factorField"], "Key");
    }

    #[test]
    fn test_tooltip_encoding() {
        let fields = Tooltip::fields([("Fare", "@Fare")]);
        assert_eq!(
            serde_json::to_value(fields).unwrap(),
            json!({"fields": [["Fare", "@Fare"]]})
        );
        let template = Tooltip::Template("rate @SurvivalRate".to_owned());
        assert_eq!(
            serde_json::to_value(template).unwrap(),
            json!({"template": "rate @SurvivalRate"})
        );
    }
}

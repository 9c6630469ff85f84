//! Interactive charts as standalone HTML pages
//!
//! This crate is a thin adapter between the report's aggregate tables and the
//! browser. It does not draw anything itself: a [`figure::Figure`] is a
//! serializable description of a chart, and [`html::Document`] embeds it, as
//! JSON, into a page together with a small inline script that renders it as
//! SVG.
//!
//! # Features
//!
//! - **Bar charts** over flat or nested (two-level) categorical axes
//! - **Scatter charts** with one series per source
//! - **Hover tooltips** with `@Column` placeholders
//! - **Legends** from a column's distinct values or per-series labels
//! - **Checkbox filters** evaluated entirely in the browser against a snapshot
//!   of the data taken when the page loads
//!
//! # Examples
//!
//! ```
//! use titanic_chart::{
//!     figure::{ColumnDataSource, Figure, Glyph, Tooltip, VBar, XRange},
//!     html::Document,
//! };
//!
//! let mut figure = Figure::new("Survival by group")
//!     .axis_labels("Group", "Survival Rate")
//!     .x_range(XRange::factors(["Child", "Adult"]))
//!     .tooltip(Tooltip::Template("@Group: @Rate".to_owned()));
//! let source = figure.add_source(
//!     ColumnDataSource::new()
//!         .with_column("Group", ["Child", "Adult"])
//!         .with_column("Rate", [0.54, 0.36]),
//! );
//! figure.add_glyph(Glyph::VBar(VBar::new(source, "Group", "Rate")));
//!
//! let html = Document::new("groups", figure).render_html().unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod figure;
pub mod html;

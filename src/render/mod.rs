//! View models for the dashboard widgets
//!
//! Each renderer is a pure function of the store contents: rendering the
//! same reports twice yields the same output, and nothing here mutates the
//! store.

pub mod chart;
pub mod map;
pub mod table;

pub use chart::{render_charts, ChartData, DoughnutChart, LineChart, LineDataset};
pub use map::{marker_color, render_map, MapMarker, MapView, MarkerPopup};
pub use table::{render_table, TableRow};

//! UI layer: the workbench app shell and its two panes.

pub mod app;

pub use app::WorkbenchApp;

//! Output formatting: the presentation-ready table.
//!
//! This module handles the third stage of the pipeline - turning the
//! computed row model into display strings. It provides:
//!
//! - **RenderedTable**: headers, formatted rows and control snapshots,
//!   consumable by templates or serialized to JSON
//!
//! ## Example
//!
//! ```rust,ignore
//! use datatablelib::{RenderedTable, TableState};
//!
//! let table = TableState::new(columns, rows);
//! let rendered = RenderedTable::from_state(&table);
//! println!("{}", serde_json::to_string_pretty(&rendered)?);
//! ```

pub mod table;

pub use table::{Cell, HeaderCell, RenderedTable, TableRow, NO_DATA_MESSAGE};

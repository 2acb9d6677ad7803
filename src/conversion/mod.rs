//! Text line conversion module
//!
//! Contains the per-line conversion algorithm, the per-file orchestration
//! and the concurrent batch driver.

pub mod batch;
pub mod file;
pub mod line;

pub use batch::{convert_batch, BatchSummary};
pub use file::{convert_file, output_path, PreparedLines};
pub use line::{convert_line, render_output_line};

//! Shared utilities for file output and progress reporting

pub mod io;
pub mod logging;

// Re-export commonly used functions for convenience
pub use io::{ensure_parent_dir, write_atomic, write_json_atomic};
pub use logging::{create_main_progress_bar, finish_progress_bar, log_operation_complete};

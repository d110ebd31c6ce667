//! Output writing for ranked scored frames.

pub mod csv_output;

pub use csv_output::{render_frame, write_scored_csv};

pub mod batch;
pub mod converter;

pub use batch::{BatchConverter, BatchSummary};
pub use converter::{convert_file, output_path_for};

pub mod data_set;
pub mod reader;

pub use data_set::{DataSet, Sample};
pub use reader::{parse_dataset, read_dataset};

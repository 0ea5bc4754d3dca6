pub mod config;
pub mod lines;
pub mod sorter;

pub use config::SortConfig;
pub use sorter::{SortOptions, first_unsorted, sort_lines};

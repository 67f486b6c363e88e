pub mod dataset;
pub mod memory;

pub use dataset::CsvDataset;
pub use memory::ReviewStore;

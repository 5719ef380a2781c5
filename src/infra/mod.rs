pub mod csv_store;
pub mod huggingface_source;

pub use csv_store::CsvSampleStore;
pub use huggingface_source::HuggingFaceRowsSource;

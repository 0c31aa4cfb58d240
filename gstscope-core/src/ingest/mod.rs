//! Background ingestion of uploaded log files into sessions.

mod pipeline;


pub use pipeline::IngestionPipeline;

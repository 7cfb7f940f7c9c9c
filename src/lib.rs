// CSV to graph node document conversion
pub mod config;
pub mod node;
pub mod pipeline;
pub mod record;
pub mod reporter;
pub mod transformation_engine;
pub mod writer;

// Re-export core types for convenience
pub use config::{ConfigError, ConversionConfig, JobFile};
pub use node::{Node, NodeDocument, Property};
pub use pipeline::{convert, ConversionError};
pub use record::{parse_records, read_records, ParseError, ReadError, ReaderOptions, Record};
pub use reporter::{ConversionReport, ConversionReporter, ReportFormat};
pub use transformation_engine::{RecordTransformer, TransformationError};
pub use writer::{render_document, write_document, WriteError};

use thiserror::Error;

use crate::{
    config::ConversionConfig,
    record::{read_records, ReadError},
    reporter::ConversionReport,
    transformation_engine::{RecordTransformer, TransformationError},
    writer::{write_document, WriteError},
};

/// Any failure that aborts a conversion run
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Transform(#[from] TransformationError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Read, transform and write in one pass.
///
/// The output file is only created once every record has been transformed,
/// so a failed run never leaves a partial document behind.
pub fn convert(config: &ConversionConfig) -> Result<ConversionReport, ConversionError> {
    tracing::info!(
        input = %config.input_path.display(),
        identifier_field = %config.identifier_field,
        "starting conversion"
    );

    let records = read_records(&config.input_path, &config.reader_options())?;
    let document = RecordTransformer::from_config(config).transform(&records)?;
    write_document(&config.output_path, &document)?;

    Ok(ConversionReport::new(config, records.len(), &document))
}

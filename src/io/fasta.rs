use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::debug;

use crate::errors::AlignError;

/// A named sequence read from a FASTA file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: Vec<u8>) -> Self {
        Self { name: name.into(), sequence }
    }
}

/// Read all records from a FASTA formatted reader.
pub fn read_sequences<R: BufRead>(reader_inner: R) -> Result<Vec<SequenceRecord>, AlignError> {
    let mut reader = fasta::io::Reader::new(reader_inner);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| AlignError::FileReadError { source })?;
        let name = String::from_utf8_lossy(record.name()).into_owned();

        records.push(SequenceRecord::new(name, record.sequence().as_ref().to_vec()));
    }

    Ok(records)
}

/// Load all records from a FASTA file, gunzipping on the fly if the file name ends in `.gz`.
pub fn load_sequences(path: &Path) -> Result<Vec<SequenceRecord>, AlignError> {
    let is_gzipped = path.extension().map_or(false, |ext| ext == "gz");

    let file = File::open(path).map_err(|source| AlignError::FileReadError { source })?;
    let reader_inner: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let records = read_sequences(reader_inner)?;
    debug!(?path, num_records = records.len(), "Loaded sequences");

    Ok(records)
}

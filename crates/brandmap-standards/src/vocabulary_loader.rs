//! Generic-name vocabulary loading.
//!
//! The vocabulary dataset is an external CSV of `(id, canonical_name, lexeme)`
//! records. A missing file degrades to an empty vocabulary, which turns flip
//! detection into a no-op.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Once;

use brandmap_model::{GenericVocabulary, VocabularyRecord};

use crate::error::{Result, StandardsError};

/// Environment variable naming the vocabulary CSV.
pub const VOCABULARY_ENV: &str = "BRANDMAP_VOCABULARY";

static MISSING_WARNING: Once = Once::new();

/// Load a vocabulary CSV from disk.
pub fn load_vocabulary(path: &Path) -> Result<GenericVocabulary> {
    let file = File::open(path).map_err(|e| StandardsError::io(path, e))?;
    let source = path.display().to_string();
    load_vocabulary_from_reader(file, &source)
}

/// Load vocabulary records from any CSV reader.
///
/// Rows that fail to deserialize are skipped; a partially-populated dataset
/// still yields whatever it can. Only a broken header is an error.
pub fn load_vocabulary_from_reader<R: Read>(reader: R, source: &str) -> Result<GenericVocabulary> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    reader
        .headers()
        .map_err(|e| StandardsError::csv(source, &e))?;

    let mut vocabulary = GenericVocabulary::empty().with_source(source);
    let mut skipped = 0usize;
    for result in reader.deserialize::<VocabularyRecord>() {
        match result {
            Ok(record) => vocabulary.add_record(&record),
            Err(_) => skipped += 1,
        }
    }
    tracing::debug!(
        source = %source,
        names = vocabulary.len(),
        synonyms = vocabulary.synonym_count(),
        skipped,
        "generic vocabulary loaded"
    );
    Ok(vocabulary)
}

/// Load the vocabulary, falling back to an empty one.
///
/// `path` wins over [`VOCABULARY_ENV`]. When neither is set or the file
/// cannot be read, a single warning is logged for the process lifetime.
pub fn load_vocabulary_or_empty(path: Option<&Path>) -> GenericVocabulary {
    let env_path = std::env::var_os(VOCABULARY_ENV);
    let resolved = path.or_else(|| env_path.as_deref().map(Path::new));

    let Some(resolved) = resolved else {
        warn_missing("no vocabulary dataset configured");
        return GenericVocabulary::empty();
    };

    match load_vocabulary(resolved) {
        Ok(vocabulary) => vocabulary,
        Err(error) => {
            warn_missing(&error.to_string());
            GenericVocabulary::empty()
        }
    }
}

fn warn_missing(reason: &str) {
    MISSING_WARNING.call_once(|| {
        tracing::warn!(
            reason = %reason,
            "generic vocabulary unavailable; brand/generic flip detection disabled"
        );
    });
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_records_from_csv() {
        let csv = "drugbank_id,canonical_name,lexeme\n\
                   DB00316,Acetaminophen,Paracetamol\n\
                   DB00381,Amlodipine,\n";
        let vocabulary =
            load_vocabulary_from_reader(csv.as_bytes(), "inline").expect("load vocabulary");
        assert!(vocabulary.contains("PARACETAMOL"));
        assert!(vocabulary.contains("amlodipine"));
        assert_eq!(vocabulary.source.as_deref(), Some("inline"));
    }

    #[test]
    fn short_rows_are_tolerated() {
        let csv = "id,canonical_name,lexeme\nDB1,Ibuprofen\n,,\n";
        let vocabulary =
            load_vocabulary_from_reader(csv.as_bytes(), "inline").expect("load vocabulary");
        assert!(vocabulary.contains("IBUPROFEN"));
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "id,canonical_name,lexeme").expect("write header");
        writeln!(file, "DB00316,Acetylcysteine,N-acetylcysteine").expect("write row");
        let vocabulary = load_vocabulary(file.path()).expect("load vocabulary");
        assert_eq!(
            vocabulary.canonical_for("n-acetylcysteine").as_deref(),
            Some("ACETYLCYSTEINE")
        );
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let vocabulary = load_vocabulary_or_empty(Some(dir.path().join("absent.csv").as_path()));
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_vocabulary(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, StandardsError::Io { .. }));
    }
}

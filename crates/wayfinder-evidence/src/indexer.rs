//! Evidence indexing: content hashing and credibility scoring

use crate::EvidenceError;
use chrono::{DateTime, NaiveDate, Utc};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::debug;
use wayfinder_domain::{EvidenceId, EvidenceItem, EvidenceType, Provenance};

/// Hex-encoded SHA-256 of a byte slice
pub fn content_hash(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Credibility score for a new item, before clamping
///
/// Starts from the provenance base, then adjusts for format and for whether
/// the item is dated.
pub fn credibility_score(
    provenance: Provenance,
    evidence_type: EvidenceType,
    date: Option<NaiveDate>,
) -> f64 {
    let base = match provenance {
        Provenance::Original => 0.9,
        Provenance::Copy => 0.75,
        Provenance::ThirdParty => 0.7,
        Provenance::Screenshot => 0.6,
        Provenance::Transcription => 0.5,
        Provenance::Unknown => 0.4,
    };

    let format = match evidence_type {
        EvidenceType::Pdf | EvidenceType::Email => 0.05,
        EvidenceType::Audio | EvidenceType::Video => 0.05,
        EvidenceType::Document | EvidenceType::Spreadsheet | EvidenceType::Image => 0.0,
        EvidenceType::Text => -0.1,
        EvidenceType::Other => -0.05,
    };

    let dated = if date.is_some() { 0.05 } else { -0.05 };

    base + format + dated
}

/// In-memory index of evidence for one matter
#[derive(Debug, Clone, Default)]
pub struct EvidenceIndexer {
    items: Vec<EvidenceItem>,
}

impl EvidenceIndexer {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index raw content under a filename
    ///
    /// Identical content always yields an identical hash; the same content
    /// may be indexed more than once.
    pub fn add_item(
        &mut self,
        filename: &str,
        bytes: &[u8],
        provenance: Provenance,
        date: Option<NaiveDate>,
    ) -> EvidenceItem {
        let evidence_type = EvidenceType::from_filename(filename);
        let item = EvidenceItem::new(
            filename,
            evidence_type,
            content_hash(bytes),
            bytes.len() as u64,
            provenance,
            date,
            credibility_score(provenance, evidence_type, date),
        );

        debug!(
            id = %item.id(),
            filename,
            kind = evidence_type.as_str(),
            credibility = item.credibility(),
            "Indexed evidence"
        );

        self.items.push(item.clone());
        item
    }

    /// Read and index a file, dated by its modification time
    pub fn add_file(
        &mut self,
        path: impl AsRef<Path>,
        provenance: Provenance,
    ) -> Result<EvidenceItem, EvidenceError> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| EvidenceError::InvalidPath(path.display().to_string()))?;

        let bytes = fs::read(path)?;
        let date = fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(|t| DateTime::<Utc>::from(t).date_naive());

        Ok(self.add_item(filename, &bytes, provenance, date))
    }

    /// All items in insertion order
    pub fn items(&self) -> &[EvidenceItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: EvidenceId) -> Option<&EvidenceItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Items whose content hash matches
    pub fn find_by_hash(&self, hash: &str) -> Vec<&EvidenceItem> {
        self.items.iter().filter(|i| i.hash() == hash).collect()
    }

    /// Check that `bytes` still match the stored hash of an item
    pub fn verify(&self, id: EvidenceId, bytes: &[u8]) -> Result<bool, EvidenceError> {
        let item = self
            .get(id)
            .ok_or_else(|| EvidenceError::NotFound(id.to_string()))?;
        Ok(item.hash() == content_hash(bytes))
    }

    /// Number of indexed items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_known_hash() {
        assert_eq!(
            content_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_identical_content_identical_hash() {
        let mut indexer = EvidenceIndexer::new();
        let a = indexer.add_item("lease.pdf", b"same bytes", Provenance::Original, None);
        let b = indexer.add_item("copy.pdf", b"same bytes", Provenance::Copy, None);
        let c = indexer.add_item("other.pdf", b"other bytes", Provenance::Copy, None);

        assert_eq!(a.hash(), b.hash());
        assert_ne!(a.hash(), c.hash());
        assert_ne!(a.id(), b.id());
        assert_eq!(indexer.find_by_hash(a.hash()).len(), 2);
    }

    #[test]
    fn test_item_fields() {
        let mut indexer = EvidenceIndexer::new();
        let item = indexer.add_item("Notice.PDF", b"12345", Provenance::Original, date(2024, 5, 1));

        assert_eq!(item.evidence_type(), EvidenceType::Pdf);
        assert_eq!(item.size_bytes(), 5);
        assert_eq!(item.date(), date(2024, 5, 1));
        // 0.9 + 0.05 + 0.05, clamped
        assert_eq!(item.credibility(), 1.0);
    }

    #[test]
    fn test_credibility_ordering() {
        let original = credibility_score(Provenance::Original, EvidenceType::Image, None);
        let screenshot = credibility_score(Provenance::Screenshot, EvidenceType::Image, None);
        let unknown = credibility_score(Provenance::Unknown, EvidenceType::Text, None);
        assert!(original > screenshot);
        assert!(screenshot > unknown);
        assert!((unknown - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_get_and_verify() {
        let mut indexer = EvidenceIndexer::new();
        let item = indexer.add_item("photo.jpg", b"pixels", Provenance::Original, None);

        assert_eq!(indexer.get(item.id()).unwrap().filename(), "photo.jpg");
        assert!(indexer.verify(item.id(), b"pixels").unwrap());
        assert!(!indexer.verify(item.id(), b"edited pixels").unwrap());
        assert!(matches!(
            indexer.verify(EvidenceId::new(), b"pixels"),
            Err(EvidenceError::NotFound(_))
        ));
    }

    #[test]
    fn test_add_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"notes from the call").unwrap();

        let mut indexer = EvidenceIndexer::new();
        let item = indexer.add_file(file.path(), Provenance::Transcription).unwrap();

        assert_eq!(item.evidence_type(), EvidenceType::Text);
        assert_eq!(item.hash(), content_hash(b"notes from the call"));
        assert!(item.date().is_some());
        assert_eq!(indexer.len(), 1);
    }

    #[test]
    fn test_add_missing_file() {
        let mut indexer = EvidenceIndexer::new();
        let result = indexer.add_file("/nonexistent/evidence.pdf", Provenance::Original);
        assert!(matches!(result, Err(EvidenceError::Io(_))));
        assert!(indexer.is_empty());
    }
}

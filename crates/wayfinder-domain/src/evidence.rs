//! Evidence module - indexed evidence items

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Unique identifier for an evidence item (UUIDv7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EvidenceId(uuid::Uuid);

impl EvidenceId {
    /// Generate a new EvidenceId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}

impl Default for EvidenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// File format of an evidence item (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    /// PDF document
    Pdf,
    /// Photo or scanned image
    Image,
    /// Saved email message
    Email,
    /// Word-processor document
    Document,
    /// Spreadsheet
    Spreadsheet,
    /// Plain text or notes
    Text,
    /// Audio recording
    Audio,
    /// Video recording
    Video,
    /// Anything else
    Other,
}

impl EvidenceType {
    /// Determine the evidence type from a filename's extension
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder_domain::EvidenceType;
    ///
    /// assert_eq!(EvidenceType::from_filename("lease.PDF"), EvidenceType::Pdf);
    /// assert_eq!(EvidenceType::from_filename("noext"), EvidenceType::Other);
    /// ```
    pub fn from_filename(filename: &str) -> Self {
        let ext = match filename.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => return EvidenceType::Other,
        };
        match ext.as_str() {
            "pdf" => EvidenceType::Pdf,
            "jpg" | "jpeg" | "png" | "gif" | "heic" | "webp" | "tif" | "tiff" => {
                EvidenceType::Image
            }
            "eml" | "msg" => EvidenceType::Email,
            "doc" | "docx" | "odt" | "rtf" => EvidenceType::Document,
            "xls" | "xlsx" | "ods" | "csv" => EvidenceType::Spreadsheet,
            "txt" | "md" => EvidenceType::Text,
            "mp3" | "m4a" | "wav" | "ogg" => EvidenceType::Audio,
            "mp4" | "mov" | "avi" | "mkv" => EvidenceType::Video,
            _ => EvidenceType::Other,
        }
    }

    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceType::Pdf => "pdf",
            EvidenceType::Image => "image",
            EvidenceType::Email => "email",
            EvidenceType::Document => "document",
            EvidenceType::Spreadsheet => "spreadsheet",
            EvidenceType::Text => "text",
            EvidenceType::Audio => "audio",
            EvidenceType::Video => "video",
            EvidenceType::Other => "other",
        }
    }
}

/// Where an evidence item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// The original file as received or created
    Original,
    /// A copy or export of an original
    Copy,
    /// A screenshot
    Screenshot,
    /// Notes or a transcription made by the user
    Transcription,
    /// Supplied by a third party (witness, agency)
    ThirdParty,
    /// Unknown origin
    Unknown,
}

impl Provenance {
    /// Get the provenance tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Original => "original",
            Provenance::Copy => "copy",
            Provenance::Screenshot => "screenshot",
            Provenance::Transcription => "transcription",
            Provenance::ThirdParty => "third_party",
            Provenance::Unknown => "unknown",
        }
    }

    /// Parse a provenance tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "original" => Some(Provenance::Original),
            "copy" => Some(Provenance::Copy),
            "screenshot" => Some(Provenance::Screenshot),
            "transcription" | "notes" => Some(Provenance::Transcription),
            "third_party" => Some(Provenance::ThirdParty),
            "unknown" => Some(Provenance::Unknown),
            _ => None,
        }
    }
}

impl std::str::FromStr for Provenance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid provenance: {}", s))
    }
}

/// An indexed piece of evidence
///
/// Immutable once created; the credibility score is clamped to [0, 1] at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceItem {
    id: EvidenceId,
    filename: String,
    evidence_type: EvidenceType,
    hash: String,
    size_bytes: u64,
    provenance: Provenance,
    date: Option<NaiveDate>,
    credibility: f64,
}

impl EvidenceItem {
    /// Create a new evidence item
    pub fn new(
        filename: impl Into<String>,
        evidence_type: EvidenceType,
        hash: impl Into<String>,
        size_bytes: u64,
        provenance: Provenance,
        date: Option<NaiveDate>,
        credibility: f64,
    ) -> Self {
        Self {
            id: EvidenceId::new(),
            filename: filename.into(),
            evidence_type,
            hash: hash.into(),
            size_bytes,
            provenance,
            date,
            credibility: clamp_credibility(credibility),
        }
    }

    /// Identifier
    pub fn id(&self) -> EvidenceId {
        self.id
    }

    /// Original filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// File format
    pub fn evidence_type(&self) -> EvidenceType {
        self.evidence_type
    }

    /// Hex-encoded SHA-256 of the content
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Content length in bytes
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Provenance tag
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Date the evidence relates to, if known
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Credibility score in [0, 1]
    pub fn credibility(&self) -> f64 {
        self.credibility
    }
}

/// Clamp a credibility score into [0, 1]; NaN becomes 0
pub fn clamp_credibility(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_filename() {
        assert_eq!(EvidenceType::from_filename("photo.JPG"), EvidenceType::Image);
        assert_eq!(EvidenceType::from_filename("notice.eml"), EvidenceType::Email);
        assert_eq!(EvidenceType::from_filename("ledger.csv"), EvidenceType::Spreadsheet);
        assert_eq!(EvidenceType::from_filename("archive.tar.gz"), EvidenceType::Other);
    }

    #[test]
    fn test_constructor_clamps() {
        let item = EvidenceItem::new("a.pdf", EvidenceType::Pdf, "00", 1, Provenance::Original, None, 1.7);
        assert_eq!(item.credibility(), 1.0);
        let item = EvidenceItem::new("a.pdf", EvidenceType::Pdf, "00", 1, Provenance::Original, None, -0.2);
        assert_eq!(item.credibility(), 0.0);
    }

    #[test]
    fn test_provenance_parse() {
        assert_eq!(Provenance::parse("third-party"), Some(Provenance::ThirdParty));
        assert_eq!(Provenance::parse("bogus"), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: clamped credibility always lands in [0, 1]
        #[test]
        fn test_clamp_in_range(score in proptest::num::f64::ANY) {
            let c = clamp_credibility(score);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        /// Property: in-range scores are unchanged
        #[test]
        fn test_clamp_identity(score in 0.0f64..=1.0) {
            prop_assert_eq!(clamp_credibility(score), score);
        }
    }
}

//! Domain models for Azure Document Intelligence analyze results
//!
//! These mirror the wire shape of the `analyzeResult` object returned by the
//! Document Intelligence REST API (camelCase field names). Everything here is
//! a read-only snapshot: the analyze result is deserialized once per remote
//! call and consumed by the report renderer without mutation.

use serde::{Deserialize, Serialize};

/// A contiguous range in the document's flat extracted-text content string.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSpan {
    pub offset: usize,
    pub length: usize,
}

/// A single recognized word with its location in the content string.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentWord {
    pub content: String,
    #[serde(default)]
    pub polygon: Option<Vec<f64>>,
    pub span: DocumentSpan,
    pub confidence: f64,
}

/// A recognized line of text.
///
/// A line normally occupies a single span, but the service may report several
/// disjoint spans (hyphenation across regions); association logic must accept
/// any of them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLine {
    pub content: String,
    #[serde(default)]
    pub polygon: Option<Vec<f64>>,
    pub spans: Vec<DocumentSpan>,
}

/// A detected checkbox/radio-style marking.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSelectionMark {
    pub state: String,
    #[serde(default)]
    pub polygon: Option<Vec<f64>>,
    #[serde(default)]
    pub span: Option<DocumentSpan>,
    pub confidence: f64,
}

/// One page of the analyzed document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    pub page_number: u32,
    #[serde(default)]
    pub angle: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub spans: Vec<DocumentSpan>,
    #[serde(default)]
    pub lines: Option<Vec<DocumentLine>>,
    #[serde(default)]
    pub words: Option<Vec<DocumentWord>>,
    #[serde(default)]
    pub selection_marks: Option<Vec<DocumentSelectionMark>>,
}

/// The page area a paragraph was read from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    pub page_number: u32,
    pub polygon: Vec<f64>,
}

/// A logical paragraph spanning one or more content ranges.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentParagraph {
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
    #[serde(default)]
    pub bounding_regions: Option<Vec<BoundingRegion>>,
    pub spans: Vec<DocumentSpan>,
}

/// A text style observation (handwriting, font) over a set of spans.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStyle {
    #[serde(default)]
    pub is_handwritten: Option<bool>,
    #[serde(default)]
    pub font_style: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    pub spans: Vec<DocumentSpan>,
}

/// A language detected over a set of spans.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLanguage {
    pub locale: String,
    #[serde(default)]
    pub spans: Vec<DocumentSpan>,
    pub confidence: f64,
}

/// The complete result of a `prebuilt-read` analyze operation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub pages: Vec<DocumentPage>,
    #[serde(default)]
    pub paragraphs: Option<Vec<DocumentParagraph>>,
    #[serde(default)]
    pub styles: Option<Vec<DocumentStyle>>,
    #[serde(default)]
    pub languages: Option<Vec<DocumentLanguage>>,
}

impl DocumentSpan {
    /// Slice `content` to this span's character range.
    ///
    /// Offsets are character offsets (matching the service's string indexing),
    /// not byte offsets, so this never splits a UTF-8 sequence. Out-of-range
    /// spans degrade to whatever prefix is available.
    pub fn slice<'a>(&self, content: &'a str) -> std::borrow::Cow<'a, str> {
        if content.is_ascii() {
            let start = self.offset.min(content.len());
            let end = (self.offset + self.length).min(content.len());
            return std::borrow::Cow::Borrowed(&content[start..end]);
        }
        std::borrow::Cow::Owned(
            content
                .chars()
                .skip(self.offset)
                .take(self.length)
                .collect(),
        )
    }
}

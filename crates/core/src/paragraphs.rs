//! Reading-order paragraph sorting
//!
//! The service reports paragraphs in detection order, which is not always
//! reading order. The report's second paragraph pass re-orders them by the
//! lowest content offset each paragraph touches.

use crate::analysis::DocumentParagraph;

/// Re-order paragraphs into approximate reading order.
///
/// Two explicit, sequential steps: each paragraph's own spans are first
/// sorted ascending by offset, then the paragraph list is stable-sorted by
/// the resulting first span's offset. Paragraphs with equal first offsets
/// keep their original relative order. Returns a reordered copy; the input
/// is untouched.
///
/// A paragraph without spans should not occur, but if one does it sorts to
/// the end rather than panicking.
pub fn order_paragraphs(paragraphs: &[DocumentParagraph]) -> Vec<DocumentParagraph> {
    let mut ordered: Vec<DocumentParagraph> = paragraphs
        .iter()
        .cloned()
        .map(|mut paragraph| {
            paragraph.spans.sort_by_key(|span| span.offset);
            paragraph
        })
        .collect();

    ordered.sort_by_key(|paragraph| {
        paragraph
            .spans
            .first()
            .map(|span| span.offset)
            .unwrap_or(usize::MAX)
    });

    ordered
}

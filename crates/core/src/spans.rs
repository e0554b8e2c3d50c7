//! Span containment and line/word association
//!
//! The analyze result reports a page's words and lines as parallel flat lists;
//! the only link between them is the span each occupies in the content string.
//! A word belongs to a line when the word's range is fully nested inside one
//! of the line's spans. Partial overlap is not membership.

use crate::analysis::{DocumentLine, DocumentPage, DocumentSpan, DocumentWord};

/// True iff the word's span is fully nested within at least one candidate span.
///
/// Nesting is boundary-inclusive: a word covering exactly one full candidate
/// span is contained, and a zero-length word is contained whenever its offset
/// falls inside a candidate range. An empty candidate list contains nothing.
pub fn in_spans(word: &DocumentWord, spans: &[DocumentSpan]) -> bool {
    spans.iter().any(|span| {
        word.span.offset >= span.offset
            && word.span.offset + word.span.length <= span.offset + span.length
    })
}

/// The subset of `page.words` belonging to `line`, in original page order.
///
/// Returns an empty vector when the page reports no words. Lines with
/// multiple disjoint spans (hyphenation) match words in any of their spans.
pub fn words_for_line<'a>(page: &'a DocumentPage, line: &DocumentLine) -> Vec<&'a DocumentWord> {
    match &page.words {
        Some(words) => words
            .iter()
            .filter(|word| in_spans(word, &line.spans))
            .collect(),
        None => Vec::new(),
    }
}

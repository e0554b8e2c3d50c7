//! The read-model result report
//!
//! Pure projection of an [`AnalyzeResult`] into the ordered text lines the CLI
//! prints. Section order is fixed: languages, styles, pages (lines with their
//! words, then selection marks), paragraphs in original order, paragraphs in
//! reading order. Every section is optional and skipped when its source
//! collection is absent or empty, so rendering cannot fail.
//!
//! The output is presentation text, not a stable wire format.

use crate::analysis::{AnalyzeResult, DocumentSpan, DocumentStyle};
use crate::paragraphs::order_paragraphs;
use crate::spans::words_for_line;

/// Render the full report for a `prebuilt-read` analyze result.
pub fn render_read_report(result: &AnalyzeResult) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("----Languages detected in the document----".to_string());
    if let Some(languages) = &result.languages {
        for language in languages {
            lines.push(format!(
                "Language code: '{}' with confidence {}",
                language.locale, language.confidence
            ));
        }
    }

    lines.push("----Styles detected in the document----".to_string());
    if let Some(styles) = &result.styles {
        for style in styles {
            render_style(&mut lines, style, &result.content);
        }
    }

    for page in &result.pages {
        lines.push(format!(
            "----Analyzing document from page #{}----",
            page.page_number
        ));
        lines.push(format!(
            "Page has width: {} and height: {}, measured with unit: {}",
            fmt_dimension(page.width),
            fmt_dimension(page.height),
            page.unit.as_deref().unwrap_or("unknown")
        ));

        if let Some(page_lines) = &page.lines {
            for (line_idx, line) in page_lines.iter().enumerate() {
                let words = words_for_line(page, line);
                lines.push(format!(
                    "...Line # {} has {} words and text '{}' within bounding polygon '{}'",
                    line_idx,
                    words.len(),
                    line.content,
                    fmt_polygon(line.polygon.as_deref())
                ));

                for word in words {
                    lines.push(format!(
                        "......Word '{}' has a confidence of {}",
                        word.content, word.confidence
                    ));
                }
            }
        }

        if let Some(selection_marks) = &page.selection_marks {
            for mark in selection_marks {
                lines.push(format!(
                    "...Selection mark is '{}' within bounding polygon '{}' and has a confidence of {}",
                    mark.state,
                    fmt_polygon(mark.polygon.as_deref()),
                    mark.confidence
                ));
            }
        }
    }

    if let Some(paragraphs) = &result.paragraphs {
        if !paragraphs.is_empty() {
            lines.push(format!(
                "----Detected #{} paragraphs in the document----",
                paragraphs.len()
            ));
            for paragraph in paragraphs {
                lines.push(format!(
                    "Found paragraph with role: '{}' within {:?} bounding region",
                    paragraph.role.as_deref().unwrap_or("none"),
                    paragraph.bounding_regions.as_deref().unwrap_or(&[])
                ));
                lines.push(format!("...with content: '{}'", paragraph.content));
            }

            lines.push("-----Print sorted paragraphs-----".to_string());
            for (idx, paragraph) in order_paragraphs(paragraphs).iter().enumerate() {
                if let Some(first) = paragraph.spans.first() {
                    lines.push(format!(
                        "...paragraph:{} with offset: {} and length: {}",
                        idx, first.offset, first.length
                    ));
                }
            }
        }
    }

    lines.push("----------------------------------------".to_string());

    lines
}

/// A style may emit a handwriting line, a font-style line, or both.
fn render_style(lines: &mut Vec<String>, style: &DocumentStyle, content: &str) {
    if style.is_handwritten == Some(true) {
        lines.push("Found the following handwritten content:".to_string());
        lines.push(joined_slices(&style.spans, content));
    }
    if let Some(font_style) = style.font_style.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!(
            "The document contains '{font_style}' font style, applied to the following text:"
        ));
        lines.push(joined_slices(&style.spans, content));
    }
}

fn joined_slices(spans: &[DocumentSpan], content: &str) -> String {
    spans
        .iter()
        .map(|span| span.slice(content).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

fn fmt_dimension(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "unknown".to_string(),
    }
}

fn fmt_polygon(polygon: Option<&[f64]>) -> String {
    format!("{:?}", polygon.unwrap_or(&[]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        BoundingRegion, DocumentLanguage, DocumentLine, DocumentPage, DocumentParagraph,
        DocumentSelectionMark, DocumentSpan, DocumentWord,
    };

    fn span(offset: usize, length: usize) -> DocumentSpan {
        DocumentSpan { offset, length }
    }

    fn word(content: &str, offset: usize, length: usize, confidence: f64) -> DocumentWord {
        DocumentWord {
            content: content.to_string(),
            polygon: None,
            span: span(offset, length),
            confidence,
        }
    }

    fn empty_result() -> AnalyzeResult {
        AnalyzeResult {
            api_version: None,
            model_id: None,
            content: String::new(),
            pages: vec![],
            paragraphs: None,
            styles: None,
            languages: None,
        }
    }

    fn full_result() -> AnalyzeResult {
        AnalyzeResult {
            api_version: Some("2024-11-30".to_string()),
            model_id: Some("prebuilt-read".to_string()),
            content: "The lake is blue".to_string(),
            pages: vec![DocumentPage {
                page_number: 1,
                angle: None,
                width: Some(8.5),
                height: Some(11.0),
                unit: Some("inch".to_string()),
                spans: vec![span(0, 16)],
                lines: vec![DocumentLine {
                    content: "The lake".to_string(),
                    polygon: Some(vec![0.0, 0.0, 4.0, 1.0]),
                    spans: vec![span(0, 8)],
                }]
                .into(),
                words: vec![
                    word("The", 0, 3, 0.998),
                    word("lake", 4, 4, 0.991),
                    word("is", 9, 2, 0.98),
                ]
                .into(),
                selection_marks: vec![DocumentSelectionMark {
                    state: "selected".to_string(),
                    polygon: Some(vec![1.0, 1.0]),
                    span: None,
                    confidence: 0.9,
                }]
                .into(),
            }],
            paragraphs: vec![
                DocumentParagraph {
                    role: Some("title".to_string()),
                    content: "is blue".to_string(),
                    bounding_regions: Some(vec![BoundingRegion {
                        page_number: 1,
                        polygon: vec![0.0, 0.0],
                    }]),
                    spans: vec![span(9, 7)],
                },
                DocumentParagraph {
                    role: None,
                    content: "The lake".to_string(),
                    bounding_regions: None,
                    spans: vec![span(0, 8)],
                },
            ]
            .into(),
            styles: vec![DocumentStyle {
                is_handwritten: Some(true),
                font_style: Some("italic".to_string()),
                confidence: Some(0.8),
                spans: vec![span(0, 3), span(4, 4)],
            }]
            .into(),
            languages: vec![DocumentLanguage {
                locale: "en".to_string(),
                spans: vec![span(0, 16)],
                confidence: 0.95,
            }]
            .into(),
        }
    }

    #[test]
    fn test_empty_result_emits_only_headers() {
        let lines = render_read_report(&empty_result());

        assert_eq!(
            lines,
            vec![
                "----Languages detected in the document----",
                "----Styles detected in the document----",
                "----------------------------------------",
            ]
        );
    }

    #[test]
    fn test_language_section() {
        let lines = render_read_report(&full_result());
        assert_eq!(lines[1], "Language code: 'en' with confidence 0.95");
    }

    #[test]
    fn test_style_section_emits_both_lines_for_one_style() {
        let lines = render_read_report(&full_result());

        let handwritten_at = lines
            .iter()
            .position(|l| l == "Found the following handwritten content:")
            .unwrap();
        assert_eq!(lines[handwritten_at + 1], "The,lake");

        let font_at = lines
            .iter()
            .position(|l| {
                l == "The document contains 'italic' font style, applied to the following text:"
            })
            .unwrap();
        assert_eq!(lines[font_at + 1], "The,lake");
        assert!(font_at > handwritten_at);
    }

    #[test]
    fn test_page_section() {
        let lines = render_read_report(&full_result());

        assert!(lines.contains(&"----Analyzing document from page #1----".to_string()));
        assert!(lines.contains(
            &"Page has width: 8.5 and height: 11, measured with unit: inch".to_string()
        ));
        // Only the two words nested in the line's span count.
        assert!(lines.contains(
            &"...Line # 0 has 2 words and text 'The lake' within bounding polygon '[0.0, 0.0, 4.0, 1.0]'"
                .to_string()
        ));
        assert!(lines.contains(&"......Word 'The' has a confidence of 0.998".to_string()));
        assert!(lines.contains(&"......Word 'lake' has a confidence of 0.991".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Word 'is'")));
        assert!(lines.contains(
            &"...Selection mark is 'selected' within bounding polygon '[1.0, 1.0]' and has a confidence of 0.9"
                .to_string()
        ));
    }

    #[test]
    fn test_paragraph_sections() {
        let lines = render_read_report(&full_result());

        assert!(lines.contains(&"----Detected #2 paragraphs in the document----".to_string()));

        // First pass keeps original order: the offset-9 title paragraph first.
        let first_pass_at = lines
            .iter()
            .position(|l| l.starts_with("Found paragraph with role: 'title'"))
            .unwrap();
        assert_eq!(lines[first_pass_at + 1], "...with content: 'is blue'");
        assert_eq!(
            lines[first_pass_at + 2],
            "Found paragraph with role: 'none' within [] bounding region"
        );

        // Second pass is re-ordered by first-span offset.
        let sorted_at = lines
            .iter()
            .position(|l| l == "-----Print sorted paragraphs-----")
            .unwrap();
        assert_eq!(
            lines[sorted_at + 1],
            "...paragraph:0 with offset: 0 and length: 8"
        );
        assert_eq!(
            lines[sorted_at + 2],
            "...paragraph:1 with offset: 9 and length: 7"
        );
    }

    #[test]
    fn test_report_ends_with_footer() {
        let lines = render_read_report(&full_result());
        assert_eq!(
            lines.last().unwrap(),
            "----------------------------------------"
        );
    }

    #[test]
    fn test_empty_paragraph_list_skips_both_passes() {
        let mut result = empty_result();
        result.paragraphs = Some(vec![]);

        let lines = render_read_report(&result);
        assert!(!lines.iter().any(|l| l.contains("paragraphs")));
    }

    #[test]
    fn test_rendering_does_not_mutate_the_result() {
        let result = full_result();
        let before = result.clone();

        render_read_report(&result);

        assert_eq!(result, before);
    }
}

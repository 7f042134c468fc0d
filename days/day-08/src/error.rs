use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A junction box list that could not be read.
///
/// Carries the whole input so the `fancy` report handler can point at the
/// offending line.
#[derive(Debug, Error, Diagnostic)]
#[error("malformed junction box list")]
#[diagnostic(
    code(aoc2025_day_8::parse),
    help("every line must hold exactly one `x,y,z` triple of integers within ±500000000")
)]
pub struct ParseError {
    #[source_code]
    src: NamedSource<String>,

    #[label("{reason}")]
    span: SourceSpan,

    reason: String,
}

impl ParseError {
    pub fn new(input: &str, start: usize, end: usize, reason: impl Into<String>) -> Self {
        let start = start.min(input.len());
        let len = end.min(input.len()).saturating_sub(start);
        Self {
            src: NamedSource::new("input", input.to_string()),
            span: (start, len).into(),
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

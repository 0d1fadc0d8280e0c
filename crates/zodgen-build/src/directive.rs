//! Field documentation directives.
//!
//! A documentation line that starts (after trimming) with [`REPLACE_MARKER`]
//! supplies a full replacement expression; one that starts with
//! [`APPEND_MARKER`] supplies a suffix chained onto the expression in effect.
//! Every other line is plain documentation. Payload text is opaque.

/// Marker of a replacement directive, e.g. `@z.string().email()`.
pub const REPLACE_MARKER: &str = "@z.";

/// Marker of an append directive, e.g. `@z&.min(1)`.
pub const APPEND_MARKER: &str = "@z&.";

// Both markers keep their trailing `z.` / `.` in the payload so replacements
// are complete expressions and appends are method-chain suffixes.
const REPLACE_SIGIL_LEN: usize = "@".len();
const APPEND_SIGIL_LEN: usize = "@z&".len();

///
/// DocLine
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocLine<'a> {
    Plain(&'a str),
    Directive(Directive<'a>),
}

impl<'a> DocLine<'a> {
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();

        if trimmed.starts_with(REPLACE_MARKER) {
            Self::Directive(Directive::Replace(&trimmed[REPLACE_SIGIL_LEN..]))
        } else if trimmed.starts_with(APPEND_MARKER) {
            Self::Directive(Directive::Append(&trimmed[APPEND_SIGIL_LEN..]))
        } else {
            Self::Plain(line)
        }
    }
}

///
/// Directive
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Directive<'a> {
    Replace(&'a str),
    Append(&'a str),
}

///
/// FieldDocs
///
/// Documentation split into the human-readable lines and the directives, both
/// in document order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldDocs<'a> {
    pub lines: Vec<&'a str>,
    pub directives: Vec<Directive<'a>>,
}

impl<'a> FieldDocs<'a> {
    #[must_use]
    pub fn parse(documentation: Option<&'a str>) -> Self {
        let mut docs = Self::default();

        for line in documentation.unwrap_or_default().lines() {
            match DocLine::classify(line) {
                DocLine::Plain(text) => docs.lines.push(text),
                DocLine::Directive(directive) => docs.directives.push(directive),
            }
        }

        docs
    }

    /// The first replacement in document order; later ones are ignored.
    #[must_use]
    pub fn replacement(&self) -> Option<&'a str> {
        self.directives.iter().find_map(|d| match d {
            Directive::Replace(payload) => Some(*payload),
            Directive::Append(_) => None,
        })
    }

    pub fn appends(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.directives.iter().filter_map(|d| match d {
            Directive::Append(payload) => Some(*payload),
            Directive::Replace(_) => None,
        })
    }

    #[must_use]
    pub fn replace_count(&self) -> usize {
        self.directives
            .iter()
            .filter(|d| matches!(d, Directive::Replace(_)))
            .count()
    }
}

///
/// TESTS
///

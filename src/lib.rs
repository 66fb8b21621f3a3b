#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

mod parser;
mod section;
mod util;

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

pub use crate::section::Section;
pub use crate::util::{Extract, ExtractError, extract};

use crate::parser::Parser;

/// Values in this section are substituted into every other section during
/// interpolation, mirroring Python's `configparser` convention.
///
/// <https://docs.python.org/3/library/configparser.html>
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// An in-memory INI document: sections keyed by name, plus the raw lines
/// that failed to parse.
///
/// The store is cumulative. Each `parse` call merges into what is already
/// there (later values overwrite earlier ones for the same section and
/// key), and `errors` only ever grows until [`Ini::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ini {
    sections: BTreeMap<String, Section>,
    errors: Vec<String>,
}

impl Ini {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text line by line.
    ///
    /// Blank lines and `;` comments are skipped. `[name]` switches the
    /// current section; an unterminated header is dropped and leaves the
    /// current section unchanged. A line with `=` assigns into the current
    /// section (the unnamed, empty-string section before any header). Any
    /// other non-empty line is recorded in [`Ini::errors`] rather than
    /// failing the parse.
    pub fn parse(&mut self, text: &str) {
        let mut parser = Parser::new();

        for line in text.lines() {
            parser.feed(line, &mut self.sections, &mut self.errors);
        }
    }

    /// Like [`Ini::parse`], reading lines from a buffered reader.
    ///
    /// A read failure is treated the same as end of input: parsing stops
    /// and everything read so far is kept. A final line without a trailing
    /// newline is still processed.
    pub fn parse_reader<R: BufRead>(&mut self, mut reader: R) {
        let mut parser = Parser::new();
        let mut line = String::with_capacity(256);

        loop {
            line.clear();

            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => parser.feed(&line, &mut self.sections, &mut self.errors),
            }
        }
    }

    /// Write the document as `[section]` headers followed by `key=value`
    /// lines, sections and keys in lexicographic order. Comments, blank
    /// lines, and the original ordering of the parsed input are not
    /// reproduced.
    pub fn generate<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (name, section) in &self.sections {
            writeln!(writer, "[{name}]")?;

            for (key, value) in section {
                writeln!(writer, "{key}={value}")?;
            }
        }

        Ok(())
    }

    /// Substitute `%(key)` tokens in every value, in a single pass.
    ///
    /// The [`DEFAULT_SECTION`] is resolved against itself first; every
    /// other section is then resolved against itself and against the
    /// already-resolved defaults. Replacement is literal text: a token
    /// introduced by a substitution is not resolved again, and tokens with
    /// no matching key are left in place.
    pub fn interpolate(&mut self) {
        if let Some(default) = self.sections.get_mut(DEFAULT_SECTION) {
            default.interpolate_self();
        }

        let default_pairs = self.sections.get(DEFAULT_SECTION).map(Section::pairs);

        for (name, section) in &mut self.sections {
            if name == DEFAULT_SECTION {
                continue;
            }

            section.interpolate_self();

            if let Some(pairs) = &default_pairs {
                section.interpolate_from(pairs);
            }
        }
    }

    /// Drop all sections and all recorded error lines.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.errors.clear();
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Fetch a section for mutation, creating it if absent.
    pub fn section_mut(&mut self, name: impl Into<String>) -> &mut Section {
        self.sections.entry(name.into()).or_default()
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.remove(name)
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    /// Raw lines that were neither empty, comments, headers, nor
    /// assignments, in the order they were seen. Never deduplicated.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.errors.is_empty()
    }
}

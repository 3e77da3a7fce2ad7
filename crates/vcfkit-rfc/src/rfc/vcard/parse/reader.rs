//! Record reader.
//!
//! Reads bracketed `BEGIN:VCARD` ... `END:VCARD` records from a buffered
//! stream, one logical property at a time.

use std::io::BufRead;

use vcfkit_core::config::{ReaderConfig, Settings};
use vcfkit_core::constants::{BEGIN_VCARD, DEFAULT_MAX_NESTING_DEPTH};

use super::error::{ParseError, ParseErrorKind, ReadResult};
use super::line_source::LineSource;
use super::unfold::read_property;
use crate::error::RfcResult;
use crate::rfc::vcard::core::{LineSpan, VCard, VCardProperty, VCardVersion, names};

/// Lowercased value of the bracketing `BEGIN`/`END` properties.
const VCARD_VALUE: &str = "vcard";

/// Options controlling how records are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Revision assumed until a record declares its `VERSION`.
    pub fallback_version: VCardVersion,
    /// Maximum depth of legacy `AGENT` records nested inside a record.
    pub max_nesting_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            fallback_version: VCardVersion::V21,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl From<&ReaderConfig> for ReaderOptions {
    fn from(config: &ReaderConfig) -> Self {
        Self {
            fallback_version: VCardVersion::parse(&config.fallback_version),
            max_nesting_depth: config.max_nesting_depth,
        }
    }
}

/// Streaming vCard reader.
///
/// Each call to [`VCardReader::read_vcard`] consumes exactly one record.
/// As an iterator it yields records until the stream ends or the first
/// error, after which it is exhausted.
#[derive(Debug)]
pub struct VCardReader<R> {
    source: LineSource<R>,
    options: ReaderOptions,
    failed: bool,
}

impl<R: BufRead> VCardReader<R> {
    /// Creates a reader with default options.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ReaderOptions::default())
    }

    #[must_use]
    pub fn with_options(reader: R, options: ReaderOptions) -> Self {
        Self {
            source: LineSource::new(reader),
            options,
            failed: false,
        }
    }

    /// Creates a reader configured from loaded settings.
    ///
    /// ## Errors
    /// Returns `RfcError::CoreError` if the settings fail validation.
    pub fn from_settings(reader: R, settings: &Settings) -> RfcResult<Self> {
        settings.validate()?;
        Ok(Self::with_options(reader, ReaderOptions::from(&settings.reader)))
    }

    /// Reads the next record, or returns `None` at end of stream.
    ///
    /// ## Errors
    /// Returns `UnexpectedProperty` if the record does not open with
    /// `BEGIN:VCARD`, `IncompleteRecord` if the stream ends inside it,
    /// `NestingTooDeep` for over-deep legacy `AGENT` nesting, any property
    /// level parse error, and I/O errors from the stream.
    #[tracing::instrument(skip(self), fields(line = self.source.line_number()))]
    pub fn read_vcard(&mut self) -> ReadResult<Option<VCard>> {
        let result = self.read_nested(0);

        if let Err(err) = &result {
            tracing::warn!(error = %err, "Failed to read vCard");
        }

        result
    }

    /// Number of physical lines consumed so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.source.line_number()
    }

    /// Returns the wrapped reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    /// Reads one record whose opening line has not been consumed yet.
    fn read_nested(&mut self, depth: usize) -> ReadResult<Option<VCard>> {
        let Some(begin) = read_property(&mut self.source, &self.options.fallback_version)? else {
            return Ok(None);
        };

        if begin.name != names::BEGIN || begin.value != VCARD_VALUE {
            return Err(ParseError::unexpected(
                span_of(&begin, self.source.line_number()).start,
                BEGIN_VCARD,
                &describe(&begin),
            )
            .into());
        }

        let opened = span_of(&begin, self.source.line_number());
        self.read_body(opened, depth).map(Some)
    }

    /// Reads properties up to and including the closing line.
    fn read_body(&mut self, opened: LineSpan, depth: usize) -> ReadResult<VCard> {
        tracing::debug!(line = opened.start, depth, "Opened vCard");

        let mut card = VCard::new();
        let mut version = self.options.fallback_version.clone();

        loop {
            let Some(prop) = read_property(&mut self.source, &version)? else {
                return Err(
                    ParseError::incomplete_record(self.source.line_number(), opened.start).into(),
                );
            };

            if prop.name == names::END || prop.value == VCARD_VALUE {
                let closed = span_of(&prop, self.source.line_number());
                card.span = Some(opened.extend(closed));

                tracing::debug!(
                    start = opened.start,
                    end = closed.end,
                    properties = card.len(),
                    "Closed vCard"
                );
                return Ok(card);
            }

            if prop.name == names::AGENT && version.is_legacy() {
                self.skip_agent(&prop, opened, depth + 1)?;
                continue;
            }

            if prop.name == names::VERSION {
                version = VCardVersion::parse(&prop.value);
            }

            card.add_property(prop);
        }
    }

    /// Reads and discards the record embedded in a legacy `AGENT` property.
    ///
    /// The nested record either follows on the next lines or opens inline,
    /// as in `AGENT:BEGIN:VCARD`.
    fn skip_agent(
        &mut self,
        agent: &VCardProperty,
        outer: LineSpan,
        depth: usize,
    ) -> ReadResult<()> {
        let line = span_of(agent, self.source.line_number()).start;

        if depth > self.options.max_nesting_depth {
            return Err(ParseError::nesting_too_deep(line, self.options.max_nesting_depth).into());
        }

        let nested = if agent.value.trim().eq_ignore_ascii_case(BEGIN_VCARD) {
            self.read_body(LineSpan::line(line), depth)?
        } else {
            self.read_nested(depth)?.ok_or_else(|| {
                ParseError::incomplete_record(self.source.line_number(), outer.start)
            })?
        };

        tracing::debug!(
            line,
            depth,
            properties = nested.len(),
            "Skipped nested AGENT vCard"
        );

        Ok(())
    }
}

impl<R: BufRead> Iterator for VCardReader<R> {
    type Item = ReadResult<VCard>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.read_vcard() {
            Ok(card) => card.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Parses every vCard in a string.
///
/// ## Errors
/// Returns the first error encountered; records read before it are dropped.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ReadResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard stream");

    let cards = VCardReader::new(input.as_bytes()).collect::<ReadResult<Vec<_>>>()?;

    tracing::debug!(count = cards.len(), "vCard stream parsed successfully");

    Ok(cards)
}

/// Parses the first vCard in a string.
///
/// Anything after the first record is not read.
///
/// ## Errors
/// Returns `NoRecord` if the input holds no vCard, or any error from reading
/// the first record.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ReadResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let mut reader = VCardReader::new(input.as_bytes());

    match reader.read_vcard()? {
        Some(card) => Ok(card),
        None => {
            tracing::warn!("No vCard in input");
            Err(ParseError::new(
                ParseErrorKind::NoRecord,
                reader.line_number().max(1),
                "input contains no BEGIN:VCARD",
            )
            .into())
        }
    }
}

/// Span of a freshly read property.
fn span_of(prop: &VCardProperty, current_line: usize) -> LineSpan {
    prop.span.unwrap_or_else(|| LineSpan::line(current_line))
}

/// Renders a property as `NAME:value` for error messages.
fn describe(prop: &VCardProperty) -> String {
    format!("{}:{}", prop.name.to_uppercase(), prop.value)
}

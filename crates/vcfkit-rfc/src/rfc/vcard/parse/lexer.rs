//! Content line tokenizer.
//!
//! Splits one unfolded line into property name, parameters, and raw value.

use super::error::{ParseError, ParseResult};
use crate::rfc::vcard::core::{VCardProperty, names, params};

/// Parses a single content line into a property.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// The group prefix is discarded. Names, parameter names, and parameter
/// values are lowercased; a parameter without `=` is a `type` value. The
/// value is kept raw, except that `begin`/`end` values are lowercased.
///
/// ## Errors
/// Returns a `MalformedProperty` error if the line has no `:`/`;`
/// delimiter, no value separator after its parameters, or an empty name.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<VCardProperty> {
    let delimiter_pos = line
        .find([';', ':'])
        .ok_or_else(|| ParseError::malformed(line_num, "missing ':' or ';' delimiter"))?;

    let name = line[..delimiter_pos]
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    if name.is_empty() {
        return Err(ParseError::malformed(line_num, "empty property name"));
    }

    let mut prop = VCardProperty::new(name, "");

    let value_start = if line[delimiter_pos..].starts_with(';') {
        let params_start = delimiter_pos + 1;
        let colon_pos = find_value_separator(&line[params_start..])
            .map(|pos| pos + params_start)
            .ok_or_else(|| ParseError::malformed(line_num, "missing ':' after parameters"))?;

        parse_parameters(&line[params_start..colon_pos], &mut prop);
        colon_pos + 1
    } else {
        delimiter_pos + 1
    };

    let value = &line[value_start..];
    prop.value = if prop.name == names::BEGIN || prop.name == names::END {
        value.to_lowercase()
    } else {
        value.to_string()
    };

    Ok(prop)
}

/// Finds the first unescaped colon, which separates parameters from the value.
fn find_value_separator(s: &str) -> Option<usize> {
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            ':' => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses the `;`-separated parameter segment into the property.
fn parse_parameters(segment: &str, prop: &mut VCardProperty) {
    for fragment in segment.split(';').filter(|f| !f.is_empty()) {
        match fragment.split_once('=') {
            Some((name, value)) => prop.add_param(name.trim(), value.trim()),
            None => prop.add_param(params::TYPE, fragment.trim()),
        }
    }
}

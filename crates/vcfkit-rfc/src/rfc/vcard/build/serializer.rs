//! vCard serialization.
//!
//! Output is canonical: property names follow a fixed priority order,
//! parameters and their values are sorted, and names and parameters are
//! uppercased. Values are written as stored and never folded here.

use std::io;

use vcfkit_core::constants::{BEGIN_VCARD, END_VCARD};

use crate::rfc::vcard::core::{VCard, VCardProperty, names};

/// Returns the output rank of a property name (lower = earlier).
///
/// Extension and other unlisted names rank after every well-known name but
/// before `PRODID` and `REV`.
#[must_use]
pub fn property_priority(name: &str) -> u8 {
    match name.to_ascii_lowercase().as_str() {
        names::VERSION => 0,
        names::FN => 1,
        names::N => 2,
        names::SORT_STRING => 3,
        names::NICKNAME => 4,
        names::ADR => 5,
        names::LABEL => 6,
        names::TEL => 7,
        names::EMAIL => 8,
        names::MAILER => 9,
        names::ORG => 10,
        names::CATEGORIES => 11,
        names::CLASS => 12,
        names::BDAY => 13,
        names::TITLE => 14,
        names::ROLE => 15,
        names::NOTE => 16,
        names::UID => 17,
        names::URL => 18,
        names::TZ => 19,
        names::GEO => 20,
        names::PHOTO => 21,
        names::LOGO => 22,
        names::SOUND => 23,
        names::KEY => 24,
        names::PRODID => 98,
        names::REV => 99,
        _ => 90,
    }
}

/// Writes one vCard to a sink.
///
/// ## Errors
/// Returns the sink's I/O error unchanged.
pub fn write_vcard<W: io::Write>(writer: &mut W, card: &VCard) -> io::Result<()> {
    writer.write_all(render_vcard(card).as_bytes())
}

/// Writes vCards to a sink, one after another.
///
/// ## Errors
/// Returns the first I/O error of the sink.
pub fn write_all<W: io::Write>(writer: &mut W, cards: &[VCard]) -> io::Result<()> {
    for card in cards {
        write_vcard(writer, card)?;
    }
    Ok(())
}

/// Serializes vCards to a string.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();
    for card in cards {
        render_vcard_into(&mut output, card);
    }
    output
}

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    render_vcard(card)
}

fn render_vcard(card: &VCard) -> String {
    let mut output = String::new();
    render_vcard_into(&mut output, card);
    output
}

fn render_vcard_into(output: &mut String, card: &VCard) {
    output.push_str(BEGIN_VCARD);
    output.push('\n');

    let mut groups: Vec<_> = card.groups().collect();
    groups.sort_by_key(|(name, _)| property_priority(name));

    for prop in groups.into_iter().flat_map(|(_, props)| props) {
        render_property(output, prop);
    }

    output.push_str(END_VCARD);
    output.push('\n');
}

fn render_property(output: &mut String, prop: &VCardProperty) {
    output.push_str(&prop.name.to_uppercase());

    let mut params: Vec<_> = prop.params.iter().collect();
    params.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (name, values) in params {
        let name = name.to_uppercase();
        let mut values: Vec<_> = values.iter().collect();
        values.sort();

        for value in values {
            output.push(';');
            output.push_str(&name);
            output.push('=');
            output.push_str(&value.to_uppercase());
        }
    }

    output.push(':');
    output.push_str(&prop.value);
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that rejects every write.
    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn serialize_minimal() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::new("fn", "John Smith"));

        assert_eq!(
            serialize_single(&card),
            "BEGIN:VCARD\nFN:John Smith\nEND:VCARD\n"
        );
    }

    #[test]
    fn names_follow_priority_order() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::new("rev", "20240101T000000Z"));
        card.add_property(VCardProperty::new("x-custom", "1"));
        card.add_property(VCardProperty::new("prodid", "-//vcfkit//EN"));
        card.add_property(VCardProperty::new("tel", "555"));
        card.add_property(VCardProperty::new("fn", "Jane"));
        card.add_property(VCardProperty::new("version", "3.0"));

        let output = serialize_single(&card);
        let names: Vec<&str> = output
            .lines()
            .map(|line| line.split([':', ';']).next().unwrap_or_default())
            .collect();

        assert_eq!(
            names,
            vec!["BEGIN", "VERSION", "FN", "TEL", "X-CUSTOM", "PRODID", "REV", "END"]
        );
    }

    #[test]
    fn unlisted_names_keep_first_seen_order() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::new("x-b", "1"));
        card.add_property(VCardProperty::new("x-a", "2"));
        card.add_property(VCardProperty::new("x-b", "3"));

        assert_eq!(
            serialize_single(&card),
            "BEGIN:VCARD\nX-B:1\nX-B:3\nX-A:2\nEND:VCARD\n"
        );
    }

    #[test]
    fn parameters_sorted_and_uppercased() {
        let mut card = VCard::new();
        card.add_property(
            VCardProperty::new("tel", "+1 555")
                .with_param("type", "voice")
                .with_param("type", "home")
                .with_param("pref", "1"),
        );

        assert_eq!(
            serialize_single(&card),
            "BEGIN:VCARD\nTEL;PREF=1;TYPE=HOME;TYPE=VOICE:+1 555\nEND:VCARD\n"
        );
    }

    #[test]
    fn value_is_written_raw() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::new("note", r"a\, b\nc"));
        card.add_property(VCardProperty::new("n", "Doe;John;;;"));

        let output = serialize_single(&card);
        assert!(output.contains("\nNOTE:a\\, b\\nc\n"));
        assert!(output.contains("\nN:Doe;John;;;\n"));
    }

    #[test]
    fn priority_table() {
        assert_eq!(property_priority("version"), 0);
        assert_eq!(property_priority("Sort-String"), 3);
        assert_eq!(property_priority("EMAIL"), 8);
        assert_eq!(property_priority("key"), 24);
        assert_eq!(property_priority("agent"), 90);
        assert_eq!(property_priority("x-anything"), 90);
        assert_eq!(property_priority("prodid"), 98);
        assert_eq!(property_priority("rev"), 99);
    }

    #[test]
    fn serialize_many_concatenates() {
        let mut a = VCard::new();
        a.add_property(VCardProperty::new("fn", "A"));
        let mut b = VCard::new();
        b.add_property(VCardProperty::new("fn", "B"));

        let cards = [a, b];
        let mut buf = Vec::new();
        write_all(&mut buf, &cards).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), serialize(&cards));
        assert_eq!(serialize(&cards).matches("BEGIN:VCARD").count(), 2);
    }

    #[test]
    fn empty_record() {
        assert_eq!(serialize_single(&VCard::new()), "BEGIN:VCARD\nEND:VCARD\n");
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn sink_errors_propagate() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::new("fn", "x"));

        let err = write_vcard(&mut FailingWriter, &card).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}

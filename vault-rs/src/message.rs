//! Message extraction
//!
//! Turns a raw mbox message into a decoded subject, a UTC timestamp and a
//! plain-text body. Header decoding (RFC 2047 encoded-words) and charset
//! handling are delegated to `mail-parser`; whatever it cannot make sense of
//! degrades to a lossy UTF-8 decode so a single bad message never aborts a
//! run.

use chrono::{DateTime, Utc};
use mail_parser::{Message, MessageParser};

/// A decoded message ready for filtering and chunking
#[derive(Debug)]
pub struct ExtractedMessage {
    pub subject: String,
    /// None when the message carries no parseable Date header
    pub date: Option<DateTime<Utc>>,
    pub body: String,
}

/// Extract subject, date and body text from a raw message
pub fn extract(raw: &[u8]) -> ExtractedMessage {
    match MessageParser::default().parse(raw) {
        Some(parsed) => ExtractedMessage {
            subject: parsed.subject().unwrap_or_default().to_string(),
            date: parsed
                .date()
                .and_then(|d| DateTime::from_timestamp(d.to_timestamp(), 0)),
            body: extract_body(&parsed),
        },
        // Unparseable message: no usable date, keep whatever text survives
        None => ExtractedMessage {
            subject: String::new(),
            date: None,
            body: String::from_utf8_lossy(raw).into_owned(),
        },
    }
}

/// Concatenate every text/plain part; fall back to stripped HTML
fn extract_body(parsed: &Message) -> String {
    let mut text = String::new();
    let mut pos = 0;
    while let Some(part) = parsed.body_text(pos) {
        text.push_str(&part);
        pos += 1;
    }
    if !text.is_empty() {
        return text;
    }

    if let Some(html) = parsed.body_html(0) {
        return strip_html(&html);
    }

    String::new()
}

/// Strip HTML tags from content, keeping only visible text
pub fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    // Normalize whitespace
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_extract_plain_text() {
        let raw = b"From: a@example.com\r\n\
Date: Tue, 01 Jul 2025 10:00:00 +0000\r\n\
Subject: Quarterly report\r\n\
Content-Type: text/plain\r\n\
\r\n\
The numbers look good.\r\n";

        let message = extract(raw);
        assert_eq!(message.subject, "Quarterly report");
        assert_eq!(
            message.date,
            Some(Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap())
        );
        assert!(message.body.contains("The numbers look good."));
    }

    #[test]
    fn test_extract_date_with_offset_normalized_to_utc() {
        let raw = b"From: a@example.com\r\n\
Date: Tue, 01 Jul 2025 12:00:00 +0200\r\n\
Subject: Offset\r\n\
\r\n\
Body\r\n";

        let message = extract(raw);
        assert_eq!(
            message.date,
            Some(Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_extract_missing_date() {
        let raw = b"From: a@example.com\r\n\
Subject: No date here\r\n\
\r\n\
Body\r\n";

        let message = extract(raw);
        assert!(message.date.is_none());
    }

    #[test]
    fn test_extract_encoded_subject() {
        let raw = b"From: a@example.com\r\n\
Date: Tue, 01 Jul 2025 10:00:00 +0000\r\n\
Subject: =?utf-8?q?Caf=C3=A9?=\r\n\
\r\n\
Body\r\n";

        let message = extract(raw);
        assert_eq!(message.subject, "Caf\u{e9}");
    }

    #[test]
    fn test_extract_concatenates_text_parts() {
        let raw = b"From: a@example.com\r\n\
Date: Tue, 01 Jul 2025 10:00:00 +0000\r\n\
Subject: Multipart\r\n\
Content-Type: multipart/mixed; boundary=\"b1\"\r\n\
\r\n\
--b1\r\n\
Content-Type: text/plain\r\n\
\r\n\
Part one.\r\n\
--b1\r\n\
Content-Type: text/plain\r\n\
\r\n\
Part two.\r\n\
--b1--\r\n";

        let message = extract(raw);
        assert!(message.body.contains("Part one."));
        assert!(message.body.contains("Part two."));
    }

    #[test]
    fn test_extract_html_only_body_is_stripped() {
        let raw = b"From: a@example.com\r\n\
Date: Tue, 01 Jul 2025 10:00:00 +0000\r\n\
Subject: Html\r\n\
Content-Type: text/html\r\n\
\r\n\
<html><body><p>Visible <b>text</b> only.</p></body></html>\r\n";

        let message = extract(raw);
        assert!(message.body.contains("Visible"));
        assert!(message.body.contains("text"));
        assert!(!message.body.contains('<'));
    }

    #[test]
    fn test_strip_html_basic() {
        assert_eq!(strip_html("<p>Hello</p>"), "Hello");
        assert_eq!(
            strip_html("<div><b>Bold</b> and <i>italic</i></div>"),
            "Bold and italic"
        );
        assert_eq!(strip_html("No HTML here"), "No HTML here");
        assert_eq!(strip_html(""), "");
    }
}

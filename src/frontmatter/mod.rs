//! Entry header (frontmatter) codec.
//!
//! Every journal entry begins with a YAML header framed by `---` fence lines,
//! followed by the free-form body:
//!
//! ```text
//! ---
//! tags:
//! - work
//! - reading
//! date: Wed, 1 Aug 2018 10:00:00 +0000
//! ---
//! Free-form prose...
//! ```
//!
//! `decode` and `encode` are pure transformations with a round-trip guarantee:
//! decoding a canonical entry and re-encoding it reproduces the input bytes,
//! so a rewrite that only touches tags never disturbs the body.

use crate::constants::FRONTMATTER_FENCE;
use crate::errors::ParseError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The structured header of a journal entry.
///
/// Tags are kept sorted and duplicate-free when written by this application,
/// but `decode` accepts any order — hand-edited files are normalized on the
/// next rewrite, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Tags declared by the entry. Case-sensitive; serialized sorted.
    pub tags: Vec<String>,
    /// Timestamp of the entry, when one is recorded.
    pub date: Option<DateTime<FixedOffset>>,
}

/// Wire form of the header block. The field order here is the serialization
/// order: tags first, then date.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}

/// Splits raw entry text into its decoded header and its body.
///
/// The input must begin with a fence line; the header block runs until the
/// next fence line and the remainder of the input is returned as the body,
/// byte-for-byte. A missing `tags` list or `date` field is fine; a date that
/// is present but does not parse as an RFC 2822 timestamp is a `ParseError`.
///
/// # Errors
///
/// Returns `ParseError::MissingFence` when the input does not start with a
/// fence, `ParseError::UnterminatedFence` when the opening fence is never
/// closed, `ParseError::Header` for malformed YAML, and `ParseError::Date`
/// for an unparseable timestamp.
///
/// # Examples
///
/// ```
/// use daybook::frontmatter::decode;
///
/// let raw = "---\ntags:\n- foo\n---\nHello.\n";
/// let (header, body) = decode(raw).unwrap();
/// assert_eq!(header.tags, vec!["foo"]);
/// assert_eq!(body, "Hello.\n");
/// ```
pub fn decode(raw: &str) -> Result<(Header, &str), ParseError> {
    let opening = format!("{}\n", FRONTMATTER_FENCE);
    let rest = raw.strip_prefix(&opening).ok_or(ParseError::MissingFence)?;

    let (block, body) = if let Some(body) = rest.strip_prefix(&opening) {
        // Empty header block: the closing fence immediately follows the opener
        ("", body)
    } else {
        let closing = format!("\n{}\n", FRONTMATTER_FENCE);
        let end = rest.find(&closing).ok_or(ParseError::UnterminatedFence)?;
        (&rest[..end + 1], &rest[end + closing.len()..])
    };

    let raw_header: RawHeader = if block.trim().is_empty() {
        RawHeader::default()
    } else {
        serde_yaml::from_str(block)?
    };

    let date = raw_header
        .date
        .as_deref()
        .map(DateTime::parse_from_rfc2822)
        .transpose()?;

    let header = Header {
        tags: raw_header.tags.unwrap_or_default(),
        date,
    };
    Ok((header, body))
}

/// Serializes a header and body back into entry-file bytes.
///
/// Fields are emitted in a stable order (tags first when present, then date),
/// the fence is re-emitted, and the body follows verbatim. Feeding the output
/// of `decode` back through `encode` reproduces a canonical input exactly.
///
/// # Examples
///
/// ```
/// use daybook::frontmatter::{decode, encode, Header};
///
/// let header = Header { tags: vec!["foo".to_string()], date: None };
/// let raw = encode(&header, "Hello.\n");
/// assert_eq!(decode(&raw).unwrap(), (header, "Hello.\n"));
/// ```
pub fn encode(header: &Header, body: &str) -> String {
    let raw_header = RawHeader {
        tags: if header.tags.is_empty() {
            None
        } else {
            Some(header.tags.clone())
        },
        date: header.date.map(|d| d.to_rfc2822()),
    };

    let block = if raw_header.tags.is_none() && raw_header.date.is_none() {
        String::new()
    } else {
        // Serialization of a struct into plain YAML mappings cannot fail
        serde_yaml::to_string(&raw_header).expect("header serialization is infallible")
    };

    format!(
        "{fence}\n{block}{fence}\n{body}",
        fence = FRONTMATTER_FENCE,
        block = block,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_date() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2018, 8, 1, 10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_decode_header_and_body() {
        let raw = "---\ntags:\n- foo\n- bar\ndate: Wed, 1 Aug 2018 10:00:00 +0000\n---\nToday I wrote some code.\n";
        let (header, body) = decode(raw).unwrap();

        assert_eq!(header.tags, vec!["foo", "bar"]);
        assert_eq!(header.date, Some(sample_date()));
        assert_eq!(body, "Today I wrote some code.\n");
    }

    #[test]
    fn test_decode_without_tags() {
        let raw = "---\ndate: Wed, 1 Aug 2018 10:00:00 +0000\n---\nNo tags here.\n";
        let (header, body) = decode(raw).unwrap();

        assert!(header.tags.is_empty());
        assert_eq!(header.date, Some(sample_date()));
        assert_eq!(body, "No tags here.\n");
    }

    #[test]
    fn test_decode_without_date() {
        let raw = "---\ntags:\n- foo\n---\nNo date here.\n";
        let (header, _) = decode(raw).unwrap();

        assert_eq!(header.tags, vec!["foo"]);
        assert!(header.date.is_none());
    }

    #[test]
    fn test_decode_empty_header_block() {
        let raw = "---\n---\nJust a body.\n";
        let (header, body) = decode(raw).unwrap();

        assert_eq!(header, Header::default());
        assert_eq!(body, "Just a body.\n");
    }

    #[test]
    fn test_decode_missing_fence() {
        let raw = "Just prose, no header.\n";
        match decode(raw) {
            Err(ParseError::MissingFence) => {}
            other => panic!("Expected MissingFence, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_unterminated_fence() {
        let raw = "---\ntags:\n- foo\nNo closing fence follows.\n";
        match decode(raw) {
            Err(ParseError::UnterminatedFence) => {}
            other => panic!("Expected UnterminatedFence, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_bad_date() {
        let raw = "---\ndate: not a timestamp\n---\nBody.\n";
        match decode(raw) {
            Err(ParseError::Date(_)) => {}
            other => panic!("Expected Date error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_malformed_yaml() {
        let raw = "---\ntags: [unterminated\n---\nBody.\n";
        match decode(raw) {
            Err(ParseError::Header(_)) => {}
            other => panic!("Expected Header error, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_field_order() {
        let header = Header {
            tags: vec!["bar".to_string(), "foo".to_string()],
            date: Some(sample_date()),
        };
        let raw = encode(&header, "Body.\n");

        let tags_at = raw.find("tags:").expect("tags serialized");
        let date_at = raw.find("date:").expect("date serialized");
        assert!(tags_at < date_at, "tags must be serialized before date");
        assert!(raw.ends_with("---\nBody.\n"));
    }

    #[test]
    fn test_encode_omits_empty_fields() {
        let header = Header {
            tags: Vec::new(),
            date: Some(sample_date()),
        };
        let raw = encode(&header, "");
        assert!(!raw.contains("tags:"));

        let header = Header::default();
        let raw = encode(&header, "Body.\n");
        assert_eq!(raw, "---\n---\nBody.\n");
    }

    #[test]
    fn test_round_trip() {
        let header = Header {
            tags: vec!["projects".to_string(), "reading".to_string()],
            date: Some(sample_date()),
        };
        let body = "Dear diary,\n\nnothing happened today.\n";

        let encoded = encode(&header, body);
        let (decoded_header, decoded_body) = decode(&encoded).unwrap();

        assert_eq!(decoded_header, header);
        assert_eq!(decoded_body, body);

        // Re-encoding a canonical entry is byte-identical
        assert_eq!(encode(&decoded_header, decoded_body), encoded);
    }

    #[test]
    fn test_body_preserved_byte_for_byte() {
        let body = "line one\n\n---\n\nan hrule inside the body\n\ttabs too\n";
        let header = Header {
            tags: vec!["notes".to_string()],
            date: None,
        };

        let encoded = encode(&header, body);
        let (_, decoded_body) = decode(&encoded).unwrap();
        assert_eq!(decoded_body, body);
    }
}

//! Decoding of incident shard payloads.

use crime_stats_incident_models::IncidentRecord;

use crate::SourceError;

/// Number of leading bytes inspected for an HTML error page.
const SNIFF_LEN: usize = 100;

/// Maximum length of the payload preview included in error logs.
const BODY_PREVIEW_LEN: usize = 200;

/// Decodes a shard payload (a JSON array of incident records).
///
/// # Errors
///
/// Returns [`SourceError::HtmlResponse`] if the payload looks like an HTML
/// page rather than JSON, or [`SourceError::Json`] if it does not decode.
pub fn decode_records(body: &[u8]) -> Result<Vec<IncidentRecord>, SourceError> {
    if looks_like_html(body) {
        log::warn!("Received HTML instead of JSON ({} bytes)", body.len());
        return Err(SourceError::HtmlResponse);
    }

    match serde_json::from_slice::<Vec<IncidentRecord>>(body) {
        Ok(records) => {
            log::debug!("Decoded {} incident records", records.len());
            Ok(records)
        }
        Err(e) => {
            let preview = String::from_utf8_lossy(&body[..body.len().min(BODY_PREVIEW_LEN)]);
            log::error!(
                "Incident JSON decode failed: {e}\n  \
                 received: {} bytes\n  \
                 body preview: {preview}",
                body.len()
            );
            Err(e.into())
        }
    }
}

/// Whether the start of `body`, ignoring leading whitespace, is `<`.
#[must_use]
pub fn looks_like_html(body: &[u8]) -> bool {
    body.iter()
        .take(SNIFF_LEN)
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'<')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_record_array() {
        let body = serde_json::json!([
            {
                "YEAR": "2024",
                "LOCATION": "100 N TRYON ST",
                "STATE": "NC",
                "ZIP": "28202",
                "DATE_REPORTED": "2024-03-01T10:00:00.000Z",
                "LOCATION_TYPE_DESCRIPTION": "Street",
                "HIGHEST_NIBRS_DESCRIPTION": "Larceny"
            },
            {
                "YEAR": "2023",
                "LOCATION": "500 W TRADE ST",
                "STATE": null,
                "DATE_REPORTED": "2023-03-01T10:00:00.000Z",
                "LOCATION_TYPE_DESCRIPTION": "Parking Lot",
                "HIGHEST_NIBRS_DESCRIPTION": "Vandalism"
            }
        ])
        .to_string();

        let records = decode_records(body.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].zip.as_deref(), Some("28202"));
        assert!(records[1].state.is_none());
    }

    #[test]
    fn rejects_html_payload() {
        let body = b"  \n<!DOCTYPE html><html><body>404</body></html>";
        assert!(matches!(
            decode_records(body),
            Err(SourceError::HtmlResponse)
        ));
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(
            decode_records(br#"[{"YEAR": "2024"}]"#),
            Err(SourceError::Json(_))
        ));
    }

    #[test]
    fn empty_array_is_no_records() {
        assert!(decode_records(b"[]").unwrap().is_empty());
    }

    #[test]
    fn html_sniffing_only_checks_prefix() {
        let mut body = vec![b' '; SNIFF_LEN];
        body.push(b'<');
        assert!(!looks_like_html(&body));
        assert!(!looks_like_html(b""));
    }
}

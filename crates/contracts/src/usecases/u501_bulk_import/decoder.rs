//! Incremental decoder for the `text/event-stream` body of the bulk import.
//!
//! Network chunks may split a line, or a multi-byte UTF-8 character, at any
//! byte. Bytes are buffered until a newline arrives, so a line is only decoded
//! once it is complete.

use super::events::ImportEvent;

const DATA_PREFIX: &str = "data:";

#[derive(Debug, Default)]
pub struct EventStreamDecoder {
    buffer: Vec<u8>,
}

impl EventStreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk; returns the events of every line it completed
    pub fn push(&mut self, chunk: &[u8]) -> Vec<ImportEvent> {
        self.buffer.extend_from_slice(chunk);
        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(event) = parse_line(&String::from_utf8_lossy(&line)) {
                events.push(event);
            }
        }
        events
    }

    /// End of stream: decode a trailing line without newline
    pub fn finish(&mut self) -> Vec<ImportEvent> {
        let rest = std::mem::take(&mut self.buffer);
        parse_line(&String::from_utf8_lossy(&rest))
            .into_iter()
            .collect()
    }

    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }
}

/// `data: {json}` ⇒ event. Blank lines, comments, other fields and
/// malformed JSON yield `None`.
pub fn parse_line(line: &str) -> Option<ImportEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    let payload = line.strip_prefix(DATA_PREFIX)?.trim_start();
    if payload.is_empty() {
        return None;
    }
    serde_json::from_str(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line(r#"data: {"type":"start","total":3}"#),
            Some(ImportEvent::Start { total: 3 })
        );
        assert_eq!(
            parse_line("data:{\"type\":\"start\",\"total\":1}\r"),
            Some(ImportEvent::Start { total: 1 })
        );
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line(": keep-alive"), None);
        assert_eq!(parse_line("event: progress"), None);
        assert_eq!(parse_line("data: {not json"), None);
        assert_eq!(parse_line(r#"data: {"type":"unknown"}"#), None);
    }

    #[test]
    fn test_line_split_across_chunks() {
        let mut decoder = EventStreamDecoder::new();
        assert!(decoder.push(b"data: {\"type\":\"sta").is_empty());
        assert!(decoder.push(b"rt\",\"total\":2}").is_empty());
        let events = decoder.push(b"\n\ndata: {\"type\":\"complete\",\"total\":2,");
        assert_eq!(events, vec![ImportEvent::Start { total: 2 }]);
        let events = decoder.push(b"\"success\":2,\"failed\":0}\n\n");
        assert_eq!(
            events,
            vec![ImportEvent::Complete { total: 2, success: 2, failed: 0 }]
        );
        assert_eq!(decoder.pending_bytes(), 0);
    }

    #[test]
    fn test_multibyte_character_split_across_chunks() {
        let line = "data: {\"type\":\"error\",\"message\":\"차단됨\"}\n".as_bytes();
        // inside the first Hangul syllable
        let cut = line.iter().position(|b| *b >= 0x80).unwrap() + 1;
        let mut decoder = EventStreamDecoder::new();
        assert!(decoder.push(&line[..cut]).is_empty());
        let events = decoder.push(&line[cut..]);
        assert_eq!(
            events,
            vec![ImportEvent::Error { message: "차단됨".into() }]
        );
    }

    #[test]
    fn test_several_events_in_one_chunk() {
        let mut decoder = EventStreamDecoder::new();
        let events = decoder.push(
            b"data: {\"type\":\"start\",\"total\":1}\n\ndata: garbage\n\ndata: {\"type\":\"error\",\"message\":\"x\"}\n\n",
        );
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_finish_flushes_unterminated_line() {
        let mut decoder = EventStreamDecoder::new();
        assert!(decoder.push(b"data: {\"type\":\"start\",\"total\":5}").is_empty());
        assert_eq!(decoder.finish(), vec![ImportEvent::Start { total: 5 }]);
        assert!(decoder.finish().is_empty());
    }
}

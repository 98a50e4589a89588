//! Assembles the chunked chat completion response into incremental
//! content updates.
//!
//! The wire format is newline-delimited event frames separated by a
//! blank line. Within a frame only `data:`-prefixed lines are
//! significant; the payload is either a JSON object carrying a delta at
//! `choices[0].delta.content` or the literal completion sentinel.
//! Network reads may split frames at arbitrary byte boundaries, so
//! incomplete trailing bytes stay buffered between reads.

use serde_json::Value;

pub const DATA_PREFIX: &str = "data:";
pub const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, Clone, PartialEq)]
pub enum StreamUpdate {
    /// Text to append to the active assistant message.
    Delta(String),
    /// The stream is complete; finalize the message. Emitted at most
    /// once per assembler, no matter how often the sentinel arrives or
    /// whether the connection simply closes.
    Done,
}

#[derive(Debug, Default)]
pub struct StreamAssembler {
    buffer: Vec<u8>,
    finished: bool,
    malformed_frames: usize,
}

impl StreamAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn malformed_frames(&self) -> usize {
        self.malformed_frames
    }

    /// Feed one network read. Returns the updates produced by every
    /// complete frame, in arrival order.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<StreamUpdate> {
        self.buffer.extend_from_slice(bytes);
        let mut updates = Vec::new();
        while let Some(pos) = find_frame_boundary(&self.buffer) {
            let frame: Vec<u8> = self.buffer.drain(..pos + 2).collect();
            let frame = String::from_utf8_lossy(&frame[..pos]).into_owned();
            self.parse_frame(&frame, &mut updates);
        }
        updates
    }

    /// The connection closed: parse whatever is still buffered, then
    /// finalize.
    pub fn finish(&mut self) -> Vec<StreamUpdate> {
        let mut updates = Vec::new();
        if !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            let rest = String::from_utf8_lossy(&rest).into_owned();
            self.parse_frame(&rest, &mut updates);
        }
        if !self.finished {
            self.finished = true;
            updates.push(StreamUpdate::Done);
        }
        updates
    }

    fn parse_frame(&mut self, frame: &str, updates: &mut Vec<StreamUpdate>) {
        for raw_line in frame.lines() {
            let line = raw_line.trim();
            let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
                continue;
            };
            let payload = payload.trim();
            if payload.is_empty() || payload == DONE_SENTINEL {
                if !self.finished {
                    self.finished = true;
                    updates.push(StreamUpdate::Done);
                }
                continue;
            }
            match serde_json::from_str::<Value>(payload) {
                Ok(json) => {
                    if let Some(delta) = json
                        .pointer("/choices/0/delta/content")
                        .and_then(Value::as_str)
                    {
                        updates.push(StreamUpdate::Delta(delta.to_string()));
                    }
                }
                Err(err) => {
                    // Never fatal; the stream continues.
                    log::warn!("skipping malformed stream payload: {}", err);
                    self.malformed_frames += 1;
                }
            }
        }
    }
}

fn find_frame_boundary(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta_frame(content: &str) -> String {
        format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":{}}}}}]}}\n\n",
            serde_json::to_string(content).unwrap()
        )
    }

    fn collect(assembler: &mut StreamAssembler, bytes: &[u8]) -> Vec<StreamUpdate> {
        let mut updates = assembler.push(bytes);
        updates.extend(assembler.finish());
        updates
    }

    fn content_of(updates: &[StreamUpdate]) -> String {
        updates
            .iter()
            .filter_map(|u| match u {
                StreamUpdate::Delta(d) => Some(d.as_str()),
                StreamUpdate::Done => None,
            })
            .collect()
    }

    #[test]
    fn test_example_stream() {
        let wire = format!(
            "{}{}data: [DONE]\n\n",
            delta_frame("Hi"),
            delta_frame(" there")
        );
        let mut assembler = StreamAssembler::new();
        let updates = collect(&mut assembler, wire.as_bytes());
        assert_eq!(content_of(&updates), "Hi there");
        assert_eq!(
            updates.iter().filter(|u| **u == StreamUpdate::Done).count(),
            1
        );
        assert!(assembler.is_finished());
    }

    #[test]
    fn test_chunking_invariance() {
        let wire = format!(
            "{}{}{}data: [DONE]\n\n",
            delta_frame("one "),
            delta_frame("two "),
            delta_frame("three")
        );
        let bytes = wire.as_bytes();

        // Whole body at once as the reference.
        let mut reference = StreamAssembler::new();
        let expected = content_of(&collect(&mut reference, bytes));
        assert_eq!(expected, "one two three");

        // Byte-by-byte.
        let mut assembler = StreamAssembler::new();
        let mut updates = Vec::new();
        for b in bytes {
            updates.extend(assembler.push(std::slice::from_ref(b)));
        }
        updates.extend(assembler.finish());
        assert_eq!(content_of(&updates), expected);

        // Every two-way split, including mid-delimiter.
        for split in 0..bytes.len() {
            let mut assembler = StreamAssembler::new();
            let mut updates = assembler.push(&bytes[..split]);
            updates.extend(assembler.push(&bytes[split..]));
            updates.extend(assembler.finish());
            assert_eq!(content_of(&updates), expected, "split at {}", split);
        }
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut assembler = StreamAssembler::new();
        let updates = assembler.push(b"data: [DONE]\n\ndata: [DONE]\n\n");
        assert_eq!(updates, vec![StreamUpdate::Done]);
        // Connection close after the sentinel must not emit a second Done.
        assert!(assembler.finish().is_empty());
        assert!(assembler.finish().is_empty());
    }

    #[test]
    fn test_malformed_frames_are_skipped() {
        let wire = format!("data: {{not json\n\n{}", delta_frame("ok"));
        let mut assembler = StreamAssembler::new();
        let updates = collect(&mut assembler, wire.as_bytes());
        assert_eq!(content_of(&updates), "ok");
        assert_eq!(assembler.malformed_frames(), 1);
    }

    #[test]
    fn test_non_data_lines_are_ignored() {
        let wire = format!(": keepalive\nevent: completion\n{}", delta_frame("text"));
        let mut assembler = StreamAssembler::new();
        let updates = collect(&mut assembler, wire.as_bytes());
        assert_eq!(content_of(&updates), "text");
        assert_eq!(assembler.malformed_frames(), 0);
    }

    #[test]
    fn test_trailing_frame_without_delimiter() {
        // A final frame may arrive without the closing blank line.
        let wire = delta_frame("tail");
        let mut assembler = StreamAssembler::new();
        let mut updates = assembler.push(&wire.as_bytes()[..wire.len() - 2]);
        assert!(updates.is_empty());
        updates.extend(assembler.finish());
        assert_eq!(content_of(&updates), "tail");
    }

    #[test]
    fn test_frames_without_content_delta() {
        let wire = "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n";
        let mut assembler = StreamAssembler::new();
        let updates = assembler.push(wire.as_bytes());
        assert!(updates.is_empty());
        assert_eq!(assembler.malformed_frames(), 0);
    }

    #[test]
    fn test_crlf_lines() {
        let wire = "data: {\"choices\":[{\"delta\":{\"content\":\"hi\"}}]}\r\n\r\ndata: [DONE]\n\n";
        // CRLF frames still split on the bare LF pair after trimming.
        let mut assembler = StreamAssembler::new();
        let updates = collect(&mut assembler, wire.as_bytes());
        assert_eq!(content_of(&updates), "hi");
    }
}

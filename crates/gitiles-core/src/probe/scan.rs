//! Incremental substring search over a body that arrives in chunks.

/// Looks for `marker` across chunk boundaries while counting bytes.
#[derive(Debug)]
pub(crate) struct MarkerScan<'m> {
    marker: &'m [u8],
    /// Last `marker.len() - 1` bytes of the previous chunk.
    tail: Vec<u8>,
    seen: u64,
    found: bool,
}

impl<'m> MarkerScan<'m> {
    pub(crate) fn new(marker: &'m str) -> Self {
        Self {
            marker: marker.as_bytes(),
            tail: Vec::new(),
            seen: 0,
            found: marker.is_empty(),
        }
    }

    /// Feeds one chunk; returns true once the marker has been seen.
    pub(crate) fn feed(&mut self, data: &[u8]) -> bool {
        self.seen += data.len() as u64;
        if self.found {
            return true;
        }
        let mut window = std::mem::take(&mut self.tail);
        window.extend_from_slice(data);
        self.found = window
            .windows(self.marker.len())
            .any(|w| w == self.marker);
        let keep = self.marker.len() - 1;
        let start = window.len().saturating_sub(keep);
        self.tail = window.split_off(start);
        self.found
    }

    pub(crate) fn found(&self) -> bool {
        self.found
    }

    pub(crate) fn bytes_seen(&self) -> u64 {
        self.seen
    }
}

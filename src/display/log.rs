// Headless adapter: committed frames are emitted as log events.

use super::{DisplayAdapter, DisplayError};

#[derive(Debug, Default)]
pub struct LogDisplay {
    pending: Vec<String>,
    last_frame: Vec<String>,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the most recently committed frame.
    pub fn last_frame(&self) -> &[String] {
        &self.last_frame
    }
}

impl DisplayAdapter for LogDisplay {
    fn begin_frame(&mut self) -> Result<(), DisplayError> {
        self.pending.clear();
        Ok(())
    }

    fn draw_line(&mut self, row: usize, text: &str) -> Result<(), DisplayError> {
        if self.pending.len() <= row {
            self.pending.resize(row + 1, String::new());
        }
        self.pending[row] = text.to_string();
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), DisplayError> {
        self.last_frame = std::mem::take(&mut self.pending);
        tracing::info!(rows = self.last_frame.len(), frame = ?self.last_frame, "frame");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_committed_on_end_frame() {
        let mut d = LogDisplay::new();
        d.begin_frame().unwrap();
        d.draw_line(0, "Net: Online").unwrap();
        d.draw_line(1, "Eth: Disconnected").unwrap();
        assert!(d.last_frame().is_empty());
        d.end_frame().unwrap();
        assert_eq!(d.last_frame(), ["Net: Online", "Eth: Disconnected"]);
    }

    #[test]
    fn begin_frame_discards_uncommitted_rows() {
        let mut d = LogDisplay::new();
        d.begin_frame().unwrap();
        d.draw_line(2, "stale").unwrap();
        d.begin_frame().unwrap();
        d.draw_line(0, "fresh").unwrap();
        d.end_frame().unwrap();
        assert_eq!(d.last_frame(), ["fresh"]);
    }
}

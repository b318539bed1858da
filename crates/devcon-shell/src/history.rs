//! Input recall buffer.
//!
//! Most-recent-first: re-entering a line moves it to the front instead of
//! duplicating it, and the buffer is capped. Persisted as newline-joined
//! plain text so it survives shell restarts.

use std::path::Path;

use devcon_types::error::Result;

pub struct History {
    entries: Vec<String>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Load a persisted buffer. A missing file is an empty history.
    pub fn load(path: &Path, limit: usize) -> Result<Self> {
        let mut history = Self::new(limit);
        if path.exists() {
            let text = std::fs::read_to_string(path)?;
            // Stored most-recent-first; push in reverse to rebuild.
            for line in text.lines().rev() {
                if !line.trim().is_empty() {
                    history.push(line);
                }
            }
        }
        Ok(history)
    }

    /// Persist the buffer, most recent line first.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.entries.join("\n"))?;
        Ok(())
    }

    /// Record a line. An existing identical entry moves to the front.
    pub fn push(&mut self, line: &str) {
        self.entries.retain(|e| e != line);
        self.entries.insert(0, line.to_string());
        self.entries.truncate(self.limit);
    }

    /// Recalled lines, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

//! Writes step logs as JSON for external players.

use std::io::Write;
use std::path::Path;

use crate::engine::StepLog;
use crate::types::TraversalResult;

/// JSON writer for step logs.
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    /// Create a new exporter. `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize a step log to a string.
    pub fn to_string(&self, log: &StepLog) -> TraversalResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(log)?
        } else {
            serde_json::to_string(log)?
        };
        Ok(json)
    }

    /// Write a step log to a file, replacing its content.
    pub fn write_to_file(&self, log: &StepLog, path: &Path) -> TraversalResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(log, &mut writer)
    }

    /// Write a step log to any writer.
    pub fn write_to(&self, log: &StepLog, writer: &mut impl Write) -> TraversalResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, log)?;
        } else {
            serde_json::to_writer(&mut *writer, log)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new(true)
    }
}

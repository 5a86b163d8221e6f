//! Copy-to-clipboard boundary.
//!
//! The core serializes a record; where the text ends up is a capability the
//! composition root injects. Hosts without a clipboard get the explicit
//! no-op sink. Copy failures are swallowed here (logged at debug), matching
//! the directory's observed behavior of not surfacing them.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

/// Write-only clipboard capability.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Default implementation for hosts without a clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// In-memory sink for tests and for piping the payload to stdout.
#[derive(Debug, Default, Clone)]
pub struct BufferClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for BufferClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// The "Copy JSON" payload: the record's full serialized form, pretty
/// printed.
pub fn spec_json<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Serialize `record` and hand it to the sink. Returns whether the copy
/// landed; failures are logged and absorbed.
pub fn copy_spec<T: Serialize>(record: &T, sink: &mut dyn ClipboardSink) -> bool {
    let payload = match spec_json(record) {
        Ok(payload) => payload,
        Err(err) => {
            debug!(%err, "spec serialization failed; copy skipped");
            return false;
        }
    };
    match sink.write_text(&payload) {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "clipboard write failed; ignored");
            false
        }
    }
}

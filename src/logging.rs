use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Initialise logging. `debug` selects the `debug` level, otherwise `info`.
///
/// In the browser every formatted event is forwarded to the developer
/// console; elsewhere it goes to stderr.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::new(format!("qimma_dashboard={level},warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init();
}

/// Developer console method an event is written with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsoleLevel {
    #[default]
    Log,
    Warn,
}

impl From<Level> for ConsoleLevel {
    fn from(level: Level) -> Self {
        if level == Level::ERROR || level == Level::WARN {
            Self::Warn
        } else {
            Self::Log
        }
    }
}

/// Hands out one [`ConsoleWriter`] per event, tagged with its level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::from(*meta.level()))
    }
}

/// Buffers one formatted event and emits it when dropped.
#[derive(Default)]
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        emit(self.level, line.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: ConsoleLevel, line: &str) {
    match level {
        ConsoleLevel::Warn => gloo::console::warn!(line),
        ConsoleLevel::Log => gloo::console::log!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: ConsoleLevel, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_init_twice_is_harmless() {
        init(true);
        init(false);
        tracing::info!("logging initialised");
    }

    #[test]
    fn test_writer_buffers_until_dropped() {
        let mut writer = ConsoleWriter::new(ConsoleLevel::Warn);
        writer.write_all(b"INFO fetch ").unwrap();
        writer.write_all(b"succeeded\n").unwrap();
        assert_eq!(writer.buffer, b"INFO fetch succeeded\n");
        assert_eq!(writer.level, ConsoleLevel::Warn);
    }

    #[test]
    fn test_console_level_follows_event_level() {
        assert_eq!(ConsoleLevel::from(Level::ERROR), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::from(Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::from(Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::from(Level::DEBUG), ConsoleLevel::Log);
    }

    #[test]
    fn test_writer_for_event_uses_metadata_level() {
        struct Capture(Mutex<Vec<ConsoleLevel>>);

        impl tracing::Subscriber for Capture {
            fn enabled(&self, _: &Metadata<'_>) -> bool {
                true
            }
            fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
                tracing::span::Id::from_u64(1)
            }
            fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
            fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
            fn event(&self, event: &tracing::Event<'_>) {
                let writer = ConsoleMakeWriter.make_writer_for(event.metadata());
                self.0.lock().unwrap().push(writer.level);
            }
            fn enter(&self, _: &tracing::span::Id) {}
            fn exit(&self, _: &tracing::span::Id) {}
        }

        let capture = Arc::new(Capture(Mutex::new(Vec::new())));
        tracing::subscriber::with_default(capture.clone(), || {
            tracing::debug!("WARN mentioned in a debug message");
            tracing::warn!("fetch failed");
        });
        assert_eq!(*capture.0.lock().unwrap(), vec![ConsoleLevel::Log, ConsoleLevel::Warn]);
    }
}

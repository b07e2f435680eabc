//! Logging setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber. Native builds write to
//! stderr. With the `browser` feature, lines go to the devtools console at
//! the matching console level.

use crate::MasonError;
use tracing::Level;

/// Parse a level name such as `"debug"` or `"WARN"`.
pub fn parse_level(level: &str) -> Result<Level, MasonError> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| MasonError::ConfigError(format!("unknown log level: {:?}", level)))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(level: &str) -> Result<(), MasonError> {
    let level = parse_level(level)?;
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    #[cfg(feature = "browser")]
    let builder = builder
        .with_ansi(false)
        .without_time()
        .with_writer(console::ConsoleWriter::default());

    #[cfg(not(feature = "browser"))]
    let builder = builder.with_writer(std::io::stderr);

    builder
        .try_init()
        .map_err(|e| MasonError::LoggingError(e.to_string()))
}

#[cfg(feature = "browser")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    /// Writes formatted lines to `console.*`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ConsoleWriter;

    /// Buffers one event and flushes it on drop.
    pub struct ConsoleLine {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleLine {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleLine {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buf);
            let line = wasm_bindgen::JsValue::from_str(text.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleWriter {
        type Writer = ConsoleLine;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleLine {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleLine {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), Level::WARN);
        assert!(matches!(parse_level("loud"), Err(MasonError::ConfigError(_))));
    }

    #[test]
    fn test_init_rejects_unknown_level() {
        assert!(init("chatty").is_err());
    }
}

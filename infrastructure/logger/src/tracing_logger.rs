use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target attached to every event emitted through [`TracingLogger`].
pub const LOG_TARGET: &str = "Catalog -- ";

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(filter: &str, emit: impl FnOnce(&TracingLogger)) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || emit(&TracingLogger));
        captured.contents()
    }

    #[test]
    fn should_emit_every_level_under_catalog_target() {
        let output = capture("debug", |logger| {
            logger.info("loaded 20 products");
            logger.warn("slow response");
            logger.error("fetch failed");
            logger.debug("patch is empty");
        });

        assert!(output.contains("INFO"));
        assert!(output.contains("loaded 20 products"));
        assert!(output.contains("WARN"));
        assert!(output.contains("ERROR"));
        assert!(output.contains("patch is empty"));
        assert!(output.contains(LOG_TARGET.trim_end()));
    }

    #[test]
    fn should_respect_level_filter() {
        let output = capture("info", |logger| {
            logger.debug("hidden detail");
            logger.info("visible message");
        });

        assert!(!output.contains("hidden detail"));
        assert!(output.contains("visible message"));
    }
}

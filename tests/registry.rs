// The default logger is process-wide, so everything touching it lives in one
// test to keep the order of setup calls deterministic.

use levlog::{registry, Level};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_default_instance_lifecycle() {
    let err = std::panic::catch_unwind(registry::instance).unwrap_err();
    let msg = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    assert!(msg.contains("please set it up first"), "{msg}");
    assert!(std::panic::catch_unwind(registry::install_log_facade).is_err());

    let first = Buffer::default();
    registry::setup(first.clone(), Level::Warning, " - ");
    registry::instance().warning("one").unwrap();
    registry::instance().info("dropped").unwrap();
    assert_eq!(first.contents(), "[Warning] - one\n");

    registry::install_log_facade().unwrap();
    assert!(registry::install_log_facade().is_err());
    log::error!("from the log crate: {}", 42);
    log::info!("below the threshold");
    assert_eq!(
        first.contents(),
        "[Warning] - one\n[Error] - from the log crate: 42\n"
    );

    // A second setup replaces the instance, and the log facade follows it.
    let second = Buffer::default();
    let logger = registry::setup(second.clone(), Level::Debug, "|");
    assert!(Arc::ptr_eq(&logger, &registry::instance()));
    log::trace!("traced");
    assert_eq!(second.contents(), "[Debug]|traced\n");
    assert_eq!(first.contents().lines().count(), 2);
}

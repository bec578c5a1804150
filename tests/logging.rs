use std::sync::Mutex;

use credgen::{core::generator::Credentials, prompt::Prompt};
use log::{LevelFilter, Log, Metadata, Record};

struct CapturingLogger {
    messages: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.messages
            .lock()
            .unwrap()
            .push(record.args().to_string());
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    messages: Mutex::new(Vec::new()),
};

// Only test in this binary: the logger is process-wide.
#[test]
fn generated_values_never_reach_the_log() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let credentials = Credentials::generate(24, 24).unwrap();

    let mut output = Vec::new();
    let printed = Prompt::new("24\n24\n".as_bytes(), &mut output)
        .run()
        .unwrap();

    let messages = LOGGER.messages.lock().unwrap();
    assert!(!messages.is_empty());
    assert!(messages.iter().any(|m| m.contains("length 24")));

    for secret in [
        &credentials.username,
        &credentials.password,
        &printed.username,
        &printed.password,
    ] {
        assert!(
            messages.iter().all(|m| !m.contains(secret.as_str())),
            "generated value leaked into the log"
        );
    }
}

//! Log output of `create_enum`, captured through a `tracing-subscriber` writer.

use std::io;
use std::sync::{Arc, Mutex};

use string_enum::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, Enumeration)]
#[enumeration(rename_all = "lowercase")]
enum Role {
    Admin,
    User,
    #[enumeration(value = "admin")]
    Root,
}

#[derive(Debug, Clone, Copy, Enumeration)]
enum Shade {
    Light,
    Dark,
}

/// In-memory log sink shared between the subscriber and the test.
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

fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, sink.contents())
}

#[test]
fn duplicate_value_logs_a_warning() {
    let (roles, logs) = capture(create_enum::<Role>);

    assert_eq!(roles.len(), 3);
    let warnings: Vec<&str> = logs.lines().filter(|line| line.contains("WARN")).collect();
    assert_eq!(warnings.len(), 1, "logs:\n{logs}");
    let warning = warnings[0];
    assert!(warning.contains("duplicate member value"), "{warning}");
    assert!(warning.contains("admin"), "{warning}");
    assert!(warning.contains("Admin"), "{warning}");
    assert!(warning.contains("Root"), "{warning}");
    assert!(warning.contains("Role"), "{warning}");
}

#[test]
fn distinct_values_build_without_warnings() {
    let (shades, logs) = capture(create_enum::<Shade>);

    assert_eq!(shades.len(), 2);
    assert!(!logs.contains("WARN"), "logs:\n{logs}");
    assert!(logs.contains("built enumeration registry"), "logs:\n{logs}");
}

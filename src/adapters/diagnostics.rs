use crate::core::{Diagnostics, DogImageResponse};
use crate::utils::error::WoofError;

/// Sends both diagnostic categories to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn payload(&self, response: &DogImageResponse) {
        tracing::info!(payload = %response.to_json(), "🐶 Dog fetched");
    }

    fn failure(&self, error: &WoofError) {
        tracing::error!(kind = error.kind(), "❌ Dog fetch failed: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        logs.lines()
    }

    #[test]
    fn test_payload_emits_one_info_event() {
        let response = DogImageResponse::from_slice(
            br#"{"fileSizeBytes":12,"url":"https://example.test/a.jpg"}"#,
        )
        .unwrap();

        let lines = capture(|| TracingDiagnostics.payload(&response));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("payload="));
        assert!(lines[0].contains(r#""url":"https://example.test/a.jpg""#));
        assert!(lines[0].contains(r#""fileSizeBytes":12"#));
    }

    #[test]
    fn test_failure_emits_one_error_event() {
        let error = WoofError::NonSuccessStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };

        let lines = capture(|| TracingDiagnostics.failure(&error));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("Not 200 OK"));
        assert!(lines[0].contains("non_success_status"));
    }
}

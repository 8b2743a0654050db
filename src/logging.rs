use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::error::{MonitorError, Result};

/// Route `tracing` output to `log_file`, if one was requested.
///
/// The terminal belongs to the UI, so without a file nothing is installed and
/// every event is discarded. The returned guard flushes the writer on drop and
/// must outlive the app.
pub fn init_tracing(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let file_appender = open_appender(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| MonitorError::Logging(e.to_string()))?;

    Ok(Some(guard))
}

/// Open `path` for appending, never rotating.
fn open_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| MonitorError::Logging(format!("'{}' is not a file path", path.display())))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|e| MonitorError::Logging(format!("cannot open '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(init_tracing(None).unwrap().is_none());
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let result = init_tracing(Some(Path::new("/proc/procwatch-test.log")));
        assert!(matches!(result, Err(MonitorError::Logging(_)) | Err(MonitorError::Io { .. })));
    }

    #[test]
    fn appender_creates_the_named_file() {
        let dir = std::env::temp_dir().join(format!("procwatch-log-{}", std::process::id()));
        let path = dir.join("procwatch.log");

        open_appender(&path).unwrap();

        assert!(path.is_file());
        fs::remove_dir_all(&dir).unwrap();
    }
}

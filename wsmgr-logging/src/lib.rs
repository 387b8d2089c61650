//! Tracing subscriber setup for wsmgr.
//!
//! Configuration comes from the environment:
//! - `RUST_LOG` - full `EnvFilter` directives, wins over everything else
//! - `WSMGR_LOG_LEVEL` - default level when `RUST_LOG` is unset
//! - `WSMGR_LOG_FORMAT` - `human` (default), `json` or `compact`
//! - `WSMGR_LOG_OUTPUT` - `console` (stderr, default), `file` or `both`
//! - `WSMGR_LOG_FILE` - log file path, default `<state dir>/wsmgr.log`
//!
//! Logs never go to stdout.

use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::MakeWriter, prelude::*, registry, EnvFilter};

// --- Custom "Tee" Writer ---
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A, B> Write for Tee<A, B>
where
    A: Write,
    B: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write(buf);
        let res_b = self.b.write(buf);
        res_a.or(res_b)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B, W1, W2> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a, Writer = W1>,
    B: MakeWriter<'a, Writer = W2>,
    W1: Write + 'a,
    W2: Write + 'a,
{
    type Writer = Tee<W1, W2>;
    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
    Compact,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Human,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
}

impl LogOutput {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            _ => LogOutput::Console,
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    pub file: PathBuf,
}

impl LogSettings {
    /// Read settings from the environment. `debug` raises the default level.
    pub fn from_env(debug: bool) -> Self {
        let default_level = if debug { "debug" } else { "warn" };
        let level = env::var("WSMGR_LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
        let format = LogFormat::parse(&env::var("WSMGR_LOG_FORMAT").unwrap_or_default());
        let output = LogOutput::parse(&env::var("WSMGR_LOG_OUTPUT").unwrap_or_default());
        let file = env::var_os("WSMGR_LOG_FILE")
            .map(PathBuf::from)
            .or_else(|| wsmgr_core::user_paths::default_log_file().ok())
            .unwrap_or_else(|| env::temp_dir().join("wsmgr.log"));

        Self {
            level,
            format,
            output,
            file,
        }
    }
}

fn file_writer(path: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let name = path.file_name().unwrap_or("wsmgr.log".as_ref());
    let _ = std::fs::create_dir_all(dir);
    let appender = tracing_appender::rolling::never(dir, name);
    tracing_appender::non_blocking(appender)
}

/// Initializes the global tracing subscriber.
///
/// Returns the file writer guard when logging to a file; keep it alive until
/// exit so buffered lines are flushed. Calling this twice is harmless, the
/// second subscriber is dropped.
pub fn init_subscriber(settings: &LogSettings) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = registry().with(env_filter);
    let mut guard: Option<WorkerGuard> = None;

    macro_rules! finish {
        ($layer:expr) => {{
            let layer = $layer;
            let _ = match settings.format {
                LogFormat::Json => subscriber.with(layer.json()).try_init(),
                LogFormat::Compact => subscriber.with(layer.compact()).try_init(),
                LogFormat::Human => subscriber.with(layer).try_init(),
            };
        }};
    }

    match settings.output {
        LogOutput::Console => {
            finish!(tracing_subscriber::fmt::layer().with_writer(io::stderr));
        }
        LogOutput::File => {
            let (writer, file_guard) = file_writer(&settings.file);
            guard = Some(file_guard);
            finish!(tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer));
        }
        LogOutput::Both => {
            let (writer, file_guard) = file_writer(&settings.file);
            guard = Some(file_guard);
            let tee = MakeTee {
                make_a: io::stderr,
                make_b: writer,
            };
            finish!(tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(tee));
        }
    }

    guard
}

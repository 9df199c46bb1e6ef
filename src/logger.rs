use std::env;
use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use env_logger::filter::{Builder, Filter};

use log::{Log, Metadata, Record};

/// Small `env_logger`-like logger that reads filters from an environment variable and logs to a
/// file, or to standard error if no file is given.
///
/// Standard output is left alone since it carries the rendered canvas.
pub struct Logger {
    sink: Mutex<Box<dyn Write + Send>>,
    filter: Filter,
}

impl Logger {
    pub fn init(env_var: impl AsRef<OsStr>, path: Option<&Path>) -> anyhow::Result<()> {
        let sink: Box<dyn Write + Send> = match path {
            Some(path) => Box::new(
                OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(path)?,
            ),
            None => Box::new(io::stderr()),
        };

        let mut filter_builder = Builder::new();

        if let Ok(filter) = env::var(env_var) {
            filter_builder.parse(&filter);
        }

        let filter = filter_builder.build();
        let max_level = filter.filter();

        log::set_boxed_logger(Box::new(Logger {
            sink: Mutex::new(sink),
            filter,
        }))
        .map(|()| log::set_max_level(max_level))?;

        Ok(())
    }
}

#[allow(clippy::unwrap_used)]
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.filter.matches(record) {
            let mut sink = self.sink.lock().unwrap();

            let _ = writeln!(
                sink,
                "{} {:5} {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = self.sink.lock().unwrap().flush();
    }
}

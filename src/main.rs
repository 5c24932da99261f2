use log::{info, Level, LevelFilter, Metadata, Record, SetLoggerError};
use quick_utils::{clamp_percentage, generate_identifier, generate_uuid_identifier};

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }
    fn flush(&self) {}
}

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

fn main() -> Result<(), SetLoggerError> {
    log::set_logger(&CONSOLE_LOGGER)?;
    log::set_max_level(LevelFilter::Trace);

    for _ in 0..3 {
        info!("identifier: {}", generate_identifier());
    }
    info!("uuid identifier: {}", generate_uuid_identifier());

    for value in [150.0, -5.0, 42.0, 0.0, 100.0, f64::NAN] {
        info!("clamp_percentage({}) = {}", value, clamp_percentage(value));
    }
    Ok(())
}

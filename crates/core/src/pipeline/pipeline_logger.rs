use std::time::Instant;

/// Console output of the movie pipeline, gated by a verbosity level.
///
/// Level 1 carries summary counts, level 2 and above per-file diagnostics.
/// Passed into the use case explicitly so nothing depends on global state.
pub trait PipelineLogger: Send {
    /// Emit `message` if the configured verbosity is at least `level`.
    fn log(&mut self, level: u8, message: &str);

    /// Emit an end-of-pipeline summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
///
/// Used by tests where logger output is irrelevant.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn log(&mut self, _level: u8, _message: &str) {}
}

/// CLI logger: forwards messages within `verbosity` to the `log` crate,
/// level 1 as `info`, deeper levels as `debug`.
pub struct VerbosityLogger {
    verbosity: u8,
    start_time: Instant,
    messages: Vec<String>,
}

impl VerbosityLogger {
    pub fn new(verbosity: u8) -> Self {
        Self {
            verbosity,
            start_time: Instant::now(),
            messages: Vec::new(),
        }
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Messages that passed the verbosity gate, in emission order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn enabled(&self, level: u8) -> bool {
        level <= self.verbosity
    }
}

impl Default for VerbosityLogger {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PipelineLogger for VerbosityLogger {
    fn log(&mut self, level: u8, message: &str) {
        if !self.enabled(level) {
            return;
        }
        self.messages.push(message.to_string());
        if level <= 1 {
            log::info!("{message}");
        } else {
            log::debug!("{message}");
        }
    }

    fn summary(&self) {
        if self.enabled(1) {
            log::info!(
                "Finished in {:.2}s",
                self.start_time.elapsed().as_secs_f64()
            );
        }
    }
}

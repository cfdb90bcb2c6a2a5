//! Destination for `p` output.
//!
//! - Driver: stdout
//! - Tests and embedders: an in-memory buffer or any `Write` sink
//!
//! A failed write is returned to the caller, which aborts the run.
//!
//! Enum dispatch over a closed set of destination kinds.

use std::io::{self, Write};

use parking_lot::Mutex;

/// Writes each line straight to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{msg}")?;
        out.flush()
    }
}

/// Captures output in memory.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline). Never fails.
    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
        Ok(())
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes each line to a caller-supplied sink.
pub struct WriterPrintHandler {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterPrintHandler {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        WriterPrintHandler {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{msg}")?;
        writer.flush()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Writes to an arbitrary sink.
    Writer(WriterPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Writer(h) => h.println(msg),
        }
    }

    /// Captured output. Always empty unless buffering.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) | Self::Writer(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Clear captured output. No-op unless buffering.
    pub fn clear(&self) {
        match self {
            Self::Stdout(_) | Self::Writer(_) => {}
            Self::Buffer(h) => h.clear(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a print handler writing to `writer`.
pub fn writer_handler(writer: impl Write + Send + 'static) -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Writer(WriterPrintHandler::new(writer)))
}

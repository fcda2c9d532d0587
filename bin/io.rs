use std::io;

mod pipe;

pub use pipe::*;

/// Trait for types that communicate via message-passing.
#[cfg_attr(test, mockall::automock)]
pub trait Io {
    /// Receive a message.
    fn recv(&mut self) -> io::Result<String>;

    /// Send a message.
    fn send(&mut self, msg: &str) -> io::Result<()>;

    /// Flush the internal buffers.
    fn flush(&mut self) -> io::Result<()>;
}

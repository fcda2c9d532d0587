use super::Io;
use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Write};
use tracing::instrument;

/// A generic [`Io`] interface over a writer and a line-oriented reader.
#[derive(Debug)]
pub struct Pipe<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Pipe<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Pipe {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }
}

impl<W: Write, R: Read> Io for Pipe<W, R> {
    #[instrument(level = "trace", skip(self), ret, err)]
    fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(ErrorKind::UnexpectedEof)?
    }

    #[instrument(level = "trace", skip(self), err)]
    fn send(&mut self, msg: &str) -> io::Result<()> {
        writeln!(&mut self.writer, "{msg}")
    }

    #[instrument(level = "trace", skip(self), err)]
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

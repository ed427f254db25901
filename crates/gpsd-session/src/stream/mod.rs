//! The background loop that turns socket bytes into dispatched reports.
//!
//! Per line the loop peeks the class tag, looks up the filters registered for
//! it, fully decodes only when at least one filter exists, and invokes the
//! filters synchronously in registration order. Malformed or unrecognised
//! lines are dropped; only read failures and end of stream stop the loop.

use std::io::{self, BufRead, Read};
use std::sync::Arc;
use std::thread;

use tracing::{debug, trace};

use crate::completion::{self, Completion, StreamEnd};
use crate::decoder::RecordDecoder;
use crate::registry::FilterRegistry;
use crate::STREAM_TARGET;

/// Capacity of the buffered read front over the transport.
pub(crate) const READ_BUFFER_SIZE: usize = 4096;

/// Longest line, excluding the terminator, the loop accepts.
pub const MAX_LINE_BYTES: usize = READ_BUFFER_SIZE * 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineRead {
    Line,
    EndOfStream,
    TooLong,
}

/// Room for a `\r\n` terminator after a line of [`MAX_LINE_BYTES`].
const TERMINATOR_BYTES: usize = 2;

/// Reads one newline-delimited line into `buffer`, without its terminator.
///
/// A trailing line without a newline is returned before end of stream.
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> io::Result<LineRead> {
    buffer.clear();
    let limit = u64::try_from(MAX_LINE_BYTES + TERMINATOR_BYTES).unwrap_or(u64::MAX);
    let read = reader.by_ref().take(limit).read_until(b'\n', buffer)?;
    if read == 0 {
        return Ok(LineRead::EndOfStream);
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    if buffer.last() == Some(&b'\r') {
        buffer.pop();
    }
    if buffer.len() > MAX_LINE_BYTES {
        return Ok(LineRead::TooLong);
    }
    Ok(LineRead::Line)
}

/// Runs the loop on the calling thread until the stream stops.
pub(crate) fn run<R, D>(reader: &mut R, registry: &FilterRegistry, decoder: &D) -> StreamEnd
where
    R: BufRead,
    D: RecordDecoder,
{
    let mut line = Vec::with_capacity(READ_BUFFER_SIZE);
    loop {
        match read_line(reader, &mut line) {
            Ok(LineRead::Line) => dispatch_line(&line, registry, decoder),
            Ok(LineRead::EndOfStream) => return StreamEnd::EndOfStream,
            Ok(LineRead::TooLong) => {
                return StreamEnd::LineTooLong {
                    limit: MAX_LINE_BYTES,
                };
            }
            Err(error) => return StreamEnd::read_failed(&error),
        }
    }
}

fn dispatch_line<D: RecordDecoder>(line: &[u8], registry: &FilterRegistry, decoder: &D) {
    if line.is_empty() {
        return;
    }

    let class = match decoder.peek_class(line) {
        Ok(class) => class,
        Err(error) => {
            trace!(target: STREAM_TARGET, error = %error, "skipping malformed line");
            return;
        }
    };

    let Some(filters) = registry.lookup(&class) else {
        trace!(target: STREAM_TARGET, class = %class, "no filters registered");
        return;
    };

    match decoder.decode(&class, line) {
        Ok(report) => filters.dispatch(&report),
        Err(error) => {
            debug!(target: STREAM_TARGET, class = %class, error = %error, "dropping report");
        }
    }
}

/// Starts the loop on a dedicated thread and returns its completion signal.
pub(crate) fn spawn<R, D>(
    mut reader: R,
    registry: Arc<FilterRegistry>,
    decoder: Arc<D>,
) -> io::Result<Completion>
where
    R: BufRead + Send + 'static,
    D: RecordDecoder,
{
    let (guard, completion) = completion::channel();
    thread::Builder::new()
        .name(String::from("gpsd-stream"))
        .spawn(move || {
            let end = run(&mut reader, &registry, decoder.as_ref());
            debug!(target: STREAM_TARGET, cause = ?end, "stream loop stopped");
            guard.complete(end);
        })?;
    Ok(completion)
}

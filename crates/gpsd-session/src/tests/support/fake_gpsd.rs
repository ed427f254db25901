//! Loopback stand-in for a gpsd daemon.
//!
//! The fake accepts one client, sends a `VERSION` greeting, waits for the
//! `?WATCH=` command and then streams its scripted lines. Everything the
//! client writes is recorded so tests can assert on command framing.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};

/// Greeting sent by gpsd 3.25 when a client connects.
pub(crate) const GREETING: &str =
    r#"{"class":"VERSION","release":"3.25","rev":"3.25","proto_major":3,"proto_minor":15}"#;

/// Frame a session writes to enable JSON watcher mode.
pub(crate) const WATCH_FRAME: &str = r#"?WATCH={"enable":true,"json":true};"#;

const ACCEPT_TIMEOUT: Duration = Duration::from_secs(2);
const READ_TIMEOUT: Duration = Duration::from_secs(2);

/// What the fake does once its scripted lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hangup {
    /// Shut down the write side, so the client sees end of stream.
    AfterLines,
    /// Keep the connection open until the client closes it.
    OnClientClose,
}

/// Scripted behaviour for one client connection.
#[derive(Debug, Clone)]
pub(crate) struct Script {
    greeting: Option<String>,
    lines: Vec<String>,
    hangup: Hangup,
}

impl Script {
    pub(crate) fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            greeting: Some(GREETING.to_owned()),
            lines: lines.into_iter().map(Into::into).collect(),
            hangup: Hangup::AfterLines,
        }
    }

    pub(crate) fn without_greeting(mut self) -> Self {
        self.greeting = None;
        self
    }

    pub(crate) const fn hold_open(mut self) -> Self {
        self.hangup = Hangup::OnClientClose;
        self
    }
}

pub(crate) struct FakeGpsd {
    port: u16,
    received: Arc<Mutex<String>>,
    handle: Option<thread::JoinHandle<Result<()>>>,
}

impl FakeGpsd {
    /// Binds an ephemeral loopback port and serves `script` to one client.
    pub(crate) fn spawn(script: Script) -> Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", 0)).context("bind fake gpsd")?;
        listener
            .set_nonblocking(true)
            .context("fake gpsd nonblocking")?;
        let port = listener.local_addr().context("local addr")?.port();
        let received = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&received);
        let handle = thread::spawn(move || serve(&listener, &script, &sink));
        Ok(Self {
            port,
            received,
            handle: Some(handle),
        })
    }

    pub(crate) fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    /// Waits for the client to go away and returns everything it wrote.
    pub(crate) fn take_received(&mut self) -> Result<String> {
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| anyhow!("fake gpsd thread panicked"))?
                .context("fake gpsd failed")?;
        }
        let received = self
            .received
            .lock()
            .map_err(|error| anyhow!("lock received: {error}"))?;
        Ok(received.clone())
    }
}

impl Drop for FakeGpsd {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle.join());
        }
    }
}

fn serve(listener: &TcpListener, script: &Script, received: &Mutex<String>) -> Result<()> {
    let Some(mut stream) = accept(listener)? else {
        return Ok(());
    };
    stream
        .set_nonblocking(false)
        .context("fake gpsd blocking")?;
    stream
        .set_read_timeout(Some(READ_TIMEOUT))
        .context("fake gpsd read timeout")?;

    if let Some(greeting) = &script.greeting {
        write_line(&mut stream, greeting).context("write greeting")?;
    }
    if !read_until_watch(&mut stream, received)? {
        return Ok(());
    }

    for line in &script.lines {
        write_line(&mut stream, line).context("write report")?;
    }
    if script.hangup == Hangup::AfterLines {
        stream.shutdown(Shutdown::Write).context("hang up")?;
    }
    drain(&mut stream, received)
}

fn accept(listener: &TcpListener) -> Result<Option<TcpStream>> {
    let deadline = Instant::now() + ACCEPT_TIMEOUT;
    loop {
        match listener.accept() {
            Ok((stream, _)) => return Ok(Some(stream)),
            Err(ref error)
                if error.kind() == io::ErrorKind::WouldBlock && Instant::now() < deadline =>
            {
                thread::sleep(Duration::from_millis(10));
            }
            // Tests that fail before dialling must not hang here.
            Err(ref error) if error.kind() == io::ErrorKind::WouldBlock => return Ok(None),
            Err(error) => return Err(error).context("accept connection"),
        }
    }
}

fn write_line(stream: &mut TcpStream, line: &str) -> io::Result<()> {
    stream.write_all(line.as_bytes())?;
    stream.write_all(b"\n")?;
    stream.flush()
}

/// Records client bytes until the watch command arrives. Returns `false`
/// when the client hung up or went quiet first.
fn read_until_watch(stream: &mut TcpStream, received: &Mutex<String>) -> Result<bool> {
    loop {
        if !read_chunk(stream, received)? {
            return Ok(false);
        }
        let seen = received
            .lock()
            .map_err(|error| anyhow!("lock received: {error}"))?;
        let watching = seen
            .find("?WATCH=")
            .and_then(|start| seen.get(start..))
            .is_some_and(|tail| tail.contains(';'));
        if watching {
            return Ok(true);
        }
    }
}

fn drain(stream: &mut TcpStream, received: &Mutex<String>) -> Result<()> {
    while read_chunk(stream, received)? {}
    Ok(())
}

/// Appends one read to `received`. Returns `false` on hang-up or timeout.
fn read_chunk(stream: &mut TcpStream, received: &Mutex<String>) -> Result<bool> {
    let mut buffer = [0_u8; 1024];
    let read = match stream.read(&mut buffer) {
        Ok(0) => return Ok(false),
        Ok(read) => read,
        Err(error)
            if matches!(
                error.kind(),
                io::ErrorKind::WouldBlock
                    | io::ErrorKind::TimedOut
                    | io::ErrorKind::ConnectionReset
            ) =>
        {
            return Ok(false);
        }
        Err(error) => return Err(error).context("read client bytes"),
    };
    let chunk = buffer.get(..read).context("read past buffer")?;
    received
        .lock()
        .map_err(|error| anyhow!("lock received: {error}"))?
        .push_str(&String::from_utf8_lossy(chunk));
    Ok(true)
}

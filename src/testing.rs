use crate::backend::{Backend, FormFields};
use crate::clipboard::Clipboard;
use crate::errors::{ClientError, ClipboardError};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16),
}

/// Scripted backend. Unscripted endpoints answer 404.
#[derive(Default)]
pub struct FakeBackend {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<HashMap<String, usize>>,
    forms: Mutex<Vec<(String, Vec<(String, String)>)>>,
    delay: Mutex<Option<Duration>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, endpoint: &str, body: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Reply::Body(body.into()));
    }

    pub fn fail(&self, endpoint: &str, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Reply::Status(status));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls.lock().unwrap().get(endpoint).copied().unwrap_or(0)
    }

    pub fn forms(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.forms.lock().unwrap().clone()
    }

    fn record_call(&self, endpoint: &str) {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default() += 1;
    }

    async fn wait(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn reply(&self, endpoint: &str) -> Reply {
        self.replies
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .unwrap_or(Reply::Status(404))
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn get_body(&self, endpoint: &str) -> Result<String, ClientError> {
        self.record_call(endpoint);
        self.wait().await;
        match self.reply(endpoint) {
            Reply::Body(body) => Ok(body),
            Reply::Status(status) => Err(ClientError::status(endpoint, status)),
        }
    }

    async fn post_form(&self, endpoint: &str, fields: FormFields<'_>) -> Result<(), ClientError> {
        self.record_call(endpoint);
        self.wait().await;
        let fields = fields
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        self.forms.lock().unwrap().push((endpoint.to_string(), fields));
        match self.reply(endpoint) {
            Reply::Body(_) => Ok(()),
            Reply::Status(status) => Err(ClientError::status(endpoint, status)),
        }
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    contents: Mutex<Option<String>>,
    reject: Mutex<bool>,
}

impl FakeClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    pub fn reject_writes(&self) {
        *self.reject.lock().unwrap() = true;
    }
}

impl Clipboard for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if *self.reject.lock().unwrap() {
            return Err(ClipboardError::Rejected("permission denied".to_string()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Collects formatted tracing output for assertions. Only sees events
/// from the installing thread, which covers current-thread tokio tests.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    /// Number of lines containing every needle.
    pub fn count_matching(&self, needles: &[&str]) -> usize {
        self.contents()
            .lines()
            .filter(|line| needles.iter().all(|needle| line.contains(needle)))
            .count()
    }
}

pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

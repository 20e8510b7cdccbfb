//! # chatfmt-test - Test doubles for chatfmt
//!
//! Recording stand-ins for the host-side traits, and a throwaway directory
//! for registry tests.
//!
//! ```rust
//! use chatfmt::Format;
//! use chatfmt_test::{RecordingReceiver, TestServer};
//!
//! let player = RecordingReceiver::new();
//! Format::default().info("hello").tell(&player);
//! assert_eq!(player.plain(), vec!["hello"]);
//!
//! let server = TestServer::new();
//! Format::default().warn("restarting").broadcast(&server);
//! assert_eq!(server.broadcast().plain(), vec!["restarting"]);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chatfmt::registry::PluginContext;
use chatfmt::{
    ChatType, ChatTypeMessageReceiver, FormatRegistry, MessageChannel, MessageReceiver,
    RegistryConfig, Server, Text, Title, TitleReceiver,
};
use tempfile::TempDir;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn plain<'a>(texts: impl IntoIterator<Item = &'a Text>) -> Vec<String> {
    texts.into_iter().map(Text::to_plain).collect()
}

// =============================================================================
// Receivers
// =============================================================================

/// A player-like receiver that records everything sent to it.
#[derive(Debug, Default)]
pub struct RecordingReceiver {
    messages: Mutex<Vec<(ChatType, Text)>>,
    titles: Mutex<Vec<Title>>,
}

impl RecordingReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order received.
    pub fn messages(&self) -> Vec<Text> {
        lock(&self.messages).iter().map(|(_, t)| t.clone()).collect()
    }

    /// Messages as plain text.
    pub fn plain(&self) -> Vec<String> {
        plain(lock(&self.messages).iter().map(|(_, t)| t))
    }

    /// Chat types in the order received. Plain sends record [`ChatType::Chat`].
    pub fn chat_types(&self) -> Vec<ChatType> {
        lock(&self.messages).iter().map(|(c, _)| *c).collect()
    }

    pub fn titles(&self) -> Vec<Title> {
        lock(&self.titles).clone()
    }

    pub fn clear(&self) {
        lock(&self.messages).clear();
        lock(&self.titles).clear();
    }
}

impl MessageReceiver for RecordingReceiver {
    fn send_message(&self, message: &Text) {
        lock(&self.messages).push((ChatType::Chat, message.clone()));
    }
}

impl ChatTypeMessageReceiver for RecordingReceiver {
    fn send_message_as(&self, chat_type: ChatType, message: &Text) {
        lock(&self.messages).push((chat_type, message.clone()));
    }
}

impl TitleReceiver for RecordingReceiver {
    fn send_title(&self, title: &Title) {
        lock(&self.titles).push(title.clone());
    }
}

/// A channel that records everything sent through it.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    messages: Mutex<Vec<(ChatType, Text)>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(ChatType, Text)> {
        lock(&self.messages).clone()
    }

    pub fn plain(&self) -> Vec<String> {
        plain(lock(&self.messages).iter().map(|(_, t)| t))
    }
}

impl MessageChannel for RecordingChannel {
    fn send_as(&self, chat_type: ChatType, message: &Text) {
        lock(&self.messages).push((chat_type, message.clone()));
    }
}

// =============================================================================
// Server
// =============================================================================

/// An in-memory server with a recording console, broadcast channel and
/// per-permission channels.
#[derive(Debug, Default)]
pub struct TestServer {
    console: RecordingReceiver,
    broadcast: RecordingChannel,
    permitted: Mutex<HashMap<String, Vec<(ChatType, Text)>>>,
}

impl TestServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn console(&self) -> &RecordingReceiver {
        &self.console
    }

    pub fn broadcast(&self) -> &RecordingChannel {
        &self.broadcast
    }

    /// Plain text of everything sent to holders of `permission`.
    pub fn permitted(&self, permission: &str) -> Vec<String> {
        lock(&self.permitted)
            .get(permission)
            .map(|sent| plain(sent.iter().map(|(_, t)| t)))
            .unwrap_or_default()
    }
}

struct PermissionChannel<'a> {
    server: &'a TestServer,
    permission: String,
}

impl MessageChannel for PermissionChannel<'_> {
    fn send_as(&self, chat_type: ChatType, message: &Text) {
        lock(&self.server.permitted)
            .entry(self.permission.clone())
            .or_default()
            .push((chat_type, message.clone()));
    }
}

impl Server for TestServer {
    fn console(&self) -> &dyn MessageReceiver {
        &self.console
    }

    fn broadcast_channel(&self) -> &dyn MessageChannel {
        &self.broadcast
    }

    fn permission_channel(&self, permission: &str) -> Box<dyn MessageChannel + '_> {
        Box::new(PermissionChannel {
            server: self,
            permission: permission.to_string(),
        })
    }
}

// =============================================================================
// Context
// =============================================================================

/// A context that always resolves to the same identifier, or to none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedContext(pub Option<String>);

impl FixedContext {
    pub fn plugin(id: impl Into<String>) -> Self {
        Self(Some(id.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl PluginContext for FixedContext {
    fn plugin_id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

// =============================================================================
// Registry fixture
// =============================================================================

/// A temporary format directory, removed on drop.
#[derive(Debug)]
pub struct RegistryFixture {
    dir: TempDir,
}

impl RegistryFixture {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> RegistryConfig {
        RegistryConfig::new(self.root())
    }

    /// Opens a fresh registry over the directory. Each call starts with an
    /// empty cache.
    pub fn open(&self) -> FormatRegistry {
        FormatRegistry::open(self.config())
    }

    pub fn file(&self, id: &str) -> PathBuf {
        self.root().join(format!("{}.conf", id))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.file(id).is_file()
    }

    pub fn read(&self, id: &str) -> std::io::Result<String> {
        fs::read_to_string(self.file(id))
    }

    pub fn write(&self, id: &str, content: &str) -> std::io::Result<()> {
        fs::write(self.file(id), content)
    }
}

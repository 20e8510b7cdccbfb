//! Per-identifier formats backed by one file each.
//!
//! A [`FormatRegistry`] resolves the [`Format`] for an identifier (usually a
//! plugin id). The first lookup for an identifier reads `<root>/<id>.conf`;
//! if there is no such file, the fallback (the global format unless stated
//! otherwise) is used and written out, so the directory always shows the
//! formats actually in effect. After that the identifier keeps the same
//! [`Arc<Format>`] for the life of the registry.
//!
//! The global format itself lives in `global.conf`. It is read when the
//! registry is opened and written back immediately, so the file exists after
//! the first run.
//!
//! ```rust,no_run
//! use chatfmt::{FormatConfig, FormatRegistry, RegistryConfig};
//! use chatfmt::style::BuiltinColors;
//!
//! let registry = FormatRegistry::open(RegistryConfig::for_game_dir("/srv/minecraft"));
//!
//! // At plugin startup: ship a default without overriding the owner's edits.
//! let shipped: FormatConfig = serde_yaml::from_str("stress: [gold]").unwrap();
//! registry.init("homes", shipped.to_format(&BuiltinColors));
//!
//! registry.formatter("homes").info("Home set");
//! ```
//!
//! Failures never propagate out of the registry: unreadable files count as
//! missing and failed writes only cost the on-disk copy. Both are logged at
//! `warn`. A file that cannot be parsed is kept as `<id>.conf.bak` before the
//! fallback is written in its place.

mod config;
mod context;
mod store;

pub use config::{RegistryConfig, DEFAULT_EXTENSION};
pub use context::PluginContext;
pub use store::FormatStore;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use once_cell::sync::OnceCell;

use crate::args::Arg;
use crate::error::FormatError;
use crate::format::{Category, Format};
use crate::formatter::{Content, Formatter};

/// Identifier of the global format.
pub const GLOBAL_ID: &str = "global";

type Entry = Arc<OnceCell<Arc<Format>>>;

/// Read-through cache of formats keyed by identifier.
pub struct FormatRegistry {
    store: FormatStore,
    global: Arc<Format>,
    entries: RwLock<HashMap<String, Entry>>,
}

impl FormatRegistry {
    /// Opens a registry, loading (and persisting) the global format.
    pub fn open(config: RegistryConfig) -> Self {
        let store = FormatStore::new(&config);

        let global = match store.read(GLOBAL_ID) {
            Ok(Some(format)) => format,
            Ok(None) => Format::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read global format; using defaults");
                set_aside(&store, GLOBAL_ID, &e);
                Format::default()
            }
        };
        if let Err(e) = store.write(GLOBAL_ID, &global) {
            tracing::warn!(error = %e, "failed to persist global format");
        }

        Self::with_global(store, global)
    }

    /// Builds a registry around an already loaded global format.
    ///
    /// Nothing is read or written until the first lookup.
    pub fn with_global(store: FormatStore, global: Format) -> Self {
        Self {
            store,
            global: Arc::new(global),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &FormatStore {
        &self.store
    }

    /// The global format.
    pub fn global(&self) -> Arc<Format> {
        Arc::clone(&self.global)
    }

    /// An independent copy of the global format.
    pub fn copy(&self) -> Format {
        self.global.copy()
    }

    /// The format for `id`, falling back to the global format.
    pub fn get(&self, id: &str) -> Arc<Format> {
        self.get_or(id, Arc::clone(&self.global))
    }

    /// The format for `id`, falling back to `fallback`.
    ///
    /// The fallback only matters the first time `id` is resolved: it is cached
    /// and persisted if no file exists. Later calls return the cached format
    /// whatever fallback they pass.
    pub fn get_or(&self, id: &str, fallback: impl Into<Arc<Format>>) -> Arc<Format> {
        if id == GLOBAL_ID {
            return self.global();
        }
        let entry = self.entry(id);
        let format = entry.get_or_init(|| self.load_or_persist(id, fallback.into()));
        Arc::clone(format)
    }

    /// Registers `format` as the shipped default for `id`.
    ///
    /// Applies only while `id` still shares the global instance, that is when
    /// no file existed for it, so a file already on disk is never clobbered
    /// even if its content equals the global format. `format` must also
    /// differ from the global format. Returns true if it applied.
    pub fn init(&self, id: &str, format: Format) -> bool {
        if id == GLOBAL_ID {
            return false;
        }
        if !Arc::ptr_eq(&self.get(id), &self.global) || format == *self.global {
            return false;
        }

        if let Err(e) = self.store.write(id, &format) {
            tracing::warn!(id, error = %e, "failed to persist format");
        }

        let cell = OnceCell::new();
        let _ = cell.set(Arc::new(format));
        self.write_entries().insert(id.to_string(), Arc::new(cell));
        tracing::debug!(id, "registered shipped format");
        true
    }

    /// [`init`](Self::init) for the identifier `context` resolves to.
    ///
    /// Does nothing without an identifier.
    pub fn init_current(&self, context: &dyn PluginContext, format: Format) -> bool {
        match context.plugin_id() {
            Some(id) => self.init(id, format),
            None => false,
        }
    }

    /// Starts a message in the format of `id`.
    pub fn formatter(&self, id: &str) -> Formatter {
        Formatter::new(self.get(id))
    }

    /// Starts a message for whatever identifier `context` resolves to, or in
    /// the global format if it resolves to none.
    pub fn current_formatter(&self, context: &dyn PluginContext) -> Formatter {
        match context.plugin_id() {
            Some(id) => self.formatter(id),
            None => Formatter::new(self.global()),
        }
    }

    /// Starts a message with one styled fragment in the current format.
    pub fn styled(
        &self,
        context: &dyn PluginContext,
        category: Category,
        input: impl Into<Content>,
    ) -> Formatter {
        let mut fmt = self.current_formatter(context);
        fmt.styled(category, input);
        fmt
    }

    /// Starts a message with one substituted fragment in the current format.
    pub fn styled_args(
        &self,
        context: &dyn PluginContext,
        category: Category,
        pattern: &str,
        args: &[Arg],
    ) -> Formatter {
        let mut fmt = self.current_formatter(context);
        fmt.styled_args(category, pattern, args);
        fmt
    }

    /// Returns true if `id` has been resolved or registered.
    pub fn contains(&self, id: &str) -> bool {
        id == GLOBAL_ID || self.read_entries().contains_key(id)
    }

    /// Number of identifiers resolved so far, not counting the global one.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, id: &str) -> Entry {
        if let Some(entry) = self.read_entries().get(id) {
            return Arc::clone(entry);
        }
        let mut entries = self.write_entries();
        let entry = entries.entry(id.to_string()).or_insert_with(|| {
            tracing::debug!(id, "new format entry");
            Arc::new(OnceCell::new())
        });
        Arc::clone(entry)
    }

    fn load_or_persist(&self, id: &str, fallback: Arc<Format>) -> Arc<Format> {
        match self.store.read(id) {
            Ok(Some(format)) => return Arc::new(format),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to read format; using fallback");
                set_aside(&self.store, id, &e);
            }
        }
        if let Err(e) = self.store.write(id, &fallback) {
            tracing::warn!(id, error = %e, "failed to persist format");
        }
        fallback
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Entry>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Keeps an unparsable file as `<id>.<ext>.bak` so the write-back that
/// follows does not destroy the owner's edits.
fn set_aside(store: &FormatStore, id: &str, error: &FormatError) {
    if !matches!(error, FormatError::Parse { .. }) {
        return;
    }
    match store.backup(id) {
        Ok(path) => tracing::warn!(id, path = %path.display(), "kept unreadable format as backup"),
        Err(e) => tracing::warn!(id, error = %e, "failed to back up unreadable format"),
    }
}

macro_rules! registry_starters {
    ($($category:ident => $plain:ident, $args:ident;)*) => {
        impl FormatRegistry {
            $(
                pub fn $plain(&self, context: &dyn PluginContext, input: impl Into<Content>) -> Formatter {
                    self.styled(context, Category::$category, input)
                }

                pub fn $args(&self, context: &dyn PluginContext, pattern: &str, args: &[Arg]) -> Formatter {
                    self.styled_args(context, Category::$category, pattern, args)
                }
            )*
        }
    };
}

registry_starters! {
    Info => info, info_args;
    Subdued => subdued, subdued_args;
    Stress => stress, stress_args;
    Error => error, error_args;
    Warn => warn, warn_args;
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("global", &self.global)
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

//! The identifier of whoever is formatting right now.

/// Resolves which identifier a message is being formatted for.
///
/// Hosts usually implement this for their plugin handle. `None` means no
/// identifier applies and the global format is used.
pub trait PluginContext {
    fn plugin_id(&self) -> Option<&str>;
}

impl PluginContext for str {
    fn plugin_id(&self) -> Option<&str> {
        Some(self)
    }
}

impl PluginContext for String {
    fn plugin_id(&self) -> Option<&str> {
        Some(self)
    }
}

impl PluginContext for Option<&str> {
    fn plugin_id(&self) -> Option<&str> {
        *self
    }
}

impl PluginContext for Option<String> {
    fn plugin_id(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl<C: PluginContext + ?Sized> PluginContext for &C {
    fn plugin_id(&self) -> Option<&str> {
        (**self).plugin_id()
    }
}

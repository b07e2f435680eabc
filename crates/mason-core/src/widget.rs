//! Scoped mounting of third-party script widgets.
//!
//! A widget is a remote script plus the globals it reads on load. Mounting
//! through a [`WidgetRegistry`] returns a [`WidgetHandle`]; while it lives,
//! the widget id and its globals belong to it and nobody else may claim them.
//! Dropping the handle removes the script and clears the globals.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;
use thiserror::Error;

/// Prefix of injected script element ids.
pub const SCRIPT_ID_PREFIX: &str = "mason-widget-";

/// Errors from widget mounting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The id or a global is owned by a live handle.
    #[error("{0} is already claimed by a mounted widget")]
    Conflict(String),

    /// The host page rejected an operation.
    #[error("Host error: {0}")]
    Host(String),
}

/// Description of a script widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSpec {
    pub id: String,
    pub script_src: String,
    pub globals: BTreeMap<String, String>,
}

impl WidgetSpec {
    pub fn new(id: impl Into<String>, script_src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            script_src: script_src.into(),
            globals: BTreeMap::new(),
        }
    }

    pub fn with_global(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.globals.insert(name.into(), value.into());
        self
    }

    /// Element id of the injected `<script>`.
    pub fn script_id(&self) -> String {
        format!("{}{}", SCRIPT_ID_PREFIX, self.id)
    }
}

/// The page a widget is mounted into.
pub trait WidgetHost {
    fn set_global(&self, name: &str, value: &str) -> Result<(), WidgetError>;
    fn clear_global(&self, name: &str) -> Result<(), WidgetError>;
    /// Append an async `<script>` with the given element id.
    fn inject_script(&self, element_id: &str, src: &str) -> Result<(), WidgetError>;
    fn remove_script(&self, element_id: &str) -> Result<(), WidgetError>;
}

#[derive(Default)]
struct Claims {
    ids: HashSet<String>,
    globals: HashSet<String>,
}

/// Hands out widget handles and tracks which names are taken.
pub struct WidgetRegistry<H> {
    host: Rc<H>,
    claims: Rc<RefCell<Claims>>,
}

impl<H> Clone for WidgetRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            claims: Rc::clone(&self.claims),
        }
    }
}

impl<H: WidgetHost + 'static> WidgetRegistry<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Rc::new(host),
            claims: Rc::new(RefCell::new(Claims::default())),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether a widget with this id is mounted.
    pub fn is_mounted(&self, id: &str) -> bool {
        self.claims.borrow().ids.contains(id)
    }

    /// Set the widget's globals and inject its script.
    ///
    /// If the host fails partway, whatever was applied is rolled back.
    pub fn mount(&self, spec: WidgetSpec) -> Result<WidgetHandle, WidgetError> {
        {
            let claims = self.claims.borrow();
            if claims.ids.contains(&spec.id) {
                return Err(WidgetError::Conflict(format!("widget {:?}", spec.id)));
            }
            if let Some(name) = spec.globals.keys().find(|g| claims.globals.contains(*g)) {
                return Err(WidgetError::Conflict(format!("global {:?}", name)));
            }
        }

        let script_id = spec.script_id();
        let mut applied = Vec::with_capacity(spec.globals.len());
        let result = spec
            .globals
            .iter()
            .try_for_each(|(name, value)| {
                self.host.set_global(name, value)?;
                applied.push(name.as_str());
                Ok::<(), WidgetError>(())
            })
            .and_then(|()| self.host.inject_script(&script_id, &spec.script_src));

        if let Err(e) = result {
            for name in applied {
                let _ = self.host.clear_global(name);
            }
            tracing::warn!(widget = spec.id.as_str(), error = %e, "widget mount failed");
            return Err(e);
        }

        {
            let mut claims = self.claims.borrow_mut();
            claims.ids.insert(spec.id.clone());
            claims.globals.extend(spec.globals.keys().cloned());
        }
        tracing::debug!(widget = spec.id.as_str(), src = spec.script_src.as_str(), "widget mounted");

        let host: Rc<dyn WidgetHost> = self.host.clone();
        Ok(WidgetHandle {
            spec,
            script_id,
            host,
            claims: Rc::clone(&self.claims),
        })
    }
}

/// A mounted widget. Unmounts on drop.
pub struct WidgetHandle {
    spec: WidgetSpec,
    script_id: String,
    host: Rc<dyn WidgetHost>,
    claims: Rc<RefCell<Claims>>,
}

impl WidgetHandle {
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn script_id(&self) -> &str {
        &self.script_id
    }
}

impl std::fmt::Debug for WidgetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetHandle")
            .field("id", &self.spec.id)
            .field("script_id", &self.script_id)
            .finish()
    }
}

impl Drop for WidgetHandle {
    fn drop(&mut self) {
        if let Err(e) = self.host.remove_script(&self.script_id) {
            tracing::warn!(widget = self.spec.id.as_str(), error = %e, "failed to remove widget script");
        }
        for name in self.spec.globals.keys() {
            if let Err(e) = self.host.clear_global(name) {
                tracing::warn!(global = name.as_str(), error = %e, "failed to clear widget global");
            }
        }

        let mut claims = self.claims.borrow_mut();
        claims.ids.remove(&self.spec.id);
        for name in self.spec.globals.keys() {
            claims.globals.remove(name);
        }
        tracing::debug!(widget = self.spec.id.as_str(), "widget unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records host calls and current page state.
    #[derive(Default)]
    struct FakeHost {
        globals: RefCell<BTreeMap<String, String>>,
        scripts: RefCell<BTreeMap<String, String>>,
        fail_inject: bool,
    }

    impl WidgetHost for FakeHost {
        fn set_global(&self, name: &str, value: &str) -> Result<(), WidgetError> {
            self.globals.borrow_mut().insert(name.into(), value.into());
            Ok(())
        }

        fn clear_global(&self, name: &str) -> Result<(), WidgetError> {
            self.globals.borrow_mut().remove(name);
            Ok(())
        }

        fn inject_script(&self, element_id: &str, src: &str) -> Result<(), WidgetError> {
            if self.fail_inject {
                return Err(WidgetError::Host("no document body".into()));
            }
            self.scripts.borrow_mut().insert(element_id.into(), src.into());
            Ok(())
        }

        fn remove_script(&self, element_id: &str) -> Result<(), WidgetError> {
            self.scripts.borrow_mut().remove(element_id);
            Ok(())
        }
    }

    fn feedback() -> WidgetSpec {
        WidgetSpec::new("feedback", "https://widgets.example/feedback.js")
            .with_global("FeedbackProjectId", "mason-web")
            .with_global("FeedbackLoaded", "false")
    }

    #[test]
    fn test_mount_sets_globals_and_script() {
        let registry = WidgetRegistry::new(FakeHost::default());
        let handle = registry.mount(feedback()).unwrap();

        assert_eq!(handle.script_id(), "mason-widget-feedback");
        assert!(registry.is_mounted("feedback"));
        assert_eq!(
            registry.host().scripts.borrow().get("mason-widget-feedback").map(String::as_str),
            Some("https://widgets.example/feedback.js")
        );
        assert_eq!(registry.host().globals.borrow().len(), 2);
    }

    #[test]
    fn test_drop_releases_everything() {
        let registry = WidgetRegistry::new(FakeHost::default());
        let handle = registry.mount(feedback()).unwrap();
        drop(handle);

        assert!(!registry.is_mounted("feedback"));
        assert!(registry.host().scripts.borrow().is_empty());
        assert!(registry.host().globals.borrow().is_empty());
        assert!(registry.mount(feedback()).is_ok());
    }

    #[test]
    fn test_duplicate_id_conflicts() {
        let registry = WidgetRegistry::new(FakeHost::default());
        let _handle = registry.mount(feedback()).unwrap();

        let err = registry
            .mount(WidgetSpec::new("feedback", "https://other.example/w.js"))
            .unwrap_err();
        assert!(matches!(err, WidgetError::Conflict(_)));
    }

    #[test]
    fn test_shared_global_conflicts() {
        let registry = WidgetRegistry::new(FakeHost::default());
        let _handle = registry.mount(feedback()).unwrap();

        let other = WidgetSpec::new("survey", "https://other.example/s.js")
            .with_global("FeedbackLoaded", "true");
        assert!(matches!(registry.mount(other), Err(WidgetError::Conflict(_))));
        assert_eq!(
            registry.host().globals.borrow().get("FeedbackLoaded").map(String::as_str),
            Some("false")
        );
    }

    #[test]
    fn test_failed_inject_rolls_back() {
        let registry = WidgetRegistry::new(FakeHost {
            fail_inject: true,
            ..Default::default()
        });

        assert!(matches!(registry.mount(feedback()), Err(WidgetError::Host(_))));
        assert!(registry.host().globals.borrow().is_empty());
        assert!(!registry.is_mounted("feedback"));
    }
}

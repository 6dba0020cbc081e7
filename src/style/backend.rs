//! Style backend: the seam between the engine and the native toolkit.
//!
//! The engine never talks to a toolkit style registry directly; it hands a
//! composed [`StyleSpec`] to a [`StyleBackend`] and gets back an opaque
//! [`StyleHandle`]. The in-memory backend below is the reference
//! implementation: real toolkit adapters live in the embedding application.

use slotmap::SlotMap;

use crate::style::key::StyleKey;
use crate::style::spec::StyleSpec;

slotmap::new_key_type! {
    /// Opaque identifier for a registered native style. Factories attach
    /// this to concrete widgets at construction time.
    pub struct StyleHandle;
}

/// The toolkit rejected a composed style. The cache guarantees nothing is
/// stored for the key, so a corrected retry can succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("style registration rejected for {key:?}: {reason}")]
pub struct StyleRegistrationError {
    pub key: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// StyleBackend
// ---------------------------------------------------------------------------

/// A native style registry. Single-threaded by design: registration mutates
/// toolkit state and must happen on the UI thread.
pub trait StyleBackend {
    /// Register a style under its canonical key and mint a handle for it.
    ///
    /// Called at most once per distinct key for the process lifetime; the
    /// cache enforces that, not the backend.
    fn register(
        &mut self,
        key: &StyleKey,
        spec: &StyleSpec,
    ) -> Result<StyleHandle, StyleRegistrationError>;
}

// ---------------------------------------------------------------------------
// InMemoryBackend
// ---------------------------------------------------------------------------

/// A registered style held by the in-memory backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredStyle {
    pub name: String,
    pub spec: StyleSpec,
}

/// Slotmap-backed registry. Used headless and in tests; its registration
/// counter is how the at-most-one-registration property is observed.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    styles: SlotMap<StyleHandle, RegisteredStyle>,
    registrations: usize,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of `register` calls that succeeded.
    pub fn registration_count(&self) -> usize {
        self.registrations
    }

    /// Look up a registered style by handle.
    pub fn get(&self, handle: StyleHandle) -> Option<&RegisteredStyle> {
        self.styles.get(handle)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl StyleBackend for InMemoryBackend {
    fn register(
        &mut self,
        key: &StyleKey,
        spec: &StyleSpec,
    ) -> Result<StyleHandle, StyleRegistrationError> {
        if spec.is_empty() {
            return Err(StyleRegistrationError {
                key: key.as_str().to_string(),
                reason: "spec has no attributes set".into(),
            });
        }
        self.registrations += 1;
        let handle = self.styles.insert(RegisteredStyle {
            name: key.as_str().to_string(),
            spec: spec.clone(),
        });
        Ok(handle)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

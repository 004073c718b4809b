//! Isolation realms
//!
//! An [`IsolationKey`] names the domain (a hosted sub-application, a tenant)
//! whose callers share one logger context. Hosts mark the realm a thread is
//! running in with [`enter`]; backends consult [`current`] when the caller
//! did not pass an explicit boundary.

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use crate::constants::DEFAULT_REALM;

/// Name of an isolation domain
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsolationKey(Arc<str>);

impl IsolationKey {
    /// Create a key
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Key of the default realm
    pub fn default_realm() -> Self {
        Self::new(DEFAULT_REALM)
    }

    /// Realm name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IsolationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IsolationKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

thread_local! {
    static CURRENT: RefCell<Option<IsolationKey>> = const { RefCell::new(None) };
}

/// Realm the calling thread is currently running in, if any
pub fn current() -> Option<IsolationKey> {
    CURRENT.with(|cell| cell.borrow().clone())
}

/// Mark the calling thread as running in `key` until the guard drops
pub fn enter(key: IsolationKey) -> RealmGuard {
    let previous = CURRENT.with(|cell| cell.borrow_mut().replace(key));
    RealmGuard { previous }
}

/// Restores the previously entered realm on drop
#[must_use = "the realm is left as soon as the guard is dropped"]
#[derive(Debug)]
pub struct RealmGuard {
    previous: Option<IsolationKey>,
}

impl Drop for RealmGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT.with(|cell| *cell.borrow_mut() = previous);
    }
}

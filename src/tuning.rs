//! Live parameter publication.
//!
//! A [`ParamsHandle`] is shared between the frame loop and whatever control
//! surface adjusts parameters (a UI, a socket, a test). Writers validate and
//! swap in a new immutable [`GlintParams`]; the frame loop takes one
//! [`ParamsSnapshot`] per frame and never observes a half-applied update.
use crate::detector::params::GlintParams;
use crate::error::TrackerError;
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

struct Shared {
    current: RwLock<Arc<GlintParams>>,
    version: AtomicU64,
}

/// Cloneable handle to the live parameter set.
#[derive(Clone)]
pub struct ParamsHandle {
    shared: Arc<Shared>,
}

/// Parameters as seen by one frame.
#[derive(Clone, Debug)]
pub struct ParamsSnapshot {
    pub params: Arc<GlintParams>,
    /// Incremented by every accepted publication; starts at 0.
    pub version: u64,
}

impl ParamsHandle {
    pub fn new(initial: GlintParams) -> Result<Self, TrackerError> {
        initial.validate()?;
        Ok(Self {
            shared: Arc::new(Shared {
                current: RwLock::new(Arc::new(initial)),
                version: AtomicU64::new(0),
            }),
        })
    }

    /// Replace the parameter set. Invalid sets are rejected and the previous
    /// one stays in effect.
    pub fn publish(&self, params: GlintParams) -> Result<u64, TrackerError> {
        self.update(|p| *p = params)
    }

    /// Edit a copy of the current parameters and publish it.
    ///
    /// The write lock is held from the copy to the swap, so concurrent
    /// updates are serialized and none is lost.
    pub fn update<F: FnOnce(&mut GlintParams)>(&self, edit: F) -> Result<u64, TrackerError> {
        let mut guard = self
            .shared
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = GlintParams::clone(&guard);
        edit(&mut next);
        if let Err(err) = next.validate() {
            warn!("ParamsHandle: rejected update: {err}");
            return Err(err);
        }
        *guard = Arc::new(next);
        let version = self.shared.version.fetch_add(1, Ordering::AcqRel) + 1;
        drop(guard);
        debug!("ParamsHandle: published version {version}");
        Ok(version)
    }

    pub fn snapshot(&self) -> ParamsSnapshot {
        let guard = self
            .shared
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        ParamsSnapshot {
            params: Arc::clone(&guard),
            version: self.shared.version.load(Ordering::Acquire),
        }
    }

    pub fn version(&self) -> u64 {
        self.shared.version.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for ParamsHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamsHandle")
            .field("version", &self.version())
            .finish()
    }
}

//! # Geolocation
//!
//! Resolving "where am I" is a suspending operation with three terminal
//! failures: permission denied, position unavailable, timeout. Each maps to
//! its own [`FetchError`] variant so the page can show a distinct reason.
//!
//! [`CachedLocator`] enforces the acquisition bounds (10 s timeout, positions
//! up to 5 minutes old are reused) around any concrete [`Locator`].

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::fetch::FetchError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoOptions {
    pub timeout: Duration,
    pub maximum_age: Duration,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(5 * 60),
        }
    }
}

/// Something that can tell where the user is.
#[async_trait]
pub trait Locator: Send + Sync {
    async fn locate(&self) -> Result<Position, FetchError>;
}

/// Location access switched off by configuration.
pub struct DeniedLocator;

#[async_trait]
impl Locator for DeniedLocator {
    async fn locate(&self) -> Result<Position, FetchError> {
        Err(FetchError::Permission)
    }
}

/// A position given up front, e.g. from the config file.
pub struct FixedLocator {
    position: Option<Position>,
}

impl FixedLocator {
    pub fn new(position: Option<Position>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Locator for FixedLocator {
    async fn locate(&self) -> Result<Position, FetchError> {
        self.position.ok_or(FetchError::Unavailable)
    }
}

/// Applies [`GeoOptions`] to an inner locator.
pub struct CachedLocator {
    inner: Arc<dyn Locator>,
    options: GeoOptions,
    last_fix: Mutex<Option<(Instant, Position)>>,
}

impl CachedLocator {
    pub fn new(inner: Arc<dyn Locator>, options: GeoOptions) -> Self {
        Self {
            inner,
            options,
            last_fix: Mutex::new(None),
        }
    }

    fn cached(&self) -> Option<Position> {
        let guard = self.last_fix.lock().ok()?;
        let (taken_at, position) = (*guard)?;
        (taken_at.elapsed() <= self.options.maximum_age).then_some(position)
    }

    fn remember(&self, position: Position) {
        if let Ok(mut guard) = self.last_fix.lock() {
            *guard = Some((Instant::now(), position));
        }
    }
}

#[async_trait]
impl Locator for CachedLocator {
    async fn locate(&self) -> Result<Position, FetchError> {
        if let Some(position) = self.cached() {
            debug!("Reusing cached position {:?}", position);
            return Ok(position);
        }

        match tokio::time::timeout(self.options.timeout, self.inner.locate()).await {
            Err(_) => {
                warn!("Location lookup timed out after {:?}", self.options.timeout);
                Err(FetchError::Timeout)
            }
            Ok(Ok(position)) => {
                info!(
                    "Located at {:.4}, {:.4}",
                    position.latitude, position.longitude
                );
                self.remember(position);
                Ok(position)
            }
            Ok(Err(e @ (FetchError::Permission | FetchError::Unavailable | FetchError::Timeout))) => {
                Err(e)
            }
            Ok(Err(other)) => {
                warn!("Location source failed: {other}");
                Err(FetchError::Unavailable)
            }
        }
    }
}

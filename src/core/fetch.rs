//! # Fetch State
//!
//! The lifecycle of one asynchronous load, plus the error taxonomy every
//! provider reports into and the request tickets that implement
//! last-initiated-wins ordering.
//!
//! ```text
//! Idle ──begin──▶ Loading ──resolve──▶ Ready(T) | Failed(reason)
//!                   ▲                      │
//!                   └──────── begin ───────┘
//! ```

use std::fmt;

/// State of an asynchronous data load. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    /// Moves to `Loading`, dropping whatever was held before.
    pub fn begin(&mut self) {
        *self = FetchState::Loading;
    }

    /// Replaces the state wholesale with the outcome of a request.
    pub fn resolve(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(data) => FetchState::Ready(data),
            Err(e) => FetchState::Failed(e.to_string()),
        };
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Ready(_) => "ready",
            FetchState::Failed(_) => "failed",
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Everything that can go wrong while fetching a remote resource.
///
/// All variants end up as a user-facing reason string at the page boundary;
/// nothing propagates further up.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// No response could be obtained (DNS, refused connection, TLS...).
    Transport(String),
    /// A response arrived with a non-2xx status.
    Status { status: u16, body: String },
    /// The body did not have the expected shape.
    Shape(String),
    /// The user refused location access.
    Permission,
    /// The position could not be determined.
    Unavailable,
    /// A bounded wait was exceeded.
    Timeout,
}

/// Coarse classification used by fallback and messaging policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Unauthorized,
    RateLimited,
    Network,
    Other,
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Status { status: 404, .. } => FailureKind::NotFound,
            FetchError::Status { status: 401, .. } => FailureKind::Unauthorized,
            FetchError::Status { status: 429, .. } => FailureKind::RateLimited,
            FetchError::Transport(_) => FailureKind::Network,
            _ => FailureKind::Other,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, body } if body.is_empty() => {
                write!(f, "API error (HTTP {status})")
            }
            FetchError::Status { status, body } => write!(f, "API error (HTTP {status}): {body}"),
            FetchError::Shape(msg) => write!(f, "unexpected response: {msg}"),
            FetchError::Permission => write!(f, "Location access was denied"),
            FetchError::Unavailable => write!(f, "Location information is unavailable"),
            FetchError::Timeout => write!(f, "Timed out while getting the current location"),
        }
    }
}

impl std::error::Error for FetchError {}

// ============================================================================
// Tickets
// ============================================================================

/// Tag carried by one initiated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tickets and remembers the newest one.
///
/// Results tagged with anything but the newest ticket are superseded and must
/// be discarded, whatever order they resolve in.
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued != 0 && ticket.0 == self.issued
    }

    pub fn latest(&self) -> Option<Ticket> {
        (self.issued != 0).then_some(Ticket(self.issued))
    }
}

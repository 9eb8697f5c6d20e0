//! Session teardown notification port.
//!
//! When a token refresh fails terminally the client clears stored tokens and
//! notifies the host application, which typically navigates to its login
//! screen. The hook is a trait rather than a hard-wired navigation so the
//! core stays usable from TUIs, services, and tests alike.

/// Host-supplied hook for authentication lifecycle events.
pub trait AuthEvents: Send + Sync {
    /// Called after stored tokens have been cleared because a refresh
    /// attempt failed or no refresh token existed. The failed request's
    /// error is surfaced to its caller separately.
    fn on_auth_failure(&self) {}
}

/// Default handler that ignores all events.
pub struct NoopAuthEvents;

impl AuthEvents for NoopAuthEvents {}

impl<F> AuthEvents for F
where
    F: Fn() + Send + Sync,
{
    fn on_auth_failure(&self) {
        self()
    }
}

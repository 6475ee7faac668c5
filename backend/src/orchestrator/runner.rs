//! Session runner: the owned 1 Hz tick thread
//!
//! Each active session owns one background thread that advances the
//! physiology once per wall-clock second for the session's lifetime. The
//! thread is explicitly lifetime-scoped: `stop()` (also run on drop) signals
//! shutdown over a channel and joins, so teardown is deterministic rather
//! than garbage-collection-dependent.
//!
//! A single mutex guards the whole session, so a tick and an
//! `execute_action` call can never interleave their reads/writes of the
//! shared physiology state.

use crate::orchestrator::session::Session;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Nominal wall-clock period of one physiology tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns a session and its tick thread
pub struct SessionRunner {
    session: Arc<Mutex<Session>>,
    shutdown_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SessionRunner {
    /// Spawn the tick thread at the nominal 1-second period
    pub fn spawn(session: Session) -> Self {
        Self::with_period(session, TICK_PERIOD)
    }

    /// Spawn with a custom period (tests shrink it to avoid real seconds)
    pub fn with_period(session: Session, period: Duration) -> Self {
        let session = Arc::new(Mutex::new(session));
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let tick_session = Arc::clone(&session);
        let handle = thread::Builder::new()
            .name("patient-sim-tick".into())
            .spawn(move || run_tick_loop(&tick_session, &shutdown_rx, period))
            .expect("Failed to spawn session tick thread");

        Self {
            session,
            shutdown_tx,
            handle: Some(handle),
        }
    }

    /// Shared handle to the session; lock it to execute actions or read
    /// the composed view
    pub fn session(&self) -> Arc<Mutex<Session>> {
        Arc::clone(&self.session)
    }

    /// Stop the tick thread and wait for it to exit
    ///
    /// Idempotent; after this returns no further ticks occur.
    pub fn stop(&mut self) {
        // Send may fail if the thread already exited; join either way
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SessionRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The tick loop. Runs until shutdown signal or channel disconnect.
fn run_tick_loop(
    session: &Mutex<Session>,
    shutdown_rx: &mpsc::Receiver<()>,
    period: Duration,
) {
    let mut next_tick = Instant::now() + period;

    loop {
        // Wait out the remainder of the period, waking early on shutdown
        let wait = next_tick.saturating_duration_since(Instant::now());
        match shutdown_rx.recv_timeout(wait) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {}
        }

        if let Ok(mut session) = session.lock() {
            session.tick();
        }

        next_tick += period;
    }
}

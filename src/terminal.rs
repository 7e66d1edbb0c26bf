//! Terminal helpers: clearing the frame and holding the final result.

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyEventKind},
    queue,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Queue a full-screen clear and move the cursor home.
/// The caller flushes.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Keep the final frame on screen for `duration`.
///
/// When stdin is a terminal any key press ends the hold early.
pub fn hold(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    if !io::stdin().is_terminal() {
        thread::sleep(duration);
        return;
    }

    if let Err(e) = terminal::enable_raw_mode() {
        warn!(error = %e, "terminal:raw mode unavailable, sleeping instead");
        thread::sleep(duration);
        return;
    }

    // Keys typed while the wheel was spinning are still queued.
    let discarded = drain_pending(|| event::poll(Duration::ZERO), event::read);
    if discarded > 0 {
        debug!(discarded, "terminal:dropped input queued during spin");
    }

    wait_for_key(Instant::now() + duration);

    if let Err(e) = terminal::disable_raw_mode() {
        warn!(error = %e, "terminal:failed to restore cooked mode");
    }
}

/// Read and discard events for as long as `poll` reports one ready.
/// Returns how many were discarded.
fn drain_pending<P, R>(mut poll: P, mut read: R) -> usize
where
    P: FnMut() -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    let mut discarded = 0;
    while let Ok(true) = poll() {
        if read().is_err() {
            break;
        }
        discarded += 1;
    }
    discarded
}

fn wait_for_key(deadline: Instant) {
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }

        match event::poll(remaining) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    debug!(code = ?key.code, "terminal:hold ended by key press");
                    return;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "terminal:event read failed");
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                    return;
                }
            },
            Ok(false) => return,
            Err(e) => {
                warn!(error = %e, "terminal:event poll failed");
                thread::sleep(remaining);
                return;
            }
        }
    }
}

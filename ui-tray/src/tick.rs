use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{Timelike, Utc};
use ksni::Handle;

use crate::tray_app::WorldClockTray;

/// Wake at each minute boundary and nudge the tray so the panel label
/// re-renders. The menu model is left alone; it refreshes on open.
///
/// Polls the stop flag about once a second, so teardown never waits out
/// the rest of a minute.
pub fn spawn_minute_tick(
    handle: Handle<WorldClockTray>,
    stop: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last_minute = Utc::now().minute();
        loop {
            if stop.load(Ordering::SeqCst) {
                return;
            }
            thread::sleep(Duration::from_millis(1000));
            if stop.load(Ordering::SeqCst) {
                return;
            }
            let minute = Utc::now().minute();
            if minute != last_minute {
                last_minute = minute;
                let _ = handle.update(|_tray| {});
            }
        }
    })
}

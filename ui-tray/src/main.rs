mod i18n;
mod settings_file;
mod tick;
mod tray_app;

use std::fs::OpenOptions;
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clock::{zone_catalog, SelectionController};

fn main() -> anyhow::Result<()> {
    // Enable logging when the user sets RUST_LOG (kept quiet by default).
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    log::info!(
        "initializing {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // Single-instance guard: two trays fighting over one settings file is
    // never what the user wants.
    let _instance_lock = {
        let dir = std::env::var_os("XDG_RUNTIME_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/tmp"));
        let lock_path = dir.join("worldclock-ui-tray.lock");
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(&lock_path)?;

        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
        if rc != 0 {
            log::warn!("another instance is already running, exiting");
            return Ok(());
        }

        file
    };

    log::info!(
        "enabling {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // Build the selection state and overlay whatever was persisted. A
    // missing or corrupt settings file is logged inside and the widget
    // comes up with its defaults.
    let store = settings_file::FileStore::at_default_path();
    let catalog = zone_catalog();
    let controller = SelectionController::new(&catalog, store);

    // Minimal StatusNotifierItem (SNI) tray.
    // Notes:
    // - Works best on KDE / bars that support SNI (e.g. waybar's tray module).
    // - GNOME may require an extension to show AppIndicators.
    let stop = Arc::new(AtomicBool::new(false));
    let tray = tray_app::WorldClockTray::new(controller, stop.clone());
    let service = ksni::TrayService::new(tray);

    let handle = service.handle();
    let _tick = tick::spawn_minute_tick(handle.clone(), stop);

    // Blocks until the tray is closed (or the process is killed); the
    // Quit item saves and exits from inside the menu callback.
    if let Err(e) = service.run() {
        // If the host doesn't support SNI / DBus isn't available, we surface it.
        log::error!("tray service exited with error: {e:?}");
    }

    Ok(())
}

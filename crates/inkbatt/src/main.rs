//! Battery indicator daemon for EPDC e-paper panels.
//!
//! Maps the display's pixel memory, then polls the battery's sysfs
//! capacity attribute and redraws a battery glyph with a partial-refresh
//! request for just the glyph's damage rect. Runs until SIGINT or
//! SIGTERM.

mod battery;
mod indicator;

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use mxcfb::{Framebuffer, Rect};

use battery::BatterySource;

const POLL_INTERVAL: Duration = Duration::from_secs(10);
const SHUTDOWN_POLL: Duration = Duration::from_millis(250);

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

extern "C" fn request_shutdown(_signal: libc::c_int) {
    // The only async-signal-safe thing to do here: flag and return.
    SHUTDOWN.store(true, Ordering::SeqCst);
}

fn install_signal_handlers() {
    // SAFETY: the handler only stores to a static atomic.
    unsafe {
        libc::signal(libc::SIGINT, request_shutdown as libc::sighandler_t);
        libc::signal(libc::SIGTERM, request_shutdown as libc::sighandler_t);
    }
}

fn shutdown_requested() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    install_signal_handlers();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("startup failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), mxcfb::Error> {
    let mut fb = Framebuffer::open()?;
    fb.log_device_info();

    // Start from a known-white panel; e-paper keeps whatever the previous
    // process left behind.
    clear_screen(&mut fb);

    let source = BatterySource::new();
    poll_loop(&mut fb, &source);

    log::info!("shutting down");
    Ok(())
}

fn clear_screen(fb: &mut Framebuffer) {
    let geometry = *fb.geometry();
    let screen = Rect {
        top: 0,
        left: 0,
        width: geometry.xres,
        height: geometry.yres,
    };
    indicator::fill_rect(fb, indicator::BACKGROUND, screen).ok();
    fb.request_refresh(screen);
}

fn poll_loop(fb: &mut Framebuffer, source: &BatterySource) {
    while !shutdown_requested() {
        match source.read_percent() {
            Ok(level) => {
                log::info!("battery at {level}%");
                if let Ok(region) = indicator::draw_battery(fb, level) {
                    fb.request_refresh(region);
                }
            }
            // Unreadable is not 0%: leave the last good glyph on glass.
            Err(err) => log::warn!("battery capacity unavailable: {err}"),
        }
        sleep_until_next_cycle();
    }
}

/// Pace the loop, in slices short enough that a shutdown signal is
/// honored promptly.
fn sleep_until_next_cycle() {
    let deadline = Instant::now() + POLL_INTERVAL;
    while !shutdown_requested() {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep((deadline - now).min(SHUTDOWN_POLL));
    }
}

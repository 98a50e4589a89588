//! Fixed-interval polling tied to component lifetime.

use gloo_timers::callback::Interval;
use leptos::prelude::on_cleanup;
use leptos::__reexports::send_wrapper::SendWrapper;

/// Run `f` immediately, then every `interval_ms` until the calling
/// component is disposed. The interval handle is dropped (and therefore
/// cancelled) on cleanup.
pub fn use_poll(interval_ms: u32, f: impl Fn() + 'static) {
    f();
    let interval = SendWrapper::new(Interval::new(interval_ms, f));
    on_cleanup(move || drop(interval));
}

/// Like [`use_poll`], but without the immediate first call. Used where
/// the initial fetch is already triggered elsewhere (an effect tracking
/// filter signals).
pub fn use_interval(interval_ms: u32, f: impl Fn() + 'static) {
    let interval = SendWrapper::new(Interval::new(interval_ms, f));
    on_cleanup(move || drop(interval));
}

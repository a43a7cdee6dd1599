use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Emits `on_tick` once a second while `running` is true.
///
/// The interval is dropped when `running` turns false or the component
/// unmounts, so a closed dialog never receives a stray tick.
#[hook]
pub fn use_ticker(running: bool, on_tick: Callback<()>) {
    use_effect_with(running, move |running| {
        let interval = running.then(|| Interval::new(1_000, move || on_tick.emit(())));
        move || drop(interval)
    });
}

use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Current wall-clock time in the header, refreshed every second. The
/// interval is dropped on unmount.
#[function_component(Clock)]
pub fn clock() -> Html {
    let now = use_state(Local::now);

    {
        let now = now.clone();
        use_effect_with((), move |()| {
            let interval = Interval::new(1_000, move || now.set(Local::now()));
            move || drop(interval)
        });
    }

    html! {
        <span class="clock">{ now.format("%a %e %b %Y, %H:%M:%S").to_string() }</span>
    }
}

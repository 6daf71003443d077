//! Log Panel
//!
//! Debug builds only: shows the lines buffered by the rolling logger.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let lines = RwSignal::new(Vec::<String>::new());

    let refresh = move |_: ev::MouseEvent| lines.set(rolling_logger::recent_records());

    cfg!(debug_assertions).then(|| {
        view! {
            <details class="log-panel">
                <summary on:click=refresh>"Recent log"</summary>
                <button class="icon-btn" title="Refresh log" on:click=refresh>"↻"</button>
                <pre>{move || lines.get().join("\n")}</pre>
            </details>
        }
    })
}

pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application frame: header on top, the active page below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div style="height: 100vh; display: flex; flex-direction: column;">
            <header::Header />
            <main style="flex: 1; overflow-y: auto; padding: 20px;">{children()}</main>
        </div>
    }
}

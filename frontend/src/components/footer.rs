//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                "GraminScore • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}

//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"GraminScore"</h1>
            <p class="subtitle">
                "Upload photos of a house's roof, walls and door. "
                "Each image is checked and scored for structural condition, "
                "and a downloadable report is prepared."
            </p>
        </div>
    }
}

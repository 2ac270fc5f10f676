//! Top Navigation

use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="nav-content">
                <span class="logo">"AGRIPREDICT SYSTEMS"</span>
                <div class="nav-links">
                    <a href="#predict">"Analyze"</a>
                    <a href="#knowledge">"Insights"</a>
                    <a href="#news">"Research"</a>
                    <a href="#contact">"Contact"</a>
                </div>
            </div>
        </nav>
    }
}

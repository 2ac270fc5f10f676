//! Page Footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2026 AGRIPREDICT SYSTEMS | QUANTITATIVE AGRONOMY FOR GLOBAL SUSTAINABILITY"</p>
        </footer>
    }
}

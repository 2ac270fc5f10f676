//! Hero Banner

use leptos::prelude::*;

use crate::dom;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero-overlay">
                <div class="sub-tag">"Agricultural Intelligence Engine"</div>
                <h1>"Predictive Agronomic Analytics"</h1>
                <p>
                    "Utilizing high-fidelity neural networks to optimize production outcomes \
                    across complex Wheat, Corn, Rice, and Soybean ecosystems."
                </p>

                <div class="crop-indicator-bar">
                    <span>"WHEAT"</span>
                    <span>"CORN"</span>
                    <span>"RICE"</span>
                    <span>"SOYBEAN"</span>
                </div>

                <button class="cta-btn" on:click=move |_| dom::scroll_to("predict")>
                    "Initialize Field Analysis"
                </button>
            </div>
        </header>
    }
}

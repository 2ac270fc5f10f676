//! Contact Section
//!
//! The inquiry form is acknowledgment-only: nothing is transmitted.

use leptos::prelude::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    let (status, set_status) = signal(String::new());

    view! {
        <div class="contact-container">
            <div class="contact-info">
                <h2>"Technical Consultation"</h2>
                <p>"Engage with our agronomic specialists for high-level support."</p>
                <div class="contact-details">
                    <p><strong>"HQ: "</strong>"Nairobi, Kenya"</p>
                    <p><strong>"Direct: "</strong>"+254 721 634 764"</p>
                    <p><strong>"Corporate: "</strong>"hoziyanarachel7@gmail.com"</p>
                </div>
            </div>
            <form
                class="contact-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    set_status
                        .set("Inquiry received. Our technical team will reach out to you shortly.".into());
                }
            >
                <input type="text" placeholder="Full Name" required />
                <input type="email" placeholder="Corporate Email" required />
                <textarea placeholder="Specify your inquiry..." rows="4" required></textarea>
                <button type="submit" class="predict-btn">"SUBMIT REQUEST"</button>
                <Show when=move || !status.with(|s| s.is_empty())>
                    <p class="success-msg">{move || status.get()}</p>
                </Show>
            </form>
        </div>
    }
}

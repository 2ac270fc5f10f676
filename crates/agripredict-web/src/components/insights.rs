//! Intelligence Reports Grid

use leptos::prelude::*;

use agripredict_core::Insight;

/// The three advisory cards plus the static model-integrity card
#[component]
pub fn InsightsGrid(insights: Memo<[Insight; 3]>) -> impl IntoView {
    view! {
        <div class="info-grid">
            <For
                each=move || insights.get()
                key=|insight| insight.body.clone()
                children=move |insight| {
                    view! {
                        <div class="info-card fade-in">
                            <h4>{insight.title}</h4>
                            <p>{insight.body.clone()}</p>
                        </div>
                    }
                }
            />
            <div class="info-card fade-in">
                <div class="status-indicator">"● SYSTEM LIVE"</div>
                <h4>"Model Integrity"</h4>
                <p>
                    "Running " <strong>"RandomForestRegressor"</strong>
                    ". Cross-validation accuracy maintained at 94.2% for supported soil profiles."
                </p>
            </div>
        </div>
    }
}

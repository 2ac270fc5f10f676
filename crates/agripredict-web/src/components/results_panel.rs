//! Results Panel

use leptos::prelude::*;

use crate::state::PredictState;

/// Projection output region. Exactly one of the four visual states renders
/// at a time, keyed off [`PredictState`].
#[component]
pub fn ResultsPanel(state: ReadSignal<PredictState>) -> impl IntoView {
    view! {
        <div id="results" class="results-panel">
            {move || match state.get() {
                PredictState::Loading => view! {
                    <div class="placeholder">
                        <div class="loading-ring"></div>
                        <p>"Initializing Neural Engine..."</p>
                        <small class="server-note">
                            "First request may take 30s to wake the server."
                        </small>
                    </div>
                }
                .into_any(),
                PredictState::Ready(result) => {
                    let tag_class = if result.low_yield_alert {
                        "status-tag alert"
                    } else {
                        "status-tag optimal"
                    };
                    view! {
                        <div class="yield-display fade-in">
                            <h4>"PROJECTION OUTPUT"</h4>
                            <h2 class="yield-value">
                                {result.predicted_yield.to_string()}
                                " "
                                <small>"MT/Ha"</small>
                            </h2>
                            <div class=tag_class>{result.recommendation}</div>
                        </div>
                    }
                    .into_any()
                }
                PredictState::Errored(notice) => view! {
                    <div class="placeholder error-notice">
                        <p>{notice}</p>
                        <small class="server-note">"Resubmit to retry the projection."</small>
                    </div>
                }
                .into_any(),
                PredictState::Idle => view! {
                    <div class="placeholder">
                        <div class="loading-ring idle"></div>
                        <p>"Awaiting system input for biometric analysis."</p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

//! Landing Page
//!
//! Owns the predict-cycle state: the form draft, the submission state
//! machine, and the last successful outcome that drives the insight cards.

use leptos::prelude::*;

use agripredict_core::{select_insights, FieldParameters, FormDraft, PredictionResult};

use crate::api;
use crate::components::{
    ContactSection, Footer, Hero, InsightsGrid, Navbar, PredictForm, ResearchSection,
    ResultsPanel,
};
use crate::dom;
use crate::state::{PredictState, SubmissionTracker};

#[component]
pub fn HomePage() -> impl IntoView {
    let draft = RwSignal::new(FormDraft::default());
    let (state, set_state) = signal(PredictState::Idle);
    let (outcome, set_outcome) = signal(None::<(FieldParameters, PredictionResult)>);
    let tracker = RwSignal::new(SubmissionTracker::default());

    let loading = Signal::derive(move || state.with(PredictState::is_loading));

    // A failure never clears the last good outcome, so the insight cards keep
    // describing the most recent successful projection.
    let insights = Memo::new(move |_| {
        outcome.with(|outcome| match outcome {
            Some((params, result)) => select_insights(Some(result), params),
            None => select_insights(None, &FieldParameters::default()),
        })
    });

    let submit = move |()| {
        if state.with_untracked(PredictState::is_loading) {
            return;
        }

        let params = match draft.with_untracked(FormDraft::parse) {
            Ok(params) => params,
            Err(err) => {
                set_state.set(PredictState::Errored(err.to_string()));
                return;
            }
        };

        let ticket = tracker.try_update(SubmissionTracker::begin).unwrap_or_default();
        set_state.set(PredictState::Loading);

        leptos::task::spawn_local(async move {
            let resolution = api::predict(&params).await;

            // A newer submission owns the UI now; drop this response
            if !tracker.with_untracked(|t| t.is_current(ticket)) {
                return;
            }

            match resolution {
                Ok(result) => {
                    set_outcome.set(Some((params, result.clone())));
                    set_state.set(PredictState::Ready(result));
                }
                Err(err) => {
                    gloo::console::error!(format!("prediction request failed: {err}"));
                    set_state.set(PredictState::Errored(api::COLD_START_NOTICE.into()));
                }
            }
        });
    };

    // Runs after the DOM commits, so the panel exists before we scroll to it
    Effect::new(move |_| {
        if state.with(|s| s.result().is_some()) {
            dom::scroll_to("results");
        }
    });

    view! {
        <div class="home">
            <Navbar />
            <Hero />

            <section id="predict" class="main-section">
                <div class="section-header">
                    <h2>"Yield Projection Engine"</h2>
                    <div class="underline"></div>
                </div>

                <div class="dashboard">
                    <PredictForm draft=draft loading=loading on_submit=submit />
                    <ResultsPanel state=state />
                </div>
            </section>

            <section id="knowledge" class="info-section alternate-bg">
                <div class="section-header">
                    <h2>"Intelligence Reports"</h2>
                    <div class="underline"></div>
                </div>
                <InsightsGrid insights=insights />
            </section>

            <section id="news" class="info-section">
                <div class="section-header">
                    <h2>"Multidisciplinary Research"</h2>
                    <div class="underline"></div>
                </div>
                <ResearchSection />
            </section>

            <section id="contact" class="info-section alternate-bg">
                <ContactSection />
            </section>

            <Footer />
        </div>
    }
}

//! Advisory Insights
//!
//! The "Intelligence Reports" blocks shown beside the predictor: one of three
//! fixed sets of three, keyed off the latest prediction's low-yield flag. The
//! deficit set names the submitted NPK blend; the other two are static copy.

use crate::model::{FieldParameters, PredictionResult};

/// A single advisory text block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub body: String,
}

impl Insight {
    fn new(title: &'static str, body: impl Into<String>) -> Self {
        Self { title, body: body.into() }
    }
}

/// Shown before the first prediction arrives
pub fn standby_insights() -> [Insight; 3] {
    [
        Insight::new(
            "Soil Analysis",
            "System standby. Awaiting field parameters for nutrient bioavailability analysis.",
        ),
        Insight::new(
            "Climate Resilience",
            "Environmental monitoring active. Ready to calculate thermal stress factors.",
        ),
        Insight::new(
            "Strategic Planning",
            "Yield buffer analysis will appear here after your first projection.",
        ),
    ]
}

/// Shown when the projection clears the historical threshold
pub fn optimal_insights() -> [Insight; 3] {
    [
        Insight::new(
            "Optimal Biological Path",
            "The current field profile is aligned with maximum genetic potential for the selected variety.",
        ),
        Insight::new(
            "Systemic Stability",
            "Environmental variables are within the optimal physiological range, ensuring efficient photosynthesis and biomass accumulation.",
        ),
        Insight::new(
            "Future Sustainability",
            "Current soil health is robust. This is an ideal window for planning long-term nitrogen fixation cycles.",
        ),
    ]
}

/// Shown on a low-yield alert; the first block names the submitted NPK blend
pub fn deficit_insights(params: &FieldParameters) -> [Insight; 3] {
    [
        Insight::new(
            "Nutrient Optimization",
            format!(
                "Current NPK levels ({}) indicate a nutritional deficit. Target fertilization is required to stabilize the projected yield.",
                params.npk_label()
            ),
        ),
        Insight::new(
            "Soil Stress Mitigation",
            "Low Soil Quality index detected. Implementing regenerative organic matter could improve moisture retention and nutrient uptake.",
        ),
        Insight::new(
            "Adaptive Management",
            "Yield is below the 15% historical threshold. Consider adjusting irrigation frequency to mitigate high-temperature stress.",
        ),
    ]
}

/// Select the advisory set for the latest prediction, if any
pub fn select_insights(
    result: Option<&PredictionResult>,
    params: &FieldParameters,
) -> [Insight; 3] {
    match result {
        None => standby_insights(),
        Some(result) if result.low_yield_alert => deficit_insights(params),
        Some(_) => optimal_insights(),
    }
}

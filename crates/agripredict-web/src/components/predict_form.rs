//! Predictor Form

use leptos::prelude::*;

use agripredict_core::{CropType, FormDraft, NumericField, SoilType};

/// Field-parameter entry form. Each control edits exactly one draft field;
/// validation happens in the submit handler, not here.
#[component]
pub fn PredictForm<F>(
    draft: RwSignal<FormDraft>,
    loading: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="input-card">
            <h3>"Field Parameters"</h3>
            <form on:submit={
                let on_submit = on_submit.clone();
                move |ev| {
                    ev.prevent_default();
                    on_submit(());
                }
            }>
                <div class="form-grid">
                    <div class="input-box">
                        <label>"Crop Variety"</label>
                        <select on:change=move |ev| {
                            if let Some(crop) = event_target_value(&ev)
                                .parse::<u8>()
                                .ok()
                                .and_then(CropType::from_code)
                            {
                                draft.update(|d| d.crop_type = crop);
                            }
                        }>
                            {CropType::ALL
                                .into_iter()
                                .map(|crop| {
                                    view! {
                                        <option
                                            value=crop.code().to_string()
                                            selected=move || draft.with(|d| d.crop_type == crop)
                                        >
                                            {crop.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="input-box">
                        <label>"Soil Taxonomy"</label>
                        <select on:change=move |ev| {
                            if let Some(soil) = event_target_value(&ev)
                                .parse::<u8>()
                                .ok()
                                .and_then(SoilType::from_code)
                            {
                                draft.update(|d| d.soil_type = soil);
                            }
                        }>
                            {SoilType::ALL
                                .into_iter()
                                .map(|soil| {
                                    view! {
                                        <option
                                            value=soil.code().to_string()
                                            selected=move || draft.with(|d| d.soil_type == soil)
                                        >
                                            {soil.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <NumberField label="Nitrogen (N)" field=NumericField::Nitrogen draft=draft />
                    <NumberField label="Phosphorus (P)" field=NumericField::Phosphorus draft=draft />
                    <NumberField label="Potassium (K)" field=NumericField::Potassium draft=draft />
                    <NumberField
                        label="Soil pH"
                        field=NumericField::SoilPh
                        draft=draft
                        step="0.1"
                    />
                    <NumberField
                        label="Temperature (°C)"
                        field=NumericField::Temperature
                        draft=draft
                    />
                    <NumberField label="Humidity (%)" field=NumericField::Humidity draft=draft />
                    <NumberField
                        label="Wind Speed (km/h)"
                        field=NumericField::WindSpeed
                        draft=draft
                    />
                    <NumberField
                        label="Soil Quality"
                        field=NumericField::SoilQuality
                        draft=draft
                    />
                    <NumberField label="Month" field=NumericField::Month draft=draft step="1" />
                    <NumberField label="Year" field=NumericField::Year draft=draft step="1" />
                </div>

                <button type="submit" class="predict-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "PROCESSING DATA..." } else { "EXECUTE ANALYTIC MODEL" }}
                </button>
            </form>
        </div>
    }
}

/// One labelled numeric input backed by a single draft field
#[component]
fn NumberField(
    label: &'static str,
    field: NumericField,
    draft: RwSignal<FormDraft>,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="input-box">
            <label>{label}</label>
            <input
                type="number"
                step=step.unwrap_or("any")
                prop:value=move || draft.with(|d| d.numeric(field).to_string())
                on:input=move |ev| {
                    draft.update(|d| d.set_numeric(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}

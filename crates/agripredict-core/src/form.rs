//! Predictor Form Draft
//!
//! Raw text captured from the numeric inputs, parsed and validated when the
//! user submits. Non-numeric text is rejected at this boundary and never
//! reaches the wire.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::model::{CropType, FieldParameters, SoilType};

/// Identifies one editable numeric input on the predictor form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericField {
    SoilPh,
    Temperature,
    Humidity,
    WindSpeed,
    Nitrogen,
    Phosphorus,
    Potassium,
    SoilQuality,
    Month,
    Year,
}

impl NumericField {
    /// Human-readable name used in validation messages
    pub fn label(self) -> &'static str {
        match self {
            Self::SoilPh => "Soil pH",
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::WindSpeed => "Wind Speed",
            Self::Nitrogen => "Nitrogen (N)",
            Self::Phosphorus => "Phosphorus (P)",
            Self::Potassium => "Potassium (K)",
            Self::SoilQuality => "Soil Quality",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

/// Editable state behind the predictor form.
///
/// Numeric fields hold whatever the user typed; `parse` converts the draft
/// into wire-ready [`FieldParameters`] or reports the first invalid field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormDraft {
    pub crop_type: CropType,
    pub soil_type: SoilType,
    pub soil_ph: String,
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub soil_quality: String,
    pub month: String,
    pub year: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self::from_parameters(&FieldParameters::default())
    }
}

impl FormDraft {
    /// Pre-fill the draft from known-good parameters
    pub fn from_parameters(params: &FieldParameters) -> Self {
        Self {
            crop_type: params.crop_type,
            soil_type: params.soil_type,
            soil_ph: params.soil_ph.to_string(),
            temperature: params.temperature.to_string(),
            humidity: params.humidity.to_string(),
            wind_speed: params.wind_speed.to_string(),
            nitrogen: params.nitrogen.to_string(),
            phosphorus: params.phosphorus.to_string(),
            potassium: params.potassium.to_string(),
            soil_quality: params.soil_quality.to_string(),
            month: params.month.to_string(),
            year: params.year.to_string(),
        }
    }

    /// Current raw text of one numeric field
    pub fn numeric(&self, field: NumericField) -> &str {
        match field {
            NumericField::SoilPh => &self.soil_ph,
            NumericField::Temperature => &self.temperature,
            NumericField::Humidity => &self.humidity,
            NumericField::WindSpeed => &self.wind_speed,
            NumericField::Nitrogen => &self.nitrogen,
            NumericField::Phosphorus => &self.phosphorus,
            NumericField::Potassium => &self.potassium,
            NumericField::SoilQuality => &self.soil_quality,
            NumericField::Month => &self.month,
            NumericField::Year => &self.year,
        }
    }

    /// Replace one numeric field's raw text, leaving every other field untouched
    pub fn set_numeric(&mut self, field: NumericField, value: String) {
        let slot = match field {
            NumericField::SoilPh => &mut self.soil_ph,
            NumericField::Temperature => &mut self.temperature,
            NumericField::Humidity => &mut self.humidity,
            NumericField::WindSpeed => &mut self.wind_speed,
            NumericField::Nitrogen => &mut self.nitrogen,
            NumericField::Phosphorus => &mut self.phosphorus,
            NumericField::Potassium => &mut self.potassium,
            NumericField::SoilQuality => &mut self.soil_quality,
            NumericField::Month => &mut self.month,
            NumericField::Year => &mut self.year,
        };
        *slot = value;
    }

    /// Validate the draft and convert it into wire-ready parameters
    pub fn parse(&self) -> Result<FieldParameters> {
        Ok(FieldParameters {
            crop_type: self.crop_type,
            soil_type: self.soil_type,
            soil_ph: parse_float(&self.soil_ph, NumericField::SoilPh)?,
            temperature: parse_float(&self.temperature, NumericField::Temperature)?,
            humidity: parse_float(&self.humidity, NumericField::Humidity)?,
            wind_speed: parse_float(&self.wind_speed, NumericField::WindSpeed)?,
            nitrogen: parse_float(&self.nitrogen, NumericField::Nitrogen)?,
            phosphorus: parse_float(&self.phosphorus, NumericField::Phosphorus)?,
            potassium: parse_float(&self.potassium, NumericField::Potassium)?,
            soil_quality: parse_float(&self.soil_quality, NumericField::SoilQuality)?,
            month: parse_int(&self.month, NumericField::Month)?,
            year: parse_int(&self.year, NumericField::Year)?,
        })
    }
}

fn parse_float(raw: &str, field: NumericField) -> Result<f64> {
    // "NaN" and "inf" satisfy f64::from_str but are useless to the model
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid(raw, field))
}

fn parse_int<T: std::str::FromStr>(raw: &str, field: NumericField) -> Result<T> {
    raw.trim().parse().map_err(|_| invalid(raw, field))
}

fn invalid(raw: &str, field: NumericField) -> CoreError {
    debug!(field = field.label(), raw, "rejected non-numeric input");
    CoreError::InvalidField { field: field.label() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_parses_to_defaults() {
        let params = FormDraft::default().parse().unwrap();
        assert_eq!(params, FieldParameters::default());
    }

    #[test]
    fn test_set_numeric_changes_exactly_one_field() {
        let original = FormDraft::default();
        let mut draft = original.clone();
        draft.set_numeric(NumericField::Nitrogen, "61".into());

        assert_eq!(draft.nitrogen, "61");

        // Restoring the edited field must make the drafts identical again
        draft.set_numeric(NumericField::Nitrogen, original.nitrogen.clone());
        assert_eq!(draft, original);
    }

    #[test]
    fn test_every_numeric_field_routes_to_its_own_slot() {
        let fields = [
            NumericField::SoilPh,
            NumericField::Temperature,
            NumericField::Humidity,
            NumericField::WindSpeed,
            NumericField::Nitrogen,
            NumericField::Phosphorus,
            NumericField::Potassium,
            NumericField::SoilQuality,
            NumericField::Month,
            NumericField::Year,
        ];

        for (i, field) in fields.into_iter().enumerate() {
            let mut draft = FormDraft::default();
            let marker = format!("{i}{i}{i}");
            draft.set_numeric(field, marker.clone());
            assert_eq!(draft.numeric(field), marker);

            // No other field picked up the marker
            let touched = fields
                .into_iter()
                .filter(|f| draft.numeric(*f) == marker)
                .count();
            assert_eq!(touched, 1);
        }
    }

    #[test]
    fn test_non_numeric_input_rejected_with_field_name() {
        let mut draft = FormDraft::default();
        draft.set_numeric(NumericField::Temperature, "warm".into());

        let err = draft.parse().unwrap_err();
        assert_eq!(err, CoreError::InvalidField { field: "Temperature" });
        assert_eq!(err.to_string(), "Temperature must be a number");
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut draft = FormDraft::default();
        draft.set_numeric(NumericField::Nitrogen, String::new());

        let err = draft.parse().unwrap_err();
        assert_eq!(err, CoreError::InvalidField { field: "Nitrogen (N)" });
    }

    #[test]
    fn test_nan_text_rejected() {
        let mut draft = FormDraft::default();
        draft.set_numeric(NumericField::Humidity, "NaN".into());

        assert!(draft.parse().is_err());
    }

    #[test]
    fn test_fractional_month_rejected() {
        let mut draft = FormDraft::default();
        draft.set_numeric(NumericField::Month, "1.5".into());

        let err = draft.parse().unwrap_err();
        assert_eq!(err, CoreError::InvalidField { field: "Month" });
    }

    #[test]
    fn test_whitespace_tolerated() {
        let mut draft = FormDraft::default();
        draft.set_numeric(NumericField::SoilPh, " 7.2 ".into());

        let params = draft.parse().unwrap();
        assert_eq!(params.soil_ph, 7.2);
    }
}

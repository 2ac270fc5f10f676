//! Domain Models
//!
//! Data types shared between the predictor form, the prediction client, and
//! the advisory selector. Field names and enum codes mirror the feature
//! encoding of the external regression model and must stay bit-exact.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Supported crop varieties with their model feature codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CropType {
    Corn = 1,
    Rice = 7,
    Soybean = 8,
    Wheat = 9,
}

impl CropType {
    /// Display order used by the crop selector
    pub const ALL: [Self; 4] = [Self::Wheat, Self::Corn, Self::Rice, Self::Soybean];

    /// Feature code expected by the external model
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a variety by feature code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Corn),
            7 => Some(Self::Rice),
            8 => Some(Self::Soybean),
            9 => Some(Self::Wheat),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Corn => "Corn",
            Self::Rice => "Rice",
            Self::Soybean => "Soybean",
            Self::Wheat => "Wheat",
        }
    }
}

impl From<CropType> for u8 {
    fn from(crop: CropType) -> Self {
        crop.code()
    }
}

impl TryFrom<u8> for CropType {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(CoreError::UnknownCropCode(code))
    }
}

/// Soil taxonomy classes with their model feature codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SoilType {
    Clay = 0,
    Loamy = 2,
    Sandy = 3,
    Silt = 4,
}

impl SoilType {
    /// Display order used by the soil selector
    pub const ALL: [Self; 4] = [Self::Clay, Self::Sandy, Self::Loamy, Self::Silt];

    /// Feature code expected by the external model
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a soil class by feature code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Clay),
            2 => Some(Self::Loamy),
            3 => Some(Self::Sandy),
            4 => Some(Self::Silt),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Clay => "Clay",
            Self::Loamy => "Loamy",
            Self::Sandy => "Sandy",
            Self::Silt => "Silt",
        }
    }
}

impl From<SoilType> for u8 {
    fn from(soil: SoilType) -> Self {
        soil.code()
    }
}

impl TryFrom<u8> for SoilType {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(CoreError::UnknownSoilCode(code))
    }
}

/// The full agronomic input set sent to the prediction service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldParameters {
    #[serde(rename = "Crop_Type")]
    pub crop_type: CropType,

    #[serde(rename = "Soil_Type")]
    pub soil_type: SoilType,

    #[serde(rename = "Soil_pH")]
    pub soil_ph: f64,

    /// Mean temperature in °C
    #[serde(rename = "Temperature")]
    pub temperature: f64,

    /// Relative humidity in %
    #[serde(rename = "Humidity")]
    pub humidity: f64,

    /// Wind speed in km/h
    #[serde(rename = "Wind_Speed")]
    pub wind_speed: f64,

    /// Nitrogen level
    #[serde(rename = "N")]
    pub nitrogen: f64,

    /// Phosphorus level
    #[serde(rename = "P")]
    pub phosphorus: f64,

    /// Potassium level
    #[serde(rename = "K")]
    pub potassium: f64,

    /// Soil quality index (0-100)
    #[serde(rename = "Soil_Quality")]
    pub soil_quality: f64,

    /// Projection month (1-12)
    pub month: u32,

    /// Projection year
    pub year: i32,
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self {
            crop_type: CropType::Wheat,
            soil_type: SoilType::Loamy,
            soil_ph: 6.5,
            temperature: 25.0,
            humidity: 70.0,
            wind_speed: 12.0,
            nitrogen: 50.0,
            phosphorus: 40.0,
            potassium: 30.0,
            soil_quality: 80.0,
            month: 1,
            year: 2026,
        }
    }
}

impl FieldParameters {
    /// NPK levels formatted the way fertilizer blends are labelled
    pub fn npk_label(&self) -> String {
        format!("{}-{}-{}", self.nitrogen, self.phosphorus, self.potassium)
    }
}

/// Response body of the prediction service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Projected yield in MT/Ha
    pub predicted_yield: f64,

    /// Qualitative recommendation for the grower
    pub recommendation: String,

    /// Set when the projection falls below the historical threshold
    pub low_yield_alert: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_codes_bit_exact() {
        assert_eq!(CropType::Wheat.code(), 9);
        assert_eq!(CropType::Corn.code(), 1);
        assert_eq!(CropType::Rice.code(), 7);
        assert_eq!(CropType::Soybean.code(), 8);
    }

    #[test]
    fn test_soil_codes_bit_exact() {
        assert_eq!(SoilType::Clay.code(), 0);
        assert_eq!(SoilType::Sandy.code(), 3);
        assert_eq!(SoilType::Loamy.code(), 2);
        assert_eq!(SoilType::Silt.code(), 4);
    }

    #[test]
    fn test_crop_from_code_roundtrip() {
        for crop in CropType::ALL {
            assert_eq!(CropType::from_code(crop.code()), Some(crop));
        }
        assert_eq!(CropType::from_code(2), None);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = CropType::try_from(5).unwrap_err();
        assert_eq!(err, CoreError::UnknownCropCode(5));
        let err = SoilType::try_from(1).unwrap_err();
        assert_eq!(err, CoreError::UnknownSoilCode(1));
    }

    #[test]
    fn test_parameters_wire_names() {
        let value = serde_json::to_value(FieldParameters::default()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "Crop_Type",
            "Soil_Type",
            "Soil_pH",
            "Temperature",
            "Humidity",
            "Wind_Speed",
            "N",
            "P",
            "K",
            "Soil_Quality",
            "month",
            "year",
        ] {
            assert!(object.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(object.len(), 12);

        assert_eq!(value["Crop_Type"], 9);
        assert_eq!(value["Soil_Type"], 2);
        assert_eq!(value["N"], 50.0);
        assert_eq!(value["month"], 1);
        assert_eq!(value["year"], 2026);
    }

    #[test]
    fn test_parameters_enum_roundtrip() {
        let mut params = FieldParameters::default();
        params.crop_type = CropType::Rice;
        params.soil_type = SoilType::Silt;

        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"Crop_Type\":7"));
        assert!(json.contains("\"Soil_Type\":4"));

        let back: FieldParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_prediction_result_decode() {
        let body = r#"{"predicted_yield": 4.2, "recommendation": "Maintain", "low_yield_alert": false}"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.predicted_yield, 4.2);
        assert_eq!(result.recommendation, "Maintain");
        assert!(!result.low_yield_alert);
    }

    #[test]
    fn test_npk_label_drops_trailing_zeroes() {
        assert_eq!(FieldParameters::default().npk_label(), "50-40-30");

        let mut params = FieldParameters::default();
        params.nitrogen = 52.5;
        assert_eq!(params.npk_label(), "52.5-40-30");
    }
}

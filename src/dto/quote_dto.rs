use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use validator::Validate;

use crate::model::moving::{AdditionalService, ApartmentSize, MoveKind, MovingRequest, MovingType, OfficeSize};
use crate::service::estimator::{MAX_DISTANCE_KM, MAX_FLOOR};
use crate::util::error::{FieldError, sort_field_errors};

// --- Validated DTOs for request validation ---

/// Calculator payload as posted by the site. Enum-valued fields arrive as
/// strings and numeric fields as raw JSON values, so unknown or mistyped
/// values surface as field errors rather than body parse failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePriceQuoteRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "moving type is required"))]
    pub moving_type: String,

    pub size: Option<String>,

    pub floor: Option<Value>,

    #[serde(alias = "distance")]
    #[validate(required(message = "distance is required"))]
    pub distance_km: Option<Value>,

    #[serde(default)]
    pub additional_services: Option<Vec<String>>,
}

impl CreatePriceQuoteRequest {
    /// Converts the payload into the estimator's typed input, collecting
    /// every domain error instead of stopping at the first.
    pub fn to_moving_request(&self) -> Result<MovingRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let moving_type = self.moving_type.trim();
        let kind = if moving_type.is_empty() {
            errors.push(FieldError::new("movingType", "moving type is required"));
            None
        } else {
            match moving_type.parse::<MovingType>() {
                Ok(moving_type) => self.move_kind(moving_type).map_err(|e| errors.push(e)).ok(),
                Err(msg) => {
                    errors.push(FieldError::new("movingType", msg));
                    None
                }
            }
        };

        let mut additional_services = BTreeSet::new();
        for raw in self.additional_services.iter().flatten() {
            match raw.trim().parse::<AdditionalService>() {
                Ok(service) => {
                    additional_services.insert(service);
                }
                Err(msg) => errors.push(FieldError::new("additionalServices", msg)),
            }
        }

        let floor = match self.floor.as_ref() {
            None => Some(0),
            Some(raw) => match numeric(raw) {
                Some(f) if f.fract() == 0.0 && (0.0..=MAX_FLOOR as f64).contains(&f) => Some(f as u32),
                _ => {
                    errors.push(FieldError::new("floor", format!("floor must be a whole number between 0 and {}", MAX_FLOOR)));
                    None
                }
            },
        };

        let distance_km = match self.distance_km.as_ref() {
            Some(raw) => match numeric(raw) {
                Some(d) if d > 0.0 && d <= MAX_DISTANCE_KM => Some(d),
                Some(_) => {
                    errors.push(FieldError::new(
                        "distanceKm",
                        format!("distance must be above 0 and at most {} km", MAX_DISTANCE_KM),
                    ));
                    None
                }
                None => {
                    errors.push(FieldError::new("distanceKm", "distance must be a number"));
                    None
                }
            },
            None => {
                errors.push(FieldError::new("distanceKm", "distance is required"));
                None
            }
        };

        match (kind, floor, distance_km) {
            (Some(kind), Some(floor), Some(distance_km)) if errors.is_empty() => Ok(MovingRequest {
                kind,
                floor,
                distance_km,
                additional_services,
            }),
            _ => {
                sort_field_errors(&mut errors);
                Err(errors)
            }
        }
    }

    fn move_kind(&self, moving_type: MovingType) -> Result<MoveKind, FieldError> {
        let size = self.size.as_deref().map(str::trim).filter(|s| !s.is_empty());
        match moving_type {
            MovingType::Apartment => {
                let size = size.ok_or_else(|| FieldError::new("size", "size is required for apartment moves"))?;
                size.parse::<ApartmentSize>()
                    .map(MoveKind::Apartment)
                    .map_err(|msg| FieldError::new("size", msg))
            }
            MovingType::Office => {
                let size = size.ok_or_else(|| FieldError::new("size", "size is required for office moves"))?;
                size.parse::<OfficeSize>()
                    .map(MoveKind::Office)
                    .map_err(|msg| FieldError::new("size", msg))
            }
            MovingType::SingleItem => Ok(MoveKind::SingleItem),
            MovingType::Storage => Ok(MoveKind::Storage),
        }
    }
}

/// Accepts JSON numbers and numeric strings, as posted by form inputs.
fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

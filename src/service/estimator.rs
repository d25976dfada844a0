//! Price estimation for the moving calculator.
//!
//! The estimate is the sum of a base price chosen by moving type and size,
//! a distance surcharge beyond the free radius, a floor carry-up surcharge
//! and a flat fee per additional service. All amounts are whole currency
//! units; the only fractional input is the distance, whose surcharge is
//! rounded half away from zero.

use serde::Serialize;
use thiserror::Error;

use crate::model::moving::{AdditionalService, ApartmentSize, MoveKind, MovingRequest, OfficeSize};

pub const FREE_DISTANCE_KM: f64 = 15.0;
pub const PRICE_PER_KM: f64 = 10.0;
pub const MAX_DISTANCE_KM: f64 = 2000.0;
pub const MAX_FLOOR: u32 = 50;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("invalid {field}: {message}")]
    InvalidRequest { field: &'static str, message: String },
}

/// Per-component view of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    pub base_price: u32,
    pub distance_surcharge: u32,
    pub floor_surcharge: u32,
    pub services_surcharge: u32,
    pub total: u32,
}

pub fn estimate(request: &MovingRequest) -> Result<u32, EstimateError> {
    estimate_breakdown(request).map(|b| b.total)
}

pub fn estimate_breakdown(request: &MovingRequest) -> Result<EstimateBreakdown, EstimateError> {
    check_request(request)?;

    let base_price = base_price(request.kind);
    let distance_surcharge = distance_surcharge(request.distance_km);
    let floor_surcharge = floor_surcharge(request.floor);
    let services_surcharge = request
        .additional_services
        .iter()
        .map(|s| service_price(*s))
        .sum();

    Ok(EstimateBreakdown {
        base_price,
        distance_surcharge,
        floor_surcharge,
        services_surcharge,
        total: base_price + distance_surcharge + floor_surcharge + services_surcharge,
    })
}

fn check_request(request: &MovingRequest) -> Result<(), EstimateError> {
    let distance = request.distance_km;
    if !distance.is_finite() || distance <= 0.0 {
        return Err(EstimateError::InvalidRequest {
            field: "distanceKm",
            message: format!("distance must be a positive number of kilometres, got {}", distance),
        });
    }
    if distance > MAX_DISTANCE_KM {
        return Err(EstimateError::InvalidRequest {
            field: "distanceKm",
            message: format!("distance must not exceed {} km", MAX_DISTANCE_KM),
        });
    }
    if request.floor > MAX_FLOOR {
        return Err(EstimateError::InvalidRequest {
            field: "floor",
            message: format!("floor must not exceed {}", MAX_FLOOR),
        });
    }
    Ok(())
}

pub fn base_price(kind: MoveKind) -> u32 {
    match kind {
        MoveKind::Apartment(ApartmentSize::Small) => 1500,
        MoveKind::Apartment(ApartmentSize::Medium) => 2500,
        MoveKind::Apartment(ApartmentSize::Large) => 3500,
        MoveKind::Office(OfficeSize::Small) => 2000,
        MoveKind::Office(OfficeSize::Medium) => 3500,
        MoveKind::Office(OfficeSize::Large) => 5000,
        // medium -> large step of 1500 carried one size further
        MoveKind::Office(OfficeSize::VeryLarge) => 6500,
        MoveKind::SingleItem => 600,
        MoveKind::Storage => 800,
    }
}

/// `max(0, km - 15) * 10`, rounded half away from zero. Expects a checked distance.
pub fn distance_surcharge(distance_km: f64) -> u32 {
    let billable = (distance_km - FREE_DISTANCE_KM).max(0.0);
    (billable * PRICE_PER_KM).round() as u32
}

pub fn floor_surcharge(floor: u32) -> u32 {
    if floor <= 2 {
        floor * 100
    } else {
        200 + (floor - 2) * 150
    }
}

pub fn service_price(service: AdditionalService) -> u32 {
    match service {
        AdditionalService::Packing => 500,
        AdditionalService::Disassembly => 300,
        AdditionalService::Storage => 800,
        AdditionalService::Insurance => 200,
    }
}

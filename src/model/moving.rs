use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Kind of move offered by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovingType {
    Apartment,
    Office,
    #[serde(alias = "single-item")]
    SingleItem,
    Storage,
}

impl MovingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovingType::Apartment => "apartment",
            MovingType::Office => "office",
            MovingType::SingleItem => "singleItem",
            MovingType::Storage => "storage",
        }
    }
}

impl FromStr for MovingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(MovingType::Apartment),
            "office" => Ok(MovingType::Office),
            "singleItem" | "single-item" => Ok(MovingType::SingleItem),
            "storage" => Ok(MovingType::Storage),
            other => Err(format!(
                "unknown moving type '{}', expected one of apartment, office, singleItem, storage",
                other
            )),
        }
    }
}

impl fmt::Display for MovingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApartmentSize {
    Small,
    Medium,
    Large,
}

impl ApartmentSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApartmentSize::Small => "small",
            ApartmentSize::Medium => "medium",
            ApartmentSize::Large => "large",
        }
    }
}

impl FromStr for ApartmentSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(ApartmentSize::Small),
            "medium" => Ok(ApartmentSize::Medium),
            "large" => Ok(ApartmentSize::Large),
            other => Err(format!(
                "unknown apartment size '{}', expected one of small, medium, large",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfficeSize {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl OfficeSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfficeSize::Small => "small",
            OfficeSize::Medium => "medium",
            OfficeSize::Large => "large",
            OfficeSize::VeryLarge => "veryLarge",
        }
    }
}

impl FromStr for OfficeSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(OfficeSize::Small),
            "medium" => Ok(OfficeSize::Medium),
            "large" => Ok(OfficeSize::Large),
            "veryLarge" => Ok(OfficeSize::VeryLarge),
            other => Err(format!(
                "unknown office size '{}', expected one of small, medium, large, veryLarge",
                other
            )),
        }
    }
}

/// Optional extras that can be booked with any move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdditionalService {
    Packing,
    Disassembly,
    Storage,
    Insurance,
}

impl AdditionalService {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdditionalService::Packing => "packing",
            AdditionalService::Disassembly => "disassembly",
            AdditionalService::Storage => "storage",
            AdditionalService::Insurance => "insurance",
        }
    }
}

impl FromStr for AdditionalService {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "packing" => Ok(AdditionalService::Packing),
            "disassembly" => Ok(AdditionalService::Disassembly),
            "storage" => Ok(AdditionalService::Storage),
            "insurance" => Ok(AdditionalService::Insurance),
            other => Err(format!(
                "unknown additional service '{}', expected one of packing, disassembly, storage, insurance",
                other
            )),
        }
    }
}

/// Moving type together with the size it requires, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Apartment(ApartmentSize),
    Office(OfficeSize),
    SingleItem,
    Storage,
}

impl MoveKind {
    pub fn moving_type(&self) -> MovingType {
        match self {
            MoveKind::Apartment(_) => MovingType::Apartment,
            MoveKind::Office(_) => MovingType::Office,
            MoveKind::SingleItem => MovingType::SingleItem,
            MoveKind::Storage => MovingType::Storage,
        }
    }

    pub fn size_label(&self) -> Option<&'static str> {
        match self {
            MoveKind::Apartment(size) => Some(size.as_str()),
            MoveKind::Office(size) => Some(size.as_str()),
            MoveKind::SingleItem | MoveKind::Storage => None,
        }
    }
}

/// Structured calculator input consumed by the estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingRequest {
    pub kind: MoveKind,
    pub floor: u32,
    pub distance_km: f64,
    pub additional_services: BTreeSet<AdditionalService>,
}

impl MovingRequest {
    pub fn new(kind: MoveKind, distance_km: f64) -> Self {
        MovingRequest {
            kind,
            floor: 0,
            distance_km,
            additional_services: BTreeSet::new(),
        }
    }

    pub fn with_floor(mut self, floor: u32) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_service(mut self, service: AdditionalService) -> Self {
        self.additional_services.insert(service);
        self
    }
}

use super::{Coordinates, Timestamp, Unmodeled};
use crate::catalog::ItemName;
use crate::decimal::Decimal;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlantedCrop {
    /// Crop name as written in the snapshot.
    pub name: String,
    pub planted_at: Timestamp,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub amount: Decimal,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

#[cfg(feature = "serde")]
fn one() -> Decimal {
    Decimal::ONE
}

/// A crop plot on the map. Only plots with coordinates need watering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CropPlot {
    pub created_at: Timestamp,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub coordinates: Option<Coordinates>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub crop: Option<PlantedCrop>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

impl CropPlot {
    pub fn empty(coordinates: Coordinates) -> Self {
        Self {
            created_at: Timestamp::EPOCH,
            coordinates: Some(coordinates),
            crop: None,
            extra: Unmodeled::default(),
        }
    }

    pub fn planted(coordinates: Coordinates, name: ItemName, planted_at: Timestamp) -> Self {
        Self {
            crop: Some(PlantedCrop {
                name: name.to_string(),
                planted_at,
                amount: Decimal::ONE,
                extra: Unmodeled::default(),
            }),
            ..Self::empty(coordinates)
        }
    }

    /// Placed and growing something.
    pub fn is_planted(&self) -> bool {
        self.coordinates.is_some() && self.crop.is_some()
    }
}

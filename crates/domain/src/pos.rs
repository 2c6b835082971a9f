//! Pos: a point of sale where coffee is available on campus.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CampusCoffeeError, ValidationError};
use crate::id::PosId;
use crate::model::DomainModel;
use crate::time::{Timestamp, now};

/// Campus a point of sale is located on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Campus {
    Altstadt,
    Bergheim,
    Neuenheim,
}

impl Campus {
    /// Stable label used for storage and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Altstadt => "altstadt",
            Self::Bergheim => "bergheim",
            Self::Neuenheim => "neuenheim",
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Campus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "altstadt" => Ok(Self::Altstadt),
            "bergheim" => Ok(Self::Bergheim),
            "neuenheim" => Ok(Self::Neuenheim),
            other => Err(ValidationError::UnknownCampus(other.to_string())),
        }
    }
}

/// Kind of point of sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosType {
    VendingMachine,
    CoffeeShop,
    Bakery,
}

impl PosType {
    /// Stable label used for storage and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VendingMachine => "vending_machine",
            Self::CoffeeShop => "coffee_shop",
            Self::Bakery => "bakery",
        }
    }
}

impl fmt::Display for PosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vending_machine" => Ok(Self::VendingMachine),
            "coffee_shop" => Ok(Self::CoffeeShop),
            "bakery" => Ok(Self::Bakery),
            other => Err(ValidationError::UnknownPosType(other.to_string())),
        }
    }
}

/// A point of sale for coffee somewhere on campus.
///
/// `id` is `None` until the storage layer assigns a key. Names are unique
/// across the system; uniqueness is enforced by storage, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    pub id: Option<PosId>,
    pub name: String,
    pub description: String,
    pub campus: Campus,
    pub pos_type: PosType,
    pub created_at: Timestamp,
}

impl Pos {
    /// Create a builder for constructing a [`Pos`].
    #[must_use]
    pub fn builder() -> PosBuilder {
        PosBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CampusCoffeeError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CampusCoffeeError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

impl DomainModel<PosId> for Pos {
    const NAME: &'static str = "Pos";

    fn id(&self) -> Option<PosId> {
        self.id
    }

    fn set_id(&mut self, id: PosId) {
        self.id = Some(id);
    }
}

/// Step-by-step builder for [`Pos`].
#[derive(Debug, Default)]
pub struct PosBuilder {
    id: Option<PosId>,
    name: Option<String>,
    description: Option<String>,
    campus: Option<Campus>,
    pos_type: Option<PosType>,
    created_at: Option<Timestamp>,
}

impl PosBuilder {
    #[must_use]
    pub fn id(mut self, id: PosId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn campus(mut self, campus: Campus) -> Self {
        self.campus = Some(campus);
        self
    }

    #[must_use]
    pub fn pos_type(mut self, pos_type: PosType) -> Self {
        self.pos_type = Some(pos_type);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Pos`].
    ///
    /// # Errors
    ///
    /// Returns [`CampusCoffeeError::Validation`] if `name` is missing or
    /// empty, or if `campus` or `pos_type` were never set.
    pub fn build(self) -> Result<Pos, CampusCoffeeError> {
        let pos = Pos {
            id: self.id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            campus: self.campus.ok_or(ValidationError::MissingCampus)?,
            pos_type: self.pos_type.ok_or(ValidationError::MissingPosType)?,
            created_at: self.created_at.unwrap_or_else(now),
        };
        pos.validate()?;
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_pos_when_required_fields_provided() {
        let pos = Pos::builder()
            .name("Mensa Marstall")
            .campus(Campus::Altstadt)
            .pos_type(PosType::CoffeeShop)
            .build()
            .unwrap();

        assert_eq!(pos.name, "Mensa Marstall");
        assert!(pos.id.is_none());
        assert_eq!(pos.campus, Campus::Altstadt);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Pos::builder()
            .campus(Campus::Bergheim)
            .pos_type(PosType::Bakery)
            .build();

        assert!(matches!(
            result,
            Err(CampusCoffeeError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_campus_missing() {
        let result = Pos::builder()
            .name("Automat INF 306")
            .pos_type(PosType::VendingMachine)
            .build();

        assert!(matches!(
            result,
            Err(CampusCoffeeError::Validation(
                ValidationError::MissingCampus
            ))
        ));
    }

    #[test]
    fn should_expose_identifier_through_domain_model() {
        let mut pos = Pos::builder()
            .name("Cafe Botanik")
            .campus(Campus::Neuenheim)
            .pos_type(PosType::CoffeeShop)
            .build()
            .unwrap();

        assert_eq!(DomainModel::id(&pos), None);
        pos.set_id(PosId::from_i64(3));
        assert_eq!(DomainModel::id(&pos), Some(PosId::from_i64(3)));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let pos = Pos::builder()
            .id(PosId::from_i64(1))
            .name("Backhaus")
            .description("Bakery next to the library")
            .campus(Campus::Altstadt)
            .pos_type(PosType::Bakery)
            .build()
            .unwrap();

        let json = serde_json::to_string(&pos).unwrap();
        let parsed: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pos);
    }

    #[test]
    fn should_roundtrip_labels_through_from_str() {
        for campus in [Campus::Altstadt, Campus::Bergheim, Campus::Neuenheim] {
            assert_eq!(campus.as_str().parse::<Campus>().unwrap(), campus);
        }
        for pos_type in [PosType::VendingMachine, PosType::CoffeeShop, PosType::Bakery] {
            assert_eq!(pos_type.as_str().parse::<PosType>().unwrap(), pos_type);
        }
    }

    #[test]
    fn should_reject_unknown_campus_label() {
        let result = "mannheim".parse::<Campus>();
        assert!(matches!(result, Err(ValidationError::UnknownCampus(_))));
    }
}

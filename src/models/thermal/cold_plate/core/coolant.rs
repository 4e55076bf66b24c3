//! Constant-property coolants and the table that names them.

use std::{collections::BTreeMap, sync::LazyLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constraint, ConstraintError, StrictlyPositive};

use super::error::InputError;

/// Constant thermophysical properties of a liquid coolant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolantProperties {
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub thermal_conductivity: ThermalConductivity,
    pub dynamic_viscosity: DynamicViscosity,
}

impl CoolantProperties {
    /// Liquid water near room temperature.
    #[must_use]
    pub fn water() -> Self {
        Self::from_record(&CoolantRecord {
            density_kg_m3: 997.0,
            cp_j_kgk: 4180.0,
            k_w_mk: 0.60,
            mu_pa_s: 0.00089,
        })
    }

    /// A 50/50 mixture of ethylene glycol and water.
    #[must_use]
    pub fn glycol50() -> Self {
        Self::from_record(&CoolantRecord {
            density_kg_m3: 1060.0,
            cp_j_kgk: 3400.0,
            k_w_mk: 0.40,
            mu_pa_s: 0.0048,
        })
    }

    /// Returns the Prandtl number, `cp·μ/k`.
    #[must_use]
    pub fn prandtl(&self) -> f64 {
        (self.specific_heat * self.dynamic_viscosity / self.thermal_conductivity).value
    }

    fn from_record(record: &CoolantRecord) -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(record.density_kg_m3),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(record.cp_j_kgk),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(record.k_w_mk),
            dynamic_viscosity: DynamicViscosity::new::<pascal_second>(record.mu_pa_s),
        }
    }
}

/// Coolant properties as plain SI numbers, for loading tables from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoolantRecord {
    pub density_kg_m3: f64,
    pub cp_j_kgk: f64,
    pub k_w_mk: f64,
    pub mu_pa_s: f64,
}

impl CoolantRecord {
    fn validate(&self) -> Result<(), (&'static str, ConstraintError)> {
        for (name, value) in [
            ("density_kg_m3", self.density_kg_m3),
            ("cp_j_kgk", self.cp_j_kgk),
            ("k_w_mk", self.k_w_mk),
            ("mu_pa_s", self.mu_pa_s),
        ] {
            if value.is_infinite() {
                return Err((name, ConstraintError::NotANumber));
            }
            StrictlyPositive::check(&value).map_err(|source| (name, source))?;
        }
        Ok(())
    }
}

/// Errors raised when registering a coolant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoolantError {
    #[error("coolant identifier must not be empty")]
    EmptyId,

    #[error("coolant {id:?}: invalid {property}: {source}")]
    InvalidProperty {
        id: String,
        property: &'static str,
        #[source]
        source: ConstraintError,
    },
}

static STANDARD: LazyLock<CoolantTable> = LazyLock::new(|| {
    let mut coolants = BTreeMap::new();
    coolants.insert(String::from("water"), CoolantProperties::water());
    coolants.insert(String::from("glycol50"), CoolantProperties::glycol50());
    CoolantTable { coolants }
});

/// Coolant properties keyed by identifier.
///
/// The [`standard`](Self::standard) table holds water and 50/50 glycol and is
/// built once per process. Owned tables can be extended from data, so adding
/// a coolant never requires a code change:
///
/// ```
/// use coldplate_models::models::thermal::cold_plate::{CoolantRecord, CoolantTable};
///
/// let mut table = CoolantTable::standard().clone();
/// table
///     .insert(
///         "dielectric",
///         CoolantRecord {
///             density_kg_m3: 1520.0,
///             cp_j_kgk: 1100.0,
///             k_w_mk: 0.065,
///             mu_pa_s: 0.00064,
///         },
///     )
///     .unwrap();
///
/// assert!(table.lookup("dielectric").is_ok());
/// assert!(CoolantTable::standard().lookup("dielectric").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoolantTable {
    coolants: BTreeMap<String, CoolantProperties>,
}

impl CoolantTable {
    /// Returns the shared table of built-in coolants.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a table from `(id, record)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`CoolantError`] for the first invalid entry.
    pub fn from_records<I, S>(records: I) -> Result<Self, CoolantError>
    where
        I: IntoIterator<Item = (S, CoolantRecord)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (id, record) in records {
            table.insert(id, record)?;
        }
        Ok(table)
    }

    /// Registers or replaces a coolant.
    ///
    /// # Errors
    ///
    /// Returns a [`CoolantError`] if the identifier is empty or a property is
    /// not finite and strictly positive.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        record: CoolantRecord,
    ) -> Result<(), CoolantError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoolantError::EmptyId);
        }
        if let Err((property, source)) = record.validate() {
            return Err(CoolantError::InvalidProperty {
                id,
                property,
                source,
            });
        }
        self.coolants.insert(id, CoolantProperties::from_record(&record));
        Ok(())
    }

    /// Looks up a coolant by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownCoolant`] if no coolant has this identifier.
    pub fn lookup(&self, id: &str) -> Result<CoolantProperties, InputError> {
        self.coolants
            .get(id)
            .copied()
            .ok_or_else(|| InputError::UnknownCoolant { id: id.to_owned() })
    }

    /// Returns the registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.coolants.keys().map(String::as_str)
    }
}

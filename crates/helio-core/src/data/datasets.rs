//! Typed dataset variants, their validation, and the bundled sample data.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ShapeError;

/// Home battery model shown on the storage comparison page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterySpec {
    /// Model name.
    pub name: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Usable capacity in kWh.
    pub capacity_kwh: f64,
    /// Continuous power in kW.
    pub power_kw: f64,
    /// Round-trip efficiency in percent.
    pub efficiency_pct: f64,
    /// Rated charge cycles.
    pub cycles: u32,
    /// Street price in euros.
    #[serde(default)]
    pub price_eur: Option<f64>,
}

/// Public charging station record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStation {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// City or district.
    pub city: String,
    /// Maximum charging power in kW.
    pub power_kw: f64,
    /// Number of connectors.
    pub connectors: u32,
    /// Whether a connector is currently free.
    pub available: bool,
}

/// Labelled series, the `{labels, datasets}` chart shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartSeries {
    /// Category labels along the x axis.
    pub labels: Vec<String>,
    /// One entry per plotted series.
    pub datasets: Vec<SeriesData>,
}

/// Single series of a [`ChartSeries`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SeriesData {
    /// Legend label.
    pub label: String,
    /// One value per label.
    pub data: Vec<f64>,
}

impl ChartSeries {
    /// Sum of every value in every series.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.datasets.iter().flat_map(|set| set.data.iter()).sum()
    }
}

/// Monthly yield distribution, the `{MONTHS, DISTRIBUTION}` shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SolarDistribution {
    /// Month labels.
    #[serde(rename = "MONTHS")]
    pub months: Vec<String>,
    /// Share of annual yield per month, in percent.
    #[serde(rename = "DISTRIBUTION")]
    pub distribution: Vec<f64>,
}

impl SolarDistribution {
    /// Index and share of the strongest month.
    #[must_use]
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.distribution
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Which shape a page expects from its endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetKind {
    /// JSON array of [`BatterySpec`].
    Batteries,
    /// JSON array of [`ChargingStation`].
    ChargingStations,
    /// [`ChartSeries`] object.
    Series,
    /// [`SolarDistribution`] object.
    SolarYield,
}

impl DatasetKind {
    /// Name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Batteries => "batteries",
            Self::ChargingStations => "charging_stations",
            Self::Series => "series",
            Self::SolarYield => "solar_yield",
        }
    }
}

/// Validated dataset, one variant per kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Dataset {
    /// Battery catalogue.
    Batteries(Vec<BatterySpec>),
    /// Charging station listing.
    ChargingStations(Vec<ChargingStation>),
    /// Generic chart series.
    Series(ChartSeries),
    /// Monthly solar yield distribution.
    SolarYield(SolarDistribution),
}

impl Dataset {
    /// Kind of this dataset.
    #[must_use]
    pub const fn kind(&self) -> DatasetKind {
        match self {
            Self::Batteries(_) => DatasetKind::Batteries,
            Self::ChargingStations(_) => DatasetKind::ChargingStations,
            Self::Series(_) => DatasetKind::Series,
            Self::SolarYield(_) => DatasetKind::SolarYield,
        }
    }

    /// Parse `body` as `kind` and validate it.
    ///
    /// # Errors
    /// Returns [`ShapeError`] when the body is not JSON of the expected shape or
    /// fails validation.
    pub fn parse(kind: DatasetKind, body: &str) -> Result<Self, ShapeError> {
        let dataset = match kind {
            DatasetKind::Batteries => Self::Batteries(from_body(body)?),
            DatasetKind::ChargingStations => Self::ChargingStations(from_body(body)?),
            DatasetKind::Series => Self::Series(from_body(body)?),
            DatasetKind::SolarYield => Self::SolarYield(from_body(body)?),
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    /// Returns the first [`ShapeError`] found.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Self::Batteries(items) => {
                require_non_empty("batteries", items.len())?;
                for item in items {
                    check_number("capacityKwh", item.capacity_kwh)?;
                    check_number("powerKw", item.power_kw)?;
                    check_number("efficiencyPct", item.efficiency_pct)?;
                    if let Some(price) = item.price_eur {
                        check_number("priceEur", price)?;
                    }
                }
                Ok(())
            }
            Self::ChargingStations(items) => {
                require_non_empty("stations", items.len())?;
                items
                    .iter()
                    .try_for_each(|item| check_number("powerKw", item.power_kw))
            }
            Self::Series(series) => {
                require_non_empty("labels", series.labels.len())?;
                require_non_empty("datasets", series.datasets.len())?;
                for set in &series.datasets {
                    require_len("data", series.labels.len(), set.data.len())?;
                    set.data.iter().try_for_each(|value| check_number("data", *value))?;
                }
                Ok(())
            }
            Self::SolarYield(yield_) => {
                require_non_empty("MONTHS", yield_.months.len())?;
                require_len("DISTRIBUTION", yield_.months.len(), yield_.distribution.len())?;
                yield_
                    .distribution
                    .iter()
                    .try_for_each(|value| check_number("DISTRIBUTION", *value))
            }
        }
    }

    /// Battery records, if this is a battery dataset.
    #[must_use]
    pub fn as_batteries(&self) -> Option<&[BatterySpec]> {
        match self {
            Self::Batteries(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Station records, if this is a charging station dataset.
    #[must_use]
    pub fn as_charging_stations(&self) -> Option<&[ChargingStation]> {
        match self {
            Self::ChargingStations(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Chart series, if this is a series dataset.
    #[must_use]
    pub const fn as_series(&self) -> Option<&ChartSeries> {
        match self {
            Self::Series(series) => Some(series),
            _ => None,
        }
    }

    /// Yield distribution, if this is a solar yield dataset.
    #[must_use]
    pub const fn as_solar_yield(&self) -> Option<&SolarDistribution> {
        match self {
            Self::SolarYield(yield_) => Some(yield_),
            _ => None,
        }
    }
}

fn from_body<T: DeserializeOwned>(body: &str) -> Result<T, ShapeError> {
    serde_json::from_str(body).map_err(|source| ShapeError::Malformed { source })
}

fn require_non_empty(field: &'static str, len: usize) -> Result<(), ShapeError> {
    if len == 0 {
        Err(ShapeError::Empty { field })
    } else {
        Ok(())
    }
}

fn require_len(field: &'static str, expected: usize, actual: usize) -> Result<(), ShapeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ShapeError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}

fn check_number(field: &'static str, value: f64) -> Result<(), ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidNumber { field })
    }
}

/// Bundled battery catalogue.
#[must_use]
pub fn demo_batteries() -> Vec<BatterySpec> {
    let battery = |name: &str, manufacturer: &str, capacity, power, efficiency, cycles, price| {
        BatterySpec {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            capacity_kwh: capacity,
            power_kw: power,
            efficiency_pct: efficiency,
            cycles,
            price_eur: Some(price),
        }
    };
    vec![
        battery("HomeCell 5", "Nordstrom Energy", 5.0, 2.5, 94.0, 6_000, 3_990.0),
        battery("HomeCell 10", "Nordstrom Energy", 10.0, 5.0, 95.0, 6_000, 6_490.0),
        battery("PowerWall S", "Voltaik", 13.5, 5.0, 90.0, 5_000, 8_990.0),
        battery("Lumen Stack 15", "Lumen Systems", 15.4, 7.5, 96.0, 8_000, 10_250.0),
        battery("GridSafe 20", "Solaris Works", 20.0, 10.0, 93.0, 7_000, 12_900.0),
    ]
}

/// Bundled charging station listing.
#[must_use]
pub fn demo_charging_stations() -> Vec<ChargingStation> {
    let station = |id: &str, name: &str, city: &str, power, connectors, available| ChargingStation {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        power_kw: power,
        connectors,
        available,
    };
    vec![
        station("cs-001", "Marktplatz", "Freiburg", 22.0, 2, true),
        station("cs-002", "Hauptbahnhof", "Freiburg", 150.0, 4, false),
        station("cs-003", "Rathaus", "Emmendingen", 11.0, 2, true),
        station("cs-004", "Gewerbepark Nord", "Lörrach", 300.0, 6, true),
        station("cs-005", "Seeufer", "Konstanz", 50.0, 2, false),
    ]
}

/// Bundled monthly yield distribution for a south-facing system in central Europe.
#[must_use]
pub fn demo_solar_yield() -> SolarDistribution {
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    SolarDistribution {
        months: months.iter().map(ToString::to_string).collect(),
        distribution: vec![2.5, 4.5, 8.0, 11.0, 13.0, 13.5, 14.0, 12.5, 9.5, 6.0, 3.5, 2.0],
    }
}

/// Bundled yearly CO₂ figures (saved vs. emitted, kg).
#[must_use]
pub fn demo_co2_series() -> ChartSeries {
    ChartSeries {
        labels: ["2020", "2021", "2022", "2023", "2024"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        datasets: vec![
            SeriesData {
                label: "saved".to_string(),
                data: vec![2_850.0, 3_120.0, 3_380.0, 3_240.0, 3_510.0],
            },
            SeriesData {
                label: "emitted".to_string(),
                data: vec![1_900.0, 1_640.0, 1_420.0, 1_380.0, 1_150.0],
            },
        ],
    }
}

/// Bundled generation by source (kWh).
#[must_use]
pub fn demo_energy_mix() -> ChartSeries {
    ChartSeries {
        labels: ["Solar", "Wind", "Hydro", "Grid"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        datasets: vec![SeriesData {
            label: "kWh".to_string(),
            data: vec![4_820.0, 1_240.0, 380.0, 1_560.0],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_datasets_are_valid() -> anyhow::Result<()> {
        Dataset::Batteries(demo_batteries()).validate()?;
        Dataset::ChargingStations(demo_charging_stations()).validate()?;
        Dataset::SolarYield(demo_solar_yield()).validate()?;
        Dataset::Series(demo_co2_series()).validate()?;
        Dataset::Series(demo_energy_mix()).validate()?;
        Ok(())
    }

    #[test]
    fn arrays_parse_into_records() -> anyhow::Result<()> {
        let body = r#"[{"id":"x","name":"Depot","city":"Ulm","powerKw":22,"connectors":2,"available":true}]"#;
        let dataset = Dataset::parse(DatasetKind::ChargingStations, body)?;
        let stations = dataset.as_charging_stations().unwrap_or_default();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].city, "Ulm");
        Ok(())
    }

    #[test]
    fn object_where_array_expected_is_malformed() {
        let err = Dataset::parse(DatasetKind::Batteries, r#"{"unexpected":"shape"}"#);
        assert!(matches!(err, Err(ShapeError::Malformed { .. })));
    }

    #[test]
    fn empty_and_mismatched_collections_are_rejected() {
        assert!(matches!(
            Dataset::parse(DatasetKind::Batteries, "[]"),
            Err(ShapeError::Empty { field: "batteries" })
        ));
        assert!(matches!(
            Dataset::parse(
                DatasetKind::SolarYield,
                r#"{"MONTHS":["Jan","Feb"],"DISTRIBUTION":[40]}"#
            ),
            Err(ShapeError::LengthMismatch { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            Dataset::parse(
                DatasetKind::Series,
                r#"{"labels":["a"],"datasets":[{"label":"x","data":[-1]}]}"#
            ),
            Err(ShapeError::InvalidNumber { field: "data" })
        ));
    }

    #[test]
    fn helpers_summarise_series() {
        assert!((demo_energy_mix().total() - 8_000.0).abs() < f64::EPSILON);
        assert_eq!(demo_solar_yield().peak().map(|(idx, _)| idx), Some(6));
    }
}

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::models::{ReferenceObservation, StationKey, StationMeta, VariableObservation};

/// A station present on both sides for one year, with each side's channels.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedStation {
    pub station: StationKey,
    pub meta: StationMeta,
    pub reference_channels: BTreeSet<u32>,
    pub variable_channels: BTreeSet<u32>,
}

/// Result of resolving one year. Stations are held in ascending key order.
#[derive(Debug, Clone, Default)]
pub struct YearMatch {
    pub year: i32,
    pub stations: Vec<MatchedStation>,
    pub reference_stations: usize,
    pub covered_stations: usize,
    pub variable_stations: usize,
}

impl YearMatch {
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn contains(&self, station: &StationKey) -> bool {
        self.stations.iter().any(|m| &m.station == station)
    }

    pub fn station_keys(&self) -> impl Iterator<Item = StationKey> + '_ {
        self.stations.iter().map(|m| m.station)
    }
}

#[derive(Debug, Default)]
struct ReferenceCoverage {
    flagged: bool,
    unflagged: bool,
    channels: BTreeSet<u32>,
}

impl ReferenceCoverage {
    fn is_covered(&self) -> bool {
        self.flagged && self.unflagged
    }
}

#[derive(Debug)]
struct VariableCandidate {
    meta: StationMeta,
    channels: BTreeSet<u32>,
}

/// Finds, for one year, the stations reporting both the reference sub-type and
/// the target variable.
pub struct StationResolver {
    reference_parameter: String,
}

impl StationResolver {
    pub fn new(reference_parameter: impl Into<String>) -> Self {
        Self {
            reference_parameter: reference_parameter.into(),
        }
    }

    /// Group reference rows per station, noting whether the station has rows of
    /// the reference sub-type, rows of any other sub-type, and every channel it
    /// reports on regardless of sub-type.
    fn group_reference(
        &self,
        rows: &[ReferenceObservation],
    ) -> BTreeMap<StationKey, ReferenceCoverage> {
        let mut grouped: BTreeMap<StationKey, ReferenceCoverage> = BTreeMap::new();

        for row in rows {
            let entry = grouped.entry(row.station).or_default();
            if row.is_parameter(&self.reference_parameter) {
                entry.flagged = true;
            } else {
                entry.unflagged = true;
            }
            entry.channels.insert(row.poc);
        }

        grouped
    }

    /// Stations counted as wind-covered: at least one row of the reference
    /// sub-type and at least one row of another sub-type.
    pub fn reference_covered(&self, rows: &[ReferenceObservation]) -> BTreeSet<StationKey> {
        self.group_reference(rows)
            .into_iter()
            .filter(|(_, coverage)| coverage.is_covered())
            .map(|(station, _)| station)
            .collect()
    }

    /// Distinct stations of the variable extract with their first-seen metadata
    /// and channels.
    fn group_variable(rows: &[VariableObservation]) -> BTreeMap<StationKey, VariableCandidate> {
        let mut grouped: BTreeMap<StationKey, VariableCandidate> = BTreeMap::new();

        for row in rows {
            grouped
                .entry(row.station)
                .or_insert_with(|| VariableCandidate {
                    meta: row.meta.clone(),
                    channels: BTreeSet::new(),
                })
                .channels
                .insert(row.poc);
        }

        grouped
    }

    /// Intersect the covered reference stations with the variable stations.
    pub fn resolve(
        &self,
        year: i32,
        reference: &[ReferenceObservation],
        variable: &[VariableObservation],
    ) -> YearMatch {
        let reference_groups = self.group_reference(reference);
        let variable_groups = Self::group_variable(variable);

        let reference_stations = reference_groups.len();
        let variable_stations = variable_groups.len();

        let mut covered: BTreeMap<StationKey, BTreeSet<u32>> = BTreeMap::new();
        for (station, coverage) in reference_groups {
            if coverage.is_covered() {
                covered.insert(station, coverage.channels);
            } else {
                debug!(
                    year,
                    %station,
                    flagged = coverage.flagged,
                    unflagged = coverage.unflagged,
                    "Station lacks reference coverage"
                );
            }
        }
        let covered_stations = covered.len();

        let stations = variable_groups
            .into_iter()
            .filter_map(|(station, candidate)| {
                let reference_channels = covered.remove(&station)?;
                Some(MatchedStation {
                    station,
                    meta: candidate.meta,
                    reference_channels,
                    variable_channels: candidate.channels,
                })
            })
            .collect();

        YearMatch {
            year,
            stations,
            reference_stations,
            covered_stations,
            variable_stations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const WIND_SPEED: &str = "Wind Speed - Resultant";
    const WIND_DIR: &str = "Wind Direction - Resultant";

    fn reference(station: StationKey, poc: u32, parameter: &str) -> ReferenceObservation {
        ReferenceObservation {
            station,
            poc,
            parameter_name: parameter.to_string(),
            timestamp: NaiveDate::from_ymd_opt(1991, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            value: 1.0,
        }
    }

    fn variable(station: StationKey, poc: u32, county: &str) -> VariableObservation {
        VariableObservation {
            station,
            poc,
            timestamp: NaiveDate::from_ymd_opt(1991, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            value: 20.0,
            meta: StationMeta::new(34.0, -118.0, "California".into(), county.into()),
        }
    }

    #[test]
    fn test_reference_covered_requires_both_subtypes() {
        let both = StationKey::new(6, 37, 1);
        let speed_only = StationKey::new(6, 37, 2);
        let direction_only = StationKey::new(6, 37, 3);

        let rows = vec![
            reference(both, 1, WIND_SPEED),
            reference(both, 1, WIND_DIR),
            reference(speed_only, 1, WIND_SPEED),
            reference(speed_only, 1, WIND_SPEED),
            reference(direction_only, 1, WIND_DIR),
        ];

        let covered = StationResolver::new(WIND_SPEED).reference_covered(&rows);
        assert_eq!(covered.into_iter().collect::<Vec<_>>(), vec![both]);
    }

    #[test]
    fn test_resolve_intersects_and_collects_channels() {
        let s1 = StationKey::new(6, 37, 1);
        let s2 = StationKey::new(6, 37, 2);
        let s3 = StationKey::new(4, 13, 19);

        let reference_rows = vec![
            reference(s1, 1, WIND_SPEED),
            reference(s1, 2, WIND_DIR),
            reference(s2, 1, WIND_SPEED),
            reference(s2, 1, WIND_DIR),
        ];
        let variable_rows = vec![
            variable(s1, 5, "Los Angeles"),
            variable(s1, 3, "Somewhere Else"),
            variable(s3, 1, "Maricopa"),
        ];

        let matched = StationResolver::new(WIND_SPEED).resolve(1991, &reference_rows, &variable_rows);

        assert_eq!(matched.year, 1991);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched.reference_stations, 2);
        assert_eq!(matched.covered_stations, 2);
        assert_eq!(matched.variable_stations, 2);

        let station = &matched.stations[0];
        assert_eq!(station.station, s1);
        assert_eq!(station.meta.county_name, "Los Angeles");
        assert_eq!(station.reference_channels.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(station.variable_channels.iter().copied().collect::<Vec<_>>(), vec![3, 5]);
    }

    #[test]
    fn test_resolve_orders_stations_by_key() {
        let stations = [
            StationKey::new(48, 201, 1034),
            StationKey::new(6, 37, 1),
            StationKey::new(6, 1, 7),
        ];
        let mut reference_rows = Vec::new();
        let mut variable_rows = Vec::new();
        for s in stations {
            reference_rows.push(reference(s, 1, WIND_DIR));
            reference_rows.push(reference(s, 1, WIND_SPEED));
            variable_rows.push(variable(s, 1, "x"));
        }

        let matched = StationResolver::new(WIND_SPEED).resolve(1991, &reference_rows, &variable_rows);
        assert_eq!(
            matched.station_keys().collect::<Vec<_>>(),
            vec![
                StationKey::new(6, 1, 7),
                StationKey::new(6, 37, 1),
                StationKey::new(48, 201, 1034),
            ]
        );
    }

    #[test]
    fn test_disjoint_datasets_give_empty_match() {
        let reference_rows = vec![
            reference(StationKey::new(1, 1, 1), 1, WIND_SPEED),
            reference(StationKey::new(1, 1, 1), 1, WIND_DIR),
        ];
        let variable_rows = vec![variable(StationKey::new(2, 2, 2), 1, "x")];

        let matched = StationResolver::new(WIND_SPEED).resolve(1995, &reference_rows, &variable_rows);
        assert!(matched.is_empty());
        assert!(!matched.contains(&StationKey::new(1, 1, 1)));
    }

    #[test]
    fn test_empty_inputs() {
        let matched = StationResolver::new(WIND_SPEED).resolve(1995, &[], &[]);
        assert!(matched.is_empty());
        assert_eq!(matched.reference_stations, 0);
        assert_eq!(matched.variable_stations, 0);
    }
}

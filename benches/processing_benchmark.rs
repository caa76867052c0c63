use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use epa_inventory::config::AvailabilityMatch;
use epa_inventory::models::{
    ReferenceObservation, StationKey, StationMeta, VariableObservation, YearInventory,
};
use epa_inventory::processors::{PairExpander, RosterReducer, StationResolver};

const WIND_SPEED: &str = "Wind Speed - Resultant";
const WIND_DIR: &str = "Wind Direction - Resultant";

// Hourly rows for `station_count` stations over `days` days of one year
fn create_year_data(
    year: i32,
    station_count: u32,
    days: u32,
) -> (Vec<ReferenceObservation>, Vec<VariableObservation>) {
    let mut reference = Vec::new();
    let mut variable = Vec::new();
    let base = NaiveDate::from_ymd_opt(year, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    for site in 1..=station_count {
        let station = StationKey::new(6, 37, site);
        let meta = StationMeta::new(
            34.0 + f64::from(site) * 0.01,
            -118.0,
            "California".to_string(),
            "Los Angeles".to_string(),
        );

        for hour in 0..days * 24 {
            let timestamp = base + chrono::Duration::hours(i64::from(hour));
            for (poc, parameter) in [(1, WIND_SPEED), (1, WIND_DIR), (2, WIND_DIR)] {
                reference.push(ReferenceObservation {
                    station,
                    poc,
                    parameter_name: parameter.to_string(),
                    timestamp,
                    value: 2.0,
                });
            }
            // every other station has a second variable instrument
            for poc in 1..=(1 + site % 2) {
                variable.push(VariableObservation {
                    station,
                    poc,
                    timestamp,
                    value: 35.0,
                    meta: meta.clone(),
                });
            }
        }
    }

    (reference, variable)
}

fn benchmark_station_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("station_resolver");
    let resolver = StationResolver::new(WIND_SPEED);

    for station_count in [10, 50, 200] {
        let (reference, variable) = create_year_data(1991, station_count, 30);

        group.bench_with_input(
            BenchmarkId::new("resolve", station_count),
            &(reference, variable),
            |b, (reference, variable)| {
                b.iter(|| black_box(resolver.resolve(1991, reference, variable)))
            },
        );
    }

    group.finish();
}

fn benchmark_roster_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_reducer");
    let resolver = StationResolver::new(WIND_SPEED);
    let expander = PairExpander::new();

    for year_count in [5, 20] {
        let years: Vec<i32> = (1991..1991 + year_count).collect();
        let inventories: Vec<YearInventory> = years
            .iter()
            .map(|&year| {
                let (reference, variable) = create_year_data(year, 100, 2);
                expander.expand(&resolver.resolve(year, &reference, &variable))
            })
            .collect();

        for matching in [AvailabilityMatch::Triple, AvailabilityMatch::Station] {
            let reducer = RosterReducer::new(matching);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", matching), year_count),
                &inventories,
                |b, inventories| b.iter(|| black_box(reducer.reduce(&years, inventories))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_station_resolver, benchmark_roster_reducer);
criterion_main!(benches);

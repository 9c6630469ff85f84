//! Property-based tests for passenger preparation and aggregation.

use proptest::prelude::*;
use titanic_analysis::{
    dataset::PassengerTable,
    passenger::{AgeGroup, RawPassenger},
    report::{age_group::AgeGroupSurvival, class_gender::ClassGenderSurvival, fare::FareSurvival},
};

fn raw_passenger() -> impl Strategy<Value = RawPassenger> {
    (
        0u8..=1,
        1u32..=3,
        prop::sample::select(vec!["male", "female"]),
        prop::option::of(0.0f64..90.0),
        prop::option::of(prop::sample::select(vec![7.25, 8.05, 13.0, 26.55, 71.2833])),
    )
        .prop_map(|(survived, pclass, sex, age, fare)| RawPassenger {
            passenger_id: None,
            name: None,
            survived,
            pclass,
            sex: sex.to_owned(),
            age,
            fare,
            cabin: None,
            embarked: None,
        })
}

fn passengers() -> impl Strategy<Value = Vec<RawPassenger>> {
    prop::collection::vec(raw_passenger(), 1..60)
}

#[expect(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

proptest! {
    #[test]
    fn prop_age_group_follows_thresholds(age in -1.0f64..120.0) {
        let expected = if age < 18.0 {
            AgeGroup::Child
        } else if age < 27.0 {
            AgeGroup::YoungAdult
        } else if age < 65.0 {
            AgeGroup::Adult
        } else {
            AgeGroup::Senior
        };
        prop_assert_eq!(AgeGroup::from_age(age), expected);
    }

    #[test]
    fn prop_every_age_is_filled_with_known_mean(raw in passengers()) {
        let known = raw.iter().filter_map(|r| r.age).collect::<Vec<_>>();
        let table = PassengerTable::prepare(raw.clone());

        prop_assert_eq!(table.len(), raw.len());
        if known.is_empty() {
            prop_assert!(table.imputed_age().is_nan());
        } else {
            prop_assert!(close(table.imputed_age(), mean(&known)));
        }
        for (row, passenger) in raw.iter().zip(table.passengers()) {
            if let Some(age) = row.age {
                prop_assert_eq!(passenger.age, age);
            } else if !known.is_empty() {
                prop_assert_eq!(passenger.age, table.imputed_age());
            }
            prop_assert_eq!(passenger.age_group, AgeGroup::from_age(passenger.age));
        }
    }

    #[test]
    fn prop_survival_rate_is_group_mean(raw in passengers()) {
        let table = PassengerTable::prepare(raw);
        for passenger in table.passengers() {
            let flags = table
                .passengers()
                .iter()
                .filter(|p| p.age_group == passenger.age_group)
                .map(|p| f64::from(p.survived))
                .collect::<Vec<_>>();
            prop_assert!(close(passenger.survival_rate, mean(&flags)));
        }
    }

    #[test]
    fn prop_age_group_report_covers_table(raw in passengers()) {
        let table = PassengerTable::prepare(raw);
        let report = AgeGroupSurvival::from_table(&table);

        let distinct = table.age_groups_first_seen();
        prop_assert_eq!(report.rows.len(), distinct.len());
        prop_assert!(report.rows.len() <= 4);
        prop_assert_eq!(report.rows.iter().map(|r| r.count).sum::<usize>(), table.len());
    }

    #[test]
    fn prop_class_gender_rows_are_subset_means(raw in passengers()) {
        let table = PassengerTable::prepare(raw);
        let report = ClassGenderSurvival::from_table(&table);

        prop_assert!(report.rows.len() <= report.factors().len());
        for row in &report.rows {
            let rates = table
                .passengers()
                .iter()
                .filter(|p| p.pclass == row.pclass && p.sex == row.sex)
                .map(|p| p.survival_rate)
                .collect::<Vec<_>>();
            prop_assert_eq!(rates.len(), row.count);
            prop_assert!(close(row.survival_rate, mean(&rates)));
        }
    }

    #[test]
    fn prop_fare_points_are_class_fare_means(raw in passengers()) {
        let table = PassengerTable::prepare(raw);
        let report = FareSurvival::from_table(&table);

        let total = report
            .series
            .iter()
            .flat_map(|s| &s.points)
            .map(|p| p.count)
            .sum::<usize>();
        let with_fare = table.passengers().iter().filter(|p| p.fare.is_some()).count();
        prop_assert_eq!(total, with_fare);

        for series in &report.series {
            prop_assert!(series.points.windows(2).all(|w| w[0].fare < w[1].fare));
            for point in &series.points {
                let rates = table
                    .passengers()
                    .iter()
                    .filter(|p| p.pclass == series.pclass && p.fare == Some(point.fare))
                    .map(|p| p.survival_rate)
                    .collect::<Vec<_>>();
                prop_assert!(close(point.survival_rate, mean(&rates)));
            }
        }
    }
}

//! Survival rate per fare, one series per passenger class

use std::collections::BTreeMap;

use titanic_stats::{grouping::GroupedMeans, ordered::OrdF64};

use crate::{dataset::PassengerTable, palette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarePoint {
    pub fare: f64,
    /// Mean survival rate over passengers of the series' class paying exactly this fare
    pub survival_rate: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FareSeries {
    pub pclass: u32,
    /// Points sorted by ascending fare
    pub points: Vec<FarePoint>,
    /// `None` for classes outside the palette
    pub color: Option<&'static str>,
}

impl FareSeries {
    /// Class name shown in the hover tooltip.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{} Class", self.pclass)
    }

    #[must_use]
    pub fn legend_label(&self) -> String {
        format!("Class {}", self.pclass)
    }
}

/// One series per distinct class, in ascending class order.
///
/// Passengers without a known fare are left out.
#[derive(Debug, Clone)]
pub struct FareSurvival {
    pub series: Vec<FareSeries>,
}

impl FareSurvival {
    #[must_use]
    pub fn from_table(table: &PassengerTable) -> Self {
        let mut by_class = BTreeMap::<u32, GroupedMeans<OrdF64>>::new();
        for passenger in table.passengers() {
            let Some(fare) = passenger.fare else {
                continue;
            };
            by_class
                .entry(passenger.pclass)
                .or_default()
                .push(OrdF64::from(fare), passenger.survival_rate);
        }

        let series = by_class
            .into_iter()
            .map(|(pclass, fares)| FareSeries {
                pclass,
                points: fares
                    .sorted()
                    .into_iter()
                    .map(|(OrdF64(fare), rate)| FarePoint {
                        fare,
                        survival_rate: rate.mean,
                        count: rate.count,
                    })
                    .collect(),
                color: palette::class_color(pclass),
            })
            .collect();

        Self { series }
    }
}

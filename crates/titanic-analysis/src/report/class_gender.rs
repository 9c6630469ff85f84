//! Survival rate per passenger class and sex

use std::collections::BTreeSet;

use titanic_stats::grouping::GroupedMeans;

use crate::{dataset::PassengerTable, palette};

#[derive(Debug, Clone, PartialEq)]
pub struct ClassGenderRow {
    pub pclass: u32,
    pub sex: String,
    /// Mean survival rate over passengers with exactly this class and sex
    pub survival_rate: f64,
    pub count: usize,
    pub color: Option<&'static str>,
}

impl ClassGenderRow {
    /// Categorical axis key: `(class, sex)`.
    #[must_use]
    pub fn factor(&self) -> (String, String) {
        (self.pclass.to_string(), self.sex.clone())
    }
}

/// One row per `(class, sex)` pair present in the table, sorted by class then sex.
#[derive(Debug, Clone)]
pub struct ClassGenderSurvival {
    pub rows: Vec<ClassGenderRow>,
    checkbox_labels: Vec<String>,
}

impl ClassGenderSurvival {
    #[must_use]
    pub fn from_table(table: &PassengerTable) -> Self {
        let groups = GroupedMeans::from_pairs(
            table
                .passengers()
                .iter()
                .map(|p| ((p.pclass, p.sex.clone()), p.survival_rate)),
        );

        let rows = groups
            .sorted()
            .into_iter()
            .map(|((pclass, sex), rate)| {
                let color = palette::sex_color(&sex);
                ClassGenderRow {
                    pclass,
                    sex,
                    survival_rate: rate.mean,
                    count: rate.count,
                    color,
                }
            })
            .collect();

        Self {
            rows,
            checkbox_labels: table
                .sexes_first_seen()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Every `(class, sex)` combination of the sorted distinct classes and sexes.
    ///
    /// Combinations without a row are included; they simply have no bar.
    #[must_use]
    pub fn factors(&self) -> Vec<(String, String)> {
        let classes = self.rows.iter().map(|r| r.pclass).collect::<BTreeSet<_>>();
        let sexes = self
            .rows
            .iter()
            .map(|r| r.sex.as_str())
            .collect::<BTreeSet<_>>();
        classes
            .iter()
            .flat_map(|pclass| {
                sexes
                    .iter()
                    .map(move |sex| (pclass.to_string(), (*sex).to_owned()))
            })
            .collect()
    }

    /// Filter choices: the distinct sexes of the table in first-seen order.
    #[must_use]
    pub fn checkbox_labels(&self) -> &[String] {
        &self.checkbox_labels
    }
}

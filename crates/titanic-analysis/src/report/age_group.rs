//! Survival rate per age group

use titanic_stats::grouping::GroupedMeans;

use crate::{dataset::PassengerTable, palette, passenger::AgeGroup};

#[derive(Debug, Clone, PartialEq)]
pub struct AgeGroupRow {
    pub age_group: AgeGroup,
    /// Mean of the broadcast survival rate over the group
    pub survival_rate: f64,
    /// Number of passengers averaged
    pub count: usize,
    pub color: Option<&'static str>,
}

/// One row per age group present in the table, in first-seen order.
#[derive(Debug, Clone)]
pub struct AgeGroupSurvival {
    pub rows: Vec<AgeGroupRow>,
    checkbox_labels: Vec<AgeGroup>,
}

impl AgeGroupSurvival {
    #[must_use]
    pub fn from_table(table: &PassengerTable) -> Self {
        let groups = GroupedMeans::from_pairs(
            table
                .passengers()
                .iter()
                .map(|p| (p.age_group, p.survival_rate)),
        );

        let rows = groups
            .iter()
            .map(|(&age_group, rate)| AgeGroupRow {
                age_group,
                survival_rate: rate.mean,
                count: rate.count,
                color: palette::age_group_color(age_group),
            })
            .collect();

        Self {
            rows,
            checkbox_labels: table.age_groups_first_seen(),
        }
    }

    /// Filter choices: the distinct age groups of the table, all initially selected.
    #[must_use]
    pub fn checkbox_labels(&self) -> &[AgeGroup] {
        &self.checkbox_labels
    }
}

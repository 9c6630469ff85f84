//! Fixed chart palettes
//!
//! Lookups return `None` for keys outside a palette. Callers render those
//! with the chart's default color instead of failing.

use crate::passenger::AgeGroup;

const AGE_GROUP_COLORS: [(AgeGroup, &str); 4] = [
    (AgeGroup::Child, "#34344A"),
    (AgeGroup::YoungAdult, "#80475E"),
    (AgeGroup::Adult, "#A3E7FC"),
    (AgeGroup::Senior, "#EDCB96"),
];

const SEX_COLORS: [(&str, &str); 2] = [("female", "#CEB1BE"), ("male", "#A3E7FC")];

const CLASS_COLORS: [(u32, &str); 3] = [(1, "#FFC857"), (2, "#2E4052"), (3, "#B9314F")];

#[must_use]
pub fn age_group_color(group: AgeGroup) -> Option<&'static str> {
    lookup(&AGE_GROUP_COLORS, |g| *g == group)
}

#[must_use]
pub fn sex_color(sex: &str) -> Option<&'static str> {
    lookup(&SEX_COLORS, |s| *s == sex)
}

#[must_use]
pub fn class_color(pclass: u32) -> Option<&'static str> {
    lookup(&CLASS_COLORS, |c| *c == pclass)
}

fn lookup<K>(palette: &[(K, &'static str)], mut matches: impl FnMut(&K) -> bool) -> Option<&'static str> {
    palette
        .iter()
        .find(|(key, _)| matches(key))
        .map(|(_, color)| *color)
}

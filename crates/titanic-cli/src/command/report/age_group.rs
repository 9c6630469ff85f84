use titanic_analysis::report::age_group::AgeGroupSurvival;
use titanic_chart::figure::{
    CheckboxFilter, Color, ColumnDataSource, Figure, Glyph, Tooltip, VBar, XRange,
};

pub(super) fn figure(report: &AgeGroupSurvival) -> Figure {
    let groups = report
        .rows
        .iter()
        .map(|row| row.age_group.as_str())
        .collect::<Vec<_>>();

    let mut figure = Figure::new("Survival rates across age groups")
        .axis_labels("Age groups", "Survival Rate")
        .x_range(XRange::factors(groups.iter().copied()))
        .tooltip(Tooltip::Template(
            "Survival rate of @AgeGroup group is @SurvivalRate".to_owned(),
        ))
        .y_grid_band("#65743A", 0.1);

    let source = figure.add_source(
        ColumnDataSource::new()
            .with_column("AgeGroup", groups.iter().copied())
            .with_column("SurvivalRate", report.rows.iter().map(|r| r.survival_rate))
            .with_column("Color", report.rows.iter().map(|r| r.color)),
    );

    let mut bar = VBar::new(source, "AgeGroup", "SurvivalRate");
    bar.width = 0.5;
    bar.color = Color::Field("Color".to_owned());
    bar.legend_field = Some("AgeGroup".to_owned());
    figure.add_glyph(Glyph::VBar(bar));

    figure.set_filter(CheckboxFilter::all_active(
        report.checkbox_labels().iter().map(|g| g.as_str()),
        source,
        "AgeGroup",
        "AgeGroup",
    ));

    figure
}

use titanic_analysis::report::fare::FareSurvival;
use titanic_chart::figure::{Color, ColumnDataSource, Figure, Glyph, Scatter, Tooltip};

pub(super) fn figure(report: &FareSurvival) -> Figure {
    let mut figure = Figure::new("Fare vs. Survival Status by Class")
        .size(400, 400)
        .axis_labels("Fare", "Survival Rate")
        .tooltip(Tooltip::fields([
            ("Fare", "@Fare"),
            ("Survival Rate", "@SurvivalRate"),
            ("Class", "@ClassName"),
        ]));

    for series in &report.series {
        let class_name = series.class_name();
        let source = figure.add_source(
            ColumnDataSource::new()
                .with_column("Fare", series.points.iter().map(|p| p.fare))
                .with_column("SurvivalRate", series.points.iter().map(|p| p.survival_rate))
                .with_column(
                    "ClassName",
                    series.points.iter().map(|_| class_name.as_str()),
                ),
        );

        let mut scatter = Scatter::new(source, "Fare", "SurvivalRate");
        scatter.color = Color::from(series.color);
        scatter.alpha = 0.8;
        scatter.size = 8.0;
        scatter.legend_label = Some(series.legend_label());
        figure.add_glyph(Glyph::Scatter(scatter));
    }

    figure
}

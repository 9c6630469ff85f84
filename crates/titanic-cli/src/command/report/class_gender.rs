use titanic_analysis::report::class_gender::ClassGenderSurvival;
use titanic_chart::figure::{
    CheckboxFilter, Color, ColumnDataSource, Factor, Figure, Glyph, Tooltip, VBar, XRange,
};

pub(super) fn figure(report: &ClassGenderSurvival) -> Figure {
    let mut figure = Figure::new("Survival Rates by Class and Gender")
        .axis_labels("Pclass - Sex", "Survival Rate")
        .x_range(XRange::factors(report.factors()))
        .tooltip(Tooltip::Template(
            "Survival rate for @Sex from @Pclass class is @SurvivalRate".to_owned(),
        ));

    let rows = &report.rows;
    let source = figure.add_source(
        ColumnDataSource::new()
            .with_column("Pclass", rows.iter().map(|r| r.pclass))
            .with_column("Sex", rows.iter().map(|r| r.sex.as_str()))
            .with_column("SurvivalRate", rows.iter().map(|r| r.survival_rate))
            .with_column("Color", rows.iter().map(|r| r.color))
            .with_column("Pclass_Sex", rows.iter().map(|r| Factor::from(r.factor()))),
    );

    let mut bar = VBar::new(source, "Pclass_Sex", "SurvivalRate");
    bar.width = 0.4;
    bar.color = Color::Field("Color".to_owned());
    bar.line_color = Some("white".to_owned());
    bar.legend_field = Some("Sex".to_owned());
    figure.add_glyph(Glyph::VBar(bar));

    figure.set_filter(CheckboxFilter::all_active(
        report.checkbox_labels().iter().map(String::as_str),
        source,
        "Sex",
        "Pclass_Sex",
    ));

    figure
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use titanic_analysis::dataset::{PassengerTable, read_raw_passengers};

    use super::*;

    #[test]
    fn test_nested_factors_and_sex_filter() {
        let raw = read_raw_passengers(
            "Survived,Pclass,Sex,Age,Fare,Cabin,Embarked
0,3,male,30,7,,S
1,1,female,30,80,,C
1,3,female,30,8,,S
"
            .as_bytes(),
        )
        .unwrap();
        let report = ClassGenderSurvival::from_table(&PassengerTable::prepare(raw));
        let figure = figure(&report);

        assert_eq!(figure.x_range_factors().unwrap().len(), 4);

        let filter = figure.filter().unwrap();
        assert_eq!(filter.labels, ["male", "female"]);
        assert_eq!(filter.field, "Sex");

        let source = figure.source(filter.source).unwrap();
        assert_eq!(source.len(), 3);
        assert_eq!(source.column("Pclass_Sex").unwrap()[0], json!(["1", "female"]));
        assert_eq!(source.column("Pclass").unwrap()[2], json!(3));
    }
}

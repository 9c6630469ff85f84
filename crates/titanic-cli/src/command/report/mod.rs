//! Survival report command
//!
//! Prepares the passenger table once, prints a preview of it, then builds
//! and writes each selected chart in turn. Every chart is written in full
//! before the next one is built, and is then opened in the system browser
//! unless `--no-open` is given.

mod age_group;
mod class_gender;
mod fare;

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{ArgAction, Args, ValueEnum};
use titanic_analysis::{
    dataset::PassengerTable,
    report::{
        age_group::AgeGroupSurvival, class_gender::ClassGenderSurvival, fare::FareSurvival,
    },
};
use titanic_chart::html::Document;

use crate::{command::table, util};

const DEFAULT_INPUT: &str = "Titanic-Dataset.csv";
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub(crate) struct ReportArg {
    /// Path to the passenger CSV file
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory the chart files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Charts to generate (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',', default_values = ["age-group", "class-gender", "fare"])]
    pub charts: Vec<ChartKind>,

    /// Number of prepared rows to print before writing charts
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Do not open the written charts in the system browser
    #[arg(long = "no-open", action = ArgAction::SetFalse)]
    pub open: bool,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            charts: ChartKind::ALL.to_vec(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            open: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ChartKind {
    /// Survival rate per age group (task1.html)
    AgeGroup,
    /// Survival rate per class and sex (task2.html)
    ClassGender,
    /// Survival rate against fare, per class (task3.html)
    Fare,
}

impl ChartKind {
    const ALL: [ChartKind; 3] = [ChartKind::AgeGroup, ChartKind::ClassGender, ChartKind::Fare];

    fn file_name(self) -> &'static str {
        match self {
            ChartKind::AgeGroup => "task1.html",
            ChartKind::ClassGender => "task2.html",
            ChartKind::Fare => "task3.html",
        }
    }

    fn page_title(self) -> &'static str {
        match self {
            ChartKind::AgeGroup => "task 1",
            ChartKind::ClassGender => "task 2",
            ChartKind::Fare => "task 3",
        }
    }

    fn document(self, table: &PassengerTable) -> Document {
        let figure = match self {
            ChartKind::AgeGroup => age_group::figure(&AgeGroupSurvival::from_table(table)),
            ChartKind::ClassGender => {
                class_gender::figure(&ClassGenderSurvival::from_table(table))
            }
            ChartKind::Fare => fare::figure(&FareSurvival::from_table(table)),
        };
        Document::new(self.page_title(), figure)
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let table = PassengerTable::load(&arg.input)?;

    table::print_passenger_preview(&table, arg.preview_rows);

    fs::create_dir_all(&arg.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            arg.output_dir.display()
        )
    })?;

    for (i, &chart) in arg.charts.iter().enumerate() {
        if arg.charts[..i].contains(&chart) {
            continue;
        }
        let document = chart.document(&table);
        let path = arg.output_dir.join(chart.file_name());
        util::save_document(&document, &path)?;
        tracing::info!(chart = ?chart, path = %path.display(), "chart written");

        if arg.open {
            util::open_in_browser(&path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const SAMPLE: &str = r#"PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,"Braund, Mr. Owen Harris",male,22,1,0,A/5 21171,7.25,,S
2,1,1,"Cumings, Mrs. John Bradley (Florence Briggs Thayer)",female,38,1,0,PC 17599,71.2833,C85,C
3,1,3,"Heikkinen, Miss. Laina",female,26,0,0,STON/O2. 3101282,7.925,,S
4,1,1,"Futrelle, Mrs. Jacques Heath (Lily May Peel)",female,35,1,0,113803,53.1,C123,S
5,0,3,"Allen, Mr. William Henry",male,35,0,0,373450,8.05,,S
6,0,3,"Moran, Mr. James",male,,0,0,330877,8.4583,,Q
7,0,1,"McCarthy, Mr. Timothy J",male,54,0,0,17463,51.8625,E46,S
8,0,3,"Palsson, Master. Gosta Leonard",male,2,3,1,349909,21.075,,S
9,1,3,"Johnson, Mrs. Oscar W (Elisabeth Vilhelmina Berg)",female,27,0,2,347742,11.1333,,S
10,1,2,"Nasser, Mrs. Nicholas (Adele Achem)",female,14,1,0,237736,30.0708,,C
34,0,2,"Wheadon, Mr. Edward H",male,66,0,0,C.A. 24579,10.5,,S
"#;

    fn report_arg(dir: &Path) -> ReportArg {
        let input = dir.join("passengers.csv");
        fs::write(&input, SAMPLE).unwrap();
        ReportArg {
            input,
            output_dir: dir.join("out"),
            preview_rows: 0,
            open: false,
            ..ReportArg::default()
        }
    }

    #[test]
    fn test_charts_open_by_default() {
        assert!(ReportArg::default().open);
    }

    fn embedded_figure(html: &str) -> serde_json::Value {
        let start = html.find(r#"id="figure-data">"#).unwrap() + r#"id="figure-data">"#.len();
        let end = start + html[start..].find("</script>").unwrap();
        serde_json::from_str(&html[start..end].replace(r"<\/", "</")).unwrap()
    }

    #[test]
    fn test_filters_reset_factors_from_key_column() {
        let dir = tempfile::tempdir().unwrap();
        let arg = report_arg(dir.path());
        run(&arg).unwrap();

        for (chart, field, factor_field) in [
            (ChartKind::AgeGroup, "AgeGroup", "AgeGroup"),
            (ChartKind::ClassGender, "Sex", "Pclass_Sex"),
        ] {
            let html = fs::read_to_string(arg.output_dir.join(chart.file_name())).unwrap();
            assert!(html.contains("filter.factorField"));

            let figure = embedded_figure(&html);
            let filter = &figure["filter"];
            assert_eq!(filter["field"], field);
            assert_eq!(filter["factorField"], factor_field);

            // Every bar's key column value is an x factor, so resetting the
            // range to the filtered key column keeps each remaining bar.
            let index = usize::try_from(filter["source"].as_u64().unwrap()).unwrap();
            let source = &figure["sources"][index];
            let factors = figure["xRange"]["factors"].as_array().unwrap();
            let keys = source[factor_field].as_array().unwrap();
            assert!(!keys.is_empty());
            assert!(keys.iter().all(|key| factors.contains(key)));

            let labels = filter["labels"].as_array().unwrap();
            assert!(source[field].as_array().unwrap().iter().all(|v| labels.contains(v)));
        }

        let html = fs::read_to_string(arg.output_dir.join(ChartKind::Fare.file_name())).unwrap();
        assert!(embedded_figure(&html)["filter"].is_null());
    }

    #[test]
    fn test_writes_all_charts() {
        let dir = tempfile::tempdir().unwrap();
        let arg = report_arg(dir.path());
        run(&arg).unwrap();

        for chart in ChartKind::ALL {
            let html = fs::read_to_string(arg.output_dir.join(chart.file_name())).unwrap();
            assert!(html.contains(&format!("<title>{}</title>", chart.page_title())));
        }
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let arg = report_arg(dir.path());

        run(&arg).unwrap();
        let first = ChartKind::ALL.map(|c| fs::read(arg.output_dir.join(c.file_name())).unwrap());
        run(&arg).unwrap();
        let second = ChartKind::ALL.map(|c| fs::read(arg.output_dir.join(c.file_name())).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_selected_charts_written() {
        let dir = tempfile::tempdir().unwrap();
        let arg = ReportArg {
            charts: vec![ChartKind::Fare, ChartKind::Fare],
            ..report_arg(dir.path())
        };
        run(&arg).unwrap();

        assert!(arg.output_dir.join("task3.html").exists());
        assert!(!arg.output_dir.join("task1.html").exists());
        assert!(!arg.output_dir.join("task2.html").exists());
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let arg = ReportArg {
            input: dir.path().join("absent.csv"),
            output_dir: dir.path().to_owned(),
            open: false,
            ..ReportArg::default()
        };
        let err = run(&arg).unwrap_err();
        assert!(err.to_string().contains("absent.csv"));
        assert!(!dir.path().join("task1.html").exists());
    }
}

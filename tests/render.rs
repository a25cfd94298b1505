use simple_charts::description::{ChartKind, ChartsDescription};
use simple_charts::errors::ChartError;
use simple_charts::graph::config::GraphOutputType;
use simple_charts::graph::fileio::read_csv_file;
use simple_charts::graph::graph::generate_graphics;
use simple_charts::graph::preprocess::{prepare_data, RawColumns, AVERAGE_BY_DATE_CSV};

use std::fs;
use std::path::Path;

const DEMO_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/socialMedia.csv");

fn stage_demo_data(dir: &Path) {
    fs::copy(DEMO_DATA, dir.join("socialMedia.csv")).unwrap();
    prepare_data(&dir.join("socialMedia.csv"), dir, &RawColumns::default()).unwrap();
}

#[test]
fn prepare_writes_both_average_tables() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(DEMO_DATA, dir.path().join("socialMedia.csv")).unwrap();

    let written = prepare_data(
        &dir.path().join("socialMedia.csv"),
        &dir.path().join("derived"),
        &RawColumns::default(),
    )
    .unwrap();
    assert_eq!(written.len(), 2);

    let by_date_path = dir.path().join("derived").join(AVERAGE_BY_DATE_CSV);
    let by_date = read_csv_file(&by_date_path).unwrap();
    assert_eq!(by_date.headers, ["Date", "AvgLikes"]);
    assert_eq!(by_date.len(), 7);
    assert_eq!(by_date.records[0].text("Date").unwrap(), "3/1/2024 (Friday)");
    assert!(by_date.records[0].number("AvgLikes").unwrap() > 0.0);
}

#[test]
fn default_description_renders_three_charts_and_a_page() {
    let dir = tempfile::tempdir().unwrap();
    stage_demo_data(dir.path());
    let out_dir = dir.path().join("out");

    let written =
        generate_graphics(&ChartsDescription::default(), dir.path(), &out_dir).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["boxplot.svg", "barplot.svg", "lineplot.svg", "index.html"]);

    let boxplot = fs::read_to_string(out_dir.join("boxplot.svg")).unwrap();
    assert!(boxplot.starts_with("<svg"));
    // one box per platform
    assert_eq!(boxplot.matches("fill=\"#69b3a2\"").count(), 4);
    assert!(boxplot.contains(">Number of Likes</text>"));

    let barplot = fs::read_to_string(out_dir.join("barplot.svg")).unwrap();
    // twelve bars plus a legend swatch per post type
    assert_eq!(barplot.matches("<rect").count(), 15);

    let lineplot = fs::read_to_string(out_dir.join("lineplot.svg")).unwrap();
    assert!(lineplot.contains("stroke=\"steelblue\""));

    let page = fs::read_to_string(out_dir.join("index.html")).unwrap();
    for id in ["boxplot", "barplot", "lineplot"] {
        assert!(page.contains(&format!("<div id=\"{}\">", id)));
    }
}

#[test]
fn rendering_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    stage_demo_data(dir.path());
    let mut description = ChartsDescription::default();
    description.output_type = GraphOutputType::SVG;

    generate_graphics(&description, dir.path(), &dir.path().join("a")).unwrap();
    generate_graphics(&description, dir.path(), &dir.path().join("b")).unwrap();
    for name in ["boxplot.svg", "barplot.svg", "lineplot.svg"] {
        let a = fs::read(dir.path().join("a").join(name)).unwrap();
        let b = fs::read(dir.path().join("b").join(name)).unwrap();
        assert_eq!(a, b, "{} differs between runs", name);
    }
    assert!(!dir.path().join("a").join("index.html").exists());
}

#[test]
fn malformed_measure_stops_rendering() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("socialMedia.csv"),
        "Platform,PostType,Date,Likes\nInstagram,Image,3/1,12\nTwitter,Link,3/1,n/a\n",
    )
    .unwrap();

    let mut description = ChartsDescription::default();
    description
        .charts
        .retain(|chart| matches!(chart.kind, ChartKind::BoxPlot { .. }));

    let out_dir = dir.path().join("out");
    let err = generate_graphics(&description, dir.path(), &out_dir).unwrap_err();
    let chart_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ChartError>())
        .unwrap();
    assert_eq!(
        *chart_error,
        ChartError::invalid_input(Some(2), "Likes", "n/a")
    );
}

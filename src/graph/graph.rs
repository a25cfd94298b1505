use super::config::GraphOutputType;
use super::fileio::{create_file_from_string, read_csv_file};
use crate::charts::render_chart;
use crate::description::ChartsDescription;
use crate::render::svg::escape;

use anyhow::{Context, Result};
use fs_err as fs;
use log::info;

use std::path::{Path, PathBuf};

const HTML_PAGE: &str = "index.html";

fn html_page(title: &str, charts: &[(String, String)]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(format!("<title>{}</title>\n", escape(title)).as_str());
    html.push_str("</head>\n<body>\n");
    html.push_str(format!("<h1>{}</h1>\n", escape(title)).as_str());
    for (name, svg) in charts {
        html.push_str(format!("<div id=\"{}\">\n", escape(name)).as_str());
        html.push_str(svg);
        html.push_str("</div>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Render every chart of `description` from CSV files in `data_dir` into
/// `out_dir`. Returns the paths written.
pub fn generate_graphics(
    description: &ChartsDescription,
    data_dir: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    info!(
        "rendering {} charts as {} into {}",
        description.charts.len(),
        description.output_type,
        out_dir.display()
    );

    let mut written = Vec::new();
    let mut rendered = Vec::new();
    for chart in &description.charts {
        let data_path = data_dir.join(&chart.data_file);
        let table = read_csv_file(&data_path)?;
        let svg = render_chart(chart, &table)?;

        let svg_path = out_dir.join(format!("{}.svg", chart.name));
        create_file_from_string(&svg_path, &svg)
            .with_context(|| format!("Failed to save chart '{}'", chart.name))?;
        info!(
            "{} rows of {} -> {}",
            table.len(),
            data_path.display(),
            svg_path.display()
        );

        written.push(svg_path);
        rendered.push((chart.name.clone(), svg));
    }

    if description.output_type == GraphOutputType::HTML {
        let page_path = out_dir.join(HTML_PAGE);
        create_file_from_string(&page_path, &html_page(&description.title, &rendered))?;
        info!("{} charts -> {}", rendered.len(), page_path.display());
        written.push(page_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_hosts_each_chart_in_its_container() {
        let page = html_page(
            "Likes & more",
            &[
                ("boxplot".to_string(), "<svg/>\n".to_string()),
                ("lineplot".to_string(), "<svg/>\n".to_string()),
            ],
        );
        assert!(page.contains("<title>Likes &amp; more</title>"));
        assert!(page.contains("<div id=\"boxplot\">\n<svg/>\n</div>"));
        assert!(page.contains("<div id=\"lineplot\">"));
    }
}

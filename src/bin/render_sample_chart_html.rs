//! Writes demonstration quadrant charts as HTML pages under `target/out`.
//!
//! One chart comes from an inline CSV block, one from `sample_points()`; both
//! embed the generated base64 data URL directly in an `<img>` tag. Opening
//! the written files in a browser is left to the user.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use quadrant_gen::{ChartRequest, generate_chart, generate_chart_from_csv, sample_points};

const SAMPLE_CSV: &str = "
name,description,x,y
Product A,High quality,0.18,0.75
Product B,Low cost,0.35,0.25
Product C,Innovative,0.80,0.68
Product D,Traditional,0.65,0.40
";

fn main() -> Result<(), Box<dyn Error>> {
    let output_root = PathBuf::from("target/out");
    fs::create_dir_all(&output_root)?;

    let csv_request = ChartRequest::new(Vec::new())
        .with_title("Product Positioning")
        .with_axis_captions("Low Cost", "High Cost", "Low Value", "High Value");
    let csv_chart = generate_chart_from_csv(SAMPLE_CSV, &csv_request)?;
    let csv_page = output_root.join("csv_example.html");
    fs::write(
        &csv_page,
        html_page("Quadrant Chart from CSV", &csv_chart, Some(SAMPLE_CSV.trim())),
    )?;
    println!("wrote {} ({} chars of data url)", csv_page.display(), csv_chart.len());

    let sample_request = ChartRequest::new(sample_points())
        .with_title("Sample Quadrant Chart")
        .with_axis_captions("Low Priority", "High Priority", "Low Impact", "High Impact");
    let sample_chart = generate_chart(&sample_request)?;
    let sample_page = output_root.join("sample_example.html");
    fs::write(
        &sample_page,
        html_page("Quadrant Chart from Sample Data", &sample_chart, None),
    )?;
    println!(
        "wrote {} ({} chars of data url)",
        sample_page.display(),
        sample_chart.len()
    );

    Ok(())
}

fn html_page(title: &str, data_url: &str, csv_block: Option<&str>) -> String {
    let csv_section = csv_block
        .map(|csv| format!("<h2>Input CSV:</h2>\n<pre>{csv}</pre>\n"))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>{title}</title>\n\
         <style>body {{ font-family: sans-serif; margin: 20px; }} \
         .chart {{ max-width: 800px; margin: 20px 0; }} \
         pre {{ background: #f5f5f5; padding: 10px; }}</style>\n\
         </head>\n<body>\n<h1>{title}</h1>\n{csv_section}\
         <h2>Generated Chart:</h2>\n\
         <img class=\"chart\" src=\"{data_url}\" alt=\"Quadrant Chart\">\n\
         </body>\n</html>\n"
    )
}

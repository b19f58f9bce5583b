//! Stacked success/failure bar chart written as SVG

use super::tally::YearTally;
use crate::config::ChartConfig;
use crate::error::{MissionError, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

const SUCCESS_COLOR: RGBColor = RGBColor(70, 130, 180);
const FAILURE_COLOR: RGBColor = RGBColor(205, 92, 92);

/// Draw one stacked bar per year to `path`
pub fn render_svg(tallies: &[YearTally], path: &Path, config: &ChartConfig) -> Result<()> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    draw_stacked_bars(&root, tallies, &config.title)?;
    root.present().map_err(backend_failure)?;
    Ok(())
}

fn draw_stacked_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    tallies: &[YearTally],
    title: &str,
) -> Result<()> {
    let (first, last) = match (tallies.first(), tallies.last()) {
        (Some(first), Some(last)) => (first.year, last.year),
        _ => return Err(MissionError::render("no missions to plot")),
    };
    let max_total = tallies.iter().map(YearTally::total).max().unwrap_or(0);

    root.fill(&WHITE).map_err(backend_failure)?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(50)
        .build_cartesian_2d(
            (first..last.saturating_add(1)).into_segmented(),
            0u32..max_total + 1,
        )
        .map_err(backend_failure)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Year")
        .y_desc("Missions")
        .x_label_formatter(&|value: &SegmentValue<i32>| match value {
            SegmentValue::Exact(year) | SegmentValue::CenterOf(year) => year.to_string(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(backend_failure)?;

    // Successes sit at the bottom of each bar, failures on top
    chart
        .draw_series(
            tallies
                .iter()
                .filter(|tally| tally.successes > 0)
                .map(|tally| year_bar(tally.year, 0, tally.successes, SUCCESS_COLOR)),
        )
        .map_err(backend_failure)?
        .label("Successful")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SUCCESS_COLOR.filled()));

    chart
        .draw_series(
            tallies
                .iter()
                .filter(|tally| tally.failures > 0)
                .map(|tally| year_bar(tally.year, tally.successes, tally.total(), FAILURE_COLOR)),
        )
        .map_err(backend_failure)?
        .label("Failed")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], FAILURE_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(backend_failure)?;

    Ok(())
}

fn year_bar(year: i32, bottom: u32, top: u32, color: RGBColor) -> Rectangle<(SegmentValue<i32>, u32)> {
    let mut bar = Rectangle::new(
        [
            (SegmentValue::Exact(year), bottom),
            (SegmentValue::Exact(year.saturating_add(1)), top),
        ],
        color.filled(),
    );
    bar.set_margin(0, 0, 4, 4);
    bar
}

fn backend_failure<E>(error: DrawingAreaErrorKind<E>) -> MissionError
where
    E: std::error::Error + Send + Sync,
{
    MissionError::render(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tallies() -> Vec<YearTally> {
        vec![
            YearTally { year: 1971, successes: 2, failures: 1 },
            YearTally { year: 1973, successes: 0, failures: 1 },
            YearTally { year: 1976, successes: 4, failures: 0 },
        ]
    }

    #[test]
    fn test_svg_written_with_caption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("outcomes.svg");

        render_svg(&tallies(), &path, &ChartConfig::default()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("Space Mission Outcomes by Year"));
    }

    #[test]
    fn test_single_year_chart() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("single.svg");
        let single = vec![YearTally { year: 1990, successes: 1, failures: 0 }];

        render_svg(&single, &path, &ChartConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_tallies_are_a_render_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.svg");

        let result = render_svg(&[], &path, &ChartConfig::default());
        assert!(matches!(result, Err(MissionError::Render { .. })));
    }
}

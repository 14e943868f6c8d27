// Terminal ChartSurface: one proportional bar per vote category
use crate::application::chart_renderer::ChartSurface;
use crate::domain::chart::ChartData;

const BAR_WIDTH: usize = 24;

/// A drawn chart. `revision` counts in-place redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct TextChart {
    pub revision: u32,
    pub lines: Vec<String>,
}

impl TextChart {
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Default)]
pub struct TextChartSurface {
    created: usize,
}

impl TextChartSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of charts created on this surface
    pub fn created(&self) -> usize {
        self.created
    }
}

impl ChartSurface for TextChartSurface {
    type Handle = TextChart;

    fn create(&mut self, data: &ChartData) -> TextChart {
        self.created += 1;
        TextChart {
            revision: 0,
            lines: draw(data),
        }
    }

    fn update(&mut self, handle: &mut TextChart, data: &ChartData) {
        handle.revision += 1;
        handle.lines = draw(data);
    }
}

fn draw(data: &ChartData) -> Vec<String> {
    let label_width = data
        .slices
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(data.slices.len() + 2);
    lines.push(format!("{} ({} votes)", data.title, data.total));
    for slice in &data.slices {
        let filled = (slice.share * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        lines.push(format!(
            "  {:<width$} {}{} {:>3.0}% ({})",
            slice.label,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            slice.share * 100.0,
            slice.value,
            width = label_width
        ));
    }
    lines
}

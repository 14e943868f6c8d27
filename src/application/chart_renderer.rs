// Chart projection - Create-or-update over a chart surface
use crate::domain::chart::ChartData;
use crate::domain::view::ViewState;
use crate::domain::vote::VoteStats;

pub const CHART_TITLE: &str = "How the zone feels";

/// Something that can draw the comfort chart and redraw it in place
pub trait ChartSurface {
    type Handle;

    /// Draw a new chart and return its handle
    fn create(&mut self, data: &ChartData) -> Self::Handle;

    /// Redraw an existing chart with new data without recreating it
    fn update(&mut self, handle: &mut Self::Handle, data: &ChartData);
}

/// Project `stats` onto `surface`.
///
/// Outside the dashboard nothing is drawn and `handle` is passed back
/// untouched. In the dashboard an existing handle is updated, otherwise a new
/// chart is created.
pub fn render_chart<S: ChartSurface>(
    surface: &mut S,
    handle: Option<S::Handle>,
    view: ViewState,
    stats: &VoteStats,
) -> Option<S::Handle> {
    if !view.is_dashboard() {
        return handle;
    }

    let data = ChartData::from_stats(CHART_TITLE, stats);
    match handle {
        Some(mut existing) => {
            surface.update(&mut existing, &data);
            Some(existing)
        }
        None => Some(surface.create(&data)),
    }
}

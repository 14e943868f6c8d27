// Text screen for the voting and dashboard views
use crate::application::chart_renderer::render_chart;
use crate::application::view_controller::ViewSnapshot;
use crate::domain::view::ViewState;
use crate::domain::vote::VoteValue;
use crate::domain::zone::format_temperature;
use crate::presentation::text_chart::{TextChart, TextChartSurface};
use std::fmt::Write;

/// Renders snapshots and keeps the chart handle alive across renders
#[derive(Debug, Default)]
pub struct Screen {
    surface: TextChartSurface,
    chart: Option<TextChart>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart(&self) -> Option<&TextChart> {
        self.chart.as_ref()
    }

    pub fn render(&mut self, view: &ViewSnapshot<'_>) -> String {
        self.chart = render_chart(&mut self.surface, self.chart.take(), view.view, view.stats);

        let mut out = String::new();
        let _ = writeln!(out, "ThermaSense");
        let _ = writeln!(out, "Sensing how your space feels");
        let _ = writeln!(out);

        if view.zones.is_empty() {
            let _ = writeln!(out, "Loading zones...");
        } else {
            let _ = writeln!(out, "Choose your zone:");
            for (index, zone) in view.zones.iter().enumerate() {
                let marker = if view.selected_zone == Some(zone.zone_id.as_str()) {
                    '>'
                } else {
                    ' '
                };
                let _ = writeln!(out, " {} {}. {}", marker, index + 1, zone.name);
            }
        }
        let _ = writeln!(out);

        match (view.view, view.status) {
            (ViewState::Voting, Some(status)) => {
                let _ = writeln!(out, "You are in {}", status.name);
                let _ = writeln!(out, "{}°C", format_temperature(status.current_temp));
                let _ = writeln!(out);
                let _ = writeln!(out, "How do you feel?");
                let options: Vec<String> = VoteValue::ALL
                    .iter()
                    .map(|v| format!("[{}] {}", v.as_i8(), v.label()))
                    .collect();
                let _ = writeln!(out, "  {}", options.join("   "));
            }
            (ViewState::Dashboard, Some(status)) => {
                let _ = writeln!(out, "Got it! Current state of {}", status.name);
                let _ = writeln!(
                    out,
                    "Current: {}°C   Recommended: {}°C",
                    format_temperature(status.current_temp),
                    format_temperature(status.recommended_temp)
                );
                let _ = writeln!(out);
                if let Some(chart) = &self.chart {
                    let _ = writeln!(out, "{}", chart.render());
                }
                if let Some(at) = view.last_refreshed {
                    let _ = writeln!(out, "Updated {}", at.format("%H:%M:%S"));
                }
                let _ = writeln!(out, "Type `back` to return to voting");
            }
            (_, None) => {
                let _ = writeln!(out, "Loading...");
            }
        }

        if let Some(message) = view.message {
            let _ = writeln!(out);
            let _ = writeln!(out, "! {}", message);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::therma_api::ApiError;
    use crate::application::view_controller::ViewError;
    use crate::domain::vote::VoteStats;
    use crate::domain::zone::{Zone, ZoneStatus};

    fn snapshot<'a>(
        zones: &'a [Zone],
        view: ViewState,
        status: Option<&'a ZoneStatus>,
        stats: &'a VoteStats,
        message: Option<&'a ViewError>,
    ) -> ViewSnapshot<'a> {
        ViewSnapshot {
            zones,
            selected_zone: zones.first().map(|z| z.zone_id.as_str()),
            view,
            status,
            stats,
            last_refreshed: None,
            message,
        }
    }

    #[test]
    fn test_loading_states() {
        let stats = VoteStats::default();
        let mut screen = Screen::new();
        let out = screen.render(&snapshot(&[], ViewState::Voting, None, &stats, None));

        assert!(out.contains("Loading zones..."));
        assert!(out.contains("Loading..."));
    }

    #[test]
    fn test_voting_view_uses_placeholder_for_unknown_temperature() {
        let zones = vec![Zone::new("z1", "Lab"), Zone::new("z2", "Office")];
        let status = ZoneStatus::new("Lab", None, Some(22.0));
        let stats = VoteStats::default();
        let mut screen = Screen::new();

        let out = screen.render(&snapshot(&zones, ViewState::Voting, Some(&status), &stats, None));

        assert!(out.contains(" > 1. Lab"));
        assert!(out.contains("   2. Office"));
        assert!(out.contains("You are in Lab"));
        assert!(out.contains("...°C"));
        assert!(out.contains("[-1] Cold"));
        assert!(screen.chart().is_none());
    }

    #[test]
    fn test_dashboard_shows_temperatures_chart_and_message() {
        let zones = vec![Zone::new("z1", "Lab")];
        let status = ZoneStatus::new("Lab", Some(21.04), Some(23.5));
        let stats = VoteStats::new(2, 2, 0);
        let error = ViewError::Refresh(ApiError::Status {
            status: 500,
            detail: None,
        });
        let mut screen = Screen::new();

        let out = screen.render(&snapshot(
            &zones,
            ViewState::Dashboard,
            Some(&status),
            &stats,
            Some(&error),
        ));

        assert!(out.contains("Current: 21.0°C   Recommended: 23.5°C"));
        assert!(out.contains("(4 votes)"));
        assert!(out.contains("! Refresh failed"));

        let stats = VoteStats::new(2, 2, 4);
        screen.render(&snapshot(&zones, ViewState::Dashboard, Some(&status), &stats, None));
        assert_eq!(screen.chart().map(|c| c.revision), Some(1));
    }
}

// Chart domain model
use super::vote::{VoteStats, VoteValue};

/// One slice of the comfort chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub color: &'static str,
    pub value: u64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub slices: Vec<ChartSlice>,
    pub total: u64,
}

impl ChartData {
    pub fn from_stats(title: impl Into<String>, stats: &VoteStats) -> Self {
        let slices = VoteValue::ALL
            .iter()
            .map(|&value| ChartSlice {
                label: value.label(),
                color: slice_color(value),
                value: stats.count(value),
                share: stats.share(value),
            })
            .collect();

        Self {
            title: title.into(),
            slices,
            total: stats.total(),
        }
    }
}

fn slice_color(value: VoteValue) -> &'static str {
    match value {
        VoteValue::Cold => "#60a5fa",
        VoteValue::Comfortable => "#34d399",
        VoteValue::Hot => "#f87171",
    }
}

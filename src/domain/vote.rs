// Vote domain models
use serde::{Deserialize, Serialize, Serializer};

/// A user's thermal preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteValue {
    Cold,
    Comfortable,
    Hot,
}

impl VoteValue {
    pub const ALL: [VoteValue; 3] = [VoteValue::Cold, VoteValue::Comfortable, VoteValue::Hot];

    pub fn as_i8(self) -> i8 {
        match self {
            VoteValue::Cold => -1,
            VoteValue::Comfortable => 0,
            VoteValue::Hot => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VoteValue::Cold => "Cold",
            VoteValue::Comfortable => "Comfortable",
            VoteValue::Hot => "Hot",
        }
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(VoteValue::Cold),
            0 => Ok(VoteValue::Comfortable),
            1 => Ok(VoteValue::Hot),
            other => Err(other),
        }
    }
}

// The backend expects the bare integer in `vote_value`
impl Serialize for VoteValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

/// Aggregate vote counts for one zone, keyed on the wire by `"-1"`, `"0"`, `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteStats {
    #[serde(rename = "-1", default)]
    pub cold: u64,
    #[serde(rename = "0", default)]
    pub comfortable: u64,
    #[serde(rename = "1", default)]
    pub hot: u64,
}

impl VoteStats {
    pub fn new(cold: u64, comfortable: u64, hot: u64) -> Self {
        Self {
            cold,
            comfortable,
            hot,
        }
    }

    pub fn count(&self, value: VoteValue) -> u64 {
        match value {
            VoteValue::Cold => self.cold,
            VoteValue::Comfortable => self.comfortable,
            VoteValue::Hot => self.hot,
        }
    }

    pub fn total(&self) -> u64 {
        self.cold
            .saturating_add(self.comfortable)
            .saturating_add(self.hot)
    }

    /// Share of `value` in the total, 0.0 when nobody has voted
    pub fn share(&self, value: VoteValue) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(value) as f64 / total as f64
    }
}

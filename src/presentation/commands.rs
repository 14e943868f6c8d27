// Line commands typed by the user
use crate::domain::vote::VoteValue;
use crate::domain::zone::Zone;
use thiserror::Error;

pub const HELP: &str = "Commands: zones | zone <n|id> | vote <cold|comfortable|hot|-1|0|1> | back | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Zones,
    SelectZone(String),
    Vote(VoteValue),
    Back,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{0}` expects an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a vote; use cold, comfortable or hot")]
    InvalidVote(String),

    #[error("no zone matches `{0}`")]
    UnknownZone(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        let command = match head.to_ascii_lowercase().as_str() {
            "zones" | "ls" => Command::Zones,
            "zone" | "z" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("zone"));
                }
                Command::SelectZone(rest)
            }
            "vote" | "v" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("vote"));
                }
                Command::Vote(parse_vote(&rest)?)
            }
            "back" | "b" => Command::Back,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

pub fn parse_vote(input: &str) -> Result<VoteValue, CommandError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "cold" | "c" => Ok(VoteValue::Cold),
        "comfortable" | "ok" => Ok(VoteValue::Comfortable),
        "hot" | "h" => Ok(VoteValue::Hot),
        other => other
            .parse::<i64>()
            .ok()
            .and_then(|n| VoteValue::try_from(n).ok())
            .ok_or_else(|| CommandError::InvalidVote(other.to_string())),
    }
}

/// Resolve a 1-based index or a zone id against the loaded zones
pub fn resolve_zone<'a>(zones: &'a [Zone], selector: &str) -> Result<&'a Zone, CommandError> {
    let selector = selector.trim();
    if let Some(zone) = zones.iter().find(|z| z.zone_id == selector) {
        return Ok(zone);
    }

    selector
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| zones.get(index))
        .ok_or_else(|| CommandError::UnknownZone(selector.to_string()))
}

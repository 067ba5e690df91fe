//! Plain-text pointer traces
//!
//! One sample per line: `<slot> <press|move|release> <x> <y>`. Blank lines
//! and anything after a `#` are ignored.

use thiserror::Error;

use super::sample::{PointerSample, SampleKind, TouchSlot};

/// Errors raised while parsing a trace
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("line {line}: expected 4 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid slot '{value}'")]
    Slot { line: usize, value: String },

    #[error("line {line}: unknown sample kind '{value}'")]
    Kind { line: usize, value: String },

    #[error("line {line}: invalid coordinate '{value}'")]
    Coordinate { line: usize, value: String },
}

/// Parses a whole trace into samples, in file order
pub fn parse_trace(text: &str) -> Result<Vec<PointerSample>, TraceError> {
    let mut samples = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        samples.push(parse_line(index + 1, content)?);
    }

    Ok(samples)
}

fn parse_line(line: usize, content: &str) -> Result<PointerSample, TraceError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [slot, kind, x, y] = fields[..] else {
        return Err(TraceError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let slot = slot.parse::<u8>().map_err(|_| TraceError::Slot {
        line,
        value: slot.to_string(),
    })?;

    let kind = match kind.to_ascii_lowercase().as_str() {
        "press" | "down" => SampleKind::Press,
        "move" => SampleKind::Move,
        "release" | "up" => SampleKind::Release,
        _ => {
            return Err(TraceError::Kind {
                line,
                value: kind.to_string(),
            });
        }
    };

    let coordinate = |value: &str| {
        value.parse::<i32>().map_err(|_| TraceError::Coordinate {
            line,
            value: value.to_string(),
        })
    };

    Ok(PointerSample::new(
        TouchSlot(slot),
        kind,
        coordinate(x)?,
        coordinate(y)?,
    ))
}

/// Formats a sample back into a trace line
pub fn format_sample(sample: &PointerSample) -> String {
    format!("{} {} {} {}", sample.slot.0, sample.kind, sample.x, sample.y)
}

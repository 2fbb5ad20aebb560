//! Line-oriented keyframe script parser.
//!
//! Format (whitespace-separated fields, blank lines ignored):
//! ```text
//! <num_frames>
//! Frame <index>
//! translation <tx> <ty> <tz>
//! scale <sx> <sy> <sz>
//! rotation <ax> <ay> <az> <angle_degrees>
//! ```
//! Attribute lines after a `Frame` line apply to that keyframe; their order
//! within a block is not significant. Omitted attributes stay at their zero
//! default. The format is trusted: validation stops at tokenization, and
//! unrecognized record kinds are skipped.

use thiserror::Error;

use crate::data::KeyframeSet;
use crate::math::{AxisAngle, Quaternion, Vec3};

/// Errors produced while tokenizing a keyframe script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script is empty; expected a frame count on the first line")]
    Empty,
    #[error("line {line}: expected {expected} numeric fields for '{record}'")]
    FieldCount {
        line: usize,
        record: &'static str,
        expected: usize,
    },
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: keyframe index {index} outside 0..{num_frames}")]
    FrameOutOfRange {
        line: usize,
        index: usize,
        num_frames: usize,
    },
    #[error("line {line}: attribute '{record}' before any Frame line")]
    AttributeBeforeFrame { line: usize, record: &'static str },
}

fn floats<'a, const N: usize>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
    record: &'static str,
) -> Result<[f32; N], ScriptError> {
    let mut out = [0.0f32; N];
    for slot in &mut out {
        let token = tokens.next().ok_or(ScriptError::FieldCount {
            line,
            record,
            expected: N,
        })?;
        *slot = token.parse().map_err(|_| ScriptError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(out)
}

/// Parse a keyframe script into a sparse [`KeyframeSet`].
pub fn parse_keyframe_script(text: &str) -> Result<KeyframeSet, ScriptError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let (count_line, count_text) = lines
        .by_ref()
        .find(|(_, l)| !l.is_empty())
        .ok_or(ScriptError::Empty)?;
    let count_token = count_text.split_whitespace().next().unwrap_or(count_text);
    let num_frames: usize = count_token.parse().map_err(|_| ScriptError::InvalidNumber {
        line: count_line,
        token: count_token.to_string(),
    })?;

    let mut set = KeyframeSet::new(num_frames);
    let mut current: Option<usize> = None;

    for (line, text_line) in lines {
        let mut tokens = text_line.split_whitespace();
        let Some(record) = tokens.next() else {
            continue;
        };
        match record {
            "Frame" => {
                let token = tokens.next().ok_or(ScriptError::FieldCount {
                    line,
                    record: "Frame",
                    expected: 1,
                })?;
                let index: usize = token.parse().map_err(|_| ScriptError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })?;
                if index >= num_frames {
                    return Err(ScriptError::FrameOutOfRange {
                        line,
                        index,
                        num_frames,
                    });
                }
                set.keyframes.push(index);
                current = Some(index);
            }
            "rotation" => {
                let k = current.ok_or(ScriptError::AttributeBeforeFrame {
                    line,
                    record: "rotation",
                })?;
                let [x, y, z, angle] = floats::<4>(tokens, line, "rotation")?;
                let rotation = AxisAngle::new(Vec3::new(x, y, z), angle);
                set.rotations[k] = Quaternion::from_axis_angle(rotation).normalized();
            }
            "scale" => {
                let k = current.ok_or(ScriptError::AttributeBeforeFrame {
                    line,
                    record: "scale",
                })?;
                let [x, y, z] = floats::<3>(tokens, line, "scale")?;
                set.scales[k] = Vec3::new(x, y, z);
            }
            "translation" => {
                let k = current.ok_or(ScriptError::AttributeBeforeFrame {
                    line,
                    record: "translation",
                })?;
                let [x, y, z] = floats::<3>(tokens, line, "translation")?;
                set.translations[k] = Vec3::new(x, y, z);
            }
            // Trusted format: anything else is skipped.
            _ => {}
        }
    }

    log::debug!(
        "parsed keyframe script: {} frames, {} keyframes",
        set.num_frames,
        set.keyframes.len()
    );
    Ok(set)
}

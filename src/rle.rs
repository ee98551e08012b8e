//! Run Length Encoded pattern decoding.
//!
//! ```text
//! #N Acorn
//! x = 7, y = 3, rule = B3/S23
//! bo5b$3bo3b$2o2b3o!
//! ```
//!
//! The header places the origin at `(-(x / 2), y / 2 + 1)` so the pattern
//! sits roughly around `(0, 0)`. Rows run towards decreasing y.

use crate::error::RleError;

/// Decode RLE text into live cell coordinates, in encounter order.
///
/// Text after the terminating `!` is ignored.
pub fn decode(text: &str) -> Result<Vec<(i64, i64)>, RleError> {
    let mut decoder = Decoder::at(0, 0);
    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('x') {
            let (width, height) = parse_header(line, line_no)?;
            decoder = Decoder::at(-(width / 2), height / 2 + 1);
            continue;
        }
        decoder.feed(line, line_no)?;
        if decoder.done {
            break;
        }
    }
    Ok(decoder.cells)
}

struct Decoder {
    origin_x: i64,
    x: i64,
    y: i64,
    run: Option<i64>,
    cells: Vec<(i64, i64)>,
    done: bool,
}

impl Decoder {
    fn at(x: i64, y: i64) -> Self {
        Self {
            origin_x: x,
            x,
            y,
            run: None,
            cells: Vec::new(),
            done: false,
        }
    }

    fn take_run(&mut self) -> i64 {
        self.run.take().unwrap_or(1)
    }

    fn feed(&mut self, line: &str, line_no: usize) -> Result<(), RleError> {
        let overflow = || RleError::Overflow { line: line_no };
        for (column, ch) in line.chars().enumerate() {
            match ch {
                '0'..='9' => {
                    let digit = i64::from(ch as u8 - b'0');
                    let run = self
                        .run
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|r| r.checked_add(digit))
                        .ok_or_else(overflow)?;
                    self.run = Some(run);
                }
                'b' => {
                    let run = self.take_run();
                    self.x = self.x.checked_add(run).ok_or_else(overflow)?;
                }
                'o' => {
                    let run = self.take_run();
                    let end = self.x.checked_add(run).ok_or_else(overflow)?;
                    self.cells.extend((self.x..end).map(|x| (x, self.y)));
                    self.x = end;
                }
                '$' => {
                    let run = self.take_run();
                    self.x = self.origin_x;
                    self.y = self.y.checked_sub(run).ok_or_else(overflow)?;
                }
                '!' => {
                    self.done = true;
                    return Ok(());
                }
                c if c.is_whitespace() => {}
                other => {
                    return Err(RleError::UnknownCharacter {
                        ch: other,
                        line: line_no,
                        column: column + 1,
                    });
                }
            }
        }
        Ok(())
    }
}

fn parse_header(line: &str, line_no: usize) -> Result<(i64, i64), RleError> {
    let malformed = || RleError::Header {
        line: line_no,
        text: line.to_string(),
    };
    let mut width = None;
    let mut height = None;
    for field in line.split(',') {
        let (key, value) = field.split_once('=').ok_or_else(malformed)?;
        let value = value.trim();
        match key.trim() {
            "x" => width = Some(value.parse::<i64>().map_err(|_| malformed())?),
            "y" => height = Some(value.parse::<i64>().map_err(|_| malformed())?),
            "rule" => check_rule(value)?,
            _ => return Err(malformed()),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) if w >= 0 && h >= 0 => Ok((w, h)),
        _ => Err(malformed()),
    }
}

fn check_rule(rule: &str) -> Result<(), RleError> {
    let normalized: String = rule
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    match normalized.as_str() {
        "B3/S23" | "S23/B3" | "23/3" => Ok(()),
        _ => Err(RleError::UnsupportedRule(rule.to_string())),
    }
}

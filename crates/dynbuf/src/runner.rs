//! # Script Runner

use std::io::Write;

use dynbuf_core::{ArrayResult, DynamicArray};

use crate::error::DriverResult;
use crate::script::{Op, Script};

/// Summary of a finished run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Operations executed.
    pub executed: usize,
    /// Operations that returned an array error.
    pub failed: usize,
    /// Array contents after the last operation.
    pub final_contents: Vec<i64>,
}

/// Runs `script`, writing one line per operation to `out`.
///
/// # Arguments
///
/// * `script` - The operations to run
/// * `out` - Receives the result lines
///
/// # Errors
///
/// Returns [`DriverError::Io`](crate::DriverError::Io) if writing fails.
/// Array errors are printed and counted, not returned.
pub fn run_script<W: Write>(script: &Script, out: &mut W) -> DriverResult<RunReport> {
    let config = script.config.unwrap_or_default();
    let mut arr = match &script.initial {
        Some(values) => DynamicArray::from_values_with(&config, values),
        None => DynamicArray::with_config(&config),
    };

    tracing::info!(
        initial_len = arr.len(),
        ops = script.ops.len(),
        "running script"
    );

    let mut report = RunReport::default();
    for (step, op) in script.ops.iter().enumerate() {
        report.executed += 1;
        match apply(&mut arr, op) {
            Ok(line) => {
                tracing::debug!(step, ?op, %line, "op ok");
                writeln!(out, "{line}")?;
            }
            Err(err) => {
                report.failed += 1;
                tracing::warn!(step, ?op, code = err.code(), error = %err, "op failed");
                writeln!(out, "error({}): {err}", err.code())?;
            }
        }
    }
    out.flush()?;

    report.final_contents = arr.as_slice().to_vec();
    Ok(report)
}

/// Executes one operation and renders its result line.
fn apply(arr: &mut DynamicArray, op: &Op) -> ArrayResult<String> {
    const OK: &str = "ok";

    let line = match *op {
        Op::Get { index } => arr.get(index)?.to_string(),
        Op::Set { index, value } => {
            arr.set(index, value)?;
            OK.to_string()
        }
        Op::Len => arr.len().to_string(),
        Op::Append { value } => {
            arr.append(value)?;
            OK.to_string()
        }
        Op::Pop => arr.pop()?.to_string(),
        Op::PopAt { index } => arr.pop_at(index)?.to_string(),
        Op::Insert { index, value } => {
            arr.insert(index, value)?;
            OK.to_string()
        }
        Op::Remove { value } => {
            arr.remove(value)?;
            OK.to_string()
        }
        Op::IndexOf { value } => arr.index_of(value)?.to_string(),
        Op::Count { value } => arr.count(value).to_string(),
        Op::Sort => {
            arr.sort();
            OK.to_string()
        }
        Op::Reverse => {
            arr.reverse();
            OK.to_string()
        }
        Op::Print => arr.to_string(),
    };
    Ok(line)
}

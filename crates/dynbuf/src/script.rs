//! # Scripts
//!
//! A script names the starting contents, an optional array configuration,
//! and a list of operations:
//!
//! ```toml
//! initial = [1, 2, 3]
//!
//! [config]
//! initial_capacity = 4
//!
//! [[ops]]
//! op = "insert"
//! index = 1
//! value = 9
//!
//! [[ops]]
//! op = "print"
//! ```

use std::path::Path;

use dynbuf_core::ArrayConfig;
use serde::{Deserialize, Serialize};

use crate::error::DriverResult;

/// One array operation, tagged by `op` in TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Read the element at `index`.
    Get {
        /// Position to read.
        index: usize,
    },
    /// Overwrite the element at `index`.
    Set {
        /// Position to write.
        index: usize,
        /// New value.
        value: i64,
    },
    /// Report the length.
    Len,
    /// Append `value`.
    Append {
        /// Value to append.
        value: i64,
    },
    /// Remove and report the last element.
    Pop,
    /// Remove and report the element at `index`.
    PopAt {
        /// Position to remove.
        index: usize,
    },
    /// Insert `value` at `index`.
    Insert {
        /// Position to insert at.
        index: usize,
        /// Value to insert.
        value: i64,
    },
    /// Remove the first element equal to `value`.
    Remove {
        /// Value to remove.
        value: i64,
    },
    /// Report the first index holding `value`.
    IndexOf {
        /// Value to search for.
        value: i64,
    },
    /// Report how many elements equal `value`.
    Count {
        /// Value to count.
        value: i64,
    },
    /// Sort ascending.
    Sort,
    /// Reverse the order.
    Reverse,
    /// Print the whole array.
    Print,
}

/// A scripted run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Starting contents. Absent means an empty array.
    #[serde(default)]
    pub initial: Option<Vec<i64>>,
    /// Array sizing. Absent means defaults.
    #[serde(default)]
    pub config: Option<ArrayConfig>,
    /// Operations, executed in order.
    #[serde(default)]
    pub ops: Vec<Op>,
}

impl Script {
    /// Parses a script from TOML text and validates its configuration.
    ///
    /// # Errors
    ///
    /// - [`DriverError::Parse`](crate::DriverError::Parse) on malformed TOML
    ///   or unknown operations
    /// - [`DriverError::Array`](crate::DriverError::Array) if `config` is
    ///   invalid
    pub fn from_toml_str(text: &str) -> DriverResult<Self> {
        let script: Self = toml::from_str(text)?;
        if let Some(config) = &script.config {
            config.validate()?;
        }
        Ok(script)
    }

    /// Reads and parses a script file.
    ///
    /// # Errors
    ///
    /// [`DriverError::Io`](crate::DriverError::Io) if the file cannot be
    /// read, otherwise as [`Script::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> DriverResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The smoke scenario the demo runs when no script is given.
    ///
    /// Walks every operation once, then makes the three documented failing
    /// calls and drains the array. Ends empty with three failures.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            initial: Some(vec![1, 2, 3]),
            config: None,
            ops: vec![
                Op::Get { index: 0 },
                Op::Get { index: 1 },
                Op::Get { index: 2 },
                Op::Len,
                Op::Append { value: 4 },
                Op::Print,
                Op::Pop,
                Op::Insert { index: 1, value: 9 },
                Op::Print,
                Op::IndexOf { value: 9 },
                Op::Remove { value: 9 },
                Op::Append { value: 2 },
                Op::Count { value: 2 },
                Op::Reverse,
                Op::Print,
                Op::Sort,
                Op::Print,
                Op::PopAt { index: 0 },
                Op::Set { index: 2, value: 7 },
                Op::Print,
                Op::Get { index: 5 },
                Op::IndexOf { value: 9 },
                Op::Pop,
                Op::Pop,
                Op::Pop,
                Op::Pop,
                Op::Print,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DriverError;

    #[test]
    fn test_parse_full_script() {
        let script = Script::from_toml_str(
            r#"
            initial = [1, 2, 3]

            [config]
            initial_capacity = 8

            [[ops]]
            op = "pop_at"
            index = 1

            [[ops]]
            op = "index_of"
            value = 3

            [[ops]]
            op = "sort"
            "#,
        )
        .unwrap();

        assert_eq!(script.initial, Some(vec![1, 2, 3]));
        assert_eq!(script.config.unwrap().initial_capacity, 8);
        assert_eq!(
            script.ops,
            vec![Op::PopAt { index: 1 }, Op::IndexOf { value: 3 }, Op::Sort]
        );
    }

    #[test]
    fn test_empty_script() {
        let script = Script::from_toml_str("").unwrap();
        assert_eq!(script, Script::default());
    }

    #[test]
    fn test_unknown_op_rejected() {
        let err = Script::from_toml_str("[[ops]]\nop = \"shuffle\"\n").unwrap_err();
        assert!(matches!(err, DriverError::Parse(_)));
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = Script::from_toml_str("[[ops]]\nop = \"insert\"\nindex = 0\n").unwrap_err();
        assert!(matches!(err, DriverError::Parse(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Script::from_toml_str("[config]\ninitial_capacity = 0\n").unwrap_err();
        assert!(matches!(err, DriverError::Array(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Script::load("/nonexistent/script.toml").unwrap_err();
        assert!(matches!(err, DriverError::Io(_)));
    }

    #[test]
    fn test_builtin_round_trips_through_toml() {
        let builtin = Script::builtin();
        let text = toml::to_string(&builtin).unwrap();
        assert_eq!(Script::from_toml_str(&text).unwrap(), builtin);
    }
}

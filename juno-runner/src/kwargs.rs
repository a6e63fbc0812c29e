//! Extra arguments handed through to snakemake as `key=value` tokens.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RunnerError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraArgument {
    Single(String),
    List(Vec<String>),
}

impl ExtraArgument {
    fn parse(value: &str) -> ExtraArgument {
        if value.starts_with('[') {
            let items = value.replace(['[', ']'], "");
            ExtraArgument::List(items.split(',').map(|s| s.to_string()).collect())
        } else {
            ExtraArgument::Single(value.to_string())
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            ExtraArgument::Single(value) => vec![value.as_str()],
            ExtraArgument::List(values) => values.iter().map(|v| v.as_str()).collect(),
        }
    }
}

pub type ExtraArguments = BTreeMap<String, ExtraArgument>;

///
/// Parse `key=value` tokens. A value starting with `[` is read as a comma
/// separated list, e.g. `until=[rule_a,rule_b]`. A token that does not
/// split into exactly one key and one value is rejected.
///
pub fn parse_extra_arguments<S: AsRef<str>>(tokens: &[S]) -> Result<ExtraArguments> {
    let mut arguments = ExtraArguments::new();

    for token in tokens {
        let token = token.as_ref();
        let pieces: Vec<&str> = token.split('=').collect();
        let [key, value] = pieces.as_slice() else {
            return Err(RunnerError::InvalidExtraArgument(token.to_string()));
        };
        arguments.insert(key.to_string(), ExtraArgument::parse(value));
    }

    Ok(arguments)
}

/// Render the arguments as command line flags. Underscores in keys become dashes.
pub fn to_command_args(arguments: &ExtraArguments) -> Vec<String> {
    let mut args = Vec::new();
    for (key, value) in arguments {
        args.push(format!("--{}", key.replace('_', "-")));
        args.extend(value.values().into_iter().map(|v| v.to_string()));
    }
    args
}

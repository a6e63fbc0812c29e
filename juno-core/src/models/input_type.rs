use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::JunoError;

///
/// The kind of input files a pipeline expects per sample.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Paired-end short reads (`R1` and `R2`)
    Fastq,
    /// One assembly per sample
    Fasta,
    /// Paired-end reads and an assembly per sample
    Both,
}

impl InputType {
    /// Whether every sample must have both mates of a read pair.
    pub fn requires_paired(&self) -> bool {
        matches!(self, InputType::Fastq | InputType::Both)
    }

    /// Whether every sample must have an assembly.
    pub fn requires_assembly(&self) -> bool {
        matches!(self, InputType::Fasta | InputType::Both)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Fastq => "fastq",
            InputType::Fasta => "fasta",
            InputType::Both => "both",
        }
    }
}

impl FromStr for InputType {
    type Err = JunoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fastq" => Ok(InputType::Fastq),
            "fasta" => Ok(InputType::Fasta),
            "both" => Ok(InputType::Both),
            _ => Err(JunoError::InvalidInputType(s.to_string())),
        }
    }
}

impl Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("fastq", InputType::Fastq, true, false)]
    #[case("fasta", InputType::Fasta, false, true)]
    #[case("both", InputType::Both, true, true)]
    fn test_parse_input_type(
        #[case] raw: &str,
        #[case] expected: InputType,
        #[case] paired: bool,
        #[case] assembly: bool,
    ) {
        let input_type = InputType::from_str(raw).unwrap();
        assert_eq!(input_type, expected);
        assert_eq!(input_type.requires_paired(), paired);
        assert_eq!(input_type.requires_assembly(), assembly);
        assert_eq!(input_type.to_string(), raw);
    }

    #[rstest]
    #[case("FASTQ")]
    #[case("bam")]
    #[case("")]
    fn test_reject_unknown_input_type(#[case] raw: &str) {
        let result = InputType::from_str(raw);
        assert!(matches!(result, Err(JunoError::InvalidInputType(s)) if s == raw));
    }
}

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// Role of one input file within a sample.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileRole {
    R1,
    R2,
    Assembly,
}

impl FileRole {
    /// Role for a paired-read mate indicator (`1` or `2`).
    pub fn from_mate(mate: &str) -> Option<FileRole> {
        match mate {
            "1" => Some(FileRole::R1),
            "2" => Some(FileRole::R2),
            _ => None,
        }
    }
}

impl Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::R1 => write!(f, "R1"),
            FileRole::R2 => write!(f, "R2"),
            FileRole::Assembly => write!(f, "assembly"),
        }
    }
}

///
/// The input files discovered for one sample.
///
/// Serializes to a mapping with keys drawn from `R1`, `R2` and `assembly`;
/// roles that were not found are left out.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(rename = "R1", default, skip_serializing_if = "Option::is_none")]
    pub r1: Option<String>,

    #[serde(rename = "R2", default, skip_serializing_if = "Option::is_none")]
    pub r2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
}

impl SampleRecord {
    pub fn get(&self, role: FileRole) -> Option<&str> {
        match role {
            FileRole::R1 => self.r1.as_deref(),
            FileRole::R2 => self.r2.as_deref(),
            FileRole::Assembly => self.assembly.as_deref(),
        }
    }

    pub fn set(&mut self, role: FileRole, path: String) {
        let slot = match role {
            FileRole::R1 => &mut self.r1,
            FileRole::R2 => &mut self.r2,
            FileRole::Assembly => &mut self.assembly,
        };
        *slot = Some(path);
    }

    pub fn has_pair(&self) -> bool {
        self.r1.is_some() && self.r2.is_some()
    }

    pub fn has_assembly(&self) -> bool {
        self.assembly.is_some()
    }

    /// Copy every role present in `other` into this record.
    pub fn absorb(&mut self, other: SampleRecord) {
        if other.r1.is_some() {
            self.r1 = other.r1;
        }
        if other.r2.is_some() {
            self.r2 = other.r2;
        }
        if other.assembly.is_some() {
            self.assembly = other.assembly;
        }
    }
}

///
/// Mapping of sample identifier to its input files for one discovery run.
///
/// Sample identifiers are always kept as strings, so `"1234"` never turns
/// into a number. Keys are ordered, which makes two manifests built from the
/// same directory compare (and serialize) equal no matter the order in which
/// the file system listed the files.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    samples: BTreeMap<String, SampleRecord>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` under `role` for `sample`, creating the record if needed.
    pub fn insert_file(&mut self, sample: &str, role: FileRole, path: String) {
        self.samples
            .entry(sample.to_string())
            .or_default()
            .set(role, path);
    }

    /// Union of two manifests; roles of `other` are added to existing records.
    pub fn merge(&mut self, other: Manifest) {
        for (sample, record) in other.samples {
            self.samples.entry(sample).or_default().absorb(record);
        }
    }

    pub fn remove(&mut self, sample: &str) -> Option<SampleRecord> {
        self.samples.remove(sample)
    }

    pub fn get(&self, sample: &str) -> Option<&SampleRecord> {
        self.samples.get(sample)
    }

    pub fn contains(&self, sample: &str) -> bool {
        self.samples.contains_key(sample)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_ids(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> Iter<'_, String, SampleRecord> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = (&'a String, &'a SampleRecord);
    type IntoIter = Iter<'a, String, SampleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl FromIterator<(String, SampleRecord)> for Manifest {
    fn from_iter<T: IntoIterator<Item = (String, SampleRecord)>>(iter: T) -> Self {
        Manifest {
            samples: iter.into_iter().collect(),
        }
    }
}

//! Input parsing (TGF/APX) and ICCMA output formatting.

pub mod apx;
pub mod tgf;
pub mod writer;

use std::str::FromStr;

use anyhow::Result;

use crate::aa::Framework;
use crate::error::AfError;

/// The supported input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Trivial Graph Format.
    Tgf,
    /// Aspartix format.
    Apx,
}

impl FileFormat {
    /// The closed set of format names, for `--formats`.
    pub fn all() -> &'static [&'static str] {
        &["tgf", "apx"]
    }

    /// Parses `text` under this format.
    pub fn parse(self, text: &str, validate: bool) -> Result<Framework> {
        match self {
            FileFormat::Tgf => tgf::parse(text, validate),
            FileFormat::Apx => apx::parse(text, validate),
        }
    }
}

impl FromStr for FileFormat {
    type Err = AfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tgf" => Ok(FileFormat::Tgf),
            "apx" => Ok(FileFormat::Apx),
            other => Err(AfError::UnsupportedConfiguration(format!(
                "unknown file format \"{other}\"; see --formats"
            ))),
        }
    }
}

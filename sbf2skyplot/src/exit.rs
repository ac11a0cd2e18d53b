//! Process outcomes
use std::process::ExitCode;

use crate::{Error, SkyviewError};

/// Outcome of one run, turned into the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// SBF file does not exist
    FileNotExist,
    /// Conversion program is not installed
    NotInPath,
    /// SBF block we do not know of
    UnknownOption,
    /// SBF block that does not fit the sky-view
    WrongOption,
    /// Working directory does not exist
    DirNotExist,
    Failure,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::FileNotExist => 1,
            Self::NotInPath => 2,
            Self::UnknownOption => 3,
            Self::WrongOption => 5,
            Self::DirNotExist => 7,
            Self::Failure => 99,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl From<&Error> for ExitStatus {
    fn from(e: &Error) -> Self {
        match e {
            Error::DirNotExist(_) => Self::DirNotExist,
            Error::FileNotExist(_) => Self::FileNotExist,
            Error::SkyviewError(e) => match e {
                SkyviewError::ConverterNotFound(_) => Self::NotInPath,
                SkyviewError::UnknownBlock(_) => Self::UnknownOption,
                SkyviewError::UnsupportedBlock(_) => Self::WrongOption,
                _ => Self::Failure,
            },
            Error::StdioError(_) => Self::Failure,
        }
    }
}

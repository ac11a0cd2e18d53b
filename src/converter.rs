//! SBF to STF conversion
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    constants::{SBF2STF, SBF2STF_ENV},
    prelude::Error,
    stf::StfBlock,
};

/// Converts a binary SBF log into one STF table per requested block.
pub trait Converter {
    /// Returns the path of each table, in the order of `blocks`.
    /// When `overwrite` is false, previously converted tables are reused.
    fn convert(
        &self,
        sbf: &Path,
        blocks: &[StfBlock],
        overwrite: bool,
    ) -> Result<Vec<PathBuf>, Error>;
}

/// [Converter] deploying the `sbf2stf` program
#[derive(Debug, Clone)]
pub struct Sbf2Stf {
    /// Program to run
    pub program: String,
    /// Forward program output to our terminal
    pub verbose: bool,
}

impl Default for Sbf2Stf {
    /// $SBF2STF is always prefered, otherwise we look for `sbf2stf` in $PATH
    fn default() -> Self {
        Self {
            program: std::env::var(SBF2STF_ENV).unwrap_or_else(|_| SBF2STF.to_string()),
            verbose: false,
        }
    }
}

impl Sbf2Stf {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            verbose: false,
        }
    }
    pub fn with_verbosity(&self, verbose: bool) -> Self {
        let mut s = self.clone();
        s.verbose = verbose;
        s
    }
    fn run(&self, sbf: &Path, block: StfBlock) -> Result<(), Error> {
        let mut cmd = Command::new(&self.program);
        // tables are generated in the working directory
        match (sbf.parent(), sbf.file_name()) {
            (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
                cmd.current_dir(parent).arg("-f").arg(name);
            },
            _ => {
                cmd.arg("-f").arg(sbf);
            },
        }
        cmd.arg("-m").arg(block.to_string());

        debug!("running {:?}", cmd);
        let output = cmd.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ConverterNotFound(self.program.clone()),
            _ => Error::IoError(e),
        })?;

        if self.verbose {
            for line in String::from_utf8_lossy(&output.stdout).lines() {
                debug!("{}: {}", self.program, line);
            }
        }
        if !output.status.success() {
            for line in String::from_utf8_lossy(&output.stderr).lines() {
                error!("{}: {}", self.program, line);
            }
            return Err(Error::ConversionFailed {
                path: sbf.to_path_buf(),
                status: output.status.to_string(),
            });
        }
        Ok(())
    }
}

impl Converter for Sbf2Stf {
    fn convert(
        &self,
        sbf: &Path,
        blocks: &[StfBlock],
        overwrite: bool,
    ) -> Result<Vec<PathBuf>, Error> {
        let mut tables = Vec::with_capacity(blocks.len());
        for block in blocks {
            let table = sbf.with_file_name(block.table_name(sbf));
            if table.is_file() && !overwrite {
                info!("reusing \"{}\"", table.display());
            } else {
                info!("converting {} \"{}\"", block, sbf.display());
                self.run(sbf, *block)?;
                if !table.is_file() {
                    return Err(Error::MissingConversionOutput(table));
                }
            }
            tables.push(table);
        }
        Ok(tables)
    }
}

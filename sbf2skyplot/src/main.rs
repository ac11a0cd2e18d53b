//! Command line tool to plot the sky-view of Septentrio SBF data.
mod cli;
mod exit;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cli::Cli;
use exit::ExitStatus;

use env_logger::{Builder, Target};
use log::LevelFilter;

#[macro_use]
extern crate log;

use sbf_skyview::prelude::{
    build_all_tracks, date_string, distinct_satellites, filter_valid, parse_channel_status,
    skyview, svid_to_sv, utc_from_week_tow, valid_subset, ChannelStatusRecord, Converter,
    DateFormat, Error as SkyviewError, Sbf2Stf, ValidityPolicy,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    StdioError(#[from] std::io::Error),
    #[error("directory {0} does not exist")]
    DirNotExist(PathBuf),
    #[error("SBF datafile {0} does not exist")]
    FileNotExist(PathBuf),
    #[error(transparent)]
    SkyviewError(#[from] SkyviewError),
}

/*
 * Resolves the working directory (relative to `cwd`)
 * and verifies the SBF file exists in there.
 * Returns (working directory, SBF file path)
 */
fn workspace(cwd: &Path, cli: &Cli) -> Result<(PathBuf, PathBuf), Error> {
    let workdir = cwd.join(cli.directory());
    if !workdir.is_dir() {
        return Err(Error::DirNotExist(workdir));
    }
    debug!("working directory: \"{}\"", workdir.display());

    let sbf = workdir.join(cli.sbf_file());
    if !sbf.is_file() {
        return Err(Error::FileNotExist(sbf));
    }
    Ok((workdir, sbf))
}

/// Default figure name: %Y-%m-%d-skyview.html, dated by given record
fn default_output_name(first: &ChannelStatusRecord) -> String {
    let t0 = utc_from_week_tow(first.week, first.tow);
    format!("{}-skyview.html", date_string(t0, DateFormat::FileName))
}

/// Figure location, in the working directory
fn output_path(workdir: &Path, custom: Option<&String>, first: &ChannelStatusRecord) -> PathBuf {
    match custom {
        Some(name) => workdir.join(name),
        None => workdir.join(default_output_name(first)),
    }
}

fn run(cli: &Cli, workdir: &Path, sbf: &Path) -> Result<(), Error> {
    let verbose = cli.verbose();

    let block = cli.block()?;
    if !block.has_angles() {
        return Err(SkyviewError::UnsupportedBlock(block.to_string()).into());
    }

    let converter = Sbf2Stf::default().with_verbosity(verbose);
    let tables = converter.convert(sbf, &[block], cli.overwrite())?;

    let records = parse_channel_status(&tables[0])?;
    let first = records.first().ok_or(SkyviewError::EmptyDataset)?;

    let t0 = utc_from_week_tow(first.week, first.tow);
    let date = date_string(t0, DateFormat::Display);
    debug!("WkNr = {} - date = {}", first.week, date);

    let mask = filter_valid(&records, &ValidityPolicy::default());
    let valid = valid_subset(&records, &mask);
    info!(
        "{} channel status records, {} with valid elevation",
        records.len(),
        valid.len()
    );

    let svids = distinct_satellites(&valid);
    for svid in svids.iter() {
        match svid_to_sv(*svid) {
            Some(sv) => debug!("SVID = {} ({})", svid, sv),
            None => warn!("SVID = {} is not a known satellite", svid),
        }
    }

    let tracks = build_all_tracks(&svids, &valid, cli.hourly_match());

    let plot = skyview(&tracks, &date);
    let output = output_path(workdir, cli.output_name(), first);
    plot.write_html(&output)?;
    info!("\"{}\" generated", output.display());

    if verbose {
        plot.show();
    }
    Ok(())
}

pub fn main() -> ExitCode {
    let cli = Cli::new();

    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false);
    if cli.verbose() {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let status = match std::env::current_dir()
        .map_err(Error::from)
        .and_then(|cwd| workspace(&cwd, &cli))
        .and_then(|(workdir, sbf)| run(&cli, &workdir, &sbf))
    {
        Ok(()) => ExitStatus::Success,
        Err(e) => {
            eprintln!("{}. Exiting.", e);
            ExitStatus::from(&e)
        },
    };
    status.into()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs::{create_dir_all, remove_dir_all, write};

    fn cli(args: &[&str]) -> Cli {
        Cli {
            matches: Cli::command().try_get_matches_from(args).unwrap(),
        }
    }

    /// Fresh temporary directory, named after the test
    fn temporary_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("sbf2skyplot-{}-{}", std::process::id(), name));
        create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_directory() {
        let cwd = temporary_dir("missing_directory");
        let cli = cli(&["sbf2skyplot", "-f", "ZEEG2000.16_", "-d", "nope"]);
        match workspace(&cwd, &cli) {
            Err(e) => {
                assert!(matches!(e, Error::DirNotExist(ref dir) if dir == &cwd.join("nope")));
                assert_eq!(ExitStatus::from(&e).code(), 7);
            },
            Ok(_) => panic!("resolved non existing directory"),
        }
        remove_dir_all(&cwd).unwrap();
    }

    #[test]
    fn missing_sbf_file() {
        let cwd = temporary_dir("missing_sbf_file");
        create_dir_all(cwd.join("data")).unwrap();
        let cli = cli(&["sbf2skyplot", "-f", "ZEEG2000.16_", "-d", "data"]);
        match workspace(&cwd, &cli) {
            Err(e) => {
                let expected = cwd.join("data").join("ZEEG2000.16_");
                assert!(matches!(e, Error::FileNotExist(ref sbf) if sbf == &expected));
                assert_eq!(ExitStatus::from(&e).code(), 1);
            },
            Ok(_) => panic!("resolved non existing SBF file"),
        }
        remove_dir_all(&cwd).unwrap();
    }

    #[test]
    fn resolved_workspace() {
        let cwd = temporary_dir("resolved_workspace");
        create_dir_all(cwd.join("data")).unwrap();
        write(cwd.join("data").join("ZEEG2000.16_"), b"").unwrap();

        let before = std::env::current_dir().unwrap();
        let relative = cli(&["sbf2skyplot", "-f", "ZEEG2000.16_", "-d", "data"]);
        let (workdir, sbf) = workspace(&cwd, &relative).unwrap();
        assert_eq!(workdir, cwd.join("data"));
        assert_eq!(sbf, cwd.join("data").join("ZEEG2000.16_"));

        // process working directory is left untouched
        assert_eq!(std::env::current_dir().unwrap(), before);

        // absolute --dir is used as is
        let dir = cwd.join("data");
        let absolute = cli(&["sbf2skyplot", "-f", "ZEEG2000.16_", "-d", dir.to_str().unwrap()]);
        let (workdir, _) = workspace(Path::new("/"), &absolute).unwrap();
        assert_eq!(workdir, dir);

        remove_dir_all(&cwd).unwrap();
    }

    #[test]
    fn figure_name() {
        let first = ChannelStatusRecord::new(1860, 7200.0, 5, 30.0, 45.0);
        assert_eq!(default_output_name(&first), "2015-08-30-skyview.html");

        // week 1860, day 2
        let first = ChannelStatusRecord::new(1860, 2.0 * 86400.0 + 43200.0, 5, 30.0, 45.0);
        assert_eq!(default_output_name(&first), "2015-09-01-skyview.html");

        let workdir = Path::new("data");
        assert_eq!(
            output_path(workdir, None, &first),
            workdir.join("2015-09-01-skyview.html")
        );
        let custom = "sky.html".to_string();
        assert_eq!(
            output_path(workdir, Some(&custom), &first),
            workdir.join("sky.html")
        );
    }

    #[test]
    fn io_error_cause() {
        let e = Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only file system",
        ));
        assert_eq!(e.to_string(), "i/o error: read-only file system");
    }
}

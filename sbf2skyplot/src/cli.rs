use std::{path::PathBuf, str::FromStr};

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};
use sbf_skyview::prelude::{Error, HourlyMatch, StfBlock};

pub struct Cli {
    /// arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: Self::command().get_matches(),
        }
    }
    pub fn command() -> Command {
        Command::new("sbf2skyplot")
            .author(env!("CARGO_PKG_AUTHORS"))
            .version(env!("CARGO_PKG_VERSION"))
            .about("Plots the SkyView from Septentrio SBF data")
            .long_about("sbf2skyplot converts the ChannelStatus block of an SBF file
with the sbf2stf program, then renders each satellite's elevation and azimuth
on a sky-view. The $SBF2STF variable is automatically picked up and prefered
to locate the conversion program.")
            .arg_required_else_help(true)
            .color(ColorChoice::Always)
            .next_help_heading("Input")
            .arg(
                Arg::new("file")
                    .short('f')
                    .long("file")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf))
                    .required(true)
                    .help("Name of SBF file"),
            )
            .arg(
                Arg::new("dir")
                    .short('d')
                    .long("dir")
                    .value_name("DIRECTORY")
                    .value_parser(value_parser!(PathBuf))
                    .default_value(".")
                    .help("Directory of SBF file (defaults to .)"),
            )
            .arg(
                Arg::new("overwrite")
                    .short('o')
                    .long("overwrite")
                    .action(ArgAction::SetTrue)
                    .help("Overwrite intermediate files (default False)"),
            )
            .arg(
                Arg::new("block")
                    .short('b')
                    .long("block")
                    .value_name("BLOCK")
                    .default_value("ChannelStatus_1")
                    .help("SBF block to convert. Only ChannelStatus_1 carries the sky-view angles."),
            )
            .next_help_heading("Sky-view")
            .arg(
                Arg::new("hour-tolerance")
                    .long("hour-tolerance")
                    .value_name("SECONDS")
                    .value_parser(value_parser!(f64))
                    .help("Tolerance when selecting full hour samples.
Full hours are strictly matched by default."),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .value_name("NAME")
                    .help("Custom output file name. Defaults to %Y-%m-%d-skyview.html"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Displays interactive graphs and increase output verbosity (default False)"),
            )
    }
    pub fn sbf_file(&self) -> &PathBuf {
        self.matches
            .get_one::<PathBuf>("file")
            .expect("--file is required")
    }
    pub fn directory(&self) -> &PathBuf {
        self.matches
            .get_one::<PathBuf>("dir")
            .expect("--dir has a default value")
    }
    pub fn overwrite(&self) -> bool {
        self.matches.get_flag("overwrite")
    }
    pub fn verbose(&self) -> bool {
        self.matches.get_flag("verbose")
    }
    pub fn block(&self) -> Result<StfBlock, Error> {
        let block = self
            .matches
            .get_one::<String>("block")
            .expect("--block has a default value");
        StfBlock::from_str(block)
    }
    pub fn hourly_match(&self) -> HourlyMatch {
        match self.matches.get_one::<f64>("hour-tolerance") {
            Some(dt) => HourlyMatch::Tolerance(*dt),
            None => HourlyMatch::Exact,
        }
    }
    pub fn output_name(&self) -> Option<&String> {
        self.matches.get_one::<String>("output")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    fn cli(args: &[&str]) -> Cli {
        Cli {
            matches: Cli::command()
                .try_get_matches_from(args)
                .unwrap(),
        }
    }
    #[test]
    fn default_options() {
        let cli = cli(&["sbf2skyplot", "-f", "ZEEG2000.16_"]);
        assert_eq!(cli.sbf_file(), &PathBuf::from("ZEEG2000.16_"));
        assert_eq!(cli.directory(), &PathBuf::from("."));
        assert!(!cli.overwrite());
        assert!(!cli.verbose());
        assert_eq!(cli.block().unwrap(), StfBlock::ChannelStatus1);
        assert_eq!(cli.hourly_match(), HourlyMatch::Exact);
        assert!(cli.output_name().is_none());
    }
    #[test]
    fn custom_options() {
        let cli = cli(&[
            "sbf2skyplot",
            "--file",
            "ZEEG2000.16_",
            "--dir",
            "data",
            "-o",
            "-v",
            "--hour-tolerance",
            "0.5",
            "-b",
            "MeasEpoch_2",
            "--output",
            "sky.html",
        ]);
        assert_eq!(cli.directory(), &PathBuf::from("data"));
        assert!(cli.overwrite());
        assert!(cli.verbose());
        assert_eq!(cli.block().unwrap(), StfBlock::MeasEpoch2);
        assert_eq!(cli.hourly_match(), HourlyMatch::Tolerance(0.5));
        assert_eq!(cli.output_name(), Some(&"sky.html".to_string()));
    }
    #[test]
    fn missing_file() {
        assert!(Cli::command()
            .try_get_matches_from(["sbf2skyplot", "-d", "data"])
            .is_err());
    }
    #[test]
    fn package_metadata() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_author(), Some("sbf-skyview contributors"));
        assert_eq!(cmd.get_version(), Some("0.1.0"));
    }
    #[test]
    fn unknown_block() {
        let cli = cli(&["sbf2skyplot", "-f", "ZEEG2000.16_", "-b", "Nope_1"]);
        assert!(matches!(cli.block(), Err(Error::UnknownBlock(_))));
    }
}

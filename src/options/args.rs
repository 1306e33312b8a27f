// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "memq [OPTIONS]";

/// The arguments for memq.
#[derive(Parser, Debug, Default)]
#[command(
    name = "memq",
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub output_args: OutputArgs,

    #[command(flatten)]
    pub source_args: SourceArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options")]
pub struct OutputArgs {
    #[arg(
        short = 'u',
        long,
        value_name = "UNIT",
        value_parser = ["b", "kb", "mb", "gb"],
        ignore_case = true,
        help = "Prints memory values in a fixed unit.",
        long_help = indoc! {
            "Prints memory values as whole numbers of the given unit. Values are \
            truncated, not rounded. Units use powers of 1024, so 'kb' is 1024 bytes.

            If not set, values are printed with the most fitting binary prefix."
        }
    )]
    pub unit: Option<String>,

    #[arg(
        short = 'j',
        long,
        action = ArgAction::SetTrue,
        help = "Prints the memory snapshot as JSON.",
        long_help = "Prints the memory snapshot as a JSON object with the keys 'physical_memory' \
                    and 'free_memory'. Values are in bytes unless '--unit' is set."
    )]
    pub json: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Source Options")]
pub struct SourceArgs {
    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. If not set, the default location in \
                    the user's config directory is checked, and skipped if it does not exist."
    )]
    pub config_location: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Reads memory information from this file instead of /proc/meminfo.",
        long_help = "Reads memory information from this file instead of /proc/meminfo. The file \
                    must use the /proc/meminfo format. Only has an effect on Linux."
    )]
    pub meminfo_path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Writes debug logs to this file.",
        long_help = "Writes debug logs to this file. Only has an effect if memq was built with \
                    the 'logging' feature."
    )]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based off of [`Args`].
pub fn build_cmd() -> Command {
    Args::command()
}

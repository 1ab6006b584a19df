use crate::form::TIME_CHOICES;
use clap::{Parser, Subcommand};

/// Command-line interface definition for the ABQ data entry application
#[derive(Parser)]
#[command(
    name = "abq-data-entry",
    version = env!("CARGO_PKG_VERSION"),
    about = "ABQ data entry: record lab measurements and append them to a daily CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override the output directory (useful for tests or a shared folder)
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Defaults to `form` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the output directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Open the full-screen data entry form
    Form,

    /// Fill in one record from the command line and save it
    Add {
        #[arg(long, help = "Date (at most 5 characters are kept)")]
        date: Option<String>,

        #[arg(long, value_parser = TIME_CHOICES, help = "Collection time")]
        time: Option<String>,

        #[arg(long, help = "Technician name")]
        technician: Option<String>,

        #[arg(long, help = "Humidity in g/m³ (0.5 to 52.0)")]
        humidity: Option<String>,

        #[arg(long, help = "Temperature in °C (4.0 to 40.0)")]
        temperature: Option<String>,

        #[arg(long, help = "Light in klx (0 to 100)")]
        light: Option<String>,

        #[arg(long = "fault", help = "Flag an equipment fault")]
        fault: bool,

        #[arg(long, help = "Number of plants (0 to 20)")]
        plants: Option<String>,

        #[arg(long, help = "Number of blossoms (0 to 10000)")]
        blossoms: Option<String>,

        #[arg(long, help = "Number of fruit (0 to 1000)")]
        fruit: Option<String>,

        #[arg(long = "max-height", help = "Maximum plant height")]
        max_height: Option<String>,

        #[arg(long = "min-height", help = "Minimum plant height")]
        min_height: Option<String>,

        #[arg(long = "median-height", help = "Median plant height")]
        median_height: Option<String>,

        #[arg(long, help = "Free-form notes")]
        notes: Option<String>,
    },

    /// List the fields of the record form
    Fields,
}

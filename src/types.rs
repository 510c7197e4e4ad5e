use clap::Parser;

use crate::constants::DEFAULT_ENDPOINT;
use crate::output::fields::FIELD_CODES_HELP;

/// Output mode selected from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Simple,
    Fancy,
    Ip,
    Fields(Vec<String>),
    Json,
}

/// iiu checks to see if a website is accessible outside of your network.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "iiu",
    version,
    about,
    long_about = None,
    disable_version_flag = true,
    after_help = FIELD_CODES_HELP
)]
pub struct Cli {
    // TARGET
    /// The URL to check.
    #[arg(short, long, help_heading = "TARGET")]
    pub url: Option<String>,

    // OUTPUT
    /// Simplified output [default].
    #[arg(short, long, help_heading = "OUTPUT")]
    pub simple: bool,

    /// Multiline printing with more information.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub fancy: bool,

    /// Returns only the IP address of the URL.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub ip: bool,

    /// Only outputs the fields selected (c d p i s t l).
    #[arg(short, long = "return-only", num_args = 1.., value_name = "CODE", help_heading = "OUTPUT")]
    pub return_only: Vec<String>,

    /// Print the result as a single JSON object.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub json: bool,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Base URL of the status service.
    #[arg(long, env = "IIU_ENDPOINT", default_value = DEFAULT_ENDPOINT, hide = true)]
    pub endpoint: String,

    /// Print version.
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// First matching flag wins: simple, fancy, ip, return-only, json.
    pub fn output_mode(&self) -> OutputMode {
        if self.simple {
            OutputMode::Simple
        } else if self.fancy {
            OutputMode::Fancy
        } else if self.ip {
            OutputMode::Ip
        } else if !self.return_only.is_empty() {
            OutputMode::Fields(self.return_only.clone())
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Simple
        }
    }
}

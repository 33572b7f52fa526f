use std::fmt;
use std::str::FromStr;

use envconfig::Envconfig;
use raid_splitter::GroupPlan;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    // ── Roster ──────────────────────────────────────────────────────
    /// JSON array of attendees. When unset a random roster is generated.
    pub roster_file: Option<String>,

    #[envconfig(default = "72")]
    pub roster_size: usize,

    pub seed: Option<u64>,

    #[envconfig(default = "52")]
    pub min_level: i64,

    /// Chance that a generated character is a box of an earlier player.
    #[envconfig(default = "0.1")]
    pub box_rate: f64,

    /// Chance that a generated non-box character signs up as an alt.
    #[envconfig(default = "0.0")]
    pub alt_rate: f64,

    // ── Split ───────────────────────────────────────────────────────
    #[envconfig(default = "2")]
    pub raid_count: usize,

    #[envconfig(default = "tank,melee,healer,caster")]
    pub group_precedence: GroupPlan,

    // ── Output ──────────────────────────────────────────────────────
    #[envconfig(default = "text")]
    pub output: OutputFormat,

    #[envconfig(default = "false")]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseOutputFormatError(String);

impl fmt::Display for ParseOutputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is not a valid output format", self.0)
    }
}

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            invalid => Err(ParseOutputFormatError(invalid.to_owned())),
        }
    }
}

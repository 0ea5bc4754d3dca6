use std::path::PathBuf;

use alphanum_collate::Strength;

/// Sort lines in natural order, so that `file2` comes before `file12`
#[derive(argh::FromArgs, Debug)]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    /// files to sort, stdin is read when none are given or for `-`
    #[argh(positional)]
    pub files: Vec<PathBuf>,
    /// locale that orders the text between numbers, e.g. `en` or `sv`
    #[argh(option, short = 'L', long = "locale")]
    pub locale: Option<String>,
    /// options `primary`, `secondary` or `tertiary`
    #[argh(option, long = "strength")]
    pub strength: Option<Strength>,
    /// reverse the result
    #[argh(switch, short = 'r', long = "reverse")]
    pub reverse: bool,
    /// do not reverse, even if the config says so
    #[argh(switch, long = "no-reverse")]
    pub no_reverse: bool,
    /// only output the first of lines that compare equal
    #[argh(switch, short = 'u', long = "unique")]
    pub unique: bool,
    /// keep lines that compare equal, even if the config says otherwise
    #[argh(switch, long = "no-unique")]
    pub no_unique: bool,
    /// check whether the input is already sorted
    #[argh(switch, short = 'c', long = "check")]
    pub check: bool,
    /// options `error`, `warn`, `info`, `debug` or `trace`
    #[argh(option, long = "log-level")]
    pub log_level: Option<String>,
    /// path to a config file instead of the default one
    #[argh(option, long = "config")]
    pub config: Option<PathBuf>,
    /// initialize default config, at `--config` if given
    #[argh(switch, long = "init")]
    pub init: bool,
    /// overwrite existing config
    #[argh(switch, long = "overwrite")]
    pub overwrite: bool,
}

pub fn parse() -> Args {
    argh::from_env()
}

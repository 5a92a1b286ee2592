/// Whether a flag stands alone or consumes the token after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Boolean,
    Valued,
}

#[derive(Debug, Clone)]
pub struct FlagDef {
    pub name: &'static str,
    pub kind: FlagKind,
    pub aliases: &'static [&'static str],
}

impl FlagDef {
    pub const fn boolean(name: &'static str, aliases: &'static [&'static str]) -> Self {
        FlagDef { name, kind: FlagKind::Boolean, aliases }
    }

    pub const fn valued(name: &'static str, aliases: &'static [&'static str]) -> Self {
        FlagDef { name, kind: FlagKind::Valued, aliases }
    }

    fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

/// The table of flags a parse accepts.
///
/// Names and aliases share one namespace: `--h` and `-help` resolve the same
/// way as `-h` and `--help`. Every hit is recorded under the canonical
/// `name`, so later lookups never need to know which alias was typed.
#[derive(Debug, Clone)]
pub struct FlagSpec {
    pub flags: Vec<FlagDef>,
    /// Accept `-x` as well as `--x`. When false a single dash never starts
    /// a flag and the token is kept as a positional.
    pub single_dash: bool,
}

impl FlagSpec {
    pub fn new(flags: Vec<FlagDef>) -> Self {
        FlagSpec { flags, single_dash: true }
    }

    pub fn long_only(mut self) -> Self {
        self.single_dash = false;
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&FlagDef> {
        self.flags.iter().find(|def| def.answers_to(name))
    }

    /// The flags understood by the `wave` binary.
    pub fn wave() -> Self {
        FlagSpec::new(vec![
            FlagDef::boolean(HELP, &["h"]),
            FlagDef::boolean(VERSION, &["v"]),
            FlagDef::boolean(VERBOSE, &["vv"]),
            FlagDef::boolean(SUMMARIZE, &["s"]),
            FlagDef::valued(SET_ARTIST, &["a"]),
            FlagDef::valued(SET_TITLE, &["t"]),
            FlagDef::valued(SET_ALBUM, &["l"]),
            FlagDef::valued(SET_GENRE, &["g"]),
            FlagDef::valued(SET_YEAR, &["y"]),
            FlagDef::valued(SET_ART, &["r"]),
        ])
    }
}

pub const HELP: &str = "help";
pub const VERSION: &str = "version";
pub const VERBOSE: &str = "verbose";
pub const SUMMARIZE: &str = "summarize";
pub const SET_ARTIST: &str = "set-artist";
pub const SET_TITLE: &str = "set-title";
pub const SET_ALBUM: &str = "set-album";
pub const SET_GENRE: &str = "set-genre";
pub const SET_YEAR: &str = "set-year";
pub const SET_ART: &str = "set-art";

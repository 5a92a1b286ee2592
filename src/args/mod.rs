mod spec;
pub use spec::*;

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Value recorded for a boolean flag that was present.
pub const TRUE: &str = "true";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("Flag \"{token}\" unrecognized")]
    UnrecognizedFlag { name: String, token: String },
    #[error("Flag \"{token}\" needs an associated value")]
    MissingValue { name: String, token: String },
    #[error("Flag \"--{name}\" needs a UTF-8 value, got \"{value}\"")]
    NotUnicode { name: String, value: String },
}

impl ArgError {
    /// The flag name with its dashes stripped.
    pub fn name(&self) -> &str {
        match self {
            ArgError::UnrecognizedFlag { name, .. }
            | ArgError::MissingValue { name, .. }
            | ArgError::NotUnicode { name, .. } => name,
        }
    }
}

/// The outcome of a successful [`parse`].
///
/// Flag values are kept as raw OS strings so that paths which are not valid
/// UTF-8 survive. The non-flag tokens are kept apart from the flags: the
/// space-joined form is [`residual`], the token list is [`positionals`].
/// No flag is ever named by the empty string.
///
/// [`residual`]: ParsedArguments::residual
/// [`positionals`]: ParsedArguments::positionals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    values: HashMap<String, OsString>,
    residual: OsString,
    positionals: Vec<OsString>,
}

impl ParsedArguments {
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.values.get(name).map(OsString::as_os_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The value of `name` as text. Fails if it is not valid UTF-8.
    pub fn text(&self, name: &str) -> Result<Option<&str>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value.to_str().map(Some).ok_or_else(|| ArgError::NotUnicode {
                name: name.to_string(),
                value: value.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Recognized flags keyed by canonical name.
    pub fn flags(&self) -> HashMap<&str, &OsStr> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_os_str()))
            .collect()
    }

    /// Every non-flag token joined by single spaces, in the order given.
    pub fn residual(&self) -> &OsStr {
        &self.residual
    }

    /// Non-flag tokens that are not blank. Unlike splitting [`residual`]
    /// on spaces this keeps paths that contain spaces in one piece.
    ///
    /// [`residual`]: ParsedArguments::residual
    pub fn positionals(&self) -> &[OsString] {
        &self.positionals
    }
}

/// Strips one or two leading dashes. Returns `None` for anything that does
/// not name a flag, including a bare `-` or `--`.
fn flag_name(token: &str, single_dash: bool) -> Option<&str> {
    let name = match token.strip_prefix("--") {
        Some(rest) => rest,
        None if single_dash => token.strip_prefix('-')?,
        None => return None,
    };
    if name.trim_start_matches('-').is_empty() {
        None
    } else {
        Some(name)
    }
}

fn is_blank(token: &OsStr) -> bool {
    token.to_str().map_or(false, |t| t.trim().is_empty())
}

/// Scans `tokens` (without the program name) against `spec`.
///
/// A valued flag takes the next token verbatim, even when that token looks
/// like a flag itself. Repeating a flag, under any alias, keeps the last
/// value. The scan stops at the first malformed flag. Tokens that are not
/// valid UTF-8 are classified by their lossy form, so they can still be
/// file paths or flag values.
pub fn parse<I, S>(tokens: I, spec: &FlagSpec) -> Result<ParsedArguments, ArgError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut tokens = tokens.into_iter().map(Into::into);
    let mut values = HashMap::new();
    let mut positionals: Vec<OsString> = vec![];

    while let Some(token) = tokens.next() {
        let lossy = token.to_string_lossy().into_owned();
        let name = match flag_name(&lossy, spec.single_dash) {
            Some(name) => name,
            None => {
                positionals.push(token);
                continue;
            }
        };

        let def = spec.lookup(name).ok_or_else(|| ArgError::UnrecognizedFlag {
            name: name.to_string(),
            token: lossy.clone(),
        })?;

        let value = match def.kind {
            FlagKind::Boolean => OsString::from(TRUE),
            FlagKind::Valued => tokens.next().ok_or_else(|| ArgError::MissingValue {
                name: name.to_string(),
                token: lossy.clone(),
            })?,
        };

        values.insert(def.name.to_string(), value);
    }

    let mut residual = OsString::new();
    for (i, token) in positionals.iter().enumerate() {
        if i > 0 {
            residual.push(" ");
        }
        residual.push(token);
    }
    positionals.retain(|p| !is_blank(p));

    Ok(ParsedArguments {
        values,
        residual,
        positionals,
    })
}

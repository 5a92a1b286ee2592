pub mod args;
pub mod error;
pub mod status;

use std::fs;
use std::path::{Path, PathBuf};

use mime::Mime;
use tracing::debug;

use args::{
    ParsedArguments, HELP, SET_ALBUM, SET_ART, SET_ARTIST, SET_GENRE, SET_TITLE, SET_YEAR,
    SUMMARIZE, VERBOSE, VERSION,
};
use error::{Result, WaveError};

/// An image ready to be embedded as the front cover.
#[derive(Debug, Clone, PartialEq)]
pub struct Cover {
    pub path: PathBuf,
    pub mime_type: Mime,
    pub data: Vec<u8>,
}

/// The tag changes requested on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Edits {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub cover: Option<Cover>,
}

impl Edits {
    pub fn is_empty(&self) -> bool {
        self.artist.is_none()
            && self.title.is_none()
            && self.album.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.cover.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub verbose: bool,
    pub summarize: bool,
    pub edits: Edits,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    Run(Config),
}

impl Command {
    /// Validates everything that can be checked without opening an audio
    /// file. The cover image, if any, is read here.
    pub fn from_args(parsed: &ParsedArguments) -> Result<Command> {
        if parsed.is_set(HELP) {
            return Ok(Command::Help);
        }
        if parsed.is_set(VERSION) {
            return Ok(Command::Version);
        }

        let files: Vec<PathBuf> = parsed.positionals().iter().map(PathBuf::from).collect();
        if files.is_empty() {
            return Err(WaveError::InputFileMissing);
        }

        let year = parsed.text(SET_YEAR)?.map(parse_year).transpose()?;
        let cover = parsed.get(SET_ART).map(|p| read_cover(Path::new(p))).transpose()?;

        let edits = Edits {
            artist: parsed.text(SET_ARTIST)?.map(String::from),
            title: parsed.text(SET_TITLE)?.map(String::from),
            album: parsed.text(SET_ALBUM)?.map(String::from),
            year,
            genre: parsed.text(SET_GENRE)?.map(String::from),
            cover,
        };

        Ok(Command::Run(Config {
            files,
            verbose: parsed.is_set(VERBOSE),
            summarize: parsed.is_set(SUMMARIZE),
            edits,
        }))
    }
}

/// Picks the MIME type for a cover image from its extension.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// assert_eq!(wave::cover_mime_type(Path::new("front.JPG")), Some(mime::IMAGE_JPEG));
/// assert_eq!(wave::cover_mime_type(Path::new("front.png")), Some(mime::IMAGE_PNG));
/// assert_eq!(wave::cover_mime_type(Path::new("front.gif")), None);
/// ```
pub fn cover_mime_type(path: &Path) -> Option<Mime> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some(mime::IMAGE_JPEG),
        "png" => Some(mime::IMAGE_PNG),
        _ => None,
    }
}

/// Reads a cover image fully into memory after checking its type.
pub fn read_cover(path: &Path) -> Result<Cover> {
    let mime_type =
        cover_mime_type(path).ok_or_else(|| WaveError::UnsupportedImageType(path.to_path_buf()))?;

    if !path.is_file() {
        return Err(WaveError::CoverArt {
            path: path.to_path_buf(),
            source: None,
        });
    }
    let data = fs::read(path).map_err(|e| WaveError::CoverArt {
        path: path.to_path_buf(),
        source: Some(e),
    })?;
    debug!("read {} bytes of {} from {}", data.len(), mime_type, path.display());

    Ok(Cover {
        path: path.to_path_buf(),
        mime_type,
        data,
    })
}

/// Parses a year given on the command line.
///
/// # Example
///
/// ```
/// assert_eq!(wave::parse_year(" 1959").unwrap(), 1959);
/// assert!(wave::parse_year("fifty-nine").is_err());
/// ```
pub fn parse_year(year: &str) -> Result<i32> {
    year.trim()
        .parse()
        .map_err(|_| WaveError::InvalidYear(year.to_string()))
}

/// The line printed by `--version`.
pub fn version_line() -> String {
    format!("{} v{}", clap::crate_name!(), clap::crate_version!())
}

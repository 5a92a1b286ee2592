use std::path::PathBuf;

use thiserror::Error;

use crate::args::ArgError;
use crate::status::ExitStatus;

/// Failures at the boundary with the tagging library.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: tag data is corrupt ({})", .path.display(), .description)]
    Corrupt { path: PathBuf, description: String },
    #[error("{}: unsupported tag feature ({})", .path.display(), .description)]
    Unsupported { path: PathBuf, description: String },
    #[error("{}: not a supported audio container", .0.display())]
    UnsupportedContainer(PathBuf),
}

impl TagError {
    pub fn from_id3(path: PathBuf, err: id3::Error) -> Self {
        match err.kind {
            id3::ErrorKind::Io(source) => TagError::Io { path, source },
            id3::ErrorKind::UnsupportedFeature => TagError::Unsupported {
                path,
                description: err.description,
            },
            _ => TagError::Corrupt {
                path,
                description: err.description,
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum WaveError {
    #[error(transparent)]
    Args(#[from] ArgError),
    #[error("program needs input file.")]
    InputFileMissing,
    #[error("file \"{}\" does not exist", .0.display())]
    FileNotFound(PathBuf),
    #[error("Image file type is unsupported: must be jpeg (or jpg) or png")]
    UnsupportedImageType(PathBuf),
    #[error("{}: not a file", .path.display())]
    CoverArt {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },
    #[error("year \"{0}\" is not a number")]
    InvalidYear(String),
    #[error(transparent)]
    Tag(#[from] TagError),
}

impl WaveError {
    /// Usage mistakes exit with the unsigned form of -1; anything the
    /// tagging library reports exits with 1.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            WaveError::Tag(_) => ExitStatus::Error,
            _ => ExitStatus::Usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, WaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_and_library_errors_exit_differently() {
        let usage = WaveError::InputFileMissing;
        let library = WaveError::Tag(TagError::UnsupportedContainer(PathBuf::from("a.ogg")));
        assert_eq!(usage.exit_status(), ExitStatus::Usage);
        assert_eq!(library.exit_status(), ExitStatus::Error);
    }

    #[test]
    fn arg_errors_keep_their_message() {
        let err = WaveError::from(ArgError::MissingValue {
            name: "t".into(),
            token: "-t".into(),
        });
        assert_eq!(err.to_string(), "Flag \"-t\" needs an associated value");
        assert_eq!(err.exit_status(), ExitStatus::Usage);
    }

    #[test]
    fn parse_failure_maps_to_corrupt() {
        let err = TagError::from_id3(
            PathBuf::from("x.mp3"),
            id3::Error::new(id3::ErrorKind::Parsing, "bad frame header"),
        );
        assert!(matches!(err, TagError::Corrupt { .. }));
        assert!(err.to_string().contains("bad frame header"));
    }
}

use std::path::{Path, PathBuf};

use id3::{Tag, Version};
use tracing::debug;
use wave::error::TagError;

/// Where the ID3 tag lives inside the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// A tag at the head of the stream, as in MP3.
    Mpeg,
    /// An `ID3 ` chunk inside a RIFF file.
    Wav,
    /// An `ID3 ` chunk inside an AIFF file.
    Aiff,
}

impl Container {
    /// Picks the container from the extension. Anything not listed is
    /// refused, since writing would prepend an ID3 header to the file.
    pub fn from_path(path: &Path) -> Result<Container, TagError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "mp3" | "mp2" | "mp1" | "mpga" | "id3" => Ok(Container::Mpeg),
            "wav" | "wave" => Ok(Container::Wav),
            "aif" | "aiff" | "aifc" => Ok(Container::Aiff),
            _ => Err(TagError::UnsupportedContainer(path.to_path_buf())),
        }
    }

    /// Reads the tag, starting from an empty one when the file has none.
    pub fn read(self, path: &Path) -> Result<Tag, TagError> {
        let result = match self {
            Container::Mpeg => Tag::read_from_path(path),
            Container::Wav => Tag::read_from_wav_path(path),
            Container::Aiff => Tag::read_from_aiff_path(path),
        };
        match result {
            Ok(tag) => Ok(tag),
            Err(id3::Error {
                kind: id3::ErrorKind::NoTag,
                ..
            }) => {
                debug!("{} has no tag yet", path.display());
                Ok(Tag::new())
            }
            Err(err) => Err(TagError::from_id3(PathBuf::from(path), err)),
        }
    }

    pub fn write(self, tag: &Tag, path: &Path) -> Result<(), TagError> {
        let result = match self {
            Container::Mpeg => tag.write_to_path(path, Version::Id3v24),
            Container::Wav => tag.write_to_wav_path(path, Version::Id3v24),
            Container::Aiff => tag.write_to_aiff_path(path, Version::Id3v24),
        };
        result.map_err(|err| TagError::from_id3(PathBuf::from(path), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_follows_the_extension() {
        assert_eq!(Container::from_path(Path::new("a.mp3")).unwrap(), Container::Mpeg);
        assert_eq!(Container::from_path(Path::new("a.WAV")).unwrap(), Container::Wav);
        assert_eq!(Container::from_path(Path::new("a.aiff")).unwrap(), Container::Aiff);
        assert_eq!(Container::from_path(Path::new("a.MP2")).unwrap(), Container::Mpeg);
    }

    #[test]
    fn anything_else_is_refused() {
        for name in ["a.flac", "notes.txt", "cover.jpg", "album.cue", "list.m3u", "no_extension"] {
            let err = Container::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, TagError::UnsupportedContainer(_)), "{}", name);
        }
    }

    #[test]
    fn untagged_stream_reads_as_empty_tag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("silence.mp3");
        std::fs::write(&path, [0xff, 0xfb, 0x90, 0x00, 0, 0, 0, 0]).unwrap();

        let tag = Container::Mpeg.read(&path).unwrap();
        assert_eq!(tag.frames().count(), 0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Container::Mpeg.read(Path::new("/nonexistent/wave/x.mp3")).unwrap_err();
        assert!(matches!(err, TagError::Io { .. }));
    }
}

mod container;
pub use container::Container;

use std::path::Path;

use id3::frame::{Picture, PictureType};
use id3::{Tag, TagLike};
use serde::Serialize;
use tracing::{debug, info};
use wave::error::{Result, WaveError};
use wave::{Config, Cover, Edits};

/// Fields the tag does not carry are left out rather than printed empty.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Summary<'a> {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    album: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    genre: Option<&'a str>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn summarize(path: &Path, tag: &Tag) -> String {
    let summary = Summary {
        file: path.display().to_string(),
        title: present(tag.title()),
        artist: present(tag.artist()),
        album: present(tag.album()),
        year: tag.year(),
        genre: present(tag.genre()),
    };
    serde_yaml::to_string(&summary).unwrap_or_else(|_| format!("{:?}", summary))
}

fn print_change(field: &str, old: Option<&str>, new: &str) {
    println!("Setting {} : \"{}\" -> \"{}\"", field, old.unwrap_or_default(), new);
}

fn set_text(
    tag: &mut Tag,
    verbose: bool,
    field: &str,
    new: &Option<String>,
    get: fn(&Tag) -> Option<&str>,
    set: fn(&mut Tag, String),
) {
    if let Some(new) = new {
        if verbose {
            print_change(field, get(tag), new);
        }
        set(tag, new.clone());
    }
}

fn set_cover(tag: &mut Tag, cover: &Cover, verbose: bool) {
    if verbose {
        println!("Setting album cover to: {}", cover.path.display());
    }
    tag.remove_picture_by_type(PictureType::CoverFront);
    tag.add_frame(Picture {
        mime_type: cover.mime_type.to_string(),
        picture_type: PictureType::CoverFront,
        description: String::new(),
        data: cover.data.clone(),
    });
}

/// Applies `edits` in a fixed order: artist, title, album, year, genre, art.
pub fn apply(tag: &mut Tag, edits: &Edits, verbose: bool) {
    set_text(tag, verbose, "Artist", &edits.artist, |t| t.artist(), |t, v| t.set_artist(v));
    set_text(tag, verbose, "Title", &edits.title, |t| t.title(), |t, v| t.set_title(v));
    set_text(tag, verbose, "Album", &edits.album, |t| t.album(), |t, v| t.set_album(v));

    if let Some(year) = edits.year {
        if verbose {
            let old = tag.year().map(|y| y.to_string());
            print_change("Year", old.as_deref(), &year.to_string());
        }
        tag.set_year(year);
    }

    set_text(tag, verbose, "Genre", &edits.genre, |t| t.genre(), |t, v| t.set_genre(v));

    if let Some(cover) = &edits.cover {
        set_cover(tag, cover, verbose);
    }
}

/// Summarizes and edits one file, saving only if something changed.
pub fn tag_file(path: &Path, config: &Config) -> Result<()> {
    if !path.is_file() {
        return Err(WaveError::FileNotFound(path.to_path_buf()));
    }

    let container = Container::from_path(path)?;
    debug!("opening {} as {:?}", path.display(), container);
    let mut tag = container.read(path)?;

    if config.summarize {
        println!("{}", summarize(path, &tag).trim_end());
    }

    if config.edits.is_empty() {
        return Ok(());
    }

    apply(&mut tag, &config.edits, config.verbose);
    container.write(&tag, path)?;
    info!("saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn edits() -> Edits {
        Edits {
            artist: Some(String::from("Miles Davis")),
            title: Some(String::from("Blue in Green")),
            album: Some(String::from("Kind of Blue")),
            year: Some(1959),
            genre: Some(String::from("Jazz")),
            cover: Some(Cover {
                path: PathBuf::from("front.png"),
                mime_type: mime::IMAGE_PNG,
                data: vec![0x89, b'P', b'N', b'G'],
            }),
        }
    }

    #[test]
    fn apply_sets_every_field() {
        let mut tag = Tag::new();
        apply(&mut tag, &edits(), false);

        assert_eq!(tag.artist(), Some("Miles Davis"));
        assert_eq!(tag.title(), Some("Blue in Green"));
        assert_eq!(tag.album(), Some("Kind of Blue"));
        assert_eq!(tag.year(), Some(1959));
        assert_eq!(tag.genre(), Some("Jazz"));

        let pictures: Vec<_> = tag.pictures().collect();
        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].mime_type, "image/png");
        assert_eq!(pictures[0].picture_type, PictureType::CoverFront);
    }

    #[test]
    fn apply_leaves_unrequested_fields_alone() {
        let mut tag = Tag::new();
        tag.set_album("Sketches of Spain");
        apply(
            &mut tag,
            &Edits {
                title: Some(String::from("Saeta")),
                ..Edits::default()
            },
            false,
        );
        assert_eq!(tag.album(), Some("Sketches of Spain"));
        assert_eq!(tag.title(), Some("Saeta"));
    }

    #[test]
    fn cover_replaces_the_previous_front_cover() {
        let mut tag = Tag::new();
        apply(&mut tag, &edits(), false);
        apply(&mut tag, &edits(), false);
        assert_eq!(tag.pictures().count(), 1);
    }

    #[test]
    fn summary_lists_the_fields() {
        let mut tag = Tag::new();
        apply(&mut tag, &edits(), false);
        let text = summarize(Path::new("song.mp3"), &tag);
        assert!(text.contains("File: song.mp3"));
        assert!(text.contains("Title: Blue in Green"));
        assert!(text.contains("Artist: Miles Davis"));
        assert!(text.contains("Year: 1959"));
        assert!(text.contains("Genre: Jazz"));
    }

    #[test]
    fn summary_of_an_untagged_file_only_names_it() {
        let text = summarize(Path::new("blank.mp3"), &Tag::new());
        assert!(text.contains("File: blank.mp3"));
        assert!(!text.contains("Year"));
        assert!(!text.contains("Title"));
        assert!(!text.contains('~'));
        assert!(!text.contains("\"\""));
    }

    #[test]
    fn missing_file_is_reported_before_reading() {
        let config = Config {
            files: vec![],
            verbose: false,
            summarize: true,
            edits: Edits::default(),
        };
        let err = tag_file(Path::new("/nonexistent/wave/a.mp3"), &config).unwrap_err();
        assert!(matches!(err, WaveError::FileNotFound(_)));
    }

    #[test]
    fn written_fields_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.mp3");
        std::fs::write(&path, [0xff, 0xfb, 0x90, 0x00, 0, 0, 0, 0]).unwrap();

        let config = Config {
            files: vec![path.clone()],
            verbose: false,
            summarize: false,
            edits: edits(),
        };
        tag_file(&path, &config).unwrap();

        let tag = Container::Mpeg.read(&path).unwrap();
        assert_eq!(tag.title(), Some("Blue in Green"));
        assert_eq!(tag.year(), Some(1959));
        assert_eq!(tag.pictures().next().map(|p| p.data.len()), Some(4));
    }
}

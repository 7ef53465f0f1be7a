//! Durable load/save of the library document
//!
//! One document per library root, stored at `<root>/.tptags/library.json`.
//! The document is small and single-writer per root, so every save rewrites
//! it wholesale: no patching, no transaction log. Saves go through a
//! temporary file in the same directory followed by a rename, so readers
//! never observe a truncated document.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{LibraryError, Result};
use super::types::{LibraryDocument, Tag, TagGroup};

/// Reserved directory under the library root
pub const LIBRARY_DIR: &str = ".tptags";
/// Document file name inside the reserved directory
pub const LIBRARY_FILE: &str = "library.json";

/// Companion directories provisioned at init time. Unused by the manager;
/// reserved for backup and thumbnail tooling.
const COMPANION_DIRS: &[&str] = &["backups", "thumbnails"];

/// Path of the reserved directory for a library root
#[must_use]
pub fn library_dir(root: &Path) -> PathBuf {
    root.join(LIBRARY_DIR)
}

/// Path of the persisted document for a library root
#[must_use]
pub fn library_path(root: &Path) -> PathBuf {
    library_dir(root).join(LIBRARY_FILE)
}

/// Load the document for a root, or a fresh empty document if none exists
///
/// First use must be seamless, so a missing file is not an error here.
/// A file that exists but does not parse is surfaced as `Corrupt` and must
/// not be replaced with an empty document.
///
/// # Errors
/// Returns `LibraryError` if the file cannot be read or is malformed.
pub fn load(root: &Path) -> Result<LibraryDocument> {
    let path = library_path(root);
    if !path.exists() {
        return Ok(LibraryDocument::empty());
    }
    read_document(&path)
}

/// Load the document for a root, failing if the library was never initialized
///
/// # Errors
/// Returns `NotInitialized` if no document exists at the root, `Corrupt`
/// if it exists but is malformed, or `Persistence` on read failure.
pub fn load_existing(root: &Path) -> Result<LibraryDocument> {
    let path = library_path(root);
    if !path.exists() {
        return Err(LibraryError::NotInitialized(root.to_path_buf()));
    }
    read_document(&path)
}

fn read_document(path: &Path) -> Result<LibraryDocument> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| LibraryError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the persisted document for a root wholesale
///
/// Writes to a temporary file next to the document and renames it into
/// place, so a crash mid-write cannot leave a truncated document behind.
///
/// # Errors
/// Returns `Serialize` if the document cannot be encoded, or `Persistence`
/// if the write or rename fails.
pub fn save(root: &Path, document: &LibraryDocument) -> Result<()> {
    let path = library_path(root);
    let content =
        serde_json::to_string_pretty(document).map_err(LibraryError::Serialize)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}

/// Set up the reserved directory structure and initial document for a root
///
/// Creates `.tptags/` with its companion directories and writes the initial
/// document: the default seed library when `seed` is true, an empty
/// document otherwise. Idempotent: if `.tptags` already exists this is a
/// no-op that reports `true`, and the existing document is never touched.
///
/// # Errors
/// Returns `Persistence` if directory creation or the document write fails.
pub fn initialize(root: &Path, seed: bool) -> Result<bool> {
    let dir = library_dir(root);
    if dir.exists() {
        return Ok(true);
    }

    fs::create_dir_all(&dir)?;
    for companion in COMPANION_DIRS {
        fs::create_dir_all(dir.join(companion))?;
    }

    let document = if seed {
        seed_document()
    } else {
        LibraryDocument::empty()
    };
    save(root, &document)?;
    Ok(false)
}

/// The default seed library: common image and video format tags, grouped
#[must_use]
pub fn seed_document() -> LibraryDocument {
    let image_tags: &[(&str, &[&str], &str)] = &[
        ("jpg", &["jpeg"], "1842"),
        ("png", &[], "9271"),
        ("gif", &[], "3405"),
        ("webp", &[], "6509"),
        ("bmp", &["bitmap"], "7032"),
        ("tiff", &["tif"], "8654"),
        ("svg", &["svgz"], "1127"),
        ("heic", &["heif"], "5930"),
        ("ico", &["icon"], "7783"),
        ("avif", &[], "4516"),
    ];
    let video_tags: &[(&str, &[&str], &str)] = &[
        ("mp4", &["m4v"], "2398"),
        ("webm", &[], "3806"),
        ("mov", &["qt"], "9612"),
        ("avi", &[], "3247"),
        ("mkv", &[], "4065"),
        ("flv", &[], "1940"),
        ("mpeg", &["mpg"], "8123"),
        ("3gp", &[], "6681"),
        ("wmv", &[], "5572"),
    ];

    let to_tag = |&(name, aliases, id): &(&str, &[&str], &str)| Tag {
        name: name.to_string(),
        aliases: aliases.iter().map(ToString::to_string).collect(),
        id: id.to_string(),
    };
    let member_ids = |tags: &[(&str, &[&str], &str)]| {
        tags.iter().map(|&(_, _, id)| id.to_string()).collect()
    };

    let mut tags: Vec<Tag> = image_tags.iter().map(to_tag).collect();
    tags.extend(video_tags.iter().map(to_tag));
    tags.push(Tag {
        name: "favorites".to_string(),
        aliases: Vec::new(),
        id: "8937".to_string(),
    });

    LibraryDocument {
        tags,
        tag_groups: vec![
            TagGroup {
                name: "image".to_string(),
                aliases: Vec::new(),
                id: "9001".to_string(),
                ids: member_ids(image_tags),
            },
            TagGroup {
                name: "video".to_string(),
                aliases: Vec::new(),
                id: "9002".to_string(),
                ids: member_ids(video_tags),
            },
        ],
        entries: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_empty_document() {
        let dir = TempDir::new().unwrap();
        let doc = load(dir.path()).unwrap();
        assert_eq!(doc, LibraryDocument::empty());
    }

    #[test]
    fn test_load_existing_requires_initialization() {
        let dir = TempDir::new().unwrap();
        let result = load_existing(dir.path());
        assert!(matches!(result, Err(LibraryError::NotInitialized(_))));
    }

    #[test]
    fn test_initialize_creates_structure() {
        let dir = TempDir::new().unwrap();
        let already_existed = initialize(dir.path(), false).unwrap();

        assert!(!already_existed);
        assert!(library_path(dir.path()).exists());
        assert!(library_dir(dir.path()).join("backups").exists());
        assert!(library_dir(dir.path()).join("thumbnails").exists());
        assert_eq!(load_existing(dir.path()).unwrap(), LibraryDocument::empty());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        assert!(!initialize(dir.path(), true).unwrap());

        let before = load_existing(dir.path()).unwrap();
        assert!(initialize(dir.path(), false).unwrap());
        let after = load_existing(dir.path()).unwrap();

        // Second init must not overwrite the seeded document.
        assert_eq!(before, after);
        assert!(!after.tags.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        initialize(dir.path(), false).unwrap();

        let mut doc = LibraryDocument::empty();
        doc.tags.push(Tag {
            name: "jpg".into(),
            aliases: vec!["jpeg".into()],
            id: "4821".into(),
        });
        doc.entries
            .push(serde_json::json!({ "file": "a.jpg", "tags": ["4821"] }));

        save(dir.path(), &doc).unwrap();
        assert_eq!(load(dir.path()).unwrap(), doc);
    }

    #[test]
    fn test_save_leaves_no_temporary_file() {
        let dir = TempDir::new().unwrap();
        initialize(dir.path(), false).unwrap();
        save(dir.path(), &LibraryDocument::empty()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(library_dir(dir.path()))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_corrupt_document_is_surfaced() {
        let dir = TempDir::new().unwrap();
        initialize(dir.path(), false).unwrap();
        fs::write(library_path(dir.path()), "{ not json").unwrap();

        assert!(matches!(load(dir.path()), Err(LibraryError::Corrupt { .. })));
        assert!(matches!(
            load_existing(dir.path()),
            Err(LibraryError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_seed_document_shape() {
        let doc = seed_document();

        assert_eq!(doc.tags.len(), 20);
        assert_eq!(doc.tag_groups.len(), 2);
        assert!(doc.entries.is_empty());

        let jpg = doc.find_tag("1842").unwrap();
        assert_eq!(jpg.name, "jpg");
        assert_eq!(jpg.aliases, vec!["jpeg"]);

        let image = doc.find_group("9001").unwrap();
        assert_eq!(image.name, "image");
        assert_eq!(image.ids.len(), 10);
        assert!(image.ids.contains(&"1842".to_string()));

        // Every group member must reference a seeded tag.
        for group in &doc.tag_groups {
            for id in &group.ids {
                assert!(doc.find_tag(id).is_some(), "dangling seed member {id}");
            }
        }
    }

    #[test]
    fn test_entries_pass_through_unmodified() {
        let dir = TempDir::new().unwrap();
        initialize(dir.path(), false).unwrap();

        let entry = serde_json::json!({
            "file": "photo.png",
            "tags": ["9271"],
            "rating": 5,
            "nested": { "anything": [1, 2, 3] }
        });
        let mut doc = load(dir.path()).unwrap();
        doc.entries.push(entry.clone());
        save(dir.path(), &doc).unwrap();

        let reloaded = load(dir.path()).unwrap();
        assert_eq!(reloaded.entries, vec![entry]);
    }
}

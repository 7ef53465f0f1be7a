//! Tag library core: document model, store, and lifecycle operations
//!
//! The manager implements tag and tag-group lifecycle (create, list,
//! delete) on top of the store. Every mutation is one atomic
//! load → validate → mutate → save step against the document on disk;
//! nothing is cached between operations, so the document on disk is always
//! the source of truth.
//!
//! Mutations are serialized per library root through a process-wide lock
//! registry. Two concurrent read-modify-write sequences against the same
//! root would otherwise silently clobber each other's saves. Reads take no
//! lock: a read concurrent with a write observes either the old or the new
//! document, never a partial one (the store renames into place).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

pub mod error;
pub mod ids;
pub mod store;
pub mod types;

pub use error::{LibraryError, Result};
pub use types::{LibraryDocument, Tag, TagGroup};

/// Reference to a group affected by a pending tag deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRef {
    pub id: String,
    pub name: String,
}

/// Outcome of a `delete_tag` call
///
/// `NotFound` and `ConfirmationRequired` are normal negative results the
/// caller must handle, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTagOutcome {
    /// Tag removed; its id pruned from every group
    Deleted,
    /// No tag with the given id exists
    NotFound,
    /// The tag is referenced by these groups; nothing was mutated. Retry
    /// with `force = true` to delete anyway and cascade.
    ConfirmationRequired(Vec<GroupRef>),
}

/// Outcome of a `delete_tag_group` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteGroupOutcome {
    Deleted,
    NotFound,
}

static ROOT_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

/// Get the write lock for a library root, keyed by canonical path
fn root_lock(root: &Path) -> Arc<Mutex<()>> {
    let key = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let registry = ROOT_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut locks = registry.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(locks.entry(key).or_default())
}

/// Set up the library structure at a root
///
/// Returns `true` if the library already existed (in which case nothing was
/// touched). With `seed`, a new library starts from the default seed
/// document instead of an empty one.
///
/// # Errors
/// Returns `LibraryError` if directory creation or the initial save fails.
pub fn initialize(root: &Path, seed: bool) -> Result<bool> {
    let lock = root_lock(root);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
    store::initialize(root, seed)
}

/// Create a tag with a freshly allocated id
///
/// # Errors
/// Returns `NotInitialized` if no library exists at the root, or any store
/// failure from loading or saving the document.
pub fn create_tag(root: &Path, name: &str, aliases: Vec<String>) -> Result<Tag> {
    let lock = root_lock(root);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

    let mut document = store::load_existing(root)?;
    let tag = Tag {
        name: name.to_string(),
        aliases,
        id: ids::allocate_id(&document.ids_in_use()),
    };
    document.tags.push(tag.clone());
    store::save(root, &document)?;
    Ok(tag)
}

/// List all tags in stored order
///
/// # Errors
/// Returns `NotInitialized` if no library exists at the root.
pub fn list_tags(root: &Path) -> Result<Vec<Tag>> {
    Ok(store::load_existing(root)?.tags)
}

/// Delete a tag, cascading its id out of every group
///
/// If any group references the tag and `force` is false, nothing is mutated
/// and the affected groups are returned for the caller to confirm. Deleting
/// a tag silently breaks group membership elsewhere, so the caller has to
/// opt in explicitly.
///
/// # Errors
/// Returns `NotInitialized` if no library exists at the root, or any store
/// failure from loading or saving the document.
pub fn delete_tag(root: &Path, tag_id: &str, force: bool) -> Result<DeleteTagOutcome> {
    let lock = root_lock(root);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

    let mut document = store::load_existing(root)?;
    if document.find_tag(tag_id).is_none() {
        return Ok(DeleteTagOutcome::NotFound);
    }

    let affected: Vec<GroupRef> = document
        .groups_containing(tag_id)
        .map(|g| GroupRef {
            id: g.id.clone(),
            name: g.name.clone(),
        })
        .collect();

    if !affected.is_empty() && !force {
        return Ok(DeleteTagOutcome::ConfirmationRequired(affected));
    }

    document.tags.retain(|t| t.id != tag_id);
    for group in &mut document.tag_groups {
        group.ids.retain(|id| id != tag_id);
    }
    store::save(root, &document)?;
    Ok(DeleteTagOutcome::Deleted)
}

/// List all tag groups in stored order
///
/// # Errors
/// Returns `NotInitialized` if no library exists at the root.
pub fn list_tag_groups(root: &Path) -> Result<Vec<TagGroup>> {
    Ok(store::load_existing(root)?.tag_groups)
}

/// Create a tag group with a freshly allocated id
///
/// The id comes from the same namespace as tag ids. Member ids are stored
/// as given, without checking that each references an existing tag:
/// membership is trusted at creation time, and integrity is enforced on tag
/// deletion instead.
///
/// # Errors
/// Returns `NotInitialized` if no library exists at the root, or any store
/// failure from loading or saving the document.
pub fn create_tag_group(
    root: &Path,
    name: &str,
    tag_ids: Vec<String>,
    aliases: Vec<String>,
) -> Result<TagGroup> {
    let lock = root_lock(root);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

    let mut document = store::load_existing(root)?;
    let group = TagGroup {
        name: name.to_string(),
        aliases,
        id: ids::allocate_id(&document.ids_in_use()),
        ids: tag_ids,
    };
    document.tag_groups.push(group.clone());
    store::save(root, &document)?;
    Ok(group)
}

/// Delete a tag group
///
/// Groups are not referenced by anything else, so no cascade is needed.
///
/// # Errors
/// Returns `NotInitialized` if no library exists at the root, or any store
/// failure from loading or saving the document.
pub fn delete_tag_group(root: &Path, group_id: &str) -> Result<DeleteGroupOutcome> {
    let lock = root_lock(root);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

    let mut document = store::load_existing(root)?;
    if document.find_group(group_id).is_none() {
        return Ok(DeleteGroupOutcome::NotFound);
    }

    document.tag_groups.retain(|g| g.id != group_id);
    store::save(root, &document)?;
    Ok(DeleteGroupOutcome::Deleted)
}

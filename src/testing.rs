//! Testing utilities for tptags
//!
//! Provides a `TestLibrary` fixture wrapping a temporary directory that
//! acts as a library root. The directory is removed when the fixture is
//! dropped, so tests leave no artifacts behind.
//!
//! Only available when compiled with `cfg(test)`.

use std::path::Path;
use tempfile::TempDir;

use crate::library;

/// A temporary library root for tests
///
/// # Examples
/// ```ignore
/// let lib = TestLibrary::new();
/// let tag = library::create_tag(lib.root(), "jpg", Vec::new()).unwrap();
/// ```
pub struct TestLibrary {
    dir: TempDir,
}

impl TestLibrary {
    /// Create a root with an initialized, empty library
    ///
    /// # Panics
    /// Panics if the temporary directory or library cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let lib = Self::uninitialized();
        library::initialize(lib.root(), false).expect("failed to initialize test library");
        lib
    }

    /// Create a root with an initialized library seeded with the defaults
    ///
    /// # Panics
    /// Panics if the temporary directory or library cannot be created.
    #[must_use]
    pub fn seeded() -> Self {
        let lib = Self::uninitialized();
        library::initialize(lib.root(), true).expect("failed to initialize test library");
        lib
    }

    /// Create a bare root with no library at all
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn uninitialized() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// The library root path
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestLibrary {
    fn default() -> Self {
        Self::new()
    }
}

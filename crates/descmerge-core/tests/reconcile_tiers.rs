//! # Reconciliation Tier Tests (T0-T3)
//!
//! If ANY tier fails, the reconciled set cannot be trusted.
//!
//! ## Tiers
//! - T0: Empty and trivial inputs
//! - T1: Precedence between registries
//! - T2: Exclusion policy
//! - T3: Atomicity

use descmerge_core::{
    BlobRegistry, Descriptor, DescriptorSet, FileObject, FileRegistry, MergeError,
    ModernRegistry, RegisteredFile, codec, reconcile,
};

fn file(name: &str, package: &str) -> Descriptor {
    Descriptor {
        name: Some(name.to_string()),
        package: Some(package.to_string()),
        ..Descriptor::default()
    }
}

fn legacy_of(files: &[Descriptor]) -> BlobRegistry {
    let mut registry = BlobRegistry::new();
    for f in files {
        registry.register_descriptor(f).expect("register legacy");
    }
    registry
}

fn modern_of(files: &[Descriptor]) -> FileRegistry {
    let mut registry = FileRegistry::new();
    for f in files {
        registry.register_descriptor(f).expect("register modern");
    }
    registry
}

fn names(set: &DescriptorSet) -> Vec<&str> {
    set.names().collect()
}

// =============================================================================
// TIER T0: EMPTY AND TRIVIAL INPUTS
// =============================================================================

mod t0_trivial_inputs {
    use super::*;

    /// T0.1: Empty registries produce an empty set, not an error.
    #[test]
    fn empty_inputs_yield_empty_set() {
        let set = reconcile(&BlobRegistry::new(), &FileRegistry::new()).expect("reconcile");
        assert!(set.is_empty());
    }

    /// T0.2: Disjoint registries produce their sorted union.
    #[test]
    fn disjoint_inputs_yield_sorted_union() {
        let legacy = legacy_of(&[file("a.proto", "a")]);
        let modern = modern_of(&[file("b.proto", "b")]);

        let set = reconcile(&legacy, &modern).expect("reconcile");
        assert_eq!(names(&set), vec!["a.proto", "b.proto"]);
    }

    /// T0.3: Order is by name, not by source.
    #[test]
    fn modern_files_sort_before_legacy_files_when_named_lower() {
        let legacy = legacy_of(&[file("z/legacy.proto", "z"), file("m.proto", "m")]);
        let modern = modern_of(&[file("b.proto", "b"), file("a.proto", "a")]);

        let set = reconcile(&legacy, &modern).expect("reconcile");
        assert_eq!(
            names(&set),
            vec!["a.proto", "b.proto", "m.proto", "z/legacy.proto"]
        );
    }
}

// =============================================================================
// TIER T1: PRECEDENCE
// =============================================================================

mod t1_precedence {
    use super::*;

    /// T1.1: Legacy wins when both registries hold a non-excluded name.
    #[test]
    fn legacy_wins_on_overlap() {
        let legacy = legacy_of(&[file("x.proto", "from.legacy")]);
        let modern = modern_of(&[file("x.proto", "from.modern")]);

        let set = reconcile(&legacy, &modern).expect("reconcile");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("x.proto").map(|d| d.package()), Some("from.legacy"));
    }

    /// T1.2: A repeated legacy name keeps the first registration.
    #[test]
    fn repeated_legacy_name_appears_once() {
        let legacy = legacy_of(&[file("x.proto", "first"), file("x.proto", "second")]);

        let set = reconcile(&legacy, &FileRegistry::new()).expect("reconcile");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("x.proto").map(|d| d.package()), Some("first"));
    }

    /// T1.3: Modern enumeration order does not affect the output.
    #[test]
    fn modern_order_is_irrelevant() {
        let legacy = legacy_of(&[file("l.proto", "l")]);
        let forward = modern_of(&[file("a.proto", "a"), file("b.proto", "b"), file("c.proto", "c")]);
        let backward = modern_of(&[file("c.proto", "c"), file("b.proto", "b"), file("a.proto", "a")]);

        let one = reconcile(&legacy, &forward).expect("reconcile");
        let two = reconcile(&legacy, &backward).expect("reconcile");
        assert_eq!(one, two);
        assert_eq!(one.encode_to_vec(), two.encode_to_vec());
    }
}

// =============================================================================
// TIER T2: EXCLUSION POLICY
// =============================================================================

mod t2_exclusion {
    use super::*;

    /// T2.1: An excluded legacy name resurfaces from the modern registry.
    #[test]
    fn excluded_name_comes_from_modern() {
        let legacy = legacy_of(&[file("descriptor.proto", "from.legacy")]);
        let modern = modern_of(&[file("descriptor.proto", "from.modern")]);

        let set = reconcile(&legacy, &modern).expect("reconcile");
        assert_eq!(names(&set), vec!["descriptor.proto"]);
        assert_eq!(
            set.get("descriptor.proto").map(|d| d.package()),
            Some("from.modern")
        );
    }

    /// T2.2: An excluded legacy name absent from modern disappears.
    #[test]
    fn excluded_name_without_modern_copy_is_dropped() {
        let legacy = legacy_of(&[file("gogo.proto", "gogoproto"), file("a.proto", "a")]);

        let set = reconcile(&legacy, &FileRegistry::new()).expect("reconcile");
        assert_eq!(names(&set), vec!["a.proto"]);
    }

    /// T2.3: Exclusion applies to the legacy source only.
    #[test]
    fn modern_only_excluded_name_is_kept() {
        let modern = modern_of(&[file("gogo.proto", "gogoproto")]);

        let set = reconcile(&BlobRegistry::new(), &modern).expect("reconcile");
        assert_eq!(names(&set), vec!["gogo.proto"]);
    }
}

// =============================================================================
// TIER T3: ATOMICITY
// =============================================================================

mod t3_atomicity {
    use super::*;

    /// T3.1: A truncated legacy blob fails the whole run.
    #[test]
    fn truncated_legacy_blob_fails_run() {
        let mut legacy = legacy_of(&[file("a.proto", "a")]);
        let blob = codec::compress_descriptor(&file("c.proto", "c")).expect("compress");
        legacy.register(blob[..blob.len() - 8].to_vec());
        let modern = modern_of(&[file("b.proto", "b")]);

        let result = reconcile(&legacy, &modern);
        assert!(matches!(result, Err(MergeError::Read(_))), "{result:?}");
    }

    /// T3.2: A blob that is not gzip at all fails with a decompression error.
    #[test]
    fn non_gzip_blob_fails_run() {
        let mut legacy = BlobRegistry::new();
        legacy.register(b"plain text".to_vec());

        let result = reconcile(&legacy, &FileRegistry::new());
        assert!(matches!(result, Err(MergeError::Decompression(_))));
    }

    /// T3.3: A malformed modern object fails the whole run.
    #[test]
    fn malformed_modern_object_fails_run() {
        let legacy = legacy_of(&[file("a.proto", "a")]);
        let mut modern = FileRegistry::new();
        modern
            .register_raw("broken.proto", vec![0x0a, 0xff])
            .expect("register");

        let result = reconcile(&legacy, &modern);
        assert!(matches!(result, Err(MergeError::Conversion(_))));
    }
}

// =============================================================================
// CUSTOM REGISTRY IMPLEMENTATIONS
// =============================================================================

/// A modern registry that enumerates in reverse registration order.
struct ReversedRegistry(Vec<RegisteredFile>);

impl ModernRegistry for ReversedRegistry {
    type File = RegisteredFile;

    fn files(&self) -> impl Iterator<Item = &RegisteredFile> {
        self.0.iter().rev()
    }
}

#[test]
fn custom_modern_registry_is_supported() {
    let source = modern_of(&[file("b.proto", "b"), file("a.proto", "a")]);
    let reversed = ReversedRegistry(source.files().cloned().collect());
    assert_eq!(
        reversed.files().map(|f| f.path()).collect::<Vec<_>>(),
        vec!["a.proto", "b.proto"]
    );

    let set = reconcile(&BlobRegistry::new(), &reversed).expect("reconcile");
    assert_eq!(set, reconcile(&BlobRegistry::new(), &source).expect("reconcile"));
}

/// A file object whose descriptor may carry a name other than its path.
struct LabelledFile {
    path: String,
    descriptor: Descriptor,
}

impl FileObject for LabelledFile {
    fn path(&self) -> &str {
        &self.path
    }

    fn to_descriptor_proto(&self) -> Result<Descriptor, MergeError> {
        Ok(self.descriptor.clone())
    }
}

struct LabelledRegistry(Vec<LabelledFile>);

impl ModernRegistry for LabelledRegistry {
    type File = LabelledFile;

    fn files(&self) -> impl Iterator<Item = &LabelledFile> {
        self.0.iter()
    }
}

fn labelled(path: &str, name: &str) -> LabelledFile {
    LabelledFile {
        path: path.to_string(),
        descriptor: file(name, "modern"),
    }
}

#[test]
fn modern_name_differing_from_path_fails_run() {
    let legacy = legacy_of(&[file("x.proto", "legacy")]);
    let modern = LabelledRegistry(vec![labelled("y.proto", "x.proto")]);

    let result = reconcile(&legacy, &modern);
    assert!(
        matches!(result, Err(MergeError::Conversion(ref m)) if m.contains("y.proto")),
        "{result:?}"
    );
}

#[test]
fn modern_path_enumerated_twice_fails_run() {
    let modern = LabelledRegistry(vec![
        labelled("a.proto", "a.proto"),
        labelled("a.proto", "a.proto"),
    ]);

    let result = reconcile(&BlobRegistry::new(), &modern);
    assert!(matches!(result, Err(MergeError::Conversion(_))), "{result:?}");
}

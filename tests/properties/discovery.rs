//! Property tests for recursive discovery.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;

use spdx_stamp::{discover, Extension};

/// Relative file paths of depth 0..=4 with one of a few extensions.
fn tree() -> impl Strategy<Value = BTreeSet<(Vec<String>, String, &'static str)>> {
    let dir = proptest::string::string_regex("d[a-z]{1,4}").unwrap();
    let stem = proptest::string::string_regex("f[a-z0-9]{1,6}").unwrap();
    let ext = prop_oneof![Just("go"), Just("txt"), Just("gox"), Just("md")];
    proptest::collection::btree_set(
        (proptest::collection::vec(dir, 0..=4), stem, ext),
        0..24,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: discovery yields exactly the matching files, at any depth.
    #[test]
    fn property_discovery_is_complete_and_exact(files in tree()) {
        let root = tempfile::tempdir().unwrap();
        let mut expected = BTreeSet::new();

        for (dirs, stem, ext) in &files {
            let mut rel = PathBuf::new();
            for d in dirs {
                rel.push(d);
            }
            rel.push(format!("{}.{}", stem, ext));

            let full = root.path().join(&rel);
            std::fs::create_dir_all(full.parent().unwrap()).unwrap();
            std::fs::write(&full, "x").unwrap();
            if *ext == "go" {
                expected.insert(full);
            }
        }

        let found: Vec<PathBuf> = discover(root.path(), &Extension::default())
            .map(|r| r.unwrap())
            .collect();
        let found_set: BTreeSet<PathBuf> = found.iter().cloned().collect();

        prop_assert_eq!(found.len(), found_set.len());
        prop_assert_eq!(found_set, expected);
    }
}

//! Tests for output persistence.

use tempfile::TempDir;

use crate::prefix::{AddressFamily, PrefixSet, classify};
use crate::store::{FilePrefixStore, PrefixStore, StoreError, render};

fn set_of(family: AddressFamily, raws: &[&str]) -> PrefixSet {
    let mut set = PrefixSet::new(family);
    set.merge(raws.iter().map(|raw| classify(*raw, family).unwrap()));
    set
}

mod render {
    use super::*;

    #[test]
    fn joins_sorted_members_without_trailing_newline() {
        let set = set_of(
            AddressFamily::V4,
            &["203.0.113.0/24", "10.0.0.0/8", "103.1.2.0/24"],
        );

        assert_eq!(render(&set), "10.0.0.0/8\n103.1.2.0/24\n203.0.113.0/24");
    }

    #[test]
    fn single_member_has_no_newline() {
        let set = set_of(AddressFamily::V6, &["2400:6180::/32"]);
        assert_eq!(render(&set), "2400:6180::/32");
    }

    #[test]
    fn empty_set_renders_empty_string() {
        let set = PrefixSet::new(AddressFamily::V4);
        assert_eq!(render(&set), "");
    }

    #[test]
    fn resorting_rendered_lines_is_a_no_op() {
        let set = set_of(
            AddressFamily::V6,
            &["2a0d:5600::/32", "2001:db8::/32", "2400:6180::/32"],
        );
        let rendered = render(&set);

        let mut lines: Vec<&str> = rendered.lines().collect();
        let original = lines.clone();
        lines.sort_unstable();

        assert_eq!(lines, original);
    }
}

mod file_prefix_store {
    use super::*;

    #[tokio::test]
    async fn save_writes_rendered_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vpn-ipv4.txt");
        let store = FilePrefixStore::new(&path);
        let set = set_of(AddressFamily::V4, &["103.1.2.0/24", "10.0.0.0/8"]);

        store.save(&set).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "10.0.0.0/8\n103.1.2.0/24");
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output").join("nested").join("vpn-ipv6.txt");
        let store = FilePrefixStore::new(&path);

        store
            .save(&set_of(AddressFamily::V6, &["2400:6180::/32"]))
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2400:6180::/32");
    }

    #[tokio::test]
    async fn save_with_existing_parent_is_fine() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("output")).unwrap();
        let store = FilePrefixStore::new(dir.path().join("output").join("vpn-ipv4.txt"));

        let result = store.save(&set_of(AddressFamily::V4, &["10.0.0.0/8"])).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn save_overwrites_previous_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vpn-ipv4.txt");
        std::fs::write(&path, "198.51.100.0/24\n192.0.2.0/24\nstale trailing junk\n").unwrap();
        let store = FilePrefixStore::new(&path);

        store
            .save(&set_of(AddressFamily::V4, &["10.0.0.0/8"]))
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "10.0.0.0/8");
    }

    #[tokio::test]
    async fn save_of_empty_set_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vpn-ipv4.txt");
        let store = FilePrefixStore::new(&path);

        store.save(&PrefixSet::new(AddressFamily::V4)).await.unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vpn-ipv4.txt");
        let store = FilePrefixStore::new(&path);

        store
            .save(&set_of(AddressFamily::V4, &["10.0.0.0/8"]))
            .await
            .unwrap();

        assert!(!dir.path().join("vpn-ipv4.txt.tmp").exists());
    }

    #[tokio::test]
    async fn save_twice_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vpn-ipv6.txt");
        let store = FilePrefixStore::new(&path);
        let set = set_of(AddressFamily::V6, &["2a0d:5600::/32", "2400:6180::/32"]);

        store.save(&set).await.unwrap();
        let first = std::fs::read(&path).unwrap();
        store.save(&set).await.unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn parent_that_is_a_file_fails_to_create_dir() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("output");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = FilePrefixStore::new(blocker.join("vpn-ipv4.txt"));

        let result = store.save(&set_of(AddressFamily::V4, &["10.0.0.0/8"])).await;

        match result {
            Err(StoreError::CreateDir { path, .. }) => assert_eq!(path, blocker),
            other => panic!("Expected CreateDir, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn destination_that_is_a_directory_fails_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vpn-ipv4.txt");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();
        let store = FilePrefixStore::new(&path);

        let result = store.save(&set_of(AddressFamily::V4, &["10.0.0.0/8"])).await;

        assert!(matches!(result, Err(StoreError::Rename { .. })));
        assert!(!dir.path().join("vpn-ipv4.txt.tmp").exists());
    }

    #[test]
    fn destination_is_the_path() {
        let store = FilePrefixStore::new("output/vpn-ipv4.txt");

        assert_eq!(store.path(), std::path::Path::new("output/vpn-ipv4.txt"));
        assert_eq!(store.destination(), "output/vpn-ipv4.txt");
    }

    #[test]
    fn store_error_messages_include_path() {
        let error = StoreError::Write {
            path: "output/vpn-ipv4.txt.tmp".into(),
            source: std::io::Error::other("disk full"),
        };

        let message = error.to_string();
        assert!(message.contains("output/vpn-ipv4.txt.tmp"));
        assert!(message.contains("disk full"));
    }
}

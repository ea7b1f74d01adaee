//! Integration tests for the profile store and validator

#![allow(clippy::panic)]

use profilecard_repository::prelude::*;
use proptest::prelude::*;
use tempfile::TempDir;

fn must<T, E: std::fmt::Debug>(r: std::result::Result<T, E>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("unexpected Err: {e:?}"),
    }
}

fn create_test_store() -> (ProfileStore, TempDir) {
    let temp_dir = must(TempDir::new());
    let config = ProfileStoreConfig::new(temp_dir.path().join("profileData.json"));
    (ProfileStore::new(config), temp_dir)
}

fn create_test_profile(name: &str) -> Profile {
    Profile {
        name: name.to_string(),
        photo: None,
        bio: "Backend developer who likes storage engines".to_string(),
        skills: vec!["Rust".to_string(), "SQL".to_string()],
        github: format!("https://github.com/{}", name.to_lowercase().replace(' ', "-")),
        resume: "https://example.com/cv.pdf".to_string(),
    }
}

mod store_lifecycle {
    use super::*;

    #[tokio::test]
    async fn test_full_lifecycle() {
        let (store, temp_dir) = create_test_store();

        must(store.initialize().await);
        assert_eq!(must(store.read().await), Profile::seed());

        let profile = create_test_profile("Linus Torvalds");
        must(store.write(&profile).await);
        assert_eq!(must(store.read().await), profile);

        drop(store);

        let reopened = ProfileStore::new(ProfileStoreConfig::new(
            temp_dir.path().join("profileData.json"),
        ));
        assert!(!must(reopened.initialize().await));
        assert_eq!(must(reopened.read().await), profile);

        assert_eq!(must(reopened.reset().await), Profile::empty());
        assert_eq!(must(reopened.read().await), Profile::empty());
    }

    #[tokio::test]
    async fn test_write_then_read_returns_same_record() {
        let (store, _temp_dir) = create_test_store();

        for name in ["Ada Lovelace", "Алан Тьюринг", "Edsger Dijkstra"] {
            let mut profile = create_test_profile(name);
            profile.photo = Some("https://example.com/avatar.png".to_string());
            must(store.write(&profile).await);
            assert_eq!(must(store.read().await), profile);
        }
    }

    #[tokio::test]
    async fn test_reset_is_independent_of_prior_state() {
        let (fresh, _fresh_dir) = create_test_store();
        assert_eq!(must(fresh.reset().await), Profile::empty());
        assert_eq!(must(fresh.read().await), Profile::empty());

        let (used, _used_dir) = create_test_store();
        must(used.initialize().await);
        must(used.write(&create_test_profile("Barbara Liskov")).await);
        must(used.reset().await);
        assert_eq!(must(used.read().await), Profile::empty());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_record() {
        let (store, temp_dir) = create_test_store();
        must(store.initialize().await);

        // A directory squatting on the temp file name makes the write fail.
        must(std::fs::create_dir(temp_dir.path().join("profileData.json.tmp")));

        let result = store.write(&create_test_profile("Ken Thompson")).await;
        assert!(result.is_err());
        assert_eq!(must(store.read().await), Profile::seed());
    }
}

mod logging {
    use super::*;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn test_initialize_logs_creation() {
        let (store, _temp_dir) = create_test_store();
        must(store.initialize().await);
        assert!(logs_contain("Created profile data file with default record"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_read_failure_is_logged() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.read().await.is_err());
        assert!(logs_contain("Failed to read profile data file"));
    }
}

mod validation_properties {
    use super::*;

    fn text(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::char::range('a', 'z'), len)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn url() -> impl Strategy<Value = String> {
        ("[a-z]{1,12}", "[a-z0-9]{0,12}")
            .prop_map(|(host, path)| format!("https://{host}.example/{path}"))
    }

    fn valid_draft() -> impl Strategy<Value = ProfileDraft> {
        (
            text(3..=50),
            proptest::option::of(url()),
            text(10..=300),
            proptest::collection::vec("[A-Za-z]{1,10}", 1..5),
            url(),
            url(),
        )
            .prop_map(|(name, photo, bio, skills, github, resume)| ProfileDraft {
                name: Some(name),
                photo: photo.into(),
                bio: Some(bio),
                skills: Some(skills),
                github: Some(github),
                resume: Some(resume),
            })
    }

    fn any_draft() -> impl Strategy<Value = ProfileDraft> {
        (
            proptest::option::of(".{0,60}"),
            prop_oneof![
                Just(PhotoInput::Absent),
                Just(PhotoInput::Malformed),
                ".{0,20}".prop_map(PhotoInput::Text),
            ],
            proptest::option::of(".{0,320}"),
            proptest::option::of(proptest::collection::vec(".{0,5}", 0..3)),
            proptest::option::of(".{0,20}"),
        )
            .prop_map(|(name, photo, bio, skills, resume)| ProfileDraft {
                name,
                photo,
                bio,
                skills,
                github: None,
                resume,
            })
    }

    proptest! {
        #[test]
        fn prop_valid_fields_produce_no_errors(draft in valid_draft()) {
            let errors = validate_profile(&draft);
            prop_assert!(errors.is_empty(), "unexpected errors: {}", errors);
        }

        #[test]
        fn prop_missing_github_always_reported(draft in any_draft()) {
            prop_assert!(validate_profile(&draft).contains("github"));
        }

        #[test]
        fn prop_valid_drafts_convert_to_profiles(draft in valid_draft()) {
            let profile = Profile::try_from(draft.clone());
            prop_assert!(profile.is_ok());
            prop_assert_eq!(ProfileDraft::from(must(profile)), draft);
        }
    }
}

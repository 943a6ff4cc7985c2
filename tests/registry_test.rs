//! End-to-end registry tests against YAML file stores

mod common;

use common::Sandbox;
use shorts::store::STORE_FILE_NAME;
use shorts::{FileStore, Lookup, Scope, ShortcutError, ShortcutStore};

#[test]
fn global_store_is_created_lazily_on_first_write() {
    let sb = Sandbox::new();
    let registry = sb.registry();
    let ctx = sb.outside_ctx();

    assert!(registry.lookup("anything", &ctx).unwrap().is_miss());
    assert!(!sb.global.exists(), "lookups must not create the global dir");

    registry
        .create("hello", "echo hello", Scope::Global, &ctx, false)
        .unwrap();

    assert!(sb.global.join(STORE_FILE_NAME).is_file());
    let found = registry.lookup("hello", &ctx).unwrap().found().unwrap();
    assert_eq!(found.command, "echo hello");
}

#[test]
fn shadowing_survives_reopening_the_registry() {
    let sb = Sandbox::new();
    let ctx = sb.project_ctx();

    {
        let registry = sb.registry();
        registry.create("foo", "echo g", Scope::Global, &ctx, false).unwrap();
        registry.create("foo", "echo l", Scope::Local, &ctx, true).unwrap();
    }

    let registry = sb.registry();
    let found = registry.lookup("foo", &ctx).unwrap().found().unwrap();
    assert_eq!((found.command.as_str(), found.scope), ("echo l", Scope::Local));

    registry.delete("foo", Scope::Local, &ctx).unwrap();
    let found = registry.lookup("foo", &ctx).unwrap().found().unwrap();
    assert_eq!((found.command.as_str(), found.scope), ("echo g", Scope::Global));

    // Deleting the local entry left the local file in place, just empty
    let local = FileStore::new(Scope::Local, sb.project.join(".shorts"));
    assert!(local.path().is_file());
    assert!(local.load().unwrap().is_empty());
}

#[test]
fn local_create_without_marker_initializes_one() {
    let sb = Sandbox::new();
    let registry = sb.registry();
    let ctx = sb.outside_ctx();

    registry.create("here", "pwd", Scope::Local, &ctx, false).unwrap();

    assert!(sb.outside.join(".shorts").join(STORE_FILE_NAME).is_file());
    // The new marker makes the local scope active right away
    let found = registry.lookup("here", &ctx).unwrap().found().unwrap();
    assert_eq!(found.scope, Scope::Local);
}

#[test]
fn directory_creation_failure_is_reported_with_path() {
    let sb = Sandbox::new();
    // A regular file where the global directory should go
    std::fs::create_dir_all(sb.global.parent().unwrap()).unwrap();
    std::fs::write(&sb.global, "not a directory").unwrap();

    let err = sb
        .registry()
        .create("x", "echo", Scope::Global, &sb.outside_ctx(), false)
        .unwrap_err();

    match err {
        ShortcutError::DirectoryCreation {
            ref path, scope, ..
        } => {
            assert_eq!(path, &sb.global);
            assert_eq!(scope, Scope::Global);
        }
        other => panic!("expected DirectoryCreation, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn corrupt_global_store_fails_lookups_loudly() {
    let sb = Sandbox::new();
    std::fs::create_dir_all(&sb.global).unwrap();
    let path = sb.global.join(STORE_FILE_NAME);
    std::fs::write(&path, "- this\n- is a list, not a mapping\n").unwrap();

    let err = sb.registry().lookup("x", &sb.outside_ctx()).unwrap_err();
    match err {
        ShortcutError::CorruptStore {
            path: ref reported,
            scope,
            ..
        } => {
            assert_eq!(reported, &path);
            assert_eq!(scope, Scope::Global);
        }
        other => panic!("expected CorruptStore, got {other:?}"),
    }

    // Untouched
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "- this\n- is a list, not a mapping\n"
    );
}

#[test]
fn interrupted_write_leaves_previous_mapping_readable() {
    let sb = Sandbox::new();
    let registry = sb.registry();
    let ctx = sb.outside_ctx();

    registry.create("a", "echo a", Scope::Global, &ctx, false).unwrap();
    let before = registry.list(&ctx).unwrap();

    // A crashed writer leaves a half-written temp file next to the store
    let temp = sb.global.join(STORE_FILE_NAME).with_extension("yaml.tmp");
    std::fs::write(&temp, "a:\n  command: echo a\nb:\n  comm").unwrap();

    assert_eq!(registry.list(&ctx).unwrap(), before);

    registry.create("b", "echo b", Scope::Global, &ctx, false).unwrap();
    let names: Vec<String> = registry.list(&ctx).unwrap().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!(!temp.exists());
}

#[test]
fn lookup_and_expand_with_arguments() {
    let sb = Sandbox::new();
    let registry = sb.registry();
    let ctx = sb.project_ctx();

    registry
        .create("commit", "git commit -m %1 %@", Scope::Local, &ctx, false)
        .unwrap();

    let Lookup::Found(shortcut) = registry.lookup("commit", &ctx).unwrap() else {
        panic!("commit should resolve");
    };
    let args: Vec<String> = ["wip", "--no-verify"].iter().map(|s| s.to_string()).collect();
    assert_eq!(
        registry.expand(&shortcut, &args).unwrap(),
        "git commit -m wip --no-verify"
    );
}

#[test]
fn local_commands_next_to_the_global_dir_leave_it_alone() {
    let sb = Sandbox::new();
    let registry = sb.registry();
    let home = shorts::Context::new(sb.global.parent().unwrap());

    registry.create("g", "echo g", Scope::Global, &home, false).unwrap();
    assert!(registry.create("l", "echo l", Scope::Local, &home, false).is_err());
    assert!(registry.delete("g", Scope::Local, &home).is_err());

    let global = FileStore::new(Scope::Global, &sb.global).load().unwrap();
    assert_eq!(global.keys().collect::<Vec<_>>(), vec!["g"]);
}

use std::fs;
use std::path::Path;

use builtin_embed::embed_all;
use builtin_embed::error::{EmbedError, SpliceError};
use builtin_embed::model::{Layout, Mode};

const IO_TEMPLATE: &str = "#include \"cardinal_io.h\"\n\
    \n\
    // This string literal is generated automatically from io.tus. Do not edit.\n\
    static const char* libSource =\n\
    \"class IO {}\\n\";\n\
    \n\
    void cardinalLoadIOLibrary(CardinalVM* vm) {\n\
    \tcardinalInterpret(vm, \"\", libSource);\n\
    }\n";

fn template_for(name: &str) -> String {
    IO_TEMPLATE.replace("io", name)
}

fn vm_tree(sources: &[(&str, &str)]) -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::default();
    fs::create_dir_all(layout.input_dir(root.path())).unwrap();
    fs::create_dir_all(root.path().join(&layout.output_dir)).unwrap();
    for (file, text) in sources {
        fs::write(layout.input_dir(root.path()).join(file), text).unwrap();
    }
    root
}

fn add_template(root: &Path, name: &str) {
    let path = Layout::default().template_path(root, name);
    fs::write(path, template_for(name)).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn writes_template_and_constant() {
    let root = vm_tree(&[("io.tus", "class IO {\r\n  static print(s) { write_(\"[\" + s + \"]\") }\r\n}\r\n")]);
    add_template(root.path(), "io");

    let names = embed_all(root.path(), &Layout::default(), Mode::Write).unwrap();
    assert_eq!(names, ["io"]);

    let constant = "libSource =\n\
        \"class IO {\\n\"\n\
        \"  static print(s) { write_(\\\"[\\\" + s + \\\"]\\\") }\\n\"\n\
        \"}\\n\";";
    assert_eq!(read(root.path(), "src/vm/cardinal_io.txt"), constant);
    assert_eq!(
        read(root.path(), "src/vm/cardinal_io.c"),
        IO_TEMPLATE.replace("libSource =\n\"class IO {}\\n\";", constant)
    );
}

#[test]
fn only_recognised_suffix_is_processed() {
    let root = vm_tree(&[
        ("core.tus", "class Core {}\n"),
        ("io.tus", "class IO {}\n"),
        ("README.md", "docs\n"),
        ("io.tus.orig", "old\n"),
    ]);
    add_template(root.path(), "core");
    add_template(root.path(), "io");

    let mut names = embed_all(root.path(), &Layout::default(), Mode::Write).unwrap();
    names.sort();
    assert_eq!(names, ["core", "io"]);
    assert!(!root.path().join("src/vm/cardinal_README.txt").exists());
}

#[test]
fn multi_dot_file_uses_first_segment() {
    let root = vm_tree(&[("core.extra.tus", "class Core {}\n")]);
    add_template(root.path(), "core");

    let names = embed_all(root.path(), &Layout::default(), Mode::Write).unwrap();
    assert_eq!(names, ["core"]);
    assert!(read(root.path(), "src/vm/cardinal_core.c").contains("\"class Core {}\\n\";"));
    assert!(root.path().join("src/vm/cardinal_core.txt").exists());
    assert!(!root.path().join("src/vm/cardinal_core.extra.c").exists());
}

#[test]
fn sources_sharing_a_base_name_abort_the_run() {
    let root = vm_tree(&[("core.tus", "first\n"), ("core.extra.tus", "second\n")]);
    add_template(root.path(), "core");

    let err = embed_all(root.path(), &Layout::default(), Mode::Write).unwrap_err();
    match err.downcast_ref::<EmbedError>() {
        Some(EmbedError::DuplicateBaseName { name, paths }) => {
            assert_eq!(name, "core");
            assert_eq!(paths.len(), 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(read(root.path(), "src/vm/cardinal_core.c"), template_for("core"));
    assert!(!root.path().join("src/vm/cardinal_core.txt").exists());
}

#[test]
fn hidden_source_is_ignored() {
    let root = vm_tree(&[("io.tus", "class IO {}\n"), (".io.tus", "backup\n")]);
    add_template(root.path(), "io");

    let names = embed_all(root.path(), &Layout::default(), Mode::Write).unwrap();
    assert_eq!(names, ["io"]);
    assert!(read(root.path(), "src/vm/cardinal_io.txt").contains("class IO {}"));
}

#[test]
fn missing_marker_aborts_without_writing() {
    let root = vm_tree(&[("core.tus", "class Core {}\n"), ("io.tus", "class IO {}\n")]);
    add_template(root.path(), "core");
    let io_template = Layout::default().template_path(root.path(), "io");
    fs::write(&io_template, "void cardinalLoadIOLibrary(CardinalVM* vm) {}\n").unwrap();

    let err = embed_all(root.path(), &Layout::default(), Mode::Write).unwrap_err();
    let embed_err = err.downcast_ref::<EmbedError>().expect("typed error");
    match embed_err {
        EmbedError::Splice { path, source } => {
            assert_eq!(path, &io_template);
            assert!(matches!(source, SpliceError::MarkerNotFound { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }

    // core comes first alphabetically but nothing is written on failure.
    assert_eq!(read(root.path(), "src/vm/cardinal_core.c"), template_for("core"));
    assert!(!root.path().join("src/vm/cardinal_core.txt").exists());
}

#[test]
fn check_mode_reports_stale_then_passes_after_write() {
    let root = vm_tree(&[("io.tus", "class IO {\n  static clock { 1 }\n}\n")]);
    add_template(root.path(), "io");
    let layout = Layout::default();

    let err = embed_all(root.path(), &layout, Mode::Check).unwrap_err();
    match err.downcast_ref::<EmbedError>() {
        Some(EmbedError::Stale { names }) => assert_eq!(names, &["io"]),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(read(root.path(), "src/vm/cardinal_io.c"), template_for("io"));

    embed_all(root.path(), &layout, Mode::Write).unwrap();
    let names = embed_all(root.path(), &layout, Mode::Check).unwrap();
    assert_eq!(names, ["io"]);
}

#[test]
fn rerun_is_byte_stable() {
    let root = vm_tree(&[("io.tus", "System.print(\"\\\\\")\r\n")]);
    add_template(root.path(), "io");
    let layout = Layout::default();

    embed_all(root.path(), &layout, Mode::Write).unwrap();
    let first = read(root.path(), "src/vm/cardinal_io.c");
    embed_all(root.path(), &layout, Mode::Write).unwrap();
    assert_eq!(read(root.path(), "src/vm/cardinal_io.c"), first);
    assert!(first.contains("\"System.print(\\\"\\\\\\\\\\\")\\n\";"));
}

#[test]
fn custom_layout_is_honoured() {
    let root = tempfile::tempdir().unwrap();
    let layout: Layout = serde_json::from_str(
        r#"{ "input_dir": "lib", "input_suffix": "wren", "output_dir": "gen",
             "template_prefix": "wren", "constant_name": "coreSource" }"#,
    )
    .unwrap();
    fs::create_dir_all(root.path().join("lib")).unwrap();
    fs::create_dir_all(root.path().join("gen")).unwrap();
    fs::write(root.path().join("lib/core.wren"), "class Num {}\n").unwrap();
    fs::write(
        root.path().join("gen/wren_core.c"),
        "static const char* coreSource = \"\";\n",
    )
    .unwrap();

    embed_all(root.path(), &layout, Mode::Write).unwrap();
    assert_eq!(
        read(root.path(), "gen/wren_core.c"),
        "static const char* coreSource =\n\"class Num {}\\n\";\n"
    );
    assert_eq!(
        read(root.path(), "gen/wren_core.txt"),
        "coreSource =\n\"class Num {}\\n\";"
    );
}

#[test]
fn missing_input_dir_fails() {
    let root = tempfile::tempdir().unwrap();
    let err = embed_all(root.path(), &Layout::default(), Mode::Write).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EmbedError>(),
        Some(EmbedError::InputDirMissing { .. })
    ));
}

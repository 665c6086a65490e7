use std::path::PathBuf;

fn main() {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let grammar_root = manifest_dir
        .parent()
        .expect("crates dir")
        .parent()
        .expect("workspace root")
        .join("tree-sitter");
    let src_dir = grammar_root.join("src");

    cc::Build::new()
        .include(&src_dir)
        .file(src_dir.join("parser.c"))
        .warnings(false)
        .compile("tree-sitter-parol");

    for artifact in [
        src_dir.join("parser.c"),
        src_dir.join("node-types.json"),
        src_dir.join("grammar.json"),
        grammar_root.join("queries"),
    ] {
        println!("cargo:rerun-if-changed={}", artifact.display());
    }
}

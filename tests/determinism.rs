//! Two runs over the same corpus and configuration must serialize to
//! byte-identical reports, with the worker pools on or off.

use std::fs;
use std::path::Path;

use dupscan::{DupscanConfig, PipelineConfig};

fn write_doc(root: &Path, dir: &str, title: &str, h1: &str, desc: &str) {
    let doc_dir = root.join(dir);
    fs::create_dir_all(&doc_dir).expect("create document dir");
    let html = format!(
        "<html><head><title>{title}</title>\
         <meta name=\"description\" content=\"{desc}\"></head>\
         <body><h1>{h1}</h1></body></html>"
    );
    fs::write(doc_dir.join("index.html"), html).expect("write index.html");
}

fn build_corpus(root: &Path) {
    // A mix of translation pairs, functional near-duplicates, and noise,
    // large enough that parallel sharding actually interleaves.
    let concepts = [
        ("agua", "water"),
        ("comercio", "commerce"),
        ("mapa", "maps"),
        ("salud", "healthcare"),
        ("energia", "energy"),
        ("educacion", "education"),
    ];
    for (es, en) in concepts {
        write_doc(
            root,
            &format!("{es}-soberana"),
            &format!("{es} servicios municipales"),
            &format!("portal {es}"),
            &format!("descripcion de {es}"),
        );
        write_doc(
            root,
            &format!("sovereign-{en}"),
            &format!("{en} municipal services"),
            &format!("portal {en}"),
            &format!("description of {en}"),
        );
    }
    for i in 0..10 {
        write_doc(
            root,
            &format!("filler-{i}"),
            &format!("Filler document number {i}"),
            &format!("Filler {i}"),
            &format!("unrelated content {i}"),
        );
    }
}

#[test]
fn repeated_runs_serialize_identically() {
    let tmp = tempfile::tempdir().expect("tempdir");
    build_corpus(tmp.path());
    let cfg = PipelineConfig::builtin().expect("builtin config");

    let first = dupscan::run(tmp.path(), &cfg).expect("first run");
    let second = dupscan::run(tmp.path(), &cfg).expect("second run");

    let bytes_first = serde_json::to_vec(&first).expect("serialize first");
    let bytes_second = serde_json::to_vec(&second).expect("serialize second");
    assert_eq!(bytes_first, bytes_second);
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let tmp = tempfile::tempdir().expect("tempdir");
    build_corpus(tmp.path());

    let parallel = dupscan::run(
        tmp.path(),
        &PipelineConfig::builtin().expect("builtin config"),
    )
    .expect("parallel run");

    let sequential_cfg = DupscanConfig::from_yaml(
        r#"
version: "1.0"
scan:
  use_parallel: false
matcher:
  use_parallel: false
"#,
    )
    .expect("sequential yaml")
    .resolve()
    .expect("resolve sequential config");
    let sequential = dupscan::run(tmp.path(), &sequential_cfg).expect("sequential run");

    assert_eq!(
        serde_json::to_vec(&parallel).expect("serialize parallel"),
        serde_json::to_vec(&sequential).expect("serialize sequential"),
    );
}

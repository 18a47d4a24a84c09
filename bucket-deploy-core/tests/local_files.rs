use std::fs;
use std::path::Path;

use bucket_deploy_core::deploy::unused_keys;
use bucket_deploy_core::error::DeployError;
use bucket_deploy_core::headers::{content_type_for, IMMUTABLE_CACHE, NO_CACHE};
use bucket_deploy_core::local_files::{list_local_files, LocalFile};
use tempfile::tempdir;

#[test]
fn lists_direct_entries_only_sorted_by_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.css"), "b").unwrap();
    fs::write(dir.path().join("a.js"), "a").unwrap();
    fs::create_dir(dir.path().join("static")).unwrap();
    fs::write(dir.path().join("static").join("nested.png"), "n").unwrap();

    let files = list_local_files(dir.path()).expect("directory should be readable");
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

    // The subdirectory is listed as an entry, its contents are not.
    assert_eq!(names, vec!["a.js", "b.css", "static"]);
    assert_eq!(files[0].path, dir.path().join("a.js"));
}

#[test]
fn missing_directory_is_a_filesystem_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = list_local_files(&missing).unwrap_err();
    assert!(matches!(err, DeployError::Filesystem { ref path, .. } if *path == missing));
}

#[test]
fn key_is_the_basename_so_nested_files_collide() {
    let first = LocalFile::from_path("dist/en/app.js").unwrap();
    let second = LocalFile::from_path("dist/fr/app.js").unwrap();

    assert_eq!(first.key(), "app.js");
    assert_eq!(first.key(), second.key());
}

#[test]
fn index_html_is_never_cached_wherever_it_lives() {
    for path in ["index.html", "dist/index.html", "/srv/site/build/index.html"] {
        let file = LocalFile::from_path(path).unwrap();
        assert_eq!(file.cache_control(), NO_CACHE, "{path}");
        assert_eq!(file.content_type(), "text/html");
    }
}

#[test]
fn every_other_file_is_cached_for_a_year() {
    for path in ["Index.html", "index.htm", "index.html.gz", "main.css", "favicon.ico", "LICENSE"] {
        let file = LocalFile::from_path(path).unwrap();
        assert_eq!(file.cache_control(), IMMUTABLE_CACHE, "{path}");
    }
    assert_eq!(IMMUTABLE_CACHE, "max-age=31536000");
}

#[test]
fn content_type_depends_only_on_extension() {
    assert_eq!(content_type_for(Path::new("app.js")), "application/javascript");
    assert_eq!(content_type_for(Path::new("nested/dir/app.js")), "application/javascript");
    assert_eq!(content_type_for(Path::new("style.css")), "text/css");
    assert_eq!(content_type_for(Path::new("data.json")), "application/json");
    assert_eq!(content_type_for(Path::new("font.woff2")), "font/woff2");
    assert_eq!(content_type_for(Path::new("LICENSE")), "application/octet-stream");
    assert_eq!(content_type_for(Path::new("blob.xyz123")), "application/octet-stream");
}

#[test]
fn less_common_web_assets_get_a_real_content_type() {
    for (name, expected) in [
        ("clip.ogg", "audio/ogg"),
        ("beep.wav", "audio/wav"),
        ("page.xhtml", "application/xhtml+xml"),
        ("sprite.bmp", "image/bmp"),
        ("scan.tiff", "image/tiff"),
        ("intro.mov", "video/quicktime"),
    ] {
        assert_eq!(content_type_for(Path::new(name)), expected, "{name}");
    }

    for name in ["feed.rss", "openapi.yaml", "site.webmanifest", "bundle.js.map"] {
        assert_ne!(
            content_type_for(Path::new(name)),
            "application/octet-stream",
            "{name} should not fall back to a download"
        );
    }
}

#[test]
fn unused_keys_is_a_set_difference_in_listing_order() {
    let files = vec![
        LocalFile::from_path("dist/index.html").unwrap(),
        LocalFile::from_path("dist/app.js").unwrap(),
    ];
    let objects: Vec<String> = ["z.js", "index.html", "old.js", "app.js"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(unused_keys(&objects, &files), vec!["z.js", "old.js"]);
    assert!(unused_keys(&[], &files).is_empty());
    assert_eq!(unused_keys(&objects, &[]), objects);
}

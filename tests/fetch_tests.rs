//! Fetcher tests with a real gzipped tarball served over HTTP and extracted by
//! the system `tar`, mirroring how the sample dataset is published.

#![cfg(unix)]

use httpmock::prelude::*;
use ocean_nudge::{DatasetFetcher, SystemToolRunner};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn make_tarball(work_dir: &Path) -> Vec<u8> {
    let pack = work_dir.join("pack");
    fs::create_dir_all(pack.join("test_data/input")).unwrap();
    fs::create_dir_all(pack.join("test_data/output")).unwrap();
    fs::write(pack.join("test_data/input/pentad1.grb"), b"grib").unwrap();
    fs::write(pack.join("test_data/input/godas.tab"), b"table").unwrap();

    let tarball = work_dir.join("test_data.tar.gz");
    let status = Command::new("tar")
        .args(["czf"])
        .arg(&tarball)
        .args(["-C"])
        .arg(&pack)
        .arg("test_data")
        .status()
        .unwrap();
    assert!(status.success());

    fs::read(tarball).unwrap()
}

#[tokio::test]
async fn test_fetch_downloads_and_extracts_dataset() {
    let work = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let tarball_bytes = make_tarball(work.path());

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/test_data.tar.gz");
        then.status(200).body(tarball_bytes.clone());
    });

    let fetcher =
        DatasetFetcher::with_url(SystemToolRunner, server.url("/test_data.tar.gz"));
    let data_dir = fetcher.ensure(dest.path()).await.unwrap();

    mock.assert();
    assert_eq!(data_dir, dest.path().join("test_data"));
    assert!(data_dir.join("input/pentad1.grb").exists());
    assert!(data_dir.join("input/godas.tab").exists());
    assert!(data_dir.join("output").exists());
}

#[tokio::test]
async fn test_second_ensure_does_not_download_again() {
    let work = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let tarball_bytes = make_tarball(work.path());

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/test_data.tar.gz");
        then.status(200).body(tarball_bytes.clone());
    });

    let fetcher =
        DatasetFetcher::with_url(SystemToolRunner, server.url("/test_data.tar.gz"));
    fetcher.ensure(dest.path()).await.unwrap();
    fetcher.ensure(dest.path()).await.unwrap();

    mock.assert_hits(1);
}

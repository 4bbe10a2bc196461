//! End-to-end tests for the Inkpot binary.

mod common;

use anyhow::Result;
use std::fs;
use std::process::Command;

fn inkpot() -> Command {
    Command::new(env!("CARGO_BIN_EXE_inkpot"))
}

/// Tests full binary execution generates a site.
#[test]
fn test_build_e2e() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    let output = tempfile::tempdir()?;
    common::write_simple_post(content.path(), "first-post", "First Post", "2023-06-01")?;

    // Act
    let status = inkpot()
        .arg("build")
        .arg("--content")
        .arg(content.path())
        .arg("-o")
        .arg(output.path())
        .args(["--title", "E2E Blog"])
        .status()?;

    // Assert
    assert!(status.success());
    let index = fs::read_to_string(output.path().join("index.html"))?;
    assert!(index.contains("E2E Blog"));
    assert!(index.contains("First Post"));
    assert!(output.path().join("posts").join("first-post.html").exists());
    Ok(())
}

/// Tests the redirect table is printed to stdout.
#[test]
fn test_redirects_e2e() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    common::write_post(
        content.path(),
        "current",
        &common::post_document("Current", "2023-01-01", &["slug: legacy"], "Body\n"),
    )?;

    // Act
    let output = inkpot()
        .arg("redirects")
        .arg("--content")
        .arg(content.path())
        .output()?;

    // Assert
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "/post/legacy /posts/current 301\n/post/* /posts/:splat 301\n"
    );
    Ok(())
}

/// Tests a missing content directory exits with failure.
#[test]
fn test_missing_content_dir_e2e() -> Result<()> {
    // Arrange
    let output = tempfile::tempdir()?;

    // Act
    let result = inkpot()
        .args(["build", "--content", "/nonexistent/inkpot/posts", "-o"])
        .arg(output.path())
        .output()?;

    // Assert
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Content directory does not exist"));
    Ok(())
}

/// Tests a malformed post fails the build.
#[test]
fn test_malformed_post_e2e() -> Result<()> {
    // Arrange
    let content = common::create_content_dir()?;
    let output = tempfile::tempdir()?;
    common::write_post(content.path(), "bad", "no frontmatter here\n")?;

    // Act
    let result = inkpot()
        .arg("build")
        .arg("--content")
        .arg(content.path())
        .arg("-o")
        .arg(output.path())
        .output()?;

    // Assert
    assert!(!result.status.success());
    Ok(())
}

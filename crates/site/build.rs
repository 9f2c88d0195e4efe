//! Build script for the site crate.
//!
//! Fingerprints the stylesheet so templates can link it under an immutable,
//! cache-busting filename via the `css_hash` template filter.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let stylesheet = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", stylesheet.display());

    match fingerprint(&stylesheet) {
        Ok(hash) => println!("cargo:rustc-env=CSS_HASH={hash}"),
        Err(e) => {
            // A missing stylesheet downgrades to an unhashed link instead
            // of failing the build
            println!("cargo:warning=Could not fingerprint main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
        }
    }
}

/// Hash the stylesheet and copy it to `static/css/derived/main.<hash>.css`,
/// returning the short content hash.
fn fingerprint(stylesheet: &Path) -> std::io::Result<String> {
    let content = fs::read(stylesheet)?;

    let mut hash = format!("{:x}", Sha256::digest(&content));
    hash.truncate(8);

    let derived_dir = stylesheet
        .parent()
        .expect("stylesheet path has a parent directory")
        .join("derived");
    fs::create_dir_all(&derived_dir)?;
    fs::copy(stylesheet, derived_dir.join(format!("main.{hash}.css")))?;

    Ok(hash)
}

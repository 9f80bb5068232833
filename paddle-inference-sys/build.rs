#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Name of environment variable pointing at an installed Paddle Inference C package
/// (the directory containing `paddle/include` and `paddle/lib`).
///
/// Only read when the `generate-bindings` feature is enabled: the library itself is
/// opened at runtime, so nothing is linked at build time.
const PADDLE_RUST_ENV_INSTALL_DIR: &str = "PADDLE_INFERENCE_C_DIR";

fn main() -> Result<()> {
    println!("cargo:rerun-if-env-changed={}", PADDLE_RUST_ENV_INSTALL_DIR);
    println!("cargo:rerun-if-changed=build.rs");

    generate_bindings()
}

#[cfg(not(feature = "generate-bindings"))]
fn generate_bindings() -> Result<()> {
    println!("Bindings not generated automatically, using committed files instead.");
    println!("Enable with the 'generate-bindings' cargo feature.");
    Ok(())
}

#[cfg(feature = "generate-bindings")]
fn generate_bindings() -> Result<()> {
    use anyhow::Context;
    use std::env;

    let install_dir = env::var(PADDLE_RUST_ENV_INSTALL_DIR).with_context(|| {
        format!(
            "Could not get value of environment variable {:?}",
            PADDLE_RUST_ENV_INSTALL_DIR
        )
    })?;
    let include_dir = include_dir(Path::new(&install_dir));
    let header = include_dir.join("pd_inference_api.h");

    let bindings = bindgen::Builder::default()
        .header(header.to_string_lossy().to_string())
        .clang_arg(format!("-I{}", include_dir.display()))
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .dynamic_library_name("paddle_inference_c")
        // Only the tensor and array surface is wrapped
        .allowlist_type("PD_Tensor")
        .allowlist_type("PD_OneDimArray.*")
        .allowlist_type("PD_TwoDimArraySize")
        .allowlist_type("PD_DataType")
        .allowlist_var("PD_DATA_.*")
        .allowlist_function("PD_Tensor.*")
        .allowlist_function("PD_OneDimArrayInt32Destroy")
        .allowlist_function("PD_TwoDimArraySizeDestroy")
        // Set `size_t` to be translated to `usize` for win32 compatibility.
        .size_t_is_usize(true)
        .generate()
        .context("Unable to generate bindings")?;

    // Write the bindings to (source controlled) src/generated/bindings.rs
    let generated_file = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?)
        .join("src")
        .join("generated")
        .join("bindings.rs");
    println!("cargo:rerun-if-changed={}", header.display());
    bindings
        .write_to_file(&generated_file)
        .with_context(|| format!("Couldn't write bindings to {:?}", generated_file))
}

fn include_dir(install_dir: &Path) -> PathBuf {
    install_dir.join("paddle").join("include")
}

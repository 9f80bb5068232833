use std::{env::var, ptr};

use paddle_inference::{library::PADDLE_INFERENCE_LIBRARY_PATH, Library, PaddleError, Tensor};
use test_log::test;

/// Load the library named by `PADDLE_INFERENCE_LIBRARY_PATH`, or skip when it is not set.
fn library() -> Option<Library> {
    let path = var(PADDLE_INFERENCE_LIBRARY_PATH).ok()?;
    Some(
        Library::builder()
            .with_library_path(path)
            .build()
            .expect("Could not load Paddle Inference library"),
    )
}

#[test]
fn load_missing_library() {
    let err = Library::builder()
        .with_library_path("/does/not/exist/libpaddle_inference_c.so")
        .build()
        .unwrap_err();
    assert!(matches!(err, PaddleError::Library(_)));
    assert!(err.to_string().starts_with("Failed to load Paddle Inference library"));
}

#[test]
fn loaded_library_rejects_null_tensor() {
    let Some(library) = library() else {
        return;
    };
    assert_eq!(format!("{library:?}"), "Library { loaded: true }");
    let err = unsafe { Tensor::from_raw(&library, ptr::null_mut()) }.unwrap_err();
    assert!(matches!(err, PaddleError::InvalidArgument(_)));
}

#[test]
fn shared_library_is_loaded_once() {
    if var(PADDLE_INFERENCE_LIBRARY_PATH).is_err() {
        return;
    }
    let first = Library::shared().unwrap();
    let second = Library::shared().unwrap();
    assert!(ptr::eq(first, second));
}

//! Module containing the native library and its function table

use std::{
    env,
    fmt,
    os::raw::c_char,
    path::{Path, PathBuf},
    sync::Arc,
};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{
    error::{PaddleError, PaddleResult},
    sys,
};

/// Name of environment variable read by [`Library::from_env()`](struct.Library.html#method.from_env)
pub const PADDLE_INFERENCE_LIBRARY_PATH: &str = "PADDLE_INFERENCE_LIBRARY_PATH";

static SHARED: OnceCell<Library> = OnceCell::new();

/// Table of the Paddle Inference C functions used by tensors.
///
/// Usually filled by [`Library`](struct.Library.html) from the loaded shared library. It can be
/// built by hand when the engine is linked statically, from the `extern "C"` declarations of
/// the host application.
#[derive(Debug, Clone, Copy)]
pub struct TensorApi {
    /// `PD_TensorDestroy`
    pub destroy: unsafe extern "C" fn(*mut sys::PD_Tensor),
    /// `PD_TensorReshape`
    pub reshape: unsafe extern "C" fn(*mut sys::PD_Tensor, usize, *mut i32),
    /// `PD_TensorGetShape`
    pub get_shape: unsafe extern "C" fn(*mut sys::PD_Tensor) -> *mut sys::PD_OneDimArrayInt32,
    /// `PD_OneDimArrayInt32Destroy`
    pub destroy_shape: unsafe extern "C" fn(*mut sys::PD_OneDimArrayInt32),
    /// `PD_TensorGetName`
    pub get_name: unsafe extern "C" fn(*mut sys::PD_Tensor) -> *const c_char,
    /// `PD_TensorGetDataType`
    pub get_data_type: unsafe extern "C" fn(*mut sys::PD_Tensor) -> sys::PD_DataType,
    /// `PD_TensorCopyFromCpuFloat`
    pub copy_from_cpu_float: unsafe extern "C" fn(*mut sys::PD_Tensor, *const f32),
    /// `PD_TensorCopyFromCpuInt32`
    pub copy_from_cpu_int32: unsafe extern "C" fn(*mut sys::PD_Tensor, *const i32),
    /// `PD_TensorCopyFromCpuInt64`
    pub copy_from_cpu_int64: unsafe extern "C" fn(*mut sys::PD_Tensor, *const i64),
    /// `PD_TensorCopyFromCpuUint8`
    pub copy_from_cpu_uint8: unsafe extern "C" fn(*mut sys::PD_Tensor, *const u8),
    /// `PD_TensorCopyFromCpuInt8`
    pub copy_from_cpu_int8: unsafe extern "C" fn(*mut sys::PD_Tensor, *const i8),
    /// `PD_TensorCopyToCpuFloat`
    pub copy_to_cpu_float: unsafe extern "C" fn(*mut sys::PD_Tensor, *mut f32),
    /// `PD_TensorCopyToCpuInt32`
    pub copy_to_cpu_int32: unsafe extern "C" fn(*mut sys::PD_Tensor, *mut i32),
    /// `PD_TensorCopyToCpuInt64`
    pub copy_to_cpu_int64: unsafe extern "C" fn(*mut sys::PD_Tensor, *mut i64),
    /// `PD_TensorCopyToCpuUint8`
    pub copy_to_cpu_uint8: unsafe extern "C" fn(*mut sys::PD_Tensor, *mut u8),
    /// `PD_TensorCopyToCpuInt8`
    pub copy_to_cpu_int8: unsafe extern "C" fn(*mut sys::PD_Tensor, *mut i8),
    /// `PD_TensorGetLod`
    pub get_lod: unsafe extern "C" fn(*mut sys::PD_Tensor) -> *mut sys::PD_TwoDimArraySize,
    /// `PD_TensorSetLod`
    pub set_lod: unsafe extern "C" fn(*mut sys::PD_Tensor, *mut sys::PD_TwoDimArraySize),
    /// `PD_TwoDimArraySizeDestroy`
    pub destroy_lod: unsafe extern "C" fn(*mut sys::PD_TwoDimArraySize),
}

fn symbol<T: Copy>(
    symbol: &Result<T, libloading::Error>,
    name: &'static str,
) -> PaddleResult<T> {
    symbol
        .as_ref()
        .map(|function| *function)
        .map_err(|e| PaddleError::MissingSymbol {
            name,
            message: e.to_string(),
        })
}

impl TensorApi {
    /// Collect the tensor functions of a loaded library, failing on the first missing symbol.
    pub fn from_library(lib: &sys::paddle_inference_c) -> PaddleResult<Self> {
        Ok(Self {
            destroy: symbol(&lib.PD_TensorDestroy, "PD_TensorDestroy")?,
            reshape: symbol(&lib.PD_TensorReshape, "PD_TensorReshape")?,
            get_shape: symbol(&lib.PD_TensorGetShape, "PD_TensorGetShape")?,
            destroy_shape: symbol(&lib.PD_OneDimArrayInt32Destroy, "PD_OneDimArrayInt32Destroy")?,
            get_name: symbol(&lib.PD_TensorGetName, "PD_TensorGetName")?,
            get_data_type: symbol(&lib.PD_TensorGetDataType, "PD_TensorGetDataType")?,
            copy_from_cpu_float: symbol(
                &lib.PD_TensorCopyFromCpuFloat,
                "PD_TensorCopyFromCpuFloat",
            )?,
            copy_from_cpu_int32: symbol(
                &lib.PD_TensorCopyFromCpuInt32,
                "PD_TensorCopyFromCpuInt32",
            )?,
            copy_from_cpu_int64: symbol(
                &lib.PD_TensorCopyFromCpuInt64,
                "PD_TensorCopyFromCpuInt64",
            )?,
            copy_from_cpu_uint8: symbol(
                &lib.PD_TensorCopyFromCpuUint8,
                "PD_TensorCopyFromCpuUint8",
            )?,
            copy_from_cpu_int8: symbol(&lib.PD_TensorCopyFromCpuInt8, "PD_TensorCopyFromCpuInt8")?,
            copy_to_cpu_float: symbol(&lib.PD_TensorCopyToCpuFloat, "PD_TensorCopyToCpuFloat")?,
            copy_to_cpu_int32: symbol(&lib.PD_TensorCopyToCpuInt32, "PD_TensorCopyToCpuInt32")?,
            copy_to_cpu_int64: symbol(&lib.PD_TensorCopyToCpuInt64, "PD_TensorCopyToCpuInt64")?,
            copy_to_cpu_uint8: symbol(&lib.PD_TensorCopyToCpuUint8, "PD_TensorCopyToCpuUint8")?,
            copy_to_cpu_int8: symbol(&lib.PD_TensorCopyToCpuInt8, "PD_TensorCopyToCpuInt8")?,
            get_lod: symbol(&lib.PD_TensorGetLod, "PD_TensorGetLod")?,
            set_lod: symbol(&lib.PD_TensorSetLod, "PD_TensorSetLod")?,
            destroy_lod: symbol(&lib.PD_TwoDimArraySizeDestroy, "PD_TwoDimArraySizeDestroy")?,
        })
    }
}

struct LibraryInner {
    api: TensorApi,
    // Keeps the shared object mapped for as long as `api` can be called
    _native: Option<sys::paddle_inference_c>,
}

/// A handle on the Paddle Inference C library.
///
/// Cloning is cheap: clones share the loaded library. Every [`Tensor`](../tensor/struct.Tensor.html)
/// holds a clone, so the library stays loaded until the last tensor is released.
///
/// # Example
///
/// ```no_run
/// # use std::error::Error;
/// # use paddle_inference::Library;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let path = std::env::var("PADDLE_INFERENCE_LIBRARY_PATH").ok();
///
/// let builder = Library::builder();
/// let builder = if let Some(path) = path {
///     builder.with_library_path(path)
/// } else {
///     builder
/// };
/// let library = builder.build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Library {
    inner: Arc<LibraryInner>,
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("loaded", &self.inner._native.is_some())
            .finish()
    }
}

impl Library {
    /// Create a new library builder using default values
    /// (path: the platform's file name for `paddle_inference_c`, resolved by the system loader)
    #[must_use]
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder { path: None }
    }

    /// Load the library from `PADDLE_INFERENCE_LIBRARY_PATH` if set, else from the default name.
    pub fn from_env() -> PaddleResult<Library> {
        let builder = Library::builder();
        match env::var_os(PADDLE_INFERENCE_LIBRARY_PATH) {
            Some(path) => builder.with_library_path(path).build(),
            None => builder.build(),
        }
    }

    /// Process-wide library, loaded through [`from_env()`](#method.from_env) on first use.
    ///
    /// Only the first successful load is kept; later calls return the same library.
    pub fn shared() -> PaddleResult<&'static Library> {
        SHARED.get_or_try_init(Library::from_env)
    }

    /// Wrap a function table that was not obtained from a loaded library.
    #[must_use]
    pub fn from_api(api: TensorApi) -> Library {
        Library {
            inner: Arc::new(LibraryInner { api, _native: None }),
        }
    }

    pub(crate) fn api(&self) -> &TensorApi {
        &self.inner.api
    }

    #[tracing::instrument]
    fn load(path: Option<&Path>) -> PaddleResult<Library> {
        let native = match path {
            Some(path) => unsafe { sys::paddle_inference_c::new(path)? },
            None => unsafe {
                sys::paddle_inference_c::new(sys::library_filename("paddle_inference_c"))?
            },
        };
        let api = TensorApi::from_library(&native)?;
        debug!("Paddle Inference library loaded.");

        Ok(Library {
            inner: Arc::new(LibraryInner {
                api,
                _native: Some(native),
            }),
        })
    }
}

/// Struct used to build a [`Library`](struct.Library.html).
#[derive(Debug, Clone)]
pub struct LibraryBuilder {
    path: Option<PathBuf>,
}

impl LibraryBuilder {
    /// Load the library from an explicit path instead of the system search path
    #[must_use]
    pub fn with_library_path<P: Into<PathBuf>>(mut self, path: P) -> LibraryBuilder {
        self.path = Some(path.into());
        self
    }

    /// Open the library and resolve every tensor function
    pub fn build(self) -> PaddleResult<Library> {
        Library::load(self.path.as_deref())
    }
}

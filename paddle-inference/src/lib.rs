#![warn(missing_docs)]

//! Paddle Inference tensors
//!
//! This crate is a (safe) wrapper around the tensor surface of
//! [Paddle Inference](https://github.com/PaddlePaddle/Paddle)'s C API.
//!
//! The (highly) unsafe C API is declared in [`paddle-inference-sys`](sys), which opens the
//! `paddle_inference_c` shared library at runtime. This crate wraps those declarations to
//! expose owned tensor handles: shape, name and element type accessors, bulk data copies, and
//! the nested sequence-length metadata (LoD) used for variable-length batched inputs.
//!
//! Model loading and predictors are _not_ covered: a predictor hands out raw `PD_Tensor`
//! pointers, which are then wrapped into a [`Tensor`](tensor/struct.Tensor.html).
//!
//! # Example
//!
//! First, the native library must be loaded using a [`LibraryBuilder`](library/struct.LibraryBuilder.html):
//!
//! ```no_run
//! # use std::error::Error;
//! # use paddle_inference::Library;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let library = Library::builder()
//!     .with_library_path("/opt/paddle_inference_c/paddle/lib/libpaddle_inference_c.so")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! Then an input tensor obtained from a predictor is wrapped, filled, and released when dropped:
//!
//! ```no_run
//! # use paddle_inference::{sys, Library, PaddleResult, Tensor};
//! fn fill_input(library: &Library, raw: *mut sys::PD_Tensor) -> PaddleResult<()> {
//!     // The predictor transfers ownership of `raw` to the handle
//!     let mut tensor = unsafe { Tensor::from_raw(library, raw)? };
//!
//!     tensor.reshape(&[2, 3])?;
//!     tensor.copy_from_cpu(&[1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])?;
//!     // Two sequences of one row each
//!     tensor.set_lod(&[vec![0, 1, 2]])?;
//!     Ok(())
//! }
//! # fn main() {}
//! ```

use std::{ffi::CStr, fmt::Debug, os::raw::c_char};

pub use paddle_inference_sys as sys;

pub mod error;
pub use error::{PaddleError, PaddleResult};

pub mod library;
pub use library::{Library, LibraryBuilder, TensorApi};

pub mod tensor;
pub use tensor::{Lod, Tensor};

#[cfg(test)]
mod mock;

// Re-export ndarray as it's part of the public API anyway
pub use ndarray;

/// Copy a native, nul-terminated UTF-8 string into an owned `String`.
///
/// `raw` must be non-null and point to a valid C string.
unsafe fn char_ptr_to_string(raw: *const c_char) -> PaddleResult<String> {
    CStr::from_ptr(raw)
        .to_str()
        .map(str::to_owned)
        .map_err(PaddleError::StringConversion)
}

/// Enum mapping Paddle Inference's tensor element types
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DataType {
    /// 32-bit floating point, equivalent to Rust's `f32`
    Float32,
    /// Signed 32-bit int, equivalent to Rust's `i32`
    Int32,
    /// Signed 64-bit int, equivalent to Rust's `i64`
    Int64,
    /// Unsigned 8-bit int, equivalent to Rust's `u8`
    Uint8,
    /// Signed 8-bit int, equivalent to Rust's `i8`
    Int8,
    /// 16-bit floating point
    Float16,
    /// Boolean
    Bool,
    /// Unknown, or a code this crate does not know about
    Unknown,
}

impl From<sys::PD_DataType> for DataType {
    fn from(val: sys::PD_DataType) -> Self {
        match val {
            sys::PD_DATA_FLOAT32 => DataType::Float32,
            sys::PD_DATA_INT32 => DataType::Int32,
            sys::PD_DATA_INT64 => DataType::Int64,
            sys::PD_DATA_UINT8 => DataType::Uint8,
            sys::PD_DATA_INT8 => DataType::Int8,
            sys::PD_DATA_FLOAT16 => DataType::Float16,
            sys::PD_DATA_BOOL => DataType::Bool,
            _ => DataType::Unknown,
        }
    }
}

impl From<DataType> for sys::PD_DataType {
    fn from(val: DataType) -> Self {
        match val {
            DataType::Float32 => sys::PD_DATA_FLOAT32,
            DataType::Int32 => sys::PD_DATA_INT32,
            DataType::Int64 => sys::PD_DATA_INT64,
            DataType::Uint8 => sys::PD_DATA_UINT8,
            DataType::Int8 => sys::PD_DATA_INT8,
            DataType::Float16 => sys::PD_DATA_FLOAT16,
            DataType::Bool => sys::PD_DATA_BOOL,
            DataType::Unknown => sys::PD_DATA_UNK,
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Rust types that can be copied in and out of a [`Tensor`](tensor/struct.Tensor.html).
///
/// Implemented for `f32`, `i32`, `i64`, `u8` and `i8` only: each one maps to its own pair of
/// `PD_TensorCopy{To,From}Cpu*` routines. The trait is sealed.
pub trait TensorElement: Copy + Default + Debug + private::Sealed {
    /// The Paddle type for this Rust type
    const DATA_TYPE: DataType;

    /// Copy `product(shape)` elements from the tensor into `data`.
    #[doc(hidden)]
    unsafe fn copy_to_cpu(api: &TensorApi, tensor: *mut sys::PD_Tensor, data: *mut Self);

    /// Copy `product(shape)` elements from `data` into the tensor.
    #[doc(hidden)]
    unsafe fn copy_from_cpu(api: &TensorApi, tensor: *mut sys::PD_Tensor, data: *const Self);

    #[doc(hidden)]
    fn into_tensor_data(data: Vec<Self>) -> TensorData;

    #[doc(hidden)]
    fn slice_of(data: &TensorData) -> Option<&[Self]>;
}

macro_rules! impl_tensor_element {
    ($type_:ty, $variant:ident, $to_cpu:ident, $from_cpu:ident) => {
        impl private::Sealed for $type_ {}

        impl TensorElement for $type_ {
            const DATA_TYPE: DataType = DataType::$variant;

            unsafe fn copy_to_cpu(api: &TensorApi, tensor: *mut sys::PD_Tensor, data: *mut Self) {
                (api.$to_cpu)(tensor, data)
            }

            unsafe fn copy_from_cpu(
                api: &TensorApi,
                tensor: *mut sys::PD_Tensor,
                data: *const Self,
            ) {
                (api.$from_cpu)(tensor, data)
            }

            fn into_tensor_data(data: Vec<Self>) -> TensorData {
                TensorData::$variant(data)
            }

            fn slice_of(data: &TensorData) -> Option<&[Self]> {
                match data {
                    TensorData::$variant(values) => Some(values.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

impl_tensor_element!(f32, Float32, copy_to_cpu_float, copy_from_cpu_float);
impl_tensor_element!(i32, Int32, copy_to_cpu_int32, copy_from_cpu_int32);
impl_tensor_element!(i64, Int64, copy_to_cpu_int64, copy_from_cpu_int64);
impl_tensor_element!(u8, Uint8, copy_to_cpu_uint8, copy_from_cpu_uint8);
impl_tensor_element!(i8, Int8, copy_to_cpu_int8, copy_from_cpu_int8);

/// Tensor contents of one of the transferable element types.
#[derive(Clone, Debug, PartialEq)]
pub enum TensorData {
    /// `f32` elements
    Float32(Vec<f32>),
    /// `i32` elements
    Int32(Vec<i32>),
    /// `i64` elements
    Int64(Vec<i64>),
    /// `u8` elements
    Uint8(Vec<u8>),
    /// `i8` elements
    Int8(Vec<i8>),
}

impl TensorData {
    /// Element type of the contained buffer
    pub fn data_type(&self) -> DataType {
        match self {
            TensorData::Float32(_) => DataType::Float32,
            TensorData::Int32(_) => DataType::Int32,
            TensorData::Int64(_) => DataType::Int64,
            TensorData::Uint8(_) => DataType::Uint8,
            TensorData::Int8(_) => DataType::Int8,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            TensorData::Float32(values) => values.len(),
            TensorData::Int32(values) => values.len(),
            TensorData::Int64(values) => values.len(),
            TensorData::Uint8(values) => values.len(),
            TensorData::Int8(values) => values.len(),
        }
    }

    /// Whether the buffer holds no element
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the elements if they are of type `T`.
    pub fn as_slice<T: TensorElement>(&self) -> Option<&[T]> {
        T::slice_of(self)
    }
}

impl<T: TensorElement> From<Vec<T>> for TensorData {
    fn from(data: Vec<T>) -> Self {
        T::into_tensor_data(data)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_char_p_to_string() {
        let s = std::ffi::CString::new("foo").unwrap();
        let ptr = s.as_c_str().as_ptr();
        assert_eq!("foo", unsafe { char_ptr_to_string(ptr) }.unwrap());
    }

    #[test]
    fn test_char_p_to_string_invalid_utf8() {
        let bytes = [0xff_u8, 0xfe, 0];
        let ptr = bytes.as_ptr() as *const c_char;
        let err = unsafe { char_ptr_to_string(ptr) }.unwrap_err();
        assert!(matches!(err, PaddleError::StringConversion(_)));
    }

    #[test]
    fn data_type_codes() {
        for data_type in [
            DataType::Float32,
            DataType::Int32,
            DataType::Int64,
            DataType::Uint8,
            DataType::Int8,
            DataType::Float16,
            DataType::Bool,
            DataType::Unknown,
        ] {
            let code: sys::PD_DataType = data_type.into();
            assert_eq!(DataType::from(code), data_type);
        }
        assert_eq!(DataType::from(42_i32), DataType::Unknown);
    }

    #[test]
    fn tensor_data_accessors() {
        let data = TensorData::from(vec![1_i64, 2, 3]);
        assert_eq!(data.data_type(), DataType::Int64);
        assert_eq!(data.len(), 3);
        assert_eq!(data.as_slice::<i64>(), Some(&[1_i64, 2, 3][..]));
        assert_eq!(data.as_slice::<f32>(), None);
        assert!(TensorData::Uint8(Vec::new()).is_empty());
    }
}

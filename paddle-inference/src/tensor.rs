//! Module containing the tensor handle.
//!
//! A [`Tensor`](struct.Tensor.html) owns one native `PD_Tensor`, as handed out by a predictor
//! for its inputs and outputs. Through it, the shape can be read and changed, data copied in
//! and out, and the LoD (see [`Lod`](lod/type.Lod.html)) set and read back.
//!
//! When going out of scope, the tensor frees the native resource. It can also be released
//! explicitly with [`release()`](struct.Tensor.html#method.release); later operations then fail
//! with [`PaddleError::Released`](../error/enum.PaddleError.html#variant.Released).

pub mod lod;
pub mod ndarray_tensor;
mod shape;

pub use lod::Lod;

use std::ptr;

use tracing::{debug, trace};

use crate::{
    char_ptr_to_string,
    error::{assert_not_null_pointer, PaddleError, PaddleResult},
    library::{Library, TensorApi},
    sys, DataType, TensorData, TensorElement,
};

use lod::{EncodedLod, NativeLod};
use shape::NativeShape;

/// Owning handle on a native Paddle Inference tensor.
///
/// The handle is `Send` but not `Sync`: the engine's tensors are not safe to use from several
/// threads at once, so a tensor can move to another worker but cannot be shared.
#[derive(Debug)]
pub struct Tensor {
    ptr: *mut sys::PD_Tensor,
    library: Library,
}

unsafe impl Send for Tensor {}

impl Tensor {
    /// Take ownership of a native tensor.
    ///
    /// Fails with [`PaddleError::InvalidArgument`](../error/enum.PaddleError.html#variant.InvalidArgument)
    /// if `ptr` is null, without calling into the library.
    ///
    /// # Safety
    ///
    /// `ptr` must be a live `PD_Tensor` created by `library`, and ownership is transferred: no
    /// other handle may wrap it, and the caller must not destroy it.
    pub unsafe fn from_raw(library: &Library, ptr: *mut sys::PD_Tensor) -> PaddleResult<Tensor> {
        if ptr.is_null() {
            return Err(PaddleError::InvalidArgument(
                "tensor pointer should not be null".to_owned(),
            ));
        }
        trace!("Created Tensor: {ptr:?}.");

        Ok(Tensor {
            ptr,
            library: library.clone(),
        })
    }

    fn api(&self) -> &TensorApi {
        self.library.api()
    }

    fn live_ptr(&self) -> PaddleResult<*mut sys::PD_Tensor> {
        if self.ptr.is_null() {
            Err(PaddleError::Released)
        } else {
            Ok(self.ptr)
        }
    }

    /// Whether the native tensor was already destroyed
    pub fn is_released(&self) -> bool {
        self.ptr.is_null()
    }

    /// Destroy the native tensor now. Calling it again, or dropping the handle, does nothing.
    pub fn release(&mut self) {
        if self.ptr.is_null() {
            return;
        }

        debug!("Releasing Tensor: {:?}.", self.ptr);
        unsafe { (self.api().destroy)(self.ptr) };
        self.ptr = ptr::null_mut();
    }

    /// Name of the tensor, as set by the model
    pub fn name(&self) -> PaddleResult<String> {
        let ptr = self.live_ptr()?;
        let raw = unsafe { (self.api().get_name)(ptr) };
        assert_not_null_pointer(raw, "PD_TensorGetName")?;
        unsafe { char_ptr_to_string(raw) }
    }

    /// Element type currently reported by the engine
    pub fn data_type(&self) -> PaddleResult<DataType> {
        let ptr = self.live_ptr()?;
        Ok(unsafe { (self.api().get_data_type)(ptr) }.into())
    }

    /// Dimensions of the tensor; empty for a scalar
    pub fn shape(&self) -> PaddleResult<Vec<usize>> {
        let ptr = self.live_ptr()?;
        let native = unsafe { NativeShape::new(self.api(), (self.api().get_shape)(ptr))? };
        native.dimensions()
    }

    /// Set the dimensions of the tensor.
    ///
    /// This only changes the declared shape; the element buffer is (re)sized by the next copy
    /// into the tensor.
    pub fn reshape(&mut self, shape: &[usize]) -> PaddleResult<()> {
        let ptr = self.live_ptr()?;
        let mut dims = shape::to_native(shape)?;
        trace!("Reshaping Tensor {ptr:?} to {shape:?}.");
        unsafe { (self.api().reshape)(ptr, dims.len(), dims.as_mut_ptr()) };
        Ok(())
    }

    /// Number of elements of the current shape (1 for a scalar)
    pub fn element_count(&self) -> PaddleResult<usize> {
        shape::element_count(&self.shape()?)
    }

    /// Copy the tensor's elements into a new vector.
    ///
    /// The length of the vector is the element count of the current shape. Fails with
    /// [`PaddleError::TypeMismatch`](../error/enum.PaddleError.html#variant.TypeMismatch) before
    /// copying if the engine reports an element type other than `T`'s. A tensor whose type is
    /// still unknown (nothing copied into it yet) is read as `T`.
    pub fn copy_to_cpu<T: TensorElement>(&self) -> PaddleResult<Vec<T>> {
        let ptr = self.live_ptr()?;
        let actual = self.data_type()?;
        if actual != T::DATA_TYPE && actual != DataType::Unknown {
            return Err(PaddleError::TypeMismatch {
                expected: T::DATA_TYPE,
                actual,
            });
        }
        let count = self.element_count()?;
        let mut data = vec![T::default(); count];
        unsafe { T::copy_to_cpu(self.api(), ptr, data.as_mut_ptr()) };
        Ok(data)
    }

    /// Copy the tensor's elements as `data_type`.
    ///
    /// Fails with [`PaddleError::UnsupportedType`](../error/enum.PaddleError.html#variant.UnsupportedType)
    /// for types outside `f32`, `i32`, `i64`, `u8` and `i8`, before copying anything.
    pub fn copy_to_cpu_as(&self, data_type: DataType) -> PaddleResult<TensorData> {
        match data_type {
            DataType::Float32 => self.copy_to_cpu::<f32>().map(TensorData::Float32),
            DataType::Int32 => self.copy_to_cpu::<i32>().map(TensorData::Int32),
            DataType::Int64 => self.copy_to_cpu::<i64>().map(TensorData::Int64),
            DataType::Uint8 => self.copy_to_cpu::<u8>().map(TensorData::Uint8),
            DataType::Int8 => self.copy_to_cpu::<i8>().map(TensorData::Int8),
            unsupported @ (DataType::Float16 | DataType::Bool | DataType::Unknown) => {
                Err(PaddleError::UnsupportedType(unsupported))
            }
        }
    }

    /// Copy the tensor's elements using the element type reported by the engine.
    pub fn copy_to_cpu_dyn(&self) -> PaddleResult<TensorData> {
        self.copy_to_cpu_as(self.data_type()?)
    }

    /// Copy `data` into the tensor without checking its length.
    ///
    /// # Safety
    ///
    /// The engine reads as many elements as the current shape holds: `data.len()` must be at
    /// least the tensor's element count, which should be set with
    /// [`reshape()`](#method.reshape) beforehand.
    pub unsafe fn copy_from_cpu_unchecked<T: TensorElement>(
        &mut self,
        data: &[T],
    ) -> PaddleResult<()> {
        let ptr = self.live_ptr()?;
        T::copy_from_cpu(self.api(), ptr, data.as_ptr());
        Ok(())
    }

    /// Copy `data` into the tensor; the engine adopts `T`'s element type.
    ///
    /// Fails with [`PaddleError::LengthMismatch`](../error/enum.PaddleError.html#variant.LengthMismatch)
    /// if `data` does not hold exactly as many elements as the current shape.
    pub fn copy_from_cpu<T: TensorElement>(&mut self, data: &[T]) -> PaddleResult<()> {
        let expected = self.element_count()?;
        if data.len() != expected {
            return Err(PaddleError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        unsafe { self.copy_from_cpu_unchecked(data) }
    }

    /// Copy a runtime-typed buffer into the tensor, see [`copy_from_cpu()`](#method.copy_from_cpu).
    pub fn set_data(&mut self, data: &TensorData) -> PaddleResult<()> {
        match data {
            TensorData::Float32(values) => self.copy_from_cpu(values.as_slice()),
            TensorData::Int32(values) => self.copy_from_cpu(values.as_slice()),
            TensorData::Int64(values) => self.copy_from_cpu(values.as_slice()),
            TensorData::Uint8(values) => self.copy_from_cpu(values.as_slice()),
            TensorData::Int8(values) => self.copy_from_cpu(values.as_slice()),
        }
    }

    /// Read the tensor's LoD. The native copy is released before returning.
    pub fn lod(&self) -> PaddleResult<Lod> {
        let ptr = self.live_ptr()?;
        let native = unsafe { NativeLod::new(self.api(), (self.api().get_lod)(ptr))? };
        native.to_lod()
    }

    /// Set the tensor's LoD.
    ///
    /// The engine copies the offsets during the call; the buffer built for it is freed before
    /// returning.
    pub fn set_lod(&mut self, lod: &[Vec<usize>]) -> PaddleResult<()> {
        let ptr = self.live_ptr()?;
        let mut encoded = EncodedLod::new(lod);
        trace!("Setting LoD of Tensor {ptr:?} with {} levels.", lod.len());
        unsafe { (self.api().set_lod)(ptr, encoded.as_mut_ptr()) };
        Ok(())
    }
}

impl Drop for Tensor {
    #[tracing::instrument]
    fn drop(&mut self) {
        if self.ptr.is_null() {
            trace!("Tensor already released, not dropping.");
        } else {
            debug!("Dropping Tensor.");
            self.release();
        }
    }
}

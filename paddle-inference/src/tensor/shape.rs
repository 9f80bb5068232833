//! Shape conversions between Rust (`usize`) and the C API (`int32_t`).

use std::{ptr, slice};

use tracing::{error, trace};

use crate::{
    error::{assert_not_null_pointer, PaddleError, PaddleResult},
    library::TensorApi,
    sys,
};

/// Owner of a shape returned by `PD_TensorGetShape`, destroyed with `PD_OneDimArrayInt32Destroy`.
#[derive(Debug)]
pub(crate) struct NativeShape<'a> {
    ptr: *mut sys::PD_OneDimArrayInt32,
    api: &'a TensorApi,
}

impl<'a> NativeShape<'a> {
    /// Take ownership of `ptr`, which must come from `api.get_shape`.
    pub(crate) unsafe fn new(
        api: &'a TensorApi,
        ptr: *mut sys::PD_OneDimArrayInt32,
    ) -> PaddleResult<NativeShape<'a>> {
        assert_not_null_pointer(ptr, "PD_TensorGetShape")?;
        trace!("Created native shape: {ptr:?}.");
        Ok(NativeShape { ptr, api })
    }

    pub(crate) fn dimensions(&self) -> PaddleResult<Vec<usize>> {
        let array = unsafe { &*self.ptr };
        if array.size == 0 {
            return Ok(Vec::new());
        }
        assert_not_null_pointer(array.data, "PD_TensorGetShape data")?;

        let dims = unsafe { slice::from_raw_parts(array.data as *const i32, array.size) };
        dims.iter()
            .map(|&dim| {
                usize::try_from(dim).map_err(|_| {
                    PaddleError::InvalidDimensions(format!("negative dimension {dim}"))
                })
            })
            .collect()
    }
}

impl<'a> Drop for NativeShape<'a> {
    #[tracing::instrument]
    fn drop(&mut self) {
        if self.ptr.is_null() {
            error!("Native shape pointer is null, not dropping.");
        } else {
            trace!("Dropping native shape: {:?}.", self.ptr);
            unsafe { (self.api.destroy_shape)(self.ptr) };
        }

        self.ptr = ptr::null_mut();
    }
}

/// Number of elements held by a tensor of this shape; a rank 0 tensor holds one.
pub(crate) fn element_count(shape: &[usize]) -> PaddleResult<usize> {
    shape
        .iter()
        .try_fold(1_usize, |count, &dim| count.checked_mul(dim))
        .ok_or_else(|| {
            PaddleError::InvalidDimensions(format!("element count of {shape:?} overflows"))
        })
}

pub(crate) fn to_native(shape: &[usize]) -> PaddleResult<Vec<i32>> {
    shape
        .iter()
        .map(|&dim| {
            i32::try_from(dim).map_err(|_| {
                PaddleError::InvalidDimensions(format!("dimension {dim} does not fit in an int32"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use test_log::test;

    #[test]
    fn element_count_of_scalar_is_one() {
        assert_eq!(element_count(&[]).unwrap(), 1);
        assert_eq!(element_count(&[2, 3]).unwrap(), 6);
        assert_eq!(element_count(&[4, 0, 7]).unwrap(), 0);
    }

    #[test]
    fn element_count_overflow() {
        let err = element_count(&[usize::MAX, 2]).unwrap_err();
        assert!(matches!(err, PaddleError::InvalidDimensions(_)));
    }

    #[test]
    fn to_native_rejects_large_dimensions() {
        assert_eq!(to_native(&[1, 3, 224, 224]).unwrap(), vec![1, 3, 224, 224]);
        let err = to_native(&[i32::MAX as usize + 1]).unwrap_err();
        assert!(matches!(err, PaddleError::InvalidDimensions(_)));
    }

    #[test]
    fn native_shape_is_destroyed_once() {
        let api = mock::api();
        let raw = mock::native_shape(&[2, 3]);
        {
            let shape = unsafe { NativeShape::new(&api, raw) }.unwrap();
            assert_eq!(shape.dimensions().unwrap(), vec![2, 3]);
        }
        assert_eq!(mock::calls("destroy_shape"), 1);
    }

    #[test]
    fn native_shape_negative_dimension() {
        let api = mock::api();
        let raw = mock::native_shape(&[-1, 3]);
        let shape = unsafe { NativeShape::new(&api, raw) }.unwrap();
        let err = shape.dimensions().unwrap_err();
        assert!(matches!(err, PaddleError::InvalidDimensions(_)));
        drop(shape);
        // Released on the error path too
        assert_eq!(mock::calls("destroy_shape"), 1);
    }
}

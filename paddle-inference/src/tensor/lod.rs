//! Level-of-detail (LoD) codec.
//!
//! A LoD is a two-level jagged array of offsets: for each level, the boundaries of the
//! variable-length sequences packed into the tensor's first dimension. The C API exchanges it
//! as:
//!
//! ```text
//! PD_TwoDimArraySize { size, data: *mut *mut PD_OneDimArraySize }
//! PD_OneDimArraySize { size, data: *mut size_t }
//! ```
//!
//! Raw pointer reads and writes of that layout happen in this module only.

use std::{ptr, slice};

use tracing::{error, trace};

use crate::{
    error::{assert_not_null_pointer, PaddleError, PaddleResult},
    library::TensorApi,
    sys,
};

/// Nested sequence-length metadata: one offset vector per level.
pub type Lod = Vec<Vec<usize>>;

/// Read a native LoD into an owned value.
///
/// A null level pointer decodes as an empty level, as does a level of size zero.
///
/// # Safety
///
/// `raw` must point to a valid `PD_TwoDimArraySize` whose pointers are either null or valid
/// for the counts they are paired with.
pub(crate) unsafe fn decode(raw: *const sys::PD_TwoDimArraySize) -> PaddleResult<Lod> {
    let header = &*raw;
    if header.size == 0 {
        return Ok(Vec::new());
    }
    if header.data.is_null() {
        return Err(PaddleError::NativeCallFailure(format!(
            "LoD declares {} levels without a level table",
            header.size
        )));
    }

    let levels = slice::from_raw_parts(header.data, header.size);
    levels.iter().map(|&level| decode_level(level)).collect()
}

unsafe fn decode_level(level: *const sys::PD_OneDimArraySize) -> PaddleResult<Vec<usize>> {
    if level.is_null() {
        return Ok(Vec::new());
    }
    let level = &*level;
    if level.size == 0 {
        return Ok(Vec::new());
    }
    if level.data.is_null() {
        return Err(PaddleError::NativeCallFailure(format!(
            "LoD level declares {} offsets without data",
            level.size
        )));
    }

    Ok(slice::from_raw_parts(level.data as *const usize, level.size).to_vec())
}

/// A LoD laid out in Rust-owned memory the way `PD_TensorSetLod` reads it.
///
/// All offsets live in one flat buffer; each level header points at its slice of it, and the
/// level table points at the headers. Empty levels get a header with a null data pointer.
/// Everything is freed when the value is dropped, so it must outlive the native call only.
pub(crate) struct EncodedLod {
    _offsets: Vec<usize>,
    _levels: Vec<sys::PD_OneDimArraySize>,
    _table: Vec<*mut sys::PD_OneDimArraySize>,
    header: sys::PD_TwoDimArraySize,
}

impl EncodedLod {
    pub(crate) fn new(lod: &[Vec<usize>]) -> EncodedLod {
        let mut offsets: Vec<usize> = Vec::with_capacity(lod.iter().map(Vec::len).sum());
        for level in lod {
            offsets.extend_from_slice(level);
        }

        // `offsets` is not resized below, so pointers into it stay valid
        let base = offsets.as_mut_ptr();
        let mut start = 0;
        let mut levels: Vec<sys::PD_OneDimArraySize> = Vec::with_capacity(lod.len());
        for level in lod {
            let data = if level.is_empty() {
                ptr::null_mut()
            } else {
                unsafe { base.add(start) }
            };
            levels.push(sys::PD_OneDimArraySize {
                size: level.len(),
                data,
            });
            start += level.len();
        }

        let mut table: Vec<*mut sys::PD_OneDimArraySize> =
            levels.iter_mut().map(|level| level as *mut _).collect();
        let header = sys::PD_TwoDimArraySize {
            size: lod.len(),
            data: table.as_mut_ptr(),
        };

        EncodedLod {
            _offsets: offsets,
            _levels: levels,
            _table: table,
            header,
        }
    }

    /// Pointer to hand to `PD_TensorSetLod`, valid while `self` is neither moved nor dropped.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut sys::PD_TwoDimArraySize {
        &mut self.header
    }
}

/// Owner of a LoD returned by `PD_TensorGetLod`, destroyed with `PD_TwoDimArraySizeDestroy`.
#[derive(Debug)]
pub(crate) struct NativeLod<'a> {
    ptr: *mut sys::PD_TwoDimArraySize,
    api: &'a TensorApi,
}

impl<'a> NativeLod<'a> {
    /// Take ownership of `ptr`, which must come from `api.get_lod`.
    pub(crate) unsafe fn new(
        api: &'a TensorApi,
        ptr: *mut sys::PD_TwoDimArraySize,
    ) -> PaddleResult<NativeLod<'a>> {
        assert_not_null_pointer(ptr, "PD_TensorGetLod")?;
        trace!("Created native LoD: {ptr:?}.");
        Ok(NativeLod { ptr, api })
    }

    pub(crate) fn to_lod(&self) -> PaddleResult<Lod> {
        unsafe { decode(self.ptr) }
    }
}

impl<'a> Drop for NativeLod<'a> {
    #[tracing::instrument]
    fn drop(&mut self) {
        if self.ptr.is_null() {
            error!("Native LoD pointer is null, not dropping.");
        } else {
            trace!("Dropping native LoD: {:?}.", self.ptr);
            unsafe { (self.api.destroy_lod)(self.ptr) };
        }

        self.ptr = ptr::null_mut();
    }
}

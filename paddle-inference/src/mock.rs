//! In-memory stand-in for the Paddle Inference tensor functions, used by unit tests.
//!
//! It follows the engine's observable behaviour: reshape only changes the declared shape, a
//! copy from the CPU sets the element type, shape and LoD results are heap copies released by
//! their destroy functions. Calls are counted per thread, so each test sees only its own.

use std::{cell::RefCell, collections::HashMap, ffi::CString, mem, os::raw::c_char, ptr, slice};

use crate::{library::TensorApi, sys};

thread_local! {
    static CALLS: RefCell<HashMap<&'static str, usize>> = RefCell::new(HashMap::new());
}

fn record(name: &'static str) {
    CALLS.with(|calls| *calls.borrow_mut().entry(name).or_insert(0) += 1);
}

/// Number of calls to the `TensorApi` field `name` on this thread
pub(crate) fn calls(name: &str) -> usize {
    CALLS.with(|calls| calls.borrow().get(name).copied().unwrap_or(0))
}

pub(crate) fn total_calls() -> usize {
    CALLS.with(|calls| calls.borrow().values().sum())
}

/// Number of data copies, in both directions
pub(crate) fn copies() -> usize {
    CALLS.with(|calls| {
        calls
            .borrow()
            .iter()
            .filter(|(name, _)| name.starts_with("copy_"))
            .map(|(_, count)| count)
            .sum()
    })
}

struct FakeTensor {
    name: CString,
    data_type: sys::PD_DataType,
    shape: Vec<i32>,
    data: Vec<u8>,
    lod: Vec<Vec<usize>>,
}

impl FakeTensor {
    fn element_count(&self) -> usize {
        self.shape.iter().map(|&dim| dim as usize).product()
    }
}

unsafe fn fake<'a>(tensor: *mut sys::PD_Tensor) -> &'a mut FakeTensor {
    &mut *(tensor as *mut FakeTensor)
}

/// A native tensor with no shape, no data and an unknown element type
pub(crate) fn new_tensor(name: &str) -> *mut sys::PD_Tensor {
    let tensor = Box::new(FakeTensor {
        name: CString::new(name).unwrap(),
        data_type: sys::PD_DATA_UNK,
        shape: Vec::new(),
        data: Vec::new(),
        lod: Vec::new(),
    });
    Box::into_raw(tensor) as *mut sys::PD_Tensor
}

/// A shape array as `PD_TensorGetShape` allocates it
pub(crate) fn native_shape(dims: &[i32]) -> *mut sys::PD_OneDimArrayInt32 {
    let data = Box::into_raw(dims.to_vec().into_boxed_slice()) as *mut i32;
    Box::into_raw(Box::new(sys::PD_OneDimArrayInt32 {
        size: dims.len(),
        data,
    }))
}

/// A LoD as `PD_TensorGetLod` allocates it; empty levels are null pointers
pub(crate) fn native_lod(lod: &[Vec<usize>]) -> *mut sys::PD_TwoDimArraySize {
    let table: Box<[*mut sys::PD_OneDimArraySize]> = lod
        .iter()
        .map(|level| {
            if level.is_empty() {
                ptr::null_mut()
            } else {
                let data = Box::into_raw(level.clone().into_boxed_slice()) as *mut usize;
                Box::into_raw(Box::new(sys::PD_OneDimArraySize {
                    size: level.len(),
                    data,
                }))
            }
        })
        .collect();
    Box::into_raw(Box::new(sys::PD_TwoDimArraySize {
        size: lod.len(),
        data: Box::into_raw(table) as *mut *mut sys::PD_OneDimArraySize,
    }))
}

unsafe extern "C" fn destroy(tensor: *mut sys::PD_Tensor) {
    record("destroy");
    drop(Box::from_raw(tensor as *mut FakeTensor));
}

unsafe extern "C" fn reshape(tensor: *mut sys::PD_Tensor, size: usize, shape: *mut i32) {
    record("reshape");
    let dims = if size == 0 {
        Vec::new()
    } else {
        slice::from_raw_parts(shape, size).to_vec()
    };
    fake(tensor).shape = dims;
}

unsafe extern "C" fn get_shape(tensor: *mut sys::PD_Tensor) -> *mut sys::PD_OneDimArrayInt32 {
    record("get_shape");
    native_shape(&fake(tensor).shape)
}

unsafe extern "C" fn destroy_shape(array: *mut sys::PD_OneDimArrayInt32) {
    record("destroy_shape");
    let array = Box::from_raw(array);
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(array.data, array.size)));
}

unsafe extern "C" fn get_name(tensor: *mut sys::PD_Tensor) -> *const c_char {
    record("get_name");
    fake(tensor).name.as_ptr()
}

unsafe extern "C" fn get_data_type(tensor: *mut sys::PD_Tensor) -> sys::PD_DataType {
    record("get_data_type");
    fake(tensor).data_type
}

unsafe extern "C" fn get_lod(tensor: *mut sys::PD_Tensor) -> *mut sys::PD_TwoDimArraySize {
    record("get_lod");
    native_lod(&fake(tensor).lod)
}

unsafe extern "C" fn set_lod(tensor: *mut sys::PD_Tensor, lod: *mut sys::PD_TwoDimArraySize) {
    record("set_lod");
    // The engine copies the offsets out before returning
    let header = &*lod;
    let levels = if header.size == 0 {
        &[][..]
    } else {
        slice::from_raw_parts(header.data, header.size)
    };
    fake(tensor).lod = levels
        .iter()
        .map(|&level| {
            let level = &*level;
            if level.size == 0 {
                Vec::new()
            } else {
                slice::from_raw_parts(level.data, level.size).to_vec()
            }
        })
        .collect();
}

unsafe extern "C" fn destroy_lod(lod: *mut sys::PD_TwoDimArraySize) {
    record("destroy_lod");
    let header = Box::from_raw(lod);
    let table = Box::from_raw(ptr::slice_from_raw_parts_mut(header.data, header.size));
    for &level in table.iter() {
        if !level.is_null() {
            let level = Box::from_raw(level);
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(level.data, level.size)));
        }
    }
}

pub(crate) unsafe extern "C" fn null_shape(
    _: *mut sys::PD_Tensor,
) -> *mut sys::PD_OneDimArrayInt32 {
    record("get_shape");
    ptr::null_mut()
}

pub(crate) unsafe extern "C" fn null_lod(_: *mut sys::PD_Tensor) -> *mut sys::PD_TwoDimArraySize {
    record("get_lod");
    ptr::null_mut()
}

macro_rules! fake_copy {
    ($to_cpu:ident, $from_cpu:ident, $type_:ty, $code:expr) => {
        unsafe extern "C" fn $from_cpu(tensor: *mut sys::PD_Tensor, data: *const $type_) {
            record(stringify!($from_cpu));
            let fake = fake(tensor);
            let len = fake.element_count() * mem::size_of::<$type_>();
            fake.data = slice::from_raw_parts(data as *const u8, len).to_vec();
            fake.data_type = $code;
        }

        unsafe extern "C" fn $to_cpu(tensor: *mut sys::PD_Tensor, data: *mut $type_) {
            record(stringify!($to_cpu));
            let fake = fake(tensor);
            let len = (fake.element_count() * mem::size_of::<$type_>()).min(fake.data.len());
            ptr::copy_nonoverlapping(fake.data.as_ptr(), data as *mut u8, len);
        }
    };
}

fake_copy!(copy_to_cpu_float, copy_from_cpu_float, f32, sys::PD_DATA_FLOAT32);
fake_copy!(copy_to_cpu_int32, copy_from_cpu_int32, i32, sys::PD_DATA_INT32);
fake_copy!(copy_to_cpu_int64, copy_from_cpu_int64, i64, sys::PD_DATA_INT64);
fake_copy!(copy_to_cpu_uint8, copy_from_cpu_uint8, u8, sys::PD_DATA_UINT8);
fake_copy!(copy_to_cpu_int8, copy_from_cpu_int8, i8, sys::PD_DATA_INT8);

pub(crate) fn api() -> TensorApi {
    TensorApi {
        destroy,
        reshape,
        get_shape,
        destroy_shape,
        get_name,
        get_data_type,
        copy_from_cpu_float,
        copy_from_cpu_int32,
        copy_from_cpu_int64,
        copy_from_cpu_uint8,
        copy_from_cpu_int8,
        copy_to_cpu_float,
        copy_to_cpu_int32,
        copy_to_cpu_int64,
        copy_to_cpu_uint8,
        copy_to_cpu_int8,
        get_lod,
        set_lod,
        destroy_lod,
    }
}

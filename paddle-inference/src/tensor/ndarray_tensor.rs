//! Module bridging [`Tensor`](../struct.Tensor.html) and [`ndarray::ArrayBase`](https://docs.rs/ndarray/latest/ndarray/struct.ArrayBase.html)

use ndarray::{ArrayBase, ArrayD, IxDyn};

use crate::{
    error::{PaddleError, PaddleResult},
    tensor::Tensor,
    TensorElement,
};

impl Tensor {
    /// Copy the tensor into an owned, dynamically-dimensioned array of its current shape.
    pub fn to_array<T: TensorElement>(&self) -> PaddleResult<ArrayD<T>> {
        let shape = self.shape()?;
        let data = self.copy_to_cpu::<T>()?;
        ArrayD::from_shape_vec(IxDyn(&shape), data)
            .map_err(|e| PaddleError::InvalidDimensions(e.to_string()))
    }

    /// Reshape the tensor to `array`'s shape and copy its elements in logical (row-major) order.
    ///
    /// Arrays in standard layout are copied straight from their buffer; other layouts (for
    /// example transposed views) are gathered first.
    pub fn copy_from_array<T, S, D>(&mut self, array: &ArrayBase<S, D>) -> PaddleResult<()>
    where
        T: TensorElement,
        S: ndarray::Data<Elem = T>,
        D: ndarray::Dimension,
    {
        self.reshape(array.shape())?;
        match array.as_slice() {
            Some(values) => self.copy_from_cpu(values),
            None => {
                let values: Vec<T> = array.iter().copied().collect();
                self.copy_from_cpu(&values)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{mock, Library, Tensor};
    use ndarray::{arr0, arr2, arr3, Array2};
    use test_log::test;

    fn new_tensor() -> Tensor {
        let library = Library::from_api(mock::api());
        unsafe { Tensor::from_raw(&library, mock::new_tensor("image")) }.unwrap()
    }

    #[test]
    fn array_round_trip_2d() {
        let mut tensor = new_tensor();
        let array = arr2(&[[1_i32, 2, 3], [4, 5, 6]]);
        tensor.copy_from_array(&array).unwrap();
        assert_eq!(tensor.shape().unwrap(), vec![2, 3]);

        let back = tensor.to_array::<i32>().unwrap();
        assert_eq!(back, array.into_dyn());
    }

    #[test]
    fn array_round_trip_3d() {
        let mut tensor = new_tensor();
        let array = arr3(&[[[0.5_f32, 1.5], [2.5, 3.5]], [[4.5, 5.5], [6.5, 7.5]]]);
        tensor.copy_from_array(&array).unwrap();
        assert_eq!(tensor.to_array::<f32>().unwrap(), array.into_dyn());
    }

    #[test]
    fn array_0d() {
        let mut tensor = new_tensor();
        tensor.copy_from_array(&arr0(7_u8)).unwrap();
        assert_eq!(tensor.shape().unwrap(), Vec::<usize>::new());
        let back = tensor.to_array::<u8>().unwrap();
        assert_eq!(back.ndim(), 0);
        assert_eq!(back.into_raw_vec(), vec![7]);
    }

    #[test]
    fn transposed_view_is_copied_in_logical_order() {
        let mut tensor = new_tensor();
        let array: Array2<i64> = arr2(&[[1, 2, 3], [4, 5, 6]]);
        let transposed = array.t();
        assert!(transposed.as_slice().is_none());

        tensor.copy_from_array(&transposed).unwrap();
        assert_eq!(tensor.shape().unwrap(), vec![3, 2]);
        assert_eq!(tensor.copy_to_cpu::<i64>().unwrap(), vec![1, 4, 2, 5, 3, 6]);
    }
}

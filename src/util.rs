#[macro_export]
macro_rules! ok_or_continue {
    ( $e:expr ) => {
        match $e {
            Ok(value) => value,
            Err(_e) => {
                continue;
            }
        }
    };
}

/// Fixed-size row-major table, indexed from 0 in both dimensions.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Array2d<T: Default + Copy> {
    width: usize,
    height: usize,
    vec: Vec<T>,
}

impl<T: Default + Copy> Array2d<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            vec: vec![T::default(); width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        assert!(x < self.width);
        assert!(y < self.height);

        self.vec[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        assert!(x < self.width);
        assert!(y < self.height);

        self.vec[y * self.width + x] = value;
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_row_major() {
        let mut table = Array2d::<i32>::new(3, 2);
        table.set(2, 1, 7);
        assert_eq!(table.get(2, 1), 7);
        assert_eq!(table.get(1, 1), 0);
        assert_eq!((table.width(), table.height()), (3, 2));
    }

    #[test]
    #[should_panic]
    fn rejects_out_of_bounds() {
        Array2d::<u8>::new(2, 2).get(2, 0);
    }
}

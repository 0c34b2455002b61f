//! Grid element trait and implementations for supported sample types

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a grid cell
pub trait GridElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Check if this value represents no-data
    fn is_nodata(&self, nodata: Option<Self>) -> bool;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_grid_element_int {
    ($($t:ty),*) => {
        $(
            impl GridElement for $t {
                fn is_nodata(&self, nodata: Option<Self>) -> bool {
                    match nodata {
                        Some(nd) => *self == nd,
                        None => false,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_grid_element_float {
    ($($t:ty),*) => {
        $(
            impl GridElement for $t {
                fn is_nodata(&self, nodata: Option<Self>) -> bool {
                    if self.is_nan() {
                        return true;
                    }
                    match nodata {
                        Some(nd) => {
                            if nd.is_nan() {
                                false
                            } else {
                                (*self - nd).abs() < <$t>::EPSILON * 100.0
                            }
                        }
                        None => false,
                    }
                }
            }
        )*
    };
}

impl_grid_element_int!(u8, u16);
impl_grid_element_float!(f32, f64);

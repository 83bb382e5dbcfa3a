//! Collection types used throughout hval.

mod non_empty_vec;
#[doc(inline)]
pub use non_empty_vec::{NonEmptyVec, NonEmptyVecEmptyError, NonEmptyVecIter};

#[doc(inline)]
pub use crate::__non_empty_vec as non_empty_vec;

mod interner;
#[doc(inline)]
pub use interner::Interner;

#[doc(hidden)]
pub mod __macro_support {
    pub use std::vec;
}

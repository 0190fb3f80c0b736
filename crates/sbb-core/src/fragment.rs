//! The input protocol for builder operations
//!
//! Anything that can be appended implements [`Fragment`]. Present values
//! write their textual form; absent values (`None`) write nothing and are
//! skipped by every append and wrapper operation.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be pushed onto a [`Builder`](crate::Builder)
pub trait Fragment {
    /// Write the textual form of this value into `out`.
    ///
    /// Returns `None` when the value is absent, otherwise the result of
    /// formatting it. On `Some(Err(_))` the contents of `out` are unspecified.
    fn write_to(&self, out: &mut String) -> Option<fmt::Result>;
}

impl Fragment for str {
    #[inline]
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        out.push_str(self);
        Some(Ok(()))
    }
}

impl Fragment for String {
    #[inline]
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        self.as_str().write_to(out)
    }
}

impl Fragment for Cow<'_, str> {
    #[inline]
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        (**self).write_to(out)
    }
}

impl Fragment for char {
    #[inline]
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        out.push(*self);
        Some(Ok(()))
    }
}

macro_rules! display_fragment {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Fragment for $ty {
                #[inline]
                fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
                    Some(write!(out, "{}", self))
                }
            }
        )*
    };
}

display_fragment!(
    bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    fmt::Arguments<'_>,
);

macro_rules! forward_fragment {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: Fragment + ?Sized> Fragment for $wrapper<T> {
                #[inline]
                fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
                    (**self).write_to(out)
                }
            }
        )*
    };
}

forward_fragment!(Box, Rc, Arc);

impl<T: Fragment + ?Sized> Fragment for &T {
    #[inline]
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        (**self).write_to(out)
    }
}

impl<T: Fragment + ?Sized> Fragment for &mut T {
    #[inline]
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        (**self).write_to(out)
    }
}

/// `None` is the absent value
impl<T: Fragment> Fragment for Option<T> {
    #[inline]
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        self.as_ref()?.write_to(out)
    }
}

/// Adapter that lets any [`Display`](fmt::Display) type be appended
///
/// ```
/// use sbb_core::{sbb, shown};
/// use std::net::Ipv4Addr;
///
/// let text = sbb("host").space().angle_bracket(shown(Ipv4Addr::LOCALHOST)).build();
/// assert_eq!(text, "host <127.0.0.1>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> Fragment for Shown<T> {
    #[inline]
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        Some(write!(out, "{}", self.0))
    }
}

/// Wrap a [`Display`](fmt::Display) value so it can be appended
pub fn shown<T: fmt::Display>(value: T) -> Shown<T> {
    Shown(value)
}

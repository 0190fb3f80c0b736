//! SBB Core - fluent string concatenation
//!
//! A [`Builder`] accumulates text fragments through chained calls and joins
//! them on [`Builder::build`], which also clears the builder for reuse.
//!
//! # Main Components
//!
//! - **Builder**: the fragment buffer with append, wrapper and build operations
//! - **Fragment**: the input protocol; `None` is the absent value and is skipped
//! - **Enclosure**: the delimiter pairs used by the wrapper operations
//! - **Error Handling**: error types for the fallible `try_*` operations
//!
//! # Example
//!
//! ```
//! use sbb_core::sbb;
//!
//! let text = sbb("Hello").space().append("World").comma().space().dq("quoted").build();
//! assert_eq!(text, "Hello World, \"quoted\"");
//! ```

pub mod builder;
pub mod enclosure;
pub mod error;
pub mod fragment;

// Re-export main types for convenience
pub use builder::Builder;
pub use enclosure::Enclosure;
pub use error::{Error, Result};
pub use fragment::{shown, Fragment, Shown};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create a new builder, seeded with `seed` unless it is absent
///
/// Pass `None::<&str>` or use [`Builder::new`] for an empty builder.
pub fn sbb<V: Fragment>(seed: V) -> Builder {
    Builder::create(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_factory_function() {
        assert_eq!(sbb("test").build(), "test");
        assert_eq!(sbb(None::<&str>).build(), "");
    }
}

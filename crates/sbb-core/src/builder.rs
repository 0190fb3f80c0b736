//! The fluent fragment builder
//!
//! A [`Builder`] owns an ordered list of text fragments. Every mutating
//! operation pushes to the end of that list and returns `&mut Self` so calls
//! can be chained; [`Builder::build`] concatenates the list and clears it.

use crate::enclosure::Enclosure;
use crate::error::{Error, Result};
use crate::fragment::Fragment;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Longest preview shown by the `Debug` representation, in characters
const PREVIEW_LIMIT: usize = 50;

type Rendered = std::result::Result<String, fmt::Error>;

/// Fluent string builder
///
/// ```
/// use sbb_core::Builder;
///
/// let mut builder = Builder::new();
/// builder.append("name").space().double_quote("value");
/// assert_eq!(builder.build(), "name \"value\"");
/// assert_eq!(builder.build(), "");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Builder {
    fragments: Vec<String>,
}

impl Builder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with one fragment, unless `seed` is absent
    pub fn create<V: Fragment>(seed: V) -> Self {
        let mut builder = Self::new();
        builder.append(seed);
        builder
    }

    // ==================== Append ====================

    /// Push the text of `value`; absent values are skipped
    ///
    /// # Panics
    ///
    /// Panics if the value's `Display` implementation returns an error, the
    /// same way [`ToString::to_string`] does. Use [`Builder::try_append`] to
    /// get the error back instead.
    pub fn append<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.push_rendered(render(&value, None))
    }

    /// Alias for [`Builder::append`]
    pub fn add<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.append(value)
    }

    /// Alias for [`Builder::append`]
    pub fn join<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.append(value)
    }

    /// Fallible [`Builder::append`]; the builder is unchanged on error
    pub fn try_append<V: Fragment>(&mut self, value: V) -> Result<&mut Self> {
        self.try_push(render(&value, None))
    }

    // ==================== Whitespace & punctuation ====================

    pub fn newline(&mut self) -> &mut Self {
        self.push_static("\n")
    }

    pub fn tab(&mut self) -> &mut Self {
        self.push_static("\t")
    }

    pub fn space(&mut self) -> &mut Self {
        self.push_static(" ")
    }

    pub fn comma(&mut self) -> &mut Self {
        self.push_static(",")
    }

    pub fn dot(&mut self) -> &mut Self {
        self.push_static(".")
    }

    /// Alias for [`Builder::newline`]
    pub fn n(&mut self) -> &mut Self {
        self.newline()
    }

    /// Alias for [`Builder::tab`]
    pub fn t(&mut self) -> &mut Self {
        self.tab()
    }

    /// Alias for [`Builder::space`]
    pub fn w(&mut self) -> &mut Self {
        self.space()
    }

    /// Alias for [`Builder::comma`]
    pub fn coma(&mut self) -> &mut Self {
        self.comma()
    }

    // ==================== Wrappers ====================

    /// Push `value` surrounded by the delimiters of `enclosure` as one
    /// fragment. Absent values push nothing. The text is not escaped.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Builder::append`].
    pub fn wrap<V: Fragment>(&mut self, enclosure: Enclosure, value: V) -> &mut Self {
        self.push_rendered(render(&value, Some(enclosure)))
    }

    /// Fallible [`Builder::wrap`]; the builder is unchanged on error
    pub fn try_wrap<V: Fragment>(&mut self, enclosure: Enclosure, value: V) -> Result<&mut Self> {
        self.try_push(render(&value, Some(enclosure)))
    }

    pub fn single_quote<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.wrap(Enclosure::SingleQuote, value)
    }

    /// Alias for [`Builder::single_quote`]
    pub fn s_quote<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.single_quote(value)
    }

    /// Alias for [`Builder::single_quote`]
    pub fn sq<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.single_quote(value)
    }

    pub fn double_quote<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.wrap(Enclosure::DoubleQuote, value)
    }

    /// Alias for [`Builder::double_quote`]
    pub fn d_quote<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.double_quote(value)
    }

    /// Alias for [`Builder::double_quote`]
    pub fn dq<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.double_quote(value)
    }

    pub fn square_bracket<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.wrap(Enclosure::SquareBracket, value)
    }

    /// Alias for [`Builder::square_bracket`]
    pub fn square_brackets<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.square_bracket(value)
    }

    /// Alias for [`Builder::square_bracket`]
    pub fn sb<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.square_bracket(value)
    }

    pub fn curly_bracket<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.wrap(Enclosure::CurlyBracket, value)
    }

    /// Alias for [`Builder::curly_bracket`]
    pub fn curly_brackets<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.curly_bracket(value)
    }

    /// Alias for [`Builder::curly_bracket`]
    pub fn cb<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.curly_bracket(value)
    }

    pub fn parenthesis<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.wrap(Enclosure::Parenthesis, value)
    }

    /// Alias for [`Builder::parenthesis`]
    pub fn parentheses<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.parenthesis(value)
    }

    /// Alias for [`Builder::parenthesis`]
    pub fn p<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.parenthesis(value)
    }

    pub fn angle_bracket<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.wrap(Enclosure::AngleBracket, value)
    }

    /// Alias for [`Builder::angle_bracket`]
    pub fn angle_brackets<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.angle_bracket(value)
    }

    /// Alias for [`Builder::angle_bracket`]
    pub fn ab<V: Fragment>(&mut self, value: V) -> &mut Self {
        self.angle_bracket(value)
    }

    // ==================== Build ====================

    /// Concatenate all fragments in insertion order and clear the builder.
    ///
    /// Calling this twice in a row returns the text and then `""`.
    pub fn build(&mut self) -> String {
        let fragments = std::mem::take(&mut self.fragments);
        let text = fragments.concat();
        trace!(fragments = fragments.len(), bytes = text.len(), "built text");
        text
    }

    /// Alias for [`Builder::build`]
    pub fn bld(&mut self) -> String {
        self.build()
    }

    /// Textual conversion. Builds, so the builder is cleared as well.
    pub fn to_text(&mut self) -> String {
        self.build()
    }

    // ==================== Inspection ====================

    /// Fragments accumulated since the last build
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of fragments, not characters
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Current concatenation, without clearing
    pub fn preview(&self) -> String {
        self.fragments.concat()
    }

    fn push_static(&mut self, text: &'static str) -> &mut Self {
        self.fragments.push(text.to_owned());
        self
    }

    fn push_rendered(&mut self, rendered: Option<Rendered>) -> &mut Self {
        match rendered {
            Some(Ok(text)) => self.fragments.push(text),
            Some(Err(_)) => panic!("a Display implementation returned an error unexpectedly"),
            None => {}
        }
        self
    }

    fn try_push(&mut self, rendered: Option<Rendered>) -> Result<&mut Self> {
        match rendered {
            Some(Ok(text)) => self.fragments.push(text),
            Some(Err(source)) => {
                debug!(fragments = self.fragments.len(), "fragment formatting failed");
                return Err(Error::format(
                    "a Display implementation returned an error",
                    source,
                ));
            }
            None => {}
        }
        Ok(self)
    }
}

/// Render `value`, optionally wrapped. `None` means the value is absent.
fn render<V: Fragment>(value: &V, enclosure: Option<Enclosure>) -> Option<Rendered> {
    let mut text = String::new();
    if let Some(enclosure) = enclosure {
        text.push(enclosure.open());
    }

    let written = value.write_to(&mut text)?;
    Some(written.map(|()| {
        if let Some(enclosure) = enclosure {
            text.push(enclosure.close());
        }
        text
    }))
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = self.preview();
        if preview.chars().count() > PREVIEW_LIMIT {
            let mut head: String = preview.chars().take(PREVIEW_LIMIT - 3).collect();
            head.push_str("...");
            write!(f, "SBB({:?})", head)
        } else {
            write!(f, "SBB({:?})", preview)
        }
    }
}

/// Each written slice becomes its own fragment
impl fmt::Write for Builder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.fragments.push(s.to_owned());
        Ok(())
    }
}

impl<V: Fragment> Extend<V> for Builder {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<V: Fragment> FromIterator<V> for Builder {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

impl From<Builder> for String {
    fn from(mut builder: Builder) -> Self {
        builder.build()
    }
}

impl From<&mut Builder> for String {
    fn from(builder: &mut Builder) -> Self {
        builder.build()
    }
}

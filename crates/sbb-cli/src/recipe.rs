//! Recipes: serializable builder sessions
//!
//! A recipe is an optional seed plus an ordered list of steps. Replaying it
//! onto a [`Builder`] gives the same result as the equivalent chain of
//! method calls.

use crate::config;
use crate::error::{Error, Result};
use sbb_core::{Builder, Enclosure, Fragment};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::path::Path;

/// One builder session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    /// Initial fragment
    pub seed: Option<Value>,

    /// Steps, replayed in order
    pub steps: Vec<Step>,
}

/// A scalar recipe value, appended through its usual text form
///
/// `42` appends `42`, `true` appends `true`, `2.5` appends `2.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Fragment for Value {
    fn write_to(&self, out: &mut String) -> Option<fmt::Result> {
        Some(write!(out, "{}", self))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

/// A single builder operation
///
/// A missing `value` is the absent value and replays as a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    #[serde(alias = "add", alias = "join")]
    Append {
        #[serde(default)]
        value: Option<Value>,
    },
    Newline,
    Tab,
    Space,
    Comma,
    Dot,
    Wrap {
        with: Enclosure,
        #[serde(default)]
        value: Option<Value>,
    },
}

impl Step {
    /// Apply this step to `builder`
    pub fn apply(&self, builder: &mut Builder) {
        match self {
            Step::Append { value } => builder.append(value.as_ref()),
            Step::Newline => builder.newline(),
            Step::Tab => builder.tab(),
            Step::Space => builder.space(),
            Step::Comma => builder.comma(),
            Step::Dot => builder.dot(),
            Step::Wrap { with, value } => builder.wrap(*with, value.as_ref()),
        };
    }

    /// Parse a command-line token
    ///
    /// - `::text` appends `:text`
    /// - `:space`, `:newline`, `:tab`, `:comma`, `:dot` (or `:w`, `:n`,
    ///   `:t`, `:coma`) push those characters
    /// - `<enclosure>=<value>` wraps `value` when the prefix names an
    ///   enclosure, e.g. `dq=text` or `square_bracket=1`
    /// - anything else is appended verbatim
    pub fn from_token(token: &str) -> Result<Self> {
        if let Some(literal) = token.strip_prefix("::") {
            return Ok(Step::Append {
                value: Some(format!(":{}", literal).into()),
            });
        }

        if let Some(directive) = token.strip_prefix(':') {
            return match directive {
                "space" | "w" => Ok(Step::Space),
                "newline" | "n" => Ok(Step::Newline),
                "tab" | "t" => Ok(Step::Tab),
                "comma" | "coma" => Ok(Step::Comma),
                "dot" => Ok(Step::Dot),
                _ => Err(Error::invalid_args(format!(
                    "unknown directive '{}' (use '::' for a literal colon)",
                    token
                ))),
            };
        }

        if let Some((prefix, value)) = token.split_once('=') {
            if let Ok(with) = prefix.parse::<Enclosure>() {
                return Ok(Step::Wrap {
                    with,
                    value: Some(value.into()),
                });
            }
        }

        Ok(Step::Append {
            value: Some(token.into()),
        })
    }
}

impl Recipe {
    /// Build a recipe from command-line tokens
    pub fn from_tokens<S: AsRef<str>>(seed: Option<String>, tokens: &[S]) -> Result<Self> {
        let seed = seed.map(Value::from);
        let steps = tokens
            .iter()
            .map(|token| Step::from_token(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { seed, steps })
    }

    /// Load a recipe from a TOML, YAML or JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::read_file(path)
    }

    /// Replay every step onto `builder`
    pub fn apply(&self, builder: &mut Builder) {
        for step in &self.steps {
            step.apply(builder);
        }
    }

    /// Create a seeded builder with every step applied
    pub fn to_builder(&self) -> Builder {
        let mut builder = Builder::create(self.seed.as_ref());
        self.apply(&mut builder);
        tracing::debug!(
            steps = self.steps.len(),
            fragments = builder.len(),
            "Recipe applied"
        );
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn render(recipe: &Recipe) -> String {
        recipe.to_builder().build()
    }

    fn text(value: &str) -> Option<Value> {
        Some(Value::from(value))
    }

    #[test]
    fn test_render_matches_method_chain() {
        let recipe = Recipe {
            seed: text("Hello"),
            steps: vec![
                Step::Space,
                Step::Append { value: text("World") },
                Step::Comma,
                Step::Space,
                Step::Wrap { with: Enclosure::DoubleQuote, value: text("x") },
                Step::Dot,
            ],
        };

        let expected = sbb_core::sbb("Hello").space().append("World").comma().space().dq("x").dot().build();
        assert_eq!(render(&recipe), expected);
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let recipe = Recipe {
            seed: None,
            steps: vec![
                Step::Append { value: None },
                Step::Wrap { with: Enclosure::Parenthesis, value: None },
                Step::Append { value: text("") },
            ],
        };

        let builder = recipe.to_builder();
        assert_eq!(builder.len(), 1);
        assert_eq!(render(&recipe), "");
    }

    #[test]
    fn test_tokens() {
        let recipe = Recipe::from_tokens(
            Some("a".to_string()),
            &[":space", "b", ":comma", "::c", "sb=1", "x=y", ":n"],
        )
        .unwrap();

        assert_eq!(render(&recipe), "a b,:c[1]x=y\n");
    }

    #[test]
    fn test_unknown_directive() {
        let err = Recipe::from_tokens(None, &[":bogus"]).unwrap_err();
        assert!(err.should_show_help());
    }

    #[test]
    fn test_deserialize_toml() {
        let recipe: Recipe = toml::from_str(
            r#"
seed = "name"

[[steps]]
op = "space"

[[steps]]
op = "wrap"
with = "double_quote"
value = "value"

[[steps]]
op = "join"
value = "!"

[[steps]]
op = "append"
"#,
        )
        .unwrap();

        assert_eq!(recipe.steps.len(), 4);
        assert_eq!(recipe.steps[3], Step::Append { value: None });
        assert_eq!(render(&recipe), "name \"value\"!");
    }

    #[test]
    fn test_toml_scalar_values() {
        let recipe: Recipe = toml::from_str(
            r#"
seed = 1

[[steps]]
op = "append"
value = 3

[[steps]]
op = "wrap"
with = "square_bracket"
value = true

[[steps]]
op = "add"
value = 2.5
"#,
        )
        .unwrap();

        assert_eq!(recipe.seed, Some(Value::Integer(1)));
        assert_eq!(recipe.steps[1], Step::Wrap { with: Enclosure::SquareBracket, value: Some(Value::Bool(true)) });
        assert_eq!(render(&recipe), "13[true]2.5");
    }

    #[test]
    fn test_json_scalar_values() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"steps": [
                {"op": "append", "value": 42},
                {"op": "space"},
                {"op": "wrap", "with": "parenthesis", "value": false},
                {"op": "append", "value": -0.5},
                {"op": "append", "value": null}
            ]}"#,
        )
        .unwrap();

        assert_eq!(recipe.steps[0], Step::Append { value: Some(Value::Integer(42)) });
        assert_eq!(recipe.steps[4], Step::Append { value: None });
        assert_eq!(render(&recipe), "42 (false)-0.5");
    }

    #[test]
    fn test_deserialize_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"steps": [{{"op": "wrap", "with": "angle_bracket", "value": "div"}}, {{"op": "tab"}}]}}"#
        )
        .unwrap();

        let recipe = Recipe::from_file(file.path()).unwrap();
        assert_eq!(recipe.seed, None);
        assert_eq!(render(&recipe), "<div>\t");
    }

    #[test]
    fn test_deserialize_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "seed: total\nsteps:\n  - op: space\n  - op: wrap\n    with: curly_bracket\n    value: 7\n"
        )
        .unwrap();

        let recipe = Recipe::from_file(file.path()).unwrap();
        assert_eq!(render(&recipe), "total {7}");
    }
}

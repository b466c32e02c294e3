//! Search query parsing and record matching.
//!
//! A query is a list of `key=value` pairs joined by `&`, for example
//! `name=Tomato&ingredient=Garlic`. Each pair is checked against every
//! recipe; a recipe is returned when it matches any pair. Results keep the
//! order in which recipes were first matched and never repeat a record.

use std::fmt;

use crate::error::{RecipeError, Result};
use crate::recipe::Recipe;

/// Separator between pairs.
pub const PAIR_SEPARATOR: char = '&';

/// Separator between a key and its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Field a query pair is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKey {
    /// Substring of the recipe name
    Name,
    /// Substring of any ingredient
    Ingredient,
    /// Accepted by the parser, never matches
    Other(String),
}

impl QueryKey {
    fn parse(key: &str) -> Self {
        match key {
            "name" => Self::Name,
            "ingredient" => Self::Ingredient,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Ingredient => "ingredient",
            Self::Other(key) => key,
        }
    }
}

/// A single `key=value` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    pub key: QueryKey,
    pub value: String,
}

impl QueryPair {
    pub fn new(key: QueryKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// Whether `recipe` satisfies this constraint.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match &self.key {
            QueryKey::Name => recipe.name_contains(&self.value),
            QueryKey::Ingredient => recipe.any_ingredient_contains(&self.value),
            QueryKey::Other(_) => false,
        }
    }
}

impl fmt::Display for QueryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.key.as_str(),
            KEY_VALUE_SEPARATOR,
            self.value
        )
    }
}

/// A parsed search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<QueryPair>,
}

impl Query {
    pub fn new(pairs: Vec<QueryPair>) -> Self {
        Self { pairs }
    }

    /// Parse a raw query string.
    ///
    /// An empty or whitespace-only string yields a query with no pairs.
    /// Keys are trimmed; values are kept exactly as written, so `name= `
    /// searches for a space.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::MalformedQuery` if a pair has no `=`, or an
    /// empty key or value.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let pairs = raw
            .split(PAIR_SEPARATOR)
            .map(parse_pair)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(pairs = pairs.len(), "parsed search query");
        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[QueryPair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether `recipe` satisfies at least one pair.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.pairs.iter().any(|pair| pair.matches(recipe))
    }

    /// Select the recipes matching any pair.
    ///
    /// Every pair is tested against every recipe. Results are ordered by the
    /// first pair that selected them, then by their position in `recipes`.
    /// A record selected by several pairs appears once.
    pub fn search<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        let mut seen = vec![false; recipes.len()];
        let mut results = Vec::new();

        for pair in &self.pairs {
            for (index, recipe) in recipes.iter().enumerate() {
                if !seen[index] && pair.matches(recipe) {
                    seen[index] = true;
                    results.push(recipe);
                }
            }
        }

        tracing::debug!(
            pairs = self.pairs.len(),
            scanned = recipes.len(),
            matched = results.len(),
            "search complete"
        );
        results
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PAIR_SEPARATOR)?;
            }
            write!(f, "{}", pair)?;
        }
        Ok(())
    }
}

/// Parse `raw` and return the matching recipes, cloned.
pub fn search(raw: &str, recipes: &[Recipe]) -> Result<Vec<Recipe>> {
    let query = Query::parse(raw)?;
    Ok(query.search(recipes).into_iter().cloned().collect())
}

fn parse_pair(raw: &str) -> Result<QueryPair> {
    let (key, value) = raw.split_once(KEY_VALUE_SEPARATOR).ok_or_else(|| {
        RecipeError::MalformedQuery(format!(
            "missing '{}' in \"{}\"",
            KEY_VALUE_SEPARATOR,
            raw.trim()
        ))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(RecipeError::MalformedQuery(format!(
            "empty key in \"{}\"",
            raw.trim()
        )));
    }
    if value.is_empty() {
        return Err(RecipeError::MalformedQuery(format!(
            "empty value for \"{}\"",
            key
        )));
    }

    Ok(QueryPair::new(QueryKey::parse(key), value))
}

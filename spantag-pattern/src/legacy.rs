use std::borrow::Cow;

use crate::LazyPattern;

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Literal(String),
    /// `*`: matched text is replaced with `?`.
    Redact,
    /// `$*`: matched text is kept.
    Keep,
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let token = match c {
            '$' if chars.peek() == Some(&'*') => {
                chars.next();
                Token::Keep
            }
            '*' => Token::Redact,
            c => {
                literal.push(c);
                continue;
            }
        };

        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(token);
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    tokens
}

/// A path glob from the deprecated global URI mapping setting.
///
/// The glob describes an entire path. A `*` matches one or more characters, including `/`, and
/// is replaced with `?`. A `$*` matches one or more characters that are kept as they are.
///
/// ```
/// use spantag_pattern::LegacyMappingRule;
///
/// let rule = LegacyMappingRule::new("/user/*");
/// assert_eq!(rule.apply("/user/123/nested/path").as_deref(), Some("/user/?"));
///
/// let rule = LegacyMappingRule::new("/user/*/$*");
/// assert_eq!(rule.apply("/user/123/orders").as_deref(), Some("/user/?/orders"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LegacyMappingRule {
    tokens: Vec<Token>,
    pattern: LazyPattern,
}

impl LegacyMappingRule {
    /// Creates a rule from a raw glob. Surrounding whitespace is ignored.
    pub fn new(raw: &str) -> Self {
        let tokens = tokenize(raw.trim());

        let mut regex = String::from("^");
        for token in &tokens {
            match token {
                Token::Literal(literal) => regex.push_str(&regex::escape(literal)),
                Token::Redact | Token::Keep => regex.push_str("(.+)"),
            }
        }
        regex.push('$');

        Self {
            tokens,
            pattern: LazyPattern::new(regex),
        }
    }

    /// Rewrites `path` if it matches this rule, otherwise returns `None`.
    pub fn apply(&self, path: &str) -> Option<String> {
        let captures = self.pattern.compiled().ok()?.captures(path)?;
        let mut groups = captures.iter().skip(1).flatten();

        let mut normalized = String::with_capacity(path.len());
        for token in &self.tokens {
            match token {
                Token::Literal(literal) => normalized.push_str(literal),
                Token::Redact => {
                    groups.next();
                    normalized.push('?');
                }
                Token::Keep => normalized.push_str(groups.next()?.as_str()),
            }
        }

        Some(normalized)
    }
}

/// Normalizes paths with the deprecated global URI mapping.
///
/// Rules are tried in order and the first matching rule wins. Paths that match no rule are
/// returned unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegacyUriNormalizer {
    rules: Vec<LegacyMappingRule>,
}

impl LegacyUriNormalizer {
    /// Creates a normalizer from the comma-separated setting value.
    pub fn parse(raw: &str) -> Self {
        let rules = raw
            .split(',')
            .filter(|pattern| !pattern.trim().is_empty())
            .map(LegacyMappingRule::new)
            .collect();

        Self { rules }
    }

    /// Returns `true` if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies the first matching rule to `path`.
    pub fn normalize<'a>(&self, path: &'a str) -> Cow<'a, str> {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(path))
            .map_or(Cow::Borrowed(path), Cow::Owned)
    }
}

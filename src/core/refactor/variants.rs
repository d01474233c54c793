use super::morphology::{capitalize, pluralize, singularize};
use serde::Serialize;

/// A case variant of a rename term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseVariant {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// A rename specification with its four derived variants.
#[derive(Debug, Clone)]
pub struct RenameSpec {
    pub from: String,
    pub to: String,
    /// Always in the order plural-lower, plural-capital, singular-lower,
    /// singular-capital. Content substitution depends on this order.
    pub variants: Vec<CaseVariant>,
}

impl RenameSpec {
    /// Create a rename spec, deriving the variants of both tokens.
    ///
    /// Each token is singularized first and then re-pluralized, so `users`
    /// and `user` produce the same spec:
    /// - `users` → `members` (plural)
    /// - `Users` → `Members` (plural capitalized)
    /// - `user` → `member` (singular)
    /// - `User` → `Member` (singular capitalized)
    pub fn new(from: &str, to: &str) -> Self {
        let (from_plural, from_singular) = number_forms(from);
        let (to_plural, to_singular) = number_forms(to);

        let variants = vec![
            CaseVariant {
                from: from_plural.to_lowercase(),
                to: to_plural.to_lowercase(),
                label: "plural".to_string(),
            },
            CaseVariant {
                from: capitalize(&from_plural),
                to: capitalize(&to_plural),
                label: "plural capitalized".to_string(),
            },
            CaseVariant {
                from: from_singular.to_lowercase(),
                to: to_singular.to_lowercase(),
                label: "singular".to_string(),
            },
            CaseVariant {
                from: capitalize(&from_singular),
                to: capitalize(&to_singular),
                label: "singular capitalized".to_string(),
            },
        ];

        RenameSpec {
            from: from.to_string(),
            to: to.to_string(),
            variants,
        }
    }

    pub fn plural(&self) -> &CaseVariant {
        &self.variants[0]
    }

    pub fn plural_capital(&self) -> &CaseVariant {
        &self.variants[1]
    }

    pub fn singular(&self) -> &CaseVariant {
        &self.variants[2]
    }

    /// True when every variant maps onto itself.
    pub fn is_noop(&self) -> bool {
        self.variants.iter().all(|v| v.from == v.to)
    }
}

fn number_forms(token: &str) -> (String, String) {
    let singular = singularize(token);
    let plural = pluralize(&singular);
    (plural, singular)
}

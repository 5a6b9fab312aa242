//! Email predicates
//!
//! Syntactic email checks and a "corporate address" check that rejects
//! addresses hosted by public mail providers. The set of public providers is
//! held in an [`EmailPolicy`], which can be replaced or loaded from
//! configuration.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::combinators::Predicate;
use crate::coerce::Coerce;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Mail providers treated as public by [`EmailPolicy::default`].
pub const PUBLIC_DOMAINS: [&str; 6] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "icloud.com",
];

/// Whether `text` is shaped like `local@domain.tld`.
///
/// The whole string must match; surrounding whitespace or a trailing newline
/// makes it invalid.
pub fn is_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Predicate that checks if a value is a syntactically valid email address.
#[derive(Clone, Copy, Default, Debug)]
pub struct ValidEmail;

impl<T: Coerce + ?Sized> Predicate<T> for ValidEmail {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.as_text().is_some_and(is_email)
    }
}

/// Create a predicate that checks if a value is a syntactically valid email.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(valid_email().check("usuario@example.com"));
/// assert!(!valid_email().check("correo_invalido"));
/// assert!(!valid_email().check(&123));
/// ```
pub fn valid_email() -> ValidEmail {
    ValidEmail
}

/// The set of mail domains considered public.
///
/// Domains compare case-insensitively.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::EmailPolicy;
///
/// let policy = EmailPolicy::default();
/// assert!(policy.is_public("Gmail.com"));
/// assert!(!policy.is_public("empresa.com"));
///
/// let strict = EmailPolicy::default().with_domain("proton.me");
/// assert!(strict.is_public("proton.me"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmailPolicy {
    public_domains: BTreeSet<String>,
}

impl EmailPolicy {
    /// Create a policy from an explicit list of public domains.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            public_domains: domains
                .into_iter()
                .map(|d| d.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Add one more public domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.public_domains
            .insert(domain.into().to_ascii_lowercase());
        self
    }

    /// Whether `domain` is one of the public domains.
    pub fn is_public(&self, domain: &str) -> bool {
        self.public_domains
            .iter()
            .any(|d| d.eq_ignore_ascii_case(domain))
    }

    /// The public domains, in sorted order.
    pub fn public_domains(&self) -> impl Iterator<Item = &str> {
        self.public_domains.iter().map(String::as_str)
    }
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self::new(PUBLIC_DOMAINS)
    }
}

/// Predicate that checks if a value is a valid email outside the public domains.
#[derive(Clone, Debug, Default)]
pub struct CorporateEmail {
    policy: EmailPolicy,
}

impl CorporateEmail {
    /// The policy this predicate checks against.
    pub fn policy(&self) -> &EmailPolicy {
        &self.policy
    }
}

impl<T: Coerce + ?Sized> Predicate<T> for CorporateEmail {
    fn check(&self, value: &T) -> bool {
        let Some(text) = value.as_text() else {
            return false;
        };
        if !is_email(text) {
            return false;
        }
        text.split_once('@')
            .is_some_and(|(_, domain)| !self.policy.is_public(domain))
    }
}

/// Create a predicate that checks if a value is a valid email whose domain is
/// not one of [`PUBLIC_DOMAINS`].
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(corporate_email().check("empleado@empresa.com"));
/// assert!(!corporate_email().check("usuario@gmail.com"));
/// assert!(!corporate_email().check("no_valido"));
/// ```
pub fn corporate_email() -> CorporateEmail {
    CorporateEmail::default()
}

/// Create a corporate email predicate over a custom [`EmailPolicy`].
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let p = corporate_email_with(EmailPolicy::new(["empresa.com"]));
/// assert!(p.check("usuario@gmail.com"));
/// assert!(!p.check("empleado@empresa.com"));
/// ```
pub fn corporate_email_with(policy: EmailPolicy) -> CorporateEmail {
    CorporateEmail { policy }
}

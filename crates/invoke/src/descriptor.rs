//! # Callable descriptors
//!
//! A `Callable` is the input shape handed to the factories: text naming a
//! function or a `Type::method`, an instance paired with a method name, or an
//! opaque closure. Text is classified by [`classify_text`].

use std::fmt;

use crate::{CallResult, InvokeError, NativeFn, Object, Value, native_fn};

/// Separator between a type name and a method name in textual descriptors.
pub const METHOD_SEPARATOR: &str = "::";

/// Namespace separator stripped from the front of textual descriptors.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Describes what to invoke.
#[derive(Clone)]
pub enum Callable<'a> {
    /// `"function"` or `"Type::method"`.
    Text(String),
    /// An instance and the name of one of its methods.
    Pair(&'a dyn Object, String),
    /// An anonymous callable value.
    Closure(NativeFn),
}

impl<'a> Callable<'a> {
    /// Descriptor for an anonymous closure.
    pub fn closure<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> CallResult + Send + Sync + 'static,
    {
        Self::Closure(native_fn(f))
    }

    /// Descriptor for `instance.method(..)`.
    pub fn method(instance: &'a dyn Object, method: impl Into<String>) -> Self {
        Self::Pair(instance, method.into())
    }
}

impl fmt::Debug for Callable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Pair(instance, method) => f.debug_tuple("Pair").field(instance).field(method).finish(),
            Self::Closure(closure) => write!(f, "Closure({:p})", closure.as_ref()),
        }
    }
}

impl From<&str> for Callable<'_> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Callable<'_> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<'a, T: Object> From<(&'a T, &str)> for Callable<'a> {
    fn from((instance, method): (&'a T, &str)) -> Self {
        Self::Pair(instance, method.to_string())
    }
}

impl From<NativeFn> for Callable<'_> {
    fn from(closure: NativeFn) -> Self {
        Self::Closure(closure)
    }
}

/// What a textual descriptor names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget<'t> {
    Function(&'t str),
    StaticMethod { type_name: &'t str, method: &'t str },
}

/// Classify a textual descriptor.
///
/// Leading namespace separators are stripped. Text containing `::` is split
/// on the first occurrence into a type and a method; anything else names a
/// function. Empty text, an empty type name, and an empty method name are
/// rejected.
pub fn classify_text(text: &str) -> Result<TextTarget<'_>, InvokeError> {
    let name = text.trim_start_matches(NAMESPACE_SEPARATOR);
    if name.is_empty() {
        return Err(InvokeError::InvalidDescriptor(format!(
            "empty callable name {text:?}"
        )));
    }

    match name.split_once(METHOD_SEPARATOR) {
        Some(("", _)) => Err(InvokeError::InvalidDescriptor(format!(
            "missing type name in {text:?}"
        ))),
        Some((_, "")) => Err(InvokeError::InvalidDescriptor(format!(
            "missing method name in {text:?}"
        ))),
        Some((type_name, method)) => Ok(TextTarget::StaticMethod { type_name, method }),
        None => Ok(TextTarget::Function(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_function() {
        assert_eq!(classify_text("myFunction").unwrap(), TextTarget::Function("myFunction"));
    }

    #[test]
    fn test_classify_static_method() {
        assert_eq!(
            classify_text("StaticTest::methodTest").unwrap(),
            TextTarget::StaticMethod {
                type_name: "StaticTest",
                method: "methodTest"
            }
        );
    }

    #[test]
    fn test_classify_strips_leading_namespace_separators() {
        assert_eq!(classify_text("\\\\functionTest").unwrap(), TextTarget::Function("functionTest"));
        assert_eq!(
            classify_text("\\App\\StaticTest::methodTest").unwrap(),
            TextTarget::StaticMethod {
                type_name: "App\\StaticTest",
                method: "methodTest"
            }
        );
    }

    #[test]
    fn test_classify_splits_on_first_separator() {
        assert_eq!(
            classify_text("A::b::c").unwrap(),
            TextTarget::StaticMethod {
                type_name: "A",
                method: "b::c"
            }
        );
    }

    #[test]
    fn test_classify_rejects_malformed_text() {
        for text in ["", "\\\\", "::methodTest", "\\::methodTest", "StaticTest::"] {
            assert!(
                matches!(classify_text(text), Err(InvokeError::InvalidDescriptor(_))),
                "{text:?} should be rejected"
            );
        }
    }
}

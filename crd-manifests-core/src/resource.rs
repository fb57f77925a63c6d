use std::borrow::Cow;

use crate::{gvk::GroupVersionKind, metadata::TypeMeta};

/// Static type information for a custom resource
///
/// Implemented on the `spec` type of every custom resource that can be rendered as a manifest.
/// All information is known at compile time, so there is nothing dynamic to carry around.
pub trait Resource {
    /// API group, empty for the core group
    const GROUP: &'static str;
    /// API version within the group
    const VERSION: &'static str;
    /// Kind of the resource
    const KIND: &'static str;

    /// Returns kind of this object
    fn kind() -> Cow<'static, str> {
        Self::KIND.into()
    }

    /// Returns group of this object
    fn group() -> Cow<'static, str> {
        Self::GROUP.into()
    }

    /// Returns version of this object
    fn version() -> Cow<'static, str> {
        Self::VERSION.into()
    }

    /// Returns apiVersion of this object
    fn api_version() -> Cow<'static, str> {
        if Self::GROUP.is_empty() {
            return Self::VERSION.into();
        }
        format!("{}/{}", Self::GROUP, Self::VERSION).into()
    }

    /// The group, version and kind triple
    fn gvk() -> GroupVersionKind {
        GroupVersionKind::gvk(Self::GROUP, Self::VERSION, Self::KIND)
    }

    /// The two fields injected into every manifest of this kind
    fn type_meta() -> TypeMeta {
        TypeMeta {
            api_version: Self::api_version().into_owned(),
            kind: Self::KIND.to_string(),
        }
    }
}

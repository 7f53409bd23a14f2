//! Builder-generation macros shared by the schema modules.

/// Declare predicate marker types and their query builders.
///
/// Each entry names the marker type, the builder type, and the spec
/// constructor (`record`, `positional` or `union`, optionally marked
/// `.anonymous()` for inner types), followed by one `method => "field"`
/// pair per declared field. The builder exposes one chainable method per
/// field; validation happens at compile time against the spec.
macro_rules! predicates {
    ($(
        $(#[$meta:meta])*
        $name:ident / $query:ident = $kind:ident($pred:literal, $version:literal) $(. $anon:ident())? {
            $($method:ident => $field:literal),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $name {
            /// Shared schema contract for this predicate.
            pub fn spec() -> ::std::sync::Arc<::anglekit_core::PredicateSpec> {
                static SPEC: ::std::sync::LazyLock<::std::sync::Arc<::anglekit_core::PredicateSpec>> =
                    ::std::sync::LazyLock::new(|| {
                        ::std::sync::Arc::new(
                            ::anglekit_core::PredicateSpec::$kind($pred, $version, &[$($field),*])
                                $(. $anon())?,
                        )
                    });
                ::std::sync::Arc::clone(&SPEC)
            }

            /// Start an empty query against this predicate.
            pub fn query() -> $query {
                $query {
                    inner: ::anglekit_compiler::PredicateQuery::new(Self::spec()),
                }
            }
        }

        #[derive(Debug, Clone)]
        pub struct $query {
            inner: ::anglekit_compiler::PredicateQuery,
        }

        impl $query {
            $(
                pub fn $method(
                    mut self,
                    value: impl Into<::anglekit_compiler::FieldValue>,
                ) -> Self {
                    self.inner.set_field($field, value.into());
                    self
                }
            )*

            pub fn build(self) -> ::anglekit_compiler::PredicateQuery {
                self.inner
            }

            /// Wrap for identity-based sharing across fields.
            pub fn shared(self) -> ::std::rc::Rc<::anglekit_compiler::PredicateQuery> {
                self.inner.shared()
            }

            /// Compile against a fresh environment.
            pub fn compile(&self) -> ::anglekit_compiler::CompileResult<String> {
                self.inner.compile()
            }
        }

        impl From<$query> for ::anglekit_compiler::FieldValue {
            fn from(query: $query) -> Self {
                query.inner.into()
            }
        }
    )*};
}

/// Declare an enum fact type whose values compile to bare Angle labels.
macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            /// The declared Angle label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),*
                }
            }
        }

        impl From<$name> for ::anglekit_compiler::FieldValue {
            fn from(value: $name) -> Self {
                ::anglekit_compiler::FieldValue::enum_label(value.label())
            }
        }
    };
}

pub(crate) use {predicates, schema_enum};

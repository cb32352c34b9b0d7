// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Closed set of named game values (compounds, parts, suppliers, …).
///
/// Each variant carries the key the site uses in page markup and the name it
/// shows to players. `from_name` accepts either, compared via
/// `core::sanitize::label_key`.
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $table:literal {
            $( $variant:ident => $key:literal, $display:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        $vis enum $name { $( $variant ),+ }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Table name used in lookup errors.
            pub const TABLE: &'static str = $table;

            pub fn index(self) -> usize { self as usize }

            pub fn key(self) -> &'static str {
                match self { $( $name::$variant => $key ),+ }
            }

            pub fn display_name(self) -> &'static str {
                match self { $( $name::$variant => $display ),+ }
            }

            pub fn from_name(name: &str) -> ::std::option::Option<Self> {
                let wanted = $crate::core::sanitize::label_key(name);
                if wanted.is_empty() { return None; }
                Self::ALL.iter().copied().find(|v| {
                    $crate::core::sanitize::label_key(v.key()) == wanted
                        || $crate::core::sanitize::label_key(v.display_name()) == wanted
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.display_name())
            }
        }
    };
}

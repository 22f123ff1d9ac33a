//! Raw response shapes, exactly as the API transmits them.

use serde::Deserialize;

/// Defines a single-key wrapper object, e.g. `{"restaurant": {...}}`.
macro_rules! wrapper {
    ($(#[$meta:meta])* $name:ident { $key:ident: $inner:ty }) => {
        $(#[$meta])*
        #[derive(Debug, serde::Deserialize)]
        pub struct $name {
            pub $key: Option<$inner>,
        }

        impl $crate::normalize::Wrapper for $name {
            type Inner = $inner;

            fn into_inner(self) -> Option<$inner> {
                self.$key
            }
        }
    };
}

pub mod common;
pub mod location;
pub mod restaurant;
pub mod search;

/// A number the API sends either as a JSON number or as a quoted string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Number(serde_json::Number),
    Text(String),
}

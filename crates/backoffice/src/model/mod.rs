//! # Domain Model
//!
//! Plain data for every record the back office keeps. Each record implements
//! [`ActorEntity`](actor_framework::ActorEntity) in its actor module; this module holds only
//! the structs, their creation/update payloads and their queryable columns.

use rust_decimal::Decimal;

/// Declares a type-safe store identifier.
///
/// IDs are sequential `u32`s handed out by the store; the prefix only shows up in logs and
/// error messages (`order_3`, `product_12`).
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl From<$name> for actor_framework::FieldValue {
            fn from(id: $name) -> Self {
                id.0.into()
            }
        }
    };
}

/// Largest quantity, price or amount any store accepts.
///
/// Products and sums of values under this bound stay far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// True for values in `0..=MAX_AMOUNT`.
pub fn within_limit(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= MAX_AMOUNT
}

pub mod expense;
pub mod menu;
pub mod order;
pub mod product;
pub mod sale;
pub mod shift;
pub mod staff;
pub mod temperature_log;

pub use expense::*;
pub use menu::*;
pub use order::*;
pub use product::*;
pub use sale::*;
pub use shift::*;
pub use staff::*;
pub use temperature_log::*;

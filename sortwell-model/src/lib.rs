//! Sort order descriptors shared across sortwell crates.
//!
//! A [`SortField`] describes one ordering key, [`SortOrders`] an ordered list
//! of them. The [`text`] module converts both to and from their compact text
//! form (`name,asc,true,false;age,desc,false,false`) using [`TextOptions`].
#![allow(missing_docs)]

pub mod error;
pub mod field;
pub mod options;
pub mod orders;
pub mod prelude;
pub mod text;

pub use error::{ModelError, Result as ModelResult};
pub use field::{CaseHandling, Direction, NullHandling, SortField};
pub use options::{TextOptions, TextOptionsBuilder};
pub use orders::SortOrders;

//! CLI argument definitions and command handlers.
//!
//! | Module      | Command              |
//! |-------------|----------------------|
//! | `show`      | `show`, `head`       |
//! | `edit_link` | `edit-link <PAGE>`   |
//! | `validate`  | `validate`           |

pub mod args;
pub mod edit_link;
pub mod show;
pub mod validate;

pub use args::{Cli, Commands, Format};

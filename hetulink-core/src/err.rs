//! Error handling shared by every crate in the workspace.
//! Fatal errors which callers need to tell apart are defined as concrete
//! error types by the owning crate and wrapped in [`Error`].

pub use anyhow::{anyhow, bail, ensure, Context, Error, Result};

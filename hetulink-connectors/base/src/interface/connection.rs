use std::ops::{Deref, DerefMut};

use hetulink_core::{data::ResultRow, err::Result};
use hetulink_logging::warn;

/// An open connection to a data source, as provided by the bridge
pub trait Connection {
    type TCursor: Cursor;

    /// Executes the supplied statement and fetches all resulting rows
    fn execute(&mut self, sql: &str) -> Result<Vec<ResultRow>>;

    /// Opens a new cursor on the connection
    fn cursor(&mut self) -> Result<Self::TCursor>;
}

/// A cursor opened on a connection.
/// Cursors must be closed explicitly, see [`ScopedCursor`].
pub trait Cursor {
    /// Executes the supplied statement
    fn execute(&mut self, sql: &str) -> Result<()>;

    /// Releases the cursor
    fn close(&mut self) -> Result<()>;
}

/// Closes the wrapped cursor when dropped, on every exit path
pub struct ScopedCursor<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> ScopedCursor<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Opens a cursor on the connection
    pub fn open<TConnection>(con: &mut TConnection) -> Result<Self>
    where
        TConnection: Connection<TCursor = C>,
    {
        Ok(Self::new(con.cursor()?))
    }
}

impl<C: Cursor> Deref for ScopedCursor<C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        &self.cursor
    }
}

impl<C: Cursor> DerefMut for ScopedCursor<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cursor
    }
}

impl<C: Cursor> Drop for ScopedCursor<C> {
    fn drop(&mut self) {
        if let Err(err) = self.cursor.close() {
            warn!("Failed to close cursor: {:?}", err);
        }
    }
}

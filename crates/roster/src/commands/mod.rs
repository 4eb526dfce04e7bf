//! Command implementations that act on the filesystem rather than on the
//! employee store.

pub mod init;

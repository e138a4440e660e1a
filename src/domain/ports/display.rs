//! Display port
//!
//! A display is told *that* something changed; it pulls what changed from a
//! `CarparkDataProvider` or a registry snapshot on its own.

pub trait DisplayRefresh: Send + Sync {
    fn refresh(&self);
}

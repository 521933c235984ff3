//! Persistence contracts shared by the runtime and host adapters.

pub mod prefs;

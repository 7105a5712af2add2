//! Combat domain: enemy behaviours.

pub(crate) mod spiker;

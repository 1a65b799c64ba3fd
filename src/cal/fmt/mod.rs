//! Turning dates and times into strings.

pub(crate) mod custom;
mod iso;

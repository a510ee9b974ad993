//! CLI subcommand implementations for the fedisnap binary.

pub mod doctor;
pub mod instance_cmd;
pub mod timeline_cmd;

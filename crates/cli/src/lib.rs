//! Filetrack CLI - command implementations behind the `ft` binary

pub mod cmd;
pub mod config;
pub mod diff_utils;
pub mod shell;
pub mod util;

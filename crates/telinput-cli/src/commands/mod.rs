use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use telinput_config::HostConfig;

pub mod completions;
pub mod countries;
pub mod normalize;
pub mod session;

pub struct Context<'a> {
    pub config: &'a HostConfig,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

use std::io::{self, Write};

use crate::core::config::data::Config;
use crate::core::constants::DEFAULT_ENDPOINT;

impl Config {
    pub fn print_all(&self) {
        let _ = self.write_all(&mut io::stdout());
    }

    pub fn write_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Current configuration:")?;
        match &self.endpoint {
            Some(endpoint) => writeln!(out, "  endpoint: {endpoint}")?,
            None => writeln!(out, "  endpoint: (unset, using {DEFAULT_ENDPOINT})")?,
        }
        match &self.greeting {
            Some(greeting) if greeting.is_empty() => writeln!(out, "  greeting: (disabled)")?,
            Some(greeting) => writeln!(out, "  greeting: {greeting}")?,
            None => writeln!(out, "  greeting: (unset)")?,
        }
        match self.sidebar_enabled() {
            true => writeln!(out, "  sidebar: on")?,
            false => writeln!(out, "  sidebar: off")?,
        }
        Ok(())
    }
}

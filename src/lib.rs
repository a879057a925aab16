pub mod cli;
pub mod error;
pub mod logging;

use std::io::Write;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

pub use crate::error::GreetError;

pub fn greeting_line(name: &str) -> String {
    return format!("Hello {name}");
}

pub fn coffee_line(city: &str) -> String {
    return format!("Let's have a coffee in {city}");
}

/// Renders the lines printed for one invocation.
#[cfg_attr(test, automock)]
pub trait Greeter {
    fn greet(&self, name: &str) -> String;
    fn invite(&self, city: &str) -> String;
}

pub struct CoffeeGreeter;

impl Greeter for CoffeeGreeter {
    fn greet(&self, name: &str) -> String {
        return greeting_line(name);
    }

    fn invite(&self, city: &str) -> String {
        return coffee_line(city);
    }
}

/// Who to greet and, optionally, where to meet them.
///
/// An empty city is stored as `None`: it prints exactly like an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    name: String,
    city: Option<String>,
}

impl Greeting {
    pub fn new(name: impl Into<String>, city: Option<String>) -> Self {
        return Self {
            name: name.into(),
            city: city.filter(|c| !c.is_empty()),
        };
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn city(&self) -> Option<&str> {
        return self.city.as_deref();
    }

    pub fn lines(&self, greeter: &dyn Greeter) -> Vec<String> {
        let mut lines = vec![greeter.greet(self.name())];
        match self.city() {
            Some(city) => lines.push(greeter.invite(city)),
            None => debug!("no city given, skipping coffee line"),
        }
        return lines;
    }
}

/// Writes every line of `greeting` to `out`, newline-terminated, then flushes.
pub fn write_greeting<W: Write>(
    out: &mut W,
    greeter: &dyn Greeter,
    greeting: &Greeting,
) -> Result<(), GreetError> {
    for line in greeting.lines(greeter) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    return Ok(());
}

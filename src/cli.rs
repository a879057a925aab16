//! Command-line argument schema and the handler it dispatches to.

use std::io::Write;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing::debug;

use crate::{CoffeeGreeter, GreetError, Greeting, write_greeting};

const BIN_NAME: &str = "greeter";

#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(about = "Say hello, and offer a coffee if you know the city", long_about = None)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Who to greet
    #[arg(required_unless_present = "show_completion")]
    pub name: Option<String>,

    /// City to meet in for a coffee
    #[arg(long, value_name = "CITY")]
    pub city: Option<String>,

    /// Print the completion script for SHELL and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub show_completion: Option<Shell>,
}

impl Cli {
    /// `None` only when no name was given, i.e. a completion run.
    pub fn greeting(self) -> Option<Greeting> {
        let city = self.city;
        return self.name.map(|name| Greeting::new(name, city));
    }
}

pub fn write_completion<W: Write>(shell: Shell, out: &mut W) -> Result<(), GreetError> {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
    out.flush()?;
    return Ok(());
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), GreetError> {
    debug!(name = ?cli.name, city = ?cli.city, "parsed arguments");
    if let Some(shell) = cli.show_completion {
        return write_completion(shell, out);
    }
    let greeting = cli.greeting().ok_or(GreetError::MissingName)?;
    return write_greeting(out, &CoffeeGreeter, &greeting);
}

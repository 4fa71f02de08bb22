#[macro_use]
extern crate log;
extern crate env_logger;

use env_logger::{Builder, Target};

extern crate balancer_common;
extern crate balancer_session;

use balancer_common::errors::Result;
use balancer_common::session::Session;

use balancer_session::Flow;

use std::env;
use std::io::{self, BufRead, Write};

fn run(prompt: Option<String>) -> Result<()>
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = Session::new();

    loop
    {
        if let Some(prompt) = &prompt
        {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0
        {
            trace!("Reached end of input");
            break;
        }

        if balancer_session::run_line(&mut session, &line, &mut out)? == Flow::Quit
        {
            break;
        }
    }

    Ok(())
}

fn main() {
    /* Log */
    let mut builder = Builder::new();
    builder.target(Target::Stdout);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    builder.init();

    let prompt = env::var("BALANCER_PROMPT").ok();

    if let Err(error) = run(prompt)
    {
        error!("Session ended because {}", error);
    }
}

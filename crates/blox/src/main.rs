use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;

use blox::{init_logging, App, LogConfig, RealEnv};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("blx: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    init_logging(&LogConfig::from_args(&args, &RealEnv, io::stderr().is_terminal()))
        .context("failed to initialize logging")?;

    let app = App::system();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let code = app.run(&args, &mut out, &mut err)?;

    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        flushed => flushed.context("failed to flush stdout")?,
    }
    Ok(code)
}

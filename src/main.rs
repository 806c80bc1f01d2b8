use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use lset::args::synopsis;
use lset::operations::exec;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match lset::args::parsed() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            e.print()?;
            eprintln!();
            eprint!("{}", synopsis());
            return Ok(ExitCode::FAILURE);
        }
    };
    log::debug!("{args:?}");

    if io::stdout().is_terminal() {
        exec(&args, io::stdout().lock())?;
    } else {
        exec(&args, io::BufWriter::new(io::stdout().lock()))?;
    }
    Ok(ExitCode::SUCCESS)
}

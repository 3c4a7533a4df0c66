use std::process::ExitCode;

use kgrv::command::command_parser::CommandParser;
use kgrv::command::manual::{HelpCatalog, PROG};
use kgrv::core::cli::Invocation;
use kgrv::core::context::AppContext;
use kgrv::core::types::Flag;
use kgrv::errors::Error;
use kgrv::logging::LogTarget;

fn main() -> ExitCode {
    let help = HelpCatalog::new();
    let invocation = match Invocation::from_env() {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("{}", help.usage_line());
            eprintln!("{PROG}: error: {}", describe(&err));
            return ExitCode::from(err.exit_code());
        }
    };

    match invocation.flag {
        Some(Flag::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Some(Flag::Help) => {
            println!("{}", help.general());
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    let Some(raw_command) = invocation.command.as_deref() else {
        println!("{}", help.general());
        return ExitCode::SUCCESS;
    };

    let mut ctx = match AppContext::new(invocation.options.clone()) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("❌ {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    let cmd = match CommandParser::new().parse(raw_command, &invocation.command_args) {
        Ok(cmd) => cmd,
        Err(err) => {
            ctx.logger
                .error(format!("❌ {err}"), LogTarget::ConsoleAndFile);
            println!("{}", help.general());
            return ExitCode::from(err.exit_code());
        }
    };

    ctx.logger.info(
        format!("Command run: {PROG} {}", invocation.line),
        LogTarget::FileOnly,
    );

    match cmd.execute(&mut ctx) {
        Ok(output) => {
            ctx.logger.info(output, LogTarget::ConsoleOnly);
            ExitCode::SUCCESS
        }
        Err(err) => {
            ctx.logger.error(
                format!("Command execution failed for '{raw_command}'. {err}"),
                LogTarget::ConsoleAndFile,
            );
            ExitCode::from(err.exit_code())
        }
    }
}

// Argument errors print bare, the way the usage line expects them.
fn describe(err: &Error) -> String {
    match err {
        Error::Parse(msg) => msg.clone(),
        other => other.to_string(),
    }
}

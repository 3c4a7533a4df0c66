use std::io::{self, Write};

use anyhow::Context;
use kgrv::prompter::flows::demo_flow::DemoFlow;
use kgrv::prompter::flows::showcase::Showcase;
use kgrv::prompter::prompter::Prompter;

fn main() -> anyhow::Result<()> {
    let stdout = io::stdout();
    Showcase::new()
        .run(&mut stdout.lock())
        .context("scripted demo failed")?;

    Prompter::new()
        .run(DemoFlow::new(stdout.lock()))
        .context("interactive demo failed")?;

    // Leave the terminal on a fresh line even when input ended early.
    let mut out = stdout.lock();
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

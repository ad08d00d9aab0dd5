use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Result;
use cmdsplit::{exec, parse, PlatformProfile};

fn main() -> Result<()> {
    let profile = PlatformProfile::native();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("$ ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            return Ok(());
        }

        let cmd = match parse(&line, &profile) {
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("parse error: {e}");
                continue;
            }
        };
        if cmd.is_empty() {
            continue;
        }
        if cmd.program == "exit" {
            let code = cmd
                .args
                .first()
                .and_then(|s| s.parse::<i32>().ok())
                .unwrap_or(0);
            process::exit(code);
        }

        match exec::run(&cmd) {
            Ok(out) => {
                print!("{}", out.stdout);
                eprint!("{}", out.stderr);
                if !out.success() {
                    eprintln!("[exit {}]", out.exit_code);
                }
            }
            Err(e) => eprintln!("{}: {e}", cmd.program),
        }
    }
}

use std::io::{self, BufRead, Write};
use tracing::info;
use lms_catalog::catalog::console::{ConsoleReply, dispatch};
use lms_catalog::catalog::controller::CatalogController;
use lms_catalog::core::controller::AppState;
use lms_catalog::utils::logs::setup_tracing;

// Line-oriented front end for a single branch catalog. Configuration comes from the
// LMS_* environment variables; logs and catalog events go to stderr.
fn main() -> io::Result<()> {
    let state = AppState::from_env();
    setup_tracing(&state.config);
    info!(branch_id = %state.config.branch_id, "starting catalog console");

    let mut controller = CatalogController::from_state(&state);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Library Management System (type 'help' for commands)")?;
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        match dispatch(&mut controller, line?.as_str()) {
            ConsoleReply::Lines(lines) => {
                for line in lines {
                    writeln!(stdout, "{}", line)?;
                }
            }
            ConsoleReply::Quit => break,
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}

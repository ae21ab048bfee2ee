use std::process::ExitCode;

fn main() -> ExitCode {
    eprintln!("Usage: cargo bench -p routebench-harness");
    ExitCode::FAILURE
}

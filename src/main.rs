use std::process::ExitCode;

fn main() -> ExitCode {
    match volume_pong_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "fatal startup error");
            eprintln!("volume-pong: {err}");
            ExitCode::FAILURE
        }
    }
}

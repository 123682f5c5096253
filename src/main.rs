use curl_commander::core;
use curl_commander::status::ExitStatus;

/// Entry point - hands the process arguments to core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    core::run(std::env::args_os())
}

use std::process;

use versionbump_cli::RunStatus;

#[tokio::main]
async fn main() {
    let status =
        versionbump_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await;
    if status == RunStatus::Failed {
        process::exit(1);
    }
}

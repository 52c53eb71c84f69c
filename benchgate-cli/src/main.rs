//! `benchgate` binary entry point.

fn main() {
    let code = match benchgate_cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

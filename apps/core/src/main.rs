fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match snipkeep_core::runtime::parse_cli_args(&args) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    };

    if let Err(error) = snipkeep_core::runtime::run_with_options(options) {
        eprintln!("[snipkeep] runtime failed: {error}");
        std::process::exit(1);
    }
}

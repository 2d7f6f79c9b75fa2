use clap::Parser;

fn main() {
    let cli = reticule::cli::Cli::parse();
    reticule::logging::init(cli.verbose);

    if let Err(err) = reticule::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

use clap::Parser;

fn main() {
    agent_hq::trace::init();

    let cli = agent_hq::Cli::parse();
    if let Err(err) = agent_hq::run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

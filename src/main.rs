use soddy::args::CliCommand;

fn main() {

    // 1. Parse commandline arguments
    let cli = soddy::args::parse_cli_args();

    let output = match cli.command {
        // 2a. Load the config and run the packing
        CliCommand::Run(run_args) => {
            soddy::build_target(&run_args)
                .and_then(|packing_target| soddy::run_process(&packing_target, run_args.format))
        },
        // 2b. Show an example config
        CliCommand::Example(example_args) => soddy::example_config(&example_args),
    };

    match output {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        },
    }
}

use std::{
    env, fs,
    io::{self, Read},
    process,
};

use gridgraph::{
    GridGraphError, World,
    client::CommandLineConfig,
    script::ScriptRunner,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let script = match read_script(config.script.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    if let Err(err) = run(&config, &script) {
        eprintln!("script failed: {err}");
        process::exit(1);
    }
}

fn read_script(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn run(config: &CommandLineConfig, script: &str) -> Result<(), GridGraphError> {
    let mut runner = ScriptRunner::new(World::with_config(&config.grid)?);
    for line in runner.run(script)? {
        println!("{line}");
    }
    if config.json {
        println!("{}", runner.world().grid().snapshot().to_json()?);
    }
    Ok(())
}

use anyhow::Result;
use clap::{arg, command};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = command!("retrodesk check")
        .about("Checks syntax of the configuration file")
        .help_template(retrodesk::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config dir otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    println!(
        "\x1b[0;94m::\x1b[0m retrodesk version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let loaded = match matches.get_one::<String>("INPUT") {
        // An explicit file must already exist; only the default location gets created.
        Some(path) => {
            let config_path = PathBuf::from(path);
            if verbose {
                dbg!(&config_path);
            }
            retrodesk::load_from_path(&config_path)
        }
        None => {
            let config_path = xdg::BaseDirectories::with_prefix("retrodesk")?
                .place_config_file("config.toml")?;
            if verbose {
                dbg!(&config_path);
            }
            retrodesk::load_or_create(&config_path)
        }
    };

    match loaded {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config.check_log_level(verbose);
            println!("\x1b[0;94m::\x1b[0m Checking windows . . .");
            let problems = config.problems();
            for problem in &problems {
                println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {problem} \x1b[0m");
            }
            if problems.is_empty() {
                println!("\x1b[0;92m    -> {} windows OK \x1b[0m", config.windows.len());
            }
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
        }
    }
    Ok(())
}

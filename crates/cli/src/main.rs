fn main() -> anyhow::Result<()> {
    skinmatch_observability::init();

    let config = skinmatch_cli::config::Config::from_env();
    let command = skinmatch_cli::Command::parse(std::env::args().skip(1))?;

    let output = skinmatch_cli::run(&config, &command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

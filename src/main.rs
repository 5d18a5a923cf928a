use eyre::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init()?;
    greet_groups::run();
    Ok(())
}

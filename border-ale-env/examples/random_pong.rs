use anyhow::Result;
use border_ale_env::{
    util::{eval, save_png, RandomPolicy},
    AleEnv, AleEnvConfig, EpisodicEnv,
};

fn env_config(name: String) -> AleEnvConfig {
    AleEnvConfig::default().name(name)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    // Pong environment configuration. Set `use_sdl(true)` to watch the game.
    let env_config = env_config("pong".to_string()).seed(42);
    let mut env = AleEnv::from_config(&env_config)?;

    // Creates a random policy
    let mut policy = RandomPolicy::new(env.number_of_actions());

    // Runs evaluation
    let returns = eval(&mut env, &mut policy, 5)?;
    println!("Returns: {:?}", returns);

    // Dumps the newest frame of the last state
    if let Some(path) = std::env::args().nth(1) {
        save_png(env.latest_frame(), &path)?;
        println!("Saved the last frame to {}", path);
    }

    Ok(())
}

//! List the built-in scenarios.

use clap::Args;
use refdata_config::{ConfigError, ScenarioConfig, factory_scenarios, get_factory_scenario};

#[derive(Args)]
pub struct ScenariosArgs {
    /// Print this scenario as manifest TOML instead of listing all
    name: Option<String>,
}

pub fn run(args: ScenariosArgs) -> anyhow::Result<()> {
    if let Some(name) = args.name {
        let config =
            get_factory_scenario(&name).ok_or(ConfigError::UnknownScenario(name))?;
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Factory Scenarios");
    println!("=================");
    println!();
    for config in factory_scenarios() {
        println!(
            "  {:<26} down={} up={} {:<3} {}",
            config.name,
            config.down_sampling_factor,
            config.up_sampling_factor,
            if config.is_fir() { "FIR" } else { "IIR" },
            describe_numerator(&config)
        );
    }
    println!();
    println!("Use 'refdata scenarios <NAME>' to print a scenario as TOML.");

    Ok(())
}

fn describe_numerator(config: &ScenarioConfig) -> String {
    match (&config.b, &config.design) {
        (Some(b), _) => format!("b: {} coefficient(s)", b.len()),
        (None, Some(design)) => {
            let taps = design
                .taps
                .map_or_else(|| "default".to_string(), |t| t.to_string());
            let cutoff = design
                .cutoff
                .map_or_else(|| "up/down".to_string(), |c| c.to_string());
            format!("firwin(taps={taps}, cutoff={cutoff})")
        }
        (None, None) => "no numerator".to_string(),
    }
}

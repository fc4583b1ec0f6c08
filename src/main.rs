// Entry point: resolves parameters against the config defaults, runs one
// selection (or a sampling histogram) and prints the result.
use std::sync::Arc;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chronoscape::cli::Args;
use chronoscape::config::EngineConfig;
use chronoscape::scene::{
    Catalog, EnvironmentalParams, HistoricalPeriod, RenderedScene, SceneSelector, SCENE_COUNT,
};

fn resolve_params(args: &Args, cfg: &EngineConfig) -> EnvironmentalParams {
    let period = args
        .period
        .as_deref()
        .map(HistoricalPeriod::from_label)
        .unwrap_or(cfg.defaults.period);
    EnvironmentalParams::new(
        args.temperature.unwrap_or(cfg.defaults.temperature_c),
        period,
        args.location
            .clone()
            .unwrap_or_else(|| cfg.defaults.location_type.clone()),
        args.time_of_day
            .clone()
            .unwrap_or_else(|| cfg.defaults.time_of_day.clone()),
    )
}

fn print_scene(rendered: &RenderedScene, json: bool) {
    if json {
        match serde_json::to_string_pretty(rendered) {
            Ok(text) => println!("{text}"),
            Err(err) => eprintln!("failed to serialize scene: {err}"),
        }
        return;
    }
    println!("scene:     {}", rendered.scene.scene_name);
    println!("period:    {}", rendered.scene.period.label());
    println!("audio:     {}", rendered.scene.audio_cue);
    println!("visual:    {}", rendered.scene.visual_cue);
    println!("scent:     {}", rendered.scene.olfactory_cue);
    println!("weather:   {}", rendered.adaptation.weather_condition);
    println!("time:      {}", rendered.adaptation.time_of_day);
    println!();
    println!("{}", rendered.scene.description);
}

fn run_trials(selector: &SceneSelector, params: &EnvironmentalParams, rng: &mut SmallRng, n: u32) {
    let mut counts = [0u32; SCENE_COUNT];
    let weights = selector.weights_for(params);
    for _ in 0..n {
        counts[weights.sample_index(rng)] += 1;
    }
    println!("weights: {:?}", weights.as_array());
    for (i, count) in counts.iter().enumerate() {
        let name = &selector.catalog().record(i).scene_name;
        let share = *count as f32 / n as f32;
        println!("[{i}] {name:<20} {count:>8}  ({share:.3})");
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chronoscape=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let cfg = EngineConfig::load_or_default(&args.config);
    let params = resolve_params(&args, &cfg);

    let mut rng = match args.seed.or(cfg.sampling.seed) {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let selector = SceneSelector::new(Arc::new(Catalog::standard()));
    info!(
        period = params.period.label(),
        temperature_c = params.temperature_c,
        "generating scene"
    );

    match args.trials {
        Some(n) if n > 0 => run_trials(&selector, &params, &mut rng, n),
        _ => {
            let rendered = selector.generate_scene(&params, &mut rng);
            print_scene(&rendered, args.json);
        }
    }
}

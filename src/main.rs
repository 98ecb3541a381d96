use clap::{Parser, ValueEnum};
use mindwave_core::analyzer::ActivityKind;
use mindwave_core::{MindwaveCore, WeatherCondition};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Simulate one mood-detection cycle from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Typed text to analyze (reads stdin when omitted and no other
    /// signal flags are set)
    #[arg(short, long)]
    text: Option<String>,

    /// Backspaces observed while typing
    #[arg(long, default_value_t = 0)]
    backspaces: u32,

    /// Tab switches since the last detection
    #[arg(long, default_value_t = 0)]
    tab_switches: u32,

    /// Minutes on social media since the last detection
    #[arg(long, default_value_t = 0)]
    social_media: u32,

    /// Minutes spent reading since the last detection
    #[arg(long, default_value_t = 0)]
    reading: u32,

    /// Current weather condition
    #[arg(short, long, value_enum)]
    weather: Option<Weather>,

    /// Mark the session as late-night usage
    #[arg(long)]
    late_night: bool,

    /// Device activity level 0-100 (enables the device-usage signal)
    #[arg(long)]
    activity_level: Option<f32>,

    /// Number of recommendations to return
    #[arg(short, long, default_value_t = 6)]
    count: usize,

    /// Seed the shuffle for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Weather {
    Rain,
    Sunny,
    Cloudy,
    Snow,
    Night,
    Fog,
}

impl From<Weather> for WeatherCondition {
    fn from(value: Weather) -> Self {
        match value {
            Weather::Rain => WeatherCondition::Rain,
            Weather::Sunny => WeatherCondition::Sunny,
            Weather::Cloudy => WeatherCondition::Cloudy,
            Weather::Snow => WeatherCondition::Snow,
            Weather::Night => WeatherCondition::Night,
            Weather::Fog => WeatherCondition::Fog,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let has_signal_flags = args.tab_switches > 0
        || args.social_media > 0
        || args.reading > 0
        || args.weather.is_some()
        || args.late_night
        || args.activity_level.is_some();

    // Fall back to stdin for the text signal when nothing else is given.
    let text = match args.text {
        Some(t) => Some(t),
        None if !has_signal_flags => {
            let mut buffer = String::new();
            if io::stdin().read_to_string(&mut buffer).is_ok() && !buffer.trim().is_empty() {
                Some(buffer)
            } else {
                None
            }
        }
        None => None,
    };

    let core = MindwaveCore::new().with_recommend_count(args.count);
    let session = match core.start_session() {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let result = (|| {
        if let Some(text) = &text {
            core.track_typing(&session, text, args.backspaces)?;
        }
        if args.tab_switches > 0 {
            core.track_activity(&session, ActivityKind::TabSwitch, args.tab_switches)?;
        }
        if args.social_media > 0 {
            core.track_activity(&session, ActivityKind::SocialMedia, args.social_media)?;
        }
        if args.reading > 0 {
            core.track_activity(&session, ActivityKind::Reading, args.reading)?;
        }
        if args.late_night || args.activity_level.is_some() {
            core.note_device_usage(&session, args.late_night, args.activity_level.unwrap_or(50.0))?;
        }
        if let Some(weather) = args.weather {
            core.set_weather(&session, weather.into())?;
        }

        match args.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                core.detect_with(&session, chrono::Utc::now(), &mut rng)
            }
            None => core.detect(&session),
        }
    })();

    match result {
        Ok(outcome) => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
        Err(e) => eprintln!("Error: {}", e),
    }
}

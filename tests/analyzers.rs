use mindwave_core::analyzer::{analyze_typing, weather_impact, SignalAccumulator};
use mindwave_core::history::{MoodHistory, HISTORY_CAP};
use mindwave_core::weather::{default_reading, is_late_night, map_provider_condition};
use mindwave_core::WeatherCondition;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn negative_text_scores_negative_sentiment() {
    // 6 tokens, 2 negative hits, 0 positive
    let pattern = analyze_typing("I had a terrible awful day", 0);
    assert!(approx(pattern.word_sentiment, -2.0 / 6.0));
    assert!(approx(pattern.sentiment, -2.0 / 6.0));
    assert!(approx(pattern.speed, 12.0));
}

#[test]
fn empty_text_defaults() {
    let pattern = analyze_typing("", 3);
    assert!(approx(pattern.word_sentiment, 0.0));
    assert!(approx(pattern.sentiment, 0.0));
    assert!(approx(pattern.speed, 50.0));
    assert_eq!(pattern.backspaces, 3);
}

#[test]
fn matching_is_substring_based() {
    // "unhappy" contains "happy", so it counts as a positive hit; word
    // lists are matched by containment, not exact token equality.
    let pattern = analyze_typing("unhappy", 0);
    assert!(approx(pattern.word_sentiment, 1.0));

    // One token can hit both lists at once.
    let both = analyze_typing("badlove", 0);
    assert!(approx(both.word_sentiment, 0.0));
}

#[test]
fn sentiment_is_clamped_and_speed_capped() {
    let positive = analyze_typing("happy joy love fun", 0);
    assert!(approx(positive.sentiment, 1.0));

    let long_text = "word ".repeat(80);
    let pattern = analyze_typing(&long_text, 0);
    assert!(approx(pattern.speed, 100.0));
}

#[test]
fn weather_impact_table() {
    assert!(approx(weather_impact(WeatherCondition::Rain), -0.2));
    assert!(approx(weather_impact(WeatherCondition::Sunny), 0.3));
    assert!(approx(weather_impact(WeatherCondition::Cloudy), -0.1));
    assert!(approx(weather_impact(WeatherCondition::Snow), 0.1));
    assert!(approx(weather_impact(WeatherCondition::Night), -0.1));
    assert!(approx(weather_impact(WeatherCondition::Fog), -0.15));
}

#[test]
fn accumulator_only_emits_collected_signals() {
    let mut acc = SignalAccumulator::new();
    assert!(acc.bundle().is_empty());

    acc.track_typing("hello ", 1);
    acc.track_typing("world", 2);
    let bundle = acc.bundle();
    let typing = bundle.typing_pattern.expect("typing present");
    assert_eq!(typing.backspaces, 3);
    assert!(bundle.activity_pattern.is_none());

    acc.set_weather(WeatherCondition::Fog);
    let bundle = acc.bundle();
    let weather = bundle.weather.expect("weather present");
    assert_eq!(weather.condition, WeatherCondition::Fog);
    assert!(approx(weather.impact, -0.15));

    acc.reset();
    assert!(acc.bundle().is_empty());
}

#[test]
fn provider_condition_mapping() {
    assert_eq!(map_provider_condition("Rain", 12), WeatherCondition::Rain);
    assert_eq!(
        map_provider_condition("Drizzle", 12),
        WeatherCondition::Rain
    );
    assert_eq!(map_provider_condition("Clear", 12), WeatherCondition::Sunny);
    assert_eq!(
        map_provider_condition("Clouds", 12),
        WeatherCondition::Cloudy
    );
    assert_eq!(map_provider_condition("Haze", 12), WeatherCondition::Fog);
    // unrecognized conditions bucket to cloudy
    assert_eq!(
        map_provider_condition("Tornado", 12),
        WeatherCondition::Cloudy
    );
    // night wins over everything
    assert_eq!(map_provider_condition("Clear", 23), WeatherCondition::Night);
    assert_eq!(map_provider_condition("Rain", 3), WeatherCondition::Night);
}

#[test]
fn default_reading_follows_the_clock() {
    let day = default_reading(12);
    assert_eq!(day.condition, WeatherCondition::Sunny);
    assert_eq!(day.temperature, 22);
    assert_eq!(day.description, "Clear sky");

    let night = default_reading(2);
    assert_eq!(night.condition, WeatherCondition::Night);
    assert_eq!(night.description, "Clear night");
    assert_eq!(night.location, "Unknown");
}

#[test]
fn late_night_window() {
    assert!(is_late_night(22));
    assert!(is_late_night(23));
    assert!(is_late_night(0));
    assert!(is_late_night(5));
    assert!(!is_late_night(6));
    assert!(!is_late_night(21));
}

#[test]
fn history_caps_at_one_hundred_most_recent_first() {
    use chrono::{TimeZone, Utc};
    use mindwave_core::engine::classify;
    use mindwave_core::SignalBundle;

    let mut history = MoodHistory::new();
    for i in 0..(HISTORY_CAP + 5) {
        let ts = Utc.timestamp_opt(i as i64, 0).unwrap();
        history.push(classify(SignalBundle::default(), ts));
    }

    assert_eq!(history.len(), HISTORY_CAP);
    let latest = history.latest().expect("non-empty");
    assert_eq!(latest.timestamp.timestamp(), (HISTORY_CAP + 4) as i64);
    // the oldest retained entry is the 6th ever pushed
    let oldest = history.iter().last().expect("non-empty");
    assert_eq!(oldest.timestamp.timestamp(), 5);
}

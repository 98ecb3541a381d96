use mindwave_core::analyzer::ActivityKind;
use mindwave_core::{MindwaveCore, WeatherCondition};

fn main() {
    // 1. Create the core
    let core = MindwaveCore::new();

    // 2. Start a detection session
    let session_id = core.start_session().expect("start session");
    println!("Session started: {}", session_id);

    // 3. Feed behavioral signals as they come in
    // (a real host forwards these from browser/device event taps)
    core.track_typing(&session_id, "had a great day, feeling happy about the launch", 2)
        .unwrap();
    core.track_activity(&session_id, ActivityKind::TabSwitch, 3)
        .unwrap();
    core.track_activity(&session_id, ActivityKind::Reading, 12)
        .unwrap();
    core.set_weather(&session_id, WeatherCondition::Sunny)
        .unwrap();

    // 4. Peek without consuming the session
    let preview = core.peek(&session_id).unwrap();
    println!(
        "Preview: {:?} (score {}, confidence {:.2})",
        preview.category, preview.score, preview.confidence
    );

    // 5. Run the full cycle: classify, recommend, record history
    let outcome = core.detect(&session_id).unwrap();
    println!(
        "Mood: {:?} (score {}, confidence {:.2})",
        outcome.classification.category,
        outcome.classification.score,
        outcome.classification.confidence
    );
    println!("Micro-habit: {}", outcome.micro_habit.title);
    for rec in &outcome.recommendations {
        println!("  - [{:?}] {}", rec.kind, rec.title);
    }

    // 6. Mark the habit done
    core.complete_habit(&outcome.micro_habit.id).unwrap();
    println!("Completions: {:?}", core.habit_completions().unwrap());
}

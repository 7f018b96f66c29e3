use crate::mach::{Config, Event, Runtime};

mod dispatch_test;
mod state_test;

/// Feed lines to the runtime and render every event the way a terminal would.
fn run(runtime: &mut Runtime, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        for event in runtime.enter(line) {
            s.push_str(&format!("{}\n", event));
        }
    }
    s
}

fn errors(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, Event::Error(_)))
        .count()
}

fn small() -> Runtime {
    Runtime::new(Config { stack_size: 4 })
}

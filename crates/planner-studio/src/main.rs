use planner_editor::Editor;
use planner_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    let result = Editor::new()
        .title("Event Planner")
        .size(512.0, 512.0)
        .run();

    if let Err(e) = result {
        log::error!("event planner failed: {e:#}");
        std::process::exit(1);
    }
}

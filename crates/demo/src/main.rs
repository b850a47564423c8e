use std::sync::Arc;

use tallybook_core::SystemClock;

fn main() -> anyhow::Result<()> {
    tallybook_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tallybook_demo::run_all(&mut out, Arc::new(SystemClock))
}

mod app;
mod effects;
mod logging;

fn main() -> anyhow::Result<()> {
    app::run_app()
}

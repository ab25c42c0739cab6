use std::process::ExitCode;

fn main() -> ExitCode {
    // `.env` may carry CASES_FEED_URL and RUST_LOG.
    dotenvy::dotenv().ok();

    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match case_incidence::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

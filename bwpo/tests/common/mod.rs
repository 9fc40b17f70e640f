use bwpo::keyboard_macros::TextInjector;
use embassy_time::Duration;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Records every text sent by the macro processor
#[derive(Default)]
pub struct RecordingInjector {
    pub sent: Vec<(String, Duration)>,
}

impl TextInjector for RecordingInjector {
    type Error = ();

    fn send_string_with_delay(&mut self, text: &str, interval: Duration) -> Result<(), Self::Error> {
        self.sent.push((text.to_string(), interval));
        Ok(())
    }
}

/// Injector whose host side always fails
#[derive(Default)]
pub struct FailingInjector {
    pub attempts: usize,
}

impl TextInjector for FailingInjector {
    type Error = &'static str;

    fn send_string_with_delay(&mut self, _text: &str, _interval: Duration) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err("host buffer full")
    }
}

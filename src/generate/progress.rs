use std::io::IsTerminal as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

enum Sink {
    Silent,
    Plain,
    Bar(ProgressBar),
}

/// Where per-commit progress lines go while a generator runs.
pub struct Reporter {
    sink: Sink,
}

impl Reporter {
    /// Discards everything.
    #[must_use]
    pub fn silent() -> Self {
        Self { sink: Sink::Silent }
    }

    /// Progress bar on a terminal, plain lines on stdout otherwise.
    #[must_use]
    pub fn console() -> Self {
        if !std::io::stdout().is_terminal() {
            return Self { sink: Sink::Plain };
        }
        let bar = ProgressBar::new(0);
        let style =
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self {
            sink: Sink::Bar(bar),
        }
    }

    pub(crate) fn begin(&self, total: u64, message: &str) {
        if let Sink::Bar(bar) = &self.sink {
            bar.set_length(total);
            bar.set_message(message.to_string());
            bar.enable_steady_tick(Duration::from_millis(100));
        }
    }

    pub(crate) fn line(&self, text: &str) {
        match &self.sink {
            Sink::Silent => {}
            Sink::Plain => println!("{text}"),
            Sink::Bar(bar) => bar.println(text),
        }
    }

    pub(crate) fn advance(&self) {
        if let Sink::Bar(bar) = &self.sink {
            bar.inc(1);
        }
    }

    pub(crate) fn finish(&self) {
        if let Sink::Bar(bar) = &self.sink {
            bar.finish_with_message("done");
        }
    }

    pub(crate) fn abandon(&self) {
        if let Sink::Bar(bar) = &self.sink {
            bar.abandon_with_message("failed");
        }
    }
}

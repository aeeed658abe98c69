use std::io::Write;

/// Colour applied to the alert region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertColor {
    Red,
    Green,
}

impl AlertColor {
    /// CSS colour name.
    pub fn as_css(self) -> &'static str {
        match self {
            AlertColor::Red => "red",
            AlertColor::Green => "green",
        }
    }
}

/// Surface the poller renders a status report onto.
///
/// Each method replaces the whole content of one display region.
pub trait StatusDisplay {
    fn set_status(&mut self, text: &str);
    fn set_alert(&mut self, text: &str, color: AlertColor);
    fn set_explanation(&mut self, text: &str);
    fn set_metrics(&mut self, text: &str);
}

/// Keeps the last value written to each region. `None` means never written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryDisplay {
    pub status: Option<String>,
    pub alert: Option<(String, AlertColor)>,
    pub explanation: Option<String>,
    pub metrics: Option<String>,
}

impl StatusDisplay for MemoryDisplay {
    fn set_status(&mut self, text: &str) {
        self.status = Some(text.to_owned());
    }

    fn set_alert(&mut self, text: &str, color: AlertColor) {
        self.alert = Some((text.to_owned(), color));
    }

    fn set_explanation(&mut self, text: &str) {
        self.explanation = Some(text.to_owned());
    }

    fn set_metrics(&mut self, text: &str) {
        self.metrics = Some(text.to_owned());
    }
}

/// Writes every region update as a labelled line, e.g. `alert [red]: ...`.
///
/// Write errors are ignored; a closed terminal must not fail a poll.
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, label: &str, text: &str) {
        let _ = writeln!(self.out, "{label}: {text}");
        let _ = self.out.flush();
    }
}

impl<W: Write> StatusDisplay for TerminalDisplay<W> {
    fn set_status(&mut self, text: &str) {
        self.line("status", text);
    }

    fn set_alert(&mut self, text: &str, color: AlertColor) {
        self.line(&format!("alert [{}]", color.as_css()), text);
    }

    fn set_explanation(&mut self, text: &str) {
        self.line("explanation", text);
    }

    fn set_metrics(&mut self, text: &str) {
        self.line("metrics", text);
    }
}

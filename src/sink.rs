//! Where summaries go. The pipeline only talks to [`ReportSink`]; the binary
//! wires in [`ConsoleSink`], embedders and tests can use [`MemorySink`].

pub trait ReportSink {
    fn message(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn fail(&mut self, message: &str);
    fn markdown(&mut self, markdown: &str);
}

/// Prints messages and markdown to stdout, warnings and failures to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        eprintln!("warning: {}", message);
    }

    fn fail(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn markdown(&mut self, markdown: &str) {
        print!("{}", markdown);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Message(String),
    Warn(String),
    Fail(String),
    Markdown(String),
}

/// Keeps every notification in the order it was sent.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    notifications: Vec<Notification>,
}

impl MemorySink {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn into_notifications(self) -> Vec<Notification> {
        self.notifications
    }
}

impl ReportSink for MemorySink {
    fn message(&mut self, message: &str) {
        self.notifications
            .push(Notification::Message(message.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.notifications.push(Notification::Warn(message.to_string()));
    }

    fn fail(&mut self, message: &str) {
        self.notifications.push(Notification::Fail(message.to_string()));
    }

    fn markdown(&mut self, markdown: &str) {
        self.notifications
            .push(Notification::Markdown(markdown.to_string()));
    }
}

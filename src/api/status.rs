/// Receives human-readable render-progress messages.
///
/// Hosts point this at a status text element; tests use [`BufferedStatus`]
/// to assert on the message sequence.
pub trait StatusSink {
    fn update(&mut self, message: &str);
}

/// Discards all messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn update(&mut self, _message: &str) {}
}

/// Records messages in arrival order.
#[derive(Debug, Default, Clone)]
pub struct BufferedStatus {
    pub messages: Vec<String>,
}

impl StatusSink for BufferedStatus {
    fn update(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

//! User-facing alerts raised when the gateway cannot be reached.

/// Something that can put a blocking message in front of the user.
pub trait Alert {
    fn alert(&mut self, message: &str);
}

/// An [`Alert`] that records every message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingAlert {
    pub messages: Vec<String>,
}

impl Alert for RecordingAlert {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

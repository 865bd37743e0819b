/// Success or error feedback line shown under a form. Setting one clears
/// the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_state_keeps_one_kind_at_a_time() {
        let mut state = MessageState::default();
        state.set_error("Thiếu tên");
        assert_eq!(state.error.as_deref(), Some("Thiếu tên"));
        assert!(state.success.is_none());

        state.set_success("Đã thêm");
        assert!(state.error.is_none());
        assert_eq!(state.success.as_deref(), Some("Đã thêm"));

        state.clear();
        assert_eq!(state, MessageState::default());
    }
}

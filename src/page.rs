//! Headless converter page: the input box, target selector, convert button,
//! output box and copy button, with their event handlers.

use tracing::error;

use crate::client::ConvertClient;

pub const DEFAULT_TARGET: &str = "upward";

pub const CONVERT_LABEL: &str = "변환하기";
pub const CONVERTING_LABEL: &str = "변환 중...";
pub const CONVERTING_PLACEHOLDER: &str = "변환 중입니다...";

pub const EMPTY_INPUT_ALERT: &str = "변환할 내용을 입력해주세요.";
pub const CONVERT_FAILED_ALERT: &str = "텍스트 변환 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
pub const EMPTY_OUTPUT_ALERT: &str = "변환된 텍스트가 없습니다.";
pub const COPIED_ALERT: &str = "복사되었습니다!";
pub const COPY_FAILED_ALERT: &str = "텍스트 복사에 실패했습니다. 수동으로 복사해주세요.";

/// Output text shown after a failed conversion
pub fn conversion_error_text(message: &str) -> String {
    format!("오류 발생: {}. 다시 시도해주세요.", message)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub label: String,
}

impl ButtonState {
    fn idle() -> Self {
        Self {
            enabled: true,
            label: CONVERT_LABEL.to_string(),
        }
    }

    fn busy() -> Self {
        Self {
            enabled: false,
            label: CONVERTING_LABEL.to_string(),
        }
    }
}

/// Where the page renders. `alert` is a blocking notice to the user.
pub trait View {
    fn alert(&mut self, message: &str);
    fn render_output(&mut self, text: &str);
    fn render_button(&mut self, button: &ButtonState);
    fn render_char_count(&mut self, count: usize);
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

pub struct ConverterPage<V: View, C: Clipboard> {
    client: ConvertClient,
    view: V,
    clipboard: C,
    input: String,
    target: String,
    output: String,
    char_count: usize,
    button: ButtonState,
}

impl<V: View, C: Clipboard> ConverterPage<V, C> {
    pub fn new(client: ConvertClient, view: V, clipboard: C) -> Self {
        Self {
            client,
            view,
            clipboard,
            input: String::new(),
            target: DEFAULT_TARGET.to_string(),
            output: String::new(),
            char_count: 0,
            button: ButtonState::idle(),
        }
    }

    /// Input handler; the counter uses UTF-16 code units like a browser text field
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.char_count = text.encode_utf16().count();
        self.view.render_char_count(self.char_count);
    }

    pub fn select_target(&mut self, target: &str) {
        self.target = target.to_string();
    }

    /// The output box is editable
    pub fn set_output(&mut self, text: &str) {
        self.output = text.to_string();
        self.view.render_output(&self.output);
    }

    /// Convert handler. Sends at most one request; the button stays disabled
    /// for exactly that request. Returns true only when the output now holds
    /// converted text.
    pub async fn convert(&mut self) -> bool {
        if !self.button.enabled {
            return false;
        }

        if self.input.trim().is_empty() {
            self.view.alert(EMPTY_INPUT_ALERT);
            return false;
        }

        self.set_button(ButtonState::busy());
        self.set_output(CONVERTING_PLACEHOLDER);

        let result = self.client.convert(&self.input, &self.target).await;
        let converted = match result {
            Ok(response) => {
                self.set_output(&response.converted_text);
                true
            }
            Err(e) => {
                error!("Error converting text: {}", e);
                self.set_output(&conversion_error_text(&e.to_string()));
                self.view.alert(CONVERT_FAILED_ALERT);
                false
            }
        };

        self.set_button(ButtonState::idle());
        converted
    }

    /// Copy handler
    pub fn copy(&mut self) {
        if self.output.trim().is_empty() {
            self.view.alert(EMPTY_OUTPUT_ALERT);
            return;
        }

        match self.clipboard.write_text(&self.output) {
            Ok(()) => self.view.alert(COPIED_ALERT),
            Err(e) => {
                error!("Failed to copy text: {}", e);
                self.view.alert(COPY_FAILED_ALERT);
            }
        }
    }

    fn set_button(&mut self, button: ButtonState) {
        self.button = button;
        self.view.render_button(&self.button);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn button(&self) -> &ButtonState {
        &self.button
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

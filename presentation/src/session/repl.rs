//! Interactive session loop
//!
//! The session manager: presents the four-choice menu, dispatches to
//! handlers, and owns the conversation history for the lifetime of the
//! process. Every handler error returns control to the menu; the loop
//! only terminates through an explicit Exit (or a terminal-level read
//! failure such as EOF on stdin).

use crate::output::console::Console;
use crate::progress::spinner::ModelSpinner;
use dialoguer::{Input, Select};
use std::sync::Arc;
use topichat_application::{
    AskQuestionUseCase, ExportLastUseCase, ExportSink, LlmGateway,
};
use topichat_domain::{ConversationHistory, KnowledgeContext, MenuChoice, Message, Question};

/// Interactive topic Q&A session
pub struct SessionRepl {
    ask: AskQuestionUseCase,
    export_last: ExportLastUseCase,
    export_sink: Arc<dyn ExportSink>,
    context: KnowledgeContext,
    history: ConversationHistory,
    model_name: String,
    show_spinner: bool,
}

impl SessionRepl {
    /// Create a new session over an already-built knowledge context
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        export_sink: Arc<dyn ExportSink>,
        context: KnowledgeContext,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            ask: AskQuestionUseCase::new(gateway.clone()),
            export_last: ExportLastUseCase::new(gateway),
            export_sink,
            context,
            history: ConversationHistory::new(),
            model_name: model_name.into(),
            show_spinner: true,
        }
    }

    /// Set whether to show the model-wait spinner
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Run the session until the user exits
    pub async fn run(&mut self) {
        Console::welcome(self.context.section_count(), &self.model_name);

        loop {
            let Some(choice) = self.read_choice() else {
                // The selection mechanism itself failed (EOF, closed
                // terminal); there is no menu to return to.
                Console::farewell();
                break;
            };

            match choice {
                MenuChoice::AskSomething => {
                    let Some(input) = self.read_text() else {
                        continue;
                    };
                    self.handle_ask(&input).await;
                }
                MenuChoice::ExportLast => self.handle_export_last().await,
                MenuChoice::ExportAll => self.handle_export_all(),
                MenuChoice::Exit => {
                    Console::farewell();
                    break;
                }
            }
        }
    }

    /// Read exactly one choice from the closed menu set
    fn read_choice(&self) -> Option<MenuChoice> {
        let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        let index = Select::new()
            .with_prompt("Select one")
            .items(&labels)
            .default(0)
            .interact()
            .ok()?;
        Some(MenuChoice::ALL[index])
    }

    /// Read free-form question text; empty input is allowed here and
    /// rejected by the handler
    fn read_text(&self) -> Option<String> {
        Input::new()
            .with_prompt("Write your prompt")
            .allow_empty(true)
            .interact_text()
            .ok()
    }

    async fn handle_ask(&mut self, raw: &str) {
        // Blank input never reaches the model and never touches history
        let Some(question) = Question::try_new(raw) else {
            Console::notice("No input given, try writing something.");
            return;
        };

        let spinner = ModelSpinner::start_if(self.show_spinner, "Waiting for the model...");
        let result = self.ask.execute(&self.context, &question).await;
        spinner.finish();

        match result {
            Ok(answer) => {
                Console::answer(&answer);
                // Append only after the model call fully succeeded
                self.history
                    .push(Message::new(question.into_content(), answer));
            }
            Err(e) => Console::error(&e),
        }
    }

    async fn handle_export_last(&mut self) {
        let Some(last) = self.history.last() else {
            Console::notice("No last message to export");
            return;
        };

        let spinner = ModelSpinner::start_if(self.show_spinner, "Waiting for the model...");
        let result = self.export_last.execute(last).await;
        spinner.finish();

        match result {
            Ok(text) => Console::answer(&text),
            Err(e) => Console::error(&e),
        }
    }

    fn handle_export_all(&self) {
        if self.history.is_empty() {
            Console::notice("No chat to export");
            return;
        }

        match self.export_sink.write_history(&self.history) {
            Ok(path) => Console::exported(&path),
            Err(e) => Console::error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use topichat_application::{GatewayError, StorageError};

    // ==================== Test Mocks ====================

    struct CountingGateway {
        calls: Mutex<usize>,
        fail: bool,
    }

    impl CountingGateway {
        fn succeeding() -> Self {
            Self {
                calls: Mutex::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Mutex::new(0),
                fail: true,
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LlmGateway for CountingGateway {
        async fn complete(&self, _prompt: &str) -> Result<String, GatewayError> {
            *self.calls.lock().unwrap() += 1;
            if self.fail {
                Err(GatewayError::Network("connection refused".to_string()))
            } else {
                Ok("the answer".to_string())
            }
        }
    }

    struct CountingSink {
        writes: Mutex<usize>,
    }

    impl CountingSink {
        fn new() -> Self {
            Self {
                writes: Mutex::new(0),
            }
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl ExportSink for CountingSink {
        fn write_history(&self, _history: &ConversationHistory) -> Result<PathBuf, StorageError> {
            *self.writes.lock().unwrap() += 1;
            Ok(PathBuf::from("topichat-export.json"))
        }
    }

    fn repl(gateway: Arc<CountingGateway>, sink: Arc<CountingSink>) -> SessionRepl {
        let context = KnowledgeContext::new(vec![r#"[{"id":1,"title":"A"}]"#.to_string()]);
        SessionRepl::new(gateway, sink, context, "command-r").with_spinner(false)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_blank_input_never_calls_model_or_appends() {
        let gateway = Arc::new(CountingGateway::succeeding());
        let sink = Arc::new(CountingSink::new());
        let mut repl = repl(gateway.clone(), sink);

        repl.handle_ask("").await;
        repl.handle_ask("   \t").await;

        assert_eq!(gateway.calls(), 0);
        assert!(repl.history.is_empty());
    }

    #[tokio::test]
    async fn test_successful_ask_appends_one_message() {
        let gateway = Arc::new(CountingGateway::succeeding());
        let sink = Arc::new(CountingSink::new());
        let mut repl = repl(gateway.clone(), sink);

        repl.handle_ask("What issues exist?").await;

        assert_eq!(gateway.calls(), 1);
        assert_eq!(repl.history.len(), 1);
        assert_eq!(
            repl.history.last().unwrap(),
            &Message::new("What issues exist?", "the answer")
        );
    }

    #[tokio::test]
    async fn test_failed_ask_leaves_history_untouched() {
        let gateway = Arc::new(CountingGateway::failing());
        let sink = Arc::new(CountingSink::new());
        let mut repl = repl(gateway.clone(), sink);

        repl.handle_ask("What issues exist?").await;

        assert_eq!(gateway.calls(), 1);
        assert!(repl.history.is_empty());
    }

    #[tokio::test]
    async fn test_history_grows_by_one_per_successful_ask() {
        let gateway = Arc::new(CountingGateway::succeeding());
        let sink = Arc::new(CountingSink::new());
        let mut repl = repl(gateway, sink);

        for i in 0..3 {
            repl.handle_ask(&format!("question {i}")).await;
            assert_eq!(repl.history.len(), i + 1);
        }
        assert_eq!(repl.history.messages()[0].user, "question 0");
    }

    #[tokio::test]
    async fn test_export_all_on_empty_history_writes_nothing() {
        let gateway = Arc::new(CountingGateway::succeeding());
        let sink = Arc::new(CountingSink::new());
        let repl = repl(gateway, sink.clone());

        repl.handle_export_all();

        assert_eq!(sink.writes(), 0);
    }

    #[tokio::test]
    async fn test_export_all_writes_once_for_non_empty_history() {
        let gateway = Arc::new(CountingGateway::succeeding());
        let sink = Arc::new(CountingSink::new());
        let mut repl = repl(gateway, sink.clone());

        repl.handle_ask("What issues exist?").await;
        repl.handle_export_all();

        assert_eq!(sink.writes(), 1);
    }

    #[tokio::test]
    async fn test_export_last_on_empty_history_never_calls_model() {
        let gateway = Arc::new(CountingGateway::succeeding());
        let sink = Arc::new(CountingSink::new());
        let mut repl = repl(gateway.clone(), sink);

        repl.handle_export_last().await;

        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_export_last_calls_model_for_non_empty_history() {
        let gateway = Arc::new(CountingGateway::succeeding());
        let sink = Arc::new(CountingSink::new());
        let mut repl = repl(gateway.clone(), sink);

        repl.handle_ask("What issues exist?").await;
        repl.handle_export_last().await;

        // One ask call plus one export call
        assert_eq!(gateway.calls(), 2);
        // Export never appends to history
        assert_eq!(repl.history.len(), 1);
    }
}

//! Presentation-facing session: explicit calls in place of UI callbacks.

use std::path::Path;

use crate::app::gateway::ExecutionGateway;
use crate::app::synthesizer::CommandSynthesizer;
use crate::app::transcript::render_transcript;
use crate::domain::{AppError, Dialect, SynthesisRequest, SynthesisResult, TemplateRenderer};
use crate::ports::{ChatCompletionClient, ClipboardWriter, HostRuntime};
use crate::services::MinijinjaTemplateRenderer;

/// One interactive session: a synthesizer with its history plus a gateway.
pub struct Session<C, W, H, R = MinijinjaTemplateRenderer>
where
    C: ChatCompletionClient,
    W: ClipboardWriter,
    H: HostRuntime,
    R: TemplateRenderer,
{
    synthesizer: CommandSynthesizer<C, W, R>,
    gateway: ExecutionGateway<H>,
}

impl<C, W, H, R> Session<C, W, H, R>
where
    C: ChatCompletionClient,
    W: ClipboardWriter,
    H: HostRuntime,
    R: TemplateRenderer,
{
    pub fn new(synthesizer: CommandSynthesizer<C, W, R>, gateway: ExecutionGateway<H>) -> Self {
        Self { synthesizer, gateway }
    }

    /// Generate a script without executing it.
    pub fn fetch(&mut self, task: &str, dialect: Dialect) -> Result<SynthesisResult, AppError> {
        if task.trim().is_empty() {
            return Err(AppError::EmptyTask);
        }
        self.synthesizer.synthesize(&SynthesisRequest::new(task, dialect))
    }

    /// Generate a script and immediately execute it. Nothing runs when the
    /// fetch fails.
    pub fn fetch_and_execute(
        &mut self,
        task: &str,
        dialect: Dialect,
    ) -> Result<SynthesisResult, AppError> {
        let result = self.fetch(task, dialect)?;
        self.gateway.execute(result.content(), dialect);
        Ok(result)
    }

    /// Execute the newest assistant turn again, if there is one.
    pub fn execute_last(&mut self) -> Option<Dialect> {
        let last = self.synthesizer.history().last()?;
        let dialect = last.language()?;
        let content = last.content().to_string();
        self.gateway.execute(&content, dialect);
        Some(dialect)
    }

    /// Execute a script file in the dialect given by its extension.
    pub fn execute_file(&mut self, path: &Path) -> Result<Dialect, AppError> {
        self.gateway.run_file(path)
    }

    pub fn clear(&mut self) {
        self.synthesizer.clear_history();
    }

    pub fn transcript(&self) -> String {
        render_transcript(self.synthesizer.history().snapshot())
    }

    pub fn synthesizer(&self) -> &CommandSynthesizer<C, W, R> {
        &self.synthesizer
    }

    pub fn synthesizer_mut(&mut self) -> &mut CommandSynthesizer<C, W, R> {
        &mut self.synthesizer
    }

    pub fn gateway(&self) -> &ExecutionGateway<H> {
        &self.gateway
    }
}

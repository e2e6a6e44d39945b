//! Wiring of concrete adapters behind the public API.

use std::path::PathBuf;

use crate::app::gateway::{ExecutionGateway, PythonRoute};
use crate::app::launcher;
use crate::app::session::Session;
use crate::app::synthesizer::CommandSynthesizer;
use crate::domain::{AppError, HostConfig, LauncherEntry, PythonEmbedding, Settings, SettingsNamespace};
use crate::ports::{ClipboardWriter, HostRuntime, NoopClipboard, SettingsStore};
use crate::services::{
    ArboardClipboard, ConsoleHostRuntime, FilesystemSettingsStore, HttpChatClient,
    MinijinjaTemplateRenderer, ProcessHostRuntime, ScriptStager,
};

/// Session backed by the HTTP chat client and runtime-selected adapters.
pub type AppSession = Session<HttpChatClient, Box<dyn ClipboardWriter>, Box<dyn HostRuntime>>;

/// Gateway over the runtime-selected host adapter.
pub type AppGateway = ExecutionGateway<Box<dyn HostRuntime>>;

/// Adapter selection for [`open_session`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Skip the system clipboard.
    pub no_clipboard: bool,
    /// Print host scripts instead of running them.
    pub dry_run: bool,
}

pub fn settings_store() -> Result<FilesystemSettingsStore, AppError> {
    FilesystemSettingsStore::for_namespace(SettingsNamespace::DEFAULT)
}

/// Load stored settings with environment overrides applied.
pub fn load_settings() -> Result<Settings, AppError> {
    Ok(settings_store()?.load()?.with_env_overrides())
}

/// Persist a new API key. Returns the settings file location.
pub fn set_api_key(api_key: &str) -> Result<PathBuf, AppError> {
    let store = settings_store()?;
    let mut settings = store.load()?;
    settings.api_key = api_key.trim().to_string();
    store.save(&settings)?;
    Ok(store.location())
}

pub fn open_session(settings: &Settings, options: SessionOptions) -> Result<AppSession, AppError> {
    let client = HttpChatClient::new(&settings.api)?;
    let synthesizer =
        CommandSynthesizer::new(client, clipboard(options.no_clipboard), settings.credentials());
    Ok(Session::new(synthesizer, open_gateway(settings, options.dry_run)))
}

/// Gateway alone, for running existing script files without a chat client.
pub fn open_gateway(settings: &Settings, dry_run: bool) -> AppGateway {
    ExecutionGateway::new(
        host_runtime(&settings.host, dry_run),
        python_route(&settings.host, dry_run),
    )
}

/// Register launchers for `entries`, skipping the ones that fail.
pub fn register_launchers(
    settings: &Settings,
    entries: &[LauncherEntry],
    dry_run: bool,
) -> Vec<String> {
    let mut runtime = host_runtime(&settings.host, dry_run);
    launcher::register_launchers(&MinijinjaTemplateRenderer::new(), entries, &mut runtime)
}

fn clipboard(disabled: bool) -> Box<dyn ClipboardWriter> {
    if disabled {
        return Box::new(NoopClipboard);
    }
    match ArboardClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(err) => {
            tracing::warn!("system clipboard unavailable, replies will not be copied: {err}");
            Box::new(NoopClipboard)
        }
    }
}

fn host_runtime(host: &HostConfig, dry_run: bool) -> Box<dyn HostRuntime> {
    match (&host.program, dry_run) {
        (Some(program), false) => Box::new(ProcessHostRuntime::new(
            program.clone(),
            host.args.clone(),
            ScriptStager::new(host.staging_dir()),
        )),
        (None, false) => {
            tracing::warn!("no host program configured, printing scripts instead of running them");
            Box::new(ConsoleHostRuntime::stdout())
        }
        (_, true) => Box::new(ConsoleHostRuntime::stdout()),
    }
}

/// Scripts that are only printed never reach a host, so nothing is staged for
/// them.
fn python_route(host: &HostConfig, dry_run: bool) -> PythonRoute {
    if dry_run || host.program.is_none() {
        return PythonRoute::Inline;
    }
    match host.python_embedding {
        PythonEmbedding::File => PythonRoute::StagedFile(ScriptStager::new(host.staging_dir())),
        PythonEmbedding::Inline => PythonRoute::Inline,
    }
}

//! Toolbar launcher registration.
//!
//! A launcher is a host `macroScript` that runs a script file when clicked:
//! `filein` for host-language files, `python.executeFile` for python files.

use crate::app::gateway::prepare_file;
use crate::assets::read_asset;
use crate::domain::script::{escape_string_literal, verbatim_path_literal};
use crate::domain::{
    AppError, Dialect, LauncherEntry, MacroScript, TemplateContext, TemplateRenderer,
};
use crate::ports::HostRuntime;

/// Render the registration script for one launcher.
pub fn render_launcher<R: TemplateRenderer>(
    renderer: &R,
    entry: &LauncherEntry,
) -> Result<MacroScript, AppError> {
    let dialect = prepare_file(&entry.path)?;
    let absolute = std::path::absolute(&entry.path)?;
    // Validates that the path fits a verbatim literal; the template adds the quotes.
    verbatim_path_literal(&absolute)?;

    let template_path = match dialect {
        Dialect::MaxScript => "macros/maxscript_launcher.j2",
        Dialect::Python => "macros/python_launcher.j2",
    };
    let template = read_asset(template_path).ok_or_else(|| AppError::TemplateRender {
        template: template_path.to_string(),
        reason: "template asset is missing".to_string(),
    })?;

    let uid = entry.uid();
    let context = TemplateContext::new()
        .with_var("uid", uid.clone())
        .with_var("category", escape_string_literal(&entry.category))
        .with_var("name", escape_string_literal(&entry.name))
        .with_var("filepath", absolute.to_string_lossy());
    let source = renderer.render(template, &context, template_path)?;

    Ok(MacroScript { uid, dialect, source })
}

/// Register every entry with the host. Entries that cannot be rendered or
/// submitted are logged and skipped. Returns the registered launcher ids.
pub fn register_launchers<R, H>(
    renderer: &R,
    entries: &[LauncherEntry],
    runtime: &mut H,
) -> Vec<String>
where
    R: TemplateRenderer,
    H: HostRuntime,
{
    let mut registered = Vec::new();
    for entry in entries {
        let script = match render_launcher(renderer, entry) {
            Ok(script) => script,
            Err(err) => {
                tracing::warn!(name = %entry.name, "skipping launcher: {err}");
                continue;
            }
        };
        match runtime.submit(&script.source) {
            Ok(()) => {
                tracing::info!(uid = %script.uid, dialect = %script.dialect, "registered launcher");
                registered.push(script.uid);
            }
            Err(err) => tracing::warn!(uid = %script.uid, "launcher registration failed: {err}"),
        }
    }
    registered
}

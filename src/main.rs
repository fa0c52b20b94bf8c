use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use caddy::cli::{Action, CliArgs, WorkspaceView};
use caddy::config::{CaddyConfig, PersistenceBackend};
use caddy::messages::Msg;
use caddy::model::AppModel;
use caddy::panel::PanelVisibility;
use caddy::persistence::{self, PersistenceGateway};
use caddy::update::update;

fn main() -> Result<()> {
    caddy::tracing::init();

    let args = CliArgs::parse();
    let mut config = match &args.config {
        Some(path) => CaddyConfig::load_from(path),
        None => CaddyConfig::load(),
    };
    if let Some(dir) = args.store {
        config.persistence.backend = PersistenceBackend::Json;
        config.persistence.directory = Some(dir);
    }
    if config.persistence.backend == PersistenceBackend::Memory {
        tracing::warn!("In-memory persistence: nothing is kept after this command exits");
    }

    let mut gateway = persistence::open_gateway(&config.persistence)
        .context("Failed to open workspace storage")?;

    match args.command.into_action() {
        Action::Create { name, layout } => {
            let mode = layout.unwrap_or(config.default_layout_mode);
            let workspace = persistence::create_workspace(
                gateway.as_mut(),
                &name,
                config.workspace_size,
                mode,
            )?;
            print_json(&WorkspaceView::new(&workspace))
        }
        Action::List => print_json(&gateway.list()?),
        Action::Show(id) => {
            let workspace = persistence::load_workspace(gateway.as_ref(), &id)?;
            print_json(&WorkspaceView::new(&workspace))
        }
        Action::Apply { workspace, msg } => {
            let workspace = persistence::load_workspace(gateway.as_ref(), &workspace)?;
            let mut model = AppModel::from_workspace(workspace, config);
            model.panels = load_panels(gateway.as_ref())?;
            apply(&mut model, gateway.as_mut(), msg)?;
            print_json(&WorkspaceView::new(&model.workspace))
        }
        Action::Panels(msg) => {
            let mut panels = load_panels(gateway.as_ref())?;
            if let Some(msg) = msg {
                // Panels live outside any workspace; a throwaway one carries the model
                let workspace = caddy::model::Workspace::new("panels", config.workspace_size)?;
                let mut model = AppModel::from_workspace(workspace, config);
                model.panels = panels;
                apply(&mut model, gateway.as_mut(), Msg::Panel(msg))?;
                panels = model.panels;
            }
            print_json(&panels.snapshot())
        }
    }
}

/// Run one message and its resulting command
fn apply(model: &mut AppModel, gateway: &mut dyn PersistenceGateway, msg: Msg) -> Result<()> {
    let Some(cmd) = update(model, msg).map_err(|e| anyhow::anyhow!(e.user_message()))? else {
        tracing::debug!("nothing changed");
        return Ok(());
    };
    let outcome = cmd.execute(gateway).context("Failed to save")?;
    for message in outcome.messages {
        eprintln!("{}", message);
    }
    Ok(())
}

fn load_panels(gateway: &dyn PersistenceGateway) -> Result<PanelVisibility> {
    match gateway.load_panels()? {
        Some(snapshot) => match PanelVisibility::restore(&snapshot) {
            Ok(panels) => Ok(panels),
            Err(e) => {
                tracing::warn!("Ignoring stored panel state: {}", e);
                Ok(PanelVisibility::new())
            }
        },
        None => Ok(PanelVisibility::new()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

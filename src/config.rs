use crate::error::{AutorecError, Result};
use crate::types::config::{AutorecConfig, EngineConfig};
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "autorec.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".autorec/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/autorec/config.toml";

pub fn load_config(root: &Path) -> Result<Option<AutorecConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Resolved engine settings for `root`; built-in defaults when the root has
/// no `autorec.toml`.
pub fn load_engine_config(root: &Path) -> Result<EngineConfig> {
    Ok(load_config(root)?
        .map(|cfg| cfg.engine_config())
        .unwrap_or_default())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<AutorecConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([repo_path, root.join(DEFAULT_LOCAL_FILE)]);

    let mut merged = Table::new();
    for path in layers.filter(|path| path.is_file()) {
        overlay_table(&mut merged, read_layer(&path)?);
    }

    let cfg: AutorecConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| AutorecError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| AutorecError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Later layers win key by key; nested tables are merged rather than
/// replaced.
fn overlay_table(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(nested)) => overlay_table(existing, nested),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

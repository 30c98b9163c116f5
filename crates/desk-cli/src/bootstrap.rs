use std::path::{Path, PathBuf};

use anyhow::Context;
use desk_config::DeskConfig;

use crate::cli::GlobalFlags;

/// Directory holding `.deskline/` and `.env`: `--project`, else the cwd.
pub fn project_root(flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    match &flags.project {
        Some(project) => {
            let root = PathBuf::from(project);
            anyhow::ensure!(
                root.is_dir(),
                "invalid --project '{}': directory does not exist",
                root.display()
            );
            Ok(root)
        }
        None => std::env::current_dir().context("failed to determine current directory"),
    }
}

/// Load `.env` from the project root, then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DeskConfig> {
    let root = project_root(flags)?;
    load_project_dotenv(&root)?;
    DeskConfig::load_from(&root).context("failed to load deskline configuration")
}

fn load_project_dotenv(root: &Path) -> anyhow::Result<()> {
    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

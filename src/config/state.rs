use crate::config::environment::EnvironmentVariables;

#[derive(Clone, Debug)]
pub struct AppState {
    pub env: EnvironmentVariables,
}

impl AppState {
    pub fn from_env() -> anyhow::Result<Self> {
        let env: EnvironmentVariables = EnvironmentVariables::load()?;
        Ok(Self { env })
    }
}
